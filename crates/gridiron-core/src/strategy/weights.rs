// Per-strategy positional weight tables.
//
// Each strategy maps to one `StrategyWeights` value. A table is a list of
// phase bands keyed by round fraction (`round / rounds_total`); the first band
// whose `until` is >= the current fraction supplies one multiplier per
// position. Multipliers are relative to base value: 0.6 means +60%.

use serde::{Deserialize, Serialize};

use crate::player::Position;
use crate::settings::Strategy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseBand {
    /// Upper bound (inclusive) of the round fraction this band covers.
    pub until: f64,
    pub qb: f64,
    pub rb: f64,
    pub wr: f64,
    pub te: f64,
    pub k: f64,
    pub dst: f64,
}

impl PhaseBand {
    pub fn weight(&self, pos: Position) -> f64 {
        match pos {
            Position::Quarterback => self.qb,
            Position::RunningBack => self.rb,
            Position::WideReceiver => self.wr,
            Position::TightEnd => self.te,
            Position::Kicker => self.k,
            Position::Defense => self.dst,
        }
    }

    pub(crate) fn weights(&self) -> [f64; 6] {
        [self.qb, self.rb, self.wr, self.te, self.k, self.dst]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyWeights {
    pub bands: Vec<PhaseBand>,
    /// Extra multiplier for the two best available QBs while the team has
    /// none and the round is within `scoring.elite_qb_rounds`.
    #[serde(default)]
    pub elite_qb_boost: f64,
    /// Scale of the projection-versus-market upside term.
    #[serde(default)]
    pub upside_weight: f64,
}

impl StrategyWeights {
    /// Band for a round fraction. Fractions past the last band use the last band.
    pub fn band(&self, fraction: f64) -> Option<&PhaseBand> {
        self.bands
            .iter()
            .find(|b| fraction <= b.until)
            .or_else(|| self.bands.last())
    }

    pub fn positional_weight(&self, pos: Position, fraction: f64) -> f64 {
        self.band(fraction).map_or(0.0, |b| b.weight(pos))
    }
}

/// One weight table per strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyTables {
    pub balanced: StrategyWeights,
    pub hero_rb: StrategyWeights,
    pub zero_rb: StrategyWeights,
    pub elite_qb: StrategyWeights,
    pub upside_chaser: StrategyWeights,
}

impl StrategyTables {
    pub fn for_strategy(&self, strategy: Strategy) -> &StrategyWeights {
        match strategy {
            Strategy::Balanced => &self.balanced,
            Strategy::HeroRb => &self.hero_rb,
            Strategy::ZeroRb => &self.zero_rb,
            Strategy::EliteQb => &self.elite_qb,
            Strategy::UpsideChaser => &self.upside_chaser,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Strategy, &StrategyWeights)> {
        Strategy::ALL.into_iter().map(move |s| (s, self.for_strategy(s)))
    }
}

#[allow(clippy::too_many_arguments)]
fn band(until: f64, qb: f64, rb: f64, wr: f64, te: f64, k: f64, dst: f64) -> PhaseBand {
    PhaseBand {
        until,
        qb,
        rb,
        wr,
        te,
        k,
        dst,
    }
}

impl Default for StrategyTables {
    fn default() -> Self {
        StrategyTables {
            balanced: StrategyWeights {
                bands: vec![
                    band(0.15, -0.15, 0.05, 0.0, -0.05, -0.9, -0.9),
                    band(0.25, -0.1, 0.05, 0.0, 0.0, -0.9, -0.9),
                    band(0.6, 0.0, 0.0, 0.0, 0.0, -0.6, -0.6),
                    band(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                ],
                elite_qb_boost: 0.0,
                upside_weight: 0.0,
            },
            hero_rb: StrategyWeights {
                bands: vec![
                    band(0.15, -0.3, 0.6, -0.1, -0.2, -0.9, -0.9),
                    band(0.25, -0.2, 0.0, 0.15, 0.05, -0.9, -0.9),
                    band(0.6, 0.05, -0.4, 0.2, 0.1, -0.6, -0.6),
                    band(1.0, 0.0, -0.1, 0.05, 0.0, 0.0, 0.0),
                ],
                elite_qb_boost: 0.0,
                upside_weight: 0.0,
            },
            zero_rb: StrategyWeights {
                bands: vec![
                    band(0.15, -0.2, -0.6, 0.25, 0.2, -0.9, -0.9),
                    band(0.25, -0.1, -0.6, 0.25, 0.2, -0.9, -0.9),
                    band(0.6, 0.0, 0.25, 0.0, 0.0, -0.6, -0.6),
                    band(1.0, 0.0, 0.15, 0.0, 0.0, 0.0, 0.0),
                ],
                elite_qb_boost: 0.0,
                upside_weight: 0.0,
            },
            elite_qb: StrategyWeights {
                bands: vec![
                    band(0.15, 0.1, 0.0, 0.0, -0.05, -0.9, -0.9),
                    band(0.25, 0.1, 0.0, 0.0, 0.0, -0.9, -0.9),
                    band(0.6, -0.3, 0.05, 0.05, 0.0, -0.6, -0.6),
                    band(1.0, -0.2, 0.0, 0.0, 0.0, 0.0, 0.0),
                ],
                elite_qb_boost: 0.8,
                upside_weight: 0.0,
            },
            upside_chaser: StrategyWeights {
                bands: vec![
                    band(0.15, -0.15, 0.05, 0.05, -0.05, -0.9, -0.9),
                    band(0.25, -0.1, 0.05, 0.05, 0.0, -0.9, -0.9),
                    band(0.6, 0.0, 0.05, 0.05, 0.0, -0.6, -0.6),
                    band(1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0),
                ],
                elite_qb_boost: 0.0,
                upside_weight: 0.5,
            },
        }
    }
}
