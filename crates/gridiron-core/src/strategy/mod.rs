// Strategy engine: scores every eligible player on the board and returns the
// team's next pick.
//
// All strategies share one score shape:
//
//   score = base_value - reach_penalty + positional_bias + need_bonus - bye_penalty
//
// and differ only by their weight table (see `weights`). A bounded jitter drawn
// from the threaded `RngState` is applied before comparison.

pub mod weights;

use std::cmp::Ordering;

use tracing::trace;

use crate::config::EngineConfig;
use crate::draft::roster::TeamRoster;
use crate::player::{Player, Position};
use crate::rng::RngState;
use crate::settings::{ScoringFormat, Strategy};

/// A player still on the board, with the rank data the scoring terms need.
#[derive(Debug, Clone, PartialEq)]
pub struct Prospect {
    pub player: Player,
    /// 1-based rank in market (ADP) order.
    pub adp_rank: usize,
    /// 1-based rank by projected points for the draft's scoring format.
    pub projection_rank: usize,
}

/// Build the initial board from a pool listing. `players` must already be in
/// ADP order, as `PlayerSource::list_players` returns them.
pub fn build_board(players: Vec<Player>, scoring: ScoringFormat) -> Vec<Prospect> {
    let mut by_projection: Vec<usize> = (0..players.len()).collect();
    by_projection.sort_by(|&a, &b| {
        let pa = players[a].projection(scoring).unwrap_or(0.0);
        let pb = players[b].projection(scoring).unwrap_or(0.0);
        pb.total_cmp(&pa).then(a.cmp(&b))
    });
    let mut projection_rank = vec![0usize; players.len()];
    for (rank, idx) in by_projection.into_iter().enumerate() {
        projection_rank[idx] = rank + 1;
    }

    players
        .into_iter()
        .enumerate()
        .map(|(i, player)| Prospect {
            player,
            adp_rank: i + 1,
            projection_rank: projection_rank[i],
        })
        .collect()
}

/// Where in the draft a pick is being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickContext {
    pub overall_pick: u32,
    pub round: u32,
    pub rounds_total: u32,
    pub teams: u32,
}

impl PickContext {
    pub fn round_fraction(&self) -> f64 {
        self.round as f64 / self.rounds_total as f64
    }

    pub fn last_pick(&self) -> u32 {
        self.teams * self.rounds_total
    }
}

/// The individual terms of a player's score, before jitter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreBreakdown {
    pub base_value: f64,
    pub reach_penalty: f64,
    pub positional_bias: f64,
    pub need_bonus: f64,
    pub bye_penalty: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.base_value - self.reach_penalty + self.positional_bias + self.need_bonus
            - self.bye_penalty
    }
}

/// Score one prospect for a team. Pure: no randomness is consumed here.
pub fn score(
    strategy: Strategy,
    prospect: &Prospect,
    ctx: &PickContext,
    roster: &TeamRoster,
    elite_qbs: &[&str],
    config: &EngineConfig,
) -> ScoreBreakdown {
    let s = &config.scoring;
    let weights = config.strategies.for_strategy(strategy);
    let player = &prospect.player;
    let pos = player.position;
    let teams = ctx.teams as f64;
    let fraction = ctx.round_fraction();

    let adp = player.adp_or(ctx.last_pick() as f64);
    let base_value = s.base_scale / (adp + s.base_offset);

    let reach_by = adp - ctx.overall_pick as f64 - s.reach_grace_rounds * teams;
    let reach_penalty = if reach_by > 0.0 {
        s.reach_weight * reach_by / teams
    } else {
        0.0
    };

    let mut positional_bias = base_value * weights.positional_weight(pos, fraction);
    if weights.elite_qb_boost > 0.0
        && pos == Position::Quarterback
        && ctx.round <= s.elite_qb_rounds
        && roster.count(Position::Quarterback) == 0
        && elite_qbs.contains(&player.id.as_str())
    {
        positional_bias += base_value * weights.elite_qb_boost;
    }
    if weights.upside_weight > 0.0 {
        let gap = (prospect.adp_rank as f64 - prospect.projection_rank as f64) / (2.0 * teams);
        positional_bias += weights.upside_weight * base_value * gap.clamp(-1.0, 1.0);
    }

    let need_bonus = if fraction > s.need_onset {
        let progress = ((fraction - s.need_onset) / (1.0 - s.need_onset)).min(1.0);
        s.need_weight * roster.unfilled_dedicated(pos) as f64 * progress
    } else {
        0.0
    };

    let starts = roster.slot_for(pos).is_some_and(|slot| slot.is_starter());
    let bye_clash = match player.bye_week {
        Some(bye) if starts => roster.starters_at(pos).any(|p| p.bye_week == Some(bye)),
        _ => false,
    };
    let bye_penalty = if bye_clash {
        s.bye_penalty * base_value
    } else {
        0.0
    };

    ScoreBreakdown {
        base_value,
        reach_penalty,
        positional_bias,
        need_bonus,
        bye_penalty,
    }
}

/// Choose the next pick for a team.
///
/// Only prospects whose position is in the roster's open needs are
/// considered. Returns the board index of the chosen prospect (or `None` when
/// nothing on the board fits) together with the advanced RNG state.
///
/// Ties after jitter go to the lower ADP, then the lexicographically smaller id.
pub fn select_pick(
    strategy: Strategy,
    ctx: &PickContext,
    board: &[Prospect],
    roster: &TeamRoster,
    rng: RngState,
    config: &EngineConfig,
) -> (Option<usize>, RngState) {
    let needs = roster.open_needs();
    if needs.is_empty() {
        return (None, rng);
    }

    let elite_qbs: Vec<&str> = board
        .iter()
        .filter(|p| p.player.position == Position::Quarterback)
        .take(2)
        .map(|p| p.player.id.as_str())
        .collect();
    let neutral_adp = ctx.last_pick() as f64;
    let jitter = config.scoring.jitter;

    let mut rng = rng;
    let mut best: Option<(usize, f64)> = None;
    for (idx, prospect) in board.iter().enumerate() {
        if !needs.contains(&prospect.player.position) {
            continue;
        }
        let raw = score(strategy, prospect, ctx, roster, &elite_qbs, config).total();
        let (u, next) = rng.next();
        rng = next;
        let total = raw + raw.abs() * jitter * (2.0 * u - 1.0);

        let better = match best {
            None => true,
            Some((best_idx, best_total)) => {
                let incumbent = &board[best_idx].player;
                match total.total_cmp(&best_total) {
                    Ordering::Greater => true,
                    Ordering::Less => false,
                    Ordering::Equal => prospect
                        .player
                        .adp_or(neutral_adp)
                        .total_cmp(&incumbent.adp_or(neutral_adp))
                        .then_with(|| prospect.player.id.cmp(&incumbent.id))
                        .is_lt(),
                }
            }
        };
        if better {
            best = Some((idx, total));
        }
    }

    if let Some((idx, total)) = best {
        trace!(
            "pick {} team {} ({}): {} {} score {:.3}",
            ctx.overall_pick,
            roster.team_index,
            strategy,
            board[idx].player.position,
            board[idx].player.name,
            total
        );
    }
    (best.map(|(idx, _)| idx), rng)
}
