// Post-draft grading: optimal starting lineup, value versus market, letter grades.
//
// Value is measured against ADP order. The drafted players that carry an
// ADP are sorted by it and laid onto the pick numbers those same players were
// actually taken at; the pick a player "should" have gone at is its slot in
// that mapping. Because both sides range over the same set of pick numbers,
// the value scores of all teams sum to exactly zero.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GradeThresholds;
use crate::draft::pick::{DraftResult, Pick};
use crate::draft::roster::{SlotKind, STARTER_SLOTS};
use crate::player::Position;
use crate::settings::ScoringFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Grade a per-pick average value against fixed thresholds.
    pub fn from_average(avg: f64, t: &GradeThresholds) -> Self {
        if avg >= t.a {
            LetterGrade::A
        } else if avg >= t.b {
            LetterGrade::B
        } else if avg >= t.c {
            LetterGrade::C
        } else if avg >= t.d {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }
}

/// One pick annotated with its value relative to ADP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradedPick {
    pub overall_pick: u32,
    pub round: u32,
    pub player_id: String,
    pub player_name: String,
    pub position: Position,
    /// Positive: taken later than the market expected. Negative: a reach.
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamGrade {
    pub team_index: u32,
    pub total_projected_points: f64,
    pub value_score: f64,
    pub letter_grade: LetterGrade,
    pub best_value_pick: Option<GradedPick>,
    pub biggest_reach: Option<GradedPick>,
}

/// Grade every team in a draft, in team-index order.
pub fn grade(result: &DraftResult, thresholds: &GradeThresholds) -> Vec<TeamGrade> {
    let scoring = result.settings.scoring();
    let rounds = result.settings.rounds();
    let expected = expected_picks(&result.picks);
    report_data_gaps(&result.picks, scoring);

    (1..=result.settings.teams())
        .map(|team_index| {
            let team_picks: Vec<&Pick> = result.team_picks(team_index).collect();

            let graded: Vec<GradedPick> = team_picks
                .iter()
                .map(|p| GradedPick {
                    overall_pick: p.overall_pick,
                    round: p.round,
                    player_id: p.player.id.clone(),
                    player_name: p.player.name.clone(),
                    position: p.player.position,
                    delta: expected
                        .get(p.player.id.as_str())
                        .map_or(0.0, |&exp| p.overall_pick as f64 - exp as f64),
                })
                .collect();

            let value_score: f64 = graded.iter().map(|g| g.delta).sum();
            let letter_grade = LetterGrade::from_average(value_score / rounds as f64, thresholds);

            // Strict comparisons keep the earliest pick on ties.
            let mut best_value_pick: Option<&GradedPick> = None;
            let mut biggest_reach: Option<&GradedPick> = None;
            for g in &graded {
                if g.delta > 0.0 && best_value_pick.map_or(true, |b| g.delta > b.delta) {
                    best_value_pick = Some(g);
                }
                if g.delta < 0.0 && biggest_reach.map_or(true, |r| g.delta < r.delta) {
                    biggest_reach = Some(g);
                }
            }

            TeamGrade {
                team_index,
                total_projected_points: optimal_lineup_points(&team_picks, scoring),
                value_score,
                letter_grade,
                best_value_pick: best_value_pick.cloned(),
                biggest_reach: biggest_reach.cloned(),
            }
        })
        .collect()
}

/// Market-expected pick number for every drafted player that has an ADP.
fn expected_picks(picks: &[Pick]) -> HashMap<&str, u32> {
    let mut with_adp: Vec<&Pick> = picks.iter().filter(|p| p.player.adp.is_some()).collect();
    let mut slots: Vec<u32> = with_adp.iter().map(|p| p.overall_pick).collect();
    slots.sort_unstable();

    with_adp.sort_by(|a, b| {
        let (x, y) = (a.player.adp.unwrap_or(0.0), b.player.adp.unwrap_or(0.0));
        x.total_cmp(&y).then_with(|| a.player.id.cmp(&b.player.id))
    });

    with_adp
        .into_iter()
        .zip(slots)
        .map(|(p, slot)| (p.player.id.as_str(), slot))
        .collect()
}

fn report_data_gaps(picks: &[Pick], scoring: ScoringFormat) {
    let mut missing_adp = 0;
    let mut missing_projection = 0;
    for p in picks {
        if p.player.adp.is_none() {
            debug!("{} ({}) has no ADP; graded as neutral value", p.player.name, p.player.id);
            missing_adp += 1;
        }
        if p.player.projection(scoring).is_none() {
            debug!(
                "{} ({}) has no {} projection; counted as zero points",
                p.player.name, p.player.id, scoring
            );
            missing_projection += 1;
        }
    }
    if missing_adp > 0 || missing_projection > 0 {
        warn!(
            "Grading data gaps: {} drafted players without ADP, {} without {} projections",
            missing_adp, missing_projection, scoring
        );
    }
}

/// Projected points of the best legal starting lineup from a team's picks.
///
/// Dedicated slots take the top projected players at their position, then
/// FLEX takes the best remaining RB/WR/TE. Because FLEX accepts a superset of
/// the positions whose dedicated slots it competes with, this greedy fill is
/// optimal for the schema.
pub fn optimal_lineup_points(team_picks: &[&Pick], scoring: ScoringFormat) -> f64 {
    let mut pool: Vec<(Position, f64)> = team_picks
        .iter()
        .map(|p| (p.player.position, p.player.projection(scoring).unwrap_or(0.0)))
        .collect();
    pool.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut used = vec![false; pool.len()];
    let mut total = 0.0;
    let mut take_best = |accepts: &dyn Fn(Position) -> bool, used: &mut Vec<bool>| {
        if let Some(i) = (0..pool.len()).find(|&i| !used[i] && accepts(pool[i].0)) {
            used[i] = true;
            total += pool[i].1;
        }
    };

    for slot in STARTER_SLOTS.iter().filter(|s| **s != SlotKind::Flex) {
        take_best(&|pos| slot.accepts(pos), &mut used);
    }
    for slot in STARTER_SLOTS.iter().filter(|s| **s == SlotKind::Flex) {
        take_best(&|pos| slot.accepts(pos), &mut used);
    }
    total
}
