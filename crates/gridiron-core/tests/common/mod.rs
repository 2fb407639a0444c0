// Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use gridiron_core::player::{Player, Position};
use gridiron_core::pool::PlayerPool;
use gridiron_core::settings::ScoringFormat;

const NFL_TEAMS: &[&str] = &[
    "ARI", "ATL", "BAL", "BUF", "CAR", "CHI", "CIN", "CLE", "DAL", "DEN", "DET", "GB", "HOU",
    "IND", "JAX", "KC", "LAC", "LAR", "LV", "MIA", "MIN", "NE", "NO", "NYG", "NYJ", "PHI", "PIT",
    "SEA", "SF", "TB", "TEN", "WAS",
];

/// (position, count, adp of the first player, adp step, ppr points of the
/// first player, points lost per rank, points per reception-ish bonus in ppr)
const SHAPE: &[(Position, usize, f64, f64, f64, f64, f64)] = &[
    (Position::RunningBack, 100, 1.0, 2.6, 330.0, 2.6, 45.0),
    (Position::WideReceiver, 110, 1.5, 2.4, 340.0, 2.4, 80.0),
    (Position::Quarterback, 45, 20.0, 6.0, 390.0, 4.0, 0.0),
    (Position::TightEnd, 45, 15.0, 7.0, 250.0, 4.0, 60.0),
    (Position::Kicker, 24, 140.0, 4.0, 150.0, 2.0, 0.0),
    (Position::Defense, 24, 130.0, 4.0, 140.0, 2.5, 0.0),
];

/// Beyond this rank kickers and defenses have no published ADP.
const LAST_RANKED_SPECIALIST: usize = 16;

/// A 348-player pool shaped like a real redraft board: enough depth at every
/// position for 14 teams x 18 rounds, projections that loosely (not exactly)
/// follow ADP, and unranked deep kickers and defenses.
pub fn synthetic_players() -> Vec<Player> {
    let mut players = Vec::new();
    for &(pos, count, first_adp, step, top_points, decay, reception_bonus) in SHAPE {
        for i in 0..count {
            let specialist = matches!(pos, Position::Kicker | Position::Defense);
            let adp = if specialist && i >= LAST_RANKED_SPECIALIST {
                None
            } else {
                Some(first_adp + i as f64 * step)
            };
            // Deterministic wobble so projection order differs from ADP order.
            let wobble = ((i * 37) % 11) as f64 * 3.0 - 15.0;
            let ppr = (top_points - i as f64 * decay + wobble).max(10.0);
            let half = ppr - reception_bonus / 2.0;
            let standard = ppr - reception_bonus;

            let mut projected_points = BTreeMap::new();
            projected_points.insert(ScoringFormat::Ppr, ppr);
            projected_points.insert(ScoringFormat::HalfPpr, half.max(5.0));
            projected_points.insert(ScoringFormat::Standard, standard.max(5.0));

            players.push(Player {
                id: format!("{}-{:03}", pos.display_str().to_lowercase(), i + 1),
                name: format!("{} Prospect {}", pos.display_str(), i + 1),
                position: pos,
                team_abbr: NFL_TEAMS[(i * 7 + pos.index()) % NFL_TEAMS.len()].to_string(),
                bye_week: Some((5 + (i + pos.index()) % 10) as u8),
                adp,
                projected_points,
            });
        }
    }
    players
}

pub fn synthetic_pool() -> PlayerPool {
    PlayerPool::new(synthetic_players())
}

/// The `n` earliest-ADP players of the synthetic pool.
pub fn top_of_pool(n: usize) -> PlayerPool {
    let mut players = synthetic_players();
    players.retain(|p| p.adp.is_some());
    players.sort_by(|a, b| {
        a.adp
            .unwrap_or(f64::MAX)
            .total_cmp(&b.adp.unwrap_or(f64::MAX))
            .then_with(|| a.id.cmp(&b.id))
    });
    players.truncate(n);
    PlayerPool::new(players)
}

/// The synthetic pool with only the first `keep` players at `pos`.
pub fn pool_limiting(pos: Position, keep: usize) -> PlayerPool {
    let mut seen = 0;
    let players = synthetic_players()
        .into_iter()
        .filter(|p| {
            if p.position != pos {
                return true;
            }
            seen += 1;
            seen <= keep
        })
        .collect();
    PlayerPool::new(players)
}

/// One player short of a full 10-team, 15-round draft: ten kickers, ten
/// defenses and the 129 earliest-ADP skill players.
pub fn one_short_of_ten_by_fifteen() -> PlayerPool {
    let mut specialists: Vec<Player> = Vec::new();
    let mut skill: Vec<Player> = Vec::new();
    for p in synthetic_players() {
        if matches!(p.position, Position::Kicker | Position::Defense) {
            specialists.push(p);
        } else {
            skill.push(p);
        }
    }
    let mut players: Vec<Player> = Vec::new();
    for pos in [Position::Kicker, Position::Defense] {
        players.extend(specialists.iter().filter(|p| p.position == pos).take(10).cloned());
    }
    skill.sort_by(|a, b| {
        a.adp
            .unwrap_or(f64::MAX)
            .total_cmp(&b.adp.unwrap_or(f64::MAX))
            .then_with(|| a.id.cmp(&b.id))
    });
    players.extend(skill.into_iter().take(129));
    PlayerPool::new(players)
}
