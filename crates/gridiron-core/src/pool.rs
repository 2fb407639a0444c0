// Player pool: the ranked list of draftable players and its CSV loader.
//
// The engine never fetches or caches ranking data itself. It consumes any
// `PlayerSource`; `PlayerPool` is the in-memory implementation, filled either
// programmatically or from a CSV export.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::player::{Player, Position};
use crate::settings::ScoringFormat;

/// Collaborator interface consumed by the simulator.
pub trait PlayerSource {
    /// Every draftable player, sorted by ADP ascending. Players without ADP
    /// follow, ordered by projected points for `scoring` (descending).
    fn list_players(&self, scoring: ScoringFormat) -> Vec<Player>;
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("validation error: {0}")]
    Validation(String),
}

// ---------------------------------------------------------------------------
// In-memory pool
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct PlayerPool {
    players: Vec<Player>,
}

impl PlayerPool {
    /// Build a pool. Later duplicates of an id are dropped with a warning.
    pub fn new(players: Vec<Player>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(players.len());
        for player in players {
            if !seen.insert(player.id.clone()) {
                warn!("duplicate player id '{}' ({}), keeping first", player.id, player.name);
                continue;
            }
            kept.push(player);
        }
        PlayerPool { players: kept }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Load a pool from a CSV file.
    pub fn from_csv_path(path: &Path) -> Result<Self, PoolError> {
        let file = std::fs::File::open(path).map_err(|e| PoolError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let players = load_players_from_reader(file).map_err(|e| PoolError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;
        if players.is_empty() {
            return Err(PoolError::Validation(format!(
                "{} produced zero valid player rows",
                path.display()
            )));
        }
        Ok(PlayerPool::new(players))
    }
}

impl PlayerSource for PlayerPool {
    fn list_players(&self, scoring: ScoringFormat) -> Vec<Player> {
        let mut players = self.players.clone();
        players.sort_by(|a, b| match (a.adp, b.adp) {
            (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.id.cmp(&b.id)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => {
                let pa = a.projection(scoring).unwrap_or(0.0);
                let pb = b.projection(scoring).unwrap_or(0.0);
                pb.total_cmp(&pa).then_with(|| a.id.cmp(&b.id))
            }
        });
        players
    }
}

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

/// One CSV row. Empty numeric cells deserialize to `None`.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    id: String,
    name: String,
    position: String,
    #[serde(default, alias = "team_abbr")]
    team: String,
    #[serde(default, alias = "bye_week")]
    bye: Option<u8>,
    #[serde(default)]
    adp: Option<f64>,
    #[serde(default)]
    ppr: Option<f64>,
    #[serde(default, alias = "half")]
    half_ppr: Option<f64>,
    #[serde(default, alias = "std")]
    standard: Option<f64>,
}

fn load_players_from_reader<R: Read>(rdr: R) -> Result<Vec<Player>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut players = Vec::new();
    for result in reader.deserialize::<RawPlayerRow>() {
        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed player row: {}", e);
                continue;
            }
        };
        if raw.id.is_empty() {
            warn!("skipping player '{}': empty id", raw.name);
            continue;
        }
        let Some(position) = Position::from_str_pos(&raw.position) else {
            warn!("skipping player '{}': unknown position '{}'", raw.name, raw.position);
            continue;
        };
        if raw.adp.is_some_and(|adp| !adp.is_finite() || adp <= 0.0) {
            warn!("skipping player '{}': invalid ADP value", raw.name);
            continue;
        }

        let mut projected_points = BTreeMap::new();
        for (format, value) in [
            (ScoringFormat::Ppr, raw.ppr),
            (ScoringFormat::HalfPpr, raw.half_ppr),
            (ScoringFormat::Standard, raw.standard),
        ] {
            match value {
                Some(v) if v.is_finite() => {
                    projected_points.insert(format, v);
                }
                Some(_) => warn!("ignoring non-finite {} projection for '{}'", format, raw.name),
                None => {}
            }
        }

        players.push(Player {
            id: raw.id,
            name: raw.name,
            position,
            team_abbr: raw.team,
            bye_week: raw.bye,
            adp: raw.adp,
            projected_points,
        });
    }
    Ok(players)
}
