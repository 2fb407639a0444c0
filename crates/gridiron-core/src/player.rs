// Draftable player representation.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::settings::ScoringFormat;

/// Football positions that can be drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "QB")]
    Quarterback,
    #[serde(rename = "RB")]
    RunningBack,
    #[serde(rename = "WR")]
    WideReceiver,
    #[serde(rename = "TE")]
    TightEnd,
    #[serde(rename = "K")]
    Kicker,
    #[serde(rename = "DST")]
    Defense,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
        Position::Kicker,
        Position::Defense,
    ];

    /// Parse a position string.
    ///
    /// Handles the usual aliases: "D/ST", "DEF" and "D" -> Defense, "PK" -> Kicker.
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "K" | "PK" => Some(Position::Kicker),
            "DST" | "D/ST" | "DEF" | "D" => Some(Position::Defense),
            _ => None,
        }
    }

    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Kicker => "K",
            Position::Defense => "DST",
        }
    }

    /// Whether the position may occupy a FLEX slot.
    pub fn is_flex_eligible(&self) -> bool {
        matches!(
            self,
            Position::RunningBack | Position::WideReceiver | Position::TightEnd
        )
    }

    /// Index into per-position arrays (`[T; 6]`), in `Position::ALL` order.
    pub fn index(&self) -> usize {
        match self {
            Position::Quarterback => 0,
            Position::RunningBack => 1,
            Position::WideReceiver => 2,
            Position::TightEnd => 3,
            Position::Kicker => 4,
            Position::Defense => 5,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

/// A draftable player. Immutable once loaded; picks carry a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub team_abbr: String,
    pub bye_week: Option<u8>,
    /// Market consensus pick number. `None` when no ADP is published
    /// (typically deep kickers and defenses).
    pub adp: Option<f64>,
    pub projected_points: BTreeMap<ScoringFormat, f64>,
}

impl Player {
    /// Projected season points for a scoring format, if present.
    pub fn projection(&self, scoring: ScoringFormat) -> Option<f64> {
        self.projected_points.get(&scoring).copied()
    }

    /// ADP with a neutral fallback for players that have none.
    pub fn adp_or(&self, neutral: f64) -> f64 {
        self.adp.unwrap_or(neutral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_parsing_and_aliases() {
        assert_eq!(Position::from_str_pos("qb"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos(" WR "), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("D/ST"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos("DEF"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos("PK"), Some(Position::Kicker));
        assert_eq!(Position::from_str_pos("FLEX"), None);
        assert_eq!(Position::from_str_pos("1B"), None);
    }

    #[test]
    fn flex_eligibility() {
        assert!(Position::RunningBack.is_flex_eligible());
        assert!(Position::WideReceiver.is_flex_eligible());
        assert!(Position::TightEnd.is_flex_eligible());
        assert!(!Position::Quarterback.is_flex_eligible());
        assert!(!Position::Kicker.is_flex_eligible());
        assert!(!Position::Defense.is_flex_eligible());
    }

    #[test]
    fn index_matches_all_order() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.index(), i);
        }
    }

    #[test]
    fn player_serializes_with_wire_names() {
        let mut projected_points = BTreeMap::new();
        projected_points.insert(ScoringFormat::Ppr, 250.5);
        let player = Player {
            id: "p1".into(),
            name: "Test Back".into(),
            position: Position::RunningBack,
            team_abbr: "SF".into(),
            bye_week: Some(9),
            adp: Some(1.5),
            projected_points,
        };
        let json = serde_json::to_string(&player).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"id":"p1","name":"Test Back","position":"RB","teamAbbr":"SF","byeWeek":9,"#,
                r#""adp":1.5,"projectedPoints":{"ppr":250.5}}"#
            )
        );
        assert_eq!(player.projection(ScoringFormat::Standard), None);
        assert!((player.adp_or(150.0) - 1.5).abs() < f64::EPSILON);
    }
}
