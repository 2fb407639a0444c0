// Mock draft settings: parsing, validation and seed derivation.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::DraftError;

pub const ALLOWED_TEAMS: &[u32] = &[10, 12, 14];
pub const ALLOWED_ROUNDS: &[u32] = &[12, 15, 18];

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// League scoring format. Determines which projection column is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormat {
    Ppr,
    HalfPpr,
    Standard,
}

impl ScoringFormat {
    pub const ALL: [ScoringFormat; 3] = [
        ScoringFormat::Ppr,
        ScoringFormat::HalfPpr,
        ScoringFormat::Standard,
    ];

    /// Parse a scoring format string. Accepts the wire names plus a couple of
    /// common spellings ("half", "half-ppr", "std").
    pub fn from_str_format(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ppr" => Some(ScoringFormat::Ppr),
            "half_ppr" | "half-ppr" | "half" => Some(ScoringFormat::HalfPpr),
            "standard" | "std" => Some(ScoringFormat::Standard),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringFormat::Ppr => "ppr",
            ScoringFormat::HalfPpr => "half_ppr",
            ScoringFormat::Standard => "standard",
        }
    }
}

impl fmt::Display for ScoringFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Drafting personality of a virtual manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Balanced,
    HeroRb,
    ZeroRb,
    EliteQb,
    UpsideChaser,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Balanced,
        Strategy::HeroRb,
        Strategy::ZeroRb,
        Strategy::EliteQb,
        Strategy::UpsideChaser,
    ];

    pub fn from_str_strategy(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Some(Strategy::Balanced),
            "hero_rb" => Some(Strategy::HeroRb),
            "zero_rb" => Some(Strategy::ZeroRb),
            "elite_qb" => Some(Strategy::EliteQb),
            "upside_chaser" => Some(Strategy::UpsideChaser),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Balanced => "balanced",
            Strategy::HeroRb => "hero_rb",
            Strategy::ZeroRb => "zero_rb",
            Strategy::EliteQb => "elite_qb",
            Strategy::UpsideChaser => "upside_chaser",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-supplied seed: any JSON string or number. Numbers keep their
/// parsed form, so `-7`, `3.5` and `1e3` are all valid seeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(serde_json::Number),
    Text(String),
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Raw deserialization target. Enumerated fields arrive as plain strings so
/// that out-of-range values surface as `DraftError::Validation` naming the
/// offending field rather than as an opaque serde error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    teams: u32,
    rounds: u32,
    draft_slot: u32,
    scoring: String,
    strategy: String,
    #[serde(default)]
    seed: Option<serde_json::Value>,
}

/// Validated mock draft settings. Fields are private so an instance can only
/// exist after passing validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSettings")]
pub struct MockDraftSettings {
    teams: u32,
    rounds: u32,
    draft_slot: u32,
    scoring: ScoringFormat,
    strategy: Strategy,
    seed: Option<Seed>,
}

impl MockDraftSettings {
    pub fn new(
        teams: u32,
        rounds: u32,
        draft_slot: u32,
        scoring: ScoringFormat,
        strategy: Strategy,
        seed: Option<Seed>,
    ) -> Result<Self, DraftError> {
        let settings = MockDraftSettings {
            teams,
            rounds,
            draft_slot,
            scoring,
            strategy,
            seed,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Parse and validate settings from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, DraftError> {
        let raw: RawSettings = serde_json::from_str(text)?;
        MockDraftSettings::try_from(raw)
    }

    /// Re-check every range constraint.
    pub fn validate(&self) -> Result<(), DraftError> {
        if !ALLOWED_TEAMS.contains(&self.teams) {
            return Err(DraftError::validation(
                "teams",
                format!("must be one of {:?}, got {}", ALLOWED_TEAMS, self.teams),
            ));
        }
        if !ALLOWED_ROUNDS.contains(&self.rounds) {
            return Err(DraftError::validation(
                "rounds",
                format!("must be one of {:?}, got {}", ALLOWED_ROUNDS, self.rounds),
            ));
        }
        if self.draft_slot == 0 || self.draft_slot > self.teams {
            return Err(DraftError::validation(
                "draftSlot",
                format!("must be between 1 and {}, got {}", self.teams, self.draft_slot),
            ));
        }
        if let Some(Seed::Text(text)) = &self.seed {
            if text.trim().is_empty() {
                return Err(DraftError::validation("seed", "must not be an empty string"));
            }
        }
        Ok(())
    }

    pub fn teams(&self) -> u32 {
        self.teams
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn draft_slot(&self) -> u32 {
        self.draft_slot
    }

    pub fn scoring(&self) -> ScoringFormat {
        self.scoring
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn seed(&self) -> Option<&Seed> {
        self.seed.as_ref()
    }

    /// Total number of picks in a complete draft.
    pub fn total_picks(&self) -> u32 {
        self.teams * self.rounds
    }

    /// Derive the 64-bit RNG seed.
    ///
    /// An explicit seed is hashed on its own; an absent seed is hashed from
    /// the full settings tuple, so identical settings reproduce the same mock
    /// even without a seed. SHA-256 keeps the value stable across platforms
    /// and compiler versions.
    pub fn derived_seed(&self) -> u64 {
        let material = match &self.seed {
            Some(Seed::Number(n)) => format!("seed:n:{n}"),
            Some(Seed::Text(s)) => format!("seed:s:{s}"),
            None => format!(
                "settings:{}|{}|{}|{}|{}",
                self.teams, self.rounds, self.draft_slot, self.scoring, self.strategy
            ),
        };
        let digest = Sha256::digest(material.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        u64::from_le_bytes(bytes)
    }
}

impl TryFrom<RawSettings> for MockDraftSettings {
    type Error = DraftError;

    fn try_from(raw: RawSettings) -> Result<Self, Self::Error> {
        let scoring = ScoringFormat::from_str_format(&raw.scoring).ok_or_else(|| {
            DraftError::validation(
                "scoring",
                format!("must be one of ppr, half_ppr, standard; got '{}'", raw.scoring),
            )
        })?;
        let strategy = Strategy::from_str_strategy(&raw.strategy).ok_or_else(|| {
            DraftError::validation(
                "strategy",
                format!(
                    "must be one of balanced, hero_rb, zero_rb, elite_qb, upside_chaser; got '{}'",
                    raw.strategy
                ),
            )
        })?;
        let seed = match raw.seed {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::Number(n)) => Some(Seed::Number(n)),
            Some(serde_json::Value::String(s)) => Some(Seed::Text(s)),
            Some(other) => {
                return Err(DraftError::validation(
                    "seed",
                    format!("must be a string or a number, got {other}"),
                ))
            }
        };
        MockDraftSettings::new(
            raw.teams,
            raw.rounds,
            raw.draft_slot,
            scoring,
            strategy,
            seed,
        )
    }
}
