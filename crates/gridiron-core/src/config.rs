// Engine tuning configuration (engine.toml).
//
// Every coefficient the strategy and grading engines use lives here. The
// built-in `Default` matches `defaults/engine.toml`; a partial TOML file
// overrides only the sections it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::weights::StrategyTables;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub strategies: StrategyTables,
    pub grades: GradeThresholds,
}

/// Coefficients shared by every strategy's scoring function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// `base_value = base_scale / (adp + base_offset)`.
    pub base_scale: f64,
    pub base_offset: f64,
    /// Rounds of slack before an early pick counts as a reach.
    pub reach_grace_rounds: f64,
    /// Penalty per round reached beyond the grace window.
    pub reach_weight: f64,
    /// Jitter amplitude as a fraction of score (0.02 = +/-2%).
    pub jitter: f64,
    /// Bonus per unfilled dedicated starter slot once the need ramp is complete.
    pub need_weight: f64,
    /// Round fraction at which the need ramp starts.
    pub need_onset: f64,
    /// Last round in which elite-QB boosts apply, whatever the draft length.
    pub elite_qb_rounds: u32,
    /// Fraction of base value lost when a new starter shares a bye week with
    /// a rostered starter at the same position.
    pub bye_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            base_scale: 1000.0,
            base_offset: 10.0,
            reach_grace_rounds: 1.0,
            reach_weight: 4.0,
            jitter: 0.02,
            need_weight: 15.0,
            need_onset: 0.66,
            elite_qb_rounds: 3,
            bye_penalty: 0.05,
        }
    }
}

/// Minimum per-pick average value for each letter. Below `d` is an F.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradeThresholds {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        GradeThresholds {
            a: 4.0,
            b: 1.5,
            c: -1.5,
            d: -4.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate an engine config from a TOML file.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })?;
    let config = parse_config(&text).map_err(|e| match e {
        ParseFailure::Toml(source) => ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::Invalid(err) => err,
    })?;
    Ok(config)
}

enum ParseFailure {
    Toml(toml::de::Error),
    Invalid(ConfigError),
}

fn parse_config(text: &str) -> Result<EngineConfig, ParseFailure> {
    let config: EngineConfig = toml::from_str(text).map_err(ParseFailure::Toml)?;
    validate(&config).map_err(ParseFailure::Invalid)?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    let s = &config.scoring;

    if !s.base_scale.is_finite() || s.base_scale <= 0.0 {
        return Err(invalid(
            "scoring.base_scale",
            format!("must be > 0, got {}", s.base_scale),
        ));
    }

    let non_negative: &[(&str, f64)] = &[
        ("scoring.base_offset", s.base_offset),
        ("scoring.reach_grace_rounds", s.reach_grace_rounds),
        ("scoring.reach_weight", s.reach_weight),
        ("scoring.need_weight", s.need_weight),
    ];
    for (name, val) in non_negative {
        if !val.is_finite() || *val < 0.0 {
            return Err(invalid(*name, format!("must be >= 0, got {val}")));
        }
    }

    if !(0.0..=0.25).contains(&s.jitter) {
        return Err(invalid(
            "scoring.jitter",
            format!("must be between 0.0 and 0.25 inclusive, got {}", s.jitter),
        ));
    }
    if !(0.0..1.0).contains(&s.need_onset) {
        return Err(invalid(
            "scoring.need_onset",
            format!("must be in [0.0, 1.0), got {}", s.need_onset),
        ));
    }
    if !(0.0..=1.0).contains(&s.bye_penalty) {
        return Err(invalid(
            "scoring.bye_penalty",
            format!("must be between 0.0 and 1.0 inclusive, got {}", s.bye_penalty),
        ));
    }

    for (strategy, weights) in config.strategies.iter() {
        let prefix = format!("strategies.{strategy}");
        if weights.bands.is_empty() {
            return Err(invalid(format!("{prefix}.bands"), "must not be empty"));
        }
        let mut previous = 0.0;
        for (i, band) in weights.bands.iter().enumerate() {
            if band.until <= previous {
                return Err(invalid(
                    format!("{prefix}.bands[{i}].until"),
                    format!("must be strictly ascending and > 0, got {}", band.until),
                ));
            }
            previous = band.until;
            if band.weights().iter().any(|w| !w.is_finite() || *w < -1.0) {
                return Err(invalid(
                    format!("{prefix}.bands[{i}]"),
                    "position weights must be finite and >= -1.0",
                ));
            }
        }
        if (previous - 1.0).abs() > f64::EPSILON {
            return Err(invalid(
                format!("{prefix}.bands"),
                format!("last band must end at 1.0, got {previous}"),
            ));
        }
        if weights.elite_qb_boost < 0.0 || weights.upside_weight < 0.0 {
            return Err(invalid(
                prefix,
                "elite_qb_boost and upside_weight must be >= 0",
            ));
        }
    }

    let g = &config.grades;
    if !(g.a > g.b && g.b > g.c && g.c > g.d) {
        return Err(invalid(
            "grades",
            format!(
                "thresholds must be strictly descending (a > b > c > d), got {} {} {} {}",
                g.a, g.b, g.c, g.d
            ),
        ));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
