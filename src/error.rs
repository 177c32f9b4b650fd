//! Game-specific error types.
//!
//! Gameplay itself never fails: full pools silently drop spawns and game over
//! is an outcome, not a fault.  Errors only surface at the edges, when the
//! configuration file is read and validated or when a polygon is built from
//! caller-supplied points.

use std::fmt;
use std::io;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// The configuration file exists but could not be read.
    ConfigRead {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse(toml::de::Error),

    /// A `min`/`max` pair is inverted.
    InvalidRange {
        /// Name of the range (for logging).
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// A value that must be strictly positive is not.
    NonPositive {
        /// Name of the value (for logging).
        name: &'static str,
        value: f64,
    },

    /// A value that must be zero or more is negative.
    Negative {
        /// Name of the value (for logging).
        name: &'static str,
        value: f64,
    },

    /// A value is NaN or infinite.
    NonFinite {
        /// Name of the value (for logging).
        name: &'static str,
        value: f64,
    },

    /// A value must be strictly below a limit derived from other settings.
    NotBelow {
        /// Name of the value (for logging).
        name: &'static str,
        value: f64,
        limit: f64,
    },

    /// A polygon would have too few vertices to enclose any area.
    InsufficientVertices {
        /// Actual vertex count provided.
        got: usize,
        /// Minimum required.
        required: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path, source)
            }
            GameError::ConfigParse(e) => write!(f, "failed to parse config: {}", e),
            GameError::InvalidRange { name, min, max } => write!(
                f,
                "range '{}' is inverted: min {} is greater than max {}",
                name, min, max
            ),
            GameError::NonPositive { name, value } => {
                write!(f, "'{}' must be positive, got {}", name, value)
            }
            GameError::Negative { name, value } => {
                write!(f, "'{}' must not be negative, got {}", name, value)
            }
            GameError::NonFinite { name, value } => {
                write!(f, "'{}' must be a finite number, got {}", name, value)
            }
            GameError::NotBelow { name, value, limit } => write!(
                f,
                "'{}' must be less than {}, got {}",
                name, limit, value
            ),
            GameError::InsufficientVertices { got, required } => write!(
                f,
                "polygon vertex count too low: got {}, need at least {}",
                got, required
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            GameError::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for GameError {
    fn from(e: toml::de::Error) -> Self {
        GameError::ConfigParse(e)
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is NaN or infinite.
pub fn ensure_finite(name: &'static str, value: f64) -> GameResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GameError::NonFinite { name, value })
    }
}

/// Returns an error if `value` is not a finite, strictly positive number.
pub fn ensure_positive(name: &'static str, value: f64) -> GameResult<()> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(GameError::NonPositive { name, value })
    }
}

/// Returns an error if `value` is negative or not finite.
pub fn ensure_non_negative(name: &'static str, value: f64) -> GameResult<()> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(GameError::Negative { name, value })
    }
}

/// Returns an error unless `value < limit` (both finite).
pub fn ensure_below(name: &'static str, value: f64, limit: f64) -> GameResult<()> {
    ensure_finite(name, value)?;
    ensure_finite(name, limit)?;
    if value < limit {
        Ok(())
    } else {
        Err(GameError::NotBelow { name, value, limit })
    }
}

/// Returns an error if either bound is not finite or `min > max`.
pub fn ensure_range(name: &'static str, min: f64, max: f64) -> GameResult<()> {
    ensure_finite(name, min)?;
    ensure_finite(name, max)?;
    if min > max {
        Err(GameError::InvalidRange { name, min, max })
    } else {
        Ok(())
    }
}
