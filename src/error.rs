//! Error types for the registration engine.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at engine construction or registry mutation time.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Engine constructed with an empty algorithm registry.
    #[error("at least one algorithm must be provided")]
    NoAlgorithms,

    /// Attempted to remove the only remaining algorithm.
    #[error("cannot remove the last algorithm")]
    LastAlgorithm,

    /// `min_score` outside `[0.0, 1.0]` (or non-finite).
    #[error("min_score must be in [0.0, 1.0], got {0}")]
    ScoreThresholdOutOfRange(f64),

    /// `min_inlier_ratio` outside `[0.0, 1.0]` (or non-finite).
    #[error("min_inlier_ratio must be in [0.0, 1.0], got {0}")]
    InlierRatioThresholdOutOfRange(f64),

    /// Underlying I/O failure while reading or writing a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file parse error — includes the file path for context.
    #[error("failed to parse config at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Config serialization error (save path).
    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

/// Errors raised when constructing a [`RegistrationResult`] with out-of-range
/// fields. Values are never clamped; construction fails instead.
///
/// [`RegistrationResult`]: crate::RegistrationResult
#[derive(Debug, Error)]
pub enum InvalidResultError {
    #[error("score must be in [0.0, 1.0], got {0}")]
    ScoreOutOfRange(f64),

    #[error("inlier ratio must be in [0.0, 1.0], got {0}")]
    InlierRatioOutOfRange(f64),
}

/// Internal fault surfaced by an algorithm implementation.
///
/// The engine absorbs these at the call site: the fault is logged at WARN and
/// the attempt is treated as an empty outcome, so one misbehaving algorithm
/// never aborts the whole registration.
#[derive(Debug, Error)]
#[error("algorithm fault: {0}")]
pub struct AlgorithmError(#[from] pub anyhow::Error);

impl AlgorithmError {
    /// Build an error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(anyhow::anyhow!(message.into()))
    }
}

/// Errors raised by `register()` when no acceptable alignment can be returned.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Every algorithm produced an empty outcome or faulted.
    #[error("no alignment produced a valid transform; attempted: {}", .attempts.join(", "))]
    NoValidResult { attempts: Vec<String> },

    /// Results exist but none met the thresholds and fallback is disabled.
    #[error(
        "no alignment met quality thresholds (min_score={min_score}, min_inlier_ratio={min_inlier_ratio}); \
         best score {best_score:.3} from {best_algorithm}; attempted: {}",
        .attempts.join(", ")
    )]
    BelowThresholds {
        best_algorithm: String,
        best_score: f64,
        min_score: f64,
        min_inlier_ratio: f64,
        attempts: Vec<String>,
    },
}
