use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::InvalidResultError;

/// Standardized result for all registration algorithms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResult {
    /// Overall alignment quality score (0-1)
    pub score: f64,

    /// Fraction of matched features consistent with the estimated transform (0-1)
    pub inlier_ratio: f64,

    /// Algorithm-defined transformation payload (e.g. a 3x3 homography as
    /// nested arrays). Opaque to the engine, never interpreted.
    pub transform: Value,

    /// Number of feature matches found
    pub matches_count: usize,

    /// Additional algorithm-specific metadata, passed through unmodified
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl RegistrationResult {
    /// Construct a validated result.
    ///
    /// Score and inlier ratio must be finite and within `[0.0, 1.0]`;
    /// out-of-range values fail construction rather than being clamped.
    pub fn new(
        score: f64,
        inlier_ratio: f64,
        transform: Value,
        matches_count: usize,
    ) -> Result<Self, InvalidResultError> {
        if !(0.0..=1.0).contains(&score) {
            return Err(InvalidResultError::ScoreOutOfRange(score));
        }
        if !(0.0..=1.0).contains(&inlier_ratio) {
            return Err(InvalidResultError::InlierRatioOutOfRange(inlier_ratio));
        }

        Ok(Self {
            score,
            inlier_ratio,
            transform,
            matches_count,
            metadata: HashMap::new(),
        })
    }

    pub fn with_metadata<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Acceptance verdict attached to a registration output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    /// Result met both quality thresholds
    Accepted,
    /// Best available result, returned below threshold with fallback enabled
    FallbackLowConfidence,
}

/// Final output of one `register()` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationOutput {
    /// Name of the algorithm that produced the winning result
    pub algorithm: String,

    /// Whether the result met thresholds or is a low-confidence fallback
    pub status: RegistrationStatus,

    /// The winning result
    pub result: RegistrationResult,

    /// Algorithm names actually invoked, in invocation order, including
    /// attempts that faulted or produced no alignment
    pub attempts: Vec<String>,
}
