//! Structured spans for algorithm attempts
//!
//! Each registration attempt runs inside a span carrying the algorithm name
//! and the call's correlation ID, so per-attempt debug output groups cleanly.

use std::time::Instant;
use tracing::{span, Level, Span};
use uuid::Uuid;

/// Span wrapping one algorithm attempt within a `register()` call
pub struct RegistrationSpan {
    span: Span,
    start_time: Instant,
}

impl RegistrationSpan {
    pub fn new(algorithm_name: &str, correlation_id: Uuid) -> Self {
        let span = span!(
            Level::INFO,
            "registration_attempt",
            algorithm = algorithm_name,
            correlation_id = %correlation_id,
            score = tracing::field::Empty,
            inlier_ratio = tracing::field::Empty,
            matches = tracing::field::Empty,
        );

        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the quality metrics of a non-empty outcome
    pub fn record_result(&self, score: f64, inlier_ratio: f64, matches: usize) {
        self.span.record("score", score);
        self.span.record("inlier_ratio", inlier_ratio);
        self.span.record("matches", matches);
        tracing::debug!(
            parent: &self.span,
            elapsed_ms = self.start_time.elapsed().as_millis() as u64,
            "Attempt completed"
        );
    }
}
