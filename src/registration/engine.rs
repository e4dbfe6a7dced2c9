use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::error::{ConfigurationError, RegistrationError};
use crate::logging::{new_correlation_id, RegistrationSpan};
use crate::registration::registry::AlgorithmRegistry;
use crate::registration::traits::RegistrationAlgorithm;
use crate::registration::types::{RegistrationOutput, RegistrationResult, RegistrationStatus};

/// Multi-algorithm image registration engine.
///
/// Tries the registered algorithms in insertion order, scores each result
/// against the configured quality gate, and exits early on the first
/// acceptable one. If nothing meets the thresholds the engine either returns
/// the best-scoring result flagged as low-confidence (fallback enabled) or
/// fails with a [`RegistrationError`].
///
/// `register()` takes `&self` and keeps all per-call state local, so
/// independent calls on different image pairs may run concurrently. Registry
/// mutation takes `&mut self`; callers that need to mutate concurrently with
/// in-flight calls wrap the engine in an `RwLock`.
pub struct RegistrationEngine<I> {
    algorithms: AlgorithmRegistry<I>,
    config: EngineConfig,
}

impl<I> RegistrationEngine<I> {
    /// Create an engine with the default quality gate
    /// (`min_score=0.85`, `min_inlier_ratio=0.6`, fallback enabled).
    pub fn new(algorithms: AlgorithmRegistry<I>) -> Result<Self, ConfigurationError> {
        Self::with_config(algorithms, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(
        algorithms: AlgorithmRegistry<I>,
        config: EngineConfig,
    ) -> Result<Self, ConfigurationError> {
        if algorithms.is_empty() {
            return Err(ConfigurationError::NoAlgorithms);
        }
        Ok(Self { algorithms, config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Registered algorithm names in trial order.
    pub fn algorithm_names(&self) -> Vec<&str> {
        self.algorithms.names()
    }

    /// Register source image to reference image.
    ///
    /// Algorithms run strictly sequentially in insertion order; a faulting or
    /// panicking algorithm is logged and skipped, never fatal. Returns as soon
    /// as a result meets both thresholds (inclusive), so later algorithms are
    /// not invoked once an acceptable result exists.
    pub fn register(
        &self,
        source: &I,
        reference: &I,
    ) -> Result<RegistrationOutput, RegistrationError> {
        let correlation_id = new_correlation_id();
        let mut best: Option<(String, RegistrationResult)> = None;
        let mut attempts: Vec<String> = Vec::new();

        info!(
            algorithm_count = self.algorithms.len(),
            correlation_id = %correlation_id,
            "Starting registration"
        );

        for (name, algorithm) in self.algorithms.iter() {
            attempts.push(name.to_string());

            let span = RegistrationSpan::new(name, correlation_id);
            let _guard = span.enter();

            // A panicking algorithm violates the capability contract; treat
            // it the same as Err: log and move on.
            let outcome = match catch_unwind(AssertUnwindSafe(|| algorithm.align(source, reference)))
            {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(e)) => {
                    warn!(algorithm = name, error = %e, "Algorithm faulted; skipping");
                    continue;
                }
                Err(payload) => {
                    warn!(
                        algorithm = name,
                        panic = panic_message(payload.as_ref()),
                        "Algorithm panicked; skipping"
                    );
                    continue;
                }
            };

            let result = match outcome {
                Some(result) => result,
                None => {
                    debug!(algorithm = name, "Algorithm produced no valid alignment");
                    continue;
                }
            };

            debug!(
                algorithm = name,
                score = result.score,
                inlier_ratio = result.inlier_ratio,
                matches = result.matches_count,
                "Algorithm produced a result"
            );
            span.record_result(result.score, result.inlier_ratio, result.matches_count);

            if self.is_acceptable(&result) {
                info!(
                    algorithm = name,
                    score = result.score,
                    inlier_ratio = result.inlier_ratio,
                    correlation_id = %correlation_id,
                    "Accepted result"
                );
                return Ok(RegistrationOutput {
                    algorithm: name.to_string(),
                    status: RegistrationStatus::Accepted,
                    result,
                    attempts,
                });
            }

            // Strict greater-than: the first result seen wins ties, keeping
            // insertion-order priority.
            if best.as_ref().map_or(true, |(_, b)| result.score > b.score) {
                best = Some((name.to_string(), result));
            }
        }

        let Some((best_algorithm, best_result)) = best else {
            error!(correlation_id = %correlation_id, "No algorithm produced a valid transform");
            return Err(RegistrationError::NoValidResult { attempts });
        };

        if !self.config.enable_fallback {
            error!(
                algorithm = %best_algorithm,
                best_score = best_result.score,
                correlation_id = %correlation_id,
                "Best result below thresholds and fallback is disabled"
            );
            return Err(RegistrationError::BelowThresholds {
                best_algorithm,
                best_score: best_result.score,
                min_score: self.config.min_score,
                min_inlier_ratio: self.config.min_inlier_ratio,
                attempts,
            });
        }

        warn!(
            algorithm = %best_algorithm,
            best_score = best_result.score,
            min_score = self.config.min_score,
            correlation_id = %correlation_id,
            "Using fallback result below thresholds"
        );

        Ok(RegistrationOutput {
            algorithm: best_algorithm,
            status: RegistrationStatus::FallbackLowConfidence,
            result: best_result,
            attempts,
        })
    }

    /// Insert or replace an algorithm. Replacing an existing name keeps its
    /// original position in trial order.
    pub fn register_algorithm(
        &mut self,
        name: impl Into<String>,
        algorithm: Box<dyn RegistrationAlgorithm<I>>,
    ) {
        let name = name.into();
        info!(algorithm = %name, "Registering algorithm");
        self.algorithms.insert(name, algorithm);
    }

    /// Remove an algorithm by name. Removing a missing name is a no-op;
    /// removing the last remaining algorithm fails.
    pub fn unregister_algorithm(&mut self, name: &str) -> Result<(), ConfigurationError> {
        if self.algorithms.len() == 1 && self.algorithms.contains(name) {
            return Err(ConfigurationError::LastAlgorithm);
        }
        if self.algorithms.remove(name).is_some() {
            info!(algorithm = name, "Unregistered algorithm");
        }
        Ok(())
    }

    /// Conjunctive, inclusive acceptance gate: both thresholds must hold.
    fn is_acceptable(&self, result: &RegistrationResult) -> bool {
        result.score >= self.config.min_score && result.inlier_ratio >= self.config.min_inlier_ratio
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
