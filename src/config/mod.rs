use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigurationError;

/// Quality gate and fallback policy for the registration engine.
///
/// Immutable once handed to the engine. Both thresholds live in `[0.0, 1.0]`
/// and are validated at construction and again after file loading, since
/// deserialization bypasses `new`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum alignment score for accepting a result
    pub min_score: f64,

    /// Minimum inlier ratio for accepting a result
    pub min_inlier_ratio: f64,

    /// Return the best available result below thresholds instead of failing
    pub enable_fallback: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_score: 0.85,
            min_inlier_ratio: 0.6,
            enable_fallback: true,
        }
    }
}

impl EngineConfig {
    pub fn new(
        min_score: f64,
        min_inlier_ratio: f64,
        enable_fallback: bool,
    ) -> Result<Self, ConfigurationError> {
        let config = Self {
            min_score,
            min_inlier_ratio,
            enable_fallback,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(ConfigurationError::ScoreThresholdOutOfRange(self.min_score));
        }
        if !(0.0..=1.0).contains(&self.min_inlier_ratio) {
            return Err(ConfigurationError::InlierRatioThresholdOutOfRange(
                self.min_inlier_ratio,
            ));
        }
        Ok(())
    }

    /// Load from a JSON or TOML file, detected by the leading `{`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let config: Self = if content.trim_start().starts_with('{') {
            serde_json::from_str(&content).map_err(|e| ConfigurationError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            toml::from_str(&content).map_err(|e| ConfigurationError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };

        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(
        &self,
        path: P,
        format: ConfigFormat,
    ) -> Result<(), ConfigurationError> {
        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| ConfigurationError::Serialize(e.to_string()))?,
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| ConfigurationError::Serialize(e.to_string()))?,
        };

        fs::write(path, content)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum ConfigFormat {
    Json,
    Toml,
}
