//! Logging configuration
//!
//! Output destinations and log levels for the registration engine's
//! structured logging.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level (trace, debug, info, warn, error)
    pub global_level: String,

    /// Enable console output
    pub console_output: bool,

    /// Directory for log files (None = no file logging)
    pub log_directory: Option<PathBuf>,

    /// Include file location in logs (impacts performance)
    pub include_file_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_level: "info".to_string(),
            console_output: true,
            log_directory: None,
            include_file_location: false,
        }
    }
}

impl LoggingConfig {
    /// Verbose configuration for development
    pub fn development() -> Self {
        Self {
            global_level: "debug".to_string(),
            console_output: true,
            log_directory: None,
            include_file_location: true,
        }
    }

    /// Quieter configuration with JSON file output for production
    pub fn production(log_directory: PathBuf) -> Self {
        Self {
            global_level: "info".to_string(),
            console_output: false,
            log_directory: Some(log_directory),
            include_file_location: false,
        }
    }
}
