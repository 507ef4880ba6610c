//! Analyzer configuration.

use std::path::PathBuf;

/// Default input log file name.
pub const DEFAULT_LOG_FILE: &str = "sample.log";

/// Default output report file name.
pub const DEFAULT_OUTPUT_FILE: &str = "log_analysis_results.csv";

/// Failed-login count an address must exceed (strictly) to be reported.
pub const DEFAULT_FAILED_LOGIN_THRESHOLD: u64 = 10;

/// Analyzer configuration.
///
/// The binary runs with the compiled-in defaults; tests override paths
/// and the threshold through the builder methods.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub log_file: PathBuf,
    pub output_file: PathBuf,
    pub failed_login_threshold: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            failed_login_threshold: DEFAULT_FAILED_LOGIN_THRESHOLD,
        }
    }
}

impl AnalyzerConfig {
    /// Create a config with the compiled-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the input log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Builder: set the output report file path.
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_file = path.into();
        self
    }

    /// Builder: set the failed-login threshold.
    pub fn with_failed_login_threshold(mut self, threshold: u64) -> Self {
        self.failed_login_threshold = threshold;
        self
    }
}
