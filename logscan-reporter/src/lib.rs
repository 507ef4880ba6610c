//! Logscan Reporter Core
//!
//! Scans an access log and produces:
//! - per-address request counts, ranked by volume
//! - the single most accessed endpoint
//! - addresses whose failed-login count exceeds the threshold
//!
//! Results are rendered to the console and persisted as a CSV report.

pub mod config;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod types;

pub use config::AnalyzerConfig;
pub use report::{Report, ReportError};
pub use scan::{scan_file, scan_lines, ScanError};
pub use types::{Counter, ScanCounts};
