//! CLI for generating an access-log report.
//!
//! Runs with compiled-in file names and threshold; the interface takes
//! no flags, environment variables, or arguments.

use logscan_fs::{Filesystem, FsError, RealFilesystem};
use logscan_reporter::config::AnalyzerConfig;
use logscan_reporter::report::{self, ReportError};
use logscan_reporter::scan::{scan_file, ScanError};
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum AnalyzeError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("failed to write {file}: {source}")]
    WriteFailure {
        file: String,
        #[source]
        source: FsError,
    },
}

fn main() -> ExitCode {
    match run(&AnalyzerConfig::new(), &RealFilesystem) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn exit_code(err: &AnalyzeError) -> u8 {
    match err {
        AnalyzeError::Scan(_) => 2,
        AnalyzeError::Report(_) => 3,
        AnalyzeError::WriteFailure { .. } => 1,
    }
}

fn run(config: &AnalyzerConfig, fs: &dyn Filesystem) -> Result<(), AnalyzeError> {
    let counts = scan_file(fs, &config.log_file)?;
    let report = report::build(&counts, config.failed_login_threshold)?;

    print!("{}", report.to_console());

    fs.write_atomic(&config.output_file, report.to_csv().as_bytes())
        .map_err(|e| AnalyzeError::WriteFailure {
            file: config.output_file.display().to_string(),
            source: e,
        })?;

    println!("\nResults saved to {}", config.output_file.display());

    Ok(())
}
