//! End-to-end pipeline tests against the real filesystem.

use logscan_fs::{Filesystem, RealFilesystem};
use logscan_reporter::{report, scan, Counter};
use tempfile::tempdir;

const SAMPLE_LOG: &str = "\
192.168.1.1 - - \"GET /home\" 200 -
203.0.113.5 - - \"POST /login\" 401 Invalid credentials
192.168.1.1 - - \"GET /home\" 200 -
10.0.0.7 - - \"GET /about\" 200 -
203.0.113.5 - - \"POST /login\" 401 Invalid credentials
malformed line without any pattern
";

#[test]
fn test_scan_then_report_over_real_file() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("sample.log");
    std::fs::write(&log_path, SAMPLE_LOG).unwrap();

    let fs = RealFilesystem;
    let counts = scan::scan_file(&fs, &log_path).unwrap();

    assert_eq!(counts.requests_by_address["192.168.1.1"], 2);
    assert_eq!(counts.requests_by_address["203.0.113.5"], 2);
    assert_eq!(counts.requests_by_address["10.0.0.7"], 1);
    assert_eq!(counts.failed_logins_by_address["203.0.113.5"], 2);

    let report = report::build(&counts, 1).unwrap();

    // /home and /login tie at 2; /home was seen first
    assert_eq!(report.top_endpoint, ("/home".to_string(), 2));
    assert_eq!(
        report.suspicious_addresses,
        vec![("203.0.113.5".to_string(), 2)]
    );
}

#[test]
fn test_report_file_round_trip() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("sample.log");
    let out_path = dir.path().join("log_analysis_results.csv");
    std::fs::write(&log_path, SAMPLE_LOG).unwrap();

    let fs = RealFilesystem;
    let counts = scan::scan_file(&fs, &log_path).unwrap();
    let report = report::build(&counts, 10).unwrap();
    fs.write_atomic(&out_path, report.to_csv().as_bytes()).unwrap();

    // Parse the first block back and compare against the counters
    let written = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("IP Address,Request Count"));

    let mut recovered = Counter::new();
    for line in lines.by_ref().take_while(|l| !l.is_empty()) {
        let (addr, count) = line.split_once(',').unwrap();
        recovered.insert(addr.to_string(), count.parse().unwrap());
    }
    assert_eq!(recovered, counts.requests_by_address);

    // Remaining blocks follow in order
    assert_eq!(lines.next(), Some("Most Accessed Endpoint,Access Count"));
    assert_eq!(lines.next(), Some("/home,2"));
    assert_eq!(lines.next(), Some(""));
    assert_eq!(lines.next(), Some("IP Address,Failed Login Count"));
    // Two failures never exceed the threshold of ten
    assert_eq!(lines.next(), None);
}

#[test]
fn test_suspicious_boundary_at_threshold() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("sample.log");

    // 11 failures for one address, exactly 10 for another
    let mut log = String::new();
    for _ in 0..11 {
        log.push_str("198.51.100.9 - - \"POST /login\" 401 -\n");
    }
    for _ in 0..10 {
        log.push_str("198.51.100.8 - - \"POST /login\" 401 -\n");
    }
    std::fs::write(&log_path, &log).unwrap();

    let counts = scan::scan_file(&RealFilesystem, &log_path).unwrap();
    let report = report::build(&counts, 10).unwrap();

    assert_eq!(
        report.suspicious_addresses,
        vec![("198.51.100.9".to_string(), 11)]
    );
    let console = report.to_console();
    let suspicious_section = console
        .split("Suspicious Activity Detected:")
        .nth(1)
        .unwrap();
    assert!(suspicious_section.contains("198.51.100.9"));
    assert!(!suspicious_section.contains("198.51.100.8"));
}
