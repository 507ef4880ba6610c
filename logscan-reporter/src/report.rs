//! Report derivation and rendering.
//!
//! Consumes finalized counters and produces the fully-ordered report:
//! ranked address counts, the single most accessed endpoint, and the
//! addresses whose failed-login count exceeds the threshold. Two
//! output surfaces: console text and a CSV document.

use crate::types::{Counter, ScanCounts};

/// Errors from report derivation.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no endpoint matched any input line, nothing to report")]
    NoEndpointData,
}

/// A derived report, fully ordered and ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// (address, request count), sorted by count descending; equal
    /// counts keep first-seen order.
    pub ranked_addresses: Vec<(String, u64)>,
    /// The single most accessed (endpoint, count). Ties go to the
    /// first-encountered endpoint.
    pub top_endpoint: (String, u64),
    /// (address, failed-login count) strictly above the threshold, in
    /// first-seen order.
    pub suspicious_addresses: Vec<(String, u64)>,
}

/// Derive a report from the scan counters.
///
/// Fails if no line in the input matched the endpoint pattern; the
/// report has no defined "most accessed endpoint" in that case.
pub fn build(counts: &ScanCounts, threshold: u64) -> Result<Report, ReportError> {
    let top_endpoint =
        top_endpoint(&counts.hits_by_endpoint).ok_or(ReportError::NoEndpointData)?;

    Ok(Report {
        ranked_addresses: rank_by_count(&counts.requests_by_address),
        top_endpoint,
        suspicious_addresses: filter_above(&counts.failed_logins_by_address, threshold),
    })
}

/// Sort counter entries by count descending. `sort_by` is stable, so
/// equal counts retain the counter's first-seen order.
fn rank_by_count(counter: &Counter) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = counter
        .iter()
        .map(|(key, &count)| (key.clone(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Maximum-count entry; strict comparison keeps the first of equals.
fn top_endpoint(counter: &Counter) -> Option<(String, u64)> {
    let mut best: Option<(&String, u64)> = None;
    for (path, &count) in counter {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((path, count)),
        }
    }
    best.map(|(path, count)| (path.clone(), count))
}

fn filter_above(counter: &Counter, threshold: u64) -> Vec<(String, u64)> {
    counter
        .iter()
        .filter(|(_, &count)| count > threshold)
        .map(|(key, &count)| (key.clone(), count))
        .collect()
}

impl Report {
    /// Render the report as human-readable console text.
    pub fn to_console(&self) -> String {
        let mut out = String::new();

        out.push_str("IP Address Request Counts:\n");
        for (addr, count) in &self.ranked_addresses {
            out.push_str(&format!("{:<20} {}\n", addr, count));
        }

        out.push_str("\nMost Frequently Accessed Endpoint:\n");
        out.push_str(&format!(
            "{} (Accessed {} times)\n",
            self.top_endpoint.0, self.top_endpoint.1
        ));

        out.push_str("\nSuspicious Activity Detected:\n");
        out.push_str(&format!("{:<20} {}\n", "IP Address", "Failed Login Attempts"));
        if self.suspicious_addresses.is_empty() {
            out.push_str("No IP addresses exceeded the failed login threshold.\n");
        } else {
            for (addr, count) in &self.suspicious_addresses {
                out.push_str(&format!("{:<20} {}\n", addr, count));
            }
        }

        out
    }

    /// Render the report as a CSV document: three header-led blocks
    /// separated by blank rows, in the same order as the console.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::new();

        lines.push("IP Address,Request Count".to_string());
        for (addr, count) in &self.ranked_addresses {
            lines.push(format!("{},{}", csv_field(addr), count));
        }

        lines.push(String::new());
        lines.push("Most Accessed Endpoint,Access Count".to_string());
        lines.push(format!(
            "{},{}",
            csv_field(&self.top_endpoint.0),
            self.top_endpoint.1
        ));

        lines.push(String::new());
        lines.push("IP Address,Failed Login Count".to_string());
        for (addr, count) in &self.suspicious_addresses {
            lines.push(format!("{},{}", csv_field(addr), count));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Quote a field if it contains a structural delimiter.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
