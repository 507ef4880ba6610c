//! Shared types for the scan/report pipeline.

use indexmap::IndexMap;

/// Counter keyed by string, keys retained in first-seen order.
///
/// Insertion order matters downstream: ranking ties, endpoint
/// tie-breaking, and the suspicious-address listing all preserve the
/// order in which keys were first observed during the scan.
pub type Counter = IndexMap<String, u64>;

/// The three counters accumulated by one pass over the input.
///
/// Created empty at scan start and returned by value once the scan
/// completes; the renderer only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanCounts {
    /// Source address -> request count.
    pub requests_by_address: Counter,
    /// Endpoint path -> access count.
    pub hits_by_endpoint: Counter,
    /// Source address -> failed-login count.
    pub failed_logins_by_address: Counter,
}

impl ScanCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of requests attributed to any address.
    pub fn total_requests(&self) -> u64 {
        self.requests_by_address.values().sum()
    }
}
