//! Run report exchanged with batch drivers.

use serde::{Deserialize, Serialize};

/// Summary of one search run, as written by batch drivers.
///
/// `runtime` is measured by the caller in milliseconds; the search itself
/// does not time anything.
///
/// # Examples
///
/// ```
/// use u_picking::models::RunReport;
///
/// let report = RunReport { visited_nodes: 1200, runtime: 35.0, num_pickers: 2, is_valid: true };
/// let json = serde_json::to_string(&report).unwrap();
/// assert!(json.contains("\"visited_nodes\":1200"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    /// Neighbor evaluations across all picker-count trials.
    pub visited_nodes: usize,
    /// Wall-clock time in milliseconds.
    pub runtime: f64,
    /// Picker count of the returned solution.
    pub num_pickers: usize,
    /// Whether the returned solution has zero penalty.
    pub is_valid: bool,
}
