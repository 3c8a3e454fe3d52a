//! Picker-count search.
//!
//! Scans picker counts upward, annealing once per count, and returns the
//! first zero-penalty solution (or the best attempt at the upper bound).

mod config;
mod picker_count;

pub use config::SearchConfig;
pub use picker_count::{search, PickerCountSearch, SearchOutcome, TrialRecord};
