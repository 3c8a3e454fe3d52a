//! Error types for instance loading and solver configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons an [`Instance`](crate::models::Instance) cannot become a
/// [`ProblemModel`](crate::evaluation::ProblemModel).
#[derive(Debug, Error)]
pub enum InstanceError {
    /// The instance file could not be read.
    #[error("failed to read instance file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON was malformed or a required field is missing.
    #[error("failed to parse instance: {0}")]
    Parse(#[from] serde_json::Error),

    /// Routes must hold at least one item.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    /// The per-picker time budget must be a finite, non-negative number.
    #[error("maxTimePerRound must be finite and non-negative, got {0}")]
    InvalidMaxTime(f64),

    /// The travel-time matrix has no rows.
    #[error("travelTimeMatrix is empty")]
    EmptyMatrix,

    /// A travel-time matrix row has the wrong length.
    #[error("travelTimeMatrix row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row index.
        row: usize,
        /// Actual row length.
        len: usize,
        /// Number of rows (expected row length).
        expected: usize,
    },

    /// An item id has no entry in `productLocations`.
    #[error("item {item} has no product location")]
    MissingLocation {
        /// Item identifier.
        item: usize,
    },

    /// A product location points outside the travel-time matrix.
    #[error("item {item} is stored at location {location}, outside a matrix of size {size}")]
    LocationOutOfRange {
        /// Item identifier.
        item: usize,
        /// Location index from `productLocations`.
        location: usize,
        /// Travel-time matrix size.
        size: usize,
    },
}

/// Invalid annealing or search parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Initial temperature must be positive.
    #[error("initial temperature must be positive, got {0}")]
    InitialTemperature(f64),

    /// Cooling factor must lie strictly between 0 and 1.
    #[error("cooling factor alpha must be in (0, 1), got {0}")]
    Alpha(f64),

    /// At least one trial per temperature level is required.
    #[error("max_iter_per_temp must be greater than zero")]
    ZeroIterations,

    /// Minimum temperature must be positive.
    #[error("min temperature must be positive, got {0}")]
    MinTemperature(f64),

    /// The outer search needs at least one picker count to try.
    #[error("max_pickers must be greater than zero")]
    ZeroPickers,
}
