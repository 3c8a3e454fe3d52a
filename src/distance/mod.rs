//! Travel-time matrices.
//!
//! Provides a dense travel-time matrix whose last row and column belong to
//! the depot.

mod matrix;

pub use matrix::TravelTimeMatrix;
