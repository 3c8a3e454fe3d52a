//! Solution evaluation.
//!
//! A [`ProblemModel`] wraps a validated instance and scores candidate
//! solutions with a weighted penalty:
//!
//! - **Capacity**: route length above capacity
//! - **Time**: cumulative picker time above the budget
//! - **Category**: items assigned to an incompatible picker
//! - **Missing**: required items absent from the solution
//! - **Duplicate**: items collected more than once
//!
//! A solution is valid exactly when its penalty is zero.

mod model;
mod penalty;

pub use model::{ProblemModel, RouteSummary};
pub use penalty::{PenaltyBreakdown, PenaltyWeights};
