//! Domain model types for order picking.
//!
//! Provides the instance record read from JSON, routes as ordered item
//! sequences, solutions mapping pickers to their routes, and the run report
//! handed back to batch drivers.

mod instance;
mod report;
mod route;
mod solution;

pub use instance::Instance;
pub use report::RunReport;
pub use route::Route;
pub use solution::{PickerRoutes, Solution};
