//! # u-picking
//!
//! Warehouse order-picking optimization: find the smallest number of
//! pickers that can collect every item under route capacity, per-picker
//! time budget and picker/item category constraints, using simulated
//! annealing.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Instance, Route, Solution, RunReport)
//! - [`distance`]: Travel-time matrix with a trailing depot index
//! - [`evaluation`]: Weighted penalty evaluation and category rules
//! - [`constructive`]: Initial solutions and diverse picker selection
//! - [`neighborhood`]: The five structural moves
//! - [`sa`]: Annealing loop at a fixed picker count
//! - [`search`]: Upward scan over picker counts
//!
//! ## Example
//!
//! ```
//! use u_picking::evaluation::ProblemModel;
//! use u_picking::models::Instance;
//! use u_picking::search::{search, SearchConfig};
//!
//! let json = r#"{
//!     "amountOrderPickers": 2, "capacity": 2, "maxTimePerRound": 6,
//!     "amountWarehouses": 4, "productLocations": [0, 1, 2, 3],
//!     "travelTimeMatrix": [[999,1,1,1,1],[1,999,1,1,1],[1,1,999,1,1],
//!                          [1,1,1,999,1],[1,1,1,1,999]],
//!     "items": [0, 1, 2, 3], "maxRoundsPerOrderPicker": 2
//! }"#;
//! let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
//! let outcome = search(&model, SearchConfig::default().with_seed(42)).unwrap();
//!
//! assert!(outcome.is_valid);
//! assert_eq!(outcome.num_pickers, 1);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod neighborhood;
pub mod sa;
pub mod search;

#[cfg(test)]
mod testing;

pub use error::{ConfigError, InstanceError};
pub use evaluation::ProblemModel;
pub use models::{Instance, RunReport, Solution};
pub use search::{search, SearchConfig, SearchOutcome};
