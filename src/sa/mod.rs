//! Simulated annealing at a fixed picker count.
//!
//! # Algorithm
//!
//! 1. Build an initial solution over the selected pickers
//! 2. At each temperature level, run a fixed number of neighbor trials
//! 3. Accept with the Metropolis criterion: always if the penalty drops,
//!    otherwise with probability `exp(-delta / T)`
//! 4. Cool geometrically, `T *= alpha`
//! 5. Stop after enough consecutive low-acceptance levels, or once `T`
//!    falls below the minimum temperature
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"

mod config;
mod runner;

pub use config::{AnnealingConfig, STAGNATION_ACCEPTANCE_RATIO};
pub use runner::{AnnealingResult, AnnealingRun};
