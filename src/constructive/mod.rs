//! Constructive heuristics for building initial picking solutions.
//!
//! - [`even_split`]: Shuffle and deal items evenly across pickers
//! - [`select_diverse_pickers`]: Category-covering picker subset
//! - [`category_split`]: Assign each item to a random compatible picker
//! - [`SolutionBuilder`]: Picks the variant matching the model

mod builder;
mod category;
mod even_split;

pub use builder::SolutionBuilder;
pub use category::{category_split, select_diverse_pickers};
pub use even_split::{even_split, split_into_routes};
