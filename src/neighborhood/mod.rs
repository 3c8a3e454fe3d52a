//! Neighborhood moves for the annealing search.
//!
//! - [`Move::SwapItems`]: Exchange items between two pickers
//! - [`Move::MoveItem`]: Relocate one item to another picker
//! - [`Move::SplitRoute`]: Cut a route in two
//! - [`Move::MergeRoutes`]: Join two routes of one picker
//! - [`Move::ReorderRoute`]: Shuffle a route's visit order
//!
//! Moves honour category compatibility when the model declares categories.

mod moves;

pub use moves::{generate_neighbor, Move, SWAP_ATTEMPTS};
