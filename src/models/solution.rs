//! Solution types: per-picker route lists.

use serde::Serialize;

use super::Route;

/// The routes assigned to one picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerRoutes {
    /// Picker identifier (index into the instance's picker list).
    pub picker_id: usize,
    /// Rounds performed by this picker, in order.
    pub routes: Vec<Route>,
}

impl PickerRoutes {
    /// Creates an entry with no routes.
    pub fn new(picker_id: usize) -> Self {
        Self {
            picker_id,
            routes: Vec::new(),
        }
    }

    /// Returns `true` if any route of this picker holds an item.
    pub fn has_items(&self) -> bool {
        self.routes.iter().any(|r| !r.is_empty())
    }

    /// Number of items over all routes of this picker.
    pub fn num_items(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Drops empty routes, keeping the order of the others.
    pub fn remove_empty_routes(&mut self) {
        self.routes.retain(|r| !r.is_empty());
    }
}

/// A complete assignment of routes to pickers.
///
/// Pickers keep the order in which they were added, which is the order of
/// the selected picker subset. Feasibility (every item exactly once, route
/// capacity, picker time, categories) is not enforced structurally; it is
/// measured by [`ProblemModel::evaluate`](crate::evaluation::ProblemModel::evaluate).
///
/// # Examples
///
/// ```
/// use u_picking::models::{Route, Solution};
///
/// let mut sol = Solution::with_pickers(&[3, 1]);
/// sol.picker_mut(1).unwrap().routes.push(Route::from_items(vec![0, 2]));
/// assert_eq!(sol.picker_ids(), vec![3, 1]);
/// assert_eq!(sol.num_items(), 2);
/// assert_eq!(sol.num_routes(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Solution {
    pickers: Vec<PickerRoutes>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self {
            pickers: Vec::new(),
        }
    }

    /// Creates a solution with an empty entry for each picker, in order.
    pub fn with_pickers(picker_ids: &[usize]) -> Self {
        Self {
            pickers: picker_ids.iter().map(|&id| PickerRoutes::new(id)).collect(),
        }
    }

    /// Adds a picker with the given routes.
    ///
    /// If the picker is already present its routes are replaced.
    pub fn set_routes(&mut self, picker_id: usize, routes: Vec<Route>) {
        match self.picker_mut(picker_id) {
            Some(entry) => entry.routes = routes,
            None => self.pickers.push(PickerRoutes { picker_id, routes }),
        }
    }

    /// Returns the picker entries in insertion order.
    pub fn pickers(&self) -> &[PickerRoutes] {
        &self.pickers
    }

    /// Returns a mutable reference to the picker entries.
    pub fn pickers_mut(&mut self) -> &mut [PickerRoutes] {
        &mut self.pickers
    }

    /// Looks up the entry for a picker.
    pub fn picker(&self, picker_id: usize) -> Option<&PickerRoutes> {
        self.pickers.iter().find(|p| p.picker_id == picker_id)
    }

    /// Looks up the entry for a picker, mutably.
    pub fn picker_mut(&mut self, picker_id: usize) -> Option<&mut PickerRoutes> {
        self.pickers.iter_mut().find(|p| p.picker_id == picker_id)
    }

    /// Picker ids in insertion order.
    pub fn picker_ids(&self) -> Vec<usize> {
        self.pickers.iter().map(|p| p.picker_id).collect()
    }

    /// Number of pickers in this solution (including idle ones).
    pub fn num_pickers(&self) -> usize {
        self.pickers.len()
    }

    /// Number of pickers holding at least one item.
    pub fn num_active_pickers(&self) -> usize {
        self.pickers.iter().filter(|p| p.has_items()).count()
    }

    /// Total number of routes across all pickers.
    pub fn num_routes(&self) -> usize {
        self.pickers.iter().map(|p| p.routes.len()).sum()
    }

    /// Total number of item slots across all routes (duplicates counted).
    pub fn num_items(&self) -> usize {
        self.pickers.iter().map(PickerRoutes::num_items).sum()
    }

    /// Every item held by the solution, in picker and route order.
    pub fn collected_items(&self) -> Vec<usize> {
        self.pickers
            .iter()
            .flat_map(|p| p.routes.iter())
            .flat_map(|r| r.items().iter().copied())
            .collect()
    }
}
