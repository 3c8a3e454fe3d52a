//! Route type.

use serde::Serialize;

/// An ordered sequence of items collected in one round by a picker.
///
/// A route starts and ends at the depot (not stored in `items`). Items are
/// visited in the listed order.
///
/// # Examples
///
/// ```
/// use u_picking::models::Route;
///
/// let mut route = Route::new();
/// route.push(4);
/// route.push(1);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.items(), &[4, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    items: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a route visiting `items` in order.
    pub fn from_items(items: Vec<usize>) -> Self {
        Self { items }
    }

    /// Appends an item to the end of this route.
    pub fn push(&mut self, item: usize) {
        self.items.push(item);
    }

    /// Returns the items in visit order.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Returns a mutable reference to the item sequence.
    pub fn items_mut(&mut self) -> &mut Vec<usize> {
        &mut self.items
    }

    /// Number of items on this route.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this route collects nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Splits off the items from `at` onward into a new route.
    pub fn split_off(&mut self, at: usize) -> Route {
        Route {
            items: self.items.split_off(at),
        }
    }

    /// Appends every item of `other` after the items of this route.
    pub fn append(&mut self, other: Route) {
        self.items.extend(other.items);
    }
}

impl From<Vec<usize>> for Route {
    fn from(items: Vec<usize>) -> Self {
        Self::from_items(items)
    }
}
