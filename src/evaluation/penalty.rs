//! Penalty weights and per-term breakdown.

/// Fixed weights of the violation terms.
///
/// Correctness violations (missing, duplicate, category) outweigh capacity,
/// which outweighs time, so the acceptance criterion repairs item
/// membership before it optimises travel.
pub struct PenaltyWeights;

impl PenaltyWeights {
    /// Per item above route capacity.
    pub const CAPACITY: f64 = 1000.0;
    /// Per time unit above a picker's time budget.
    pub const TIME: f64 = 50.0;
    /// Per item on a route whose picker may not collect it.
    pub const CATEGORY: f64 = 2500.0;
    /// Per item collected by no route.
    pub const MISSING: f64 = 2000.0;
    /// Per extra occurrence of an already collected item.
    pub const DUPLICATE: f64 = 1500.0;
}

/// Weighted violation terms of a solution.
///
/// # Examples
///
/// ```
/// use u_picking::evaluation::PenaltyBreakdown;
///
/// let b = PenaltyBreakdown { missing: 4000.0, missing_items: 2, ..Default::default() };
/// assert_eq!(b.total(), 4000.0);
/// assert!(!b.is_feasible());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PenaltyBreakdown {
    /// Capacity term (weighted).
    pub capacity: f64,
    /// Time term (weighted).
    pub time: f64,
    /// Category term (weighted).
    pub category: f64,
    /// Missing-item term (weighted).
    pub missing: f64,
    /// Duplicate-item term (weighted).
    pub duplicate: f64,
    /// Items collected by a picker of the wrong category.
    pub category_violations: usize,
    /// Items collected by no route.
    pub missing_items: usize,
    /// Extra occurrences of collected items.
    pub duplicate_items: usize,
}

impl PenaltyBreakdown {
    /// Sum of all weighted terms.
    pub fn total(&self) -> f64 {
        self.capacity + self.time + self.category + self.missing + self.duplicate
    }

    /// Returns `true` if the total penalty is zero.
    pub fn is_feasible(&self) -> bool {
        self.total() == 0.0
    }
}
