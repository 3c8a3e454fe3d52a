//! Problem model: route timing, penalty evaluation and category rules.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::distance::TravelTimeMatrix;
use crate::error::InstanceError;
use crate::models::{Instance, Route, Solution};

use super::penalty::{PenaltyBreakdown, PenaltyWeights};

/// Per-route figures used when reporting a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    /// Picker that performs the route.
    pub picker_id: usize,
    /// Position of the route in the picker's list.
    pub round: usize,
    /// Items in visit order.
    pub items: Vec<usize>,
    /// Location of each item.
    pub locations: Vec<usize>,
    /// Depot-to-depot travel time.
    pub time: f64,
    /// Whether the route respects the item capacity.
    pub within_capacity: bool,
    /// Whether the route alone fits in the time budget.
    pub within_time: bool,
}

/// Read-only view of an [`Instance`] that evaluates solutions.
///
/// Constructed once per search; every operation borrows it immutably.
///
/// # Examples
///
/// ```
/// use u_picking::models::{Instance, Route, Solution};
/// use u_picking::evaluation::ProblemModel;
///
/// let json = r#"{
///     "amountOrderPickers": 1, "capacity": 2, "maxTimePerRound": 10,
///     "amountWarehouses": 2, "productLocations": [0, 1],
///     "travelTimeMatrix": [[999, 1, 2], [1, 999, 3], [2, 3, 999]],
///     "items": [0, 1], "maxRoundsPerOrderPicker": 1
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
///
/// // depot->0 (2) + 0->1 (1) + 1->depot (3)
/// assert_eq!(model.route_time(&Route::from_items(vec![0, 1])), 6.0);
///
/// let mut sol = Solution::new();
/// sol.set_routes(0, vec![Route::from_items(vec![0, 1])]);
/// assert_eq!(model.evaluate(&sol), (0.0, true));
/// ```
#[derive(Debug, Clone)]
pub struct ProblemModel {
    num_pickers: usize,
    capacity: usize,
    max_time: f64,
    num_warehouses: usize,
    max_rounds: usize,
    product_locations: Vec<usize>,
    travel_times: TravelTimeMatrix,
    items: Vec<usize>,
    categories: Vec<String>,
    product_categories: Vec<Option<String>>,
    picker_categories: Vec<Option<String>>,
}

impl ProblemModel {
    /// Builds a model from an instance, rejecting structurally invalid input.
    pub fn new(instance: Instance) -> Result<Self, InstanceError> {
        instance.validate()?;
        let travel_times =
            TravelTimeMatrix::from_rows(&instance.travel_time_matrix).ok_or(InstanceError::EmptyMatrix)?;

        Ok(Self {
            num_pickers: instance.amount_order_pickers,
            capacity: instance.capacity,
            max_time: instance.max_time_per_round,
            num_warehouses: instance.amount_warehouses,
            max_rounds: instance.max_rounds_per_order_picker,
            product_locations: instance.product_locations,
            travel_times,
            items: instance.items,
            categories: instance.categories,
            product_categories: instance.product_categories,
            picker_categories: instance.order_picker_categories,
        })
    }

    /// Upper bound on the number of pickers.
    pub fn num_pickers(&self) -> usize {
        self.num_pickers
    }

    /// Maximum number of items per route.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum cumulative route time per picker.
    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    /// Number of storage locations.
    pub fn num_warehouses(&self) -> usize {
        self.num_warehouses
    }

    /// Maximum rounds per picker.
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Items that must be collected.
    pub fn items(&self) -> &[usize] {
        &self.items
    }

    /// Declared categories.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The travel-time matrix.
    pub fn travel_times(&self) -> &TravelTimeMatrix {
        &self.travel_times
    }

    /// Location of an item.
    ///
    /// # Panics
    ///
    /// Panics if `item` has no location; every item of the instance has one.
    pub fn location(&self, item: usize) -> usize {
        self.product_locations[item]
    }

    /// Depot-to-depot travel time of a route, visiting items in order.
    ///
    /// Zero for an empty route.
    pub fn route_time(&self, route: &Route) -> f64 {
        self.sequence_time(route.items())
    }

    /// Depot-to-depot travel time of an item sequence.
    pub fn sequence_time(&self, items: &[usize]) -> f64 {
        let (Some(&first), Some(&last)) = (items.first(), items.last()) else {
            return 0.0;
        };
        let tm = &self.travel_times;
        let mut time = tm.from_depot(self.location(first));
        for w in items.windows(2) {
            time += tm.get(self.location(w[0]), self.location(w[1]));
        }
        time + tm.to_depot(self.location(last))
    }

    /// Evaluates a solution, returning `(penalty, is_valid)`.
    ///
    /// `is_valid` holds exactly when the penalty is zero.
    pub fn evaluate(&self, solution: &Solution) -> (f64, bool) {
        let penalty = self.penalty_breakdown(solution).total();
        (penalty, penalty == 0.0)
    }

    /// Returns `true` if the solution has zero penalty.
    pub fn is_valid(&self, solution: &Solution) -> bool {
        self.evaluate(solution).1
    }

    /// Computes every weighted violation term of a solution.
    pub fn penalty_breakdown(&self, solution: &Solution) -> PenaltyBreakdown {
        let mut b = PenaltyBreakdown::default();
        let mut collected = 0usize;
        let mut distinct: HashSet<usize> = HashSet::new();

        for picker in solution.pickers() {
            let mut picker_time = 0.0;
            for route in picker.routes.iter().filter(|r| !r.is_empty()) {
                let wrong = route
                    .items()
                    .iter()
                    .filter(|&&item| !self.can_assign(picker.picker_id, item))
                    .count();
                b.category_violations += wrong;
                b.category += wrong as f64 * PenaltyWeights::CATEGORY;

                if route.len() > self.capacity {
                    b.capacity += (route.len() - self.capacity) as f64 * PenaltyWeights::CAPACITY;
                }

                picker_time += self.route_time(route);
                collected += route.len();
                distinct.extend(route.items().iter().copied());
            }
            if picker_time > self.max_time {
                b.time += (picker_time - self.max_time) * PenaltyWeights::TIME;
            }
        }

        b.missing_items = self.items.len().saturating_sub(distinct.len());
        b.missing = b.missing_items as f64 * PenaltyWeights::MISSING;
        b.duplicate_items = collected - distinct.len();
        b.duplicate = b.duplicate_items as f64 * PenaltyWeights::DUPLICATE;
        b
    }

    /// Category of a picker, if declared.
    pub fn picker_category(&self, picker_id: usize) -> Option<&str> {
        self.picker_categories.get(picker_id)?.as_deref()
    }

    /// Category of an item, if declared.
    pub fn item_category(&self, item: usize) -> Option<&str> {
        self.product_categories.get(item)?.as_deref()
    }

    /// Returns `true` if pickers must be selected with category coverage.
    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty() && !self.picker_categories.is_empty()
    }

    /// Whether `picker_id` may collect `item`.
    ///
    /// True when either side has no category or both categories match.
    pub fn can_assign(&self, picker_id: usize, item: usize) -> bool {
        match (self.picker_category(picker_id), self.item_category(item)) {
            (Some(p), Some(i)) => p == i,
            _ => true,
        }
    }

    /// Items that `picker_id` may collect.
    pub fn items_for_picker(&self, picker_id: usize) -> Vec<usize> {
        self.items
            .iter()
            .copied()
            .filter(|&item| self.can_assign(picker_id, item))
            .collect()
    }

    /// Categories required by at least one item.
    pub fn categories_needed(&self) -> BTreeSet<&str> {
        self.items
            .iter()
            .filter_map(|&item| self.item_category(item))
            .collect()
    }

    /// Pickers `0..num_pickers` grouped by declared category.
    pub fn pickers_by_category(&self) -> BTreeMap<&str, Vec<usize>> {
        let mut by_cat: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for picker_id in 0..self.num_pickers {
            if let Some(cat) = self.picker_category(picker_id) {
                by_cat.entry(cat).or_default().push(picker_id);
            }
        }
        by_cat
    }

    /// Number of items per declared item category.
    pub fn items_per_category(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for &item in &self.items {
            if let Some(cat) = self.item_category(item) {
                *counts.entry(cat).or_default() += 1;
            }
        }
        counts
    }

    /// Lower bound on pickers from capacity alone: `ceil(|items| / capacity)`.
    pub fn min_pickers_by_capacity(&self) -> usize {
        self.items.len().div_ceil(self.capacity)
    }

    /// Per-route timing and fit, in picker and route order; empty routes are skipped.
    pub fn route_summaries(&self, solution: &Solution) -> Vec<RouteSummary> {
        let mut summaries = Vec::new();
        for picker in solution.pickers() {
            for (round, route) in picker.routes.iter().enumerate() {
                if route.is_empty() {
                    continue;
                }
                let time = self.route_time(route);
                summaries.push(RouteSummary {
                    picker_id: picker.picker_id,
                    round,
                    items: route.items().to_vec(),
                    locations: route.items().iter().map(|&i| self.location(i)).collect(),
                    time,
                    within_capacity: route.len() <= self.capacity,
                    within_time: time <= self.max_time,
                });
            }
        }
        summaries
    }
}
