//! Category-aware picker selection and item assignment.
//!
//! [`select_diverse_pickers`] first reserves, for each item category, the
//! number of same-category pickers that capacity demands
//! (`ceil(items / capacity)`, capped by how many exist), then tops up with
//! arbitrary pickers or trims at random to reach the requested count.
//! [`category_split`] hands every item to a random compatible picker of the
//! selection and cuts each picker's items into capacity-sized routes.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::evaluation::ProblemModel;
use crate::models::Solution;

use super::even_split::split_into_routes;

/// Selects `count` picker ids, covering every item category first.
///
/// Without declared categories this is simply `0..count`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_picking::models::Instance;
/// use u_picking::evaluation::ProblemModel;
/// use u_picking::constructive::select_diverse_pickers;
///
/// let json = r#"{
///     "amountOrderPickers": 4, "capacity": 5, "maxTimePerRound": 60,
///     "amountWarehouses": 2, "productLocations": [0, 1],
///     "travelTimeMatrix": [[0, 1, 1], [1, 0, 1], [1, 1, 0]],
///     "items": [0, 1], "maxRoundsPerOrderPicker": 2,
///     "categories": ["a", "b"],
///     "productCategories": ["a", "b"],
///     "orderPickerCategories": ["a", "a", "a", "b"]
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
///
/// let selected = select_diverse_pickers(&model, 2, &mut rng);
/// assert_eq!(selected.len(), 2);
/// assert!(selected.contains(&3)); // the only "b" picker
/// ```
pub fn select_diverse_pickers<R: Rng>(model: &ProblemModel, count: usize, rng: &mut R) -> Vec<usize> {
    if !model.has_categories() {
        return (0..count).collect();
    }

    let by_cat = model.pickers_by_category();
    let mut selected: Vec<usize> = Vec::new();

    for (cat, item_count) in model.items_per_category() {
        let Some(available) = by_cat.get(cat) else {
            warn!(category = cat, items = item_count, "no picker serves this category");
            continue;
        };
        let needed = item_count.div_ceil(model.capacity()).min(available.len());
        selected.extend(available.choose_multiple(rng, needed).copied());
    }

    if selected.len() < count {
        let extra: Vec<usize> = (0..model.num_pickers())
            .filter(|p| !selected.contains(p))
            .take(count - selected.len())
            .collect();
        selected.extend(extra);
    }

    if selected.len() > count {
        selected = selected.choose_multiple(rng, count).copied().collect();
    }

    debug!(?selected, count, "selected pickers");
    selected
}

/// Builds an initial solution assigning each item to a compatible picker.
///
/// Items with no compatible picker in `picker_ids` go to an arbitrary
/// selected picker; the resulting category penalty keeps such a solution
/// infeasible without aborting the search.
pub fn category_split<R: Rng>(model: &ProblemModel, picker_ids: &[usize], rng: &mut R) -> Solution {
    let mut assigned: Vec<Vec<usize>> = vec![Vec::new(); picker_ids.len()];
    if picker_ids.is_empty() {
        return Solution::new();
    }

    for &item in model.items() {
        let compatible: Vec<usize> = (0..picker_ids.len())
            .filter(|&slot| model.can_assign(picker_ids[slot], item))
            .collect();

        let slot = match compatible.choose(rng) {
            Some(&slot) => slot,
            None => {
                warn!(item, "no selected picker may collect item; assigning anyway");
                rng.random_range(0..picker_ids.len())
            }
        };
        assigned[slot].push(item);
    }

    let mut solution = Solution::new();
    for (&picker_id, items) in picker_ids.iter().zip(&assigned) {
        solution.set_routes(picker_id, split_into_routes(items, model.capacity()));
    }
    solution
}
