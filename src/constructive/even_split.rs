//! Even-split constructive heuristic.
//!
//! Shuffles all items and deals them to pickers in contiguous chunks of
//! near-equal size (`⌊n/p⌋`, plus one for the first `n mod p` pickers),
//! then cuts each picker's chunk into capacity-sized routes. Ignores
//! categories and travel time; the annealing run repairs the rest.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluation::ProblemModel;
use crate::models::{Route, Solution};

/// Builds an initial solution by dealing shuffled items evenly.
///
/// # Arguments
///
/// * `model`: Problem model (items and capacity)
/// * `picker_ids`: Pickers to fill, in order
/// * `rng`: Random source for the shuffle
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_picking::models::Instance;
/// use u_picking::evaluation::ProblemModel;
/// use u_picking::constructive::even_split;
///
/// let json = r#"{
///     "amountOrderPickers": 2, "capacity": 2, "maxTimePerRound": 60,
///     "amountWarehouses": 5, "productLocations": [0, 1, 2, 3, 4],
///     "travelTimeMatrix": [[0,1,1,1,1,1],[1,0,1,1,1,1],[1,1,0,1,1,1],
///                          [1,1,1,0,1,1],[1,1,1,1,0,1],[1,1,1,1,1,0]],
///     "items": [0, 1, 2, 3, 4], "maxRoundsPerOrderPicker": 3
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let sol = even_split(&model, &[0, 1], &mut rng);
/// // 3 items for picker 0 (two routes), 2 for picker 1 (one route)
/// assert_eq!(sol.num_items(), 5);
/// assert_eq!(sol.num_routes(), 3);
/// ```
pub fn even_split<R: Rng>(model: &ProblemModel, picker_ids: &[usize], rng: &mut R) -> Solution {
    let mut solution = Solution::with_pickers(picker_ids);
    let p = picker_ids.len();
    if p == 0 {
        return solution;
    }

    let mut items = model.items().to_vec();
    items.shuffle(rng);

    let per_picker = items.len() / p;
    let extra = items.len() % p;

    let mut start = 0;
    for (idx, entry) in solution.pickers_mut().iter_mut().enumerate() {
        let count = per_picker + usize::from(idx < extra);
        entry.routes = split_into_routes(&items[start..start + count], model.capacity());
        start += count;
    }

    solution
}

/// Cuts an item sequence into consecutive routes of at most `capacity` items.
pub fn split_into_routes(items: &[usize], capacity: usize) -> Vec<Route> {
    items
        .chunks(capacity.max(1))
        .map(|chunk| Route::from_items(chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::uniform_model;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_split_into_routes() {
        let routes = split_into_routes(&[5, 6, 7, 8, 9], 2);
        assert_eq!(routes.len(), 3);
        assert_eq!(routes[0].items(), &[5, 6]);
        assert_eq!(routes[2].items(), &[9]);
        assert!(split_into_routes(&[], 3).is_empty());
    }

    #[test]
    fn test_even_split_sizes() {
        let model = uniform_model(7, 2, 100.0, 3);
        let mut rng = StdRng::seed_from_u64(42);
        let sol = even_split(&model, &[0, 1, 2], &mut rng);
        let counts: Vec<usize> = sol.pickers().iter().map(|p| p.num_items()).collect();
        assert_eq!(counts, vec![3, 2, 2]);
        for p in sol.pickers() {
            assert!(p.routes.iter().all(|r| r.len() <= 2));
        }
    }

    #[test]
    fn test_even_split_covers_all_items_once() {
        let model = uniform_model(10, 3, 1000.0, 4);
        let mut rng = StdRng::seed_from_u64(7);
        let sol = even_split(&model, &[0, 1, 2, 3], &mut rng);
        let mut items = sol.collected_items();
        items.sort_unstable();
        assert_eq!(items, (0..10).collect::<Vec<_>>());
        let b = model.penalty_breakdown(&sol);
        assert_eq!(b.missing_items + b.duplicate_items + b.category_violations, 0);
        assert_eq!(b.capacity, 0.0);
    }

    #[test]
    fn test_even_split_more_pickers_than_items() {
        let model = uniform_model(2, 2, 100.0, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let sol = even_split(&model, &[0, 1, 2, 3], &mut rng);
        assert_eq!(sol.num_pickers(), 4);
        assert_eq!(sol.num_active_pickers(), 2);
        assert_eq!(sol.num_items(), 2);
    }

    #[test]
    fn test_even_split_no_pickers() {
        let model = uniform_model(3, 2, 100.0, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let sol = even_split(&model, &[], &mut rng);
        assert_eq!(sol.num_pickers(), 0);
    }
}
