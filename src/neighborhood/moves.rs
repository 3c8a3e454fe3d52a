//! The five structural moves and their application.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::evaluation::ProblemModel;
use crate::models::{PickerRoutes, Route, Solution};

/// Attempts made by [`Move::SwapItems`] to find a category-compatible pair.
pub const SWAP_ATTEMPTS: usize = 10;

/// A randomized structural mutation of a solution.
///
/// Every move relocates or reorders items; none creates or destroys one.
/// When a move finds no eligible target it leaves the solution untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Exchange one item between routes of two different pickers.
    SwapItems,
    /// Move one item to the first route of another picker.
    MoveItem,
    /// Cut a route in two consecutive routes.
    SplitRoute,
    /// Concatenate two routes of the same picker.
    MergeRoutes,
    /// Shuffle the visit order of a route.
    ReorderRoute,
}

impl Move {
    /// All move kinds, in a fixed order.
    pub const ALL: [Move; 5] = [
        Move::SwapItems,
        Move::MoveItem,
        Move::SplitRoute,
        Move::MergeRoutes,
        Move::ReorderRoute,
    ];

    /// Picks a move kind uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Move {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Short identifier of the move.
    pub fn name(&self) -> &'static str {
        match self {
            Move::SwapItems => "swap_items",
            Move::MoveItem => "move_item",
            Move::SplitRoute => "split_route",
            Move::MergeRoutes => "merge_routes",
            Move::ReorderRoute => "reorder_route",
        }
    }

    /// Applies this move to `solution` in place.
    ///
    /// Returns `false` if no eligible picker, route or target existed, in
    /// which case the solution is unchanged.
    pub fn apply<R: Rng>(&self, solution: &mut Solution, model: &ProblemModel, rng: &mut R) -> bool {
        let non_empty: Vec<usize> = solution
            .pickers()
            .iter()
            .enumerate()
            .filter(|(_, p)| p.has_items())
            .map(|(idx, _)| idx)
            .collect();
        if non_empty.is_empty() {
            return false;
        }

        let pickers = solution.pickers_mut();
        match self {
            Move::SwapItems => swap_items(pickers, &non_empty, model, rng),
            Move::MoveItem => move_item(pickers, &non_empty, model, rng),
            Move::SplitRoute => split_route(pickers, &non_empty, rng),
            Move::MergeRoutes => merge_routes(pickers, &non_empty, rng),
            Move::ReorderRoute => reorder_route(pickers, &non_empty, rng),
        }
    }
}

/// Copies `current`, applies one uniformly chosen move, and returns the copy.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_picking::models::{Instance, Route, Solution};
/// use u_picking::evaluation::ProblemModel;
/// use u_picking::neighborhood::generate_neighbor;
///
/// let json = r#"{
///     "amountOrderPickers": 2, "capacity": 2, "maxTimePerRound": 60,
///     "amountWarehouses": 3, "productLocations": [0, 1, 2],
///     "travelTimeMatrix": [[0,1,1,1],[1,0,1,1],[1,1,0,1],[1,1,1,0]],
///     "items": [0, 1, 2], "maxRoundsPerOrderPicker": 2
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
/// let mut current = Solution::new();
/// current.set_routes(0, vec![Route::from_items(vec![0, 1])]);
/// current.set_routes(1, vec![Route::from_items(vec![2])]);
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let (neighbor, _mv) = generate_neighbor(&current, &model, &mut rng);
/// assert_eq!(neighbor.num_items(), 3);
/// assert_eq!(current.collected_items(), vec![0, 1, 2]);
/// ```
pub fn generate_neighbor<R: Rng>(
    current: &Solution,
    model: &ProblemModel,
    rng: &mut R,
) -> (Solution, Move) {
    let mut neighbor = current.clone();
    let mv = Move::random(rng);
    mv.apply(&mut neighbor, model, rng);
    (neighbor, mv)
}

/// Indices of the non-empty routes of a picker.
fn filled_routes(picker: &PickerRoutes, min_len: usize) -> Vec<usize> {
    picker
        .routes
        .iter()
        .enumerate()
        .filter(|(_, r)| r.len() >= min_len.max(1))
        .map(|(idx, _)| idx)
        .collect()
}

fn swap_items<R: Rng>(
    pickers: &mut [PickerRoutes],
    non_empty: &[usize],
    model: &ProblemModel,
    rng: &mut R,
) -> bool {
    if non_empty.len() < 2 {
        return false;
    }

    for _ in 0..SWAP_ATTEMPTS {
        let pair: Vec<usize> = non_empty.choose_multiple(rng, 2).copied().collect();
        let (p1, p2) = (pair[0], pair[1]);

        let routes1 = filled_routes(&pickers[p1], 1);
        let routes2 = filled_routes(&pickers[p2], 1);
        let (Some(&r1), Some(&r2)) = (routes1.choose(rng), routes2.choose(rng)) else {
            continue;
        };
        let i1 = rng.random_range(0..pickers[p1].routes[r1].len());
        let i2 = rng.random_range(0..pickers[p2].routes[r2].len());
        let item1 = pickers[p1].routes[r1].items()[i1];
        let item2 = pickers[p2].routes[r2].items()[i2];

        if model.can_assign(pickers[p1].picker_id, item2)
            && model.can_assign(pickers[p2].picker_id, item1)
        {
            pickers[p1].routes[r1].items_mut()[i1] = item2;
            pickers[p2].routes[r2].items_mut()[i2] = item1;
            return true;
        }
    }
    false
}

fn move_item<R: Rng>(
    pickers: &mut [PickerRoutes],
    non_empty: &[usize],
    model: &ProblemModel,
    rng: &mut R,
) -> bool {
    let Some(&p1) = non_empty.choose(rng) else {
        return false;
    };
    let routes1 = filled_routes(&pickers[p1], 1);
    let Some(&r1) = routes1.choose(rng) else {
        return false;
    };
    let pos = rng.random_range(0..pickers[p1].routes[r1].len());
    let item = pickers[p1].routes[r1].items()[pos];

    let targets: Vec<usize> = (0..pickers.len())
        .filter(|&p| p != p1 && model.can_assign(pickers[p].picker_id, item))
        .collect();
    let Some(&p2) = targets.choose(rng) else {
        return false;
    };

    pickers[p1].routes[r1].items_mut().remove(pos);
    match pickers[p2].routes.first_mut() {
        Some(first) => first.push(item),
        None => pickers[p2].routes.push(Route::from_items(vec![item])),
    }
    pickers[p1].remove_empty_routes();
    true
}

fn split_route<R: Rng>(pickers: &mut [PickerRoutes], non_empty: &[usize], rng: &mut R) -> bool {
    let Some(&p) = non_empty.choose(rng) else {
        return false;
    };
    let candidates = filled_routes(&pickers[p], 2);
    let Some(&r) = candidates.choose(rng) else {
        return false;
    };

    let routes = &mut pickers[p].routes;
    let at = rng.random_range(1..routes[r].len());
    let tail = routes[r].split_off(at);
    routes.insert(r + 1, tail);
    true
}

fn merge_routes<R: Rng>(pickers: &mut [PickerRoutes], non_empty: &[usize], rng: &mut R) -> bool {
    let Some(&p) = non_empty.choose(rng) else {
        return false;
    };
    let candidates = filled_routes(&pickers[p], 1);
    if candidates.len() < 2 {
        return false;
    }

    let pair: Vec<usize> = candidates.choose_multiple(rng, 2).copied().collect();
    let (first, second) = (pair[0], pair[1]);
    let routes = &mut pickers[p].routes;

    let mut merged = std::mem::take(&mut routes[first]);
    merged.append(std::mem::take(&mut routes[second]));
    routes.remove(first.max(second));
    routes.remove(first.min(second));
    routes.push(merged);
    true
}

fn reorder_route<R: Rng>(pickers: &mut [PickerRoutes], non_empty: &[usize], rng: &mut R) -> bool {
    let Some(&p) = non_empty.choose(rng) else {
        return false;
    };
    let candidates = filled_routes(&pickers[p], 2);
    let Some(&r) = candidates.choose(rng) else {
        return false;
    };
    pickers[p].routes[r].items_mut().shuffle(rng);
    true
}
