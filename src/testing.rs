//! Instance fixtures shared by unit tests.

use crate::evaluation::ProblemModel;
use crate::models::Instance;

/// `n` items at locations `0..n`, every travel time 1 except a 999 diagonal.
pub(crate) fn uniform_instance(n: usize, capacity: usize, max_time: f64, pickers: usize) -> Instance {
    let size = n + 1;
    let travel_time_matrix = (0..size)
        .map(|i| {
            (0..size)
                .map(|j| if i == j { 999.0 } else { 1.0 })
                .collect()
        })
        .collect();
    Instance {
        amount_order_pickers: pickers,
        capacity,
        max_time_per_round: max_time,
        amount_warehouses: n,
        product_locations: (0..n).collect(),
        travel_time_matrix,
        items: (0..n).collect(),
        max_rounds_per_order_picker: n,
        categories: Vec::new(),
        product_categories: Vec::new(),
        order_picker_categories: Vec::new(),
    }
}

pub(crate) fn uniform_model(n: usize, capacity: usize, max_time: f64, pickers: usize) -> ProblemModel {
    ProblemModel::new(uniform_instance(n, capacity, max_time, pickers)).expect("valid fixture")
}

/// Items `0..half` are "frozen", the rest "dry"; pickers alternate
/// frozen, dry, frozen, dry, ...
pub(crate) fn category_model(n: usize, capacity: usize, max_time: f64, pickers: usize) -> ProblemModel {
    let mut inst = uniform_instance(n, capacity, max_time, pickers);
    let half = n / 2;
    inst.categories = vec!["frozen".to_string(), "dry".to_string()];
    inst.product_categories = (0..n)
        .map(|i| Some(if i < half { "frozen" } else { "dry" }.to_string()))
        .collect();
    inst.order_picker_categories = (0..pickers)
        .map(|p| Some(if p % 2 == 0 { "frozen" } else { "dry" }.to_string()))
        .collect();
    ProblemModel::new(inst).expect("valid fixture")
}
