use rand::rngs::StdRng;
use rand::SeedableRng;
use u_picking::constructive::{category_split, select_diverse_pickers};
use u_picking::evaluation::{PenaltyWeights, ProblemModel};
use u_picking::models::{Instance, Solution};
use u_picking::sa::AnnealingConfig;
use u_picking::search::{search, PickerCountSearch, SearchConfig};

/// Every travel time 1, diagonal 999, item `i` stored at location `i`.
fn uniform_instance(items: usize, capacity: usize, max_time: f64, pickers: usize) -> Instance {
    let size = items + 1;
    Instance {
        amount_order_pickers: pickers,
        capacity,
        max_time_per_round: max_time,
        amount_warehouses: items,
        product_locations: (0..items).collect(),
        travel_time_matrix: (0..size)
            .map(|i| (0..size).map(|j| if i == j { 999.0 } else { 1.0 }).collect())
            .collect(),
        items: (0..items).collect(),
        max_rounds_per_order_picker: items,
        categories: Vec::new(),
        product_categories: Vec::new(),
        order_picker_categories: Vec::new(),
    }
}

fn fast_search() -> SearchConfig {
    SearchConfig::default().with_annealing(
        AnnealingConfig::default()
            .with_alpha(0.8)
            .with_iterations_per_temperature(30)
            .with_stagnation_threshold(5),
    )
}

#[test]
fn test_one_picker_two_full_routes() {
    let model = ProblemModel::new(uniform_instance(4, 2, 6.0, 1)).unwrap();
    let outcome = search(&model, fast_search().with_seed(42)).unwrap();

    assert!(outcome.is_valid);
    assert_eq!(outcome.num_pickers, 1);
    assert_eq!(outcome.best_penalty, 0.0);
    let mut items = outcome.solution.collected_items();
    items.sort_unstable();
    assert_eq!(items, vec![0, 1, 2, 3]);
}

#[test]
fn test_infeasible_time_budget_exhausts_pickers() {
    // Any single-item route takes 2.
    let model = ProblemModel::new(uniform_instance(5, 1, 0.5, 5)).unwrap();
    let outcome = search(&model, fast_search().with_max_pickers(3).with_seed(7)).unwrap();

    assert!(!outcome.is_valid);
    assert_eq!(outcome.num_pickers, 3);
    assert!(outcome.best_penalty > 0.0);
    assert_eq!(outcome.trials.len(), 4);
    assert!(outcome.trials.iter().all(|t| !t.is_valid));
}

#[test]
fn test_exclusive_categories_get_own_pickers() {
    let mut inst = uniform_instance(6, 10, 100.0, 4);
    inst.categories = vec!["frozen".into(), "dry".into()];
    inst.product_categories = (0..6)
        .map(|i| Some(if i < 3 { "frozen" } else { "dry" }.to_string()))
        .collect();
    inst.order_picker_categories = vec![
        Some("frozen".into()),
        Some("frozen".into()),
        Some("dry".into()),
        Some("dry".into()),
    ];
    let model = ProblemModel::new(inst).unwrap();

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selected = select_diverse_pickers(&model, 2, &mut rng);
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().any(|&p| p < 2), "no frozen picker in {selected:?}");
        assert!(selected.iter().any(|&p| p >= 2), "no dry picker in {selected:?}");

        let solution = category_split(&model, &selected, &mut rng);
        let breakdown = model.penalty_breakdown(&solution);
        assert_eq!(breakdown.category_violations, 0);
        assert_eq!(breakdown.category, 0.0);
        assert_eq!(solution.num_items(), 6);
    }
}

#[test]
fn test_category_search_finds_two_pickers() {
    let mut inst = uniform_instance(4, 4, 100.0, 3);
    inst.categories = vec!["frozen".into(), "dry".into()];
    inst.product_categories = vec![
        Some("frozen".into()),
        Some("frozen".into()),
        Some("dry".into()),
        Some("dry".into()),
    ];
    inst.order_picker_categories = vec![Some("frozen".into()), Some("dry".into()), None];
    let model = ProblemModel::new(inst).unwrap();

    let outcome = search(&model, fast_search().with_seed(3)).unwrap();
    assert!(outcome.is_valid);
    assert!(outcome.num_pickers <= 2);
    assert_eq!(model.penalty_breakdown(&outcome.solution).category, 0.0);
}

#[test]
fn test_empty_solution_penalized_per_missing_item() {
    let model = ProblemModel::new(uniform_instance(7, 3, 50.0, 2)).unwrap();

    let (penalty, valid) = model.evaluate(&Solution::with_pickers(&[0, 1]));
    assert_eq!(penalty, 7.0 * PenaltyWeights::MISSING);
    assert_eq!(penalty, 14_000.0);
    assert!(!valid);

    let (penalty, valid) = model.evaluate(&Solution::new());
    assert_eq!(penalty, 14_000.0);
    assert!(!valid);
}

#[test]
fn test_outer_loop_run_bound() {
    let feasible = ProblemModel::new(uniform_instance(6, 2, 3.0, 4)).unwrap();
    let infeasible = ProblemModel::new(uniform_instance(4, 1, 1.0, 4)).unwrap();

    for (model, k) in [(&feasible, 4), (&infeasible, 2), (&infeasible, 4)] {
        let search = PickerCountSearch::new(model, fast_search().with_max_pickers(k)).unwrap();
        let mut rng = StdRng::seed_from_u64(k as u64);
        let outcome = search.run_with_rng(&mut rng);

        assert!(outcome.trials.len() <= k + 1);
        assert!(outcome.num_pickers >= 1 && outcome.num_pickers <= k);
        let summed: usize = outcome.trials.iter().map(|t| t.visited_nodes).sum();
        assert_eq!(outcome.visited_nodes, summed);
    }
}

#[test]
fn test_malformed_instance_fails_fast() {
    let json = r#"{ "amountOrderPickers": 1, "capacity": 2 }"#;
    assert!(Instance::from_json_str(json).is_err());

    let mut inst = uniform_instance(3, 2, 10.0, 1);
    inst.product_locations.pop();
    assert!(ProblemModel::new(inst).is_err());
}

#[test]
fn test_report_serializes_result_fields() {
    let model = ProblemModel::new(uniform_instance(4, 2, 6.0, 2)).unwrap();
    let outcome = search(&model, fast_search().with_seed(1)).unwrap();
    let report = outcome.report(3.5);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["num_pickers"], 1);
    assert_eq!(value["is_valid"], true);
    assert_eq!(value["runtime"], 3.5);
    assert_eq!(value["visited_nodes"], outcome.visited_nodes);
}
