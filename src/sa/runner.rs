//! Annealing loop for a fixed set of pickers.

use rand::Rng;
use tracing::{debug, span, Level};

use super::config::{AnnealingConfig, STAGNATION_ACCEPTANCE_RATIO};
use crate::constructive::SolutionBuilder;
use crate::error::ConfigError;
use crate::evaluation::ProblemModel;
use crate::models::Solution;
use crate::neighborhood::generate_neighbor;

/// Result of one annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// The best solution found.
    pub best: Solution,

    /// Penalty of the best solution.
    pub best_penalty: f64,

    /// Whether the best solution has zero penalty.
    pub is_valid: bool,

    /// Pickers the run was restricted to.
    pub picker_ids: Vec<usize>,

    /// Penalty of the constructed starting solution.
    pub initial_penalty: f64,

    /// Neighbors generated and evaluated.
    pub visited_nodes: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature levels completed.
    pub temperature_levels: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Best penalty after each temperature level.
    pub penalty_history: Vec<f64>,
}

/// Executes simulated annealing over a [`ProblemModel`].
///
/// The loop cools geometrically and stops after `stagnation_threshold`
/// consecutive levels in which less than 1% of the trials were accepted,
/// or once the temperature falls below `min_temperature`.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_picking::evaluation::ProblemModel;
/// use u_picking::models::Instance;
/// use u_picking::sa::{AnnealingConfig, AnnealingRun};
///
/// let json = r#"{
///     "amountOrderPickers": 1, "capacity": 2, "maxTimePerRound": 10,
///     "amountWarehouses": 2, "productLocations": [0, 1],
///     "travelTimeMatrix": [[999, 1, 1], [1, 999, 1], [1, 1, 999]],
///     "items": [0, 1], "maxRoundsPerOrderPicker": 1
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
/// let config = AnnealingConfig::default().with_alpha(0.5).with_iterations_per_temperature(10);
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let result = AnnealingRun::run(&model, &[0], &config, &mut rng).unwrap();
/// assert!(result.is_valid);
/// assert_eq!(result.best.num_items(), 2);
/// ```
pub struct AnnealingRun;

impl AnnealingRun {
    /// Runs annealing restricted to `picker_ids`, drawing randomness from `rng`.
    pub fn run<R: Rng>(
        model: &ProblemModel,
        picker_ids: &[usize],
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> Result<AnnealingResult, ConfigError> {
        config.validate()?;
        Ok(Self::run_validated(model, picker_ids, config, rng))
    }

    /// Same as [`run`](Self::run) for a config the caller already validated.
    pub(crate) fn run_validated<R: Rng>(
        model: &ProblemModel,
        picker_ids: &[usize],
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> AnnealingResult {
        let run_span = span!(Level::DEBUG, "anneal", pickers = picker_ids.len());
        let _guard = run_span.enter();

        let mut current = SolutionBuilder::new(model).build(picker_ids, rng);
        let (mut current_penalty, _) = model.evaluate(&current);
        let initial_penalty = current_penalty;
        let mut best = current.clone();
        let mut best_penalty = current_penalty;

        debug!(initial_penalty, ?picker_ids, "initial solution built");

        let iterations = config.iterations_per_temperature;
        let mut temperature = config.initial_temperature;
        let mut stagnation = 0usize;
        let mut visited_nodes = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut temperature_levels = 0usize;
        let mut penalty_history = vec![best_penalty];

        while stagnation < config.stagnation_threshold {
            let mut accepted_here = 0usize;

            for _ in 0..iterations {
                let (neighbor, _) = generate_neighbor(&current, model, rng);
                let (neighbor_penalty, _) = model.evaluate(&neighbor);
                visited_nodes += 1;

                let delta = neighbor_penalty - current_penalty;

                // Metropolis criterion; equal-penalty moves always pass
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    rng.random::<f64>() < (-delta / temperature).exp()
                };

                if accept {
                    current = neighbor;
                    current_penalty = neighbor_penalty;
                    accepted_here += 1;

                    if current_penalty < best_penalty {
                        best = current.clone();
                        best_penalty = current_penalty;
                    }
                }
            }

            accepted_moves += accepted_here;
            temperature_levels += 1;
            penalty_history.push(best_penalty);

            if (accepted_here as f64) < iterations as f64 * STAGNATION_ACCEPTANCE_RATIO {
                stagnation += 1;
            } else {
                stagnation = 0;
            }

            debug!(
                level = temperature_levels,
                temperature,
                accepted = accepted_here,
                stagnation,
                best_penalty,
                "temperature level done"
            );

            temperature *= config.alpha;
            if temperature < config.min_temperature {
                break;
            }
        }

        let is_valid = best_penalty == 0.0;

        debug!(
            best_penalty,
            is_valid,
            visited_nodes,
            temperature_levels,
            final_temperature = temperature,
            "annealing finished"
        );

        AnnealingResult {
            best,
            best_penalty,
            is_valid,
            picker_ids: picker_ids.to_vec(),
            initial_penalty,
            visited_nodes,
            accepted_moves,
            improving_moves,
            temperature_levels,
            final_temperature: temperature,
            penalty_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{category_model, uniform_model};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quick_config() -> AnnealingConfig {
        AnnealingConfig::default()
            .with_alpha(0.8)
            .with_iterations_per_temperature(20)
            .with_stagnation_threshold(3)
    }

    #[test]
    fn test_single_picker_feasible() {
        let model = uniform_model(4, 2, 10.0, 1);
        let mut rng = StdRng::seed_from_u64(42);
        let result = AnnealingRun::run(&model, &[0], &quick_config(), &mut rng).unwrap();

        assert!(result.is_valid);
        assert_eq!(result.best_penalty, 0.0);
        assert_eq!(result.best.num_items(), 4);
        assert_eq!(result.picker_ids, vec![0]);
    }

    #[test]
    fn test_visited_counts_every_trial() {
        let model = uniform_model(6, 2, 100.0, 2);
        let config = quick_config();
        let mut rng = StdRng::seed_from_u64(3);
        let result = AnnealingRun::run(&model, &[0, 1], &config, &mut rng).unwrap();

        assert!(result.temperature_levels > 0);
        assert_eq!(
            result.visited_nodes,
            result.temperature_levels * config.iterations_per_temperature
        );
        assert_eq!(result.penalty_history.len(), result.temperature_levels + 1);
    }

    #[test]
    fn test_best_penalty_matches_evaluation() {
        let model = uniform_model(5, 1, 3.0, 2);
        let mut rng = StdRng::seed_from_u64(9);
        let result = AnnealingRun::run(&model, &[0, 1], &quick_config(), &mut rng).unwrap();

        let (penalty, valid) = model.evaluate(&result.best);
        assert_eq!(penalty, result.best_penalty);
        assert_eq!(valid, result.is_valid);
        assert!(result.best_penalty <= result.initial_penalty);
    }

    #[test]
    fn test_best_penalty_never_increases() {
        let model = uniform_model(8, 2, 5.0, 2);
        let mut rng = StdRng::seed_from_u64(17);
        let result = AnnealingRun::run(&model, &[0, 1], &quick_config(), &mut rng).unwrap();

        for pair in result.penalty_history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn test_zero_stagnation_threshold_skips_loop() {
        let model = uniform_model(4, 2, 10.0, 1);
        let config = quick_config().with_stagnation_threshold(0);
        let mut rng = StdRng::seed_from_u64(1);
        let result = AnnealingRun::run(&model, &[0], &config, &mut rng).unwrap();

        assert_eq!(result.visited_nodes, 0);
        assert_eq!(result.temperature_levels, 0);
        assert_eq!(result.best_penalty, result.initial_penalty);
        assert_eq!(result.final_temperature, config.initial_temperature);
    }

    #[test]
    fn test_stops_below_min_temperature() {
        let model = uniform_model(4, 2, 10.0, 1);
        let config = AnnealingConfig::default()
            .with_initial_temperature(1.0)
            .with_alpha(0.1)
            .with_min_temperature(0.05)
            .with_iterations_per_temperature(5)
            .with_stagnation_threshold(100);
        let mut rng = StdRng::seed_from_u64(5);
        let result = AnnealingRun::run(&model, &[0], &config, &mut rng).unwrap();

        // 1.0 -> 0.1 -> 0.01 < 0.05
        assert_eq!(result.temperature_levels, 2);
        assert_eq!(result.visited_nodes, 10);
        assert!(result.final_temperature < config.min_temperature);
    }

    #[test]
    fn test_same_seed_same_result() {
        let model = uniform_model(6, 2, 4.0, 3);
        let config = quick_config();

        let mut rng_a = StdRng::seed_from_u64(77);
        let a = AnnealingRun::run(&model, &[0, 1, 2], &config, &mut rng_a).unwrap();
        let mut rng_b = StdRng::seed_from_u64(77);
        let b = AnnealingRun::run(&model, &[0, 1, 2], &config, &mut rng_b).unwrap();

        assert_eq!(a.best, b.best);
        assert_eq!(a.visited_nodes, b.visited_nodes);
        assert_eq!(a.best_penalty, b.best_penalty);
    }

    #[test]
    fn test_category_run_keeps_items_on_matching_pickers() {
        let model = category_model(6, 3, 100.0, 2);
        let mut rng = StdRng::seed_from_u64(8);
        let result = AnnealingRun::run(&model, &[0, 1], &quick_config(), &mut rng).unwrap();

        assert!(result.is_valid);
        for picker in result.best.pickers() {
            for route in &picker.routes {
                for &item in route.items() {
                    assert!(model.can_assign(picker.picker_id, item));
                }
            }
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let model = uniform_model(2, 1, 10.0, 1);
        let config = AnnealingConfig::default().with_alpha(1.5);
        let mut rng = StdRng::seed_from_u64(0);
        let err = AnnealingRun::run(&model, &[0], &config, &mut rng).unwrap_err();
        assert_eq!(err, ConfigError::Alpha(1.5));
    }
}
