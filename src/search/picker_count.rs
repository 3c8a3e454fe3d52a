//! Upward scan over picker counts.

use rand::Rng;
use tracing::{info, warn};

use super::config::SearchConfig;
use crate::constructive::SolutionBuilder;
use crate::error::ConfigError;
use crate::evaluation::ProblemModel;
use crate::models::{RunReport, Solution};
use crate::sa::{AnnealingResult, AnnealingRun};

/// Outcome of one annealing run inside the search.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialRecord {
    /// Picker count tried.
    pub num_pickers: usize,
    /// Pickers selected for the trial.
    pub picker_ids: Vec<usize>,
    /// Best penalty reached.
    pub best_penalty: f64,
    /// Neighbors evaluated during the trial.
    pub visited_nodes: usize,
    /// Whether the trial reached zero penalty.
    pub is_valid: bool,
    /// Whether this was the rerun at the upper bound after every count failed.
    pub fallback: bool,
}

impl TrialRecord {
    fn from_run(num_pickers: usize, run: &AnnealingResult, fallback: bool) -> Self {
        Self {
            num_pickers,
            picker_ids: run.picker_ids.clone(),
            best_penalty: run.best_penalty,
            visited_nodes: run.visited_nodes,
            is_valid: run.is_valid,
            fallback,
        }
    }
}

/// Result of a [`PickerCountSearch`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Neighbor evaluations across every trial, fallback included.
    pub visited_nodes: usize,
    /// Picker count of the returned solution.
    pub num_pickers: usize,
    /// Returned solution.
    pub solution: Solution,
    /// Penalty of the returned solution.
    pub best_penalty: f64,
    /// Whether the returned solution has zero penalty.
    pub is_valid: bool,
    /// Pickers the returned solution was built over.
    pub picker_ids: Vec<usize>,
    /// One record per annealing run, in execution order.
    pub trials: Vec<TrialRecord>,
}

impl SearchOutcome {
    /// Packages the outcome with a caller-measured runtime in milliseconds.
    pub fn report(&self, runtime: f64) -> RunReport {
        RunReport {
            visited_nodes: self.visited_nodes,
            runtime,
            num_pickers: self.num_pickers,
            is_valid: self.is_valid,
        }
    }
}

/// Finds the smallest picker count, scanning upward, that yields a
/// zero-penalty solution.
///
/// For each `p` in `1..=max_pickers` a picker subset is selected (covering
/// every category when the instance declares them) and one annealing run
/// is made. The first valid run ends the search. If none is valid, one more
/// run at `max_pickers` is made and its best attempt returned, so at most
/// `max_pickers + 1` runs happen.
///
/// The first feasible count is a greedy answer, not a proven minimum.
///
/// # Examples
///
/// ```
/// use u_picking::evaluation::ProblemModel;
/// use u_picking::models::Instance;
/// use u_picking::sa::AnnealingConfig;
/// use u_picking::search::{PickerCountSearch, SearchConfig};
///
/// let json = r#"{
///     "amountOrderPickers": 2, "capacity": 2, "maxTimePerRound": 10,
///     "amountWarehouses": 2, "productLocations": [0, 1],
///     "travelTimeMatrix": [[999, 1, 1], [1, 999, 1], [1, 1, 999]],
///     "items": [0, 1], "maxRoundsPerOrderPicker": 1
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
/// let config = SearchConfig::default()
///     .with_annealing(AnnealingConfig::default().with_alpha(0.5).with_iterations_per_temperature(10))
///     .with_seed(3);
///
/// let outcome = PickerCountSearch::new(&model, config).unwrap().run();
/// assert!(outcome.is_valid);
/// assert_eq!(outcome.num_pickers, 1);
/// ```
pub struct PickerCountSearch<'a> {
    model: &'a ProblemModel,
    config: SearchConfig,
    max_pickers: usize,
}

impl<'a> PickerCountSearch<'a> {
    /// Validates `config` and resolves the picker upper bound.
    pub fn new(model: &'a ProblemModel, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let max_pickers = config.resolve_max_pickers(model.num_pickers());
        if max_pickers == 0 {
            return Err(ConfigError::ZeroPickers);
        }
        Ok(Self {
            model,
            config,
            max_pickers,
        })
    }

    /// Largest picker count the search will try.
    pub fn max_pickers(&self) -> usize {
        self.max_pickers
    }

    /// Runs the search with a random source built from the configured seed.
    pub fn run(&self) -> SearchOutcome {
        let mut rng = self.config.annealing.rng();
        self.run_with_rng(&mut rng)
    }

    /// Runs the search, drawing every random choice from `rng`.
    pub fn run_with_rng<R: Rng>(&self, rng: &mut R) -> SearchOutcome {
        let model = self.model;
        let builder = SolutionBuilder::new(model);

        info!(
            items = model.items().len(),
            capacity = model.capacity(),
            max_time = model.max_time(),
            max_pickers = self.max_pickers,
            "starting picker-count search"
        );
        if model.has_categories() {
            info!(categories = ?model.categories_needed(), "categories needed by items");
            for (category, pickers) in model.pickers_by_category() {
                info!(category, pickers = pickers.len(), "picker distribution");
            }
        }
        info!(
            min_pickers = model.min_pickers_by_capacity(),
            "theoretical minimum (capacity only)"
        );

        let mut total_visited = 0usize;
        let mut trials = Vec::with_capacity(self.max_pickers + 1);

        for num_pickers in 1..=self.max_pickers {
            let picker_ids = builder.select_pickers(num_pickers, rng);
            let run = self.anneal(&picker_ids, rng);
            total_visited += run.visited_nodes;
            trials.push(TrialRecord::from_run(num_pickers, &run, false));

            if run.is_valid {
                info!(
                    num_pickers,
                    ?picker_ids,
                    visited = run.visited_nodes,
                    "valid solution found"
                );
                return Self::outcome(num_pickers, run, total_visited, trials);
            }

            info!(
                num_pickers,
                penalty = run.best_penalty,
                visited = run.visited_nodes,
                "no valid solution"
            );
        }

        warn!(
            max_pickers = self.max_pickers,
            "no valid solution at any picker count, returning best attempt"
        );

        let picker_ids = builder.select_pickers(self.max_pickers, rng);
        let run = self.anneal(&picker_ids, rng);
        total_visited += run.visited_nodes;
        trials.push(TrialRecord::from_run(self.max_pickers, &run, true));

        Self::outcome(self.max_pickers, run, total_visited, trials)
    }

    fn anneal<R: Rng>(&self, picker_ids: &[usize], rng: &mut R) -> AnnealingResult {
        AnnealingRun::run_validated(self.model, picker_ids, &self.config.annealing, rng)
    }

    fn outcome(
        num_pickers: usize,
        run: AnnealingResult,
        visited_nodes: usize,
        trials: Vec<TrialRecord>,
    ) -> SearchOutcome {
        SearchOutcome {
            visited_nodes,
            num_pickers,
            solution: run.best,
            best_penalty: run.best_penalty,
            is_valid: run.is_valid,
            picker_ids: run.picker_ids,
            trials,
        }
    }
}

/// Runs a [`PickerCountSearch`] over `model` with `config`.
///
/// This is the crate's main entry point: it returns the visited-node
/// total, the chosen picker count, the solution and its validity.
pub fn search(model: &ProblemModel, config: SearchConfig) -> Result<SearchOutcome, ConfigError> {
    Ok(PickerCountSearch::new(model, config)?.run())
}
