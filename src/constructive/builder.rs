//! Initial-solution builder for a fixed picker count.

use rand::Rng;

use crate::evaluation::ProblemModel;
use crate::models::Solution;

use super::{category_split, even_split, select_diverse_pickers};

/// Builds initial solutions, choosing the category-aware variant when the
/// model declares categories.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_picking::models::Instance;
/// use u_picking::evaluation::ProblemModel;
/// use u_picking::constructive::SolutionBuilder;
///
/// let json = r#"{
///     "amountOrderPickers": 3, "capacity": 2, "maxTimePerRound": 60,
///     "amountWarehouses": 3, "productLocations": [0, 1, 2],
///     "travelTimeMatrix": [[0,1,1,1],[1,0,1,1],[1,1,0,1],[1,1,1,0]],
///     "items": [0, 1, 2], "maxRoundsPerOrderPicker": 2
/// }"#;
/// let model = ProblemModel::new(Instance::from_json_str(json).unwrap()).unwrap();
/// let builder = SolutionBuilder::new(&model);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let pickers = builder.select_pickers(2, &mut rng);
/// assert_eq!(pickers, vec![0, 1]);
/// let sol = builder.build(&pickers, &mut rng);
/// assert_eq!(sol.num_items(), 3);
/// ```
pub struct SolutionBuilder<'a> {
    model: &'a ProblemModel,
}

impl<'a> SolutionBuilder<'a> {
    /// Creates a builder over the given model.
    pub fn new(model: &'a ProblemModel) -> Self {
        Self { model }
    }

    /// Chooses which pickers take part in a trial with `count` pickers.
    pub fn select_pickers<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<usize> {
        select_diverse_pickers(self.model, count, rng)
    }

    /// Builds an initial solution over `picker_ids`.
    pub fn build<R: Rng>(&self, picker_ids: &[usize], rng: &mut R) -> Solution {
        if self.model.has_categories() {
            category_split(self.model, picker_ids, rng)
        } else {
            even_split(self.model, picker_ids, rng)
        }
    }
}
