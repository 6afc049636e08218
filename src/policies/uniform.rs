use super::{Decision, Policy, StepView, uniform_index};
use crate::tracker;

/// Uniform selection policy - picks every action with equal probability.
///
/// This is the baseline policy, and the exploration branch of both epsilon
/// policies draws the same way.
#[derive(Clone, Debug, Default)]
pub struct Uniform;

impl Policy for Uniform {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn select(&mut self, view: &StepView<'_>, rng: &mut dyn rand::RngCore) -> Decision {
        Decision::new(uniform_index(view.actions.len(), rng), None)
    }

    fn update(&mut self, view: &StepView<'_>) -> Vec<f64> {
        // Uniform policy doesn't learn from feedback
        tracker::uniform(view.actions.len())
    }
}
