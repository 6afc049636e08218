use rand::Rng;

use super::{
    Decision, EPSILON_FLOOR, Policy, StepView, check_decay_factor, uniform_index, weighted_index,
};
use crate::error::Result;
use crate::history::Mode;

/// Epsilon-greedy policy with a fixed multiplicative epsilon decay.
///
/// Unlike [`DecayingEpsilonGreedy`](super::DecayingEpsilonGreedy), the exploit
/// branch is not an arg-max: it draws an action weighted by the current policy
/// vector, so better actions are favoured but never chosen exclusively.
#[derive(Clone, Debug)]
pub struct FixedDecayEpsilonGreedy {
    epsilon: f64,
    decay_factor: f64,
}

impl Default for FixedDecayEpsilonGreedy {
    fn default() -> Self {
        Self::new()
    }
}

impl FixedDecayEpsilonGreedy {
    pub const DEFAULT_DECAY_FACTOR: f64 = 0.99;

    /// Creates a policy that multiplies epsilon by 0.99 every step
    #[must_use]
    pub fn new() -> Self {
        Self::with_decay_factor(Self::DEFAULT_DECAY_FACTOR)
    }

    /// Creates a policy with a custom per-step decay factor in `(0, 1)`
    #[must_use]
    pub fn with_decay_factor(decay_factor: f64) -> Self {
        assert!(
            decay_factor > 0.0 && decay_factor < 1.0,
            "decay_factor must be between 0 and 1"
        );
        Self {
            epsilon: 1.0,
            decay_factor,
        }
    }

    pub fn decay_factor(&self) -> f64 {
        self.decay_factor
    }
}

impl Policy for FixedDecayEpsilonGreedy {
    fn name(&self) -> &'static str {
        "fixed-decay-epsilon-greedy"
    }

    fn select(&mut self, view: &StepView<'_>, rng: &mut dyn rand::RngCore) -> Decision {
        self.epsilon = (self.epsilon * self.decay_factor).max(EPSILON_FLOOR);

        let r: f64 = rng.random();
        if r < self.epsilon {
            Decision::new(
                uniform_index(view.actions.len(), rng),
                Some(Mode::Explore),
            )
        } else {
            Decision::new(weighted_index(view.estimates, rng), Some(Mode::Exploit))
        }
    }

    fn update(&mut self, view: &StepView<'_>) -> Vec<f64> {
        view.tracker.normalized_estimate()
    }

    fn epsilon(&self) -> Option<f64> {
        Some(self.epsilon)
    }

    fn validate(&self) -> Result<()> {
        check_decay_factor(self.decay_factor)
    }
}
