use rand::Rng;

use super::{Decision, EPSILON_FLOOR, Policy, StepView, argmax, check_positive, uniform_index};
use crate::error::Result;
use crate::history::Mode;

/// Epsilon-greedy policy whose exploration rate decays every step.
///
/// Each step multiplies epsilon by `1 - 10^-decay_rate` (floored at 0.1), then
/// explores uniformly with probability epsilon or exploits the arm with the
/// highest normalized estimate. Larger `decay_rate` values decay more slowly;
/// the useful range is roughly 2.0 to 5.0.
#[derive(Clone)]
pub struct DecayingEpsilonGreedy {
    epsilon: f64,
    decay_rate: f64,
}

impl std::fmt::Debug for DecayingEpsilonGreedy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecayingEpsilonGreedy")
            .field("epsilon", &self.epsilon)
            .field("decay_rate", &self.decay_rate)
            .finish()
    }
}

impl Default for DecayingEpsilonGreedy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DECAY_RATE)
    }
}

impl DecayingEpsilonGreedy {
    pub const DEFAULT_DECAY_RATE: f64 = 4.0;

    /// Creates a new policy starting from full exploration (epsilon = 1.0)
    ///
    /// Use [`LearningPolicy::build`](super::LearningPolicy::build) for a
    /// validated construction.
    #[must_use]
    pub fn new(decay_rate: f64) -> Self {
        assert!(decay_rate > 0.0, "decay_rate must be positive");
        Self {
            epsilon: 1.0,
            decay_rate,
        }
    }

    pub fn decay_rate(&self) -> f64 {
        self.decay_rate
    }

    /// Multiplier applied to epsilon every step
    pub fn decay_multiplier(&self) -> f64 {
        1.0 - 10f64.powf(-self.decay_rate)
    }

    fn decay(&mut self) {
        self.epsilon = (self.epsilon * self.decay_multiplier()).max(EPSILON_FLOOR);
    }
}

impl Policy for DecayingEpsilonGreedy {
    fn name(&self) -> &'static str {
        "decaying-epsilon-greedy"
    }

    fn select(&mut self, view: &StepView<'_>, rng: &mut dyn rand::RngCore) -> Decision {
        self.decay();

        let r: f64 = rng.random();
        if r < self.epsilon {
            Decision::new(
                uniform_index(view.actions.len(), rng),
                Some(Mode::Explore),
            )
        } else {
            Decision::new(argmax(view.estimates), Some(Mode::Exploit))
        }
    }

    fn update(&mut self, view: &StepView<'_>) -> Vec<f64> {
        view.tracker.normalized_estimate()
    }

    fn epsilon(&self) -> Option<f64> {
        Some(self.epsilon)
    }

    fn validate(&self) -> Result<()> {
        check_positive("decay_rate", self.decay_rate)
    }
}
