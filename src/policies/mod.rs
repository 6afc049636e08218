mod epsilon_greedy;
mod fixed_decay;
mod ucb;
mod uniform;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

pub use epsilon_greedy::DecayingEpsilonGreedy;
pub use fixed_decay::FixedDecayEpsilonGreedy;
pub use ucb::Ucb;
pub use uniform::Uniform;

use crate::action::Action;
use crate::error::{BanditError, Result};
use crate::history::Mode;
use crate::tracker::ValueTracker;

/// Epsilon never decays below this value
pub const EPSILON_FLOOR: f64 = 0.1;

/// Read-only snapshot of the simulation handed to a policy.
#[derive(Clone, Copy, Debug)]
pub struct StepView<'a> {
    pub actions: &'a [Action],
    pub tracker: &'a ValueTracker,
    /// The estimate or policy vector produced by the previous update
    pub estimates: &'a [f64],
    /// Zero-based step index within the current iteration
    pub step: usize,
}

/// The outcome of an action-selection call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub action: usize,
    pub mode: Option<Mode>,
}

impl Decision {
    pub fn new(action: usize, mode: Option<Mode>) -> Self {
        Self { action, mode }
    }
}

/// Core trait for action-selection policies
///
/// Note: This trait uses `dyn rand::RngCore` instead of a generic parameter
/// to maintain object-safety, allowing `Box<dyn Policy>` to be used by the
/// simulator.
pub trait Policy: Send + Sync {
    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    /// Chooses an action for the current step.
    ///
    /// Random values are drawn in a fixed order: the explore/exploit draw
    /// first (if any), then the action draw (if any).
    fn select(&mut self, view: &StepView<'_>, rng: &mut dyn rand::RngCore) -> Decision;

    /// Recomputes the estimate or policy vector after the step's statistics
    /// have been recorded
    fn update(&mut self, view: &StepView<'_>) -> Vec<f64>;

    /// Current exploration probability, for policies that have one
    fn epsilon(&self) -> Option<f64> {
        None
    }

    /// Checks the policy's tunables; the simulator refuses to run an
    /// invalid policy
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select(&mut self, view: &StepView<'_>, rng: &mut dyn rand::RngCore) -> Decision {
        (**self).select(view, rng)
    }

    fn update(&mut self, view: &StepView<'_>) -> Vec<f64> {
        (**self).update(view)
    }

    fn epsilon(&self) -> Option<f64> {
        (**self).epsilon()
    }

    fn validate(&self) -> Result<()> {
        (**self).validate()
    }
}

/// Policy configuration with its tunables.
///
/// Validated by [`LearningPolicy::validate`] and turned into a boxed policy by
/// [`LearningPolicy::build`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LearningPolicy {
    Uniform,
    DecayingEpsilonGreedy { decay_rate: f64 },
    FixedDecayEpsilonGreedy { decay_factor: f64 },
    Ucb { exploration_gain: f64 },
}

impl LearningPolicy {
    pub fn validate(&self) -> Result<()> {
        match *self {
            LearningPolicy::Uniform => Ok(()),
            LearningPolicy::DecayingEpsilonGreedy { decay_rate } => {
                check_positive("decay_rate", decay_rate)
            }
            LearningPolicy::FixedDecayEpsilonGreedy { decay_factor } => {
                check_decay_factor(decay_factor)
            }
            LearningPolicy::Ucb { exploration_gain } => {
                check_positive("exploration_gain", exploration_gain)
            }
        }
    }

    /// Validates the configuration and constructs the policy
    pub fn build(self) -> Result<Box<dyn Policy>> {
        self.validate()?;
        Ok(match self {
            LearningPolicy::Uniform => Box::new(Uniform),
            LearningPolicy::DecayingEpsilonGreedy { decay_rate } => {
                Box::new(DecayingEpsilonGreedy::new(decay_rate))
            }
            LearningPolicy::FixedDecayEpsilonGreedy { decay_factor } => {
                Box::new(FixedDecayEpsilonGreedy::with_decay_factor(decay_factor))
            }
            LearningPolicy::Ucb { exploration_gain } => Box::new(Ucb::new(exploration_gain)),
        })
    }
}

/// Rejects tunables that are not finite and strictly positive
pub(crate) fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BanditError::InvalidParameter {
            message: format!("{name} must be positive and finite, got {value}"),
        });
    }
    Ok(())
}

/// Rejects multiplicative decay factors outside `(0, 1)`
pub(crate) fn check_decay_factor(value: f64) -> Result<()> {
    if !(value > 0.0 && value < 1.0) {
        return Err(BanditError::InvalidParameter {
            message: format!("decay_factor must be in (0, 1), got {value}"),
        });
    }
    Ok(())
}

/// Index of the largest value; ties go to the first occurrence
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, value) in values.iter().enumerate().skip(1) {
        if *value > values[best] {
            best = i;
        }
    }
    best
}

/// Uniformly random index in `0..n`
pub(crate) fn uniform_index(n: usize, rng: &mut dyn rand::RngCore) -> usize {
    rng.random_range(0..n)
}

/// Draws an index with probability proportional to `weights`.
///
/// Weights that cannot form a distribution (negative, non-finite, or all
/// zero) fall back to a uniform draw.
pub(crate) fn weighted_index(weights: &[f64], rng: &mut dyn rand::RngCore) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        Err(err) => {
            log::trace!("{:<32}{:<32}", "degenerate weights", err);
            uniform_index(weights.len(), rng)
        }
    }
}
