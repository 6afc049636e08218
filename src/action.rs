//! Action type and reward sampling for multi-armed bandits.
//!
//! An `Action` is one of the fixed choices available to the agent. It pays out
//! a fixed magnitude with a fixed probability, and nothing otherwise.

use rand::Rng;
use std::fmt;

use crate::error::{BanditError, Result};

/// Represents an action (bandit arm) with a stationary Bernoulli payout.
///
/// # Examples
///
/// ```
/// use bandit_sim::Action;
///
/// let action = Action::new(0, 5.0, 0.9).unwrap();
/// assert_eq!(action.payout(), 5.0);
/// assert!(Action::new(1, 5.0, 1.5).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Action {
    index: usize,
    payout: f64,
    probability: f64,
}

impl Action {
    /// Creates a new action, rejecting malformed payouts and probabilities
    pub fn new(index: usize, payout: f64, probability: f64) -> Result<Self> {
        if !payout.is_finite() || payout < 0.0 {
            return Err(BanditError::InvalidAction {
                index,
                message: format!("payout {payout} must be finite and non-negative"),
            });
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(BanditError::InvalidAction {
                index,
                message: format!("probability {probability} is outside [0, 1]"),
            });
        }
        Ok(Self {
            index,
            payout,
            probability,
        })
    }

    /// Builds an indexed action list from `(payout, probability)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Vec<Self>>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let actions = pairs
            .into_iter()
            .enumerate()
            .map(|(index, (payout, probability))| Self::new(index, payout, probability))
            .collect::<Result<Vec<_>>>()?;

        if actions.is_empty() {
            return Err(BanditError::NoActionsAvailable);
        }
        Ok(actions)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn payout(&self) -> f64 {
        self.payout
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Expected reward of a single pull
    pub fn expected_reward(&self) -> f64 {
        self.payout * self.probability
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Action {} (payout {}, p = {})",
            self.index + 1,
            self.payout,
            self.probability
        )
    }
}

/// Draws stochastic rewards for actions.
///
/// Each call consumes exactly one value from the random source, so a seeded
/// source reproduces the same reward sequence.
#[derive(Clone, Copy, Debug, Default)]
pub struct RewardSampler;

impl RewardSampler {
    /// Returns the action's payout with its probability, `0.0` otherwise
    pub fn sample(&self, action: &Action, rng: &mut dyn rand::RngCore) -> f64 {
        if rng.random_bool(action.probability) {
            action.payout
        } else {
            0.0
        }
    }
}
