//! bandit-sim: a multi-armed bandit simulator.
//!
//! An agent repeatedly chooses among a fixed set of actions, each paying a
//! fixed amount with a fixed probability, and learns which action maximizes
//! its return. Four selection policies share one simulation loop: a uniform
//! baseline, two epsilon-greedy variants and an upper-confidence-bound policy.
//!
//! # Quick Start
//!
//! ```
//! use bandit_sim::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut simulator = Simulator::builder()
//!     .actions([(5.0, 0.9), (100.0, 0.11), (50.0, 0.2), (1.0, 1.0)])
//!     .policy(LearningPolicy::DecayingEpsilonGreedy { decay_rate: 4.0 })
//!     .steps(1_000)
//!     .iterations(2)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! simulator.run_iterations(&mut rng);
//!
//! assert_eq!(simulator.steps_completed(), 2_000);
//! println!("{}", simulator.summary());
//! ```

mod action;
mod error;
mod history;
pub mod policies;
mod report;
mod simulator;
#[cfg(test)]
mod test_utils;
mod tracker;

// Re-export main types
pub use action::{Action, RewardSampler};
pub use error::{BanditError, Result};
pub use history::{Mode, RunHistory, StepRecord};
pub use report::{ActionSummary, Summary};
pub use simulator::{Phase, Simulator, SimulatorBuilder};
pub use tracker::{ActionStats, ValueTracker, proportional_share};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use bandit_sim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{
        DecayingEpsilonGreedy, FixedDecayEpsilonGreedy, LearningPolicy, Policy, Ucb, Uniform,
    };
    pub use crate::{Action, BanditError, Mode, Result, RunHistory, Simulator, Summary};
}
