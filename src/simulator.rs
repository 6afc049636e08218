use crate::action::{Action, RewardSampler};
use crate::error::{BanditError, Result};
use crate::history::{RunHistory, StepRecord};
use crate::policies::{LearningPolicy, Policy, StepView};
use crate::report::Summary;
use crate::tracker::ValueTracker;

/// Lifecycle of a simulator
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, no step taken yet
    Ready,
    /// Inside an iteration, at the given zero-based step
    Running { step: usize },
    /// At least one iteration has completed
    Done,
}

/// A multi-armed bandit simulation driven by a policy
///
/// The `Simulator` owns the action set, the per-action statistics, the current
/// estimate vector and the run history. Each step asks the policy for an
/// action, samples a reward, records it, and lets the policy recompute its
/// estimates. Statistics are never reset between iterations, so repeated
/// calls to [`Simulator::run`] keep compounding.
#[derive(Debug)]
pub struct Simulator<P = Box<dyn Policy>> {
    actions: Vec<Action>,
    policy: P,
    sampler: RewardSampler,
    tracker: ValueTracker,
    estimates: Vec<f64>,
    history: RunHistory,
    steps: usize,
    iterations: usize,
    phase: Phase,
}

impl<P> Simulator<P>
where
    P: Policy,
{
    /// Creates a new simulator with the given actions and policy
    pub fn new(actions: Vec<Action>, policy: P, steps: usize) -> Result<Self> {
        Self::with_iterations(actions, policy, steps, 1)
    }

    /// Creates a simulator that runs `iterations` batches of `steps` steps
    /// from [`Simulator::run_iterations`]
    pub fn with_iterations(
        actions: Vec<Action>,
        policy: P,
        steps: usize,
        iterations: usize,
    ) -> Result<Self> {
        if actions.is_empty() {
            return Err(BanditError::NoActionsAvailable);
        }
        for (position, action) in actions.iter().enumerate() {
            if action.index() != position {
                return Err(BanditError::InvalidAction {
                    index: action.index(),
                    message: format!("expected index {position}"),
                });
            }
        }
        if steps == 0 {
            return Err(BanditError::InvalidParameter {
                message: "steps must be positive".into(),
            });
        }
        if iterations == 0 {
            return Err(BanditError::InvalidParameter {
                message: "iterations must be positive".into(),
            });
        }
        policy.validate()?;

        let tracker = ValueTracker::new(actions.len());
        let estimates = tracker.normalized_estimate();
        let mut history = RunHistory::new(actions.len());
        if let Some(epsilon) = policy.epsilon() {
            history.push_epsilon(epsilon);
        }

        log::debug!(
            "{:<32}{:<32}",
            "configured simulator",
            format!(
                "{} actions, {} x {} steps, {}",
                actions.len(),
                iterations,
                steps,
                policy.name()
            )
        );

        Ok(Self {
            actions,
            policy,
            sampler: RewardSampler,
            tracker,
            estimates,
            history,
            steps,
            iterations,
            phase: Phase::Ready,
        })
    }

    /// Runs one iteration of `steps` steps
    pub fn run(&mut self, rng: &mut dyn rand::RngCore) -> &RunHistory {
        for step in 0..self.steps {
            self.phase = Phase::Running { step };
            self.step(step, rng);
        }
        self.phase = Phase::Done;

        log::info!(
            "{:<32}{:<32}",
            format!("completed {} iteration", self.policy.name()),
            format!(
                "{} steps, total reward {:.2}",
                self.steps_completed(),
                self.history.total_reward()
            )
        );
        &self.history
    }

    /// Runs every configured iteration back to back
    pub fn run_iterations(&mut self, rng: &mut dyn rand::RngCore) -> &RunHistory {
        for _ in 0..self.iterations {
            self.run(rng);
        }
        &self.history
    }

    /// Executes a single trial at zero-based `step` within the iteration
    fn step(&mut self, step: usize, rng: &mut dyn rand::RngCore) {
        let decision = {
            let view = StepView {
                actions: &self.actions,
                tracker: &self.tracker,
                estimates: &self.estimates,
                step,
            };
            self.policy.select(&view, rng)
        };

        let reward = self.sampler.sample(&self.actions[decision.action], rng);
        self.tracker.record(decision.action, reward);
        self.history.push(StepRecord {
            action: decision.action,
            reward,
            mode: decision.mode,
        });
        if let Some(epsilon) = self.policy.epsilon() {
            self.history.push_epsilon(epsilon);
        }

        let view = StepView {
            actions: &self.actions,
            tracker: &self.tracker,
            estimates: &self.estimates,
            step,
        };
        self.estimates = self.policy.update(&view);

        log::trace!(
            "{:<32}{:<32}",
            format!("step {step}"),
            format!("action {} reward {}", decision.action, reward)
        );
    }

    /// Per-action counts, averages and final weights
    pub fn summary(&self) -> Summary {
        Summary::new(self.policy.name(), &self.tracker, &self.estimates)
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn tracker(&self) -> &ValueTracker {
        &self.tracker
    }

    /// Current estimate or policy vector
    pub fn estimates(&self) -> &[f64] {
        &self.estimates
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total steps taken across all iterations
    pub fn steps_completed(&self) -> usize {
        self.tracker.total_count()
    }
}

impl Simulator<Box<dyn Policy>> {
    /// Create a new builder for constructing a simulator
    pub fn builder() -> SimulatorBuilder {
        SimulatorBuilder::default()
    }
}

/// Builder for creating simulators with a fluent API
#[derive(Default)]
pub struct SimulatorBuilder {
    actions: Option<Vec<(f64, f64)>>,
    policy: Option<Box<dyn Policy>>,
    learning_policy: Option<LearningPolicy>,
    steps: Option<usize>,
    iterations: Option<usize>,
}

impl SimulatorBuilder {
    /// Set the actions as `(payout, probability)` pairs
    pub fn actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.actions = Some(actions.into_iter().collect());
        self
    }

    /// Set the policy from its configuration
    pub fn policy(mut self, policy: LearningPolicy) -> Self {
        self.learning_policy = Some(policy);
        self.policy = None;
        self
    }

    /// Set an already constructed policy
    pub fn with_policy<P: Policy + 'static>(mut self, policy: P) -> Self {
        self.policy = Some(Box::new(policy));
        self.learning_policy = None;
        self
    }

    /// Set the number of steps per iteration
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = Some(steps);
        self
    }

    /// Set the number of iterations (defaults to 1)
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Build the simulator
    pub fn build(self) -> Result<Simulator> {
        let pairs = self.actions.ok_or(BanditError::BuilderError {
            message: "Actions not specified".into(),
        })?;
        let actions = Action::from_pairs(pairs)?;

        let policy = match (self.policy, self.learning_policy) {
            (Some(policy), _) => policy,
            (None, Some(config)) => config.build()?,
            (None, None) => {
                return Err(BanditError::BuilderError {
                    message: "Policy not specified".into(),
                });
            }
        };

        let steps = self.steps.ok_or(BanditError::BuilderError {
            message: "Steps not specified".into(),
        })?;

        Simulator::with_iterations(actions, policy, steps, self.iterations.unwrap_or(1))
    }
}
