use super::{Decision, Policy, StepView, argmax, check_positive};
use crate::error::Result;
use crate::tracker::proportional_share;

/// Upper Confidence Bound policy
///
/// Always picks the arm with the highest combined score. The score is the
/// normalized average estimate plus an exploration bonus, rescaled to a
/// proportional share. The bonus for a tried arm is
/// `sqrt(ln(t + 1) / (2 * count)) * exploration_gain`; an arm that was never
/// tried gets the largest payout among all arms, so it is tried early.
#[derive(Clone)]
pub struct Ucb {
    /// Scales the exploration bonus independently of reward magnitude
    exploration_gain: f64,
    /// Bonus per arm, computed at the start of the most recent step
    bonuses: Vec<f64>,
}

impl std::fmt::Debug for Ucb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ucb")
            .field("exploration_gain", &self.exploration_gain)
            .field("bonuses", &self.bonuses)
            .finish()
    }
}

impl Default for Ucb {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXPLORATION_GAIN)
    }
}

impl Ucb {
    pub const DEFAULT_EXPLORATION_GAIN: f64 = 1.5;

    /// Creates a new UCB policy with the given exploration gain
    #[must_use]
    pub fn new(exploration_gain: f64) -> Self {
        assert!(exploration_gain > 0.0, "exploration_gain must be positive");
        Self {
            exploration_gain,
            bonuses: Vec::new(),
        }
    }

    pub fn exploration_gain(&self) -> f64 {
        self.exploration_gain
    }

    /// Bonus vector from the most recent step (empty before the first step)
    pub fn bonuses(&self) -> &[f64] {
        &self.bonuses
    }

    /// Exploration bonus for every arm given the stats at step `t`
    pub fn confidence_bonuses(&self, view: &StepView<'_>) -> Vec<f64> {
        let max_payout = view
            .actions
            .iter()
            .map(|a| a.payout())
            .fold(0.0, f64::max);
        let elapsed = ((view.step + 1) as f64).ln();

        view.tracker
            .stats()
            .iter()
            .map(|stats| {
                if stats.count == 0 {
                    max_payout
                } else {
                    (elapsed / (2.0 * stats.count as f64)).sqrt() * self.exploration_gain
                }
            })
            .collect()
    }
}

impl Policy for Ucb {
    fn name(&self) -> &'static str {
        "ucb"
    }

    fn select(&mut self, view: &StepView<'_>, _rng: &mut dyn rand::RngCore) -> Decision {
        let action = argmax(view.estimates);
        // Bonuses reflect the stats before this step's reward is recorded
        self.bonuses = self.confidence_bonuses(view);
        Decision::new(action, None)
    }

    fn update(&mut self, view: &StepView<'_>) -> Vec<f64> {
        // A policy updated before its first select has no bonuses yet
        if self.bonuses.len() != view.actions.len() {
            self.bonuses = self.confidence_bonuses(view);
        }
        let combined: Vec<f64> = view
            .tracker
            .normalized_estimate()
            .iter()
            .zip(&self.bonuses)
            .map(|(estimate, bonus)| estimate + bonus)
            .collect();
        proportional_share(&combined)
    }

    fn validate(&self) -> Result<()> {
        check_positive("exploration_gain", self.exploration_gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::test_utils::ConstRng;
    use crate::tracker::ValueTracker;
    use approx::assert_abs_diff_eq;

    fn actions() -> Vec<Action> {
        Action::from_pairs([(5.0, 0.9), (100.0, 0.11), (50.0, 0.2)]).unwrap()
    }

    #[test]
    fn test_untried_bonus_is_max_payout() {
        let actions = actions();
        let mut tracker = ValueTracker::new(3);
        tracker.record(0, 5.0);
        tracker.record(0, 5.0);
        let estimates = tracker.normalized_estimate();
        let view = StepView {
            actions: &actions,
            tracker: &tracker,
            estimates: &estimates,
            step: 3,
        };

        let mut policy = Ucb::default();
        policy.select(&view, &mut ConstRng(0));
        let bonuses = policy.bonuses();

        assert_eq!(bonuses[1], 100.0);
        assert_eq!(bonuses[2], 100.0);
        let expected = (4f64.ln() / 4.0).sqrt() * 1.5;
        assert_abs_diff_eq!(bonuses[0], expected, epsilon = 1e-12);
    }

    #[test]
    fn test_first_step_bonus_for_tried_arm_is_zero() {
        let actions = actions();
        let mut tracker = ValueTracker::new(3);
        tracker.record(2, 50.0);
        let estimates = tracker.normalized_estimate();
        let view = StepView {
            actions: &actions,
            tracker: &tracker,
            estimates: &estimates,
            step: 0,
        };

        let policy = Ucb::new(2.0);
        let bonuses = policy.confidence_bonuses(&view);
        assert_eq!(bonuses, vec![100.0, 100.0, 0.0]);
    }

    #[test]
    fn test_select_is_deterministic_argmax() {
        let actions = actions();
        let tracker = ValueTracker::new(3);
        let estimates = vec![0.3, 0.35, 0.35];
        let view = StepView {
            actions: &actions,
            tracker: &tracker,
            estimates: &estimates,
            step: 0,
        };

        let mut policy = Ucb::default();
        let first = policy.select(&view, &mut ConstRng(0));
        let second = policy.select(&view, &mut ConstRng(u64::MAX));
        assert_eq!(first, Decision::new(1, None));
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_combines_and_normalizes() {
        let actions = Action::from_pairs([(10.0, 1.0), (10.0, 0.0)]).unwrap();
        let mut tracker = ValueTracker::new(2);
        let estimates = tracker.normalized_estimate();
        let mut policy = Ucb::default();

        let decision = {
            let view = StepView {
                actions: &actions,
                tracker: &tracker,
                estimates: &estimates,
                step: 0,
            };
            policy.select(&view, &mut ConstRng(0))
        };
        assert_eq!(decision.action, 0);
        tracker.record(decision.action, 10.0);

        let view = StepView {
            actions: &actions,
            tracker: &tracker,
            estimates: &estimates,
            step: 0,
        };
        // normalized estimate [1, 0] plus bonuses [10, 10] -> [11, 10] / 21
        let updated = policy.update(&view);
        assert_abs_diff_eq!(updated[0], 11.0 / 21.0, epsilon = 1e-12);
        assert_abs_diff_eq!(updated[1], 10.0 / 21.0, epsilon = 1e-12);
        assert_abs_diff_eq!(updated.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_update_without_select_covers_every_action() {
        let actions = actions();
        let mut tracker = ValueTracker::new(3);
        tracker.record(0, 5.0);
        let estimates = tracker.normalized_estimate();
        let view = StepView {
            actions: &actions,
            tracker: &tracker,
            estimates: &estimates,
            step: 0,
        };

        let mut policy = Ucb::default();
        let updated = policy.update(&view);
        assert_eq!(updated.len(), 3);
        assert_eq!(policy.bonuses(), &[0.0, 100.0, 100.0]);
        // [1 + 0, 0 + 100, 0 + 100] / 201
        assert_abs_diff_eq!(updated[0], 1.0 / 201.0, epsilon = 1e-12);
        assert_abs_diff_eq!(updated.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_validate_rejects_infinite_gain() {
        assert!(Ucb::default().validate().is_ok());
        assert!(matches!(
            Ucb::new(f64::INFINITY).validate(),
            Err(crate::error::BanditError::InvalidParameter { .. })
        ));
    }
}
