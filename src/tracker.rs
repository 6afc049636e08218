//! Per-action visit statistics and the normalized value estimate.

/// Running statistics for a single action
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActionStats {
    pub count: usize,
    pub cumulative_reward: f64,
}

impl ActionStats {
    /// Mean reward, or `0.0` for an action that was never tried
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.cumulative_reward / self.count as f64
        }
    }
}

/// Tracks visit counts and cumulative rewards for every action.
///
/// The tracker is only ever mutated through [`ValueTracker::record`], once per
/// simulated step, so `total_count` always equals the number of steps taken.
#[derive(Clone, Debug)]
pub struct ValueTracker {
    stats: Vec<ActionStats>,
}

impl ValueTracker {
    /// Creates a tracker with zeroed statistics for `n_actions` actions
    pub fn new(n_actions: usize) -> Self {
        Self {
            stats: vec![ActionStats::default(); n_actions],
        }
    }

    /// Records one pull of `action` that produced `reward`
    pub fn record(&mut self, action: usize, reward: f64) {
        let stats = &mut self.stats[action];
        stats.count += 1;
        stats.cumulative_reward += reward;
    }

    pub fn stats(&self) -> &[ActionStats] {
        &self.stats
    }

    pub fn stats_for(&self, action: usize) -> Option<&ActionStats> {
        self.stats.get(action)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Total number of recorded pulls across all actions
    pub fn total_count(&self) -> usize {
        self.stats.iter().map(|s| s.count).sum()
    }

    /// Mean reward per action, `0.0` for untried actions
    pub fn averages(&self) -> Vec<f64> {
        self.stats.iter().map(ActionStats::average).collect()
    }

    /// Average rewards scaled to their proportional share of the total.
    ///
    /// The result ranks actions on a bounded scale rather than giving the
    /// literal mean reward. When every average is zero the uniform vector is
    /// returned instead.
    pub fn normalized_estimate(&self) -> Vec<f64> {
        proportional_share(&self.averages())
    }
}

/// Divides each value by the sum of all values.
///
/// Falls back to the uniform vector `1/n` when the sum is zero (or not a
/// finite number).
pub fn proportional_share(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total != 0.0 && total.is_finite() {
        values.iter().map(|v| v / total).collect()
    } else {
        uniform(values.len())
    }
}

/// Uniform weighting over `n` actions
pub fn uniform(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}
