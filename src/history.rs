//! Per-step run log consumed by reporting and plotting.

use std::fmt;

/// Whether an epsilon policy explored or exploited on a given step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    Explore,
    Exploit,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Explore => write!(f, "explore"),
            Mode::Exploit => write!(f, "exploit"),
        }
    }
}

/// One simulated trial
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepRecord {
    pub action: usize,
    pub reward: f64,
    /// `None` for policies without an explore/exploit split
    pub mode: Option<Mode>,
}

/// Ordered log of every step plus aligned cumulative-reward series.
///
/// Every trajectory starts at `0.0` and gains one point per step, so all
/// trajectories share the length `steps + 1`. Actions not chosen on a step
/// carry their previous value forward.
#[derive(Clone, Debug)]
pub struct RunHistory {
    records: Vec<StepRecord>,
    trajectories: Vec<Vec<f64>>,
    epsilons: Vec<f64>,
}

impl RunHistory {
    pub fn new(n_actions: usize) -> Self {
        Self {
            records: Vec::new(),
            trajectories: vec![vec![0.0]; n_actions],
            epsilons: Vec::new(),
        }
    }

    /// Appends a step and extends every trajectory by one point
    pub(crate) fn push(&mut self, record: StepRecord) {
        for (i, trajectory) in self.trajectories.iter_mut().enumerate() {
            let last = trajectory.last().copied().unwrap_or(0.0);
            let next = if i == record.action {
                last + record.reward
            } else {
                last
            };
            trajectory.push(next);
        }
        self.records.push(record);
    }

    pub(crate) fn push_epsilon(&mut self, epsilon: f64) {
        self.epsilons.push(epsilon);
    }

    pub fn records(&self) -> &[StepRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cumulative reward series, one per action
    pub fn trajectories(&self) -> &[Vec<f64>] {
        &self.trajectories
    }

    pub fn trajectory(&self, action: usize) -> Option<&[f64]> {
        self.trajectories.get(action).map(Vec::as_slice)
    }

    /// Epsilon before the first step followed by the value used on each step.
    ///
    /// Empty for policies that do not use epsilon.
    pub fn epsilons(&self) -> &[f64] {
        &self.epsilons
    }

    /// Sum of every reward received so far
    pub fn total_reward(&self) -> f64 {
        self.records.iter().map(|r| r.reward).sum()
    }

    /// Number of steps recorded with the given mode
    pub fn mode_count(&self, mode: Mode) -> usize {
        self.records
            .iter()
            .filter(|r| r.mode == Some(mode))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(action: usize, reward: f64) -> StepRecord {
        StepRecord {
            action,
            reward,
            mode: None,
        }
    }

    #[test]
    fn test_trajectories_stay_aligned() {
        let mut history = RunHistory::new(3);
        history.push(record(0, 5.0));
        history.push(record(2, 0.0));
        history.push(record(0, 5.0));
        history.push(record(1, 100.0));

        assert_eq!(history.len(), 4);
        assert_eq!(history.trajectory(0).unwrap(), &[0.0, 5.0, 5.0, 10.0, 10.0]);
        assert_eq!(history.trajectory(1).unwrap(), &[0.0, 0.0, 0.0, 0.0, 100.0]);
        assert_eq!(history.trajectory(2).unwrap(), &[0.0; 5]);
        assert_eq!(history.total_reward(), 110.0);
    }

    #[test]
    fn test_mode_count() {
        let mut history = RunHistory::new(2);
        history.push(StepRecord {
            action: 0,
            reward: 1.0,
            mode: Some(Mode::Explore),
        });
        history.push(StepRecord {
            action: 1,
            reward: 0.0,
            mode: Some(Mode::Exploit),
        });
        history.push(StepRecord {
            action: 1,
            reward: 2.0,
            mode: Some(Mode::Exploit),
        });

        assert_eq!(history.mode_count(Mode::Explore), 1);
        assert_eq!(history.mode_count(Mode::Exploit), 2);
    }

    #[test]
    fn test_new_history() {
        let history = RunHistory::new(2);
        assert!(history.is_empty());
        assert!(history.epsilons().is_empty());
        assert_eq!(history.trajectories(), &[vec![0.0], vec![0.0]]);
        assert!(history.trajectory(2).is_none());
    }
}
