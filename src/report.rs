//! Summary data handed to reporting consumers.

use std::fmt;

use crate::tracker::ValueTracker;

/// Final statistics for one action
#[derive(Clone, Debug, PartialEq)]
pub struct ActionSummary {
    /// One-based position, as shown to readers
    pub action: usize,
    pub count: usize,
    pub average_reward: f64,
    /// Final estimate or policy weight
    pub weight: f64,
}

/// Per-action summary of a completed run
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub policy: &'static str,
    pub rows: Vec<ActionSummary>,
}

impl Summary {
    pub fn new(policy: &'static str, tracker: &ValueTracker, weights: &[f64]) -> Self {
        let rows = tracker
            .stats()
            .iter()
            .zip(weights)
            .enumerate()
            .map(|(i, (stats, weight))| ActionSummary {
                action: i + 1,
                count: stats.count,
                average_reward: stats.average(),
                weight: *weight,
            })
            .collect();
        Self { policy, rows }
    }

    /// Row with the most pulls, ties going to the lowest action
    pub fn most_selected(&self) -> Option<&ActionSummary> {
        self.rows
            .iter()
            .reduce(|best, row| if row.count > best.count { row } else { best })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary ({}):", self.policy)?;
        for row in &self.rows {
            writeln!(
                f,
                "Action {}: Count = {}, Average Reward = {:.2}, Weight = {:.4}",
                row.action, row.count, row.average_reward, row.weight
            )?;
        }
        write!(f, "{}", "-".repeat(43))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_rows() {
        let mut tracker = ValueTracker::new(2);
        tracker.record(0, 5.0);
        tracker.record(0, 0.0);
        tracker.record(1, 100.0);
        let weights = tracker.normalized_estimate();

        let summary = Summary::new("uniform", &tracker, &weights);
        assert_eq!(summary.rows.len(), 2);
        assert_eq!(summary.rows[0].action, 1);
        assert_eq!(summary.rows[0].count, 2);
        assert_eq!(summary.rows[0].average_reward, 2.5);
        assert_eq!(summary.most_selected().unwrap().action, 1);
    }

    #[test]
    fn test_summary_display() {
        let mut tracker = ValueTracker::new(2);
        tracker.record(0, 1.0);
        tracker.record(1, 3.0);
        let weights = tracker.normalized_estimate();

        let rendered = Summary::new("ucb", &tracker, &weights).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Summary (ucb):");
        assert_eq!(
            lines[1],
            "Action 1: Count = 1, Average Reward = 1.00, Weight = 0.2500"
        );
        assert_eq!(
            lines[2],
            "Action 2: Count = 1, Average Reward = 3.00, Weight = 0.7500"
        );
        assert_eq!(lines[3], "-".repeat(43));
    }
}
