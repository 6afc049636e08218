//! Runs every policy on the reference reward matrix and prints a summary.
//!
//! Set `RUST_LOG=info` to see per-iteration progress.

use bandit_sim::prelude::*;
use rand::SeedableRng;

const STEPS: usize = 10_000;
const ITERATIONS: usize = 10;
const SEED: u64 = 42;

/// (payout, probability)
const REWARD_MATRIX: [(f64, f64); 4] = [(5.0, 0.9), (100.0, 0.11), (50.0, 0.2), (1.0, 1.0)];

fn main() -> bandit_sim::Result<()> {
    env_logger::init();

    println!("Multi-armed bandit policy comparison\n");
    println!("{}", "=".repeat(60));
    for (i, (payout, probability)) in REWARD_MATRIX.iter().enumerate() {
        println!(
            "  Action {}: payout {:>6.1}, p = {:.2}, expected {:.2}",
            i + 1,
            payout,
            probability,
            payout * probability
        );
    }
    println!("{}", "=".repeat(60));

    let policies = [
        LearningPolicy::Uniform,
        LearningPolicy::DecayingEpsilonGreedy { decay_rate: 4.0 },
        LearningPolicy::FixedDecayEpsilonGreedy { decay_factor: 0.99 },
        LearningPolicy::Ucb {
            exploration_gain: 1.5,
        },
    ];

    for policy in policies {
        let mut simulator = Simulator::builder()
            .actions(REWARD_MATRIX)
            .policy(policy)
            .steps(STEPS)
            .iterations(ITERATIONS)
            .build()?;
        let mut rng = rand::rngs::StdRng::seed_from_u64(SEED);

        let history = simulator.run_iterations(&mut rng);
        let total = history.total_reward();
        let explored = history.mode_count(Mode::Explore);
        let final_epsilon = history.epsilons().last().copied();

        println!("\n{}", simulator.summary());
        println!("Total reward: {:.0}", total);
        if let Some(epsilon) = final_epsilon {
            println!("Explore steps: {}, final epsilon: {:.4}", explored, epsilon);
        }
    }

    Ok(())
}
