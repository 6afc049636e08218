//! Helpers shared by the integration tests.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

/// Seeded random source so runs are reproducible
#[allow(dead_code)]
pub fn seeded(seed: u64) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
