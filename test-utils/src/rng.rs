//! Deterministic random number generators for tests.

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// RNG that always produces zero bits.
///
/// Every draw lands on the lowest possible outcome: `random::<f64>()` yields `0.0`,
/// `random_range(a..b)` yields `a` and `random_bool(p)` yields `true` for any `p > 0`.
/// Useful to force coin flips and tie-breaks onto their first branch.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

/// Creates a seeded `StdRng` so a test run is reproducible.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
