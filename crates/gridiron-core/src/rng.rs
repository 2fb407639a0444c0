// Seeded random stream threaded explicitly through the simulation.
//
// There is no module-level generator: every consumer receives an `RngState`
// by value and hands the advanced state back to its caller.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct RngState {
    inner: ChaCha8Rng,
}

impl RngState {
    pub fn create(seed: u64) -> Self {
        RngState {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a value in `[0, 1)` and return it with the advanced state.
    pub fn next(mut self) -> (f64, RngState) {
        let value: f64 = self.inner.gen();
        (value, self)
    }

    /// Draw an index in `0..len`. `len` must be non-zero.
    pub fn next_index(self, len: usize) -> (usize, RngState) {
        let (u, state) = self.next();
        let idx = ((u * len as f64) as usize).min(len.saturating_sub(1));
        (idx, state)
    }
}
