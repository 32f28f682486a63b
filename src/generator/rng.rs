//! Seeded linear-congruential stream.
//!
//! The constants are part of the reproducibility contract: regenerating a
//! stored question must replay the exact same draw sequence, so this stays
//! a plain LCG rather than a crypto RNG.

use crate::constants::{LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};

/// One generation call owns one `SeededRng`; the stream is stateful and the
/// order of draws is load-bearing. Never share an instance across calls.
#[derive(Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Advance the stream and return a float in `[0, 1)`.
    pub fn next_float(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Integer in `[min, max_exclusive)`. Pass `true_max + 1` for an
    /// inclusive upper bound.
    pub fn next_int(&mut self, min: i64, max_exclusive: i64) -> i64 {
        (self.next_float() * (max_exclusive - min) as f64).floor() as i64 + min
    }
}
