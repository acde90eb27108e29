/// Replacement state for a zero seed; xorshift never leaves the all-zero state.
pub const ZERO_SEED_FALLBACK: u32 = 123_456_789;

/// Deterministic 32-bit xorshift generator producing floats in `[0, 1)`.
///
/// Several independent instances are used per synthesis so that one pass cannot perturb the
/// sequence consumed by another.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_FALLBACK } else { seed },
        }
    }

    /// Seed from a unix timestamp in whole seconds, keeping the low 32 bits.
    pub fn from_unix_secs(secs: u64) -> Self {
        Self::new(secs as u32)
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `[-range, range]`.
    pub fn signed_offset(&mut self, range: i32) -> i32 {
        let span = f64::from(range) * 2.0 + 1.0;
        (self.next_f64() * span).floor() as i32 - range
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
