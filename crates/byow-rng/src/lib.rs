//! Linear congruential generator used for world generation.
//!
//! The recurrence is `state = (state * 1103515245 + 12345) & 0x7fffffff`.
//! Identical seeds always produce identical streams, which is what makes a
//! generated world reproducible from `(seed, width, height)` alone.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// Multiplier of the recurrence
pub const LCG_MULTIPLIER: i64 = 1_103_515_245;

/// Increment of the recurrence
pub const LCG_INCREMENT: i64 = 12_345;

/// Mask applied after every step (keeps 31 bits)
pub const LCG_MASK: i64 = 0x7fff_ffff;

/// A `range` call trace entry for debugging divergences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngTraceEntry {
    /// Sequence number of the raw draw (0-indexed)
    pub seq: u64,
    /// Lower bound requested
    pub min: i32,
    /// Upper bound requested (inclusive)
    pub max: i32,
    /// Raw state consumed, `None` when the call short-circuited on `min >= max`
    pub raw: Option<i64>,
    /// Value returned
    pub result: i32,
}

/// Seeded LCG
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lcg {
    /// Seed the generator was last reset with
    seed: i64,
    /// Current state
    state: i64,
    /// Number of raw values drawn since the last reset
    call_count: u64,
    #[serde(skip)]
    tracing: bool,
    #[serde(skip)]
    trace: Vec<RngTraceEntry>,
}

impl Lcg {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            state: seed,
            call_count: 0,
            tracing: false,
            trace: Vec::new(),
        }
    }

    /// Reset the internal state to `seed`.
    ///
    /// Tracing stays enabled if it was, but the recorded trace is cleared.
    pub fn reseed(&mut self, seed: i64) {
        self.seed = seed;
        self.state = seed;
        self.call_count = 0;
        self.trace.clear();
    }

    /// Seed of the current stream
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Current raw state
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Number of raw values drawn since the last reset
    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    /// Advance the recurrence and return the new state, always in `0..=LCG_MASK`.
    #[inline]
    pub fn next_raw(&mut self) -> i64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            & LCG_MASK;
        self.call_count += 1;
        self.state
    }

    /// Integer in `[min, max]` inclusive.
    ///
    /// Returns `min` without consuming state when `min >= max`.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            if self.tracing {
                self.trace.push(RngTraceEntry {
                    seq: self.call_count,
                    min,
                    max,
                    raw: None,
                    result: min,
                });
            }
            return min;
        }

        let raw = self.next_raw();
        let span = i64::from(max) - i64::from(min) + 1;
        let result = (i64::from(min) + raw % span) as i32;
        if self.tracing {
            self.trace.push(RngTraceEntry {
                seq: self.call_count - 1,
                min,
                max,
                raw: Some(raw),
                result,
            });
        }
        result
    }

    /// Enable tracing of `range` calls
    pub fn enable_tracing(&mut self) {
        self.tracing = true;
        self.trace.clear();
    }

    /// Disable tracing; the recorded trace is kept until the next enable
    pub fn disable_tracing(&mut self) {
        self.tracing = false;
    }

    /// Whether tracing is enabled
    pub fn is_tracing(&self) -> bool {
        self.tracing
    }

    /// Recorded trace
    pub fn trace(&self) -> &[RngTraceEntry] {
        &self.trace
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        // 31 bits per step; combine two steps so the top bit is populated too.
        let hi = self.next_raw() as u32;
        let lo = self.next_raw() as u32;
        (hi << 16) ^ lo
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as i64)
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(0)
    }
}
