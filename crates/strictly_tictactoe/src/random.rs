//! Injectable randomness for the move selector.
//!
//! The heuristic only needs a unit-interval sample when it has to choose
//! between equivalent corners or fallback squares. Callers pass any
//! [`RandomSource`]: a `rand` generator for play, or a fixed value or
//! closure for deterministic tests.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of samples nominally in `[0, 1)`.
///
/// Implementations are not trusted to stay in range: consumers clamp
/// whatever comes back, including `1.0`, negatives and NaN.
pub trait RandomSource {
    /// Draws the next sample.
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// Always yields the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Replays a list of samples, starting over when it runs out.
///
/// An empty list yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Creates a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}

/// Adapts a `rand` generator into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngRandom<R>(pub R);

impl RngRandom<ThreadRng> {
    /// Uses the thread-local generator; not reproducible.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl RngRandom<StdRng> {
    /// Uses a seeded generator so a whole game can be replayed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngRandom<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

/// Maps a sample onto an index in `0..len` as `floor(value * len)`.
///
/// Non-finite samples count as `0.0` and the result is clamped into range,
/// so a misbehaving source can never produce an out-of-bounds index.
/// Returns `None` only when `len` is zero.
pub fn pick_index(value: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let value = if value.is_finite() { value } else { 0.0 };
    let scaled = (value * len as f64).floor();
    let index = if scaled <= 0.0 {
        0
    } else {
        // Float-to-int casts saturate, so huge samples land on usize::MAX.
        scaled as usize
    };
    Some(index.min(len - 1))
}
