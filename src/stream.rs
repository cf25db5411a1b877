//! Seeded number streams.
//!
//! [`Mulberry32`] is a tiny 32-bit generator whose output is fully determined
//! by its seed. Every step is done in wrapping `u32` arithmetic so the
//! sequence matches other mulberry32 implementations bit for bit.

const GOLDEN_GAMMA: u32 = 0x6d2b_79f5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A source of floats in `[0, 1)`.
///
/// Array indices are only ever derived through [`NumberStream::below`], which
/// keeps sequences reproducible for a given stream.
pub trait NumberStream {
    /// Advance the stream and return a value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Bounded draw: `floor(next * bound)`, or `0` without consuming a value
    /// when `bound` is zero.
    fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_f64() * bound as f64).floor() as usize
    }
}

/// The mulberry32 generator.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl NumberStream for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / TWO_POW_32
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}
