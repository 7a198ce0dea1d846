//! Uniform random sources
//!
//! Growth never touches a global generator: the caller hands in anything
//! implementing `UniformSource`, which makes every run reproducible from
//! its seed.

/// Yields samples in [0, 1)
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T: UniformSource + ?Sized> UniformSource for Box<T> {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// xorshift32 is stuck at zero forever, so a zero seed is remapped
const ZERO_SEED_FALLBACK: u32 = 0x9E37_79B9;
const U32_RANGE: f64 = 4_294_967_296.0;

/// Xorshift32 random number generator
#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { ZERO_SEED_FALLBACK } else { seed };
        Self { state }
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl UniformSource for Xorshift32 {
    /// Never returns exactly 0.0 (state is never zero)
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.next_u32() as f64 / U32_RANGE
    }
}

/// Replays a fixed list of samples, wrapping around at the end.
/// Scripted runs and tests use it to force specific trial outcomes.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    samples: Vec<f64>,
    cursor: usize,
    drawn: usize,
}

impl SequenceSource {
    /// Panics on an empty list: a source that cannot produce is a bug
    pub fn new(samples: Vec<f64>) -> Self {
        assert!(!samples.is_empty(), "SequenceSource needs at least one sample");
        Self {
            samples,
            cursor: 0,
            drawn: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Total samples handed out so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl UniformSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.samples[self.cursor];
        self.cursor = (self.cursor + 1) % self.samples.len();
        self.drawn += 1;
        value
    }
}
