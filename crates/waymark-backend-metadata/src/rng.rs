//! Seeded stream generator and Fisher–Yates shuffle.
//!
//! Every random decision in a generation run MUST come from one
//! [`SeededStream`] threaded through the pipeline by `&mut`. The order in
//! which stages draw from it is part of the output format.

/// LCG multiplier.
const MULTIPLIER: u32 = 1_664_525;

/// LCG increment.
const INCREMENT: u32 = 1_013_904_223;

/// LCG modulus as a float divisor (2^32).
const MODULUS: f64 = 4_294_967_296.0;

/// Folds a seed string into the initial generator state.
///
/// Sums the string's UTF-16 code units (wrapping at 2^32). A sum of zero is
/// replaced by 1.
///
/// ```
/// use waymark_backend_metadata::rng::seed_state;
///
/// assert_eq!(seed_state("a"), 97);
/// assert_eq!(seed_state(""), 1);
/// ```
pub fn seed_state(seed: &str) -> u32 {
    let sum = seed
        .encode_utf16()
        .fold(0u32, |acc, unit| acc.wrapping_add(unit as u32));
    if sum == 0 {
        1
    } else {
        sum
    }
}

/// Deterministic stream of values in [0, 1) derived from a string seed.
#[derive(Debug, Clone)]
pub struct SeededStream {
    state: u32,
    draws: u64,
}

impl SeededStream {
    /// Creates a stream from a seed string.
    pub fn new(seed: &str) -> Self {
        Self::from_state(seed_state(seed))
    }

    /// Creates a stream from a raw state value.
    pub fn from_state(state: u32) -> Self {
        Self { state, draws: 0 }
    }

    /// Advances the stream and returns the next value in [0, 1).
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.draws += 1;
        self.state as f64 / MODULUS
    }

    /// Draws an index in `0..len`, or returns `None` without drawing if
    /// `len` is zero.
    ///
    /// Computed as `floor(next_f64() * len)`.
    #[inline]
    pub fn checked_index(&mut self, len: usize) -> Option<usize> {
        let last = len.checked_sub(1)?;
        let idx = (self.next_f64() * len as f64).floor() as usize;
        // next_f64 < 1.0 so this only clamps float rounding.
        Some(idx.min(last))
    }

    /// Draws an index in `0..len` for a length known to be non-zero.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero. Use [`checked_index`](Self::checked_index)
    /// for lengths that come from data.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.checked_index(len)
            .expect("cannot draw an index from an empty range")
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Current internal state.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Shuffles `items` in place with the Fisher–Yates algorithm.
///
/// Walks `i` from the last index down to 1, drawing `j` in `0..=i` and
/// swapping. Consumes exactly `len - 1` draws (zero for `len <= 1`).
pub fn shuffle<T>(items: &mut [T], stream: &mut SeededStream) {
    for i in (1..items.len()).rev() {
        let j = stream.index(i + 1);
        items.swap(i, j);
    }
}
