//! Random sources consumed by the bounded sampler.

use std::fmt;

use rand::{Rng, RngCore};

/// Source of uniformly distributed bounded values.
///
/// Both primitives are inclusive on each end and are only ever called with
/// `min <= max`. Every [`rand::Rng`] is a random source, so callers can plug
/// in `thread_rng()`, a seeded `StdRng`, or the deterministic [`SplitMix`].
pub trait RandomSource {
    /// Draw an integer uniformly from `[min, max]`.
    fn next_bounded_integer(&mut self, min: i64, max: i64) -> i64;

    /// Draw a character uniformly from `[min, max]`, skipping surrogates.
    fn next_bounded_character(&mut self, min: char, max: char) -> char;
}

impl<R> RandomSource for R
where
    R: Rng + ?Sized,
{
    fn next_bounded_integer(&mut self, min: i64, max: i64) -> i64 {
        self.gen_range(min..=max)
    }

    fn next_bounded_character(&mut self, min: char, max: char) -> char {
        self.gen_range(min..=max)
    }
}

/// Splittable random seed for deterministic generation.
///
/// Two generators fed from equal seeds see equal streams, which keeps
/// failing runs reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed(pub u64, pub u64);

impl Seed {
    /// Create a new seed from a single value.
    pub fn from_u64(value: u64) -> Self {
        let state = splitmix64_mix(value);
        let gamma = mix_gamma(state);
        Seed(state, gamma)
    }

    /// Generate the next random value and advance the seed.
    pub fn next_u64(self) -> (u64, Self) {
        let Seed(state, gamma) = self;
        let new_state = state.wrapping_add(gamma);
        let output = splitmix64_mix(new_state);
        (output, Seed(new_state, gamma))
    }

    /// Generate a random seed.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Seed(rng.gen(), rng.gen())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({}, {})", self.0, self.1)
    }
}

/// SplitMix64 stream over a [`Seed`], usable anywhere a `rand::RngCore` is.
#[derive(Debug, Clone)]
pub struct SplitMix {
    seed: Seed,
}

impl SplitMix {
    pub fn new(seed: Seed) -> Self {
        SplitMix { seed }
    }

    pub fn from_u64(value: u64) -> Self {
        SplitMix::new(Seed::from_u64(value))
    }

    /// The current position of the stream.
    pub fn seed(&self) -> Seed {
        self.seed
    }
}

impl RngCore for SplitMix {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let (value, next) = self.seed.next_u64();
        self.seed = next;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// SplitMix64 mixing function for high-quality output.
fn splitmix64_mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Generate a good gamma value for SplitMix64 streams.
fn mix_gamma(mut z: u64) -> u64 {
    z = splitmix64_mix(z);
    // Ensure gamma is odd for maximal period
    (z | 1).wrapping_mul(0x9e3779b97f4a7c15)
}
