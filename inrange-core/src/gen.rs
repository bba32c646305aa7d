//! Bounded generators for integral and character types.

use num_bigint::BigInt;
use tracing::{debug, trace};

use crate::data::RandomSource;
use crate::domain::{Domain, InRange};
use crate::error::Result;
use crate::integral::Integral;
use crate::shrink;

/// A fixed value handed out once, on the first draw of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedBias<T> {
    seed: T,
    consumed: bool,
}

impl<T: Copy> SeedBias<T> {
    /// An unconsumed bias toward `seed`.
    pub fn new(seed: T) -> Self {
        SeedBias {
            seed,
            consumed: false,
        }
    }

    /// The value handed out on the first draw.
    pub fn seed(&self) -> T {
        self.seed
    }

    /// Whether the seed has already been returned.
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// The seed, the first time this is called.
    fn take(&mut self) -> Option<T> {
        if self.consumed {
            None
        } else {
            self.consumed = true;
            Some(self.seed)
        }
    }
}

/// Generator of values of `T` drawn uniformly from a configured [`Domain`].
///
/// One instance belongs to one generation context. `generate` mutates the
/// seed bias, so sharing an instance across threads means giving each thread
/// its own clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegralGen<T> {
    domain: Domain<T>,
    seed_bias: Option<SeedBias<T>>,
}

pub type ByteGen = IntegralGen<i8>;
pub type ShortGen = IntegralGen<i16>;
pub type IntGen = IntegralGen<i32>;
pub type LongGen = IntegralGen<i64>;
pub type CharGen = IntegralGen<char>;

impl<T: Integral> Default for IntegralGen<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Integral> IntegralGen<T> {
    /// A generator over every value of `T`, with no seed bias.
    pub fn new() -> Self {
        IntegralGen {
            domain: Domain::full(),
            seed_bias: None,
        }
    }

    /// Build a generator and configure it in one go.
    pub fn with_range(range: InRange<T>) -> Result<Self> {
        let mut generator = Self::new();
        generator.configure(&range)?;
        Ok(generator)
    }

    /// Apply a range configuration.
    ///
    /// Resolves a new domain and re-arms the seed bias when `use_seed` is set.
    /// On error the generator keeps its previous configuration.
    pub fn configure(&mut self, range: &InRange<T>) -> Result<()> {
        let domain = Domain::resolve(range)?;
        debug!(
            type_name = T::TYPE_NAME,
            min = %domain.min(),
            max = %domain.max(),
            use_seed = range.use_seed,
            "configure"
        );

        self.domain = domain;
        self.seed_bias = range.use_seed.then(|| SeedBias::new(range.seed));
        Ok(())
    }

    /// Draw the next value.
    pub fn generate<R>(&mut self, rng: &mut R) -> T
    where
        R: RandomSource + ?Sized,
    {
        if let Some(seed) = self.seed_bias.as_mut().and_then(SeedBias::take) {
            trace!(%seed, "seed bias");
            return seed;
        }
        T::sample(rng, self.domain.min(), self.domain.max())
    }

    /// Candidate values smaller than `larger`, in the order a driver should
    /// try them.
    pub fn shrink(&self, larger: T) -> Vec<T> {
        shrink::shrink(&self.domain, larger)
    }

    /// Distance of `value` from zero.
    pub fn magnitude(&self, value: T) -> BigInt {
        value.magnitude()
    }

    /// The resolved domain values are drawn from.
    pub fn domain(&self) -> &Domain<T> {
        &self.domain
    }

    /// The seed bias, when the last configuration enabled one.
    pub fn seed_bias(&self) -> Option<&SeedBias<T>> {
        self.seed_bias.as_ref()
    }
}
