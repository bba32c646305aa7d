//! Range configuration: turning an [`InRange`] into a resolved [`Domain`].

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::error::{GenError, Result};
use crate::integral::{Edge, Integral};
use crate::shrink::WidthAdapter;

/// Half-width of the seed window for single-digit seeds.
pub const BASE_DELTA: u32 = 5;

/// Range configuration for a bounded generator.
///
/// Every field is optional and falls back to a per-type default. A textual
/// bound, when present and non-empty, takes precedence over the typed one.
/// For `char` the typed fields play the part of the character-specific
/// bound and seed fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InRange<T> {
    /// Typed inclusive lower bound.
    pub min: Option<T>,
    /// Typed inclusive upper bound.
    pub max: Option<T>,
    /// Textual inclusive lower bound.
    pub min_text: Option<String>,
    /// Textual inclusive upper bound.
    pub max_text: Option<String>,
    /// Return `seed` first and sample around it afterwards.
    pub use_seed: bool,
    /// First drawn value and centre of the seed window.
    pub seed: T,
}

impl<T: Integral> Default for InRange<T> {
    fn default() -> Self {
        InRange {
            min: None,
            max: None,
            min_text: None,
            max_text: None,
            use_seed: false,
            seed: T::ZERO,
        }
    }
}

impl<T: Integral> InRange<T> {
    /// Configuration with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with both typed bounds set.
    pub fn between(min: T, max: T) -> Self {
        Self::default().with_min(min).with_max(max)
    }

    /// Set the typed lower bound.
    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the typed upper bound.
    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the textual lower bound.
    pub fn with_min_text(mut self, min: impl Into<String>) -> Self {
        self.min_text = Some(min.into());
        self
    }

    /// Set the textual upper bound.
    pub fn with_max_text(mut self, max: impl Into<String>) -> Self {
        self.max_text = Some(max.into());
        self
    }

    /// Set the seed and turn seed bias on.
    pub fn with_seed(mut self, seed: T) -> Self {
        self.seed = seed;
        self.use_seed = true;
        self
    }

    /// Turn seed bias on or off without touching the seed.
    pub fn with_use_seed(mut self, use_seed: bool) -> Self {
        self.use_seed = use_seed;
        self
    }
}

/// Inclusive `[min, max]` range a generator draws from and shrinks within.
///
/// `min <= max` holds for every value of this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain<T> {
    min: T,
    max: T,
}

impl<T: Integral> Domain<T> {
    /// Domain over `[min, max]`, rejecting `min > max`.
    pub fn new(min: T, max: T) -> Result<Self> {
        if min > max {
            return Err(GenError::configuration(
                "min",
                format!("min {min:?} is greater than max {max:?}"),
            ));
        }
        Ok(Domain { min, max })
    }

    /// Every value of `T`.
    pub fn full() -> Self {
        Domain {
            min: T::MIN,
            max: T::MAX,
        }
    }

    /// Resolve a range configuration.
    pub fn resolve(range: &InRange<T>) -> Result<Self> {
        if range.use_seed {
            return Self::around_seed(range.seed);
        }

        let min = resolve_bound("min", range.min_text.as_deref(), range.min, T::MIN)?;
        let max = resolve_bound("max", range.max_text.as_deref(), range.max, T::MAX)?;
        Self::new(min, max)
    }

    /// Symmetric window around `seed`, saturated at the bounds of `T`.
    ///
    /// The half-width is `5 * 10^(digits(|seed|) - 1)`, so it grows by a
    /// decade for every extra digit in the seed.
    pub fn around_seed(seed: T) -> Result<Self> {
        let center = seed.widen();
        let delta = seed_delta(&center);

        let min = narrow_bound(T::saturate(&(&center - &delta), Edge::Lower))?;
        let max = narrow_bound(T::saturate(&(&center + &delta), Edge::Upper))?;
        Self::new(min, max)
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }

    /// The value closest to zero inside the domain.
    pub fn least_magnitude(&self) -> T {
        if self.contains(T::ZERO) {
            T::ZERO
        } else if self.min > T::ZERO {
            self.min
        } else {
            self.max
        }
    }
}

impl<T: Integral> WidthAdapter for Domain<T> {
    type Value = T;

    fn widen(&self, value: T) -> BigInt {
        value.widen()
    }

    fn narrow(&self, wide: &BigInt) -> Option<T> {
        T::narrow(wide)
    }

    fn in_range(&self, value: T) -> bool {
        self.contains(value)
    }

    fn least_magnitude(&self) -> T {
        Domain::least_magnitude(self)
    }

    fn is_negative(&self, value: T) -> bool {
        value.is_negative()
    }

    fn negate(&self, value: T) -> Option<T> {
        value.checked_negate()
    }
}

fn resolve_bound<T: Integral>(
    field: &'static str,
    text: Option<&str>,
    typed: Option<T>,
    default: T,
) -> Result<T> {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => T::parse_bound(text).map_err(|message| GenError::configuration(field, message)),
        None => Ok(typed.unwrap_or(default)),
    }
}

fn narrow_bound<T: Integral>(wide: BigInt) -> Result<T> {
    T::narrow(&wide).ok_or_else(|| GenError::RepresentationDefect {
        value: wide.to_string(),
        type_name: T::TYPE_NAME,
    })
}

fn count_digits(value: &BigInt) -> u32 {
    let mut remaining = value.abs();
    let mut count = 0;
    while !remaining.is_zero() {
        remaining /= 10u32;
        count += 1;
    }
    count
}

fn seed_delta(seed: &BigInt) -> BigInt {
    let exponent = count_digits(seed).saturating_sub(1);
    BigInt::from(BASE_DELTA) * num_traits::pow(BigInt::from(10u32), exponent as usize)
}
