//! Per-type width adapters.
//!
//! Every concrete type a bounded generator can produce implements
//! [`Integral`] once. The shrink engine and the seed window never do
//! arithmetic in the native width: values are widened to [`BigInt`], worked
//! on there, and narrowed back only when the result names a real value.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Signed;

use crate::data::RandomSource;

/// Which end of a domain a saturated bound is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// The `min` side.
    Lower,
    /// The `max` side.
    Upper,
}

/// Conversions and predicates a bounded type supplies to the generic
/// generation and shrinking code.
pub trait Integral: Copy + Ord + fmt::Debug + fmt::Display {
    /// Name used in error messages and logs.
    const TYPE_NAME: &'static str;
    /// Smallest representable value.
    const MIN: Self;
    /// Largest representable value.
    const MAX: Self;
    /// The value of least magnitude: `0`, or `'\0'` for characters.
    const ZERO: Self;

    /// Exact, lossless widening.
    fn widen(self) -> BigInt;

    /// Narrow a wide value back, or `None` if it names no value of `Self`.
    fn narrow(wide: &BigInt) -> Option<Self>;

    fn is_negative(self) -> bool;

    /// `-self`, when that is representable.
    fn checked_negate(self) -> Option<Self>;

    /// Parse a textual bound.
    fn parse_bound(text: &str) -> std::result::Result<Self, String>;

    /// Draw uniformly from `[min, max]`.
    fn sample<R>(rng: &mut R, min: Self, max: Self) -> Self
    where
        R: RandomSource + ?Sized;

    /// Pull a wide bound inside the representable values of `Self`.
    ///
    /// Integers clamp to `[MIN, MAX]`. The result is still wide; callers
    /// narrow it themselves.
    fn saturate(wide: &BigInt, edge: Edge) -> BigInt;

    /// Absolute distance from zero, used to rank candidates.
    fn magnitude(self) -> BigInt {
        self.widen().abs()
    }
}

macro_rules! impl_integral {
    ($($t:ty),*) => {
        $(
            impl Integral for $t {
                const TYPE_NAME: &'static str = stringify!($t);
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;

                fn widen(self) -> BigInt {
                    BigInt::from(self)
                }

                fn narrow(wide: &BigInt) -> Option<Self> {
                    <$t>::try_from(wide).ok()
                }

                fn is_negative(self) -> bool {
                    self < Self::ZERO
                }

                fn checked_negate(self) -> Option<Self> {
                    self.checked_neg()
                }

                fn parse_bound(text: &str) -> std::result::Result<Self, String> {
                    text.parse::<$t>()
                        .map_err(|e| format!("cannot parse {:?} as {}: {}", text, Self::TYPE_NAME, e))
                }

                fn sample<R>(rng: &mut R, min: Self, max: Self) -> Self
                where
                    R: RandomSource + ?Sized,
                {
                    // The draw lies in [min, max], so the cast is lossless.
                    rng.next_bounded_integer(i64::from(min), i64::from(max)) as $t
                }

                fn saturate(wide: &BigInt, _edge: Edge) -> BigInt {
                    wide.clone().clamp(Self::MIN.widen(), Self::MAX.widen())
                }
            }
        )*
    };
}

impl_integral!(i8, i16, i32, i64, u8, u16, u32);

const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;

impl Integral for char {
    const TYPE_NAME: &'static str = "char";
    const MIN: Self = '\0';
    const MAX: Self = char::MAX;
    const ZERO: Self = '\0';

    fn widen(self) -> BigInt {
        BigInt::from(u32::from(self))
    }

    fn narrow(wide: &BigInt) -> Option<Self> {
        u32::try_from(wide).ok().and_then(char::from_u32)
    }

    fn is_negative(self) -> bool {
        false
    }

    fn checked_negate(self) -> Option<Self> {
        None
    }

    fn parse_bound(text: &str) -> std::result::Result<Self, String> {
        text.chars()
            .next()
            .ok_or_else(|| "expected at least one character".to_string())
    }

    fn sample<R>(rng: &mut R, min: Self, max: Self) -> Self
    where
        R: RandomSource + ?Sized,
    {
        rng.next_bounded_character(min, max)
    }

    fn saturate(wide: &BigInt, edge: Edge) -> BigInt {
        let clamped = wide.clone().clamp(Self::MIN.widen(), Self::MAX.widen());
        let in_gap = clamped >= BigInt::from(SURROGATE_LOW) && clamped <= BigInt::from(SURROGATE_HIGH);
        match (in_gap, edge) {
            (false, _) => clamped,
            (true, Edge::Lower) => BigInt::from(SURROGATE_HIGH + 1),
            (true, Edge::Upper) => BigInt::from(SURROGATE_LOW - 1),
        }
    }
}
