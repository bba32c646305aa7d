//! Bisecting shrink search toward the least-magnitude value of a domain.

use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;
use tracing::trace;

/// Upper bound on bisection candidates considered per shrink call.
pub const MAX_BISECTION_STEPS: usize = 15;

/// The capabilities the shrink engine needs from a concrete bounded type.
///
/// `widen`/`narrow` move values in and out of the unbounded working
/// representation; the remaining hooks describe the domain the candidates
/// have to stay inside.
pub trait WidthAdapter {
    type Value: Copy + PartialEq + fmt::Debug;

    /// Lossless conversion into the working representation.
    fn widen(&self, value: Self::Value) -> BigInt;

    /// `None` when `wide` does not name a value of the native type.
    fn narrow(&self, wide: &BigInt) -> Option<Self::Value>;

    /// Whether `value` lies inside the domain.
    fn in_range(&self, value: Self::Value) -> bool;

    /// The value candidates converge on.
    fn least_magnitude(&self) -> Self::Value;

    /// Whether `value` is below zero; a negative input also tries its negation.
    fn is_negative(&self, value: Self::Value) -> bool;

    /// `-value`, when representable.
    fn negate(&self, value: Self::Value) -> Option<Self::Value>;
}

/// Halving walk from `from` toward `toward`.
///
/// Each element moves half of the remaining distance, truncating toward
/// `from`. Neither end is yielded: the walk starts one step past `from` and
/// stops once it can make no further progress.
#[derive(Debug, Clone)]
pub struct Bisection {
    current: BigInt,
    toward: BigInt,
}

impl Bisection {
    /// Walk starting at `from` (exclusive) and approaching `toward`.
    pub fn new(from: BigInt, toward: BigInt) -> Self {
        Bisection {
            current: from,
            toward,
        }
    }
}

impl Iterator for Bisection {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let step = (&self.toward - &self.current) / 2u32;
        if step.is_zero() {
            return None;
        }
        self.current += step;
        Some(self.current.clone())
    }
}

/// Produce the ordered shrink candidates for a failing value.
///
/// The result holds the in-range, deduplicated bisection points between the
/// least-magnitude value and `larger` (nearest to `larger` first), then the
/// least-magnitude value, then for negative inputs the sign flip of `larger`
/// when it lies in the domain. An already minimal value yields nothing.
pub fn shrink<A>(adapter: &A, larger: A::Value) -> Vec<A::Value>
where
    A: WidthAdapter + ?Sized,
{
    let least = adapter.least_magnitude();
    if larger == least {
        return Vec::new();
    }

    let target = adapter.widen(least);
    let start = adapter.widen(larger);

    let mut candidates: Vec<A::Value> = Vec::with_capacity(MAX_BISECTION_STEPS + 2);
    for wide in Bisection::new(target, start).take(MAX_BISECTION_STEPS) {
        match adapter.narrow(&wide) {
            Some(value) if adapter.in_range(value) => {
                if !candidates.contains(&value) {
                    candidates.push(value);
                }
            }
            _ => trace!(%wide, "dropping shrink candidate outside domain"),
        }
    }
    candidates.reverse();

    candidates.push(least);
    if adapter.is_negative(larger) {
        if let Some(flipped) = adapter.negate(larger).filter(|&v| adapter.in_range(v)) {
            candidates.push(flipped);
        }
    }

    trace!(?larger, count = candidates.len(), "shrink");
    candidates
}
