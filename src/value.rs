//! The evaluator-facing result type.
//!
//! A [`Value`] is a usable number, a tagged error, or an "ignore" marker.
//! Arithmetic on values never panics and never returns `Result`: a failed
//! operation becomes an error value, and every subsequent operation
//! short-circuits it through unchanged. An expression evaluator can thread
//! values through a whole computation and inspect the outcome once at the
//! end.

use core::cmp::Ordering;
use core::fmt;

use rand::Rng;

use crate::int::Int;
use crate::{NumError, Result};

/// A computation result: a number, a carried error, or a hole.
///
/// `Ignore` marks an input the caller chose to skip (a blank slot, an unset
/// variable); it propagates like an error but is distinguishable from one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Normal(Int),
    Error(NumError),
    Ignore,
}

impl Value {
    pub fn zero() -> Self {
        Self::Normal(Int::zero())
    }

    /// Parses a decimal string; malformed input becomes an error value
    /// rather than a `Result`.
    pub fn parse(s: &str) -> Self {
        s.parse::<Int>().into()
    }

    #[inline]
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal(_))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[inline]
    pub fn is_ignore(&self) -> bool {
        matches!(self, Self::Ignore)
    }

    /// The carried number, if any.
    pub fn as_int(&self) -> Option<&Int> {
        match self {
            Self::Normal(n) => Some(n),
            _ => None,
        }
    }

    /// Applies `f` to the carried number; a non-normal value passes through
    /// unchanged.
    fn map(&self, f: impl FnOnce(&Int) -> Int) -> Self {
        match self {
            Self::Normal(n) => Self::Normal(f(n)),
            other => other.clone(),
        }
    }

    /// Like [`map`](Self::map) for operations that can fail.
    fn try_map(&self, f: impl FnOnce(&Int) -> Result<Int>) -> Self {
        match self {
            Self::Normal(n) => f(n).into(),
            other => other.clone(),
        }
    }

    /// Combines two values; the first non-normal operand wins, left before
    /// right.
    fn combine(&self, rhs: &Self, f: impl FnOnce(&Int, &Int) -> Result<Int>) -> Self {
        match (self, rhs) {
            (Self::Normal(a), Self::Normal(b)) => f(a, b).into(),
            (Self::Normal(_), other) => other.clone(),
            (other, _) => other.clone(),
        }
    }
}

impl From<Int> for Value {
    fn from(n: Int) -> Self {
        Self::Normal(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Normal(Int::from(n))
    }
}

impl From<Result<Int>> for Value {
    fn from(result: Result<Int>) -> Self {
        match result {
            Ok(n) => Self::Normal(n),
            Err(e) => Self::Error(e),
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl Value {
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn add(&self, rhs: &Self) -> Self {
        self.combine(rhs, |a, b| Ok(a + b))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.combine(rhs, |a, b| Ok(a - b))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.combine(rhs, |a, b| Ok(a * b))
    }

    /// Truncating division; a zero divisor yields an error value.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn div(&self, rhs: &Self) -> Self {
        self.combine(rhs, Int::checked_div)
    }

    /// Truncating remainder; a zero divisor yields an error value.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn rem(&self, rhs: &Self) -> Self {
        self.combine(rhs, Int::checked_rem)
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn pow(&self, exp: &Self) -> Self {
        self.combine(exp, |a, b| Ok(a.pow(b)))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn neg(&self) -> Self {
        self.map(|n| -n)
    }

    pub fn add_assign(&mut self, rhs: &Self) {
        *self = self.add(rhs);
    }

    pub fn sub_assign(&mut self, rhs: &Self) {
        *self = self.sub(rhs);
    }

    pub fn mul_assign(&mut self, rhs: &Self) {
        *self = self.mul(rhs);
    }

    pub fn div_assign(&mut self, rhs: &Self) {
        *self = self.div(rhs);
    }

    pub fn rem_assign(&mut self, rhs: &Self) {
        *self = self.rem(rhs);
    }

    pub fn pow_assign(&mut self, exp: &Self) {
        *self = self.pow(exp);
    }
}

// ============================================================================
// Function Table
// ============================================================================

impl Value {
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn abs(&self) -> Self {
        self.map(Int::abs)
    }

    /// -1, 0, or 1.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn sign(&self) -> Self {
        self.map(Int::signum)
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn max(&self, rhs: &Self) -> Self {
        self.combine(rhs, |a, b| Ok(a.max(b)))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn min(&self, rhs: &Self) -> Self {
        self.combine(rhs, |a, b| Ok(a.min(b)))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn gcd(&self, rhs: &Self) -> Self {
        self.combine(rhs, |a, b| Ok(a.gcd(b)))
    }

    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn factorial(&self) -> Self {
        self.map(Int::factorial)
    }

    /// Integer square root; a negative operand yields an error value.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn sqrt(&self) -> Self {
        self.try_map(Int::sqrt)
    }

    /// A number of up to as many random decimal digits as the operand names.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        self.map(|n| Int::random_digits(n, rng))
    }

    /// Primality as 1 or 0.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn isprime(&self) -> Self {
        self.map(|n| if n.is_prime() { Int::one() } else { Int::zero() })
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Value {
    /// Numeric ordering, or `None` when either side is not a number.
    ///
    /// Deliberately a method rather than `PartialOrd`: error and ignore
    /// values are incomparable even to themselves, which `==` on the enum
    /// would contradict.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Normal(a), Self::Normal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(n) => n.fmt(f),
            Self::Error(_) => f.write_str("error"),
            Self::Ignore => f.write_str("ignore"),
        }
    }
}
