use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use core::str::FromStr;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::divide;
use crate::magnitude::Magnitude;
use crate::{NumError, Result};

/// Sign of an [`Int`]. Zero is canonically `Positive`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    fn flipped(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product of two values with these signs.
    #[inline]
    fn product(self, other: Self) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A signed arbitrary-precision decimal integer.
///
/// Composes a [`Sign`] and a [`Magnitude`]; all sign dispatch happens here so
/// the magnitude layer never computes a negative intermediate.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Int {
    sign: Sign,
    magnitude: Magnitude,
}

// ============================================================================
// Constructors and Accessors
// ============================================================================

impl Int {
    pub fn zero() -> Self {
        Self::from(Magnitude::zero())
    }

    pub fn one() -> Self {
        Self::from(Magnitude::one())
    }

    /// The single normalization point: a zero magnitude always gets a
    /// positive sign.
    pub(crate) fn from_parts(sign: Sign, magnitude: Magnitude) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { sign, magnitude }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// True for values strictly below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        // Normalization keeps zero positive, so the sign alone decides
        self.sign == Sign::Negative
    }

    /// True for values strictly above zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.magnitude.is_even()
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.magnitude.is_odd()
    }
}

impl Default for Int {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Magnitude> for Int {
    fn from(magnitude: Magnitude) -> Self {
        Self::from_parts(Sign::Positive, magnitude)
    }
}

impl From<i64> for Int {
    fn from(n: i64) -> Self {
        let sign = if n < 0 { Sign::Negative } else { Sign::Positive };
        Self::from_parts(sign, Magnitude::from(n.unsigned_abs()))
    }
}

impl From<u64> for Int {
    fn from(n: u64) -> Self {
        Self::from(Magnitude::from(n))
    }
}

impl From<i32> for Int {
    fn from(n: i32) -> Self {
        Self::from(n as i64)
    }
}

impl From<u32> for Int {
    fn from(n: u32) -> Self {
        Self::from(n as u64)
    }
}

impl From<i16> for Int {
    fn from(n: i16) -> Self {
        Self::from(n as i64)
    }
}

impl From<u16> for Int {
    fn from(n: u16) -> Self {
        Self::from(n as u64)
    }
}

impl From<i8> for Int {
    fn from(n: i8) -> Self {
        Self::from(n as i64)
    }
}

impl From<u8> for Int {
    fn from(n: u8) -> Self {
        Self::from(n as u64)
    }
}

// ============================================================================
// Sign Operations
// ============================================================================

impl Int {
    /// Absolute value.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn abs(&self) -> Self {
        Self::from_parts(Sign::Positive, self.magnitude.clone())
    }

    /// -1, 0, or 1.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn signum(&self) -> Self {
        if self.is_zero() {
            Self::zero()
        } else {
            Self::from_parts(self.sign, Magnitude::one())
        }
    }

    fn negated(&self) -> Self {
        Self::from_parts(self.sign.flipped(), self.magnitude.clone())
    }
}

// ============================================================================
// Signed Addition and Subtraction
// ============================================================================

/// The sign-dispatch table for addition. Each branch reduces to exactly one
/// magnitude operation; subtraction redirects here once with a negated rhs.
fn signed_add(a: &Int, b: &Int) -> Int {
    match (a.sign, b.sign) {
        (Sign::Positive, Sign::Positive) => {
            Int::from_parts(Sign::Positive, a.magnitude.add(&b.magnitude))
        }
        (Sign::Negative, Sign::Negative) => {
            Int::from_parts(Sign::Negative, a.magnitude.add(&b.magnitude))
        }
        (Sign::Positive, Sign::Negative) => signed_diff(&a.magnitude, &b.magnitude),
        (Sign::Negative, Sign::Positive) => signed_diff(&b.magnitude, &a.magnitude),
    }
}

/// `a - b` over magnitudes; the result's sign is decided by which operand is
/// larger, so the magnitude layer always subtracts the smaller value.
fn signed_diff(a: &Magnitude, b: &Magnitude) -> Int {
    match a.cmp(b) {
        Ordering::Less => Int::from_parts(
            Sign::Negative,
            b.checked_sub(a).expect("subtrahend compared smaller"),
        ),
        _ => Int::from_parts(
            Sign::Positive,
            a.checked_sub(b).expect("subtrahend compared smaller"),
        ),
    }
}

// ============================================================================
// Division
// ============================================================================

impl Int {
    /// Truncating signed division: quotient and remainder in one pass.
    ///
    /// The quotient's sign is the product of the operand signs; the remainder
    /// takes the dividend's sign (not Euclidean), matching native-integer
    /// division. Zero results are normalized positive.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let parts = divide::div_rem(&self.magnitude, &divisor.magnitude)?;
        let quotient = Self::from_parts(self.sign.product(divisor.sign), parts.quotient);
        let remainder = Self::from_parts(self.sign, parts.remainder);
        Ok((quotient, remainder))
    }

    /// Truncating quotient, or [`NumError::DivisionByZero`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_div(&self, divisor: &Self) -> Result<Self> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// Truncating remainder, or [`NumError::DivisionByZero`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self> {
        Ok(self.div_rem(divisor)?.1)
    }
}

// ============================================================================
// Derived Functions
// ============================================================================

impl Int {
    /// Raises `self` to the power `exp` by repeated squaring.
    ///
    /// A zero exponent gives one; a negative base gives a negative result
    /// exactly when the exponent is odd. The exponent's own sign is ignored.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn pow(&self, exp: &Self) -> Self {
        let magnitude = self.magnitude.pow(&exp.magnitude);
        let sign = if self.sign == Sign::Negative && exp.magnitude.is_odd() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_parts(sign, magnitude)
    }

    /// Greatest common divisor of the magnitudes; always non-negative.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from(self.magnitude.gcd(&other.magnitude))
    }

    /// Integer square root (floor), or [`NumError::NegativeInput`].
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn sqrt(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(NumError::NegativeInput);
        }
        Ok(Self::from(self.magnitude.sqrt()))
    }

    /// Deterministic trial-division primality; negatives are non-prime.
    pub fn is_prime(&self) -> bool {
        !self.is_negative() && self.magnitude.is_prime()
    }

    /// Naive recursive factorial. Values up to one (including negatives)
    /// give one.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn factorial(&self) -> Self {
        let one = Self::one();
        if *self <= one {
            return one;
        }
        let prev = self - &one;
        &prev.factorial() * self
    }

    /// A value of `digits` independently drawn decimal digits.
    ///
    /// The caller owns the generator, so a seeded generator reproduces the
    /// same value. Zero or negative digit counts (and counts beyond native
    /// range) give zero. Leading zero draws are trimmed away, so the result
    /// may have fewer digits than requested.
    pub fn random_digits<R: Rng + ?Sized>(digits: &Self, rng: &mut R) -> Self {
        if digits.is_negative() {
            return Self::zero();
        }
        let Some(n) = digits.magnitude.to_u64() else {
            return Self::zero();
        };

        let mut drawn = Vec::with_capacity(n as usize);
        for _ in 0..n {
            drawn.push(rng.random_range(0..10u8));
        }
        Self::from(Magnitude::from_digits(drawn))
    }

    /// Minimum by signed comparison.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn min(&self, other: &Self) -> Self {
        if self <= other {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// Maximum by signed comparison.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn max(&self, other: &Self) -> Self {
        if self >= other {
            self.clone()
        } else {
            other.clone()
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl Int {
    /// Converts to a native integer, or `None` if the value does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()? as i128;
        let value = match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        };
        i64::try_from(value).ok()
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Operator Trait Implementations
// ============================================================================

impl Add for &Int {
    type Output = Int;

    fn add(self, rhs: Self) -> Int {
        signed_add(self, rhs)
    }
}

impl Sub for &Int {
    type Output = Int;

    fn sub(self, rhs: Self) -> Int {
        // One redirection: a - b = a + (-b)
        signed_add(self, &rhs.negated())
    }
}

impl Mul for &Int {
    type Output = Int;

    fn mul(self, rhs: Self) -> Int {
        Int::from_parts(
            self.sign.product(rhs.sign),
            self.magnitude.mul(&rhs.magnitude),
        )
    }
}

impl Div for &Int {
    type Output = Int;

    fn div(self, rhs: Self) -> Int {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl Rem for &Int {
    type Output = Int;

    fn rem(self, rhs: Self) -> Int {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl Neg for &Int {
    type Output = Int;

    fn neg(self) -> Int {
        self.negated()
    }
}

impl Add for Int {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl Sub for Int {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl Mul for Int {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl Div for Int {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        &self / &rhs
    }
}

impl Rem for Int {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        &self % &rhs
    }
}

impl Neg for Int {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl AddAssign<&Int> for Int {
    fn add_assign(&mut self, rhs: &Int) {
        *self = &*self + rhs;
    }
}

impl SubAssign<&Int> for Int {
    fn sub_assign(&mut self, rhs: &Int) {
        *self = &*self - rhs;
    }
}

impl MulAssign<&Int> for Int {
    fn mul_assign(&mut self, rhs: &Int) {
        *self = &*self * rhs;
    }
}

impl DivAssign<&Int> for Int {
    fn div_assign(&mut self, rhs: &Int) {
        *self = &*self / rhs;
    }
}

impl RemAssign<&Int> for Int {
    fn rem_assign(&mut self, rhs: &Int) {
        *self = &*self % rhs;
    }
}

impl Int {
    /// In-place form of [`pow`](Self::pow); there is no native operator to
    /// overload for exponentiation.
    pub fn pow_assign(&mut self, exp: &Self) {
        *self = self.pow(exp);
    }
}

impl Sum for Int {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Int> for Int {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| &acc + x)
    }
}

impl Product for Int {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Int> for Int {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| &acc * x)
    }
}

// ============================================================================
// Parsing and Formatting
// ============================================================================

impl FromStr for Int {
    type Err = NumError;

    /// An optional leading `-` followed by decimal digits.
    fn from_str(s: &str) -> Result<Self> {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, s),
        };
        let magnitude = digits.parse::<Magnitude>()?;
        Ok(Self::from_parts(sign, magnitude))
    }
}

impl fmt::Display for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Negative {
            write!(f, "-{}", self.magnitude)
        } else {
            self.magnitude.fmt(f)
        }
    }
}

impl fmt::Debug for Int {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Int({})", self)
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Int {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Canonical decimal string in every format; collect_str avoids the
        // intermediate allocation
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Int {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = alloc::string::String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn int(s: &str) -> Int {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(int("0").to_string(), "0");
        assert_eq!(int("-0").to_string(), "0");
        assert_eq!(int("42").to_string(), "42");
        assert_eq!(int("-42").to_string(), "-42");
        assert_eq!(int("-007").to_string(), "-7");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Int>(), Err(NumError::InvalidFormat));
        assert_eq!("-".parse::<Int>(), Err(NumError::InvalidFormat));
        assert_eq!("--5".parse::<Int>(), Err(NumError::InvalidFormat));
        assert_eq!("1.5".parse::<Int>(), Err(NumError::FractionalInput));
        assert_eq!("12x".parse::<Int>(), Err(NumError::InvalidFormat));
    }

    #[test]
    fn test_zero_is_canonically_positive() {
        let zero = int("-0");
        assert_eq!(zero.sign(), Sign::Positive);
        assert!(!zero.is_negative());
        assert!(!zero.is_positive());
        assert_eq!(int("5") - int("5"), Int::zero());
    }

    #[test]
    fn test_add_sign_combinations() {
        assert_eq!(int("7") + int("5"), int("12"));
        assert_eq!(int("7") + int("-5"), int("2"));
        assert_eq!(int("-7") + int("5"), int("-2"));
        assert_eq!(int("-7") + int("-5"), int("-12"));
        assert_eq!(int("5") + int("-7"), int("-2"));
        assert_eq!(int("-5") + int("7"), int("2"));
    }

    #[test]
    fn test_sub_sign_combinations() {
        assert_eq!(int("7") - int("5"), int("2"));
        assert_eq!(int("5") - int("7"), int("-2"));
        assert_eq!(int("7") - int("-5"), int("12"));
        assert_eq!(int("-7") - int("5"), int("-12"));
        assert_eq!(int("-7") - int("-5"), int("-2"));
        assert_eq!(int("-5") - int("-7"), int("2"));
    }

    #[test]
    fn test_mul_signs() {
        assert_eq!(int("6") * int("7"), int("42"));
        assert_eq!(int("-6") * int("7"), int("-42"));
        assert_eq!(int("6") * int("-7"), int("-42"));
        assert_eq!(int("-6") * int("-7"), int("42"));
        assert_eq!(int("-6") * int("0"), Int::zero());
    }

    #[test]
    fn test_truncating_division() {
        // Remainder follows the dividend, quotient truncates toward zero
        let cases = [
            ("7", "2", "3", "1"),
            ("-7", "2", "-3", "-1"),
            ("7", "-2", "-3", "1"),
            ("-7", "-2", "3", "-1"),
            ("6", "3", "2", "0"),
            ("-6", "3", "-2", "0"),
        ];
        for (a, b, q, r) in cases {
            let (quotient, remainder) = int(a).div_rem(&int(b)).unwrap();
            assert_eq!(quotient, int(q), "{} / {}", a, b);
            assert_eq!(remainder, int(r), "{} % {}", a, b);
        }
    }

    #[test]
    fn test_division_matches_native() {
        for a in (-200i64..200).step_by(7) {
            for b in (-50i64..50).step_by(3) {
                if b == 0 {
                    continue;
                }
                let (q, r) = Int::from(a).div_rem(&Int::from(b)).unwrap();
                assert_eq!(q, Int::from(a / b), "{} / {}", a, b);
                assert_eq!(r, Int::from(a % b), "{} % {}", a, b);
            }
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            int("10").checked_div(&Int::zero()),
            Err(NumError::DivisionByZero)
        );
        assert_eq!(
            int("10").checked_rem(&Int::zero()),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = int("10") / Int::zero();
    }

    #[test]
    fn test_neg_and_abs() {
        assert_eq!(-int("5"), int("-5"));
        assert_eq!(-int("-5"), int("5"));
        assert_eq!(-Int::zero(), Int::zero());
        assert_eq!(int("-5").abs(), int("5"));
        assert_eq!(int("5").abs(), int("5"));
    }

    #[test]
    fn test_signum() {
        assert_eq!(int("17").signum(), int("1"));
        assert_eq!(int("-17").signum(), int("-1"));
        assert_eq!(Int::zero().signum(), Int::zero());
    }

    #[test]
    fn test_ordering() {
        assert!(int("-10") < int("-9"));
        assert!(int("-1") < int("0"));
        assert!(int("0") < int("1"));
        assert!(int("9") < int("10"));
        assert!(int("-100") < int("1"));
    }

    #[test]
    fn test_pow() {
        assert_eq!(int("2").pow(&int("10")), int("1024"));
        assert_eq!(int("5").pow(&int("0")), int("1"));
        assert_eq!(int("-2").pow(&int("3")), int("-8"));
        assert_eq!(int("-2").pow(&int("4")), int("16"));
        assert_eq!(int("0").pow(&int("0")), int("1"));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(int("48").gcd(&int("18")), int("6"));
        assert_eq!(int("-48").gcd(&int("18")), int("6"));
        assert_eq!(int("48").gcd(&int("-18")), int("6"));
        assert_eq!(int("42").gcd(&Int::zero()), int("42"));
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(int("100000000").sqrt().unwrap(), int("10000"));
        assert_eq!(int("0").sqrt().unwrap(), int("0"));
        assert_eq!(int("99").sqrt().unwrap(), int("9"));
        assert_eq!(int("-1").sqrt(), Err(NumError::NegativeInput));
    }

    #[test]
    fn test_factorial() {
        assert_eq!(int("0").factorial(), int("1"));
        assert_eq!(int("1").factorial(), int("1"));
        assert_eq!(int("-5").factorial(), int("1"));
        assert_eq!(int("5").factorial(), int("120"));
        assert_eq!(int("12").factorial(), int("479001600"));
        assert_eq!(
            int("25").factorial().to_string(),
            "15511210043330985984000000"
        );
    }

    #[test]
    fn test_is_prime_matches_trial_division() {
        fn prime_native(n: u64) -> bool {
            if n < 2 {
                return false;
            }
            (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
        }
        for n in 0u64..=10_000 {
            assert_eq!(Int::from(n).is_prime(), prime_native(n), "isprime({})", n);
        }
    }

    #[test]
    fn test_is_prime_negative() {
        assert!(!int("-7").is_prime());
    }

    #[test]
    fn test_random_digits_deterministic() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = Int::random_digits(&int("50"), &mut a);
        let second = Int::random_digits(&int("50"), &mut b);
        assert_eq!(first, second);
        assert!(first.magnitude().digit_count() <= 50);
        assert!(!first.is_negative());
    }

    #[test]
    fn test_random_digits_degenerate_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Int::random_digits(&Int::zero(), &mut rng), Int::zero());
        assert_eq!(Int::random_digits(&int("-3"), &mut rng), Int::zero());
    }

    #[test]
    fn test_min_max() {
        assert_eq!((&int("3")).min(&int("-7")), int("-7"));
        assert_eq!((&int("3")).max(&int("-7")), int("3"));
    }

    #[test]
    fn test_to_i64() {
        assert_eq!(int("0").to_i64(), Some(0));
        assert_eq!(int("-42").to_i64(), Some(-42));
        assert_eq!(
            int("9223372036854775807").to_i64(),
            Some(i64::MAX)
        );
        assert_eq!(
            int("-9223372036854775808").to_i64(),
            Some(i64::MIN)
        );
        assert_eq!(int("9223372036854775808").to_i64(), None);
    }

    #[test]
    fn test_from_native_roundtrip() {
        for n in [i64::MIN, -1000, -1, 0, 1, 999, i64::MAX] {
            assert_eq!(Int::from(n).to_i64(), Some(n));
            assert_eq!(Int::from(n).to_string(), n.to_string());
        }
    }

    #[test]
    fn test_assign_operators() {
        let mut n = int("10");
        n += &int("5");
        assert_eq!(n, int("15"));
        n -= &int("20");
        assert_eq!(n, int("-5"));
        n *= &int("-6");
        assert_eq!(n, int("30"));
        n /= &int("7");
        assert_eq!(n, int("4"));
        n %= &int("3");
        assert_eq!(n, int("1"));
    }

    #[test]
    fn test_pow_assign() {
        let mut n = int("-2");
        n.pow_assign(&int("5"));
        assert_eq!(n, int("-32"));
        n.pow_assign(&int("0"));
        assert_eq!(n, int("1"));
    }

    #[test]
    fn test_sum_product() {
        let values: Vec<Int> = (1..=5i64).map(Int::from).collect();
        assert_eq!(values.iter().sum::<Int>(), int("15"));
        assert_eq!(values.iter().product::<Int>(), int("120"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_string_roundtrip() {
        let n = int("-123456789012345678901234567890");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"-123456789012345678901234567890\"");
        let back: Int = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
