use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::divide;
use crate::{NumError, Result};

/// An unsigned decimal number stored as a digit sequence, most significant
/// digit first.
///
/// Canonical form: no leading zero digit unless the value is exactly zero,
/// which is the single digit `0`. Every constructor and operation returns a
/// canonical value, so comparisons never need to re-align operands.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Magnitude {
    digits: Vec<u8>,
}

// ============================================================================
// Constructors
// ============================================================================

impl Magnitude {
    /// Zero, as the single digit `0`.
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// One.
    pub fn one() -> Self {
        Self { digits: vec![1] }
    }

    /// Two.
    pub fn two() -> Self {
        Self { digits: vec![2] }
    }

    /// Builds a magnitude from raw digit values, trimming to canonical form.
    ///
    /// Digits are most significant first and must each be in `0..=9`.
    pub(crate) fn from_digits(mut digits: Vec<u8>) -> Self {
        debug_assert!(digits.iter().all(|&d| d <= 9), "digit out of range");

        let leading = digits.iter().take_while(|&&d| d == 0).count();
        if leading == digits.len() {
            // All zeros (or empty): keep exactly one
            digits.clear();
            digits.push(0);
        } else if leading > 0 {
            digits.drain(..leading);
        }

        Self { digits }
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<u64> for Magnitude {
    fn from(mut n: u64) -> Self {
        if n == 0 {
            return Self::zero();
        }

        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % 10) as u8);
            n /= 10;
        }
        digits.reverse();

        Self { digits }
    }
}

impl From<u8> for Magnitude {
    fn from(n: u8) -> Self {
        Self::from(n as u64)
    }
}

impl From<u16> for Magnitude {
    fn from(n: u16) -> Self {
        Self::from(n as u64)
    }
}

impl From<u32> for Magnitude {
    fn from(n: u32) -> Self {
        Self::from(n as u64)
    }
}

impl From<usize> for Magnitude {
    fn from(n: usize) -> Self {
        Self::from(n as u64)
    }
}

// ============================================================================
// Predicates and Accessors
// ============================================================================

impl Magnitude {
    /// Number of digits in the canonical representation.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 1
    }

    #[inline]
    pub fn is_two(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 2
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.low_digit() % 2 == 0
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// The digit sequence, most significant first.
    #[inline]
    pub(crate) fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// The least significant digit.
    #[inline]
    pub(crate) fn low_digit(&self) -> u8 {
        self.digits[self.digits.len() - 1]
    }

    /// Appends a digit at the low end: `self * 10 + digit`.
    pub(crate) fn push_low_digit(&self, digit: u8) -> Self {
        debug_assert!(digit <= 9, "digit out of range");

        if self.is_zero() {
            return Self {
                digits: vec![digit],
            };
        }

        let mut digits = self.digits.clone();
        digits.push(digit);
        Self { digits }
    }
}

// ============================================================================
// Arithmetic - Addition
// ============================================================================

impl Magnitude {
    /// Returns `self + rhs`.
    ///
    /// Right-to-left digit sum with carry; a trailing carry grows the result
    /// by one digit. Never fails.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn add(&self, rhs: &Self) -> Self {
        let mut out = Vec::with_capacity(self.digits.len().max(rhs.digits.len()) + 1);
        let mut a = self.digits.iter().rev();
        let mut b = rhs.digits.iter().rev();
        let mut carry = 0u8;

        loop {
            let (da, db) = (a.next(), b.next());
            if da.is_none() && db.is_none() {
                break;
            }
            let sum = da.copied().unwrap_or(0) + db.copied().unwrap_or(0) + carry;
            out.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push(carry);
        }
        out.reverse();

        Self::from_digits(out)
    }
}

// ============================================================================
// Arithmetic - Subtraction
// ============================================================================

impl Magnitude {
    /// Returns `self - rhs`, requiring `self >= rhs`.
    ///
    /// Right-to-left digit difference with borrow. A borrow left over after
    /// the final digit means the precondition was broken; that is reported as
    /// [`NumError::Inconsistency`] rather than wrapping around.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        let mut out = Vec::with_capacity(self.digits.len());
        let mut a = self.digits.iter().rev();
        let mut b = rhs.digits.iter().rev();
        let mut borrow = 0i8;

        loop {
            let (da, db) = (a.next(), b.next());
            if da.is_none() && db.is_none() {
                break;
            }
            let mut digit =
                da.copied().unwrap_or(0) as i8 - borrow - db.copied().unwrap_or(0) as i8;
            if digit < 0 {
                digit += 10;
                borrow = 1;
            } else {
                borrow = 0;
            }
            out.push(digit as u8);
        }
        if borrow != 0 {
            return Err(NumError::Inconsistency);
        }
        out.reverse();

        Ok(Self::from_digits(out))
    }
}

// ============================================================================
// Arithmetic - Multiplication
// ============================================================================

impl Magnitude {
    /// Returns `self * rhs` by the schoolbook algorithm.
    ///
    /// For each digit of `rhs` (least significant first), `self` is scaled
    /// into a positionally shifted partial product which is accumulated via
    /// [`Magnitude::add`]. Quadratic in the operand lengths.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }

        let mut acc = Self::zero();
        for (shift, &d) in rhs.digits.iter().rev().enumerate() {
            if d == 0 {
                continue;
            }

            // Partial product built least significant first, with `shift`
            // trailing zeros for the digit's position
            let mut part = Vec::with_capacity(self.digits.len() + shift + 1);
            part.extend(core::iter::repeat(0u8).take(shift));
            let mut carry = 0u8;
            for &a in self.digits.iter().rev() {
                let p = a * d + carry;
                part.push(p % 10);
                carry = p / 10;
            }
            while carry > 0 {
                part.push(carry % 10);
                carry /= 10;
            }
            part.reverse();

            acc = acc.add(&Self::from_digits(part));
        }

        acc
    }
}

// ============================================================================
// Division-backed Operations
// ============================================================================

impl Magnitude {
    /// Long division; see [`divide::div_rem`] for the algorithm.
    pub fn div_rem(&self, divisor: &Self) -> Result<divide::DivRem> {
        divide::div_rem(self, divisor)
    }

    /// Returns `self / 2`, dropping any remainder.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn half(&self) -> Self {
        divide::div_rem_by_two(self).quotient
    }

    /// Raises `self` to the power `exp` by repeated squaring.
    ///
    /// The exponent is halved with the specialized by-two division at each
    /// level, so the cost is O(log exp) multiplications.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn pow(&self, exp: &Self) -> Self {
        if exp.is_zero() {
            return Self::one();
        }

        let x = self.pow(&exp.half());
        let squared = x.mul(&x);
        if exp.is_even() {
            squared
        } else {
            self.mul(&squared)
        }
    }

    /// Greatest common divisor by Euclid's algorithm.
    ///
    /// `gcd(a, 0) == a` and `gcd(0, 0) == 0`.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !a.is_zero() {
            let r = divide::div_rem(&b, &a)
                .expect("gcd: divisor checked nonzero")
                .remainder;
            b = a;
            a = r;
        }
        b
    }

    /// Integer square root (floor of the true root) by Newton's method.
    ///
    /// Iterates `x <- (x + self/x) / 2` from `self / 2` until the sequence
    /// stops strictly decreasing.
    #[must_use = "this returns the result of the operation, without modifying the original"]
    pub fn sqrt(&self) -> Self {
        let mut x0 = self.half();
        if x0.is_zero() {
            // 0 and 1 are their own roots
            return self.clone();
        }

        let mut x1 = newton_step(self, &x0);
        while x1 < x0 {
            x0 = x1;
            x1 = newton_step(self, &x0);
        }
        x0
    }

    /// Deterministic primality by trial division.
    ///
    /// Rejects values up to one, accepts 2/3/5, rejects multiples of 2/3/5,
    /// then tests divisors of the form `6k±1` up to the integer square root.
    pub fn is_prime(&self) -> bool {
        let three = Self::from(3u8);
        let five = Self::from(5u8);

        if *self <= Self::one() {
            return false;
        }
        if self.is_two() || *self == three || *self == five {
            return true;
        }
        if self.is_even() || rem_of(self, &three).is_zero() || rem_of(self, &five).is_zero() {
            return false;
        }

        let boundary = self.sqrt();
        let one = Self::one();
        let six = Self::from(6u8);
        let mut i = six.clone();
        while i <= boundary {
            if rem_of(self, &i.add(&one)).is_zero() || rem_of(self, &i.add(&five)).is_zero() {
                return false;
            }
            i = i.add(&six);
        }
        true
    }
}

/// One Newton iterate `(x + s/x) / 2`; `x` must be nonzero.
fn newton_step(s: &Magnitude, x: &Magnitude) -> Magnitude {
    let q = divide::div_rem(s, x)
        .expect("sqrt: iterate is nonzero")
        .quotient;
    x.add(&q).half()
}

/// `value % divisor` for a divisor known to be nonzero.
fn rem_of(value: &Magnitude, divisor: &Magnitude) -> Magnitude {
    divide::div_rem(value, divisor)
        .expect("remainder: divisor is nonzero")
        .remainder
}

// ============================================================================
// Conversions
// ============================================================================

impl Magnitude {
    /// Converts to a native integer, or `None` if the value does not fit.
    pub fn to_u64(&self) -> Option<u64> {
        let mut n: u64 = 0;
        for &d in &self.digits {
            n = n.checked_mul(10)?.checked_add(d as u64)?;
        }
        Some(n)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Magnitude {
    fn cmp(&self, other: &Self) -> Ordering {
        // Canonical form has no leading zeros, so more digits means a larger
        // value and equal lengths compare positionally
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Parsing and Formatting
// ============================================================================

impl FromStr for Magnitude {
    type Err = NumError;

    /// Accepts decimal digits only. A `.` is reported as
    /// [`NumError::FractionalInput`], any other non-digit (or an empty
    /// string) as [`NumError::InvalidFormat`]. Leading zeros are stripped.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(NumError::InvalidFormat);
        }

        let mut digits = Vec::with_capacity(s.len());
        for byte in s.bytes() {
            if byte == b'.' {
                return Err(NumError::FractionalInput);
            }
            let digit = byte.wrapping_sub(b'0');
            if digit > 9 {
                return Err(NumError::InvalidFormat);
            }
            digits.push(digit);
        }

        Ok(Self::from_digits(digits))
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::with_capacity(self.digits.len());
        for &d in &self.digits {
            out.push((b'0' + d) as char);
        }
        f.write_str(&out)
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Magnitude({})", self)
    }
}
