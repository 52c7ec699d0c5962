//! Unsigned long division.
//!
//! Four related algorithms produce a quotient/remainder pair: divide-by-one
//! (identity), divide-by-two (a table-driven halving pass), bounded repeated
//! subtraction, and the general long division that composes the others. The
//! two-tier design keeps the repeated subtraction bounded to at most nine
//! rounds per quotient digit while the outer scan handles operands of any
//! length.

use alloc::vec;
use alloc::vec::Vec;

use crate::magnitude::Magnitude;
use crate::{NumError, Result};

/// Quotient and remainder of an unsigned division, `0 <= remainder < divisor`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivRem {
    pub quotient: Magnitude,
    pub remainder: Magnitude,
}

/// Halved digit, keyed on (parity of the digit one place up, current digit).
///
/// An odd digit above contributes 5 to the halved digit below it; see
/// <https://en.wikipedia.org/wiki/Division_by_two>.
const HALF_DIGIT: [[u8; 10]; 2] = [
    [0, 0, 1, 1, 2, 2, 3, 3, 4, 4],
    [5, 5, 6, 6, 7, 7, 8, 8, 9, 9],
];

/// Division by one: the identity.
pub(crate) fn div_rem_by_one(dividend: &Magnitude) -> DivRem {
    DivRem {
        quotient: dividend.clone(),
        remainder: Magnitude::zero(),
    }
}

/// Division by two as a single digit-wise halving pass.
///
/// Much cheaper than general division, and leaned on heavily by square root
/// and power-by-squaring.
pub(crate) fn div_rem_by_two(dividend: &Magnitude) -> DivRem {
    let digits = dividend.digits();
    let mut out = Vec::with_capacity(digits.len());

    // The digit above the most significant one is an implicit zero
    let mut above_odd = 0usize;
    for &d in digits {
        out.push(HALF_DIGIT[above_odd][d as usize]);
        above_odd = (d % 2) as usize;
    }

    let remainder = if above_odd == 1 {
        Magnitude::one()
    } else {
        Magnitude::zero()
    };

    DivRem {
        quotient: Magnitude::from_digits(out),
        remainder,
    }
}

/// Division by bounded repeated subtraction.
///
/// Correct for any operands but linear in the quotient value, so the general
/// engine only invokes it on chunks smaller than ten times the divisor, where
/// it runs at most nine rounds.
pub(crate) fn div_rem_slow(dividend: &Magnitude, divisor: &Magnitude) -> Result<DivRem> {
    if divisor.is_zero() {
        return Err(NumError::DivisionByZero);
    }
    if divisor.is_one() {
        return Ok(div_rem_by_one(dividend));
    }
    if divisor.is_two() {
        return Ok(div_rem_by_two(dividend));
    }

    let one = Magnitude::one();
    let mut quotient = Magnitude::zero();
    let mut remainder = dividend.clone();
    while remainder >= *divisor {
        quotient = quotient.add(&one);
        remainder = remainder.checked_sub(divisor)?;
    }

    Ok(DivRem {
        quotient,
        remainder,
    })
}

/// General long division.
///
/// Scans the dividend most significant digit first, growing a chunk until it
/// reaches the divisor. Each chunk that fits is resolved by [`div_rem_slow`]
/// (the chunk is below ten times the divisor, so at most nine rounds), its
/// single quotient digit lands at the matching position, and the
/// sub-remainder seeds the next chunk. Whatever never reached the divisor is
/// the final remainder.
pub fn div_rem(dividend: &Magnitude, divisor: &Magnitude) -> Result<DivRem> {
    if divisor.is_zero() {
        return Err(NumError::DivisionByZero);
    }
    if divisor.is_one() {
        return Ok(div_rem_by_one(dividend));
    }
    if divisor.is_two() {
        return Ok(div_rem_by_two(dividend));
    }

    let digits = dividend.digits();
    let mut quotient = vec![0u8; digits.len()];
    let mut chunk = Magnitude::zero();

    for (pos, &d) in digits.iter().enumerate() {
        chunk = chunk.push_low_digit(d);
        if chunk >= *divisor {
            let part = div_rem_slow(&chunk, divisor)?;
            quotient[pos] = part.quotient.low_digit();
            chunk = part.remainder;
        }
    }

    Ok(DivRem {
        quotient: Magnitude::from_digits(quotient),
        remainder: chunk,
    })
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    fn mag(s: &str) -> Magnitude {
        s.parse().unwrap()
    }

    #[test]
    fn test_div_by_one() {
        let result = div_rem_by_one(&mag("12345"));
        assert_eq!(result.quotient.to_string(), "12345");
        assert_eq!(result.remainder.to_string(), "0");
    }

    #[test]
    fn test_div_by_two_even() {
        let result = div_rem_by_two(&mag("12345678"));
        assert_eq!(result.quotient.to_string(), "6172839");
        assert_eq!(result.remainder.to_string(), "0");
    }

    #[test]
    fn test_div_by_two_odd() {
        let result = div_rem_by_two(&mag("15"));
        assert_eq!(result.quotient.to_string(), "7");
        assert_eq!(result.remainder.to_string(), "1");

        let result = div_rem_by_two(&mag("1"));
        assert_eq!(result.quotient.to_string(), "0");
        assert_eq!(result.remainder.to_string(), "1");
    }

    #[test]
    fn test_div_by_two_matches_native() {
        for n in 0u64..500 {
            let result = div_rem_by_two(&Magnitude::from(n));
            assert_eq!(result.quotient, Magnitude::from(n / 2), "quotient of {}", n);
            assert_eq!(result.remainder, Magnitude::from(n % 2), "remainder of {}", n);
        }
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            div_rem(&mag("10"), &mag("0")),
            Err(NumError::DivisionByZero)
        );
        assert_eq!(
            div_rem_slow(&mag("10"), &mag("0")),
            Err(NumError::DivisionByZero)
        );
    }

    #[test]
    fn test_thousand_by_three() {
        let result = div_rem(&mag("1000"), &mag("3")).unwrap();
        assert_eq!(result.quotient.to_string(), "333");
        assert_eq!(result.remainder.to_string(), "1");
    }

    #[test]
    fn test_dividend_smaller_than_divisor() {
        let result = div_rem(&mag("7"), &mag("19")).unwrap();
        assert_eq!(result.quotient.to_string(), "0");
        assert_eq!(result.remainder.to_string(), "7");
    }

    #[test]
    fn test_multi_digit_divisor() {
        let result = div_rem(&mag("987654321"), &mag("12345")).unwrap();
        assert_eq!(result.quotient, Magnitude::from(987654321u64 / 12345));
        assert_eq!(result.remainder, Magnitude::from(987654321u64 % 12345));
    }

    #[test]
    fn test_huge_operands() {
        // 10^6 == 1 (mod 7), so 10^30 + 1 leaves 2 and the quotient is
        // (10^30 - 1) / 7 = 142857 repeated five times
        let result = div_rem(&mag("1000000000000000000000000000001"), &mag("7")).unwrap();
        assert_eq!(result.quotient.to_string(), "142857142857142857142857142857");
        assert_eq!(result.remainder.to_string(), "2");
    }

    #[test]
    fn test_fast_matches_native() {
        for dividend in (0u64..3000).step_by(13) {
            for divisor in 1u64..30 {
                let result =
                    div_rem(&Magnitude::from(dividend), &Magnitude::from(divisor)).unwrap();
                assert_eq!(
                    result.quotient,
                    Magnitude::from(dividend / divisor),
                    "{} / {}",
                    dividend,
                    divisor
                );
                assert_eq!(
                    result.remainder,
                    Magnitude::from(dividend % divisor),
                    "{} % {}",
                    dividend,
                    divisor
                );
            }
        }
    }

    #[test]
    fn test_slow_and_fast_agree() {
        for dividend in (0u64..400).step_by(7) {
            for divisor in 1u64..25 {
                let a = Magnitude::from(dividend);
                let b = Magnitude::from(divisor);
                let slow = div_rem_slow(&a, &b).unwrap();
                let fast = div_rem(&a, &b).unwrap();
                assert_eq!(slow, fast, "{} / {}", dividend, divisor);
            }
        }
    }
}
