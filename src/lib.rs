//! Arbitrary-precision decimal integer arithmetic
//!
//! This library stores numbers as sequences of decimal digits and implements
//! exact arithmetic beyond native integer width:
//!
//! - **`Magnitude`**: an unsigned digit sequence with schoolbook
//!   add/subtract/multiply and two-tier long division
//! - **`Int`**: a signed integer composing a sign and a `Magnitude`, with
//!   power, gcd, integer square root, primality, factorial, and digit-wise
//!   random generation
//! - **`Value`**: the evaluator-facing result type (a usable number, a
//!   tagged error, or an "ignore" marker) whose combinators short-circuit
//!   instead of unwinding
//!
//! ## Example
//!
//! ```rust
//! use decint::{Int, Value};
//!
//! let a: Int = "123456789012345678901234567890".parse().unwrap();
//! let b = Int::from(1);
//! assert_eq!((&a + &b).to_string(), "123456789012345678901234567891");
//!
//! // Division by zero is a value, not a panic
//! let bad = Value::parse("1000").div(&Value::parse("0"));
//! assert!(bad.is_error());
//! ```

#![no_std]
#![cfg_attr(test, allow(unused_imports))]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod divide;
mod int;
mod magnitude;
mod value;

pub use divide::DivRem;
pub use int::{Int, Sign};
pub use magnitude::Magnitude;
pub use value::Value;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumError {
    #[error("invalid number: expected decimal digits")]
    InvalidFormat,

    #[error("decimals are not supported, only integers")]
    FractionalInput,

    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of a negative number")]
    NegativeInput,

    #[error("internal inconsistency: subtraction underflow")]
    Inconsistency,
}

pub type Result<T> = core::result::Result<T, NumError>;
