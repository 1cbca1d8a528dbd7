//! Integer division under three error-signaling strategies.
//!
//! The same operation — divide two integers, reject a zero denominator — is
//! written three times so the call sites can be compared side by side.

use thiserror::Error;

use crate::outcome::Outcome;

/// Arithmetic failures for the division demos.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot take the square root of negative value {0}")]
    NegativeSquareRoot(i32),
}

/// Status-code style: the return value is a code, not the quotient.
///
/// Returns `0` on success and `-1` on division by zero. The quotient comes
/// back through `out`, which is written only on success; the caller must
/// check the code before reading it.
pub fn divide_status(numerator: i32, denominator: i32, out: &mut i32) -> i32 {
    if denominator == 0 {
        return -1;
    }
    *out = numerator / denominator;
    0
}

/// Exception style: the return value is the quotient, failure panics.
///
/// # Panics
///
/// Panics with an invalid-argument message when `denominator` is zero. An
/// uncaught panic terminates the process — that is the pitfall this variant
/// exists to demonstrate, not a recommended design.
pub fn divide_or_panic(numerator: i32, denominator: i32) -> i32 {
    if denominator == 0 {
        panic!("invalid argument: denominator cannot be zero");
    }
    numerator / denominator
}

/// Outcome style: failure is a value the caller can chain on.
///
/// Succeeds with the quotient (integer truncation toward zero) for any
/// nonzero denominator.
pub fn divide(numerator: i32, denominator: i32) -> Outcome<i32, MathError> {
    if denominator == 0 {
        return Outcome::Failure(MathError::DivisionByZero);
    }
    Outcome::Success(numerator / denominator)
}

/// Dependent operation for chain demos: integer square root.
///
/// Fails for negative input, succeeds with the floor of the square root
/// otherwise. Chained after [`divide`], a negative quotient fails the chain
/// even though the division itself succeeded.
pub fn int_sqrt(value: i32) -> Outcome<i32, MathError> {
    if value < 0 {
        return Outcome::Failure(MathError::NegativeSquareRoot(value));
    }
    Outcome::Success((value as f64).sqrt() as i32)
}
