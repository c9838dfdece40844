//! Arithmetic evaluator
//!
//! Pure functions over `f64`. Every failure is reported as a [`CalcError`];
//! nothing here panics or touches calculator state.

use crate::error::CalcError;
use crate::types::Operator;

/// Apply a binary operator to `a` and `b`.
pub fn binary(a: f64, b: f64, op: Operator) -> Result<f64, CalcError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide => {
            if b == 0.0 {
                Err(CalcError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}

/// Apply an operator given by its symbol, e.g. `"÷"` or `"/"`.
pub fn apply_symbol(a: f64, b: f64, symbol: &str) -> Result<f64, CalcError> {
    let op: Operator = symbol.parse()?;
    binary(a, b, op)
}

pub fn square(a: f64) -> f64 {
    a * a
}

/// Principal (non-negative) square root.
pub fn square_root(a: f64) -> Result<f64, CalcError> {
    if a < 0.0 {
        return Err(CalcError::NegativeSquareRoot);
    }
    Ok(a.sqrt())
}

pub fn percentage(a: f64) -> f64 {
    a / 100.0
}

pub fn inverse(a: f64) -> Result<f64, CalcError> {
    if a == 0.0 {
        return Err(CalcError::InverseOfZero);
    }
    Ok(1.0 / a)
}

/// Reject infinities and NaN before they reach the display buffer.
pub fn ensure_finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::Overflow)
    }
}
