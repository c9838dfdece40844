//! Core types for deskcalc

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CalcError;
use crate::evaluator;

/// Binary operators available on the keypad
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Symbol shown on the key and in the expression line
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply this operator to two operands
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        evaluator::binary(a, b, self)
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    /// Accepts the keypad symbols as well as their ASCII spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "x" | "X" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Single-operand functions applied to the current entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnaryFunction {
    Square,
    SquareRoot,
    Percentage,
    Inverse,
}

impl UnaryFunction {
    pub const ALL: [UnaryFunction; 4] = [
        UnaryFunction::Square,
        UnaryFunction::SquareRoot,
        UnaryFunction::Percentage,
        UnaryFunction::Inverse,
    ];

    /// Key label
    pub fn label(self) -> &'static str {
        match self {
            UnaryFunction::Square => "x²",
            UnaryFunction::SquareRoot => "√x",
            UnaryFunction::Percentage => "%",
            UnaryFunction::Inverse => "1/x",
        }
    }

    pub fn apply(self, a: f64) -> Result<f64, CalcError> {
        match self {
            UnaryFunction::Square => Ok(evaluator::square(a)),
            UnaryFunction::SquareRoot => evaluator::square_root(a),
            UnaryFunction::Percentage => Ok(evaluator::percentage(a)),
            UnaryFunction::Inverse => evaluator::inverse(a),
        }
    }
}

impl std::fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
