//! Actions for the accumulator
//!
//! Every key on the keypad maps to exactly one of these. The reducer
//! (see `reducer.rs`) is responsible for applying them to state.

use serde::{Deserialize, Serialize};

use crate::types::{Operator, UnaryFunction};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalcAction {
    /// Digit key, 0 through 9
    Digit(u8),

    /// Decimal point key
    DecimalPoint,

    /// Binary operator key
    Operator(Operator),

    /// Equals / Enter
    Equals,

    /// Clear everything (Escape)
    ClearAll,

    /// Clear only the current entry
    ClearEntry,

    /// Remove the last character of the entry
    Backspace,

    /// Single-operand function key
    Unary(UnaryFunction),
}

impl CalcAction {
    /// Short label for logs and the key legend
    pub fn label(&self) -> String {
        match self {
            CalcAction::Digit(d) => d.to_string(),
            CalcAction::DecimalPoint => ".".to_string(),
            CalcAction::Operator(op) => op.symbol().to_string(),
            CalcAction::Equals => "=".to_string(),
            CalcAction::ClearAll => "C".to_string(),
            CalcAction::ClearEntry => "CE".to_string(),
            CalcAction::Backspace => "⌫".to_string(),
            CalcAction::Unary(func) => func.label().to_string(),
        }
    }
}

impl From<Operator> for CalcAction {
    fn from(op: Operator) -> Self {
        CalcAction::Operator(op)
    }
}

impl From<UnaryFunction> for CalcAction {
    fn from(func: UnaryFunction) -> Self {
        CalcAction::Unary(func)
    }
}
