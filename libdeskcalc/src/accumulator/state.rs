//! Calculator state
//!
//! A plain value: the reducer never mutates it in place, it builds the next
//! one. That keeps the "old state survives an error" guarantee trivial.

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::format::format_number;
use crate::types::Operator;

/// Whether the next digit extends the entry or starts a fresh one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    Entering,
    AwaitingOperand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Display buffer (digits, optional sign and decimal point)
    pub current_text: String,

    /// Left operand / running result
    pub previous_value: f64,

    /// Operator waiting for its right operand
    pub pending_operator: Option<Operator>,

    /// Next digit replaces the buffer instead of extending it
    pub awaiting_new_entry: bool,

    /// Buffer holds a computed value (from `=` or a unary function)
    pub last_action_was_result: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_text: "0".to_string(),
            previous_value: 0.0,
            pending_operator: None,
            awaiting_new_entry: true,
            last_action_was_result: false,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main display text
    pub fn display(&self) -> &str {
        &self.current_text
    }

    /// Expression line, e.g. `"12 ×"` while an operator is pending
    pub fn expression(&self) -> String {
        match self.pending_operator {
            Some(op) => format!("{} {}", format_number(self.previous_value), op.symbol()),
            None => String::new(),
        }
    }

    pub fn mode(&self) -> EntryMode {
        if self.awaiting_new_entry {
            EntryMode::AwaitingOperand
        } else {
            EntryMode::Entering
        }
    }

    /// Parse the buffer as a number
    pub fn entry_value(&self) -> Result<f64, CalcError> {
        self.current_text
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CalcError::UnparsableEntry(self.current_text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display(), "0");
        assert_eq!(state.previous_value, 0.0);
        assert!(state.pending_operator.is_none());
        assert!(state.awaiting_new_entry);
        assert!(!state.last_action_was_result);
        assert_eq!(state.mode(), EntryMode::AwaitingOperand);
    }

    #[test]
    fn test_expression_line() {
        let mut state = CalculatorState::new();
        assert_eq!(state.expression(), "");

        state.previous_value = 12.0;
        state.pending_operator = Some(Operator::Multiply);
        assert_eq!(state.expression(), "12 ×");
    }

    #[test]
    fn test_entry_value() {
        let mut state = CalculatorState::new();
        state.current_text = "0.".to_string();
        assert_eq!(state.entry_value(), Ok(0.0));

        state.current_text = "-12.5".to_string();
        assert_eq!(state.entry_value(), Ok(-12.5));

        state.current_text = "-".to_string();
        assert_eq!(
            state.entry_value(),
            Err(CalcError::UnparsableEntry("-".to_string()))
        );
    }

    #[test]
    fn test_non_finite_text_is_unparsable() {
        let mut state = CalculatorState::new();
        state.current_text = "inf".to_string();
        assert!(state.entry_value().is_err());
        state.current_text = "NaN".to_string();
        assert!(state.entry_value().is_err());
    }

    #[test]
    fn test_mode_follows_awaiting_flag() {
        let mut state = CalculatorState::new();
        state.awaiting_new_entry = false;
        assert_eq!(state.mode(), EntryMode::Entering);

        // A result on display still awaits a new operand
        state.awaiting_new_entry = true;
        state.last_action_was_result = true;
        assert_eq!(state.mode(), EntryMode::AwaitingOperand);
    }
}
