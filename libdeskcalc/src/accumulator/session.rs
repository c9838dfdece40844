//! Calculator session
//!
//! Owns a single [`CalculatorState`] and replaces it with the reducer's
//! output after every action. This is the only place the accumulator logs.

use tracing::{debug, info, warn};

use super::actions::CalcAction;
use super::reducer::reduce;
use super::state::CalculatorState;
use crate::error::CalcError;
use crate::types::{Operator, UnaryFunction};

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn into_state(self) -> CalculatorState {
        self.state
    }

    /// Main display text
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Expression line (`"5 +"` while an operator is pending)
    pub fn expression(&self) -> String {
        self.state.expression()
    }

    /// Apply one action.
    ///
    /// On error the session keeps its previous state and the error is
    /// returned for the caller to present.
    pub fn dispatch(&mut self, action: CalcAction) -> Result<(), CalcError> {
        match reduce(&self.state, action) {
            Ok(next) => {
                let completed = action == CalcAction::Equals
                    && self.state.pending_operator.is_some()
                    && next.pending_operator.is_none();
                if completed {
                    info!(
                        "Calculation completed: {} {} = {}",
                        self.state.expression(),
                        self.state.current_text,
                        next.current_text
                    );
                }
                self.state = next;
                if action == CalcAction::ClearAll {
                    info!("Calculator cleared");
                }
                debug!(
                    key = %action.label(),
                    display = %self.state.current_text,
                    expression = %self.state.expression(),
                    "Action applied"
                );
                Ok(())
            }
            Err(e) => {
                if e.is_warning() {
                    warn!(key = %action.label(), display = %self.state.current_text, "Ignored action: {}", e);
                } else {
                    warn!(key = %action.label(), display = %self.state.current_text, "Action failed: {}", e);
                }
                Err(e)
            }
        }
    }

    pub fn append_digit(&mut self, digit: u8) -> Result<(), CalcError> {
        self.dispatch(CalcAction::Digit(digit))
    }

    pub fn append_decimal_point(&mut self) {
        // Cannot fail
        let _ = self.dispatch(CalcAction::DecimalPoint);
    }

    pub fn set_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        self.dispatch(CalcAction::Operator(op))
    }

    pub fn evaluate(&mut self) -> Result<(), CalcError> {
        self.dispatch(CalcAction::Equals)
    }

    pub fn clear_all(&mut self) {
        let _ = self.dispatch(CalcAction::ClearAll);
    }

    pub fn clear_entry(&mut self) {
        let _ = self.dispatch(CalcAction::ClearEntry);
    }

    pub fn backspace(&mut self) {
        let _ = self.dispatch(CalcAction::Backspace);
    }

    pub fn apply_unary(&mut self, func: UnaryFunction) -> Result<(), CalcError> {
        self.dispatch(CalcAction::Unary(func))
    }
}
