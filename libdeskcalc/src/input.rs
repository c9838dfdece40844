//! Key input mapping
//!
//! Translates keyboard characters and script tokens into [`CalcAction`]s.
//! Front ends decide which physical keys exist; this module only knows the
//! characters and words that name calculator keys.

use crate::accumulator::CalcAction;
use crate::error::{DeskcalcError, Result};
use crate::types::{Operator, UnaryFunction};

/// Map a typed character to a calculator key.
pub fn from_key_char(c: char) -> Option<CalcAction> {
    let action = match c {
        '0'..='9' => CalcAction::Digit(c as u8 - b'0'),
        '.' | ',' => CalcAction::DecimalPoint,
        '+' => CalcAction::Operator(Operator::Add),
        '-' | '−' => CalcAction::Operator(Operator::Subtract),
        '*' | 'x' | 'X' | '×' => CalcAction::Operator(Operator::Multiply),
        '/' | '÷' => CalcAction::Operator(Operator::Divide),
        '=' => CalcAction::Equals,
        '%' => CalcAction::Unary(UnaryFunction::Percentage),
        '√' => CalcAction::Unary(UnaryFunction::SquareRoot),
        '²' => CalcAction::Unary(UnaryFunction::Square),
        '⌫' => CalcAction::Backspace,
        _ => return None,
    };
    Some(action)
}

/// Named keys accepted in scripts
fn from_word(word: &str) -> Option<CalcAction> {
    let action = match word.to_lowercase().as_str() {
        "=" | "enter" | "equals" => CalcAction::Equals,
        "c" | "ac" | "esc" | "escape" | "clear" => CalcAction::ClearAll,
        "ce" => CalcAction::ClearEntry,
        "bs" | "back" | "backspace" | "⌫" => CalcAction::Backspace,
        "sq" | "sqr" | "x²" | "x^2" => CalcAction::Unary(UnaryFunction::Square),
        "sqrt" | "√" | "√x" => CalcAction::Unary(UnaryFunction::SquareRoot),
        "%" | "pct" | "percent" => CalcAction::Unary(UnaryFunction::Percentage),
        "inv" | "1/x" => CalcAction::Unary(UnaryFunction::Inverse),
        _ => return None,
    };
    Some(action)
}

/// Parse one whitespace-free token into key actions.
///
/// Named keys map to a single action; anything else is read character by
/// character, so `12.5` and `2+3=` both expand to one action per key.
pub fn parse_token(token: &str) -> Result<Vec<CalcAction>> {
    if let Some(action) = from_word(token) {
        return Ok(vec![action]);
    }

    token
        .chars()
        .map(|c| {
            from_key_char(c).ok_or_else(|| {
                DeskcalcError::InvalidInput(format!("Unknown key '{}' in '{}'", c, token))
            })
        })
        .collect()
}

/// Parse a whitespace-separated key script.
pub fn parse_sequence(script: &str) -> Result<Vec<CalcAction>> {
    let mut actions = Vec::new();
    for token in script.split_whitespace() {
        actions.extend(parse_token(token)?);
    }
    Ok(actions)
}
