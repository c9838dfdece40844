//! On-screen keypad layout

use libdeskcalc::{CalcAction, Operator, UnaryFunction};

/// Keypad rows, top to bottom; `None` is an empty cell
pub const KEYPAD: [[Option<CalcAction>; 4]; 6] = [
    [
        Some(CalcAction::Unary(UnaryFunction::Percentage)),
        Some(CalcAction::ClearEntry),
        Some(CalcAction::ClearAll),
        Some(CalcAction::Backspace),
    ],
    [
        Some(CalcAction::Unary(UnaryFunction::Inverse)),
        Some(CalcAction::Unary(UnaryFunction::Square)),
        Some(CalcAction::Unary(UnaryFunction::SquareRoot)),
        Some(CalcAction::Operator(Operator::Divide)),
    ],
    [
        Some(CalcAction::Digit(7)),
        Some(CalcAction::Digit(8)),
        Some(CalcAction::Digit(9)),
        Some(CalcAction::Operator(Operator::Multiply)),
    ],
    [
        Some(CalcAction::Digit(4)),
        Some(CalcAction::Digit(5)),
        Some(CalcAction::Digit(6)),
        Some(CalcAction::Operator(Operator::Subtract)),
    ],
    [
        Some(CalcAction::Digit(1)),
        Some(CalcAction::Digit(2)),
        Some(CalcAction::Digit(3)),
        Some(CalcAction::Operator(Operator::Add)),
    ],
    [
        None,
        Some(CalcAction::Digit(0)),
        Some(CalcAction::DecimalPoint),
        Some(CalcAction::Equals),
    ],
];

/// Keyboard shortcut shown in the help overlay
pub fn shortcut(action: CalcAction) -> &'static str {
    match action {
        CalcAction::Digit(_) => "0-9",
        CalcAction::DecimalPoint => ". or ,",
        CalcAction::Operator(Operator::Add) => "+",
        CalcAction::Operator(Operator::Subtract) => "-",
        CalcAction::Operator(Operator::Multiply) => "* or x",
        CalcAction::Operator(Operator::Divide) => "/",
        CalcAction::Equals => "Enter or =",
        CalcAction::ClearAll => "c or Esc",
        CalcAction::ClearEntry => "Delete",
        CalcAction::Backspace => "Backspace",
        CalcAction::Unary(UnaryFunction::Square) => "s",
        CalcAction::Unary(UnaryFunction::SquareRoot) => "r",
        CalcAction::Unary(UnaryFunction::Percentage) => "%",
        CalcAction::Unary(UnaryFunction::Inverse) => "i",
    }
}
