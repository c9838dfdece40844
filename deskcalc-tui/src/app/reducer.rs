//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`.
//! Calculator keys are forwarded to `libdeskcalc::reduce`, which is pure as
//! well, so the whole app state machine can be tested without a terminal.

use super::actions::Action;
use super::state::{AppState, StatusBarState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libdeskcalc::input::from_key_char;
use libdeskcalc::{CalcAction, UnaryFunction};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
///
/// # Purity Guarantees
///
/// - No file I/O
/// - No terminal access
/// - No mutations (returns new state)
/// - Deterministic (same inputs -> same output)
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        Action::Calc(calc) => apply_calc(state, calc),

        // === Error Handling ===
        Action::ShowError(error) => AppState {
            error: Some(error),
            ..state
        },

        Action::DismissError => AppState { error: None, ..state },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

/// Run one calculator key through the core reducer
///
/// A failed key leaves the calculator untouched. Ignored input goes to the
/// status bar; real calculation errors open the error overlay.
fn apply_calc(state: AppState, calc: CalcAction) -> AppState {
    let last_key = Some(calc.label());

    match libdeskcalc::reduce(&state.calculator, calc) {
        Ok(calculator) => AppState {
            calculator,
            last_key,
            error: None,
            status: StatusBarState { message: None },
            ..state
        },
        Err(e) if e.is_warning() => AppState {
            last_key,
            status: StatusBarState {
                message: Some(e.to_string()),
            },
            ..state
        },
        Err(e) => AppState {
            last_key,
            error: Some(e.to_string()),
            ..state
        },
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Release and repeat events arrive on some platforms
    if key.kind != KeyEventKind::Press {
        return state;
    }

    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }

        // Help
        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        // Dismiss error
        (KeyCode::Esc, _) if state.error.is_some() => {
            return reduce(state, Action::DismissError);
        }

        // Hide help
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.help_visible {
        return state;
    }

    match calc_key(key) {
        Some(calc) => reduce(state, Action::Calc(calc)),
        None => state,
    }
}

/// Map a key press to a calculator key
///
/// Shift is ignored so that `+`, `*` and `%` work on any layout.
pub fn calc_key(key: KeyEvent) -> Option<CalcAction> {
    if key.kind != KeyEventKind::Press
        || key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(CalcAction::Equals),
        KeyCode::Backspace => Some(CalcAction::Backspace),
        KeyCode::Delete => Some(CalcAction::ClearEntry),
        KeyCode::Esc => Some(CalcAction::ClearAll),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(CalcAction::ClearAll),
        KeyCode::Char('s') => Some(CalcAction::Unary(UnaryFunction::Square)),
        KeyCode::Char('r') => Some(CalcAction::Unary(UnaryFunction::SquareRoot)),
        KeyCode::Char('i') => Some(CalcAction::Unary(UnaryFunction::Inverse)),
        KeyCode::Char(c) => from_key_char(c),
        _ => None,
    }
}
