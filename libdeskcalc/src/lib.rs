//! deskcalc - a keypad calculator core
//!
//! This library holds everything with behavior in the calculator: the input
//! accumulator that turns key presses into a display buffer, the arithmetic
//! evaluator behind it, and the shared configuration and logging setup used
//! by the terminal and command-line front ends.

pub mod accumulator;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod input;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use accumulator::{reduce, CalcAction, Calculator, CalculatorState};
pub use config::Config;
pub use error::{CalcError, ConfigError, DeskcalcError, Result};
pub use types::{Operator, UnaryFunction};
