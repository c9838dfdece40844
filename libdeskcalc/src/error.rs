//! Error types for deskcalc

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskcalcError>;

#[derive(Error, Debug)]
pub enum DeskcalcError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DeskcalcError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DeskcalcError::InvalidInput(_) => 3,
            DeskcalcError::Calc(_) => 2,
            DeskcalcError::Config(_) => 1,
            DeskcalcError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures of a single calculator action.
///
/// These never abort a session: the accumulator keeps its previous state and
/// hands the error back so the front end can show it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number")]
    NegativeSquareRoot,

    #[error("Cannot calculate inverse of zero")]
    InverseOfZero,

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Entry is not a number: {0}")]
    UnparsableEntry(String),

    #[error("Result is out of range")]
    Overflow,
}

impl CalcError {
    /// Warnings are reported quietly; the rest are shown as errors.
    pub fn is_warning(&self) -> bool {
        matches!(self, CalcError::UnparsableEntry(_))
    }
}
