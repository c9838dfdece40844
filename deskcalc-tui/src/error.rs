//! Error types for deskcalc-tui
//!
//! Wraps core library errors and terminal/IO errors for unified handling.
//! Calculation failures are not here: they are shown in the UI, never
//! returned from the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Configuration or logging setup failed
    #[error("Setup error: {0}")]
    Setup(#[from] libdeskcalc::DeskcalcError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
