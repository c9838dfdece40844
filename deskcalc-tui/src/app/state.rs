//! Application state
//!
//! Immutable state structure. All state transitions happen through the
//! reducer (see `reducer.rs`).

use libdeskcalc::format::group_thousands;
use libdeskcalc::{CalculatorState, Config};

/// Root application state
///
/// This is the single source of truth for the whole app, calculator
/// included. State transitions are pure functions returning new values.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Calculator state
    pub calculator: CalculatorState,

    /// Label of the last calculator key, highlighted on the keypad
    pub last_key: Option<String>,

    /// Status bar state
    pub status: StatusBarState,

    /// Error overlay state
    pub error: Option<String>,

    /// UI configuration
    pub config: UiConfig,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Show thousands separators on the display
    pub group_digits: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(UiConfig::default())
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl UiConfig {
    /// Build from the config file, letting the environment override it
    pub fn from_config(config: &Config) -> Self {
        let colors_enabled = config.ui.colors
            && std::env::var("NO_COLOR").is_err()
            && std::env::var("DESKCALC_TUI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("DESKCALC_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(config.ui.tick_rate_ms);

        Self {
            colors_enabled,
            group_digits: config.display.group_digits,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            calculator: CalculatorState::new(),
            last_key: None,
            status: StatusBarState::default(),
            error: None,
            config,
        }
    }

    /// Main display text, grouped if configured
    pub fn display_text(&self) -> String {
        if self.config.group_digits {
            group_thousands(self.calculator.display())
        } else {
            self.calculator.display().to_string()
        }
    }

    /// Expression line above the display
    pub fn expression_text(&self) -> String {
        self.calculator.expression()
    }

    /// Is an overlay capturing input?
    pub fn overlay_visible(&self) -> bool {
        self.help_visible || self.error.is_some()
    }
}
