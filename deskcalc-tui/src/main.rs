//! deskcalc-tui - Terminal keypad for deskcalc
//!
//! Interactive calculator with an on-screen keypad, driven entirely from the
//! keyboard. Logs go to a file so they never tear the screen.

use deskcalc_tui::{
    app::{event::EventHandler, reducer::calc_key, reduce, Action, AppState, UiConfig},
    error::Result,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libdeskcalc::config::resolve_data_path;
use libdeskcalc::logging::LoggingConfig;
use libdeskcalc::Config;

fn main() {
    if let Err(e) = start() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn start() -> Result<()> {
    let config = Config::load()?;
    init_logging(&config)?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, UiConfig::from_config(&config));
    restore_terminal(terminal)?;

    result
}

/// Route logs to the configured file, or `deskcalc.log` in the data directory
fn init_logging(config: &Config) -> Result<()> {
    let log_file = match config.logging.file_path() {
        Some(path) => path,
        None => resolve_data_path()?.join("deskcalc.log"),
    };

    LoggingConfig::from_section(&config.logging, "info", false)
        .with_file(log_file)
        .init()?;

    Ok(())
}

fn run_app(terminal: &mut Tui, ui_config: UiConfig) -> Result<()> {
    let mut state = AppState::with_config(ui_config);
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    tracing::info!("deskcalc-tui started");

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let action: Action = event_handler.next()?.into();
        let pressed = match action {
            Action::Key(key) if !state.overlay_visible() => calc_key(key),
            _ => None,
        };

        state = reduce(state, action);

        if let Some(calc) = pressed {
            tracing::debug!(
                key = %calc.label(),
                display = %state.calculator.display(),
                expression = %state.calculator.expression(),
                "Key applied"
            );
            if let Some(ref error) = state.error {
                tracing::warn!("Action failed: {}", error);
            }
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("deskcalc-tui exiting");
    Ok(())
}
