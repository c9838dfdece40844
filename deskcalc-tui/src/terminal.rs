//! Terminal management
//!
//! Handles terminal setup, teardown, and restoration.
//! Ensures terminal is properly restored even on panic.

use crate::error::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Setup terminal for the keypad
///
/// - Enables raw mode (keys arrive one at a time, no echo)
/// - Enters alternate screen (the shell is restored on exit)
pub fn setup_terminal() -> Result<Tui> {
    // Raw mode so digits and operators reach the reducer immediately
    enable_raw_mode()?;

    // Enter alternate screen
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore terminal to normal mode
///
/// - Leaves alternate screen
/// - Disables raw mode
/// - Shows the cursor again (ratatui hides it while drawing)
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    // Leave alternate screen
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    // Disable raw mode
    disable_raw_mode()?;

    // Restore cursor
    terminal.show_cursor()?;

    Ok(())
}

/// Install panic hook to restore terminal on panic
///
/// A panic inside the event loop would otherwise leave the shell in raw mode
/// on the alternate screen, hiding the panic message.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        // Call original panic hook
        original_hook(panic_info);
    }));
}
