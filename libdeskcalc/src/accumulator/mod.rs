//! Input accumulator
//!
//! Turns discrete key actions into the calculator's display buffer:
//! - Actions: what the user pressed
//! - State: what the calculator shows and remembers right now
//! - Reducer: pure functions `(&State, Action) -> Result<State, CalcError>`
//! - Session: owns one state, applies actions and logs the transitions

pub mod actions;
pub mod reducer;
pub mod session;
pub mod state;

pub use actions::CalcAction;
pub use reducer::reduce;
pub use session::Calculator;
pub use state::{CalculatorState, EntryMode};
