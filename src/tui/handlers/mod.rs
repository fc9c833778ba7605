//! Input handler modules for the TUI.

pub mod main;
pub mod mouse;
pub mod popups;

use anyhow::Result;
use crossterm::event;

use crate::tui::AppState;

// Re-export handler functions
pub use main::{dispatch_action, handle_main_input};
pub use mouse::handle_mouse_event;
pub use popups::handle_popup_input;

/// Route a key event to the active popup or the main view.
///
/// Returns `Ok(true)` when the user quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.active_component.is_some() {
        handle_popup_input(state, key)
    } else {
        handle_main_input(state, key)
    }
}
