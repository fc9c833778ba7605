//! Main UI input handler.

use anyhow::Result;
use crossterm::event;
use std::time::Instant;

use crate::models::DerivedKind;
use crate::shortcuts::{contexts, Action, ShortcutRegistry};
use crate::tui::{AppState, ColorsGrid, Tab};

/// Handle input for the main views.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();
    let context = match state.active_tab {
        Tab::Colors => contexts::COLORS,
        Tab::Materials => contexts::MATERIALS,
    };

    if let Some(action) = registry.lookup(context, key) {
        dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}

/// Dispatch action to appropriate state mutation.
///
/// Returns `Ok(true)` when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => ColorsGrid::move_cursor(state, 0, -1),
        Action::NavigateDown => ColorsGrid::move_cursor(state, 0, 1),
        Action::NavigateLeft => ColorsGrid::move_cursor(state, -1, 0),
        Action::NavigateRight => ColorsGrid::move_cursor(state, 1, 0),
        Action::JumpToFirst => state.cursor = 0,
        Action::JumpToLast => state.cursor = state.catalog.color_count().saturating_sub(1),

        // Tabs
        Action::NextTab | Action::PreviousTab => state.switch_tab(),

        // Selection
        Action::Activate => state.activate_cursor(),

        // Clipboard
        Action::CopyHex => state.copy_from_cursor(DerivedKind::Hex),

        // Backdrop
        Action::ToggleBackdropAnimation => {
            state.backdrop.toggle_paused(Instant::now());
            let message = if state.backdrop.is_paused() {
                "Gradient paused"
            } else {
                "Gradient resumed"
            };
            state.set_status(message);
        }

        // Shell integration
        Action::ToggleDockIcon => state.toggle_dock_icon(),
        Action::ToggleMenuBarIcon => state.toggle_menu_bar_icon(),

        // Help
        Action::ToggleHelp => state.open_help_overlay(),

        // General
        Action::Cancel => state.clear_selection(),
        Action::Quit => return Ok(true),
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::state;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_navigation_moves_cursor() {
        let mut state = state();
        assert_eq!(state.cursor, 0);

        dispatch_action(&mut state, Action::NavigateRight).unwrap();
        assert_eq!(state.cursor, 1);

        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        assert_eq!(state.cursor, 5);

        dispatch_action(&mut state, Action::NavigateLeft).unwrap();
        dispatch_action(&mut state, Action::NavigateUp).unwrap();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut state = state();
        dispatch_action(&mut state, Action::NavigateLeft).unwrap();
        assert_eq!(state.cursor, 0);

        dispatch_action(&mut state, Action::JumpToLast).unwrap();
        let last = state.catalog.color_count() - 1;
        assert_eq!(state.cursor, last);

        dispatch_action(&mut state, Action::NavigateRight).unwrap();
        assert_eq!(state.cursor, last);
    }

    #[test]
    fn test_jump_to_last_row_partial() {
        let mut state = state();
        // The last grid row is partial; moving down from column 3 must not
        // run off the end of the catalog
        state.cursor = 3;
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        assert_eq!(state.cursor, 15);

        dispatch_action(&mut state, Action::NavigateDown).unwrap();
        assert!(state.cursor < state.catalog.color_count());
    }

    #[test]
    fn test_quit_action() {
        let mut state = state();
        assert!(dispatch_action(&mut state, Action::Quit).unwrap());
    }

    #[test]
    fn test_copy_hex_records_feedback() {
        let mut state = state();
        dispatch_action(&mut state, Action::CopyHex).unwrap();
        // Cursor starts on Blue
        assert_eq!(state.copy_state.copied_text(), Some("#007AFF"));
    }

    #[test]
    fn test_backdrop_toggle_roundtrip() {
        let mut state = state();
        dispatch_action(&mut state, Action::ToggleBackdropAnimation).unwrap();
        assert!(state.backdrop.is_paused());
        dispatch_action(&mut state, Action::ToggleBackdropAnimation).unwrap();
        assert!(!state.backdrop.is_paused());
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut state = state();
        let handled =
            handle_main_input(&mut state, KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE))
                .unwrap();
        assert!(!handled);
    }

    #[test]
    fn test_enter_selects_through_registry() {
        let mut state = state();
        handle_main_input(
            &mut state,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        )
        .unwrap();
        assert!(state.selected_color.is_some());
    }
}
