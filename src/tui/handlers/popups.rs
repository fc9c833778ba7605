//! Popup input handlers.

use anyhow::Result;
use crossterm::event;

use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent};

/// What a popup asked the parent to do.
enum Outcome {
    Copy(String),
    Close,
    Handled,
}

/// Handle input for whichever popup component is active.
///
/// Returns `Ok(false)` always; popups never quit the application.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let outcome = match state.active_component.as_mut() {
        Some(ActiveComponent::ColorDetail(detail)) => match detail.handle_input(key) {
            Some(ComponentEvent::CopyRequested(kind)) => {
                Outcome::Copy(detail.derived(kind).to_string())
            }
            Some(ComponentEvent::Closed) => Outcome::Close,
            None => Outcome::Handled,
        },
        Some(ActiveComponent::HelpOverlay(help)) => match help.handle_input(key) {
            Some(ComponentEvent::Closed) => Outcome::Close,
            _ => Outcome::Handled,
        },
        None => Outcome::Handled,
    };

    match outcome {
        Outcome::Copy(text) => state.record_copy(text),
        Outcome::Close => state.close_component(),
        Outcome::Handled => {}
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::state;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_detail_copy_records_feedback() {
        let mut state = state();
        state.activate_cursor(); // opens detail for Blue

        handle_popup_input(
            &mut state,
            KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE),
        )
        .unwrap();
        assert_eq!(state.copy_state.copied_text(), Some("#007AFF"));

        handle_popup_input(
            &mut state,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
        )
        .unwrap();
        assert_eq!(state.copy_state.copied_text(), Some("Color.blue"));
    }

    #[test]
    fn test_detail_close_keeps_selection() {
        let mut state = state();
        state.activate_cursor();
        let selected = state.selected_color;

        handle_popup_input(&mut state, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(state.active_component.is_none());
        assert_eq!(state.selected_color, selected);
    }

    #[test]
    fn test_help_overlay_closes() {
        let mut state = state();
        state.open_help_overlay();

        handle_popup_input(&mut state, KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)).unwrap();
        assert!(state.active_component.is_none());
        assert!(state.active_popup.is_none());
    }
}
