//! Selection state machine, copy feedback, and shell preference behavior
//! exercised through `AppState`.

use std::time::{Duration, Instant};

mod fixtures;
use fixtures::*;

use swatch::models::DerivedKind;
use swatch::tui::clipboard::CLEAR_DELAY;

#[test]
fn test_exactly_one_selected_after_two_selections() {
    let mut state = test_state();
    let a = state.catalog.color_at(0).unwrap().id;
    let b = state.catalog.color_at(7).unwrap().id;

    state.select_color(a);
    state.select_color(b);

    assert_eq!(state.selected_color, Some(b));
    let selected_count = state
        .catalog
        .colors()
        .iter()
        .filter(|c| state.selected_color == Some(c.id))
        .count();
    assert_eq!(selected_count, 1);
}

#[test]
fn test_toggle_off_returns_to_no_selection() {
    let mut state = test_state();
    let a = state.catalog.color_at(4).unwrap().id;

    state.select_color(a);
    assert_eq!(state.selected_color, Some(a));

    state.select_color(a);
    assert_eq!(state.selected_color, None);
}

#[test]
fn test_selection_never_mutates_catalog() {
    let mut state = test_state();
    let names: Vec<String> = state.catalog.colors().iter().map(|c| c.name.clone()).collect();
    let ids: Vec<_> = state.catalog.colors().iter().map(|c| c.id).collect();

    for index in [0, 5, 17, 5, 0] {
        let id = state.catalog.color_at(index).unwrap().id;
        state.select_color(id);
    }

    let names_after: Vec<String> =
        state.catalog.colors().iter().map(|c| c.name.clone()).collect();
    let ids_after: Vec<_> = state.catalog.colors().iter().map(|c| c.id).collect();
    assert_eq!(names, names_after);
    assert_eq!(ids, ids_after);
}

#[test]
fn test_copy_feedback_expires_after_delay() {
    let mut state = test_state();
    state.copy_from_cursor(DerivedKind::Hex);
    assert_eq!(state.copy_state.copied_text(), Some("#007AFF"));

    let later = Instant::now() + CLEAR_DELAY + Duration::from_millis(100);
    state.tick(later);
    assert!(state.copy_state.copied_text().is_none());
}

#[test]
fn test_new_selection_cancels_copy_feedback() {
    let mut state = test_state();
    state.copy_from_cursor(DerivedKind::Hex);
    assert!(state.copy_state.copied_text().is_some());

    state.activate_cursor();
    assert!(state.copy_state.copied_text().is_none());
}

#[test]
fn test_shell_prefs_applied_at_startup() {
    let store = MemStore::default();
    let shell = RecordingShell::default();
    let _state = test_state_with(store, shell.clone());

    let applied = shell.applied.borrow();
    assert_eq!(applied.len(), 1);
    assert!(applied[0].show_menu_bar_icon);
    assert!(applied[0].show_dock_icon);
}

#[test]
fn test_toggle_persists_and_reapplies() {
    let store = MemStore::default();
    let shell = RecordingShell::default();
    let mut state = test_state_with(store.clone(), shell.clone());

    state.toggle_menu_bar_icon();

    let saved = store.saved.borrow().expect("saved prefs");
    assert!(!saved.show_menu_bar_icon);
    assert!(saved.show_dock_icon);

    let applied = shell.applied.borrow();
    let last = applied.last().expect("apply called");
    assert!(!last.show_menu_bar_icon);
}

#[test]
fn test_hiding_both_icons_is_rejected() {
    let store = MemStore::default();
    let shell = RecordingShell::default();
    let mut state = test_state_with(store.clone(), shell.clone());

    state.toggle_dock_icon();
    let applies_before = shell.applied.borrow().len();

    state.toggle_menu_bar_icon();

    // Prefs unchanged, nothing new pushed to the shell
    assert!(state.config.shell.show_menu_bar_icon);
    assert!(!state.config.shell.show_dock_icon);
    assert_eq!(shell.applied.borrow().len(), applies_before);
}
