//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;

use swatch::config::Config;
use swatch::shell::{PrefStore, ShellIntegration, ShellPrefs, TerminalShell};
use swatch::tui::AppState;

/// In-memory preference store so tests never touch the real config dir.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    pub saved: Rc<RefCell<Option<ShellPrefs>>>,
}

impl PrefStore for MemStore {
    fn load(&self) -> Result<ShellPrefs> {
        Ok(self.saved.borrow().unwrap_or_default())
    }

    fn save(&self, prefs: &ShellPrefs) -> Result<()> {
        *self.saved.borrow_mut() = Some(*prefs);
        Ok(())
    }
}

/// Shell collaborator that records every apply call.
#[derive(Debug, Clone, Default)]
pub struct RecordingShell {
    pub applied: Rc<RefCell<Vec<ShellPrefs>>>,
}

impl ShellIntegration for RecordingShell {
    fn apply(&mut self, prefs: &ShellPrefs) {
        self.applied.borrow_mut().push(*prefs);
    }
}

/// Fresh application state with an in-memory store and the no-op shell.
pub fn test_state() -> AppState {
    AppState::new(
        Config::default(),
        Box::new(MemStore::default()),
        Box::new(TerminalShell::new()),
    )
    .expect("Failed to build test state")
}

/// Fresh application state sharing the given store and shell.
pub fn test_state_with(store: MemStore, shell: RecordingShell) -> AppState {
    AppState::new(Config::default(), Box::new(store), Box::new(shell))
        .expect("Failed to build test state")
}
