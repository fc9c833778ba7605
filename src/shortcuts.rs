//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting the status-bar hint text with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Binding contexts for the two main views.
pub mod contexts {
    /// Colors grid tab
    pub const COLORS: &str = "colors";
    /// Materials board tab
    pub const MATERIALS: &str = "materials";
}

/// All possible actions in the application's main views.
///
/// Popup components (detail view, help overlay) handle their own keys; this
/// enum covers everything dispatched from the main event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    JumpToFirst,
    JumpToLast,

    // === TABS ===
    NextTab,
    PreviousTab,

    // === SELECTION ===
    Activate,

    // === CLIPBOARD ===
    CopyHex,

    // === BACKDROP ===
    ToggleBackdropAnimation,

    // === SHELL INTEGRATION ===
    ToggleDockIcon,
    ToggleMenuBarIcon,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Cancel,
    Quit,
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the
/// application.
pub struct ShortcutRegistry {
    /// Maps (context, key binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_shared_shortcuts(contexts::COLORS);
        registry.register_shared_shortcuts(contexts::MATERIALS);
        registry.register_colors_shortcuts();
        registry.register_materials_shortcuts();
        registry
    }

    /// Shortcuts available in both tabs.
    fn register_shared_shortcuts(&mut self, ctx: &str) {
        use KeyCode as K;
        use KeyModifiers as M;

        // === TABS ===
        self.register(ctx, K::Tab, M::NONE, Action::NextTab);
        // Terminals disagree on whether Shift+Tab carries the modifier
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousTab);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousTab);

        // === SHELL INTEGRATION ===
        self.register(ctx, K::Char('D'), M::SHIFT, Action::ToggleDockIcon);
        self.register(ctx, K::Char('M'), M::SHIFT, Action::ToggleMenuBarIcon);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register shortcuts specific to the colors grid.
    fn register_colors_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::COLORS;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);

        // === SELECTION ===
        self.register(ctx, K::Enter, M::NONE, Action::Activate);

        // === CLIPBOARD ===
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyHex);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::CopyHex);
    }

    /// Register shortcuts specific to the materials board.
    fn register_materials_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = contexts::MATERIALS;

        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleBackdropAnimation);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
