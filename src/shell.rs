//! Desktop-shell icon preferences and the integration seam they cross.
//!
//! The host shell (menu-bar/status icon, dock icon) is an external
//! collaborator. This module owns the explicit settings object for it, the
//! key-value store interface the settings persist through, and the trait the
//! shell implementation sits behind. The terminal build ships a recording
//! no-op implementation.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Icon-visibility preferences for the host desktop shell.
///
/// Invariant: at least one of the two icons is always visible. Mutators that
/// would clear both are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellPrefs {
    /// Show an icon in the persistent status area / menu bar
    #[serde(rename = "showMenuBarIcon", default = "default_visible")]
    pub show_menu_bar_icon: bool,
    /// Show a taskbar / dock icon
    #[serde(rename = "showDockIcon", default = "default_visible")]
    pub show_dock_icon: bool,
}

const fn default_visible() -> bool {
    true
}

impl Default for ShellPrefs {
    fn default() -> Self {
        Self {
            show_menu_bar_icon: true,
            show_dock_icon: true,
        }
    }
}

impl ShellPrefs {
    /// Sets menu-bar icon visibility.
    ///
    /// Returns `false` (leaving the prefs unchanged) if the change would hide
    /// both icons.
    pub fn set_menu_bar_icon(&mut self, visible: bool) -> bool {
        if !visible && !self.show_dock_icon {
            return false;
        }
        self.show_menu_bar_icon = visible;
        true
    }

    /// Sets dock icon visibility.
    ///
    /// Returns `false` (leaving the prefs unchanged) if the change would hide
    /// both icons.
    pub fn set_dock_icon(&mut self, visible: bool) -> bool {
        if !visible && !self.show_menu_bar_icon {
            return false;
        }
        self.show_dock_icon = visible;
        true
    }

    /// Flips menu-bar icon visibility, subject to the invariant.
    pub fn toggle_menu_bar_icon(&mut self) -> bool {
        self.set_menu_bar_icon(!self.show_menu_bar_icon)
    }

    /// Flips dock icon visibility, subject to the invariant.
    pub fn toggle_dock_icon(&mut self) -> bool {
        self.set_dock_icon(!self.show_dock_icon)
    }
}

/// The injected key-value store the shell preferences persist through.
///
/// Production code backs this with the TOML config file; tests inject a
/// temp-dir store.
pub trait PrefStore {
    /// Loads the persisted preferences, defaulting when nothing is stored.
    ///
    /// # Errors
    /// Returns an error if the backing store exists but cannot be read.
    fn load(&self) -> Result<ShellPrefs>;

    /// Persists the preferences.
    ///
    /// # Errors
    /// Returns an error if the backing store cannot be written.
    fn save(&self, prefs: &ShellPrefs) -> Result<()>;
}

/// The out-of-scope shell collaborator: applies icon visibility to the host.
///
/// Called once at startup and after every accepted toggle.
pub trait ShellIntegration {
    /// Pushes the current preferences to the host shell.
    fn apply(&mut self, prefs: &ShellPrefs);
}

/// Terminal-environment shell integration.
///
/// A terminal session has no status area or dock to drive, so this records
/// what was last applied and does nothing else.
#[derive(Debug, Default)]
pub struct TerminalShell {
    last_applied: Option<ShellPrefs>,
}

impl TerminalShell {
    /// Creates the no-op shell.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_applied: None }
    }

    /// The preferences most recently pushed to the shell, if any.
    #[must_use]
    pub const fn last_applied(&self) -> Option<ShellPrefs> {
        self.last_applied
    }
}

impl ShellIntegration for TerminalShell {
    fn apply(&mut self, prefs: &ShellPrefs) {
        self.last_applied = Some(*prefs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_show_both() {
        let prefs = ShellPrefs::default();
        assert!(prefs.show_menu_bar_icon);
        assert!(prefs.show_dock_icon);
    }

    #[test]
    fn test_cannot_hide_both_icons() {
        let mut prefs = ShellPrefs::default();
        assert!(prefs.set_dock_icon(false));
        // Dock is hidden; hiding the menu-bar icon too must be rejected
        assert!(!prefs.set_menu_bar_icon(false));
        assert!(prefs.show_menu_bar_icon);
        assert!(!prefs.show_dock_icon);
    }

    #[test]
    fn test_toggle_roundtrip() {
        let mut prefs = ShellPrefs::default();
        assert!(prefs.toggle_dock_icon());
        assert!(!prefs.show_dock_icon);
        assert!(prefs.toggle_dock_icon());
        assert!(prefs.show_dock_icon);
    }

    #[test]
    fn test_toggle_respects_invariant() {
        let mut prefs = ShellPrefs {
            show_menu_bar_icon: false,
            show_dock_icon: true,
        };
        assert!(!prefs.toggle_dock_icon());
        assert!(prefs.show_dock_icon);
    }

    #[test]
    fn test_serde_uses_spec_keys() {
        let prefs = ShellPrefs {
            show_menu_bar_icon: true,
            show_dock_icon: false,
        };
        let toml = toml::to_string(&prefs).unwrap();
        assert!(toml.contains("showMenuBarIcon = true"));
        assert!(toml.contains("showDockIcon = false"));

        let parsed: ShellPrefs = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_terminal_shell_records_last_applied() {
        let mut shell = TerminalShell::new();
        assert!(shell.last_applied().is_none());

        let prefs = ShellPrefs::default();
        shell.apply(&prefs);
        assert_eq!(shell.last_applied(), Some(prefs));
    }
}
