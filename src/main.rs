//! Swatch - terminal explorer for system colors and translucency materials
//!
//! Browse the fixed catalog of named system colors, inspect a color's RGBA
//! and hex forms, copy them to the clipboard, and push translucent material
//! cards around an animated gradient.

use anyhow::Result;
use clap::{Parser, ValueEnum};

use swatch::config::{Config, ConfigPrefStore, ThemeMode};
use swatch::shell::TerminalShell;
use swatch::tui;

/// Session override for the configured theme mode.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Auto,
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Auto => Self::Auto,
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Swatch - terminal explorer for system colors and translucency materials
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Theme override for this session (not persisted)
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load or fall back to default config; a corrupt file should not keep
    // the demo from starting
    let mut config = Config::load().unwrap_or_else(|_| Config::default());
    if let Some(theme) = cli.theme {
        config.ui.theme_mode = theme.into();
    }

    let store = Box::new(ConfigPrefStore::new());
    let shell = Box::new(TerminalShell::new());
    let mut app_state = tui::AppState::new(config, store, shell)?;

    // Initialize TUI
    let mut terminal = tui::setup_terminal()?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal)?;

    // Check for errors
    result?;

    Ok(())
}
