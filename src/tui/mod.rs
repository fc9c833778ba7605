//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

pub mod backdrop;
pub mod clipboard;
pub mod color_detail;
pub mod colors_grid;
pub mod component;
pub mod handlers;
pub mod help_overlay;
pub mod materials_board;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::branding::APP_DISPLAY_NAME;
use crate::config::Config;
use crate::models::{Catalog, DerivedKind, MaterialBoard};
use crate::shell::{PrefStore, ShellIntegration};

// Re-export TUI components
pub use backdrop::Backdrop;
pub use clipboard::CopyState;
pub use color_detail::ColorDetail;
pub use colors_grid::ColorsGrid;
pub use component::{Component, ComponentEvent};
pub use help_overlay::HelpOverlay;
pub use materials_board::{DragState, MaterialsBoard};
pub use status_bar::StatusBar;
pub use theme::Theme;

/// The two main views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Color catalog grid
    #[default]
    Colors,
    /// Material drag board
    Materials,
}

impl Tab {
    /// The other tab.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Colors => Self::Materials,
            Self::Materials => Self::Colors,
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Colors => "Colors",
            Self::Materials => "Materials",
        }
    }
}

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Color detail popup
    ColorDetail,
    /// Help overlay popup
    HelpOverlay,
}

/// Active component - holds the currently active popup component.
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Color detail component
    ColorDetail(ColorDetail),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// The fixed color catalog
    pub catalog: Catalog,
    /// The material card board
    pub board: MaterialBoard,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Currently displayed tab
    pub active_tab: Tab,
    /// Grid cursor index in the color catalog
    pub cursor: usize,
    /// Currently selected color id, if any
    pub selected_color: Option<Uuid>,
    /// Currently active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Currently active component (if any)
    pub active_component: Option<ActiveComponent>,
    /// Status bar message
    pub status_message: String,

    // Time-based presentation state
    /// Copy confirmation state
    pub copy_state: CopyState,
    /// Gradient animation state
    pub backdrop: Backdrop,
    /// In-progress card drag, if any
    pub drag: Option<DragState>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Injected preference store for shell prefs
    store: Box<dyn PrefStore>,
    /// Host shell collaborator
    shell: Box<dyn ShellIntegration>,
}

impl AppState {
    /// Creates a new `AppState`, loading the catalog and pushing the shell
    /// preferences to the host collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded catalog fails to load.
    pub fn new(
        config: Config,
        store: Box<dyn PrefStore>,
        mut shell: Box<dyn ShellIntegration>,
    ) -> Result<Self> {
        let catalog = Catalog::load().context("Failed to load color catalog")?;
        let theme = Theme::from_mode(config.ui.theme_mode);

        shell.apply(&config.shell);

        Ok(Self {
            catalog,
            board: MaterialBoard::default(),
            theme,
            active_tab: Tab::default(),
            cursor: 0,
            selected_color: None,
            active_popup: None,
            active_component: None,
            status_message: "Press ? for help".to_string(),
            copy_state: CopyState::new(),
            backdrop: Backdrop::new(Instant::now()),
            drag: None,
            config,
            store,
            shell,
        })
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Switch to the other tab, dropping any in-progress drag.
    pub fn switch_tab(&mut self) {
        self.active_tab = self.active_tab.next();
        self.drag = None;
    }

    /// Selection state machine: select a color, or deselect it when it is
    /// already the selection. Never mutates catalog data.
    pub fn select_color(&mut self, id: Uuid) {
        // A pending copy confirmation belongs to the old selection
        self.copy_state.cancel();

        if self.selected_color == Some(id) {
            self.selected_color = None;
            self.close_component();
            self.set_status("Selection cleared");
            return;
        }

        self.selected_color = Some(id);
        if let Some(entry) = self.catalog.color_by_id(id).cloned() {
            self.set_status(format!("{} selected", entry.name));
            self.active_component = Some(ActiveComponent::ColorDetail(ColorDetail::new(&entry)));
            self.active_popup = Some(PopupType::ColorDetail);
        }
    }

    /// Apply the selection state machine to the grid cursor's entry.
    pub fn activate_cursor(&mut self) {
        if let Some(id) = self.catalog.color_at(self.cursor).map(|e| e.id) {
            self.select_color(id);
        }
    }

    /// Clear the selection, if any.
    pub fn clear_selection(&mut self) {
        if self.selected_color.take().is_some() {
            self.copy_state.cancel();
            self.set_status("Selection cleared");
        }
    }

    /// Copy a derived string of the cursor's entry to the clipboard.
    pub fn copy_from_cursor(&mut self, kind: DerivedKind) {
        if let Some(text) = self
            .catalog
            .color_at(self.cursor)
            .map(|e| e.derived_string(kind))
        {
            self.record_copy(text);
        }
    }

    /// Write text to the system clipboard (best-effort) and start the
    /// confirmation timer.
    pub fn record_copy(&mut self, text: String) {
        clipboard::copy_text(&text);
        self.copy_state.record(text, Instant::now());
    }

    /// Toggle dock icon visibility, persist, and notify the shell.
    pub fn toggle_dock_icon(&mut self) {
        if self.config.shell.toggle_dock_icon() {
            let message = if self.config.shell.show_dock_icon {
                "Dock icon shown"
            } else {
                "Dock icon hidden"
            };
            self.set_status(message);
            self.apply_shell_prefs();
        } else {
            self.set_status("At least one icon must stay visible");
        }
    }

    /// Toggle menu-bar icon visibility, persist, and notify the shell.
    pub fn toggle_menu_bar_icon(&mut self) {
        if self.config.shell.toggle_menu_bar_icon() {
            let message = if self.config.shell.show_menu_bar_icon {
                "Menu bar icon shown"
            } else {
                "Menu bar icon hidden"
            };
            self.set_status(message);
            self.apply_shell_prefs();
        } else {
            self.set_status("At least one icon must stay visible");
        }
    }

    /// Push current shell prefs to the collaborator and the store.
    fn apply_shell_prefs(&mut self) {
        self.shell.apply(&self.config.shell);
        if let Err(e) = self.store.save(&self.config.shell) {
            self.set_status(format!("Failed to save preferences: {e}"));
        }
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
    }

    /// Advance time-based presentation state.
    pub fn tick(&mut self, now: Instant) {
        self.copy_state.tick(now);
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Apply theme based on user preference (Auto detects OS)
        state.theme = Theme::from_mode(state.config.ui.theme_mode);

        // Expire the copy confirmation; the backdrop phase is sampled at
        // render time from the same clock
        state.tick(Instant::now());

        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if handlers::handle_key_event(state, key)? {
                        break; // User quit
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse)?,
                _ => {} // Resize and focus events re-render on next loop
            }
        }
    }

    Ok(())
}

/// Vertical screen split: title bar, main content, status bar.
#[must_use]
pub fn layout_chunks(area: Rect) -> [Rect; 3] {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Status bar
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Centered popup rectangle sized as a percentage of the screen.
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let [title_area, content_area, status_area] = layout_chunks(f.area());

    render_title_bar(f, title_area, state);

    match state.active_tab {
        Tab::Colors => ColorsGrid::render(f, content_area, state),
        Tab::Materials => MaterialsBoard::render(f, content_area, state),
    }

    StatusBar::render(f, status_area, state, &state.theme);

    // Render popup if active
    if let Some(component) = &state.active_component {
        match component {
            ActiveComponent::ColorDetail(detail) => detail.render(f, f.area(), &state.theme),
            ActiveComponent::HelpOverlay(help) => help.render(f, f.area(), &state.theme),
        }
    }
}

/// Render title bar with app name and tab indicator
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let tab_span = |tab: Tab| {
        if tab == state.active_tab {
            Span::styled(
                tab.title(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(tab.title(), Style::default().fg(theme.text_muted))
        }
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_DISPLAY_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        tab_span(Tab::Colors),
        Span::styled(" / ", Style::default().fg(theme.text_muted)),
        tab_span(Tab::Materials),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::bordered()
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}


#[cfg(test)]
mod tests {
    use super::*;
    use test_support::{state, state_with_store, MemStore};

    #[test]
    fn test_selection_replaces_previous() {
        let mut state = state();
        let a = state.catalog.color_at(0).unwrap().id;
        let b = state.catalog.color_at(1).unwrap().id;

        state.select_color(a);
        assert_eq!(state.selected_color, Some(a));

        state.select_color(b);
        assert_eq!(state.selected_color, Some(b));
    }

    #[test]
    fn test_selecting_twice_deselects() {
        let mut state = state();
        let a = state.catalog.color_at(0).unwrap().id;

        state.select_color(a);
        state.select_color(a);
        assert_eq!(state.selected_color, None);
        assert!(state.active_component.is_none());
    }

    #[test]
    fn test_selection_opens_detail_popup() {
        let mut state = state();
        state.activate_cursor();
        assert_eq!(state.active_popup, Some(PopupType::ColorDetail));
        assert!(matches!(
            state.active_component,
            Some(ActiveComponent::ColorDetail(_))
        ));
    }

    #[test]
    fn test_selection_cancels_copy_feedback() {
        let mut state = state();
        state.record_copy("#007AFF".to_string());
        assert!(state.copy_state.copied_text().is_some());

        state.activate_cursor();
        // record_copy during selection is the popup's job; the selection
        // change itself must have cancelled the old confirmation
        assert!(state.copy_state.copied_text().is_none());
    }

    #[test]
    fn test_toggle_dock_icon_persists() {
        let store = MemStore::default();
        let mut state = state_with_store(store.clone());

        state.toggle_dock_icon();
        assert!(!state.config.shell.show_dock_icon);

        let saved = store.saved.borrow().expect("prefs saved");
        assert!(!saved.show_dock_icon);
        assert!(saved.show_menu_bar_icon);
    }

    #[test]
    fn test_shell_invariant_rejected_toggle_not_persisted() {
        let store = MemStore::default();
        let mut state = state_with_store(store.clone());

        state.toggle_dock_icon();
        store.saved.borrow_mut().take();

        // Hiding the menu bar icon too would clear both; it must be refused
        state.toggle_menu_bar_icon();
        assert!(state.config.shell.show_menu_bar_icon);
        assert!(store.saved.borrow().is_none());
        assert_eq!(state.status_message, "At least one icon must stay visible");
    }

    #[test]
    fn test_switch_tab_drops_drag() {
        let mut state = state();
        state.drag = Some(DragState {
            card: 0,
            grab_dx: 1,
            grab_dy: 1,
        });
        state.switch_tab();
        assert_eq!(state.active_tab, Tab::Materials);
        assert!(state.drag.is_none());
    }

    #[test]
    fn test_layout_chunks_cover_area() {
        let area = Rect::new(0, 0, 80, 24);
        let [title, content, status] = layout_chunks(area);
        assert_eq!(title.height, 3);
        assert_eq!(status.height, 5);
        assert_eq!(title.height + content.height + status.height, area.height);
    }
}
