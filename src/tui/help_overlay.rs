//! Help overlay listing all key bindings.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// Static binding table shown in the overlay.
const BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Switch between Colors and Materials"),
    ("\u{2190}\u{2191}\u{2193}\u{2192} or hjkl", "Move the grid cursor"),
    ("Home / End", "Jump to first / last color"),
    ("Enter or click", "Select a color (again to deselect)"),
    ("y", "Copy hex of the highlighted color"),
    ("", ""),
    ("In the detail view:", ""),
    ("y or h", "Copy hex string"),
    ("r", "Copy RGBA string"),
    ("s", "Copy source identifier"),
    ("Esc", "Close the detail view"),
    ("", ""),
    ("On the materials board:", ""),
    ("mouse drag", "Move a material card"),
    ("Space", "Pause / resume the gradient"),
    ("", ""),
    ("Shift+D", "Toggle dock icon visibility"),
    ("Shift+M", "Toggle menu bar icon visibility"),
    ("?", "Toggle this help"),
    ("q", "Quit"),
];

/// Scrollable help popup component.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    scroll: u16,
}

impl HelpOverlay {
    /// Creates the overlay scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self { scroll: 0 }
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(ComponentEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(BINDINGS.len() as u16);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(60, 80, area);

        f.render_widget(Clear, popup);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                if action.is_empty() {
                    Line::from(Span::styled(
                        (*key).to_string(),
                        Style::default()
                            .fg(theme.text_secondary)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(vec![
                        Span::styled(
                            format!("{key:<18}"),
                            Style::default().fg(theme.accent),
                        ),
                        Span::styled((*action).to_string(), Style::default().fg(theme.text)),
                    ])
                }
            })
            .collect();

        let help = Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(help, popup);
    }
}
