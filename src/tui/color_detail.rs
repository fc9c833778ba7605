//! Detail popup for the selected color.
//!
//! Shows the swatch, the derived RGBA/hex strings, and the copyable source
//! identifier, each with its own copy binding.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{ColorEntry, ColorValue, DerivedKind};
use crate::tui::component::{Component, ComponentEvent};
use crate::tui::{centered_rect, Theme};

/// The color detail popup component.
#[derive(Debug, Clone)]
pub struct ColorDetail {
    name: String,
    value: ColorValue,
    hex: String,
    rgba: String,
    source_id: String,
}

impl ColorDetail {
    /// Builds the popup for a catalog entry, deriving its strings once.
    #[must_use]
    pub fn new(entry: &ColorEntry) -> Self {
        Self {
            name: entry.name.clone(),
            value: entry.value,
            hex: entry.derived_string(DerivedKind::Hex),
            rgba: entry.derived_string(DerivedKind::Rgba),
            source_id: entry.derived_string(DerivedKind::SourceIdentifier),
        }
    }

    /// The derived string shown for the given kind.
    #[must_use]
    pub fn derived(&self, kind: DerivedKind) -> &str {
        match kind {
            DerivedKind::Hex => &self.hex,
            DerivedKind::Rgba => &self.rgba,
            DerivedKind::SourceIdentifier => &self.source_id,
        }
    }

    fn value_line<'a>(label: &'a str, value: &'a str, theme: &Theme) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{label:<12}"),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled(value, Style::default().fg(theme.text)),
        ])
    }
}

impl Component for ColorDetail {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('y' | 'h') => Some(ComponentEvent::CopyRequested(DerivedKind::Hex)),
            KeyCode::Char('r') => Some(ComponentEvent::CopyRequested(DerivedKind::Rgba)),
            KeyCode::Char('s') => {
                Some(ComponentEvent::CopyRequested(DerivedKind::SourceIdentifier))
            }
            KeyCode::Esc | KeyCode::Enter => Some(ComponentEvent::Closed),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let popup = centered_rect(46, 70, area);

        f.render_widget(Clear, popup);
        let frame_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        f.render_widget(frame_block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(6), // Swatch
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Name
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // RGBA
                Constraint::Length(1), // Hex
                Constraint::Length(1), // Source identifier
                Constraint::Length(1), // Semantic note, when applicable
                Constraint::Min(0),    // Flexible spacer
                Constraint::Length(1), // Instructions
            ])
            .split(popup);

        let swatch = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.text_muted))
            .style(Style::default().bg(theme.fill_for(&self.value)));
        f.render_widget(swatch, chunks[0]);

        let name = Paragraph::new(self.name.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(name, chunks[2]);

        f.render_widget(
            Paragraph::new(Self::value_line("RGBA", &self.rgba, theme)),
            chunks[4],
        );
        f.render_widget(
            Paragraph::new(Self::value_line("Hex", &self.hex, theme)),
            chunks[5],
        );
        f.render_widget(
            Paragraph::new(Self::value_line("Source", &self.source_id, theme)),
            chunks[6],
        );

        if self.value.components().is_none() {
            let note = Paragraph::new("Theme-dependent color; values use defaults")
                .style(Style::default().fg(theme.text_muted));
            f.render_widget(note, chunks[7]);
        }

        let instructions = Line::from(vec![
            Span::styled("y", Style::default().fg(theme.accent)),
            Span::styled(" hex  ", Style::default().fg(theme.text_muted)),
            Span::styled("r", Style::default().fg(theme.accent)),
            Span::styled(" RGBA  ", Style::default().fg(theme.text_muted)),
            Span::styled("s", Style::default().fg(theme.accent)),
            Span::styled(" identifier  ", Style::default().fg(theme.text_muted)),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::styled(" close", Style::default().fg(theme.text_muted)),
        ]);
        f.render_widget(Paragraph::new(instructions), chunks[9]);
    }
}
