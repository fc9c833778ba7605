//! Status bar widget for messages, copy confirmation, and contextual help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{AppState, Tab, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let mut lines: Vec<Line> = Vec::new();

        // First line: copy confirmation beats the plain status message
        if let Some(copied) = state.copy_state.copied_text() {
            lines.push(Line::from(vec![
                Span::styled(
                    "Copied ",
                    Style::default()
                        .fg(theme.success)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(copied.to_string(), Style::default().fg(theme.text)),
                Span::styled(" to clipboard", Style::default().fg(theme.success)),
            ]));
        } else if !state.status_message.is_empty() {
            lines.push(Line::from(state.status_message.as_str()));
        } else {
            lines.push(Line::from(""));
        }

        // Second line: shell icon preferences
        let prefs = &state.config.shell;
        let on_off = |on: bool| if on { "on" } else { "off" };
        lines.push(Line::from(vec![
            Span::styled("Menu bar icon: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                on_off(prefs.show_menu_bar_icon),
                Style::default().fg(theme.text_secondary),
            ),
            Span::styled("  Dock icon: ", Style::default().fg(theme.text_muted)),
            Span::styled(
                on_off(prefs.show_dock_icon),
                Style::default().fg(theme.text_secondary),
            ),
        ]));

        // Help line at the bottom
        lines.push(Self::help_line(state, theme));

        let status = Paragraph::new(lines)
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Contextual key hints for the active view.
    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = if state.active_popup.is_some() {
            &[("y/r/s", "copy"), ("Esc", "close")]
        } else {
            match state.active_tab {
                Tab::Colors => &[
                    ("\u{2190}\u{2191}\u{2193}\u{2192}", "move"),
                    ("Enter", "select"),
                    ("y", "copy hex"),
                    ("Tab", "materials"),
                    ("?", "help"),
                    ("q", "quit"),
                ],
                Tab::Materials => &[
                    ("mouse", "drag cards"),
                    ("Space", "pause"),
                    ("Tab", "colors"),
                    ("?", "help"),
                    ("q", "quit"),
                ],
            }
        };

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.primary)));
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                (*key).to_string(),
                Style::default().fg(theme.accent),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw((*action).to_string()));
        }

        Line::from(spans)
    }
}
