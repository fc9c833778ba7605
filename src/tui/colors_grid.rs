//! The colors tab: a fixed grid of named swatches.
//!
//! Cell geometry is computed here and shared with the mouse handler so
//! clicking and rendering always agree on where a swatch is.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Catalog;
use crate::tui::AppState;

/// Swatch height in rows, including the name line beneath it.
pub const CELL_HEIGHT: u16 = 5;
/// Horizontal gap between cells.
const CELL_GAP_X: u16 = 2;
/// Vertical gap between cells.
const CELL_GAP_Y: u16 = 1;
/// Cells narrower than this are unreadable; the grid hides instead.
const MIN_CELL_WIDTH: u16 = 8;

/// Number of whole grid rows that fit in the area.
#[must_use]
pub fn visible_rows(area: Rect) -> usize {
    ((area.height + CELL_GAP_Y) / (CELL_HEIGHT + CELL_GAP_Y)) as usize
}

/// First visible grid row, chosen so the cursor's row stays on screen.
#[must_use]
pub fn scroll_row(area: Rect, catalog: &Catalog, cursor: usize) -> usize {
    let visible = visible_rows(area).max(1);
    let cursor_row = cursor / catalog.columns();
    cursor_row.saturating_sub(visible - 1)
}

/// Screen rectangle of the cell at `index`, or `None` when it is scrolled
/// out of view or the area is too small to draw it.
#[must_use]
pub fn cell_rect(area: Rect, catalog: &Catalog, index: usize, scroll: usize) -> Option<Rect> {
    let columns = catalog.columns() as u16;
    let cell_width = area
        .width
        .saturating_sub((columns - 1) * CELL_GAP_X)
        .checked_div(columns)?;
    if cell_width < MIN_CELL_WIDTH {
        return None;
    }

    let col = (index % catalog.columns()) as u16;
    let row = (index / catalog.columns()).checked_sub(scroll)? as u16;

    let x = area.x + col * (cell_width + CELL_GAP_X);
    let y = area.y + row * (CELL_HEIGHT + CELL_GAP_Y);
    if y + CELL_HEIGHT > area.y + area.height {
        return None;
    }

    Some(Rect::new(x, y, cell_width, CELL_HEIGHT))
}

/// Index of the cell under a screen point, if any.
#[must_use]
pub fn hit_test(area: Rect, catalog: &Catalog, cursor: usize, x: u16, y: u16) -> Option<usize> {
    let scroll = scroll_row(area, catalog, cursor);
    (0..catalog.color_count()).find(|&index| {
        cell_rect(area, catalog, index, scroll).is_some_and(|rect| {
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        })
    })
}

/// The colors grid widget.
pub struct ColorsGrid;

impl ColorsGrid {
    /// Render the grid from application state.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let scroll = scroll_row(area, &state.catalog, state.cursor);

        for (index, entry) in state.catalog.colors().iter().enumerate() {
            let Some(rect) = cell_rect(area, &state.catalog, index, scroll) else {
                continue;
            };

            let is_cursor = index == state.cursor;
            let is_selected = state.selected_color == Some(entry.id);

            let swatch_rect = Rect::new(rect.x, rect.y, rect.width, rect.height - 1);
            let name_rect = Rect::new(rect.x, rect.y + rect.height - 1, rect.width, 1);

            let border_style = if is_cursor {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default().fg(theme.primary)
            } else {
                Style::default().fg(theme.text_muted)
            };

            let swatch = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .style(Style::default().bg(theme.fill_for(&entry.value)));
            f.render_widget(swatch, swatch_rect);

            let mut name_style = Style::default().fg(if is_cursor {
                theme.text
            } else {
                theme.text_secondary
            });
            if is_selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            let label = if is_selected {
                format!("\u{25cf} {}", entry.name)
            } else {
                entry.name.clone()
            };
            let name = Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(name_style);
            f.render_widget(name, name_rect);
        }
    }

    /// Move the grid cursor by a row/column delta, clamped to the catalog.
    pub fn move_cursor(state: &mut AppState, dx: i32, dy: i32) {
        let columns = state.catalog.columns();
        let count = state.catalog.color_count();
        let rows = state.catalog.rows();

        let current_row = state.cursor / columns;
        let current_col = state.cursor % columns;

        let new_col = (current_col as i32 + dx).clamp(0, columns as i32 - 1) as usize;
        let new_row = (current_row as i32 + dy).clamp(0, rows as i32 - 1) as usize;

        let new_index = new_row * columns + new_col;
        if new_index < count {
            state.cursor = new_index;
        }
    }
}
