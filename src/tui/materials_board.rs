//! The materials tab: translucent cards over the animated gradient.
//!
//! Every cell of the backdrop is sampled per frame; card fills are the
//! material tint alpha-composited over the sample behind them, which is how
//! a blur material reads in cell graphics.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{CardPosition, Channels, MaterialBoard, CARD_HEIGHT, CARD_WIDTH};
use crate::tui::{backdrop, AppState, Theme};

/// An in-progress card drag: which card, and where inside it the pointer
/// grabbed, so the card does not jump under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// Index of the dragged card
    pub card: usize,
    /// Pointer offset from the card's left edge at grab time
    pub grab_dx: u16,
    /// Pointer offset from the card's top edge at grab time
    pub grab_dy: u16,
}

/// Frost tint composited over the backdrop for card fills.
fn material_tint(theme: &Theme) -> Channels {
    if theme.background == Color::White {
        Channels::from_rgb8(242, 242, 247)
    } else {
        Channels::from_rgb8(28, 28, 30)
    }
}

/// Index of the topmost card under a screen point, if any.
#[must_use]
pub fn card_hit(area: Rect, board: &MaterialBoard, x: u16, y: u16) -> Option<usize> {
    if x < area.x || y < area.y || x >= area.x + area.width || y >= area.y + area.height {
        return None;
    }
    board.card_at(x - area.x, y - area.y)
}

/// Clamps a board-relative card position so the card stays inside the area.
#[must_use]
pub fn clamp_position(area: Rect, x: u16, y: u16) -> CardPosition {
    CardPosition::new(
        x.min(area.width.saturating_sub(CARD_WIDTH)),
        y.min(area.height.saturating_sub(CARD_HEIGHT)),
    )
}

/// The materials board widget.
pub struct MaterialsBoard;

impl MaterialsBoard {
    /// Render backdrop and cards from application state.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let blend = state.backdrop.blend(Instant::now());

        // Backdrop gradient, one sample per cell
        let buf = f.buffer_mut();
        for row in 0..area.height {
            for col in 0..area.width {
                let color = backdrop::sample(col, row, area.width, area.height, blend);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_bg(color.to_ratatui_color());
                }
            }
        }

        // Cards, catalog order, later entries on top
        let tint = material_tint(theme);
        for card in state.board.cards() {
            let pos = clamp_position(area, card.position.x, card.position.y);
            let rect = Rect::new(
                area.x + pos.x,
                area.y + pos.y,
                CARD_WIDTH.min(area.width),
                CARD_HEIGHT.min(area.height),
            );

            let buf = f.buffer_mut();
            for row in 0..rect.height {
                for col in 0..rect.width {
                    let sample = backdrop::sample(
                        pos.x + col,
                        pos.y + row,
                        area.width,
                        area.height,
                        blend,
                    );
                    let fill = MaterialBoard::composite_fill(card.level, tint, sample);
                    if let Some(cell) = buf.cell_mut((rect.x + col, rect.y + row)) {
                        cell.set_bg(fill.to_ratatui_color());
                    }
                }
            }

            let border = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text_muted));
            f.render_widget(border, rect);

            if rect.width > 2 {
                let name_rect = Rect::new(
                    rect.x + 1,
                    rect.y + rect.height / 2,
                    rect.width.saturating_sub(2),
                    1,
                );
                let name = Paragraph::new(card.name.as_str())
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(theme.text));
                f.render_widget(name, name_rect);
            }
        }

        if state.backdrop.is_paused() {
            let badge = "animation paused";
            let badge_rect = Rect::new(
                area.x + area.width.saturating_sub(badge.len() as u16 + 1),
                area.y,
                (badge.len() as u16).min(area.width),
                1,
            );
            let paused = Paragraph::new(badge).style(Style::default().fg(theme.text_muted));
            f.render_widget(paused, badge_rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_position_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let pos = clamp_position(area, 200, 200);
        assert_eq!(pos.x, 80 - CARD_WIDTH);
        assert_eq!(pos.y, 24 - CARD_HEIGHT);
    }

    #[test]
    fn test_clamp_position_degenerate_area() {
        let area = Rect::new(0, 0, 10, 2);
        let pos = clamp_position(area, 5, 5);
        assert_eq!(pos, CardPosition::new(0, 0));
    }

    #[test]
    fn test_card_hit_respects_area_offset() {
        let board = MaterialBoard::default();
        let area = Rect::new(10, 5, 80, 24);
        let card = &board.cards()[0];

        // Screen coordinates of the first card's interior
        let sx = area.x + card.position.x + 1;
        let sy = area.y + card.position.y + 1;
        assert_eq!(card_hit(area, &board, sx, sy), Some(0));

        // Same relative point but outside the board area misses
        assert_eq!(card_hit(area, &board, 1, 1), None);
    }
}
