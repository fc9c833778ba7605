//! Mouse input: swatch clicks and material card drags.
//!
//! Geometry is recomputed from the current terminal size with the same
//! layout helpers the renderer uses, so hits always agree with what is on
//! screen.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::tui::{colors_grid, layout_chunks, materials_board, AppState, DragState, Tab};

/// Route a mouse event to the active tab.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<()> {
    // Popups own the screen; the grids underneath are not clickable
    if state.active_component.is_some() {
        return Ok(());
    }

    let (width, height) = crossterm::terminal::size()?;
    let [_, content, _] = layout_chunks(Rect::new(0, 0, width, height));

    match state.active_tab {
        Tab::Colors => handle_colors_mouse(state, content, mouse),
        Tab::Materials => handle_materials_mouse(state, content, mouse),
    }

    Ok(())
}

/// Click on a swatch moves the cursor there and applies the selection
/// state machine (select, or deselect when already selected).
fn handle_colors_mouse(state: &mut AppState, area: Rect, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }

    if let Some(index) = colors_grid::hit_test(
        area,
        &state.catalog,
        state.cursor,
        mouse.column,
        mouse.row,
    ) {
        state.cursor = index;
        state.activate_cursor();
    }
}

/// Press grabs the topmost card under the pointer, drag moves it (clamped
/// to the board), release retains the last reported position.
fn handle_materials_mouse(state: &mut AppState, area: Rect, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) =
                materials_board::card_hit(area, &state.board, mouse.column, mouse.row)
            {
                let position = state.board.cards()[index].position;
                state.drag = Some(DragState {
                    card: index,
                    grab_dx: (mouse.column - area.x).saturating_sub(position.x),
                    grab_dy: (mouse.row - area.y).saturating_sub(position.y),
                });
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(drag) = state.drag {
                let x = mouse
                    .column
                    .saturating_sub(area.x)
                    .saturating_sub(drag.grab_dx);
                let y = mouse
                    .row
                    .saturating_sub(area.y)
                    .saturating_sub(drag.grab_dy);
                let position = materials_board::clamp_position(area, x, y);
                state.board.move_card(drag.card, position);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.drag = None;
        }
        _ => {}
    }
}
