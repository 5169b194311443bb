//! Translation of crossterm events into core input events.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position as ScreenPos;
use tracing::debug;

use super::ui::ScreenLayout;
use crate::display::InputEvent;
use crate::game::Position;
use crate::layout::BoardLayout;

/// Maps one terminal event into a core input event, if it means anything.
///
/// Mouse clicks are hit-tested against the last drawn [`ScreenLayout`]
/// and translated into window-space points (the center of the matching
/// region). Keys 1-9 and `r` synthesize the equivalent clicks; `q` and
/// `Esc` quit.
pub fn map_event(
    event: &Event,
    screen: &ScreenLayout,
    logical: &BoardLayout,
) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Char('r') => Some(InputEvent::Click(logical.reset_button().center())),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10)? as usize;
                let pos = Position::from_index(digit.checked_sub(1)?)?;
                Some(InputEvent::Click(logical.cell_region(pos).center()))
            }
            _ => None,
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => map_click(*column, *row, screen, logical),
        _ => None,
    }
}

fn map_click(
    column: u16,
    row: u16,
    screen: &ScreenLayout,
    logical: &BoardLayout,
) -> Option<InputEvent> {
    let at = ScreenPos::new(column, row);

    // The reset button floats above the board, so test it first.
    if let Some(button) = screen.reset_button {
        if button.contains(at) {
            debug!(column, row, "Click on reset button");
            return Some(InputEvent::Click(logical.reset_button().center()));
        }
    }

    for pos in Position::ALL {
        if screen.cells[pos.to_index()].contains(at) {
            debug!(column, row, position = %pos, "Click on board cell");
            return Some(InputEvent::Click(logical.cell_region(pos).center()));
        }
    }

    None
}
