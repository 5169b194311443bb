//! Stateless rendering of a [`FrameModel`] into terminal cells.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::game::Square;
use crate::render::FrameModel;

/// Where things landed on screen this frame.
///
/// The input mapper hit-tests against these to translate terminal
/// clicks back into window-space points.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenLayout {
    /// Drawn region of each board cell, in board order.
    pub cells: [Rect; 9],
    /// Drawn region of the reset button, when the overlay is up.
    pub reset_button: Option<Rect>,
}

/// Renders one frame and reports the resulting screen layout.
pub fn draw(frame: &mut Frame, model: &FrameModel) -> ScreenLayout {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let mut screen = ScreenLayout {
        cells: draw_board(frame, chunks[1], model),
        reset_button: None,
    };

    let status = match &model.overlay {
        Some(overlay) => overlay.message.as_str(),
        None => "Click a square (or press 1-9) to place your X. 'q' quits.",
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    if let Some(overlay) = &model.overlay {
        screen.reset_button = Some(draw_overlay(frame, chunks[1], &overlay.message));
    }

    screen
}

fn draw_board(frame: &mut Frame, area: Rect, model: &FrameModel) -> [Rect; 9] {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row_idx, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Length(1),
                Constraint::Length(7),
            ])
            .split(row_area);

        for (col_idx, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let index = row_idx * 3 + col_idx;
            draw_cell(frame, cell_area, model.cells[index], index);
            cells[index] = cell_area;
        }
        draw_separator_vertical(frame, cols[1]);
        draw_separator_vertical(frame, cols[3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);

    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, index: usize) {
    let (symbol, style) = match square {
        // Open squares show their keyboard shortcut.
        Square::Empty => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(player) => (
            player.mark().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let cell = Paragraph::new(format!("\n{symbol}"))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let line = Paragraph::new("-".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(line, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new("|\n|\n|").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}

/// Draws the game-over popup and returns the play-again button's area.
fn draw_overlay(frame: &mut Frame, area: Rect, message: &str) -> Rect {
    let popup = center_rect(area, 24, 7);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::White));
    frame.render_widget(block, popup);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(popup);

    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner[0]);

    let button_area = center_rect(inner[2], 10, 3);
    let button = Paragraph::new("Play")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Green));
    frame.render_widget(button, button_area);

    button_area
}

/// Centers a fixed-size rect within an area, clamping to fit.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
