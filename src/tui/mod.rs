//! Terminal frontend: a [`Display`] built on ratatui and crossterm.

mod input;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::display::{Display, InputEvent};
use crate::layout::BoardLayout;
use crate::render::FrameModel;
use ui::ScreenLayout;

/// How long one tick waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Terminal display: owns the terminal, maps clicks, draws frames.
pub struct TuiDisplay<B: ratatui::backend::Backend> {
    terminal: Terminal<B>,
    /// Screen regions from the most recent draw.
    screen: ScreenLayout,
    /// Logical window geometry, for synthesizing click points.
    logical: BoardLayout,
}

impl<B: ratatui::backend::Backend> TuiDisplay<B> {
    /// Wraps an already configured terminal.
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            screen: ScreenLayout::default(),
            logical: BoardLayout::new(),
        }
    }
}

impl<B: ratatui::backend::Backend> Display for TuiDisplay<B> {
    fn poll_input(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();

        // Block briefly for the first event, then drain the rest, so
        // the loop ticks at a steady rate without burning a core.
        let mut wait = TICK_RATE;
        while event::poll(wait)? {
            wait = Duration::ZERO;
            let raw = event::read()?;
            if let Some(mapped) = input::map_event(&raw, &self.screen, &self.logical) {
                events.push(mapped);
            }
        }

        Ok(events)
    }

    fn present(&mut self, frame: &FrameModel) -> Result<()> {
        let screen = &mut self.screen;
        self.terminal.draw(|f| {
            *screen = ui::draw(f, frame);
        })?;
        Ok(())
    }
}

/// Runs the game in the terminal until the user quits.
///
/// Sets up raw mode, the alternate screen, and mouse capture, and
/// restores the terminal on the way out, error or not.
#[instrument]
pub fn run_tui() -> Result<()> {
    info!("Starting terminal frontend");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut display = TuiDisplay::new(terminal);
    let result = crate::app::run(&mut display);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(err) = &result {
        error!(error = ?err, "Game loop error");
    }
    result
}
