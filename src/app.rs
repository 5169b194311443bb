//! The per-frame game loop.

use crate::controller::TurnController;
use crate::display::{Display, InputEvent};
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Runs the game against a display until the user quits.
///
/// Each tick follows a fixed order: drain input, resolve a pending
/// opponent turn, recompute the render model, present. The opponent's
/// reply therefore appears in the same frame as the human move that
/// triggered it.
#[instrument(skip(display))]
pub fn run<D: Display>(display: &mut D) -> Result<()> {
    info!("Starting game loop");
    let mut controller = TurnController::new();

    loop {
        for event in display.poll_input()? {
            match event {
                InputEvent::Quit => {
                    info!("User quit");
                    return Ok(());
                }
                InputEvent::Click(point) => {
                    let outcome = controller.handle_click(point);
                    debug!(?outcome, "Click handled");
                }
            }
        }

        controller.tick();
        display.present(&controller.frame())?;
    }
}
