//! The display seam between game logic and any frontend.

use crate::layout::Point;
use crate::render::FrameModel;
use anyhow::Result;

/// An input event delivered by the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Pointer click at a point in window space.
    Click(Point),
    /// The user asked to quit.
    Quit,
}

/// Trait implemented by frontends.
///
/// The core owns no window handles, images, or fonts; it emits a
/// [`FrameModel`] once per tick and drains whatever input the display
/// collected since the last tick. Implementations translate their
/// native coordinates into window space (see [`crate::layout`]).
pub trait Display {
    /// Drains the input collected since the last call.
    fn poll_input(&mut self) -> Result<Vec<InputEvent>>;

    /// Draws one frame.
    fn present(&mut self, frame: &FrameModel) -> Result<()>;
}
