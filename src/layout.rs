//! Window-space geometry for hit testing.
//!
//! The board lives in a 200x200 logical window: a 3x3 grid of 66x66
//! cells on a 67-unit stride, plus a reset button shown over the board
//! when the game ends. Frontends translate their native pointer
//! coordinates into this space before handing clicks to the
//! controller.

use crate::game::Position;
use serde::{Deserialize, Serialize};

/// Logical window edge length.
pub const WINDOW_SIZE: u32 = 200;

/// Edge length of one cell's hit region.
pub const CELL_SIZE: u32 = 66;

/// Distance between the origins of adjacent cells.
pub const CELL_STRIDE: u32 = 67;

/// A point in window space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate, left to right.
    pub x: u32,
    /// Vertical coordinate, top to bottom.
    pub y: u32,
}

impl Point {
    /// Creates a point.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in window space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: u32,
    /// Top edge.
    pub y: u32,
    /// Width.
    pub width: u32,
    /// Height.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point falls inside this rectangle.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    /// Center of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// Precomputed hit regions for the board and the reset button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    cells: [Rect; 9],
    reset_button: Rect,
}

impl BoardLayout {
    /// Builds the layout, deriving each cell's region from its
    /// position once.
    pub fn new() -> Self {
        let mut cells = [Rect::new(0, 0, 0, 0); 9];
        for pos in Position::ALL {
            cells[pos.to_index()] = Rect::new(
                pos.col() as u32 * CELL_STRIDE,
                pos.row() as u32 * CELL_STRIDE,
                CELL_SIZE,
                CELL_SIZE,
            );
        }
        Self {
            cells,
            // Centered horizontally, top of the lower half of the
            // window: (50, 100) sized 100x50.
            reset_button: Rect::new(
                WINDOW_SIZE / 4,
                WINDOW_SIZE / 2,
                WINDOW_SIZE / 2,
                WINDOW_SIZE / 4,
            ),
        }
    }

    /// Hit region for one cell.
    pub fn cell_region(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// Resolves a point to the cell whose region contains it.
    ///
    /// Cells are scanned in board order; regions are disjoint by
    /// construction, so the first match is the only match.
    pub fn cell_at(&self, point: Point) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.to_index()].contains(point))
    }

    /// Hit region for the reset button.
    pub fn reset_button(&self) -> Rect {
        self.reset_button
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_regions_cover_expected_origins() {
        let layout = BoardLayout::new();
        assert_eq!(
            layout.cell_region(Position::TopLeft),
            Rect::new(0, 0, 66, 66)
        );
        assert_eq!(
            layout.cell_region(Position::Center),
            Rect::new(67, 67, 66, 66)
        );
        assert_eq!(
            layout.cell_region(Position::BottomRight),
            Rect::new(134, 134, 66, 66)
        );
    }

    #[test]
    fn test_cell_at_resolves_centers() {
        let layout = BoardLayout::new();
        for pos in Position::ALL {
            let center = layout.cell_region(pos).center();
            assert_eq!(layout.cell_at(center), Some(pos));
        }
    }

    #[test]
    fn test_cell_regions_are_disjoint() {
        let layout = BoardLayout::new();
        // Gutter points between cells hit nothing.
        assert_eq!(layout.cell_at(Point::new(66, 10)), None);
        assert_eq!(layout.cell_at(Point::new(10, 66)), None);
    }

    #[test]
    fn test_out_of_board_misses() {
        let layout = BoardLayout::new();
        assert_eq!(layout.cell_at(Point::new(250, 250)), None);
    }

    #[test]
    fn test_layout_fits_window() {
        // Two strides plus the last cell span the window exactly.
        assert_eq!(2 * CELL_STRIDE + CELL_SIZE, WINDOW_SIZE);

        let layout = BoardLayout::new();
        for pos in Position::ALL {
            let cell = layout.cell_region(pos);
            assert!(cell.x + cell.width <= WINDOW_SIZE, "{pos} overflows");
            assert!(cell.y + cell.height <= WINDOW_SIZE, "{pos} overflows");
        }
        let button = layout.reset_button();
        assert!(button.x + button.width <= WINDOW_SIZE);
        assert!(button.y + button.height <= WINDOW_SIZE);
    }

    #[test]
    fn test_reset_button_region() {
        let layout = BoardLayout::new();
        assert_eq!(layout.reset_button(), Rect::new(50, 100, 100, 50));
    }

    #[test]
    fn test_reset_button_hit_test() {
        let layout = BoardLayout::new();
        assert!(layout.reset_button().contains(Point::new(100, 125)));
        assert!(!layout.reset_button().contains(Point::new(10, 10)));
    }
}
