//! Placement output types.

use crate::rect::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One placed piece instance. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    /// Id of the piece type this instance belongs to.
    pub piece_id: String,
    /// Display name of the piece type.
    pub name: String,
    /// Index of the board the piece was placed on.
    pub board_index: usize,
    /// Left edge of the placement.
    pub x: f64,
    /// Top edge of the placement.
    pub y: f64,
    /// Placed extent along the x axis, after any rotation.
    pub width_mm: f64,
    /// Placed extent along the y axis, after any rotation.
    pub length_mm: f64,
    /// True if the piece was rotated by 90 degrees.
    pub rotated: bool,
}

impl PlacedPiece {
    /// Returns the occupied rectangle on the board.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width_mm, self.length_mm)
    }

    /// Returns the placed area in square millimeters.
    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.length_mm
    }
}

/// A leftover free rectangle large enough to be worth keeping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UsableScrap {
    /// Index of the board the scrap lies on.
    pub board_index: usize,
    /// The scrap rectangle in board coordinates.
    pub rect: Rect,
    /// Scrap area in square millimeters.
    pub area_mm2: f64,
}

impl UsableScrap {
    /// Creates a scrap entry, deriving the area from the rectangle.
    pub fn new(board_index: usize, rect: Rect) -> Self {
        Self {
            board_index,
            area_mm2: rect.area(),
            rect,
        }
    }
}
