//! Stock board dimensions.

use crate::rect::Rect;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of one physical stock sheet.
///
/// Every board used in a run shares these dimensions; multiple stock sizes
/// in one run are out of scope.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardDimensions {
    /// Board extent along the x axis, in millimeters.
    pub width_mm: f64,
    /// Board extent along the y axis, in millimeters.
    pub length_mm: f64,
}

impl BoardDimensions {
    /// Creates board dimensions from width and length in millimeters.
    pub fn new(width_mm: f64, length_mm: f64) -> Self {
        Self {
            width_mm,
            length_mm,
        }
    }

    /// Returns the full board area in square millimeters.
    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.length_mm
    }

    /// Returns the packable region after removing the edge trim margin
    /// from all four sides.
    pub fn usable_rect(&self, edge_trim_mm: f64) -> Rect {
        Rect::new(
            edge_trim_mm,
            edge_trim_mm,
            self.width_mm - 2.0 * edge_trim_mm,
            self.length_mm - 2.0 * edge_trim_mm,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_area() {
        let board = BoardDimensions::new(2440.0, 1220.0);
        assert_relative_eq!(board.area_mm2(), 2_976_800.0);
    }

    #[test]
    fn test_usable_rect_with_trim() {
        let board = BoardDimensions::new(2440.0, 1220.0);
        let usable = board.usable_rect(5.0);
        assert_relative_eq!(usable.x, 5.0);
        assert_relative_eq!(usable.y, 5.0);
        assert_relative_eq!(usable.width, 2430.0);
        assert_relative_eq!(usable.length, 1210.0);
    }

    #[test]
    fn test_usable_rect_without_trim() {
        let board = BoardDimensions::new(100.0, 100.0);
        let usable = board.usable_rect(0.0);
        assert_relative_eq!(usable.width, 100.0);
        assert_relative_eq!(usable.length, 100.0);
    }
}
