//! Layout result representation.

use crate::board::BoardDimensions;
use crate::placement::{PlacedPiece, UsableScrap};
use crate::settings::Settings;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one packing run.
///
/// Always returned in full; failures are communicated through the
/// `errors` and `warnings` lists rather than by panicking or returning
/// `Err`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutResult {
    /// All successfully placed piece instances.
    pub placed_pieces: Vec<PlacedPiece>,

    /// Ids of piece types with at least one instance that failed to
    /// place. Deduplicated, in first-failure order.
    pub unplaced_pieces: Vec<String>,

    /// Number of stock boards that received at least one piece.
    pub boards_used: usize,

    /// Echo of the stock board dimensions used for the run.
    pub board: BoardDimensions,

    /// Echo of the settings used for the run.
    pub settings: Settings,

    /// Total area requested across all piece types, in square millimeters.
    pub total_requested_area_mm2: f64,

    /// Total area of placed pieces, in square millimeters.
    pub total_placed_area_mm2: f64,

    /// Combined area of all boards used, in square millimeters.
    pub total_board_area_mm2: f64,

    /// Wasted share of the used board area, in percent (0 to 100).
    pub waste_percentage: f64,

    /// Leftover rectangles meeting the minimum scrap dimensions, sorted
    /// by descending area.
    pub usable_scrap: Vec<UsableScrap>,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Fatal validation errors. Non-empty only when the run
    /// short-circuited without placing anything.
    pub errors: Vec<String>,

    /// Non-fatal warnings (oversized pieces, internal invariant
    /// violations).
    pub warnings: Vec<String>,
}

impl LayoutResult {
    /// Creates an empty result echoing the run inputs.
    pub fn new(board: BoardDimensions, settings: Settings) -> Self {
        Self {
            placed_pieces: Vec::new(),
            unplaced_pieces: Vec::new(),
            boards_used: 0,
            board,
            settings,
            total_requested_area_mm2: 0.0,
            total_placed_area_mm2: 0.0,
            total_board_area_mm2: 0.0,
            waste_percentage: 0.0,
            usable_scrap: Vec::new(),
            computation_time_ms: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if every requested piece type was fully placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced_pieces.is_empty()
    }

    /// Returns the number of placed piece instances.
    pub fn placed_count(&self) -> usize {
        self.placed_pieces.len()
    }

    /// Returns true if the run placed at least one piece.
    pub fn is_successful(&self) -> bool {
        !self.placed_pieces.is_empty()
    }

    /// Returns true if the run failed validation.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the waste percentage as a display string.
    pub fn waste_percent_label(&self) -> String {
        format!("{:.1}%", self.waste_percentage)
    }
}

/// Summary statistics for a layout result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutSummary {
    /// Piece instances placed.
    pub placed: usize,
    /// Piece types with unplaced instances.
    pub unplaced_types: usize,
    /// Boards used.
    pub boards_used: usize,
    /// Waste percentage.
    pub waste_percentage: f64,
    /// Usable scrap rectangles found.
    pub scrap_count: usize,
    /// Computation time in milliseconds.
    pub time_ms: u64,
}

impl From<&LayoutResult> for LayoutSummary {
    fn from(result: &LayoutResult) -> Self {
        Self {
            placed: result.placed_pieces.len(),
            unplaced_types: result.unplaced_pieces.len(),
            boards_used: result.boards_used,
            waste_percentage: result.waste_percentage,
            scrap_count: result.usable_scrap.len(),
            time_ms: result.computation_time_ms,
        }
    }
}
