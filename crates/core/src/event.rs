//! Layout events.
//!
//! The packer can report its progress through a callback instead of
//! logging; callers subscribe by passing an [`EventCallback`] to
//! `pack_with_events`. Events carry enough context to drive a live
//! preview without inspecting the final result.

/// An observable step in a packing run.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    /// A new stock board was opened.
    BoardOpened {
        /// Index of the new board.
        board_index: usize,
    },
    /// A piece instance was placed.
    PiecePlaced {
        /// Id of the piece type.
        piece_id: String,
        /// Board the instance landed on.
        board_index: usize,
        /// Left edge of the placement.
        x: f64,
        /// Top edge of the placement.
        y: f64,
        /// True if the instance was rotated.
        rotated: bool,
    },
    /// A piece instance could not be placed on any board.
    PieceUnplaced {
        /// Id of the piece type.
        piece_id: String,
    },
    /// A guillotine split failed its containment check; the consumed area
    /// is not reclaimed.
    SplitDiscarded {
        /// Board the discarded split belonged to.
        board_index: usize,
    },
}

/// Callback invoked for each [`LayoutEvent`] during a run.
pub type EventCallback = Box<dyn Fn(LayoutEvent) + Send + Sync>;
