//! # Cutplan Guillotine
//!
//! Guillotine cutting-stock engine for the cutplan workspace.
//!
//! Computes an efficient placement of rectangular pieces onto identical
//! rectangular stock boards, minimizing waste while honoring blade kerf,
//! edge trim, grain-direction constraints and a minimum usable-scrap
//! size. Every cut obeys the guillotine constraint: a cut spans the full
//! extent of the region it divides and produces exactly two rectangles.
//!
//! ## Features
//!
//! - Best Short Side Fit placement with optional strategy selection
//! - Split Longer Leftover Axis guillotine splitting with kerf accounting
//! - Multi-board allocation over an expanding list of identical boards
//! - Usable-scrap extraction and waste statistics
//! - Structured layout events for live observation
//!
//! ## Quick Start
//!
//! ```rust
//! use cutplan_guillotine::{BoardDimensions, GuillotinePacker, PieceSpec, Settings};
//!
//! // Standard plywood sheet with a 3 mm blade and 5 mm edge trim
//! let board = BoardDimensions::new(2440.0, 1220.0);
//! let settings = Settings::new()
//!     .with_kerf(3.0)
//!     .with_edge_trim(5.0)
//!     .with_min_scrap(100.0, 100.0);
//!
//! let pieces = vec![
//!     PieceSpec::new("side", 800.0, 400.0).with_quantity(4),
//!     PieceSpec::new("shelf", 760.0, 350.0).with_quantity(3),
//! ];
//!
//! let packer = GuillotinePacker::new(settings);
//! let result = packer.pack(&board, &pieces);
//!
//! println!(
//!     "placed {} pieces on {} boards, waste {}",
//!     result.placed_count(),
//!     result.boards_used,
//!     result.waste_percent_label()
//! );
//! ```
//!
//! The engine is a pure function of its inputs: identical board, pieces
//! and settings always produce identical placements. It runs a single
//! synchronous pass with no suspension points; callers needing a
//! responsive UI should run it on a worker thread.

pub mod expand;
pub mod free_rect;
pub mod packer;
pub mod placer;
pub mod validate;

// Re-exports
pub use expand::{expand_instances, PieceInstance};
pub use free_rect::{prune_contained, split_free_rect};
pub use packer::GuillotinePacker;
pub use placer::{find_best_placement, Candidate};
pub use validate::{oversize_warnings, validate_inputs};
pub use cutplan_core::{
    BoardDimensions, Error, EventCallback, GrainDirection, LayoutEvent, LayoutResult,
    LayoutSummary, PieceSpec, PlacedPiece, Rect, Result, Settings, Strategy, UsableScrap, EPS,
};
