//! # Cutplan Core
//!
//! Shared types for the cutplan guillotine cutting-stock engine.
//!
//! This crate provides the input, output and configuration types shared
//! between the packing engine and its callers.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Rect`] with epsilon-tolerant containment/overlap tests
//! - **Inputs**: [`BoardDimensions`], [`PieceSpec`], [`GrainDirection`], [`Settings`]
//! - **Outputs**: [`LayoutResult`], [`PlacedPiece`], [`UsableScrap`], [`LayoutSummary`]
//! - **Observation**: [`LayoutEvent`], [`EventCallback`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Strategies
//!
//! The [`Strategy`] enum selects how candidate free rectangles are scored:
//!
//! | Strategy | Scoring | Ordering |
//! |----------|---------|----------|
//! | `Waste` | Best short side fit | Largest pieces first |
//! | `Cuts` | Best area fit | Largest pieces first |
//! | `Priority` | Best short side fit | Highest priority first |
//!
//! ## Configuration
//!
//! Use [`Settings`] to configure a packing run:
//!
//! ```rust
//! use cutplan_core::{Settings, Strategy};
//!
//! let settings = Settings::new()
//!     .with_kerf(3.0)
//!     .with_edge_trim(5.0)
//!     .with_min_scrap(100.0, 100.0)
//!     .with_strategy(Strategy::Waste);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod board;
pub mod error;
pub mod event;
pub mod piece;
pub mod placement;
pub mod rect;
pub mod result;
pub mod settings;

// Re-exports
pub use board::BoardDimensions;
pub use error::{Error, Result};
pub use event::{EventCallback, LayoutEvent};
pub use piece::{GrainDirection, PieceSpec};
pub use placement::{PlacedPiece, UsableScrap};
pub use rect::{Rect, EPS};
pub use result::{LayoutResult, LayoutSummary};
pub use settings::{Settings, Strategy};
