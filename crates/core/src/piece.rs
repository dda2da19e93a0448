//! Requested piece types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation of a piece's grain relative to the board grain.
///
/// `None` permits free rotation regardless of the grain setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GrainDirection {
    /// Grain runs along the piece length.
    Length,
    /// Grain runs along the piece width.
    Width,
    /// No grain constraint.
    #[default]
    None,
}

impl GrainDirection {
    /// Returns true if this direction constrains rotation.
    pub fn is_constrained(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// A requested piece type.
///
/// `quantity` expands to that many identical unit instances before packing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceSpec {
    /// Unique identifier, echoed in placements and the unplaced list.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Piece extent along the x axis, in millimeters.
    pub width_mm: f64,
    /// Piece extent along the y axis, in millimeters.
    pub length_mm: f64,
    /// Number of copies to place.
    pub quantity: u32,
    /// Placement priority; consumed only by the priority ordering strategy.
    pub priority: i32,
    /// Grain constraint for this piece.
    pub grain: GrainDirection,
}

impl PieceSpec {
    /// Creates a piece type with quantity 1, no priority and no grain
    /// constraint.
    pub fn new(id: impl Into<String>, width_mm: f64, length_mm: f64) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            width_mm,
            length_mm,
            quantity: 1,
            priority: 0,
            grain: GrainDirection::None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the quantity to place.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the placement priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the grain constraint.
    pub fn with_grain(mut self, grain: GrainDirection) -> Self {
        self.grain = grain;
        self
    }

    /// Returns the area of one instance in square millimeters.
    pub fn area_mm2(&self) -> f64 {
        self.width_mm * self.length_mm
    }

    /// Returns true if this piece may be rotated by 90 degrees.
    ///
    /// Rotation is forbidden only when the piece has a grain direction and
    /// the run respects grain.
    pub fn rotation_allowed(&self, respect_grain: bool) -> bool {
        !(respect_grain && self.grain.is_constrained())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let piece = PieceSpec::new("shelf", 800.0, 300.0)
            .with_name("Side shelf")
            .with_quantity(4)
            .with_priority(2)
            .with_grain(GrainDirection::Length);

        assert_eq!(piece.id, "shelf");
        assert_eq!(piece.name, "Side shelf");
        assert_eq!(piece.quantity, 4);
        assert_eq!(piece.priority, 2);
        assert_eq!(piece.grain, GrainDirection::Length);
    }

    #[test]
    fn test_name_defaults_to_id() {
        let piece = PieceSpec::new("p1", 10.0, 20.0);
        assert_eq!(piece.name, "p1");
    }

    #[test]
    fn test_rotation_allowed() {
        let grained = PieceSpec::new("a", 10.0, 20.0).with_grain(GrainDirection::Width);
        let free = PieceSpec::new("b", 10.0, 20.0);

        assert!(!grained.rotation_allowed(true));
        assert!(grained.rotation_allowed(false));
        assert!(free.rotation_allowed(true));
        assert!(free.rotation_allowed(false));
    }
}
