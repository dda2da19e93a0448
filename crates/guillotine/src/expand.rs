//! Piece expansion and ordering.

use cutplan_core::{PieceSpec, Strategy};

/// One unit instance of a requested piece type.
///
/// `piece_index` refers back into the caller's piece slice so placements
/// and unplaced reports can be aggregated per type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieceInstance {
    /// Index of the originating [`PieceSpec`].
    pub piece_index: usize,
    /// Instance width in millimeters.
    pub width_mm: f64,
    /// Instance length in millimeters.
    pub length_mm: f64,
}

/// Expands piece types into unit instances and fixes the placement order.
///
/// Instances are sorted by descending length, then descending width, with
/// a stable tie-break on input order. Placing the largest pieces first
/// limits early fragmentation of free space. [`Strategy::Priority`]
/// prepends a descending-priority key to that order.
pub fn expand_instances(pieces: &[PieceSpec], strategy: Strategy) -> Vec<PieceInstance> {
    let mut instances = Vec::new();
    for (piece_index, piece) in pieces.iter().enumerate() {
        for _ in 0..piece.quantity {
            instances.push(PieceInstance {
                piece_index,
                width_mm: piece.width_mm,
                length_mm: piece.length_mm,
            });
        }
    }

    // Vec::sort_by is stable, preserving input order between equal keys.
    instances.sort_by(|a, b| {
        if strategy == Strategy::Priority {
            let pa = pieces[a.piece_index].priority;
            let pb = pieces[b.piece_index].priority;
            if pa != pb {
                return pb.cmp(&pa);
            }
        }
        b.length_mm
            .total_cmp(&a.length_mm)
            .then(b.width_mm.total_cmp(&a.width_mm))
    });

    instances
}
