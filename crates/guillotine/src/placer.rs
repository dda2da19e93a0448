//! Placement heuristic.
//!
//! Ranks every admissible (free rectangle, orientation) pair for one piece
//! instance and returns the best candidate. The default scoring is Best
//! Short Side Fit: the candidate whose smaller leftover dimension is
//! smallest wins, which tends to preserve large contiguous free areas.

use cutplan_core::{Rect, Strategy, EPS};

/// A scored placement candidate for one piece instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the chosen free rectangle in the board's list.
    pub free_index: usize,
    /// Left edge of the placement (the free rectangle's corner).
    pub x: f64,
    /// Top edge of the placement.
    pub y: f64,
    /// Placed width, after any rotation.
    pub width_mm: f64,
    /// Placed length, after any rotation.
    pub length_mm: f64,
    /// True if the piece was rotated into this candidate.
    pub rotated: bool,
    /// Heuristic score; lower is better.
    pub score: f64,
}

impl Candidate {
    /// Returns the rectangle this candidate would occupy.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width_mm, self.length_mm)
    }
}

fn score(free: &Rect, width_mm: f64, length_mm: f64, strategy: Strategy) -> f64 {
    match strategy {
        Strategy::Cuts => free.area() - width_mm * length_mm,
        Strategy::Waste | Strategy::Priority => {
            (free.width - width_mm).min(free.length - length_mm)
        }
    }
}

/// Finds the best free rectangle and orientation for one piece instance.
///
/// Free rectangles are visited in list order and the unrotated orientation
/// is tried before the rotated one, so equal scores keep the earliest
/// candidate. Returns `None` when no rectangle admits the piece in any
/// permitted orientation. Pure function; the free list is not modified.
pub fn find_best_placement(
    width_mm: f64,
    length_mm: f64,
    free_rects: &[Rect],
    rotation_allowed: bool,
    strategy: Strategy,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for (free_index, free) in free_rects.iter().enumerate() {
        if width_mm <= free.width + EPS && length_mm <= free.length + EPS {
            let candidate = Candidate {
                free_index,
                x: free.x,
                y: free.y,
                width_mm,
                length_mm,
                rotated: false,
                score: score(free, width_mm, length_mm, strategy),
            };
            if best.is_none_or(|b| candidate.score < b.score) {
                best = Some(candidate);
            }
        }

        if rotation_allowed && length_mm <= free.width + EPS && width_mm <= free.length + EPS {
            let candidate = Candidate {
                free_index,
                x: free.x,
                y: free.y,
                width_mm: length_mm,
                length_mm: width_mm,
                rotated: true,
                score: score(free, length_mm, width_mm, strategy),
            };
            if best.is_none_or(|b| candidate.score < b.score) {
                best = Some(candidate);
            }
        }
    }

    best
}
