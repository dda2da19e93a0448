//! Guillotine split and prune operations on free rectangles.
//!
//! Splitting follows the Split Longer Leftover Axis rule: the full-span
//! complementary rectangle runs along whichever axis keeps the larger
//! leftover dimension, which preserves the biggest contiguous offcut. The
//! kerf is subtracted once per guillotine cut; the secondary region is
//! separated by the same saw pass and loses nothing extra.

use cutplan_core::{Error, Rect, Result, EPS};

/// Splits a consumed free rectangle around a placed piece.
///
/// `placed` must be anchored at the top-left corner of `free`. Returns up
/// to two replacement rectangles; slivers thinner than [`EPS`] are
/// dropped. Fails with [`Error::Internal`] when `placed` is not contained
/// in `free`, in which case the caller discards the area instead of
/// reclaiming it.
pub fn split_free_rect(free: &Rect, placed: &Rect, kerf_mm: f64) -> Result<Vec<Rect>> {
    if !free.contains(placed) {
        return Err(Error::Internal(format!(
            "split rejected: placed rectangle {:.1}x{:.1} at ({:.1}, {:.1}) is not contained in free rectangle {:.1}x{:.1} at ({:.1}, {:.1})",
            placed.width, placed.length, placed.x, placed.y,
            free.width, free.length, free.x, free.y
        )));
    }

    let leftover_width = free.width - placed.width;
    let leftover_length = free.length - placed.length;
    let mut result = Vec::with_capacity(2);

    if leftover_width <= leftover_length {
        // Primary cut is vertical: the right rectangle spans the full
        // length and pays the kerf.
        let right = Rect::new(
            free.x + placed.width + kerf_mm,
            free.y,
            leftover_width - kerf_mm,
            free.length,
        );
        if right.width > EPS {
            result.push(right);
        }

        let below = Rect::new(
            free.x,
            free.y + placed.length,
            placed.width,
            leftover_length,
        );
        if below.length > EPS {
            result.push(below);
        }
    } else {
        // Primary cut is horizontal: the below rectangle spans the full
        // width and pays the kerf.
        let below = Rect::new(
            free.x,
            free.y + placed.length + kerf_mm,
            free.width,
            leftover_length - kerf_mm,
        );
        if below.length > EPS {
            result.push(below);
        }

        let right = Rect::new(
            free.x + placed.width,
            free.y,
            leftover_width,
            placed.length,
        );
        if right.width > EPS {
            result.push(right);
        }
    }

    Ok(result)
}

/// Removes every rectangle fully contained in another rectangle of the
/// list.
///
/// Among mutually-identical rectangles the lower index survives. Adjacent
/// rectangles are never merged; the list stays fragmented but each entry
/// is genuinely distinct free area. O(n²), acceptable because the list is
/// re-pruned after every placement and stays small.
pub fn prune_contained(rects: Vec<Rect>) -> Vec<Rect> {
    let mut keep = vec![true; rects.len()];

    for i in 0..rects.len() {
        if !keep[i] {
            continue;
        }
        for j in 0..rects.len() {
            if i == j || !keep[j] {
                continue;
            }
            if rects[j].contains(&rects[i]) {
                // Identical rectangles: the lower index wins
                if rects[i].contains(&rects[j]) && i < j {
                    continue;
                }
                keep[i] = false;
                break;
            }
        }
    }

    rects
        .into_iter()
        .zip(keep)
        .filter_map(|(rect, kept)| kept.then_some(rect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_split_vertical_on_tie() {
        // 100x100 free, 60x60 placed: leftovers tie at 40, primary cut is
        // vertical
        let free = Rect::new(0.0, 0.0, 100.0, 100.0);
        let placed = Rect::new(0.0, 0.0, 60.0, 60.0);

        let rects = split_free_rect(&free, &placed, 0.0).unwrap();
        assert_eq!(rects.len(), 2);

        // Right spans the full length
        assert_relative_eq!(rects[0].x, 60.0);
        assert_relative_eq!(rects[0].width, 40.0);
        assert_relative_eq!(rects[0].length, 100.0);

        // Below spans only the placed width
        assert_relative_eq!(rects[1].y, 60.0);
        assert_relative_eq!(rects[1].width, 60.0);
        assert_relative_eq!(rects[1].length, 40.0);
    }

    #[test]
    fn test_split_horizontal_when_length_leftover_smaller() {
        // Leftover width 150 > leftover length 20: primary cut horizontal
        let free = Rect::new(0.0, 0.0, 250.0, 120.0);
        let placed = Rect::new(0.0, 0.0, 100.0, 100.0);

        let rects = split_free_rect(&free, &placed, 0.0).unwrap();
        assert_eq!(rects.len(), 2);

        // Below spans the full width
        assert_relative_eq!(rects[0].y, 100.0);
        assert_relative_eq!(rects[0].width, 250.0);
        assert_relative_eq!(rects[0].length, 20.0);

        // Right spans only the placed length
        assert_relative_eq!(rects[1].x, 100.0);
        assert_relative_eq!(rects[1].width, 150.0);
        assert_relative_eq!(rects[1].length, 100.0);
    }

    #[test]
    fn test_kerf_charged_to_primary_cut_only() {
        let free = Rect::new(0.0, 0.0, 100.0, 100.0);
        let placed = Rect::new(0.0, 0.0, 40.0, 60.0);

        // Leftover width 60 > leftover length 40: horizontal primary cut
        let rects = split_free_rect(&free, &placed, 3.0).unwrap();
        assert_eq!(rects.len(), 2);

        // Below pays the kerf on its y offset and length
        assert_relative_eq!(rects[0].y, 63.0);
        assert_relative_eq!(rects[0].length, 37.0);
        assert_relative_eq!(rects[0].width, 100.0);

        // Right is separated by the same pass, no extra kerf
        assert_relative_eq!(rects[1].x, 40.0);
        assert_relative_eq!(rects[1].width, 60.0);
        assert_relative_eq!(rects[1].length, 60.0);
    }

    #[test]
    fn test_exact_fit_produces_nothing() {
        let free = Rect::new(10.0, 10.0, 50.0, 50.0);
        let placed = Rect::new(10.0, 10.0, 50.0, 50.0);
        let rects = split_free_rect(&free, &placed, 3.0).unwrap();
        assert!(rects.is_empty());
    }

    #[test]
    fn test_kerf_swallows_sliver() {
        // Leftover width 2 < kerf 3: the right rectangle would have
        // negative width and is dropped; only the below rectangle remains
        let free = Rect::new(0.0, 0.0, 102.0, 60.0);
        let placed = Rect::new(0.0, 0.0, 100.0, 40.0);

        let rects = split_free_rect(&free, &placed, 3.0).unwrap();
        assert_eq!(rects.len(), 1);
        assert_relative_eq!(rects[0].y, 40.0);
        assert_relative_eq!(rects[0].width, 100.0);
        assert_relative_eq!(rects[0].length, 20.0);
    }

    #[test]
    fn test_containment_violation_rejected() {
        let free = Rect::new(0.0, 0.0, 100.0, 100.0);
        let placed = Rect::new(50.0, 50.0, 100.0, 100.0);

        let err = split_free_rect(&free, &placed, 0.0).unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
    }

    #[test]
    fn test_prune_removes_contained() {
        let rects = vec![
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(10.0, 10.0, 20.0, 20.0),
            Rect::new(200.0, 0.0, 50.0, 50.0),
        ];

        let pruned = prune_contained(rects);
        assert_eq!(pruned.len(), 2);
        assert_relative_eq!(pruned[0].width, 100.0);
        assert_relative_eq!(pruned[1].x, 200.0);
    }

    #[test]
    fn test_prune_keeps_lower_index_of_identical_pair() {
        let a = Rect::new(5.0, 5.0, 30.0, 30.0);
        let rects = vec![a, a];

        let pruned = prune_contained(rects);
        assert_eq!(pruned.len(), 1);
        assert_eq!(pruned[0], a);
    }

    #[test]
    fn test_prune_keeps_overlapping_but_not_contained() {
        let rects = vec![
            Rect::new(0.0, 0.0, 60.0, 60.0),
            Rect::new(30.0, 30.0, 60.0, 60.0),
        ];
        assert_eq!(prune_contained(rects).len(), 2);
    }
}
