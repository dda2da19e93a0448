//! Multi-board guillotine packer.
//!
//! Drives the full run: validation, instance expansion, the greedy
//! placement loop over an expanding list of identical boards, and the
//! final statistics and scrap extraction. The loop is strictly
//! sequential; later instances see the free-space state left by earlier
//! placements and nothing is ever backtracked.

use std::collections::HashSet;
use std::time::Instant;

use cutplan_core::{
    BoardDimensions, EventCallback, LayoutEvent, LayoutResult, PieceSpec, PlacedPiece, Rect,
    Settings, UsableScrap, EPS,
};

use crate::expand::expand_instances;
use crate::free_rect::{prune_contained, split_free_rect};
use crate::placer::{find_best_placement, Candidate};
use crate::validate::{oversize_warnings, validate_inputs};

/// Free-rectangle state of one opened stock board.
///
/// Owned exclusively by the packer for the duration of a run; the list is
/// replaced wholesale on every mutation so intermediate states can be
/// snapshotted without aliasing.
#[derive(Debug, Clone)]
struct BoardState {
    free: Vec<Rect>,
}

impl BoardState {
    fn new(usable: Rect) -> Self {
        Self { free: vec![usable] }
    }
}

/// Greedy guillotine packer.
///
/// A single packer value can run any number of independent layouts; no
/// state survives between calls.
pub struct GuillotinePacker {
    settings: Settings,
}

impl GuillotinePacker {
    /// Creates a packer with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Creates a packer with default settings.
    pub fn default_settings() -> Self {
        Self::new(Settings::default())
    }

    /// Returns the settings this packer runs with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Computes a layout for the given board and piece list.
    ///
    /// Never panics and never returns an error value; validation failures
    /// and degraded placements are reported through the result's `errors`
    /// and `warnings` lists.
    pub fn pack(&self, board: &BoardDimensions, pieces: &[PieceSpec]) -> LayoutResult {
        self.pack_impl(board, pieces, None)
    }

    /// Computes a layout, reporting each step through `callback`.
    pub fn pack_with_events(
        &self,
        board: &BoardDimensions,
        pieces: &[PieceSpec],
        callback: EventCallback,
    ) -> LayoutResult {
        self.pack_impl(board, pieces, Some(&callback))
    }

    fn pack_impl(
        &self,
        board: &BoardDimensions,
        pieces: &[PieceSpec],
        events: Option<&EventCallback>,
    ) -> LayoutResult {
        let start = Instant::now();
        let mut result = LayoutResult::new(*board, self.settings.clone());
        result.total_requested_area_mm2 = pieces
            .iter()
            .map(|p| p.area_mm2() * f64::from(p.quantity))
            .sum();

        let errors = validate_inputs(board, &self.settings);
        if !errors.is_empty() {
            // Short-circuit: no placement is attempted, every requested
            // type is reported unplaced.
            result.errors = errors.iter().map(|e| e.to_string()).collect();
            let mut seen = HashSet::new();
            for piece in pieces {
                if seen.insert(piece.id.as_str()) {
                    result.unplaced_pieces.push(piece.id.clone());
                }
            }
            result.waste_percentage = 100.0;
            result.computation_time_ms = start.elapsed().as_millis() as u64;
            return result;
        }

        result.warnings = oversize_warnings(board, pieces, &self.settings);

        let usable = board.usable_rect(self.settings.edge_trim_mm);
        let instances = expand_instances(pieces, self.settings.strategy);

        let mut boards: Vec<BoardState> = Vec::new();
        let mut unplaced_seen: HashSet<String> = HashSet::new();

        for instance in &instances {
            let piece = &pieces[instance.piece_index];
            let rotation_allowed = piece.rotation_allowed(self.settings.respect_grain);

            // Try existing boards in creation order; the first board that
            // admits the piece wins.
            let mut found: Option<(usize, Candidate)> = None;
            for (board_index, state) in boards.iter().enumerate() {
                if let Some(candidate) = find_best_placement(
                    instance.width_mm,
                    instance.length_mm,
                    &state.free,
                    rotation_allowed,
                    self.settings.strategy,
                ) {
                    found = Some((board_index, candidate));
                    break;
                }
            }

            if found.is_none() {
                let fits_empty_board = find_best_placement(
                    instance.width_mm,
                    instance.length_mm,
                    std::slice::from_ref(&usable),
                    rotation_allowed,
                    self.settings.strategy,
                )
                .is_some();

                if fits_empty_board {
                    boards.push(BoardState::new(usable));
                    let board_index = boards.len() - 1;
                    emit(events, LayoutEvent::BoardOpened { board_index });

                    match find_best_placement(
                        instance.width_mm,
                        instance.length_mm,
                        &boards[board_index].free,
                        rotation_allowed,
                        self.settings.strategy,
                    ) {
                        Some(candidate) => found = Some((board_index, candidate)),
                        None => {
                            // The pre-check confirmed an empty board holds
                            // this piece; the piece stays unplaced and the
                            // run continues.
                            let message = format!(
                                "piece '{}' failed to place on a freshly opened board",
                                piece.id
                            );
                            log::warn!("{message}");
                            result.warnings.push(message);
                        }
                    }
                }
            }

            match found {
                Some((board_index, candidate)) => {
                    self.place(
                        &mut boards[board_index],
                        board_index,
                        piece,
                        &candidate,
                        &mut result,
                        events,
                    );
                }
                None => {
                    emit(
                        events,
                        LayoutEvent::PieceUnplaced {
                            piece_id: piece.id.clone(),
                        },
                    );
                    if unplaced_seen.insert(piece.id.clone()) {
                        result.unplaced_pieces.push(piece.id.clone());
                    }
                }
            }
        }

        self.finalize(&mut result, &boards, board);
        result.computation_time_ms = start.elapsed().as_millis() as u64;
        result
    }

    /// Commits one candidate: records the placement, splits the consumed
    /// free rectangle and prunes the board's list.
    fn place(
        &self,
        state: &mut BoardState,
        board_index: usize,
        piece: &PieceSpec,
        candidate: &Candidate,
        result: &mut LayoutResult,
        events: Option<&EventCallback>,
    ) {
        let placed_rect = candidate.rect();
        let consumed = state.free.remove(candidate.free_index);

        match split_free_rect(&consumed, &placed_rect, self.settings.kerf_mm) {
            Ok(new_rects) => state.free.extend(new_rects),
            Err(err) => {
                // The consumed area is not reclaimed; waste grows instead
                // of aborting the run.
                log::warn!("{err}");
                result.warnings.push(err.to_string());
                emit(events, LayoutEvent::SplitDiscarded { board_index });
            }
        }
        state.free = prune_contained(std::mem::take(&mut state.free));

        log::debug!(
            "placed '{}' on board {} at ({:.1}, {:.1}){}",
            piece.id,
            board_index,
            candidate.x,
            candidate.y,
            if candidate.rotated { " rotated" } else { "" }
        );
        emit(
            events,
            LayoutEvent::PiecePlaced {
                piece_id: piece.id.clone(),
                board_index,
                x: candidate.x,
                y: candidate.y,
                rotated: candidate.rotated,
            },
        );

        result.placed_pieces.push(PlacedPiece {
            piece_id: piece.id.clone(),
            name: piece.name.clone(),
            board_index,
            x: candidate.x,
            y: candidate.y,
            width_mm: candidate.width_mm,
            length_mm: candidate.length_mm,
            rotated: candidate.rotated,
        });
    }

    /// Derives the aggregate statistics and the usable-scrap list from the
    /// final board states.
    fn finalize(&self, result: &mut LayoutResult, boards: &[BoardState], board: &BoardDimensions) {
        let touched: HashSet<usize> = result
            .placed_pieces
            .iter()
            .map(|p| p.board_index)
            .collect();
        result.boards_used = touched.len();

        result.total_placed_area_mm2 = result.placed_pieces.iter().map(|p| p.area_mm2()).sum();
        result.total_board_area_mm2 = result.boards_used as f64 * board.area_mm2();

        result.waste_percentage = if result.total_board_area_mm2 <= 0.0 {
            if result.total_requested_area_mm2 > 0.0 {
                100.0
            } else {
                0.0
            }
        } else {
            let used_fraction = result.total_placed_area_mm2 / result.total_board_area_mm2;
            (100.0 * (1.0 - used_fraction)).clamp(0.0, 100.0)
        };

        result.usable_scrap = self.extract_scrap(boards);
    }

    fn extract_scrap(&self, boards: &[BoardState]) -> Vec<UsableScrap> {
        let min_width = self.settings.min_scrap_width_mm;
        let min_length = self.settings.min_scrap_length_mm;

        let mut scrap = Vec::new();
        for (board_index, state) in boards.iter().enumerate() {
            for rect in &state.free {
                // Either orientation may satisfy the minimums
                let qualifies = (rect.width >= min_width - EPS
                    && rect.length >= min_length - EPS)
                    || (rect.width >= min_length - EPS && rect.length >= min_width - EPS);
                if qualifies {
                    scrap.push(UsableScrap::new(board_index, *rect));
                }
            }
        }

        scrap.sort_by(|a, b| b.area_mm2.total_cmp(&a.area_mm2));
        scrap
    }
}

fn emit(events: Option<&EventCallback>, event: LayoutEvent) {
    if let Some(callback) = events {
        callback(event);
    }
}
