//! Input validation.
//!
//! Fatal parameter problems short-circuit the run before any placement is
//! attempted; oversized pieces only produce warnings and surface later as
//! unplaced.

use cutplan_core::{BoardDimensions, Error, PieceSpec, Settings, EPS};

/// Checks board and settings parameters, returning every fatal error found.
///
/// An empty list means the run may proceed.
pub fn validate_inputs(board: &BoardDimensions, settings: &Settings) -> Vec<Error> {
    let mut errors = Vec::new();

    if board.width_mm <= 0.0 || board.length_mm <= 0.0 {
        errors.push(Error::InvalidBoard(format!(
            "board dimensions must be positive, got {}x{} mm",
            board.width_mm, board.length_mm
        )));
    }

    if settings.kerf_mm < 0.0 {
        errors.push(Error::InvalidSettings(format!(
            "kerf must not be negative, got {} mm",
            settings.kerf_mm
        )));
    }

    if settings.edge_trim_mm < 0.0 {
        errors.push(Error::InvalidSettings(format!(
            "edge trim must not be negative, got {} mm",
            settings.edge_trim_mm
        )));
    }

    if settings.min_scrap_width_mm < 0.0 || settings.min_scrap_length_mm < 0.0 {
        errors.push(Error::InvalidSettings(format!(
            "minimum scrap dimensions must not be negative, got {}x{} mm",
            settings.min_scrap_width_mm, settings.min_scrap_length_mm
        )));
    }

    if settings.edge_trim_mm > 0.0 {
        let usable = board.usable_rect(settings.edge_trim_mm);
        if usable.width <= 0.0 || usable.length <= 0.0 {
            errors.push(Error::InvalidSettings(format!(
                "edge trim of {} mm leaves no usable area on a {}x{} mm board",
                settings.edge_trim_mm, board.width_mm, board.length_mm
            )));
        }
    }

    errors
}

/// Reports piece types that cannot fit the usable area in any permitted
/// orientation.
///
/// These are not rejected upfront; the allocator fails to place them and
/// they end up in the unplaced list.
pub fn oversize_warnings(
    board: &BoardDimensions,
    pieces: &[PieceSpec],
    settings: &Settings,
) -> Vec<String> {
    let usable = board.usable_rect(settings.edge_trim_mm);
    let mut warnings = Vec::new();

    for piece in pieces {
        let fits_unrotated =
            piece.width_mm <= usable.width + EPS && piece.length_mm <= usable.length + EPS;
        let fits_rotated = piece.rotation_allowed(settings.respect_grain)
            && piece.length_mm <= usable.width + EPS
            && piece.width_mm <= usable.length + EPS;

        if !fits_unrotated && !fits_rotated {
            warnings.push(format!(
                "piece '{}' ({}x{} mm) exceeds the usable board area of {:.0}x{:.0} mm in every allowed orientation",
                piece.id, piece.width_mm, piece.length_mm, usable.width, usable.length
            ));
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutplan_core::GrainDirection;

    fn board() -> BoardDimensions {
        BoardDimensions::new(2440.0, 1220.0)
    }

    #[test]
    fn test_valid_inputs_pass() {
        let settings = Settings::new().with_kerf(3.0).with_edge_trim(5.0);
        assert!(validate_inputs(&board(), &settings).is_empty());
    }

    #[test]
    fn test_nonpositive_board_rejected() {
        let errors = validate_inputs(&BoardDimensions::new(0.0, 1220.0), &Settings::default());
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::InvalidBoard(_)));
    }

    #[test]
    fn test_negative_parameters_rejected() {
        let settings = Settings::new().with_kerf(-1.0).with_edge_trim(-2.0);
        let errors = validate_inputs(&board(), &settings);
        assert_eq!(errors.len(), 2);

        let settings = Settings::new().with_min_scrap(-1.0, 50.0);
        let errors = validate_inputs(&board(), &settings);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::InvalidSettings(_)));
    }

    #[test]
    fn test_trim_consuming_whole_board_rejected() {
        let settings = Settings::new().with_edge_trim(700.0);
        let errors = validate_inputs(&board(), &settings);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_all_errors_collected() {
        let settings = Settings::new().with_kerf(-1.0).with_min_scrap(-1.0, -1.0);
        let errors = validate_inputs(&BoardDimensions::new(-10.0, 0.0), &settings);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_oversize_warning_in_both_orientations() {
        let pieces = vec![PieceSpec::new("huge", 3000.0, 2000.0)];
        let warnings = oversize_warnings(&board(), &pieces, &Settings::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("huge"));
    }

    #[test]
    fn test_piece_saved_by_rotation_not_warned() {
        // 1300x2400 does not fit unrotated but fits rotated
        let pieces = vec![PieceSpec::new("tall", 1300.0, 2400.0)];
        let warnings = oversize_warnings(&board(), &pieces, &Settings::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_grain_lock_blocks_rotation_rescue() {
        // Same piece, but grain forbids the rotation that would save it
        let pieces =
            vec![PieceSpec::new("tall", 1300.0, 2400.0).with_grain(GrainDirection::Length)];

        let respecting = Settings::new().with_respect_grain(true);
        assert_eq!(oversize_warnings(&board(), &pieces, &respecting).len(), 1);

        let ignoring = Settings::new().with_respect_grain(false);
        assert!(oversize_warnings(&board(), &pieces, &ignoring).is_empty());
    }
}
