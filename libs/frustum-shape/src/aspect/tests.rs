use super::*;
use approx::assert_relative_eq;

const GRID: f64 = 0.001;

fn maintain(dims: Dimensions, edited: LastEdited, limits: &Bounds) -> SolverResult<Dimensions> {
    maintain_aspect(dims, edited, limits, TopMode::CanZero, GRID)
}

fn bounds(aspect_min: f64, aspect_max: f64) -> Bounds {
    Bounds {
        aspect_min,
        aspect_max,
        ..Bounds::default()
    }
}

#[test]
fn test_unconstrained_aspect_is_noop() {
    let dims = Dimensions::new(0.0, 10.0, 0.25);
    let out = maintain(dims, LastEdited::Bottom, &Bounds::default()).unwrap();
    assert_eq!(out, dims);
}

#[test]
fn test_aspect_in_range_is_noop() {
    let dims = Dimensions::new(1.0, 1.5, 1.0);
    let out = maintain(dims, LastEdited::Top, &bounds(0.0, 1.0)).unwrap();
    assert_eq!(out, dims);
}

#[test]
fn test_no_edit_is_noop() {
    let dims = Dimensions::new(1.0, 3.0, 1.0);
    let out = maintain(dims, LastEdited::None, &bounds(0.0, 1.0)).unwrap();
    assert_eq!(out, dims);
}

#[test]
fn test_bottom_edit_pushes_length() {
    let dims = Dimensions::new(1.0, 3.0, 1.0);
    let out = maintain(dims, LastEdited::Bottom, &bounds(0.0, 1.0)).unwrap();
    assert_eq!(out.top_diameter, 1.0);
    assert_eq!(out.bottom_diameter, 3.0);
    assert_eq!(out.length, 2.0);
}

#[test]
fn test_bottom_edit_pushed_back_when_length_leaves_range() {
    let limits = Bounds {
        length_max: 1.5,
        ..bounds(0.0, 1.0)
    };
    let dims = Dimensions::new(1.0, 3.0, 1.0);
    let out = maintain(dims, LastEdited::Bottom, &limits).unwrap();
    // Length restored exactly, bottom adjusted to the steepest allowed slope.
    assert_eq!(out.length, 1.0);
    assert_relative_eq!(out.bottom_diameter, 2.0);
    assert_eq!(out.top_diameter, 1.0);
}

#[test]
fn test_bottom_edit_pushed_back_for_zero_slope() {
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let out = maintain(dims, LastEdited::Bottom, &bounds(0.0, 0.0)).unwrap();
    assert_eq!(out.length, 1.0);
    assert_eq!(out.bottom_diameter, 1.0);
}

#[test]
fn test_length_edit_resets_length() {
    let dims = Dimensions::new(1.0, 3.0, 1.0);
    let out = maintain(dims, LastEdited::Length, &bounds(0.0, 1.0)).unwrap();
    assert_eq!(out.length, 2.0);
}

#[test]
fn test_length_edit_snaps_to_grid() {
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let out = maintain(dims, LastEdited::Length, &bounds(0.0, 0.3)).unwrap();
    assert_relative_eq!(out.length, 3.333, epsilon = 1e-12);
}

#[test]
fn test_length_edit_cannot_reach_zero_slope() {
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let err = maintain(dims, LastEdited::Length, &bounds(0.0, 0.0)).unwrap_err();
    assert!(matches!(
        err,
        SolverError::UnsolvableConstraint {
            constraint: Constraint::Aspect,
            ..
        }
    ));
}

#[test]
fn test_length_edit_cannot_tilt_a_cylinder() {
    // Equal diameters never reach a positive minimum slope through the length.
    let dims = Dimensions::new(2.0, 2.0, 1.0);
    let err = maintain(dims, LastEdited::Length, &bounds(0.5, 1.0)).unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn test_top_edit_clamps_to_max_slope() {
    let dims = Dimensions::new(0.5, 3.0, 2.0);
    let out = maintain(dims, LastEdited::Top, &bounds(0.0, 1.0)).unwrap();
    assert_relative_eq!(out.top_diameter, 1.0);
    assert_eq!(out.bottom_diameter, 3.0);
    assert_eq!(out.length, 2.0);
}

#[test]
fn test_top_edit_clamps_to_min_slope() {
    let dims = Dimensions::new(2.0, 2.0, 1.0);
    let out = maintain(dims, LastEdited::Top, &bounds(0.5, 1.0)).unwrap();
    assert_relative_eq!(out.top_diameter, 1.5);
    let aspect = out.aspect().unwrap();
    assert_relative_eq!(aspect, 0.5);
}

#[test]
fn test_zero_length_is_degenerate() {
    let dims = Dimensions::new(1.0, 2.0, 0.0);
    let err = maintain(dims, LastEdited::Top, &bounds(0.0, 1.0)).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateGeometry { .. }));
}

#[test]
fn test_custom_grid() {
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let limits = bounds(0.0, 0.3);
    let out = maintain_aspect(dims, LastEdited::Length, &limits, TopMode::CanZero, 0.5).unwrap();
    assert_eq!(out.length, 3.5);
}

#[test]
fn test_top_edit_cannot_go_below_floor() {
    let dims = Dimensions::new(0.5, 1.0, 2.0);
    let err = maintain(dims, LastEdited::Top, &bounds(0.75, 1.0)).unwrap_err();
    assert!(err.to_string().contains("top diameter"));
}

#[test]
fn test_top_floor_follows_mode() {
    // Top 0.5 - 0.5·0.5 = 0.25 is legal for CanZero, below the minimum of 0.3 for LimitMin.
    let limits = Bounds {
        diameter_min: 0.3,
        ..bounds(0.0, 0.5)
    };
    let dims = Dimensions::new(0.1, 0.5, 0.5);
    let out = maintain(dims, LastEdited::Top, &limits).unwrap();
    assert_relative_eq!(out.top_diameter, 0.25);
    assert!(maintain_aspect(dims, LastEdited::Top, &limits, TopMode::LimitMin, GRID).is_err());
}

#[test]
fn test_length_edit_cannot_leave_length_range() {
    let limits = Bounds {
        length_max: 1.5,
        ..bounds(0.0, 1.0)
    };
    let dims = Dimensions::new(1.0, 3.0, 1.0);
    let err = maintain(dims, LastEdited::Length, &limits).unwrap_err();
    assert!(matches!(
        err,
        SolverError::UnsolvableConstraint {
            constraint: Constraint::Aspect,
            ..
        }
    ));
}

#[test]
fn test_bottom_push_back_cannot_leave_diameter_range() {
    // Length 0.875 is below its minimum, the push-back would need bottom
    // 0.25 + 2·1 while the diameter range ends at 2.
    let limits = Bounds {
        diameter_max: 2.0,
        length_min: 1.0,
        ..bounds(2.0, 3.0)
    };
    let dims = Dimensions::new(0.25, 2.0, 1.0);
    let err = maintain(dims, LastEdited::Bottom, &limits).unwrap_err();
    assert!(err.to_string().contains("bottom diameter"));
}
