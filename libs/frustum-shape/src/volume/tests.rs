use super::*;
use approx::assert_relative_eq;

fn solve(dims: Dimensions, edited: LastEdited, limits: &Bounds) -> SolverResult<VolumeSolution> {
    solve_volume(dims, edited, limits, TopMode::CanZero)
}

fn volume_bounds(volume_min: f64, volume_max: f64) -> Bounds {
    Bounds {
        volume_min,
        volume_max,
        ..Bounds::default()
    }
}

#[test]
fn test_frustum_volume_cylinder() {
    // π · 1 · (3 · 1.5625) / 12
    assert_relative_eq!(frustum_volume(1.25, 1.25, 1.0), 1.227_184_630_308_513, epsilon = 1e-12);
}

#[test]
fn test_frustum_volume_cone() {
    assert_relative_eq!(frustum_volume(0.0, 2.0, 3.0), PI, epsilon = 1e-12);
    assert_eq!(frustum_volume(0.0, 0.0, 3.0), 0.0);
    assert_eq!(frustum_volume(1.0, 2.0, 0.0), 0.0);
}

#[test]
fn test_volume_in_range_is_noop() {
    let dims = Dimensions::new(1.25, 1.25, 1.0);
    let solution = solve(dims, LastEdited::Length, &volume_bounds(1.0, 2.0)).unwrap();
    assert_eq!(solution.dimensions, dims);
    assert_eq!(solution.solved_for, None);
    assert_relative_eq!(solution.volume, dims.volume());
}

#[test]
fn test_length_driver_divides() {
    let dims = Dimensions::new(0.0, 2.0, 2.0);
    let solution = solve(dims, LastEdited::Length, &volume_bounds(0.0, 1.0)).unwrap();
    assert_eq!(solution.solved_for, Some(SolvedDimension::Length));
    assert_relative_eq!(solution.dimensions.length, 3.0 / PI, epsilon = 1e-12);
    assert!(solution.dimensions.length <= 0.9549);
    assert_eq!(solution.volume, 1.0);
    assert_relative_eq!(solution.dimensions.volume(), 1.0, max_relative = 1e-9);
}

#[test]
fn test_top_driver_solves_quadratic() {
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let solution = solve(dims, LastEdited::Top, &volume_bounds(0.0, 1.5)).unwrap();
    assert_eq!(solution.solved_for, Some(SolvedDimension::Top));
    assert_eq!(solution.dimensions.bottom_diameter, 2.0);
    assert_eq!(solution.dimensions.length, 1.0);
    assert!(solution.dimensions.top_diameter < 1.0);
    assert!(solution.dimensions.top_diameter >= 0.0);
    assert_relative_eq!(solution.dimensions.volume(), 1.5, max_relative = 1e-9);
}

#[test]
fn test_bottom_driver_solves_quadratic() {
    let dims = Dimensions::new(1.0, 1.0, 2.0);
    let solution = solve(dims, LastEdited::Bottom, &volume_bounds(3.0, 10.0)).unwrap();
    assert_eq!(solution.solved_for, Some(SolvedDimension::Bottom));
    assert_eq!(solution.dimensions.top_diameter, 1.0);
    assert!(solution.dimensions.bottom_diameter > 1.0);
    assert_relative_eq!(solution.dimensions.volume(), 3.0, max_relative = 1e-9);
}

#[test]
fn test_forced_recompute_solves_bottom() {
    let dims = Dimensions::new(1.0, 1.0, 2.0);
    let solution = solve(dims, LastEdited::None, &volume_bounds(3.0, 10.0)).unwrap();
    assert_eq!(solution.solved_for, Some(SolvedDimension::Bottom));
}

#[test]
fn test_quadratic_matches_textbook_root() {
    let (other, length, volume) = (2.0, 1.0, 1.5);
    let a = length * PI;
    let b = a * other;
    let c = a * other * other - volume * 12.0;
    let textbook = ((b * b - 4.0 * a * c).sqrt() - b) / (2.0 * a);
    let solved = diameter_for_volume(other, length, volume).unwrap();
    assert_relative_eq!(solved, textbook, max_relative = 1e-12);
}

#[test]
fn test_target_below_point_cone_is_unsolvable() {
    // Even a zero top leaves π·4/12 ≈ 1.047 of volume.
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let err = solve(dims, LastEdited::Top, &volume_bounds(0.0, 0.5)).unwrap_err();
    assert!(matches!(
        err,
        SolverError::UnsolvableConstraint {
            constraint: Constraint::Volume,
            ..
        }
    ));
}

#[test]
fn test_zero_diameters_degenerate_for_length() {
    let dims = Dimensions::new(0.0, 0.0, 1.0);
    let err = solve(dims, LastEdited::Length, &volume_bounds(1.0, 2.0)).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateGeometry { .. }));
}

#[test]
fn test_zero_length_degenerate_for_diameter() {
    let dims = Dimensions::new(1.0, 1.0, 0.0);
    let err = solve(dims, LastEdited::Top, &volume_bounds(1.0, 2.0)).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateGeometry { .. }));
}

#[test]
fn test_point_opposite_zero_diameter() {
    // Solving against a zero top: d² = 12V / (πL).
    let root = diameter_for_volume(0.0, 1.0, PI / 3.0).unwrap();
    assert_relative_eq!(root, 2.0, epsilon = 1e-12);
}

#[test]
fn test_solution_outside_length_limits_is_unsolvable() {
    let limits = Bounds {
        length_min: 1.0,
        ..volume_bounds(0.0, 1.0)
    };
    let dims = Dimensions::new(0.0, 2.0, 2.0);
    let err = solve(dims, LastEdited::Length, &limits).unwrap_err();
    assert!(err.to_string().contains("length"));
}

#[test]
fn test_top_solution_respects_mode_floor() {
    // V(0, 2, 1) = π/3; a target just above it needs a top near zero.
    let limits = volume_bounds(0.0, PI / 3.0 + 0.01);
    let dims = Dimensions::new(1.0, 2.0, 1.0);
    let solution = solve_volume(dims, LastEdited::Top, &limits, TopMode::CanZero).unwrap();
    assert!(solution.dimensions.top_diameter < 0.25);
    let err = solve_volume(dims, LastEdited::Top, &limits, TopMode::LimitMin).unwrap_err();
    assert!(err.is_recoverable());
}
