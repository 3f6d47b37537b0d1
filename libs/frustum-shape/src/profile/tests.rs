use super::*;
use approx::assert_relative_eq;

#[test]
fn test_cylinder_profile() {
    let (bottom, top) = emit(Dimensions::new(1.25, 1.25, 1.0)).unwrap();
    assert_eq!(bottom.diameter, 1.25);
    assert_eq!(bottom.axial_offset, -0.5);
    assert_eq!(bottom.tex_coord_v, 0.0);
    assert_eq!(bottom.normal, Vec2::new(1.0, 0.0));
    assert_eq!(top.diameter, 1.25);
    assert_eq!(top.axial_offset, 0.5);
    assert_eq!(top.tex_coord_v, 1.0);
    assert_eq!(top.normal, bottom.normal);
}

#[test]
fn test_cone_normal_tilts_outward() {
    // Slant vector (2, 1) normalized.
    let (bottom, top) = emit(Dimensions::new(0.0, 2.0, 2.0)).unwrap();
    assert_relative_eq!(bottom.normal.x, 2.0 / 5f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(bottom.normal.y, 1.0 / 5f64.sqrt(), epsilon = 1e-12);
    assert_relative_eq!(bottom.normal.length(), 1.0, epsilon = 1e-12);
    assert_eq!(top.diameter, 0.0);
    assert_eq!(top.radius(), 0.0);
    assert_eq!(bottom.radius(), 1.0);
}

#[test]
fn test_inverted_frustum_normal() {
    let (bottom, _) = emit(Dimensions::new(3.0, 1.0, 1.0)).unwrap();
    assert!(bottom.normal.y < 0.0);
}

#[test]
fn test_bottom_precedes_top() {
    let (bottom, top) = emit(Dimensions::new(0.5, 4.0, 3.0)).unwrap();
    assert!(bottom.axial_offset < top.axial_offset);
    assert!(bottom.tex_coord_v < top.tex_coord_v);
    assert_eq!(bottom.diameter, 4.0);
    assert_eq!(top.diameter, 0.5);
    assert_eq!(top.axial_offset - bottom.axial_offset, 3.0);
}

#[test]
fn test_zero_length_rejected() {
    let err = emit(Dimensions::new(1.0, 2.0, 0.0)).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateGeometry { .. }));
}

#[test]
fn test_zero_diameters_rejected() {
    let err = emit(Dimensions::new(0.0, 0.0, 1.0)).unwrap_err();
    assert!(matches!(err, SolverError::DegenerateGeometry { .. }));
}

#[test]
fn test_non_finite_rejected() {
    assert!(emit(Dimensions::new(1.0, f64::NAN, 1.0)).is_err());
    assert!(slant_normal(Dimensions::new(1.0, 1.0, f64::INFINITY)).is_none());
}
