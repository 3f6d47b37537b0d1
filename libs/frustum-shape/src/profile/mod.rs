//! # Profile Emitter
//!
//! Derives the two-ring cross-section that mesh building revolves into the
//! frustum surface. The lateral surface of a frustum has one constant slant
//! normal, shared by both rings.
//!
//! ## Output order
//!
//! ```text
//! bottom { diameter: bottom, axial_offset: -length/2, tex_coord_v: 0, normal }
//! top    { diameter: top,    axial_offset: +length/2, tex_coord_v: 1, normal }
//! ```

pub use glam::DVec2 as Vec2;
use serde::Serialize;

use crate::error::{SolverError, SolverResult};
use crate::state::Dimensions;

/// One ring of the cross-section profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePoint {
    /// Ring diameter.
    pub diameter: f64,
    /// Position along the axis, centered on the shape.
    pub axial_offset: f64,
    /// Texture coordinate along the axis.
    pub tex_coord_v: f64,
    /// Unit normal of the lateral surface in the (axial, radial) plane.
    pub normal: Vec2,
}

impl ProfilePoint {
    /// Ring radius.
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Emits the bottom ring then the top ring.
///
/// # Errors
/// `DegenerateGeometry` for a zero length, two zero diameters, or non-finite
/// dimensions.
///
/// # Examples
/// ```
/// use frustum_shape::profile::{emit, Vec2};
/// use frustum_shape::Dimensions;
///
/// let (bottom, top) = emit(Dimensions::new(1.25, 1.25, 1.0)).unwrap();
/// assert_eq!(bottom.axial_offset, -0.5);
/// assert_eq!(top.tex_coord_v, 1.0);
/// assert_eq!(bottom.normal, Vec2::new(1.0, 0.0));
/// ```
pub fn emit(dimensions: Dimensions) -> SolverResult<(ProfilePoint, ProfilePoint)> {
    let Dimensions {
        top_diameter: top,
        bottom_diameter: bottom,
        length,
    } = dimensions;

    if length == 0.0 {
        return Err(SolverError::degenerate("cannot emit a profile of zero length"));
    }
    if top == 0.0 && bottom == 0.0 {
        return Err(SolverError::degenerate(
            "cannot emit a profile with both diameters zero",
        ));
    }

    let normal = slant_normal(dimensions).ok_or_else(|| {
        SolverError::degenerate(format!("slant normal is undefined for {dimensions:?}"))
    })?;

    let half = 0.5 * length;
    Ok((
        ProfilePoint {
            diameter: bottom,
            axial_offset: -half,
            tex_coord_v: 0.0,
            normal,
        },
        ProfilePoint {
            diameter: top,
            axial_offset: half,
            tex_coord_v: 1.0,
            normal,
        },
    ))
}

/// Unit normal of the lateral surface, perpendicular to the slant edge.
pub fn slant_normal(dimensions: Dimensions) -> Option<Vec2> {
    Vec2::new(
        dimensions.length,
        (dimensions.bottom_diameter - dimensions.top_diameter) / 2.0,
    )
    .try_normalize()
}

#[cfg(test)]
mod tests;
