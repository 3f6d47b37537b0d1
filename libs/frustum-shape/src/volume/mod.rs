//! # Volume Solver
//!
//! Computes the frustum volume and, when it leaves the configured range,
//! re-solves one dimension in closed form so the volume lands on the nearest
//! bound.
//!
//! ## Formula
//!
//! ```text
//! V = π · length · (top² + top·bottom + bottom²) / 12
//! ```
//!
//! Holding both diameters, the length follows by division. Holding the length
//! and one diameter, the other diameter `d` is the non-negative root of
//!
//! ```text
//! a·d² + b·d + c = 0
//! a = π·length,  b = π·length·other,  c = π·length·other² − 12·V
//! ```

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use config::constants::EPSILON_TOLERANCE;

use crate::error::{Constraint, SolverError, SolverResult};
use crate::state::{Bounds, Dimensions, LastEdited, TopMode};

/// Volume of a frustum with the given end diameters and length.
///
/// # Examples
/// ```
/// use frustum_shape::volume::frustum_volume;
/// let v = frustum_volume(1.25, 1.25, 1.0);
/// assert!((v - 1.2272).abs() < 1e-4);
/// ```
pub fn frustum_volume(top_diameter: f64, bottom_diameter: f64, length: f64) -> f64 {
    PI * length * diameter_term(top_diameter, bottom_diameter) / 12.0
}

fn diameter_term(top: f64, bottom: f64) -> f64 {
    top * top + top * bottom + bottom * bottom
}

/// A dimension re-solved to meet the volume range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolvedDimension {
    /// Top diameter.
    Top,
    /// Bottom diameter.
    Bottom,
    /// Length.
    Length,
}

/// Outcome of a volume solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeSolution {
    /// Dimensions after the solve.
    pub dimensions: Dimensions,
    /// Final volume: the computed one, or the clamped target after a solve.
    pub volume: f64,
    /// The dimension that was re-solved, if any.
    pub solved_for: Option<SolvedDimension>,
}

/// Brings the volume of `dimensions` into the volume range.
///
/// The edited dimension is re-solved with the other two held fixed; with no
/// edit the bottom diameter is re-solved. The re-solved dimension must stay
/// within its own limits.
///
/// # Errors
/// - `DegenerateGeometry` when the re-solved dimension has no defined solution
///   (zero length, or both diameters zero when solving the length).
/// - `UnsolvableConstraint` when no non-negative diameter reaches the target,
///   or the solution leaves the dimension's limits. The input is not modified.
///
/// # Examples
/// ```
/// use frustum_shape::volume::{solve_volume, SolvedDimension};
/// use frustum_shape::{Bounds, Dimensions, LastEdited, TopMode};
///
/// let bounds = Bounds { volume_max: 1.0, ..Bounds::default() };
/// let dims = Dimensions::new(0.0, 2.0, 2.0);
/// let solution = solve_volume(dims, LastEdited::Length, &bounds, TopMode::CanZero).unwrap();
/// assert_eq!(solution.solved_for, Some(SolvedDimension::Length));
/// assert!((solution.dimensions.length - 0.9549).abs() < 1e-4);
/// ```
pub fn solve_volume(
    dimensions: Dimensions,
    edited: LastEdited,
    bounds: &Bounds,
    mode: TopMode,
) -> SolverResult<VolumeSolution> {
    let volume = dimensions.volume();
    let target = volume.max(bounds.volume_min).min(bounds.volume_max);
    if target == volume {
        return Ok(VolumeSolution {
            dimensions,
            volume,
            solved_for: None,
        });
    }

    let Dimensions {
        top_diameter: top,
        bottom_diameter: bottom,
        length,
    } = dimensions;
    let mut solved = dimensions;

    let solved_for = match edited {
        LastEdited::Length => {
            let value = length_for_volume(top, bottom, target)?;
            solved.length = within(value, bounds.length_range(), "length", target)?;
            SolvedDimension::Length
        }
        LastEdited::Top => {
            let value = diameter_for_volume(bottom, length, target)?;
            solved.top_diameter = within(value, bounds.top_range(mode), "top diameter", target)?;
            SolvedDimension::Top
        }
        LastEdited::Bottom | LastEdited::None => {
            let value = diameter_for_volume(top, length, target)?;
            solved.bottom_diameter =
                within(value, bounds.bottom_range(), "bottom diameter", target)?;
            SolvedDimension::Bottom
        }
    };

    log::debug!("volume {volume} clamped to {target}, solved {solved_for:?}: {solved:?}");
    Ok(VolumeSolution {
        dimensions: solved,
        volume: target,
        solved_for: Some(solved_for),
    })
}

fn within(value: f64, range: RangeInclusive<f64>, name: &str, volume: f64) -> SolverResult<f64> {
    if range.contains(&value) {
        return Ok(value);
    }
    Err(SolverError::unsolvable(
        Constraint::Volume,
        format!(
            "volume {volume} needs {name} {value}, outside [{}, {}]",
            range.start(),
            range.end()
        ),
    ))
}

/// Length giving `volume` for fixed diameters.
fn length_for_volume(top: f64, bottom: f64, volume: f64) -> SolverResult<f64> {
    let denominator = PI * diameter_term(top, bottom);
    if denominator == 0.0 {
        return Err(SolverError::degenerate(
            "cannot solve the length with both diameters zero",
        ));
    }
    Ok(volume * 12.0 / denominator)
}

/// Diameter giving `volume` opposite a fixed `other` diameter over `length`.
///
/// Takes the `+√` root. It is evaluated as `-2c / (b + √disc)`, the same root
/// without cancellation when `c` is small.
fn diameter_for_volume(other: f64, length: f64, volume: f64) -> SolverResult<f64> {
    let a = length * PI;
    if a == 0.0 {
        return Err(SolverError::degenerate(
            "cannot solve a diameter for a zero length",
        ));
    }
    let b = a * other;
    let c = a * other * other - volume * 12.0;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Err(SolverError::unsolvable(
            Constraint::Volume,
            format!("no real diameter reaches volume {volume} (discriminant {discriminant})"),
        ));
    }
    if c > EPSILON_TOLERANCE * volume.max(1.0) {
        return Err(SolverError::unsolvable(
            Constraint::Volume,
            format!(
                "volume {volume} is below a pointed cone on diameter {other}, length {length}"
            ),
        ));
    }

    let denominator = b + discriminant.sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }
    Ok((-2.0 * c / denominator).max(0.0))
}

#[cfg(test)]
mod tests;
