//! # Aspect Ratio Maintainer
//!
//! Keeps the slope `(bottom - top) / length` inside the configured range by
//! adjusting the dimension the caller did not just edit.
//!
//! | Edited | Adjusted |
//! |--------|----------|
//! | bottom | length, or the bottom itself when the length would leave its range |
//! | length | length (reset to what the diameters require) |
//! | top    | top |

use std::ops::RangeInclusive;

use config::constants::snap_to_grid;

use crate::error::{Constraint, SolverError, SolverResult};
use crate::state::{Bounds, Dimensions, LastEdited, TopMode};

/// Returns `dimensions` with the slope clamped into the aspect range.
///
/// Adjusted values snap to `grid`. Dimensions already in range, an
/// unconstrained aspect range, or no edit leave the input unchanged. An
/// adjusted dimension never leaves its own limits.
///
/// A top edit solves the slope for the top, `top = bottom - aspect * length`,
/// so the result lands on the target slope rather than its mirror.
///
/// # Errors
/// - `DegenerateGeometry` when the length is zero.
/// - `UnsolvableConstraint` when the adjusted dimension would leave its limits
///   or no length produces the slope. The input is not modified.
///
/// # Examples
/// ```
/// use frustum_shape::aspect::maintain_aspect;
/// use frustum_shape::{Bounds, Dimensions, LastEdited, TopMode};
///
/// let bounds = Bounds { aspect_max: 1.0, ..Bounds::default() };
/// let edited = Dimensions::new(1.0, 3.0, 1.0);
/// let fixed = maintain_aspect(edited, LastEdited::Bottom, &bounds, TopMode::CanZero, 0.001)
///     .unwrap();
/// assert_eq!(fixed.length, 2.0);
/// ```
pub fn maintain_aspect(
    dimensions: Dimensions,
    edited: LastEdited,
    bounds: &Bounds,
    mode: TopMode,
    grid: f64,
) -> SolverResult<Dimensions> {
    if bounds.aspect_unconstrained() {
        return Ok(dimensions);
    }

    let aspect = dimensions
        .aspect()
        .ok_or_else(|| SolverError::degenerate("aspect is undefined for a zero length"))?;
    let target = aspect.max(bounds.aspect_min).min(bounds.aspect_max);
    if target == aspect {
        return Ok(dimensions);
    }

    let Dimensions {
        top_diameter: top,
        bottom_diameter: bottom,
        length,
    } = dimensions;
    let mut adjusted = dimensions;

    match edited {
        LastEdited::Bottom => {
            // The bottom can push the length; past the length limits it is pushed back.
            let pushed = length_for_slope(bottom - top, target, grid)
                .filter(|candidate| bounds.length_range().contains(candidate));
            match pushed {
                Some(new_length) => adjusted.length = new_length,
                None => {
                    adjusted.bottom_diameter = within(
                        snap_to_grid(target * length + top, grid),
                        bounds.bottom_range(),
                        "bottom diameter",
                        target,
                    )?;
                }
            }
        }
        LastEdited::Length => {
            let new_length = length_for_slope(bottom - top, target, grid).ok_or_else(|| {
                SolverError::unsolvable(
                    Constraint::Aspect,
                    format!("no length gives slope {target} for diameters {top} and {bottom}"),
                )
            })?;
            adjusted.length = within(new_length, bounds.length_range(), "length", target)?;
        }
        LastEdited::Top => {
            adjusted.top_diameter = within(
                snap_to_grid(bottom - target * length, grid),
                bounds.top_range(mode),
                "top diameter",
                target,
            )?;
        }
        LastEdited::None => {}
    }

    if adjusted != dimensions {
        log::debug!("aspect {aspect} clamped to {target} after {edited:?} edit: {adjusted:?}");
    }
    Ok(adjusted)
}

fn within(
    value: f64,
    range: RangeInclusive<f64>,
    name: &str,
    slope: f64,
) -> SolverResult<f64> {
    if range.contains(&value) {
        return Ok(value);
    }
    Err(SolverError::unsolvable(
        Constraint::Aspect,
        format!(
            "slope {slope} needs {name} {value}, outside [{}, {}]",
            range.start(),
            range.end()
        ),
    ))
}

/// Positive snapped length giving `slope` over `rise`, if one exists.
fn length_for_slope(rise: f64, slope: f64, grid: f64) -> Option<f64> {
    if slope == 0.0 {
        return None;
    }
    let length = snap_to_grid(rise / slope, grid);
    (length > 0.0 && length.is_finite()).then_some(length)
}

#[cfg(test)]
mod tests;
