//! # Resolve Cycle
//!
//! Orchestrates one pass over a shape: clamp the edited dimensions into their
//! limits, maintain the aspect, solve the volume, check the result and emit
//! the profile.
//!
//! ## Pipeline
//!
//! ```text
//! Interactive: clamp → aspect → volume → bound check → emit
//! Playback:                      volume (computed) → emit
//! ```
//!
//! Unsolvable constraints are recovered: the dimension that could not be
//! solved keeps its value, the condition is logged and returned in
//! [`Resolution::unsolved`]. Degenerate geometry aborts the cycle.

use config::constants::{relative_equal, VOLUME_RELATIVE_TOLERANCE};

use crate::aspect::maintain_aspect;
use crate::config::SolverConfig;
use crate::error::{Constraint, SolverError, SolverResult};
use crate::profile::{emit, ProfilePoint};
use crate::state::{Bounds, Dimensions, ShapeState, TopMode};
use crate::volume::solve_volume;

/// How much the cycle may change the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolveMode {
    /// Editing: enforce and rebalance every constraint.
    #[default]
    Interactive,
    /// Loading or flight: trust the dimensions, derive volume and profile only.
    Playback,
}

/// Result of one resolve cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Final dimensions.
    pub dimensions: Dimensions,
    /// Final volume.
    pub volume: f64,
    /// Bottom ring of the profile.
    pub bottom: ProfilePoint,
    /// Top ring of the profile.
    pub top: ProfilePoint,
    /// A constraint the cycle could not satisfy, if any.
    pub unsolved: Option<SolverError>,
}

impl Resolution {
    /// The profile in emission order: bottom ring, then top ring.
    pub fn profile(&self) -> [ProfilePoint; 2] {
        [self.bottom, self.top]
    }

    /// True when every constraint was satisfied.
    pub fn is_clean(&self) -> bool {
        self.unsolved.is_none()
    }
}

/// Runs resolve cycles with one numeric configuration.
///
/// # Examples
/// ```
/// use frustum_shape::{FrustumSolver, ResolveMode, ShapeConfig, ShapeState};
///
/// let solver = FrustumSolver::default();
/// let mut state = ShapeState::new(ShapeConfig::default()).unwrap();
///
/// let first = solver.resolve_if_changed(&mut state, false, ResolveMode::Interactive).unwrap();
/// assert!(first.is_some());
/// // Nothing changed since: no recompute, no emission.
/// let second = solver.resolve_if_changed(&mut state, false, ResolveMode::Interactive).unwrap();
/// assert!(second.is_none());
/// assert_eq!(state.revision(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrustumSolver {
    config: SolverConfig,
}

impl FrustumSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The numeric configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Resolves `state` when its dimensions changed since the last cycle, or
    /// when `force` is set.
    ///
    /// On success the resolved dimensions and volume are committed, the
    /// snapshot is refreshed, the edit signal cleared and the revision bumped.
    /// Returns `None` when the cycle was skipped. On error the state is left
    /// untouched.
    pub fn resolve_if_changed(
        &self,
        state: &mut ShapeState,
        force: bool,
        mode: ResolveMode,
    ) -> SolverResult<Option<Resolution>> {
        if !force && !state.needs_resolve() {
            return Ok(None);
        }
        let resolution = self.resolve(state, mode)?;
        state.commit(resolution.dimensions, resolution.volume);
        Ok(Some(resolution))
    }

    /// Computes one resolve cycle for `state` without modifying it.
    pub fn resolve(&self, state: &ShapeState, mode: ResolveMode) -> SolverResult<Resolution> {
        log::debug!(
            "resolving {:?} ({mode:?}, edited {:?})",
            state.dimensions(),
            state.pending_edit()
        );
        match mode {
            ResolveMode::Interactive => self.resolve_interactive(state),
            ResolveMode::Playback => {
                let dimensions = state.dimensions();
                finish(dimensions, dimensions.volume(), None)
            }
        }
    }

    fn resolve_interactive(&self, state: &ShapeState) -> SolverResult<Resolution> {
        let bounds = state.bounds();
        let mode = state.top_mode();
        let edited = state.pending_edit();
        let mut unsolved = None;

        let clamped = clamp_to_limits(state.dimensions(), bounds, mode);

        let maintained =
            match maintain_aspect(clamped, edited, bounds, mode, self.config.snap_grid) {
                Ok(dimensions) => dimensions,
                Err(err) => {
                    unsolved = Some(recover(err)?);
                    clamped
                }
            };

        let (dimensions, volume) = match solve_volume(maintained, edited, bounds, mode) {
            Ok(solution) => (solution.dimensions, solution.volume),
            Err(err) => {
                let err = recover(err)?;
                unsolved.get_or_insert(err);
                (maintained, maintained.volume())
            }
        };

        if unsolved.is_none() {
            unsolved = self.check_bounds(dimensions, volume, bounds, mode);
            if let Some(err) = &unsolved {
                log::warn!("{err}");
            }
        }

        finish(dimensions, volume, unsolved)
    }

    /// Reports the first bound the dimensions violate beyond tolerance.
    pub fn check_bounds(
        &self,
        dimensions: Dimensions,
        volume: f64,
        bounds: &Bounds,
        mode: TopMode,
    ) -> Option<SolverError> {
        let tolerance = self.config.tolerance;
        let Dimensions {
            top_diameter,
            bottom_diameter,
            length,
        } = dimensions;

        let outside = |value: f64, min: f64, max: f64, slack: f64| {
            value < min - slack || value > max + slack
        };

        if outside(length, bounds.length_min, bounds.length_max, tolerance) {
            return Some(violation(
                Constraint::Length,
                "length",
                length,
                bounds.length_min,
                bounds.length_max,
            ));
        }
        if outside(bottom_diameter, bounds.diameter_min, bounds.diameter_max, tolerance) {
            return Some(violation(
                Constraint::Diameter,
                "bottom diameter",
                bottom_diameter,
                bounds.diameter_min,
                bounds.diameter_max,
            ));
        }
        let top_floor = bounds.top_floor(mode);
        if outside(top_diameter, top_floor, bounds.diameter_max, tolerance) {
            return Some(violation(
                Constraint::Diameter,
                "top diameter",
                top_diameter,
                top_floor,
                bounds.diameter_max,
            ));
        }
        if !bounds.aspect_unconstrained() {
            if let Some(aspect) = dimensions.aspect() {
                let nearest = aspect.max(bounds.aspect_min).min(bounds.aspect_max);
                let slack = self.config.aspect_slack(length, nearest);
                if outside(aspect, bounds.aspect_min, bounds.aspect_max, slack) {
                    return Some(violation(
                        Constraint::Aspect,
                        "aspect",
                        aspect,
                        bounds.aspect_min,
                        bounds.aspect_max,
                    ));
                }
            }
        }
        let nearest = volume.max(bounds.volume_min).min(bounds.volume_max);
        if !relative_equal(volume, nearest, VOLUME_RELATIVE_TOLERANCE) {
            return Some(violation(
                Constraint::Volume,
                "volume",
                volume,
                bounds.volume_min,
                bounds.volume_max,
            ));
        }
        None
    }
}

/// Clamps each dimension into its own limits.
///
/// The top is not tied to the bottom here; the slope is the aspect range's
/// concern.
///
/// # Examples
/// ```
/// use frustum_shape::resolve::clamp_to_limits;
/// use frustum_shape::{Bounds, Dimensions, TopMode};
///
/// let edited = Dimensions::new(5.0, 20.0, 0.0);
/// let clamped = clamp_to_limits(edited, &Bounds::default(), TopMode::CanZero);
/// assert_eq!(clamped, Dimensions::new(5.0, 10.0, 0.25));
/// ```
pub fn clamp_to_limits(dimensions: Dimensions, bounds: &Bounds, mode: TopMode) -> Dimensions {
    let length = dimensions
        .length
        .max(bounds.length_min)
        .min(bounds.length_max);
    let bottom = dimensions
        .bottom_diameter
        .max(bounds.diameter_min)
        .min(bounds.diameter_max);
    let top = dimensions
        .top_diameter
        .min(bounds.diameter_max)
        .max(bounds.top_floor(mode));
    Dimensions::new(top, bottom, length)
}

/// Passes recoverable errors back after logging them; propagates the rest.
fn recover(err: SolverError) -> SolverResult<SolverError> {
    if err.is_recoverable() {
        log::warn!("{err}; keeping the last value");
        Ok(err)
    } else {
        Err(err)
    }
}

fn violation(constraint: Constraint, name: &str, value: f64, min: f64, max: f64) -> SolverError {
    SolverError::unsolvable(constraint, format!("{name} {value} is outside [{min}, {max}]"))
}

fn finish(
    dimensions: Dimensions,
    volume: f64,
    unsolved: Option<SolverError>,
) -> SolverResult<Resolution> {
    let (bottom, top) = emit(dimensions)?;
    Ok(Resolution {
        dimensions,
        volume,
        bottom,
        top,
        unsolved,
    })
}
