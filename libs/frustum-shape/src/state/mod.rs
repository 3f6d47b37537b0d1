//! # Shape State
//!
//! The data holder of one frustum: current dimensions, the snapshot of the
//! last resolved configuration, the explicit edit signal, and the bound
//! configuration. Only the resolve cycle commits solved values.

mod bounds;
mod limits;
mod top_mode;

pub use bounds::{Bounds, ShapeConfig, StepSizes};
pub use limits::{FieldLimits, FieldRange};
pub use top_mode::{ParseTopModeError, TopMode};

use config::constants::{DEFAULT_BOTTOM_DIAMETER, DEFAULT_LENGTH, DEFAULT_TOP_DIAMETER};

use crate::error::{SolverError, SolverResult};
use crate::volume::frustum_volume;

// =============================================================================
// DIMENSIONS
// =============================================================================

/// The three coupled scalars of a frustum.
///
/// Equality is exact on the stored floats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Diameter of the top ring.
    pub top_diameter: f64,
    /// Diameter of the bottom ring.
    pub bottom_diameter: f64,
    /// Axial distance between the rings.
    pub length: f64,
}

impl Dimensions {
    /// Creates a dimension triple.
    pub fn new(top_diameter: f64, bottom_diameter: f64, length: f64) -> Self {
        Self {
            top_diameter,
            bottom_diameter,
            length,
        }
    }

    /// Slope `(bottom - top) / length`, or `None` for a zero length.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::Dimensions;
    /// assert_eq!(Dimensions::new(1.0, 2.0, 2.0).aspect(), Some(0.5));
    /// assert_eq!(Dimensions::new(1.0, 2.0, 0.0).aspect(), None);
    /// ```
    pub fn aspect(&self) -> Option<f64> {
        (self.length != 0.0).then(|| (self.bottom_diameter - self.top_diameter) / self.length)
    }

    /// Frustum volume of these dimensions.
    pub fn volume(&self) -> f64 {
        frustum_volume(self.top_diameter, self.bottom_diameter, self.length)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_DIAMETER, DEFAULT_BOTTOM_DIAMETER, DEFAULT_LENGTH)
    }
}

/// The dimension the caller edited since the last resolve cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastEdited {
    /// Top diameter.
    Top,
    /// Bottom diameter.
    Bottom,
    /// Length.
    Length,
    /// Nothing edited (forced recompute or fresh state).
    #[default]
    None,
}

// =============================================================================
// SHAPE STATE
// =============================================================================

/// Mutable state of one frustum shape, exclusively owned by its caller.
///
/// # Examples
/// ```
/// use frustum_shape::{LastEdited, ShapeConfig, ShapeState};
///
/// let mut state = ShapeState::new(ShapeConfig::default()).unwrap();
/// state.set_length(2.0).unwrap();
/// assert_eq!(state.last_edited(), LastEdited::Length);
/// assert!(state.needs_resolve());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeState {
    dimensions: Dimensions,
    previous: Option<Dimensions>,
    last_edited: LastEdited,
    top_mode: TopMode,
    bounds: Bounds,
    steps: StepSizes,
    volume: f64,
    revision: u64,
}

impl ShapeState {
    /// Creates a shape with the default dimensions.
    pub fn new(config: ShapeConfig) -> SolverResult<Self> {
        Self::with_dimensions(config, Dimensions::default())
    }

    /// Creates a shape from explicit (for example persisted) dimensions.
    pub fn with_dimensions(config: ShapeConfig, dimensions: Dimensions) -> SolverResult<Self> {
        config.validate()?;
        check_input("top diameter", dimensions.top_diameter)?;
        check_input("bottom diameter", dimensions.bottom_diameter)?;
        check_input("length", dimensions.length)?;
        Ok(Self {
            dimensions,
            previous: None,
            last_edited: LastEdited::None,
            top_mode: config.top_mode,
            bounds: config.bounds,
            steps: config.steps,
            volume: dimensions.volume(),
            revision: 0,
        })
    }

    /// Replaces the bound configuration.
    ///
    /// A rejected configuration leaves the current one in place. An accepted
    /// one invalidates the last resolution so the next cycle always runs, as
    /// an unedited recompute.
    pub fn reconfigure(&mut self, config: ShapeConfig) -> SolverResult<()> {
        config.validate()?;
        self.bounds = config.bounds;
        self.steps = config.steps;
        self.top_mode = config.top_mode;
        self.invalidate();
        Ok(())
    }

    /// Applies a persisted top mode name.
    ///
    /// An absent or unparseable value keeps the current mode. A known mode
    /// that contradicts the bounds is rejected and also keeps the current mode.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::{ShapeConfig, ShapeState, TopMode};
    /// let mut state = ShapeState::new(ShapeConfig::default()).unwrap();
    /// state.load_top_mode(Some("LIMITMIN")).unwrap();
    /// assert_eq!(state.top_mode(), TopMode::LimitMin);
    /// state.load_top_mode(Some("sideways")).unwrap();
    /// assert_eq!(state.top_mode(), TopMode::LimitMin);
    /// ```
    pub fn load_top_mode(&mut self, raw: Option<&str>) -> SolverResult<()> {
        let Some(raw) = raw else {
            log::debug!("no persisted top mode, keeping {}", self.top_mode);
            return Ok(());
        };
        match raw.parse::<TopMode>() {
            Ok(mode) => {
                self.bounds.validate(mode)?;
                if mode != self.top_mode {
                    self.top_mode = mode;
                    self.invalidate();
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("{err}; keeping {}", self.top_mode);
                Ok(())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Edits the top diameter. Rejected in constant mode.
    pub fn set_top_diameter(&mut self, value: f64) -> SolverResult<()> {
        if self.top_mode == TopMode::Constant {
            return Err(SolverError::configuration(
                "top diameter is not editable in Constant mode",
            ));
        }
        check_input("top diameter", value)?;
        self.dimensions.top_diameter = value;
        self.last_edited = LastEdited::Top;
        Ok(())
    }

    /// Edits the bottom diameter.
    pub fn set_bottom_diameter(&mut self, value: f64) -> SolverResult<()> {
        check_input("bottom diameter", value)?;
        self.dimensions.bottom_diameter = value;
        self.last_edited = LastEdited::Bottom;
        Ok(())
    }

    /// Edits the length.
    pub fn set_length(&mut self, value: f64) -> SolverResult<()> {
        check_input("length", value)?;
        self.dimensions.length = value;
        self.last_edited = LastEdited::Length;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Current dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current top diameter.
    pub fn top_diameter(&self) -> f64 {
        self.dimensions.top_diameter
    }

    /// Current bottom diameter.
    pub fn bottom_diameter(&self) -> f64 {
        self.dimensions.bottom_diameter
    }

    /// Current length.
    pub fn length(&self) -> f64 {
        self.dimensions.length
    }

    /// Dimensions of the last resolved configuration.
    pub fn previous(&self) -> Option<Dimensions> {
        self.previous
    }

    /// The dimension edited since the last resolve cycle.
    pub fn last_edited(&self) -> LastEdited {
        self.last_edited
    }

    /// Top diameter behavior.
    pub fn top_mode(&self) -> TopMode {
        self.top_mode
    }

    /// Bound configuration.
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Editor increments.
    pub fn steps(&self) -> &StepSizes {
        &self.steps
    }

    /// Volume of the last resolved configuration.
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Number of profiles emitted so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// True when the dimensions differ from the last resolved snapshot.
    pub fn needs_resolve(&self) -> bool {
        self.previous != Some(self.dimensions)
    }

    /// The edit the next cycle acts on.
    ///
    /// An edit that left the dimensions at the resolved snapshot changed
    /// nothing, so a forced cycle treats it as no edit.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::{LastEdited, ShapeConfig, ShapeState};
    ///
    /// let mut state = ShapeState::new(ShapeConfig::default()).unwrap();
    /// state.set_length(2.0).unwrap();
    /// assert_eq!(state.pending_edit(), LastEdited::Length);
    /// ```
    pub fn pending_edit(&self) -> LastEdited {
        if self.needs_resolve() {
            self.last_edited
        } else {
            LastEdited::None
        }
    }

    /// Label for the bottom diameter field; constant mode has only one.
    pub fn bottom_label(&self) -> &'static str {
        match self.top_mode {
            TopMode::Constant => "Diameter",
            TopMode::CanZero | TopMode::LimitMin => "Bottom",
        }
    }

    /// Ranges the host wires into its dimension fields.
    ///
    /// The top field never exceeds the current bottom diameter.
    pub fn field_limits(&self) -> FieldLimits {
        let bounds = &self.bounds;
        let length = (bounds.length_min != bounds.length_max).then(|| FieldRange {
            min: bounds.length_min,
            max: bounds.length_max,
            large_step: self.steps.length_large,
            small_step: self.steps.length_small,
        });

        if bounds.diameter_min == bounds.diameter_max {
            return FieldLimits {
                top: None,
                bottom: None,
                length,
            };
        }

        let bottom = FieldRange {
            min: bounds.diameter_min,
            max: bounds.diameter_max,
            large_step: self.steps.diameter_large,
            small_step: self.steps.diameter_small,
        };
        let top = (self.top_mode != TopMode::Constant).then(|| FieldRange {
            min: bounds.top_floor(self.top_mode),
            max: self.dimensions.bottom_diameter,
            ..bottom
        });

        FieldLimits {
            top,
            bottom: Some(bottom),
            length,
        }
    }

    // -------------------------------------------------------------------------
    // Resolve cycle hooks
    // -------------------------------------------------------------------------

    /// Drops the resolved snapshot and any pending edit.
    fn invalidate(&mut self) {
        self.previous = None;
        self.last_edited = LastEdited::None;
    }

    /// Stores a resolved configuration and snapshots it as the new baseline.
    pub(crate) fn commit(&mut self, dimensions: Dimensions, volume: f64) {
        self.dimensions = dimensions;
        self.volume = volume;
        self.previous = Some(dimensions);
        self.last_edited = LastEdited::None;
        self.revision += 1;
    }
}

fn check_input(name: &str, value: f64) -> SolverResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(SolverError::configuration(format!(
            "{name} must be a finite non-negative number: {value}"
        )));
    }
    Ok(())
}
