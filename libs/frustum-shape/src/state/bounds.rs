//! Bound configuration supplied by the host for each shape.

use std::ops::RangeInclusive;

use config::constants::{
    DEFAULT_ASPECT_MAX, DEFAULT_ASPECT_MIN, DEFAULT_DIAMETER_LARGE_STEP, DEFAULT_DIAMETER_MAX,
    DEFAULT_DIAMETER_MIN, DEFAULT_DIAMETER_SMALL_STEP, DEFAULT_LENGTH_LARGE_STEP,
    DEFAULT_LENGTH_MAX, DEFAULT_LENGTH_MIN, DEFAULT_LENGTH_SMALL_STEP, DEFAULT_VOLUME_MAX,
    DEFAULT_VOLUME_MIN,
};
use serde::{Deserialize, Serialize};

use super::TopMode;
use crate::error::{SolverError, SolverResult};

/// Inclusive limits on the three dimensions, the aspect and the volume.
///
/// `aspect_max` and `volume_max` may be `+∞` (unconstrained).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bounds {
    /// Smallest allowed diameter.
    pub diameter_min: f64,
    /// Largest allowed diameter.
    pub diameter_max: f64,
    /// Smallest allowed length.
    pub length_min: f64,
    /// Largest allowed length.
    pub length_max: f64,
    /// Smallest allowed slope `(bottom - top) / length`.
    pub aspect_min: f64,
    /// Largest allowed slope.
    pub aspect_max: f64,
    /// Smallest allowed volume.
    pub volume_min: f64,
    /// Largest allowed volume.
    pub volume_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            diameter_min: DEFAULT_DIAMETER_MIN,
            diameter_max: DEFAULT_DIAMETER_MAX,
            length_min: DEFAULT_LENGTH_MIN,
            length_max: DEFAULT_LENGTH_MAX,
            aspect_min: DEFAULT_ASPECT_MIN,
            aspect_max: DEFAULT_ASPECT_MAX,
            volume_min: DEFAULT_VOLUME_MIN,
            volume_max: DEFAULT_VOLUME_MAX,
        }
    }
}

impl Bounds {
    /// True when the aspect range places no constraint on the shape.
    pub fn aspect_unconstrained(&self) -> bool {
        self.aspect_min == 0.0 && self.aspect_max == f64::INFINITY
    }

    /// True when the aspect range pins a single slope.
    pub fn aspect_fixed(&self) -> bool {
        self.aspect_min == self.aspect_max
    }

    /// Lowest top diameter allowed under `mode`.
    pub fn top_floor(&self, mode: TopMode) -> f64 {
        match mode {
            TopMode::CanZero => 0.0,
            TopMode::LimitMin | TopMode::Constant => self.diameter_min,
        }
    }

    /// Inclusive length limits.
    pub fn length_range(&self) -> RangeInclusive<f64> {
        self.length_min..=self.length_max
    }

    /// Inclusive bottom diameter limits.
    pub fn bottom_range(&self) -> RangeInclusive<f64> {
        self.diameter_min..=self.diameter_max
    }

    /// Inclusive top diameter limits under `mode`.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::{Bounds, TopMode};
    /// let bounds = Bounds::default();
    /// assert!(bounds.top_range(TopMode::CanZero).contains(&0.0));
    /// assert!(!bounds.top_range(TopMode::LimitMin).contains(&0.0));
    /// ```
    pub fn top_range(&self, mode: TopMode) -> RangeInclusive<f64> {
        self.top_floor(mode)..=self.diameter_max
    }

    /// Rejects contradictory bounds and illegal mode combinations.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::{Bounds, TopMode};
    /// assert!(Bounds::default().validate(TopMode::CanZero).is_ok());
    /// // A constant top needs a fixed slope.
    /// assert!(Bounds::default().validate(TopMode::Constant).is_err());
    /// ```
    pub fn validate(&self, mode: TopMode) -> SolverResult<()> {
        check_range("diameter", self.diameter_min, self.diameter_max)?;
        check_range("length", self.length_min, self.length_max)?;
        check_range("aspect", self.aspect_min, self.aspect_max)?;
        check_range("volume", self.volume_min, self.volume_max)?;

        for (name, min) in [
            ("diameter", self.diameter_min),
            ("length", self.length_min),
            ("volume", self.volume_min),
        ] {
            if min < 0.0 {
                return Err(SolverError::configuration(format!(
                    "{name} minimum must not be negative: {min}"
                )));
            }
        }

        if mode == TopMode::Constant && !self.aspect_fixed() {
            return Err(SolverError::configuration(format!(
                "Constant top mode requires a fixed aspect, got [{}, {}]",
                self.aspect_min, self.aspect_max
            )));
        }
        Ok(())
    }
}

fn check_range(name: &str, min: f64, max: f64) -> SolverResult<()> {
    if min.is_nan() || max.is_nan() {
        return Err(SolverError::configuration(format!(
            "{name} bounds must be numbers"
        )));
    }
    if !min.is_finite() {
        return Err(SolverError::configuration(format!(
            "{name} minimum must be finite: {min}"
        )));
    }
    if min > max {
        return Err(SolverError::configuration(format!(
            "{name} minimum {min} exceeds maximum {max}"
        )));
    }
    Ok(())
}

/// Editor increments handed through to the host. Never validated here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StepSizes {
    /// Large diameter increment.
    pub diameter_large: f64,
    /// Small diameter increment.
    pub diameter_small: f64,
    /// Large length increment.
    pub length_large: f64,
    /// Small length increment.
    pub length_small: f64,
}

impl Default for StepSizes {
    fn default() -> Self {
        Self {
            diameter_large: DEFAULT_DIAMETER_LARGE_STEP,
            diameter_small: DEFAULT_DIAMETER_SMALL_STEP,
            length_large: DEFAULT_LENGTH_LARGE_STEP,
            length_small: DEFAULT_LENGTH_SMALL_STEP,
        }
    }
}

/// Everything the host supplies when a shape is instantiated or reconfigured.
///
/// # Examples
/// ```
/// use frustum_shape::{ShapeConfig, TopMode};
/// let config: ShapeConfig = serde_json::from_str(
///     r#"{ "topMode": "limitmin", "bounds": { "lengthMax": 4.0 } }"#,
/// ).unwrap();
/// assert_eq!(config.top_mode, TopMode::LimitMin);
/// assert_eq!(config.bounds.length_max, 4.0);
/// assert_eq!(config.bounds.diameter_max, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeConfig {
    /// Bound ranges.
    pub bounds: Bounds,
    /// Editor increments.
    pub steps: StepSizes,
    /// Top diameter behavior.
    pub top_mode: TopMode,
}

impl ShapeConfig {
    /// Validates the bounds against the top mode.
    pub fn validate(&self) -> SolverResult<()> {
        self.bounds.validate(self.top_mode)
    }
}
