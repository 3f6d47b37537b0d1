//! # Configuration Constants
//!
//! Centralized constants for the frustum shape solver. Precision values,
//! default dimensions and default bound ranges are defined here so the solver
//! crate never carries literal numbers.
//!
//! ## Categories
//!
//! - **Precision**: snapping grid and floating-point tolerances
//! - **Dimensions**: default top/bottom diameter and length of a new shape
//! - **Bounds**: default per-dimension, aspect and volume ranges
//! - **Steps**: default editor increments handed through to the host

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Grid that aspect-maintained dimensions are snapped to.
///
/// Snapping keeps repeated edits from accumulating floating-point drift.
///
/// # Examples
/// ```
/// use config::constants::{snap_to_grid, SNAP_GRID};
/// assert!((snap_to_grid(1.23449, SNAP_GRID) - 1.234).abs() < 1e-12);
/// ```
pub const SNAP_GRID: f64 = 0.001;

/// Numerical tolerance used when checking bound satisfaction.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

/// Relative tolerance for comparing a solved volume against its target.
///
/// # Examples
/// ```
/// use config::constants::VOLUME_RELATIVE_TOLERANCE;
/// assert!(VOLUME_RELATIVE_TOLERANCE <= 1.0e-4);
/// ```
pub const VOLUME_RELATIVE_TOLERANCE: f64 = 1.0e-6;

// =============================================================================
// DIMENSION DEFAULTS
// =============================================================================

/// Default top diameter of a freshly created shape.
pub const DEFAULT_TOP_DIAMETER: f64 = 1.25;

/// Default bottom diameter of a freshly created shape.
pub const DEFAULT_BOTTOM_DIAMETER: f64 = 1.25;

/// Default axial length of a freshly created shape.
pub const DEFAULT_LENGTH: f64 = 1.0;

// =============================================================================
// BOUND DEFAULTS
// =============================================================================

/// Default lower limit for both diameters.
pub const DEFAULT_DIAMETER_MIN: f64 = 0.25;

/// Default upper limit for both diameters.
pub const DEFAULT_DIAMETER_MAX: f64 = 10.0;

/// Default lower limit for the length.
pub const DEFAULT_LENGTH_MIN: f64 = 0.25;

/// Default upper limit for the length.
pub const DEFAULT_LENGTH_MAX: f64 = 10.0;

/// Default lower aspect limit. Together with an infinite maximum the aspect
/// ratio is unconstrained.
pub const DEFAULT_ASPECT_MIN: f64 = 0.0;

/// Default upper aspect limit.
pub const DEFAULT_ASPECT_MAX: f64 = f64::INFINITY;

/// Default lower volume limit.
pub const DEFAULT_VOLUME_MIN: f64 = 0.0;

/// Default upper volume limit.
pub const DEFAULT_VOLUME_MAX: f64 = f64::INFINITY;

// =============================================================================
// STEP DEFAULTS
// =============================================================================

/// Default large increment for diameter editing.
pub const DEFAULT_DIAMETER_LARGE_STEP: f64 = 1.25;

/// Default small increment for diameter editing.
pub const DEFAULT_DIAMETER_SMALL_STEP: f64 = 0.25;

/// Default large increment for length editing.
pub const DEFAULT_LENGTH_LARGE_STEP: f64 = 1.0;

/// Default small increment for length editing.
pub const DEFAULT_LENGTH_SMALL_STEP: f64 = 0.25;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the numeric settings shared by solver components.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.snap_grid, 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Absolute tolerance used by bound checks.
    pub tolerance: f64,
    /// Grid that maintained dimensions snap to.
    pub snap_grid: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and snapping grid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.01).expect("valid config");
    /// assert_eq!(cfg.snap_grid, 0.01);
    /// ```
    pub fn new(tolerance: f64, snap_grid: f64) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0) || !tolerance.is_finite() {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(snap_grid > 0.0) || !snap_grid.is_finite() {
            return Err(ConfigError::InvalidSnapGrid(snap_grid));
        }
        Ok(Self {
            tolerance,
            snap_grid,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            snap_grid: SNAP_GRID,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the snapping grid is zero, negative or not finite.
    InvalidSnapGrid(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidSnapGrid(value) => {
                write!(f, "snap grid must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Rounds `value` to the nearest multiple of `grid`.
///
/// # Examples
/// ```
/// use config::constants::snap_to_grid;
/// assert!((snap_to_grid(0.95493, 0.001) - 0.955).abs() < 1e-12);
/// assert_eq!(snap_to_grid(2.2, 0.5), 2.0);
/// ```
#[inline]
pub fn snap_to_grid(value: f64, grid: f64) -> f64 {
    let inverse = 1.0 / grid;
    (value * inverse).round() / inverse
}

/// Checks if two values are equal within a tolerance relative to the larger
/// magnitude.
///
/// # Examples
/// ```
/// use config::constants::relative_equal;
/// assert!(relative_equal(1000.0, 1000.0001, 1.0e-6));
/// assert!(!relative_equal(1.0, 1.01, 1.0e-6));
/// ```
#[inline]
pub fn relative_equal(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}
