//! Solver-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so solver components can
//! stay decoupled from literal constants.

use config::constants::{GlobalConfig, EPSILON_TOLERANCE, SNAP_GRID};

use crate::error::SolverResult;

/// Numeric settings for one solver instance.
///
/// # Examples
/// ```
/// use frustum_shape::config::SolverConfig;
/// let cfg = SolverConfig::default();
/// assert_eq!(cfg.snap_grid, 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance used by the final bound check.
    pub tolerance: f64,
    /// Grid that aspect-maintained dimensions snap to.
    pub snap_grid: f64,
}

impl SolverConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use frustum_shape::config::SolverConfig;
    /// let cfg = SolverConfig::new(1.0e-8, 0.01).unwrap();
    /// assert_eq!(cfg.snap_grid, 0.01);
    /// assert!(SolverConfig::new(1.0e-8, 0.0).is_err());
    /// ```
    pub fn new(tolerance: f64, snap_grid: f64) -> SolverResult<Self> {
        let cfg = GlobalConfig::new(tolerance, snap_grid)?;
        Ok(Self {
            tolerance: cfg.tolerance,
            snap_grid: cfg.snap_grid,
        })
    }

    /// Slack allowed on the aspect bound for a shape of the given length and
    /// slope.
    ///
    /// Snapping a diameter or the length moves the slope by up to half a grid
    /// step over the length, scaled by the slope itself for the length.
    pub fn aspect_slack(&self, length: f64, aspect: f64) -> f64 {
        if length > 0.0 && aspect.is_finite() {
            self.snap_grid * (1.0 + aspect.abs()) / length + self.tolerance
        } else {
            self.tolerance
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            snap_grid: SNAP_GRID,
        }
    }
}
