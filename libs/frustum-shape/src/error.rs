//! # Error Types
//!
//! Error types for the frustum solver. Configuration problems surface when a
//! shape is configured or edited, unsolvable constraints are recovered inside
//! the resolve cycle, and degenerate geometry is always propagated.
//!
//! ## Error Policy
//!
//! - NO silent correction of contradictory configuration
//! - Unsolvable constraints leave the offending dimension untouched
//! - Degenerate geometry never produces a zero or NaN normal

use std::fmt;

use thiserror::Error;

// =============================================================================
// CONSTRAINT KINDS
// =============================================================================

/// The bound family an unsolvable condition refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Per-dimension diameter limits.
    Diameter,
    /// Per-dimension length limits.
    Length,
    /// Aspect (slope) range.
    Aspect,
    /// Volume range.
    Volume,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Constraint::Diameter => "diameter",
            Constraint::Length => "length",
            Constraint::Aspect => "aspect",
            Constraint::Volume => "volume",
        };
        f.write_str(name)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while configuring or resolving a frustum shape.
///
/// ## Example
///
/// ```rust
/// use frustum_shape::{Bounds, ShapeConfig, ShapeState, SolverError};
///
/// let config = ShapeConfig {
///     bounds: Bounds { diameter_min: 5.0, diameter_max: 1.0, ..Bounds::default() },
///     ..ShapeConfig::default()
/// };
/// match ShapeState::new(config) {
///     Err(SolverError::Configuration { message }) => assert!(message.contains("diameter")),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Contradictory bounds, an illegal mode combination or an invalid edit.
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the rejected configuration.
        message: String,
    },

    /// No physically valid dimension satisfies the constraint.
    #[error("Unsolvable {constraint} constraint: {message}")]
    UnsolvableConstraint {
        /// The bound family that could not be satisfied.
        constraint: Constraint,
        /// Description of the failed solve.
        message: String,
    },

    /// Zero length or zero diameters reached a computation that needs them.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// Description of the degenerate input.
        message: String,
    },
}

impl SolverError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates an unsolvable constraint error.
    pub fn unsolvable(constraint: Constraint, message: impl Into<String>) -> Self {
        Self::UnsolvableConstraint {
            constraint,
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Returns true for conditions the resolve cycle recovers from.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnsolvableConstraint { .. })
    }
}

impl From<config::constants::ConfigError> for SolverError {
    fn from(err: config::constants::ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;

// =============================================================================
// TESTS
// =============================================================================
