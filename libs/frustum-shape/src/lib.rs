//! # Frustum Shape
//!
//! Constraint solver for a truncated-cone (frustum) shape driven by three
//! coupled dimensions: top diameter, bottom diameter and length. The solver
//! keeps them within per-dimension limits, an aspect (slope) range and a
//! volume range, then emits the two-ring profile that mesh building revolves
//! into geometry.
//!
//! ## Architecture
//!
//! ```text
//! ShapeState (edits, bounds, top mode)
//!       ↓
//! resolve: clamp → aspect::maintain_aspect → volume::solve_volume
//!       ↓
//! profile::emit → (bottom ring, top ring) + volume
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use frustum_shape::{Bounds, FrustumSolver, ResolveMode, ShapeConfig, ShapeState};
//!
//! let config = ShapeConfig {
//!     bounds: Bounds { volume_max: 1.0, ..Bounds::default() },
//!     ..ShapeConfig::default()
//! };
//! let mut state = ShapeState::new(config)?;
//! state.set_top_diameter(0.0)?;
//! state.set_bottom_diameter(2.0)?;
//! state.set_length(2.0)?;
//!
//! let solver = FrustumSolver::default();
//! let resolution = solver
//!     .resolve_if_changed(&mut state, false, ResolveMode::Interactive)?
//!     .expect("dimensions changed");
//!
//! // The length was edited last, so the length gives way to the volume limit.
//! assert!(state.length() < 0.955);
//! assert_eq!(resolution.volume, 1.0);
//! assert_eq!(resolution.bottom.tex_coord_v, 0.0);
//! # Ok::<(), frustum_shape::SolverError>(())
//! ```

pub mod aspect;
pub mod config;
pub mod error;
pub mod profile;
pub mod resolve;
pub mod state;
pub mod volume;

pub use crate::config::SolverConfig;
pub use error::{Constraint, SolverError, SolverResult};
pub use profile::ProfilePoint;
pub use resolve::{FrustumSolver, Resolution, ResolveMode};
pub use state::{
    Bounds, Dimensions, FieldLimits, FieldRange, LastEdited, ParseTopModeError, ShapeConfig,
    ShapeState, StepSizes, TopMode,
};
