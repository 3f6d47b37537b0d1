//! # Config Crate
//!
//! Centralized configuration constants for the frustum shape solver.
//! All magic numbers and tunable parameters are defined here so the solver
//! components stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{snap_to_grid, SNAP_GRID, DEFAULT_LENGTH};
//!
//! // Maintained dimensions snap to a fixed grid
//! let length = snap_to_grid(0.95493, SNAP_GRID);
//! assert!((length - 0.955).abs() < 1e-12);
//!
//! // New shapes start from the default dimensions
//! assert_eq!(DEFAULT_LENGTH, 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and validation
//! - **Host Compatible**: Defaults match the procedural cone part

pub mod constants;
