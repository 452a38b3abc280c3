//! # Cuboid Fit
//!
//! Scores how well a box tiles a container.
//!
//! For a box and a container, the engine tries every axis-aligned rotation of
//! the box, replicates it on a uniform grid, and reports the rotation that fits
//! the most whole copies together with the volume efficiency and the occupied
//! block. It is an estimation utility, not a bin packer: mixed orientations and
//! leftover space are never considered.
//!
//! ## Quick Start
//!
//! ```rust
//! use cuboid_fit::d3::{regularised, Cuboid, CuboidPacker};
//!
//! let container = Cuboid::new(30.0, 40.0, 50.0)?;
//! let item = regularised(3.0, 7.0, 5.0)?;
//!
//! let result = CuboidPacker::default_config().best(&item, &container);
//! println!("{} x{} ({:.1}%)", result.rotation_signature, result.count, result.efficiency);
//! # Ok::<(), cuboid_fit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core traits and abstractions.
pub use cuboid_fit_core as core;

/// 3D orientation fitting.
pub use cuboid_fit_d3 as d3;

// Re-export commonly used types at root level
pub use cuboid_fit_core::{Config, Error, FitResult, OrientationConstraint, Result, Solver};
pub use cuboid_fit_d3::{Cuboid, CuboidPacker};
