//! # Cuboid Fit 3D
//!
//! Axis-aligned orientation fitting for the cuboid fit engine.
//!
//! This crate provides the [`Cuboid`] solid, its canonical descending-edge
//! constructor, and [`CuboidPacker`], which picks the rotation of a cuboid
//! that grid-tiles the most copies into a container.
//!
//! ```
//! use cuboid_fit_d3::{Cuboid, CuboidPacker};
//!
//! let item = Cuboid::new(7.0, 5.0, 3.0)?;
//! let container = Cuboid::new(30.0, 40.0, 50.0)?;
//!
//! let result = CuboidPacker::default_config().best(&item, &container);
//! assert_eq!(result.count, 560);
//! assert_eq!(result.rotation_signature, "3x5x7");
//! # Ok::<(), cuboid_fit_d3::Error>(())
//! ```

pub mod format;
pub mod geometry;
pub mod packer;
pub mod regularised;

// Re-exports
pub use geometry::{Cuboid, CUBE_TOLERANCE};
pub use packer::{CuboidPacker, OrientationFit};
pub use regularised::regularised;
pub use cuboid_fit_core::{
    Config, Error, FitResult, OrientationConstraint, Result, Solver, NO_FIT_SIGNATURE,
};
