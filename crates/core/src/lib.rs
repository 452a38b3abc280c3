//! # Cuboid Fit Core
//!
//! Core traits and abstractions for the cuboid orientation fitting engine.
//!
//! This crate provides the foundational types shared by the 3D fitting
//! algorithms and the tools built on top of them.
//!
//! ## Core Components
//!
//! - **Geometry trait**: `Geometry`, plus the `OrientationConstraint` policy
//! - **Solver trait**: Common interface and `Config` for fitting algorithms
//! - **Result type**: `FitResult`, the outcome of one item/container pairing
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Geometry, OrientationConstraint};
pub use result::{FitResult, NO_FIT_SIGNATURE};
pub use solver::{Config, Solver};
