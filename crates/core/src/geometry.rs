//! Core geometry traits and types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Orientation constraint for axis-aligned placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OrientationConstraint {
    /// Any orientation allowed (6 axis-aligned rotations for boxes).
    #[default]
    Any,
    /// Only upright orientations (2 rotations: original and swapped footprint).
    Upright,
    /// Fixed orientation (no rotation allowed).
    Fixed,
}

impl OrientationConstraint {
    /// Maximum number of rotations this constraint admits.
    pub fn max_rotations(&self) -> usize {
        match self {
            Self::Any => 6,
            Self::Upright => 2,
            Self::Fixed => 1,
        }
    }
}

/// Trait for solids that can be fitted into a container.
pub trait Geometry: Clone + Send + Sync {
    /// Returns the volume of this geometry.
    fn measure(&self) -> f64;

    /// Returns the canonical textual description of this geometry.
    fn signature(&self) -> &str;
}
