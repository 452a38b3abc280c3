//! 3D cuboid geometry.

use crate::format::format_general;
use cuboid_fit_core::geometry::{Geometry, OrientationConstraint};
use cuboid_fit_core::{Error, Result};

use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Irregularity below which a cuboid is treated as a cube.
pub const CUBE_TOLERANCE: f64 = 1e-6;

/// Axis permutations in enumeration order. Each entry is
/// (length_axis, width_axis, height_axis) into the source edges.
const ROTATION_AXES: [[usize; 3]; 6] = [
    [0, 1, 2], // length, width, height
    [1, 0, 2], // width, length, height
    [1, 2, 0], // width, height, length
    [2, 1, 0], // height, width, length
    [0, 2, 1], // length, height, width
    [2, 0, 1], // height, length, width
];

/// An axis-aligned rectangular solid.
///
/// Edges are fixed at construction. The signature, volume, irregularity and
/// rotation set are computed on first access and cached for the lifetime of
/// the value.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Dimensions", into = "Dimensions"))]
pub struct Cuboid {
    length: f64,
    width: f64,
    height: f64,

    signature: OnceLock<String>,
    volume: OnceLock<f64>,
    irregularity: OnceLock<f64>,
    rotations: OnceLock<Vec<Cuboid>>,
}

impl Cuboid {
    /// Creates a new cuboid with the given edges.
    ///
    /// Fails with [`Error::InvalidDimension`] if any edge is not a positive
    /// finite number.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self> {
        check_edges(length, width, height)?;
        Ok(Self::from_edges(length, width, height))
    }

    /// Builds a cuboid from edges that are already known to be valid.
    pub(crate) fn from_edges(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
            signature: OnceLock::new(),
            volume: OnceLock::new(),
            irregularity: OnceLock::new(),
            rotations: OnceLock::new(),
        }
    }

    /// Returns the length (first axis).
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the width (second axis).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height (third axis).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the edges as `[length, width, height]`.
    pub fn edges(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }

    /// Returns the compact description, e.g. `"30x40x50"`.
    pub fn signature(&self) -> &str {
        self.signature.get_or_init(|| {
            let signature = format!(
                "{}x{}x{}",
                format_general(self.length),
                format_general(self.width),
                format_general(self.height)
            );
            log::trace!("cached signature {}", signature);
            signature
        })
    }

    /// Returns length × width × height.
    pub fn volume(&self) -> f64 {
        *self
            .volume
            .get_or_init(|| self.length * self.width * self.height)
    }

    /// Returns the squared deviation of the edges from a cube of equal volume.
    pub fn irregularity(&self) -> f64 {
        *self.irregularity.get_or_init(|| {
            let ideal = self.volume().cbrt();
            let irregularity: f64 = self
                .edges()
                .iter()
                .map(|edge| (edge - ideal).powi(2))
                .sum();
            log::trace!("cached irregularity {} for {}", irregularity, self.signature());
            irregularity
        })
    }

    /// Returns true if the cuboid is a cube within [`CUBE_TOLERANCE`].
    pub fn is_cube(&self) -> bool {
        self.irregularity() < CUBE_TOLERANCE
    }

    /// Returns the distinct axis-aligned orientations of this cuboid.
    ///
    /// A cube has a single orientation. Any other cuboid has six, ordered:
    /// (l, w, h), (w, l, h), (w, h, l), (h, w, l), (l, h, w), (h, l, w).
    /// Packing ties are broken by this order.
    pub fn rotations(&self) -> &[Cuboid] {
        self.rotations.get_or_init(|| {
            let axes: &[[usize; 3]] = if self.is_cube() {
                &ROTATION_AXES[..1]
            } else {
                &ROTATION_AXES
            };
            axes.iter().map(|&axes| self.permuted(axes)).collect()
        })
    }

    /// Returns the orientations admitted by a constraint, in enumeration order.
    pub fn rotations_for(&self, constraint: OrientationConstraint) -> &[Cuboid] {
        let rotations = self.rotations();
        &rotations[..constraint.max_rotations().min(rotations.len())]
    }

    fn permuted(&self, [x, y, z]: [usize; 3]) -> Self {
        let edges = self.edges();
        Self::from_edges(edges[x], edges[y], edges[z])
    }
}

pub(crate) fn check_edges(length: f64, width: f64, height: f64) -> Result<()> {
    for (axis, value) in [("length", length), ("width", width), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::invalid_dimension(axis, value));
        }
    }
    Ok(())
}

impl PartialEq for Cuboid {
    fn eq(&self, other: &Self) -> bool {
        self.edges() == other.edges()
    }
}

impl fmt::Debug for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cuboid")
            .field("length", &self.length)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl fmt::Display for Cuboid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.signature())
    }
}

impl Geometry for Cuboid {
    fn measure(&self) -> f64 {
        self.volume()
    }

    fn signature(&self) -> &str {
        Cuboid::signature(self)
    }
}

/// Plain edge triple used as the serialized form of a [`Cuboid`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Dimensions {
    length: f64,
    width: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<Dimensions> for Cuboid {
    type Error = Error;

    fn try_from(dims: Dimensions) -> Result<Self> {
        Cuboid::new(dims.length, dims.width, dims.height)
    }
}

#[cfg(feature = "serde")]
impl From<Cuboid> for Dimensions {
    fn from(cuboid: Cuboid) -> Self {
        Self {
            length: cuboid.length,
            width: cuboid.width,
            height: cuboid.height,
        }
    }
}
