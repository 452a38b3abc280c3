//! Canonical descending-edge construction.

use crate::geometry::{check_edges, Cuboid};
use cuboid_fit_core::Result;

impl Cuboid {
    /// Creates a cuboid whose edges are sorted so that
    /// `length >= width >= height`, whatever order they are given in.
    ///
    /// Validation reports the axis as it was passed in, before sorting.
    pub fn regularised(length: f64, width: f64, height: f64) -> Result<Self> {
        regularised(length, width, height)
    }

    /// Returns true if `length >= width >= height`.
    pub fn is_regularised(&self) -> bool {
        self.length() >= self.width() && self.width() >= self.height()
    }
}

/// Creates a cuboid with its edges in descending order.
///
/// See [`Cuboid::regularised`].
pub fn regularised(length: f64, width: f64, height: f64) -> Result<Cuboid> {
    check_edges(length, width, height)?;

    let mut edges = [length, width, height];
    edges.sort_by(f64::total_cmp);
    let [min, mid, max] = edges;

    Cuboid::new(max, mid, min)
}
