//! Fit result representation.

use crate::geometry::Geometry;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation signature reported when no orientation fits.
pub const NO_FIT_SIGNATURE: &str = "N/A";

/// Result of fitting one item into one container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitResult<G> {
    /// Number of whole copies placed on the grid.
    pub count: u64,

    /// Signature of the winning orientation, or [`NO_FIT_SIGNATURE`].
    pub rotation_signature: String,

    /// Percentage of the container volume filled (0 - 100).
    pub efficiency: f64,

    /// Sub-block of the container covered by the copies.
    pub occupied_block: Option<G>,

    /// The winning orientation.
    pub orientation: Option<G>,

    /// Copies along each container axis (length, width, height).
    pub layout: [u64; 3],
}

impl<G> FitResult<G> {
    /// Creates the result for an item that does not fit in any orientation.
    pub fn no_fit() -> Self {
        Self {
            count: 0,
            rotation_signature: NO_FIT_SIGNATURE.to_string(),
            efficiency: 0.0,
            occupied_block: None,
            orientation: None,
            layout: [0, 0, 0],
        }
    }

    /// Returns true if at least one copy fits.
    pub fn is_fit(&self) -> bool {
        self.count > 0
    }
}

impl<G: Geometry> FitResult<G> {
    /// Creates the result for a winning orientation.
    pub fn fitted(
        count: u64,
        efficiency: f64,
        orientation: G,
        occupied_block: G,
        layout: [u64; 3],
    ) -> Self {
        Self {
            count,
            rotation_signature: orientation.signature().to_string(),
            efficiency,
            occupied_block: Some(occupied_block),
            orientation: Some(orientation),
            layout,
        }
    }
}

impl<G> Default for FitResult<G> {
    fn default() -> Self {
        Self::no_fit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fit() {
        let result: FitResult<()> = FitResult::no_fit();
        assert_eq!(result.count, 0);
        assert_eq!(result.rotation_signature, "N/A");
        assert_eq!(result.efficiency, 0.0);
        assert!(result.occupied_block.is_none());
        assert!(result.orientation.is_none());
        assert!(!result.is_fit());
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Slab(f64);

    impl Geometry for Slab {
        fn measure(&self) -> f64 {
            self.0
        }

        fn signature(&self) -> &str {
            "slab"
        }
    }

    #[test]
    fn test_fitted_takes_orientation_signature() {
        let result = FitResult::fitted(4, 80.0, Slab(2.0), Slab(8.0), [4, 1, 1]);
        assert!(result.is_fit());
        assert_eq!(result.rotation_signature, "slab");
        assert_eq!(result.occupied_block, Some(Slab(8.0)));
        assert_eq!(result.orientation, Some(Slab(2.0)));
        assert_eq!(result.layout, [4, 1, 1]);
    }

    #[test]
    fn test_default_is_no_fit() {
        let result: FitResult<()> = FitResult::default();
        assert_eq!(result, FitResult::no_fit());
    }
}
