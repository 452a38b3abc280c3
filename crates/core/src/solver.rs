//! Solver traits and configuration.

use crate::geometry::{Geometry, OrientationConstraint};
use crate::result::FitResult;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for fitting solvers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Which rotations of the item may be tried.
    pub orientation: OrientationConstraint,

    /// Minimum efficiency in percent (0 - 100). Fits below it are reported as no fit.
    pub min_efficiency: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orientation: OrientationConstraint::default(),
            min_efficiency: 0.0,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation constraint.
    pub fn with_orientation(mut self, orientation: OrientationConstraint) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the minimum efficiency in percent.
    pub fn with_min_efficiency(mut self, percent: f64) -> Self {
        self.min_efficiency = percent.clamp(0.0, 100.0);
        self
    }

    /// Checks that the configuration values are usable.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.min_efficiency) {
            return Err(Error::ConfigError(format!(
                "min_efficiency must be within 0..=100, got {}",
                self.min_efficiency
            )));
        }
        Ok(())
    }
}

/// Trait for orientation-fitting solvers.
pub trait Solver {
    /// The geometry type this solver handles.
    type Geometry: Geometry;

    /// Finds the best fit of `item` inside `container`.
    fn best(&self, item: &Self::Geometry, container: &Self::Geometry) -> FitResult<Self::Geometry>;

    /// Picks the container that `item` fills most efficiently.
    ///
    /// Returns the container index with its result. The first container to
    /// reach the highest efficiency wins. Containers with less volume than the
    /// item are skipped. Returns `None` if no container fits.
    fn best_container(
        &self,
        item: &Self::Geometry,
        containers: &[Self::Geometry],
    ) -> Option<(usize, FitResult<Self::Geometry>)> {
        let mut best: Option<(usize, FitResult<Self::Geometry>)> = None;
        for (index, container) in containers.iter().enumerate() {
            if container.measure() < item.measure() {
                continue;
            }
            let result = self.best(item, container);
            if !result.is_fit() {
                continue;
            }
            let better = best
                .as_ref()
                .map_or(true, |(_, current)| result.efficiency > current.efficiency);
            if better {
                best = Some((index, result));
            }
        }
        best
    }

    /// Returns the configuration in use.
    fn config(&self) -> &Config;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_orientation(OrientationConstraint::Upright)
            .with_min_efficiency(50.0);
        assert_eq!(config.orientation, OrientationConstraint::Upright);
        assert_eq!(config.min_efficiency, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_min_efficiency_is_clamped() {
        assert_eq!(Config::new().with_min_efficiency(250.0).min_efficiency, 100.0);
        assert_eq!(Config::new().with_min_efficiency(-3.0).min_efficiency, 0.0);
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = Config {
            min_efficiency: f64::NAN,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }
}
