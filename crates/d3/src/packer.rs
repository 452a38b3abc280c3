//! Orientation search for grid-tiling a cuboid into a container.

use crate::geometry::Cuboid;
use cuboid_fit_core::solver::{Config, Solver};
use cuboid_fit_core::FitResult;

/// Score of one orientation of an item inside a container.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationFit {
    /// Position of the orientation in the item's rotation order.
    pub index: usize,
    /// The oriented item.
    pub orientation: Cuboid,
    /// Copies along each container axis (length, width, height).
    pub layout: [u64; 3],
    /// Total copies, the product of `layout`.
    pub count: u64,
    /// Percentage of the container volume filled.
    pub efficiency: f64,
}

/// Finds the orientation of a cuboid that tiles the most copies into a container.
///
/// Each orientation is replicated on a uniform grid, counting whole copies per
/// axis independently. Mixed orientations and leftover space are not considered.
#[derive(Debug, Clone, Default)]
pub struct CuboidPacker {
    config: Config,
}

impl CuboidPacker {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the copies of `orientation` that fit along each container axis.
    ///
    /// An axis holding more than `u64::MAX` copies saturates at `u64::MAX`.
    pub fn layout(orientation: &Cuboid, container: &Cuboid) -> [u64; 3] {
        let along = |space: f64, edge: f64| (space / edge).floor() as u64;
        [
            along(container.length(), orientation.length()),
            along(container.width(), orientation.width()),
            along(container.height(), orientation.height()),
        ]
    }

    /// Returns how many copies of `orientation` fit in `container` without rotating it.
    ///
    /// Saturates at `u64::MAX` instead of overflowing.
    pub fn count(orientation: &Cuboid, container: &Cuboid) -> u64 {
        grid_count(&Self::layout(orientation, container))
    }

    /// Scores every orientation allowed by the configuration, in rotation order.
    pub fn evaluate(&self, item: &Cuboid, container: &Cuboid) -> Vec<OrientationFit> {
        let container_volume = container.volume();

        item.rotations_for(self.config.orientation)
            .iter()
            .enumerate()
            .map(|(index, orientation)| {
                let layout = Self::layout(orientation, container);
                let count = grid_count(&layout);
                // Taken from the per-axis layout so a saturated count keeps its real efficiency.
                let copies: f64 = layout.iter().map(|&n| n as f64).product();
                let efficiency = 100.0 * (copies * orientation.volume()) / container_volume;

                log::debug!(
                    "orientation {} ({}) in {}: {}x{}x{} = {} copies",
                    index,
                    orientation,
                    container,
                    layout[0],
                    layout[1],
                    layout[2],
                    count
                );

                OrientationFit {
                    index,
                    orientation: orientation.clone(),
                    layout,
                    count,
                    efficiency,
                }
            })
            .collect()
    }

    /// Finds the orientation of `item` that fits the most copies in `container`.
    ///
    /// The first orientation to reach the maximum wins; later ties never replace
    /// it. When nothing fits, or the best efficiency is below the configured
    /// minimum, the no-fit result is returned.
    pub fn best(&self, item: &Cuboid, container: &Cuboid) -> FitResult<Cuboid> {
        let mut best: Option<OrientationFit> = None;
        for fit in self.evaluate(item, container) {
            if fit.count > best.as_ref().map_or(0, |b| b.count) {
                best = Some(fit);
            }
        }

        let Some(best) = best else {
            log::debug!("{} does not fit in {}", item, container);
            return FitResult::no_fit();
        };

        if best.efficiency < self.config.min_efficiency {
            log::debug!(
                "{} in {} reaches {:.2}%, below the {:.2}% minimum",
                item,
                container,
                best.efficiency,
                self.config.min_efficiency
            );
            return FitResult::no_fit();
        }

        let [nx, ny, nz] = best.layout;
        let orientation = &best.orientation;
        let occupied = Cuboid::from_edges(
            orientation.length() * nx as f64,
            orientation.width() * ny as f64,
            orientation.height() * nz as f64,
        );

        log::debug!(
            "best for {} in {}: {} x{} ({:.2}%)",
            item,
            container,
            orientation,
            best.count,
            best.efficiency
        );

        FitResult::fitted(best.count, best.efficiency, best.orientation, occupied, best.layout)
    }
}

fn grid_count(layout: &[u64; 3]) -> u64 {
    layout.iter().fold(1u64, |acc, &n| acc.saturating_mul(n))
}

impl Solver for CuboidPacker {
    type Geometry = Cuboid;

    fn best(&self, item: &Cuboid, container: &Cuboid) -> FitResult<Cuboid> {
        CuboidPacker::best(self, item, container)
    }

    fn config(&self) -> &Config {
        &self.config
    }
}
