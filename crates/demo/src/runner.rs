//! Pairwise runner over a catalog.

use crate::catalog::Catalog;
use crate::parser::CatalogError;
use crate::result::{BestContainer, PairReport, RunReport};
use cuboid_fit::{Config, CuboidPacker, Solver};

/// Fits every box of a catalog into every container.
#[derive(Debug, Clone, Default)]
pub struct FitRunner {
    packer: CuboidPacker,
}

impl FitRunner {
    /// Creates a runner whose packer uses `config`.
    pub fn new(config: Config) -> Self {
        Self {
            packer: CuboidPacker::new(config),
        }
    }

    /// Runs `best` for each (box, container) pair, grouped by container.
    pub fn run(&self, catalog: &Catalog) -> Result<RunReport, CatalogError> {
        let containers = catalog.container_cuboids()?;
        let boxes = catalog.box_cuboids()?;

        log::info!(
            "Running catalog '{}': {} containers x {} boxes",
            catalog.name,
            containers.len(),
            boxes.len()
        );

        let mut report = RunReport::new(catalog.name.clone());
        for container in &containers {
            for item in &boxes {
                let result = self.packer.best(item, container);
                report.add_pair(PairReport::new(item, container, &result));
            }
        }

        for item in &boxes {
            let best = match self.packer.best_container(item, &containers) {
                Some((index, result)) => BestContainer {
                    item: item.signature().to_string(),
                    container: Some(containers[index].signature().to_string()),
                    efficiency: result.efficiency,
                },
                None => BestContainer {
                    item: item.signature().to_string(),
                    container: None,
                    efficiency: 0.0,
                },
            };
            report.best_containers.push(best);
        }

        log::info!(
            "Finished '{}': {} of {} pairs fit",
            catalog.name,
            report.fitted_count(),
            report.pairs.len()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogConfig;
    use approx::assert_relative_eq;
    use cuboid_fit::OrientationConstraint;

    #[test]
    fn test_illustrative_run() {
        let report = FitRunner::default().run(&Catalog::illustrative()).unwrap();

        assert_eq!(report.pairs.len(), 2);

        let rect = &report.pairs[0];
        assert_eq!(rect.container, "30x40x50");
        assert_eq!(rect.item, "7x5x3");
        assert_eq!(rect.count, 560);
        assert_eq!(rect.rotation, "3x5x7");
        assert_eq!(rect.occupied.as_deref(), Some("30x40x49"));
        assert_relative_eq!(rect.efficiency, 98.0, epsilon = 1e-9);

        let cube = &report.pairs[1];
        assert_eq!(cube.count, 480);
        assert_eq!(cube.rotation, "5x5x5");

        assert_eq!(report.best_containers.len(), 2);
        assert_eq!(report.best_containers[0].container.as_deref(), Some("30x40x50"));
    }

    #[test]
    fn test_fixed_orientation_run() {
        let runner = FitRunner::new(Config::new().with_orientation(OrientationConstraint::Fixed));
        let report = runner.run(&Catalog::illustrative()).unwrap();
        assert_eq!(report.pairs[0].count, 512);
        assert_eq!(report.pairs[0].occupied.as_deref(), Some("28x40x48"));
    }

    #[test]
    fn test_random_run_covers_every_pair() {
        let catalog = Catalog::random(&CatalogConfig::new().with_containers(4).with_boxes(6));
        let report = FitRunner::default().run(&catalog).unwrap();

        assert_eq!(report.pairs.len(), catalog.pair_count());
        assert_eq!(report.best_containers.len(), 6);
        // Boxes never exceed 30 while containers start at 40.
        assert_eq!(report.fitted_count(), report.pairs.len());
    }

    #[test]
    fn test_unfit_box_has_no_best_container() {
        let catalog = Catalog {
            name: "tight".into(),
            containers: vec![[10.0, 10.0, 10.0]],
            boxes: vec![[100.0, 100.0, 100.0]],
            regularise: true,
        };
        let report = FitRunner::default().run(&catalog).unwrap();

        assert_eq!(report.pairs[0].rotation, "N/A");
        assert!(report.pairs[0].occupied.is_none());
        assert_eq!(report.best_containers[0].container, None);
    }
}
