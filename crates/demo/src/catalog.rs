//! Container and box catalogs fed to the runner.

use crate::parser::CatalogError;
use cuboid_fit::d3::regularised;
use cuboid_fit::Cuboid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Settings for generating a random catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// Number of containers to generate.
    pub containers: usize,
    /// Number of boxes to generate.
    pub boxes: usize,
    /// Inclusive edge range for containers.
    pub container_edges: (u32, u32),
    /// Inclusive edge range for boxes.
    pub box_edges: (u32, u32),
    /// RNG seed.
    pub seed: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            containers: 3,
            boxes: 5,
            container_edges: (40, 120),
            box_edges: (1, 30),
            seed: 42,
        }
    }
}

impl CatalogConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of containers.
    pub fn with_containers(mut self, n: usize) -> Self {
        self.containers = n;
        self
    }

    /// Sets the number of boxes.
    pub fn with_boxes(mut self, n: usize) -> Self {
        self.boxes = n;
        self
    }

    /// Sets the inclusive container edge range.
    pub fn with_container_edges(mut self, min: u32, max: u32) -> Self {
        self.container_edges = (min.min(max), min.max(max));
        self
    }

    /// Sets the inclusive box edge range.
    pub fn with_box_edges(mut self, min: u32, max: u32) -> Self {
        self.box_edges = (min.min(max), min.max(max));
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A named set of containers and boxes, stored as plain edge triples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Catalog name
    pub name: String,
    /// Container edges (length, width, height)
    pub containers: Vec<[f64; 3]>,
    /// Box edges (length, width, height)
    pub boxes: Vec<[f64; 3]>,
    /// Sort box edges into descending order before fitting
    #[serde(default = "default_regularise")]
    pub regularise: bool,
}

fn default_regularise() -> bool {
    true
}

impl Catalog {
    /// Generates a reproducible catalog with integer edges.
    pub fn random(config: &CatalogConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);

        let containers = (0..config.containers)
            .map(|_| random_edges(&mut rng, config.container_edges))
            .collect();
        let boxes = (0..config.boxes)
            .map(|_| random_edges(&mut rng, config.box_edges))
            .collect();

        Self {
            name: format!("random-{}", config.seed),
            containers,
            boxes,
            regularise: true,
        }
    }

    /// The fixed walkthrough: a 7x5x3 box and a cube of edge 5 in a 30x40x50 container.
    pub fn illustrative() -> Self {
        Self {
            name: "illustrative".to_string(),
            containers: vec![[30.0, 40.0, 50.0]],
            boxes: vec![[7.0, 5.0, 3.0], [5.0, 5.0, 5.0]],
            regularise: true,
        }
    }

    /// Builds the container cuboids, validating every edge.
    pub fn container_cuboids(&self) -> Result<Vec<Cuboid>, CatalogError> {
        self.containers
            .iter()
            .enumerate()
            .map(|(i, &[l, w, h])| {
                Cuboid::new(l, w, h).map_err(|source| CatalogError::InvalidDimension {
                    entry: format!("container #{}", i),
                    source,
                })
            })
            .collect()
    }

    /// Builds the box cuboids, regularised if the catalog asks for it.
    pub fn box_cuboids(&self) -> Result<Vec<Cuboid>, CatalogError> {
        self.boxes
            .iter()
            .enumerate()
            .map(|(i, &[l, w, h])| {
                let built = if self.regularise {
                    regularised(l, w, h)
                } else {
                    Cuboid::new(l, w, h)
                };
                built.map_err(|source| CatalogError::InvalidDimension {
                    entry: format!("box #{}", i),
                    source,
                })
            })
            .collect()
    }

    /// Number of (box, container) pairs the catalog produces.
    pub fn pair_count(&self) -> usize {
        self.containers.len() * self.boxes.len()
    }
}

fn random_edges(rng: &mut StdRng, (a, b): (u32, u32)) -> [f64; 3] {
    let (min, max) = (a.min(b), a.max(b));
    [
        rng.gen_range(min..=max) as f64,
        rng.gen_range(min..=max) as f64,
        rng.gen_range(min..=max) as f64,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_is_reproducible() {
        let config = CatalogConfig::new().with_seed(7);
        assert_eq!(Catalog::random(&config), Catalog::random(&config));

        let other = Catalog::random(&config.clone().with_seed(8));
        assert_ne!(Catalog::random(&config), other);
    }

    #[test]
    fn test_random_respects_ranges() {
        let config = CatalogConfig::new().with_containers(20).with_boxes(40);
        let catalog = Catalog::random(&config);

        assert_eq!(catalog.containers.len(), 20);
        assert_eq!(catalog.boxes.len(), 40);
        assert_eq!(catalog.pair_count(), 800);

        for edges in &catalog.containers {
            assert!(edges.iter().all(|&e| (40.0..=120.0).contains(&e)));
            assert!(edges.iter().all(|e| e.fract() == 0.0));
        }
        for edges in &catalog.boxes {
            assert!(edges.iter().all(|&e| (1.0..=30.0).contains(&e)));
        }
    }

    #[test]
    fn test_edge_range_is_normalised() {
        let config = CatalogConfig::new().with_box_edges(9, 3);
        assert_eq!(config.box_edges, (3, 9));
    }

    #[test]
    fn test_reversed_range_fields_are_accepted() {
        let config = CatalogConfig {
            container_edges: (120, 40),
            box_edges: (9, 3),
            ..CatalogConfig::default()
        };
        let catalog = Catalog::random(&config);

        for edges in &catalog.containers {
            assert!(edges.iter().all(|&e| (40.0..=120.0).contains(&e)));
        }
        for edges in &catalog.boxes {
            assert!(edges.iter().all(|&e| (3.0..=9.0).contains(&e)));
        }
    }

    #[test]
    fn test_box_cuboids_are_regularised() {
        let catalog = Catalog::random(&CatalogConfig::new().with_boxes(25));
        for cuboid in catalog.box_cuboids().unwrap() {
            assert!(cuboid.is_regularised());
        }
    }

    #[test]
    fn test_illustrative() {
        let catalog = Catalog::illustrative();
        let boxes = catalog.box_cuboids().unwrap();
        assert_eq!(boxes[0].signature(), "7x5x3");
        assert_eq!(boxes[1].signature(), "5x5x5");
        assert_eq!(catalog.container_cuboids().unwrap()[0].signature(), "30x40x50");
    }

    #[test]
    fn test_invalid_entry_is_named() {
        let catalog = Catalog {
            name: "bad".into(),
            containers: vec![[10.0, 10.0, 10.0], [10.0, -1.0, 10.0]],
            boxes: vec![],
            regularise: true,
        };
        let err = catalog.container_cuboids().unwrap_err();
        assert!(err.to_string().contains("container #1"), "{}", err);
    }
}
