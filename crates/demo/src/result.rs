//! Run reports and console rendering.

use crate::parser::CatalogError;
use cuboid_fit::{Cuboid, FitResult};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;

/// Outcome of fitting one box into one container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairReport {
    /// Container signature
    pub container: String,
    /// Box signature
    pub item: String,
    /// Copies fitted
    pub count: u64,
    /// Container volume filled, in percent
    pub efficiency: f64,
    /// Winning rotation, or "N/A"
    pub rotation: String,
    /// Occupied block signature, if anything fits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupied: Option<String>,
}

impl PairReport {
    /// Builds a row from a fit result.
    pub fn new(item: &Cuboid, container: &Cuboid, result: &FitResult<Cuboid>) -> Self {
        Self {
            container: container.signature().to_string(),
            item: item.signature().to_string(),
            count: result.count,
            efficiency: result.efficiency,
            rotation: result.rotation_signature.clone(),
            occupied: result
                .occupied_block
                .as_ref()
                .map(|block| block.signature().to_string()),
        }
    }
}

/// The container a box fills best.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestContainer {
    /// Box signature
    pub item: String,
    /// Container signature, if the box fits anywhere
    pub container: Option<String>,
    /// Efficiency reached there, in percent
    pub efficiency: f64,
}

/// Every pairing of a catalog run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    /// Catalog name
    pub catalog: String,
    /// One row per (container, box) pair, grouped by container
    pub pairs: Vec<PairReport>,
    /// Best container for each box
    pub best_containers: Vec<BestContainer>,
}

impl RunReport {
    /// Creates an empty report for a catalog.
    pub fn new(catalog: impl Into<String>) -> Self {
        Self {
            catalog: catalog.into(),
            ..Self::default()
        }
    }

    /// Adds a pair row.
    pub fn add_pair(&mut self, pair: PairReport) {
        self.pairs.push(pair);
    }

    /// Number of pairs where at least one copy fits.
    pub fn fitted_count(&self) -> usize {
        self.pairs.iter().filter(|p| p.count > 0).count()
    }

    /// Mean efficiency over the pairs that fit, or 0 if none do.
    pub fn mean_efficiency(&self) -> f64 {
        let fitted: Vec<f64> = self
            .pairs
            .iter()
            .filter(|p| p.count > 0)
            .map(|p| p.efficiency)
            .collect();
        if fitted.is_empty() {
            return 0.0;
        }
        fitted.iter().sum::<f64>() / fitted.len() as f64
    }

    /// Writes the report as text.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Catalog: {}", self.catalog)?;

        let mut current: Option<&str> = None;
        for pair in &self.pairs {
            if current != Some(pair.container.as_str()) {
                writeln!(out, "\nContainer {}", pair.container)?;
                writeln!(out, "{:-<64}", "")?;
                current = Some(pair.container.as_str());
            }
            match &pair.occupied {
                Some(block) => writeln!(
                    out,
                    "  {:<14} x{:<6} {:>6.2}%  as {:<14} block {}",
                    pair.item, pair.count, pair.efficiency, pair.rotation, block
                )?,
                None => writeln!(out, "  {:<14} does not fit", pair.item)?,
            }
        }

        if !self.best_containers.is_empty() {
            writeln!(out, "\nBest container per box")?;
            writeln!(out, "{:-<64}", "")?;
            for best in &self.best_containers {
                match &best.container {
                    Some(container) => writeln!(
                        out,
                        "  {:<14} -> {:<14} {:>6.2}%",
                        best.item, container, best.efficiency
                    )?,
                    None => writeln!(out, "  {:<14} -> none", best.item)?,
                }
            }
        }

        writeln!(
            out,
            "\n{} pairs, {} fit, mean efficiency {:.2}%",
            self.pairs.len(),
            self.fitted_count(),
            self.mean_efficiency()
        )
    }

    /// Prints the report to stdout.
    pub fn print_summary(&self) {
        let stdout = io::stdout();
        if let Err(e) = self.render(&mut stdout.lock()) {
            log::warn!("Failed to print report: {}", e);
        }
    }

    /// Saves the report as pretty-printed JSON.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
