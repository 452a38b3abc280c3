//! Catalog runner for cuboid fitting.
//!
//! This crate provides:
//! - Seeded random and fixed catalogs of containers and boxes
//! - JSON catalog loading
//! - A runner that fits every box into every container
//! - Text and JSON reports

mod catalog;
mod parser;
mod result;
mod runner;

pub use catalog::{Catalog, CatalogConfig};
pub use parser::{CatalogError, CatalogParser};
pub use result::{BestContainer, PairReport, RunReport};
pub use runner::FitRunner;
