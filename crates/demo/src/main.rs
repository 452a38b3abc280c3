//! Cuboid fit runner CLI

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use cuboid_fit::{Config, OrientationConstraint};
use cuboid_fit_demo::{Catalog, CatalogConfig, CatalogParser, FitRunner};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fit-runner")]
#[command(about = "Finds the best box orientation for every container in a catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed walkthrough (7x5x3 box and a cube of edge 5)
    Demo {
        #[command(flatten)]
        fit: FitArgs,
    },

    /// Run a randomly generated catalog
    Random {
        /// Number of containers
        #[arg(short, long, default_value = "3")]
        containers: usize,

        /// Number of boxes
        #[arg(short, long, default_value = "5")]
        boxes: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Save the generated catalog (JSON)
        #[arg(long)]
        save_catalog: Option<PathBuf>,

        #[command(flatten)]
        fit: FitArgs,
    },

    /// Run a catalog from a local JSON file
    RunFile {
        /// Path to the JSON catalog file
        file: PathBuf,

        #[command(flatten)]
        fit: FitArgs,
    },
}

#[derive(Args)]
struct FitArgs {
    /// Allowed box rotations
    #[arg(long, value_enum, default_value = "any")]
    orientation: OrientationArg,

    /// Report fits below this efficiency (percent) as not fitting
    #[arg(long, default_value = "0")]
    min_efficiency: f64,

    /// Output file for results (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    /// All six rotations
    Any,
    /// Keep the box height vertical
    Upright,
    /// No rotation
    Fixed,
}

impl From<OrientationArg> for OrientationConstraint {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Any => OrientationConstraint::Any,
            OrientationArg::Upright => OrientationConstraint::Upright,
            OrientationArg::Fixed => OrientationConstraint::Fixed,
        }
    }
}

impl FitArgs {
    fn config(&self) -> anyhow::Result<Config> {
        let config = Config {
            orientation: self.orientation.into(),
            min_efficiency: self.min_efficiency,
        };
        config.validate()?;
        Ok(config)
    }
}

fn run(catalog: &Catalog, fit: &FitArgs) -> anyhow::Result<()> {
    let runner = FitRunner::new(fit.config()?);
    let report = runner
        .run(catalog)
        .with_context(|| format!("running catalog '{}'", catalog.name))?;

    report.print_summary();

    if let Some(path) = &fit.output {
        report.save_json(path)?;
        println!("Results saved to: {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { fit } => {
            run(&Catalog::illustrative(), &fit)?;
        }

        Commands::Random {
            containers,
            boxes,
            seed,
            save_catalog,
            fit,
        } => {
            let config = CatalogConfig::new()
                .with_containers(containers)
                .with_boxes(boxes)
                .with_seed(seed);
            let catalog = Catalog::random(&config);

            if let Some(path) = save_catalog {
                CatalogParser::new().save_file(&catalog, &path)?;
                println!("Catalog saved to: {}", path.display());
            }

            run(&catalog, &fit)?;
        }

        Commands::RunFile { file, fit } => {
            let catalog = CatalogParser::new()
                .parse_file(&file)
                .with_context(|| format!("loading {}", file.display()))?;

            run(&catalog, &fit)?;
        }
    }

    Ok(())
}
