//! Tessel CLI
//!
//! Loads rectangle and cone records into one repository, logs each
//! shape's derived metrics, and prints aggregate statistics.
//!
//! Malformed records are logged and skipped. The exit code is non-zero
//! only when a file cannot be read or the configuration is invalid.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tessel::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Load shape files and report derived metrics
#[derive(Parser, Debug)]
#[command(name = "tessel")]
#[command(version)]
#[command(about = "Load shape files and report derived metrics")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Directory holding rectangles.txt and cones.txt
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Rectangle records (overrides <DATA_DIR>/rectangles.txt)
    #[arg(long)]
    rectangles: Option<PathBuf>,

    /// Cone records (overrides <DATA_DIR>/cones.txt)
    #[arg(long)]
    cones: Option<PathBuf>,

    /// Order in which shapes are reported
    #[arg(long, value_enum, default_value_t = SortKey::Id)]
    sort: SortKey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SortKey {
    Id,
    Name,
    X,
    Y,
    Z,
    Distance,
}

impl From<SortKey> for ShapeOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Id => ShapeOrder::Id,
            SortKey::Name => ShapeOrder::Name,
            SortKey::X => ShapeOrder::FirstPointX,
            SortKey::Y => ShapeOrder::FirstPointY,
            SortKey::Z => ShapeOrder::FirstPointZ,
            SortKey::Distance => ShapeOrder::DistanceFromOrigin,
        }
    }
}

impl Cli {
    fn ingest_config(&self) -> IngestConfig {
        let mut config = IngestConfig::from_data_dir(&self.data_dir);
        if let Some(path) = &self.rectangles {
            config.rectangles_file = path.clone();
        }
        if let Some(path) = &self.cones {
            config.cones_file = path.clone();
        }
        config
    }
}

fn log_shape(shape: &Shape) {
    match shape.geometry() {
        Geometry::Rectangle(r) => info!(
            id = %shape.id(),
            area = r.area(),
            perimeter = r.perimeter(),
            square = r.is_square(),
            "rectangle computed"
        ),
        Geometry::Cone(c) => info!(
            id = %shape.id(),
            volume = c.volume(),
            surface_area = c.surface_area(),
            base_on_xoy = c.is_base_on_xoy(),
            "cone computed"
        ),
        _ => {}
    }
}

fn print_statistics(stats: &StoreStatistics, skipped: usize) {
    println!("shapes:             {}", stats.total_shapes);
    println!("  rectangles:       {}", stats.rectangles);
    println!("  cones:            {}", stats.cones);
    println!("skipped records:    {skipped}");
    println!("total area:         {:.4}", stats.total_area);
    println!("total perimeter:    {:.4}", stats.total_perimeter);
    println!("total volume:       {:.4}", stats.total_volume);
    println!("total surface area: {:.4}", stats.total_surface_area);
}

fn run(cli: &Cli) -> Result<(), IngestError> {
    let loader = Loader::new(cli.ingest_config())?;
    let report = loader.load_all()?;

    let mut repository = ShapeRepository::new(PropertyStore::shared());
    repository.extend(report.shapes);
    repository.sort_in_place(&ShapeOrder::from(cli.sort));

    for shape in repository.iter() {
        log_shape(shape);
    }
    print_statistics(&repository.statistics(), report.skipped);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "load failed");
            ExitCode::FAILURE
        }
    }
}
