use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use kurbo::Point;
use shoreline::{
    check_collision, extract_shape, load_mask, load_records, records_to_json, Island,
    IslandRecord, IslandShape, Mover, RasterMask, ShorelineConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shoreline", about = "Island images to collision geometry")]
struct Cli {
    /// JSON config preset (missing fields use defaults)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract an island shape and write it as an island record
    Extract {
        /// Island image (PNG with alpha). Omit for a procedural outline.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Island radius in world units
        #[arg(short, long)]
        radius: f64,

        /// Island name
        #[arg(short, long)]
        name: String,

        /// World X of the island centre
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        x: f64,

        /// World Y of the island centre
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        y: f64,

        /// Store a circle set instead of the outline
        #[arg(long)]
        circles: bool,

        /// Merge overlapping circles (with --circles)
        #[arg(long)]
        optimize: bool,

        /// Output JSON path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check a mover position against a list of island records
    Probe {
        /// JSON array of island records
        #[arg(long)]
        islands: PathBuf,

        #[arg(long, allow_hyphen_values = true)]
        x: f64,

        #[arg(long, allow_hyphen_values = true)]
        y: f64,

        /// Mover radius
        #[arg(long, default_value = "10")]
        mover_radius: f64,

        /// Mover speed; a hit reports the speed left after the revert damping
        #[arg(long, default_value = "0")]
        speed: f64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ShorelineConfig::load(path)?,
        None => ShorelineConfig::default(),
    };

    match cli.command {
        Command::Extract {
            input,
            radius,
            name,
            x,
            y,
            circles,
            optimize,
            output,
        } => extract(
            &config,
            input.as_deref(),
            radius,
            &name,
            Point::new(x, y),
            circles,
            optimize,
            output.as_deref(),
        ),
        Command::Probe {
            islands,
            x,
            y,
            mover_radius,
            speed,
        } => probe(&config, &islands, Mover::new(x, y, mover_radius, speed)),
    }
}

#[allow(clippy::too_many_arguments)]
fn extract(
    config: &ShorelineConfig,
    input: Option<&Path>,
    radius: f64,
    name: &str,
    center: Point,
    circles: bool,
    optimize: bool,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mask = input.map(load_mask).transpose()?;

    let raster = mask.as_ref().map(|m| m as &dyn RasterMask);
    let mut island = Island::with_outline(center, extract_shape(raster, radius, config), radius);
    if circles {
        island.reset_circles(optimize, config);
    }

    match &island.shape {
        IslandShape::Outline(outline) => {
            let b = outline.bounds();
            eprintln!(
                "  Outline     {} points \u{00b7} {:.0}\u{00d7}{:.0}",
                outline.len(),
                b.width(),
                b.height()
            );
        }
        IslandShape::Circles(set) => eprintln!("  Circles     {}", set.len()),
    }

    let json = records_to_json(&[IslandRecord::from_island(name, &island)])?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            eprintln!("  \u{2713} {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn probe(
    config: &ShorelineConfig,
    islands_path: &Path,
    mover: Mover,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = load_records(islands_path)?;
    let islands: Vec<Island> = records.iter().map(IslandRecord::to_island).collect();

    let verdict = check_collision(&mover, &islands, config);

    match verdict.island {
        Some(i) => eprintln!(
            "  Hit         {} \u{00b7} push ({:.3}, {:.3}) \u{00b7} speed {:.2}",
            records[i].name,
            verdict.push.x,
            verdict.push.y,
            mover.speed * config.speed_damping
        ),
        None => eprintln!("  Clear"),
    }
    println!("{}", serde_json::to_string_pretty(&verdict)?);
    Ok(())
}
