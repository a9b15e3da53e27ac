use std::path::PathBuf;

use clap::Parser;
use island_generator::{map_export, HeightParams, Island, IslandStats};

#[derive(Parser, Debug)]
#[command(name = "island_generator")]
#[command(about = "Generate procedural island maps with water collision boundaries")]
struct Args {
    /// Width of the island grid in cells
    #[arg(short = 'W', long, default_value = "512")]
    cols: usize,

    /// Height of the island grid in cells
    #[arg(short = 'H', long, default_value = "512")]
    rows: usize,

    /// World units per grid cell
    #[arg(short = 'c', long, default_value = "1.0")]
    cell_size: f32,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load height generation parameters from a JSON file
    #[arg(long)]
    params: Option<PathBuf>,

    /// Export the island snapshot to PNG (specify output path)
    #[arg(long)]
    export_png: Option<PathBuf>,

    /// Export island statistics to JSON (specify output path)
    #[arg(long)]
    export_stats: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);

    let params = match &args.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            serde_json::from_str::<HeightParams>(&text)?
        }
        None => HeightParams::default(),
    };

    println!("Generating island with seed: {}", seed);
    println!("Grid size: {}x{} cells ({} world units per cell)", args.cols, args.rows, args.cell_size);

    let island = Island::generate(args.cols, args.rows, args.cell_size, seed, &params);
    let stats = IslandStats::collect(&island);

    println!(
        "Terrain: {} land cells ({:.1}%), {} water cells",
        stats.land_cells(),
        100.0 * stats.land_fraction(),
        stats.water_cells
    );
    println!(
        "Bands: {} beach, {} grass, {} rock",
        stats.beach_cells, stats.grass_cells, stats.rock_cells
    );
    println!(
        "Patches: {} dirt cells, {} gravel cells",
        stats.dirt_cells, stats.gravel_cells
    );
    println!("Water boundary: {} collision segments", stats.boundary_segments);

    if stats.spawn_is_fallback {
        println!("Spawn: no walkable land found, falling back to world origin");
    } else {
        println!("Spawn: ({:.1}, {:.1})", stats.spawn_x, stats.spawn_y);
    }

    if let Some(path) = &args.export_png {
        println!("Exporting snapshot to {}...", path.display());
        map_export::export_png(&island, path)?;
    }

    if let Some(path) = &args.export_stats {
        println!("Exporting stats to {}...", path.display());
        stats.export_json(path)?;
    }

    Ok(())
}
