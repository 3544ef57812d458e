//! Grotto CLI - procedural cave generation from the command line.
//!
//! Usage: grotto <COMMAND> [OPTIONS]
//!
//! Run `grotto --help` for available commands. Set `RUST_LOG=debug` to see
//! per-stage logging from the library.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use grotto::algo::Progress;
use grotto::field::Seed;
use grotto::io;
use grotto::mesh::Mesh;
use grotto::{generate, generate_with_progress, Cave, CaveConfig};

#[derive(Parser)]
#[command(name = "grotto")]
#[command(author, version, about = "Procedural cave mesh generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a cave and save its meshes
    Generate {
        #[command(flatten)]
        cave: CaveArgs,

        /// Output file for the floor mesh (.obj, .stl or .ply)
        #[arg(long)]
        floor: Option<PathBuf>,

        /// Output file for the wall mesh (.obj, .stl or .ply)
        #[arg(long)]
        walls: Option<PathBuf>,

        /// Print the smoothed field as ASCII art
        #[arg(long)]
        print_field: bool,
    },

    /// Generate a cave and print statistics about it
    Info {
        #[command(flatten)]
        cave: CaveArgs,
    },
}

#[derive(Args)]
struct CaveArgs {
    /// Number of field columns
    #[arg(long, default_value = "80")]
    width: usize,

    /// Number of field rows
    #[arg(long, default_value = "60")]
    height: usize,

    /// Initial wall probability in percent (0 to 100)
    #[arg(short, long, default_value = "47", allow_negative_numbers = true)]
    fill: i32,

    /// Number of smoothing passes
    #[arg(short, long, default_value = "5")]
    smoothing: usize,

    /// Text seed
    #[arg(long, default_value = "grotto", conflicts_with_all = ["seed_value", "random_seed"])]
    seed: String,

    /// Numeric seed, as printed by a previous run
    #[arg(long, conflicts_with = "random_seed")]
    seed_value: Option<u64>,

    /// Use a time-derived seed
    #[arg(long)]
    random_seed: bool,

    /// Side length of a grid square
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    cell_size: f64,

    /// Height of the extruded walls
    #[arg(long, default_value = "5.0", allow_negative_numbers = true)]
    wall_height: f64,

    /// Use single-threaded smoothing (for benchmarking)
    #[arg(long)]
    sequential: bool,
}

impl CaveArgs {
    fn to_config(&self) -> CaveConfig {
        let seed = if self.random_seed {
            Seed::Random
        } else if let Some(value) = self.seed_value {
            Seed::Value(value)
        } else {
            Seed::Text(self.seed.clone())
        };

        CaveConfig::new(self.width, self.height)
            .with_fill_percent(self.fill)
            .with_smoothing_steps(self.smoothing)
            .with_seed(seed)
            .with_cell_size(self.cell_size)
            .with_wall_height(self.wall_height)
            .with_parallel(!self.sequential)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate {
            cave,
            floor,
            walls,
            print_field,
        } => {
            let config = cave.to_config();
            println!(
                "Generating {}x{} cave (fill {}%, {} smoothing steps, seed {})",
                config.width, config.height, config.fill_percent, config.smoothing_steps, config.seed
            );

            let start = Instant::now();
            let cave = generate_with_progress(&config, &create_progress())?;
            let elapsed = start.elapsed();

            if print_field {
                println!("{}", cave.field());
            }
            println!("Seed value: {}", cave.seed());
            if !config.seed.is_deterministic() {
                println!("Replay with: --seed-value {}", cave.seed());
            }
            println!(
                "Floor: {} vertices, {} triangles",
                cave.floor().num_vertices(),
                cave.floor().num_triangles()
            );
            println!(
                "Walls: {} vertices, {} triangles ({} outlines)",
                cave.walls().num_vertices(),
                cave.walls().num_triangles(),
                cave.outlines().len()
            );
            println!("Time: {:.2?}", elapsed);

            if let Some(path) = floor {
                save_mesh(cave.floor(), &path, "floor")?;
            }
            if let Some(path) = walls {
                save_mesh(cave.walls(), &path, "walls")?;
            }
        }

        Commands::Info { cave } => {
            let config = cave.to_config();
            let cave = generate(&config)?;
            print_info(&config, &cave);
        }
    }

    Ok(())
}

fn save_mesh(mesh: &Mesh, path: &Path, what: &str) -> Result<(), Box<dyn std::error::Error>> {
    io::save(mesh, path)?;
    println!("Saved {} to {}", what, path.display());
    Ok(())
}

fn print_info(config: &CaveConfig, cave: &Cave) {
    let field = cave.field();
    let cells = field.width() * field.height();
    println!("Field: {}x{}", field.width(), field.height());
    println!("Seed: {} (value {})", config.seed, cave.seed());
    if !config.seed.is_deterministic() {
        println!("Replay with: --seed-value {}", cave.seed());
    }
    println!(
        "Wall cells: {} of {} ({:.1}%)",
        field.wall_count(),
        cells,
        100.0 * field.wall_count() as f64 / cells as f64
    );

    print_mesh_stats("Floor", cave.floor());

    let lengths: Vec<usize> = cave.outlines().iter().map(|o| o.num_distinct()).collect();
    println!("Outlines: {}", lengths.len());
    if let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) {
        println!("Outline vertices: [{}, {}]", min, max);
    }

    print_mesh_stats("Walls", cave.walls());
}

fn print_mesh_stats(name: &str, mesh: &Mesh) {
    println!(
        "{}: {} vertices, {} triangles",
        name,
        mesh.num_vertices(),
        mesh.num_triangles()
    );
    println!("  Surface area: {:.6}", mesh.surface_area());
    if let Some((min, max)) = mesh.bounding_box() {
        println!(
            "  Bounding box: ({:.3}, {:.3}, {:.3}) to ({:.3}, {:.3}, {:.3})",
            min.x, min.y, min.z, max.x, max.y, max.z
        );
    }
}

/// Draw generation progress as a bar on stderr.
fn create_progress() -> Progress {
    const BAR_WIDTH: usize = 30;
    let drawn = AtomicUsize::new(0);

    Progress::new(move |current, total, message| {
        let done = current >= total;
        let percent = current.min(total) * 100 / total;
        if drawn.fetch_max(percent, Ordering::Relaxed) >= percent && percent > 0 && !done {
            return;
        }

        let filled = percent * BAR_WIDTH / 100;
        eprint!(
            "\r[{}{}] {:3}% {:<16}",
            "#".repeat(filled),
            ".".repeat(BAR_WIDTH - filled),
            percent,
            message
        );
        let _ = std::io::stderr().flush();
        if done {
            eprintln!();
        }
    })
}
