//! byow: generate, inspect and save room-and-corridor worlds
//!
//! Every world is reproducible from its seed and dimensions, so a saved
//! snapshot can be checked by regenerating it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use byow_core::{DEFAULT_ENCODE_CAPACITY, GenerationConfig, SnapshotEncoder, World};
use byow_save::{default_save_path, load_snapshot, save_snapshot};

/// Deterministic dungeon generator
#[derive(Parser, Debug)]
#[command(name = "byow")]
#[command(author, version, about = "Build your own world", long_about = None)]
struct Cli {
    /// Log generation details
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a world snapshot as JSON
    Generate {
        #[command(flatten)]
        world: WorldArgs,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Refuse output larger than this many bytes
        #[arg(long, default_value_t = DEFAULT_ENCODE_CAPACITY)]
        capacity: usize,
    },

    /// Print the shortest room-to-room path
    Path {
        #[command(flatten)]
        world: WorldArgs,

        /// Start room id
        #[arg(long)]
        from: usize,

        /// End room id
        #[arg(long)]
        to: usize,
    },

    /// Print the map as text
    Render {
        #[command(flatten)]
        world: WorldArgs,
    },

    /// Generate a world and write its snapshot to a save file
    Save {
        #[command(flatten)]
        world: WorldArgs,

        /// Destination (defaults to the user data directory)
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,
    },

    /// Read a save file and summarize it
    Load {
        /// Save file (defaults to the user data directory)
        file: Option<PathBuf>,

        /// Regenerate from the saved seed and compare
        #[arg(long)]
        verify: bool,

        /// Generation config used for --verify
        #[arg(short = 'c', long = "config")]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct WorldArgs {
    /// World seed (random if omitted)
    #[arg(short = 's', long = "seed", allow_hyphen_values = true)]
    seed: Option<i64>,

    /// Grid width
    #[arg(short = 'W', long = "width", default_value_t = 80)]
    width: usize,

    /// Grid height
    #[arg(short = 'H', long = "height", default_value_t = 50)]
    height: usize,

    /// JSON generation config; missing keys take defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,
}

impl WorldArgs {
    fn seed(&self) -> i64 {
        self.seed.unwrap_or_else(|| {
            let seed = i64::from(rand::random::<u32>() >> 1);
            log::info!("using random seed {seed}");
            seed
        })
    }

    fn build(&self) -> Result<World> {
        let config = read_config(self.config.as_deref())?;
        let seed = self.seed();
        byow_core::generate_with_config(seed, self.width, self.height, config).with_context(
            || format!("generating {}x{} world from seed {seed}", self.width, self.height),
        )
    }
}

fn read_config(path: Option<&Path>) -> Result<GenerationConfig> {
    let Some(path) = path else {
        return Ok(GenerationConfig::default());
    };
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GenerationConfig::from_json(&contents)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn print_bytes(bytes: &[u8]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(bytes)?;
    stdout.write_all(b"\n")?;
    stdout.flush()?;
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate {
            world,
            pretty,
            capacity,
        } => {
            let world = world.build()?;
            let bytes = SnapshotEncoder::new(capacity)
                .pretty(pretty)
                .encode_world(&world)
                .context("encoding snapshot")?;
            print_bytes(&bytes)
        }

        Command::Path { world, from, to } => {
            if world.seed.is_none() {
                bail!("path queries need an explicit --seed");
            }
            let world = world.build()?;
            let path = world
                .find_path(from, to)
                .with_context(|| format!("finding path from room {from} to room {to}"))?;
            let bytes = SnapshotEncoder::default().encode_path(&path)?;
            print_bytes(&bytes)
        }

        Command::Render { world } => {
            let world = world.build()?;
            print!("{}", world.grid());
            Ok(())
        }

        Command::Save { world, out } => {
            let world = world.build()?;
            let path = out.unwrap_or_else(default_save_path);
            save_snapshot(&world.snapshot(), &path)
                .with_context(|| format!("saving to {}", path.display()))?;
            println!("Saved seed {} to {}", world.seed(), path.display());
            Ok(())
        }

        Command::Load {
            file,
            verify,
            config,
        } => {
            let path = file.unwrap_or_else(default_save_path);
            let snapshot =
                load_snapshot(&path).with_context(|| format!("loading {}", path.display()))?;
            println!(
                "seed {}: {}x{} world, {} rooms, {} corridors",
                snapshot.seed,
                snapshot.width,
                snapshot.height,
                snapshot.rooms.len(),
                snapshot.corridor_count
            );

            if verify {
                let config = read_config(config.as_deref())?;
                let regenerated = byow_core::generate_with_config(
                    snapshot.seed,
                    snapshot.width,
                    snapshot.height,
                    config,
                )
                .context("regenerating saved world")?;
                if regenerated.snapshot() != snapshot {
                    bail!(
                        "{} does not match the world generated from seed {}",
                        path.display(),
                        snapshot.seed
                    );
                }
                println!("verified: regenerated world is identical");
            }
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    run(cli.command)
}
