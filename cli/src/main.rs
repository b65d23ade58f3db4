use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use delver_core::*;

mod render;
mod settings;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid height, border included
    #[arg(long, default_value_t = 15)]
    height: Coord,

    /// Grid width, border included
    #[arg(long, default_value_t = 15)]
    width: Coord,

    /// Occupied cells to aim for, start included
    #[arg(short, long, default_value_t = 45)]
    rooms: CellCount,

    /// Percent of all cells after which expansion gives up
    #[arg(long, default_value_t = DEFAULT_DENSITY_CEILING, value_parser = clap::value_parser!(u8).range(1..=100))]
    density: u8,

    /// TOML file with per-room settings, stock table if omitted
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Regenerate with the next seed while fewer cells than this were placed
    #[arg(long)]
    min_rooms: Option<CellCount>,

    /// Maximum number of generation attempts
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    attempts: u32,

    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Args {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig::new((self.height, self.width), self.rooms).with_density_ceiling(self.density)
    }
}

/// Tries `seed`, `seed + 1`, ... until the layout places at least `min_rooms`
/// cells or `attempts` runs out. The last dungeon is returned either way.
fn generate_with_retries<S: SettingsResolver + ?Sized>(
    config: LayoutConfig,
    settings: &S,
    seed: u64,
    min_rooms: Option<CellCount>,
    attempts: u32,
) -> Result<Dungeon> {
    let wanted = min_rooms.unwrap_or(0);
    let mut attempt = 0;

    loop {
        let dungeon = SeededDungeonGenerator::new(seed.wrapping_add(attempt.into()))
            .generate(config, settings)?;
        attempt += 1;

        let placed = dungeon.expansion().placed;
        if placed >= wanted {
            return Ok(dungeon);
        }
        if attempt >= attempts {
            log::warn!("Gave up after {attempt} attempts, best effort placed {placed} of {wanted}");
            return Ok(dungeon);
        }
        log::info!("Attempt {attempt} placed {placed} of {wanted}, retrying");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = match &args.settings {
        Some(path) => settings::load(path)?,
        None => RoomSettings::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {seed}");

    let dungeon = generate_with_retries(
        args.layout_config(),
        &settings,
        seed,
        args.min_rooms,
        args.attempts,
    )?;

    let out = match args.format {
        Format::Text => render::text(&dungeon),
        Format::Json => {
            serde_json::to_string_pretty(&dungeon).context("Could not serialize dungeon")?
        }
    };
    println!("{out}");
    Ok(())
}
