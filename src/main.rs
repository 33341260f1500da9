use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools as _;
use number_prefix::NumberPrefix;
use rand::{SeedableRng as _, rngs::StdRng};

use twenty_forty_eight::{
    board::{Board, editor},
    game::{GameSession, spawn},
    ui,
};

#[derive(Parser)]
#[command(about = "2048 in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play an interactive game (the default).
    Play {
        /// Seed the spawn RNG for a reproducible game.
        #[arg(long)]
        seed: Option<u64>,

        /// Open the grid editor to set up the starting position.
        #[arg(long)]
        edit: bool,
    },

    /// Sample the tile spawner and report its empirical distribution.
    SpawnStats {
        #[arg(long, default_value_t = 100_000)]
        trials: u64,

        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play {
        seed: None,
        edit: false,
    });

    match command {
        Command::Play { seed, edit } => {
            let mut session = match seed {
                Some(seed) => GameSession::with_seed(seed),
                None => GameSession::new(),
            };

            if edit {
                session.load_board(editor::grid_editor()?);
            }

            ui::play(session)?;
        }

        Command::SpawnStats { trials, seed } => spawn_stats(trials, seed)?,
    }

    Ok(())
}

/// Spawn `trials` tiles onto an empty board and report the observed 2/4
/// split and per-cell placement counts.
fn spawn_stats(trials: u64, seed: Option<u64>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let bar = ProgressBar::new(trials)
        .with_style(ProgressStyle::with_template("{bar:40} {pos}/{len} ({eta})")?);

    let mut fours = 0u64;
    let mut hits = [[0u64; 4]; 4];

    for _ in 0..trials {
        let board = spawn::spawn_tile(Board::EMPTY, &mut rng);

        for (r, c) in (0..4).cartesian_product(0..4) {
            let value = board.to_rows()[r][c];
            if value != 0 {
                hits[r][c] += 1;
                if value == 4 {
                    fours += 1;
                }
            }
        }

        bar.inc(1);
    }

    bar.finish_and_clear();

    let total = match NumberPrefix::decimal(trials as f64) {
        NumberPrefix::Standalone(n) => format!("{n}"),
        NumberPrefix::Prefixed(prefix, n) => format!("{n:.1}{prefix}"),
    };

    println!(
        "{total} spawns: {:.2}% fours (expected 10%)",
        100.0 * fours as f64 / trials as f64,
    );

    let (min, max) = hits
        .into_iter()
        .flatten()
        .minmax()
        .into_option()
        .unwrap_or((0, 0));

    println!(
        "cell hits: min {min}, max {max}, expected {} per cell",
        trials / 16,
    );

    Ok(())
}
