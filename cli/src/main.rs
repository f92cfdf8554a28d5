use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pairmatch_core::*;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod render;
mod session;
mod settings;

#[derive(Parser, Debug)]
#[command(version, about = "Memory card matching game", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Settings file (TOML) with `size`, `max_moves` and `delay_ms`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board side, the board has size×size cards
    #[arg(short, long)]
    size: Option<Coord>,

    /// Moves allowed before the game is lost
    #[arg(short, long)]
    max_moves: Option<MoveCount>,

    /// Milliseconds both cards stay visible before a pair is resolved
    #[arg(short, long)]
    delay_ms: Option<u64>,

    /// Force a seed instead of random
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final board as JSON when leaving
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(args.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = match &args.config {
        Some(path) => settings::Settings::load(path)?,
        None => settings::Settings::default(),
    }
    .with_overrides(args.size, args.max_moves, args.delay_ms);
    tracing::debug!("settings: {:?}", settings);

    let config = settings.game_config()?;
    let game = match args.seed {
        Some(seed) => {
            tracing::debug!("seed: {}", seed);
            let layout = RandomLayoutGenerator::new(seed).generate(config);
            Game::new(layout, config.max_moves)?
        }
        None => Game::new_game(config)?,
    };

    let stdin = std::io::stdin().lock();
    let stdout = BufWriter::new(std::io::stdout().lock());
    let mut session = session::Session::new(
        game,
        Duration::from_millis(settings.delay_ms),
        stdin,
        stdout,
    );
    session.run()?;

    if args.json {
        let view = BoardView::from_game(&session.into_game());
        let json = serde_json::to_string_pretty(&view).context("Could not serialize board")?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}")?;
    }
    Ok(())
}
