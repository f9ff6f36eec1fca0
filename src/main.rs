use anyhow::Context;
use clap::Parser;
use minesweeper_engine::frontend::{LineInput, TextRenderer};
use minesweeper_engine::{play, Game, GameConfig, GameState, Position};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Play Minesweeper in the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = 16)]
    width: u32,

    #[arg(long, default_value_t = 16)]
    height: u32,

    #[arg(long, default_value_t = 32)]
    mines: u32,

    /// Seed for mine placement. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// A cell that never holds a mine, written as "x,y".
    #[arg(long)]
    safe_start: Option<Position>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig {
        width: args.width,
        height: args.height,
        mine_count: args.mines,
        safe_start: args.safe_start,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, "starting game");
    let mut rng = StdRng::seed_from_u64(seed);

    let mut game = Game::new(&config, &mut rng).with_context(|| {
        format!(
            "cannot start a {}x{} game with {} mines",
            config.width, config.height, config.mine_count
        )
    })?;

    let mut renderer = TextRenderer::new(io::stdout());
    let mut input = LineInput::new(io::stdin().lock(), io::stdout());

    match play(&mut game, &mut renderer, &mut input)? {
        GameState::Playing => println!("Thanks for playing!"),
        GameState::Won | GameState::Lost => {}
    }

    Ok(())
}
