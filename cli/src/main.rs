use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use connect_four_core::{Coord, DEFAULT_COLS, DEFAULT_ROWS, GameConfig, GameEngine, Player};

use command::Command;

mod command;
mod replay;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FirstPlayer {
    A,
    B,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::A => Player::PlayerA,
            FirstPlayer::B => Player::PlayerB,
        }
    }
}

/// Replay a two-player Connect-Four game and print where it ends up.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Board height
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: Coord,

    /// Board width
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: Coord,

    /// Who drops first
    #[arg(long, value_enum, default_value_t = FirstPlayer::A)]
    first: FirstPlayer,

    /// Log and skip rejected commands instead of stopping
    #[arg(short, long)]
    keep_going: bool,

    /// Print the final engine state as JSON
    #[arg(long)]
    json: bool,

    /// Column numbers to drop into, `undo`/`u` or `reset`/`r`
    commands: Vec<Command>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::builder()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new(args.rows, args.cols, args.first.into())
        .with_context(|| format!("invalid board {}x{}", args.rows, args.cols))?;
    let mut engine = GameEngine::new(config)?;
    log::debug!("replaying {} commands on {config:?}", args.commands.len());

    let rejected = replay::run(&mut engine, &args.commands, args.keep_going)?;
    if rejected > 0 {
        log::warn!("{rejected} of {} commands were rejected", args.commands.len());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&engine)?);
    } else {
        println!("{}", replay::report(&engine));
    }

    Ok(())
}
