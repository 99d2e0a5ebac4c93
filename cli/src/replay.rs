use anyhow::{Context, Result};
use connect_four_core::*;

use crate::command::Command;

fn apply(engine: &mut GameEngine, command: Command) -> connect_four_core::Result<()> {
    match command {
        Command::Drop(col) => {
            let status = engine.drop(col)?;
            log::debug!("column {col}: {status}");
        }
        Command::Undo => {
            let undone = engine.undo()?;
            log::debug!("took back {} from column {}", undone.player, undone.column);
        }
        Command::Reset => engine.reset(),
    }
    Ok(())
}

/// Feeds `commands` to the engine in order and returns how many were rejected.
///
/// Without `keep_going` the first rejected command aborts the run.
pub fn run(engine: &mut GameEngine, commands: &[Command], keep_going: bool) -> Result<usize> {
    let mut rejected = 0;

    for (i, &command) in commands.iter().enumerate() {
        let index = i + 1;
        match apply(engine, command) {
            Ok(()) => {}
            Err(err) if keep_going => {
                log::warn!("command #{index} ({command}) rejected: {err}");
                rejected += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("command #{index} ({command}) rejected"));
            }
        }
    }

    Ok(rejected)
}

/// Text summary of the board, status, and whose turn it is.
pub fn report(engine: &GameEngine) -> String {
    let status = engine.current_status();
    let detail = match status {
        GameStatus::InProgress => format!(", {} to move", engine.current_turn()),
        GameStatus::Won(_) => format!(", line {:?}", engine.winning_line()),
        GameStatus::Draw => String::new(),
    };

    format!("{}\nstatus: {status}{detail}", engine.grid())
}
