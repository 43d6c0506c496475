mod base64;
mod diff;
mod json;
mod state;
mod utm;
mod wisdom;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tool_store::{KeyValueStore, ToolStore};
use toolkit::ToolKind;

use crate::args::Commands;

/// Run a command against the loaded tool states
pub fn run<B: KeyValueStore>(command: Commands, store: &mut ToolStore<B>) -> Result<()> {
    match command {
        Commands::List => {
            list();
            Ok(())
        }
        Commands::Base64 { action } => base64::run(action, store),
        Commands::Json(args) => json::run(args, store),
        Commands::Diff(args) => diff::run(args, store),
        Commands::Utm(args) => utm::run(args, store),
        Commands::Wisdom { prompt } => wisdom::run(&prompt.join(" "), store),
        Commands::State { action } => state::run(action, store),
    }
}

fn list() {
    for tool in ToolKind::ALL {
        let marker = if tool.is_external() { " (external)" } else { "" };
        println!(
            "{:<16} {:<34} {}{}",
            tool.to_string(),
            tool.description(),
            tool.route(),
            marker
        );
    }
}

/// Read all of stdin
fn read_stdin() -> Result<String> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}

/// Read a file, or stdin for `-`
fn read_file(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return read_stdin();
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Use the argument when given, otherwise stdin
fn arg_or_stdin(input: Option<String>) -> Result<String> {
    match input {
        Some(input) => Ok(input),
        None => read_stdin(),
    }
}
