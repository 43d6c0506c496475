mod args;
mod commands;
mod config;
mod view;

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::io::IsTerminal;
use tool_store::{FileStore, MemoryStore, ToolStore};

use crate::args::Cli;

fn init_logging(verbose: bool) {
    // RUST_LOG wins over --verbose
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    if cli.no_persist {
        debug!("Keeping tool states in memory");
        let mut store = ToolStore::load(MemoryStore::new())?;
        return commands::run(cli.command, &mut store);
    }

    let dir = config::state_dir(cli.state_dir.as_deref())?;
    let mut store = ToolStore::load(FileStore::open(&dir)?)?;
    commands::run(cli.command, &mut store)
}
