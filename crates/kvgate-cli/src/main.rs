//! kvgate CLI - Read, write, and clear named values in the host's storage
//!
//! This is the command-line interface for kvgate. It runs as a script host,
//! so the persistent store is a JSON file and the ephemeral store lives for
//! the duration of one invocation.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::{misc, storage};
use crate::errors::{exit_code_for, hint_for};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        if let Some(hint) = hint_for(&e) {
            eprintln!("{}", hint);
        }
        std::process::exit(exit_code_for(&e));
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default: warnings only).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Get(args) => storage::handle_get(cli, args),
        Commands::Set(args) => storage::handle_set(cli, args),
        Commands::Remove(args) => storage::handle_remove(cli, args),
        Commands::Clear(args) => storage::handle_clear(cli, args),
        Commands::Host(args) => misc::handle_host(cli, args),
        Commands::Completions(args) => misc::handle_completions(args.shell),
    }
}
