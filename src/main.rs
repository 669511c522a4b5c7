//! treeselect CLI - pick items from a tree in the terminal
//!
//! Usage: treeselect <COMMAND>
//!
//! Commands:
//!   pick    Pick items interactively and print the chosen ids
//!   show    Print the rendered tree without interaction

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Pick {
            file,
            multiple,
            groups_behavior,
            default_value,
        } => commands::pick::cmd_pick(&file, multiple, groups_behavior, default_value, cli.json),
        Commands::Show {
            file,
            value,
            multiple,
            collapse,
        } => commands::show::cmd_show(&file, value, multiple, collapse, cli.json),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("treeselect={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
