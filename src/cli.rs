use std::path::PathBuf;

use clap::{Parser, Subcommand};
use treeselect::GroupsBehavior;

/// treeselect - pick items from a tree in the terminal
#[derive(Parser, Debug)]
#[command(name = "treeselect")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick items interactively and print the chosen ids
    Pick {
        /// Item file (.toml or .json)
        file: PathBuf,

        /// Allow selecting more than one item
        #[arg(short, long)]
        multiple: bool,

        /// What clicking a group does (expandable, none)
        #[arg(long)]
        groups_behavior: Option<GroupsBehavior>,

        /// Ids selected when the picker opens
        #[arg(long, value_delimiter = ',')]
        default_value: Vec<String>,
    },

    /// Print the rendered tree without interaction
    Show {
        /// Item file (.toml or .json)
        file: PathBuf,

        /// Ids to show as selected
        #[arg(long, value_delimiter = ',')]
        value: Vec<String>,

        /// Render selection markers for multi-select
        #[arg(short, long)]
        multiple: bool,

        /// Groups to show collapsed
        #[arg(long, value_delimiter = ',')]
        collapse: Vec<String>,
    },
}
