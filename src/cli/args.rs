//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Recreate folder structures from a tree listing or an existing directory
#[derive(Parser, Debug)]
#[command(name = "rskel")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the baseline structure in a target location
    Create {
        /// Tree listing file (e.g. `tree` output) or directory to replicate
        #[arg(short, long, value_hint = ValueHint::AnyPath)]
        baseline: PathBuf,
        /// Target location in which to create the structure
        #[arg(short, long, value_hint = ValueHint::DirPath)]
        location: Option<PathBuf>,
        /// Only create folders (no files)
        #[arg(long)]
        folders_only: bool,
    },

    /// Print the parsed baseline structure
    Show {
        /// Tree listing file or directory
        #[arg(short, long, value_hint = ValueHint::AnyPath)]
        baseline: PathBuf,
        /// One relative path per line instead of a tree
        #[arg(long)]
        flat: bool,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective config
    Show,

    /// Create config template
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show config path
    Path,
}
