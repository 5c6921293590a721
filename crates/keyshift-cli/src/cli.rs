use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "keyshift")]
#[command(about = "Replace hardcoded Spotify credentials with environment references", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite target files in place
    Run {
        /// Files to rewrite (default: targets from keyshift.toml)
        paths: Vec<PathBuf>,

        /// Config file to use instead of the discovered keyshift.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show the outcome of every rule for every file
        #[arg(long)]
        verbose_rules: bool,
    },

    /// Report what would change without writing anything
    Check {
        /// Files to inspect (default: targets from keyshift.toml)
        paths: Vec<PathBuf>,

        /// Config file to use instead of the discovered keyshift.toml
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print a unified diff for each file that would change
        #[arg(long)]
        diff: bool,
    },

    /// List the rewrite rules in application order
    Rules,

    /// Write a default keyshift.toml into the current directory
    Init {
        /// Overwrite an existing keyshift.toml
        #[arg(long)]
        force: bool,
    },
}
