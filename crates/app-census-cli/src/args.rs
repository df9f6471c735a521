use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "app-census")]
#[command(about = "Third-party application census for macOS")]
#[command(version)]
pub struct Cli {
    /// Verbose output (scan summary and category counts)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (report body only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.app-census)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value by key (e.g. filter.exclude)
    Get { key: String },

    /// Set a config value by key
    Set { key: String, value: String },

    /// List all config values
    List,

    /// Show the config file path
    Path,

    /// Create the config file with a commented template
    Init,
}
