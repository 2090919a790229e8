//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Buildenv - deployment environment registry for the build coordinator.
#[derive(Debug, Parser)]
#[command(name = "buildenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the flag-selected environment (default if no command specified)
    Show(ShowArgs),

    /// Look up an environment by cloud project identifier
    Resolve(ResolveArgs),

    /// List the known project identifiers and their environments
    List(ListArgs),

    /// Print the URLs derived from an environment
    Urls(UrlsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Use the staging coordinator and buildlets
    #[arg(long)]
    pub staging: bool,

    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Cloud project identifier (e.g. "dev")
    pub project_id: String,

    /// Output as JSON
    #[arg(long, conflicts_with = "yaml")]
    pub json: bool,

    /// Output as YAML
    #[arg(long)]
    pub yaml: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `urls` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct UrlsArgs {
    /// Use the staging coordinator and buildlets
    #[arg(long)]
    pub staging: bool,

    /// Builder type for the snapshot URL (e.g. "linux-amd64")
    #[arg(long, value_name = "TYPE", requires = "rev")]
    pub builder_type: Option<String>,

    /// Revision for the snapshot URL (40-character commit hash)
    #[arg(long, value_name = "REV", requires = "builder_type")]
    pub rev: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
