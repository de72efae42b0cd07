//! CLI command definitions

use apisnap_domain::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for apisnap
#[derive(Parser, Debug)]
#[command(name = "apisnap")]
#[command(author, version, about = "Build, export and check public API snapshots")]
#[command(long_about = r#"
apisnap keeps a text snapshot of a project's public API next to its sources.

Tasks:
  buildApi   Runs the configured extractor over the release classes and
             writes <build>/tmp/api/<name>.api
  exportApi  Copies that file to public.api in the project directory
  checkApi   Compares that file with the released API at api/<version>.api

exportApi and checkApi always run buildApi first.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. APISNAP_* environment variables
3. ./apisnap.toml      Project-level config
4. ~/.config/apisnap/config.toml   Global config

Example:
  apisnap build
  apisnap export
  apisnap check --project-version 1.4.0
  apisnap run buildApi checkApi
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Project directory (overrides [project].project_dir)
    #[arg(long, value_name = "DIR", global = true)]
    pub project_dir: Option<PathBuf>,

    /// Project version (overrides [project].version)
    #[arg(long, value_name = "VERSION", global = true)]
    pub project_version: Option<String>,

    /// Released API file (overrides [api].api_file; relative to the root directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub api_file: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a .api file containing the current public API
    Build,

    /// Export the built .api file to public.api
    Export {
        /// Copy the existing snapshot without building it first
        #[arg(long)]
        no_deps: bool,
    },

    /// Compare the built .api file with the released API
    Check,

    /// Run tasks by name (buildApi, exportApi, checkApi)
    Run {
        #[arg(required = true, value_name = "TASK")]
        tasks: Vec<String>,
    },

    /// List registered tasks in execution order
    Tasks,

    /// Show configuration sources and effective settings
    Config,
}
