//! Configuration file loading for apisnap
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Environment: `APISNAP_*`, nested with `__` (e.g. `APISNAP_PROJECT__VERSION`)
//! 3. Project root: `./apisnap.toml` or `./.apisnap.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/apisnap/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileApiConfig, FileConfig, FileProjectConfig, FileRequestConfig, Severity,
};
pub use loader::ConfigLoader;
