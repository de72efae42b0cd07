//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, in lookup order.
const PROJECT_CONFIG_FILES: [&str; 2] = ["apisnap.toml", ".apisnap.toml"];

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "APISNAP_";

/// Keys whose environment values stay text even when they look numeric,
/// so `APISNAP_PROJECT__VERSION=2` means the version "2".
const ENV_STRING_KEYS: [&str; 8] = [
    "project.name",
    "project.version",
    "project.root_dir",
    "project.project_dir",
    "project.build_dir",
    "api.api_file",
    "api.extractor",
    "request.api_version",
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. `APISNAP_*` environment variables
    /// 3. Project root: `./apisnap.toml` or `./.apisnap.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/apisnap/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Path::new("."),
            Self::global_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
            ENV_PREFIX,
        )
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn load_from(
        base_dir: &Path,
        global: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(path) = Self::project_config_path_in(base_dir) {
            figment = figment.merge(Toml::file(path));
        }

        // Env values are parsed as typed values; string keys bypass that
        let env = Env::prefixed(env_prefix).split("__");
        figment = figment.merge(env.clone().ignore(&ENV_STRING_KEYS));
        for (key, value) in env.only(&ENV_STRING_KEYS).iter() {
            figment = figment.merge(Serialized::default(key.as_str(), value));
        }

        // Explicit path (highest priority); a missing file is an error here
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/apisnap/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("apisnap").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_path_in(Path::new("."))
    }

    fn project_config_path_in(base_dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| base_dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{mark:^7}] Explicit: {}", path.display());
        }

        println!("  [       ] Environment: {ENV_PREFIX}*");

        match Self::project_config_path() {
            Some(path) => println!("  [ FOUND ] Project: {}", path.display()),
            None => println!("  [       ] Project: ./apisnap.toml or ./.apisnap.toml"),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "" };
            println!("  [{mark:^7}] Global:  {}", path.display());
        }

        println!("  [       ] Default: built-in defaults");
    }
}
