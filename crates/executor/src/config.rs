use config::{Config as ConfigLoader, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::Error;
use super::types::{Algorithm, SourceKind};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "rate-path.toml";

/// Environment variables such as `RATE_PATH_SEARCH__MAX_PATHS=50` override file values.
pub const ENV_PREFIX: &str = "RATE_PATH";

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub max_paths: Option<usize>,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub source: SourceKind,
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub dot_path: Option<PathBuf>,
    pub show_all_paths: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub data: DataConfig,
    pub output: OutputConfig,
}

/// The `RATE_PATH_*` override layer. `__` separates nested keys.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Loads configuration from built-in defaults, a TOML file and environment variables,
/// in increasing order of precedence.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    load_layers(path, environment())
}

fn load_layers(path: Option<&Path>, env: Environment) -> Result<Config, Error> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigLoadError(format!(
                    "Configuration file not found at path: {}",
                    path.display()
                )));
            }
            File::from(path).format(FileFormat::Toml).required(true)
        }
        None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
    };

    let s = ConfigLoader::builder()
        .set_default("search.algorithm", "max_product")
        .and_then(|b| b.set_default("data.source", "sample"))
        .and_then(|b| b.set_default("output.show_all_paths", false))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(file)
        .add_source(env)
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    Ok(app_config)
}
