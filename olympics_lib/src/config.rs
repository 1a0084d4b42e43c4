//! Data-source configuration: file paths and season.
//!
//! Values are resolved from command-line/environment overrides first, then
//! the TOML config file, then built-in defaults.

use std::io;
use std::path::{Path, PathBuf};

use olympics_data::types::Season;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "olympics.toml";
pub const DEFAULT_ATHLETES_FILE: &str = "athlete_events.csv";
pub const DEFAULT_REGIONS_FILE: &str = "noc_regions.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("TOML parse error: {0}")]
    TomlParse(String),
    #[error("unknown season '{0}'. Valid values: summer, winter")]
    InvalidSeason(String),
}

/// Contents of `olympics.toml`.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub data: DataSection,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DataSection {
    pub athletes: Option<PathBuf>,
    pub regions: Option<PathBuf>,
    pub season: Option<String>,
}

/// Values supplied on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub athletes: Option<PathBuf>,
    pub regions: Option<PathBuf>,
    pub season: Option<String>,
}

/// Fully resolved data sources.
#[derive(Debug, Clone, PartialEq)]
pub struct DataConfig {
    pub athletes: PathBuf,
    pub regions: PathBuf,
    pub season: Season,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            athletes: PathBuf::from(DEFAULT_ATHLETES_FILE),
            regions: PathBuf::from(DEFAULT_REGIONS_FILE),
            season: Season::Summer,
        }
    }
}

pub fn parse_config(content: &str) -> Result<ConfigFile, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))
}

/// Reads a config file. A missing file yields an empty config unless
/// `required` is set.
pub fn load_config_file(path: &Path, required: bool) -> Result<ConfigFile, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!("Loaded config from {}", path.display());
            parse_config(&content)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Ok(ConfigFile::default())
        }
        Err(source) => Err(ConfigError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub fn parse_season(input: &str) -> Result<Season, ConfigError> {
    input
        .parse::<Season>()
        .map_err(|_| ConfigError::InvalidSeason(input.trim().to_string()))
}

/// Merges overrides over the file over defaults.
pub fn resolve(file: ConfigFile, overrides: ConfigOverrides) -> Result<DataConfig, ConfigError> {
    let defaults = DataConfig::default();
    let season = match overrides.season.or(file.data.season) {
        Some(s) => parse_season(&s)?,
        None => defaults.season,
    };
    Ok(DataConfig {
        athletes: overrides
            .athletes
            .or(file.data.athletes)
            .unwrap_or(defaults.athletes),
        regions: overrides
            .regions
            .or(file.data.regions)
            .unwrap_or(defaults.regions),
        season,
    })
}
