use bento::Month;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DialConfig {
    #[serde(default = "default_initial_month")]
    pub initial_month: Month,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            initial_month: default_initial_month(),
        }
    }
}

fn default_initial_month() -> Month {
    crate::dial::INITIAL_MONTH
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimelineConfig {
    #[serde(default = "default_year")]
    pub year: u16,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
        }
    }
}

fn default_year() -> u16 {
    bento::years::DEFAULT_YEAR
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dial: DialConfig,
    #[serde(default)]
    pub timeline: TimelineConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "timedial", "timedial")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("TIMEDIAL")
        .prefix_separator("_")
        .separator("__")
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(environment())
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
