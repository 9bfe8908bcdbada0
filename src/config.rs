use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NormalizerError, Result};

pub const DEFAULT_ONLINE_CSV: &str = "raw-online.csv";
pub const DEFAULT_IN_PERSON_CSV: &str = "raw-in-person.csv";
pub const DEFAULT_OUTPUT_JSON: &str = "normalized.json";

/// Optional `config.toml` overrides for the input and output paths.
/// Absent file means all defaults; CLI flags override whatever is here.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub online_csv: Option<PathBuf>,
    pub in_person_csv: Option<PathBuf>,
    pub output_json: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = "config.toml";
        if !Path::new(config_path).exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            NormalizerError::Config(format!("Failed to read config file '{}': {}", config_path, e))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
