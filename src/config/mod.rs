use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{Result, ScrapingError};
use crate::parser::{DateRange, ExtractOptions};

pub const DEFAULT_OUTPUT_FILE: &str = "repos.csv";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub extraction: ExtractionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ExtractionConfig {
    pub date_range: DateRange,
    pub language: String, // empty means every language
    pub range_stars: bool,
    pub contributors: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub dump_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            extraction: ExtractionConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com/trending".to_string(),
            user_agent: concat!("trending-scraper/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            date_range: DateRange::Daily,
            language: String::new(),
            range_stars: true,
            contributors: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            dump_json: false,
        }
    }
}

impl Config {
    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            date_range: self.extraction.date_range,
            range_stars: self.extraction.range_stars,
            contributors: self.extraction.contributors,
        }
    }
}

#[async_trait::async_trait]
pub trait ConfigManager {
    async fn load_config(&self) -> Result<Config>;
    async fn save_config(&self, config: &Config) -> Result<()>;
    fn validate_config(&self, config: &Config) -> Result<()>;
}

pub struct FileConfigManager {
    config_path: PathBuf,
}

impl FileConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}

#[async_trait::async_trait]
impl ConfigManager for FileConfigManager {
    async fn load_config(&self) -> Result<Config> {
        info!("Loading configuration from {:?}", self.config_path);

        let config_content = fs::read_to_string(&self.config_path)
            .map_err(|e| ScrapingError::ConfigError(format!("Failed to read config file {:?}: {}", self.config_path, e)))?;

        let config: Config = toml::from_str(&config_content)
            .map_err(|e| ScrapingError::ConfigError(format!("Failed to parse TOML config: {}", e)))?;

        self.validate_config(&config)?;

        info!("Configuration loaded successfully");
        Ok(config)
    }

    async fn save_config(&self, config: &Config) -> Result<()> {
        info!("Saving configuration to {:?}", self.config_path);

        let toml_content = toml::to_string_pretty(config)
            .map_err(|e| ScrapingError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| ScrapingError::ConfigError(format!("Failed to create config directory: {}", e)))?;
            }
        }

        fs::write(&self.config_path, toml_content)
            .map_err(|e| ScrapingError::ConfigError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    fn validate_config(&self, config: &Config) -> Result<()> {
        debug!("Validating configuration");
        validate(config)
    }
}

/// Checks that do not depend on where the config came from.
pub fn validate(config: &Config) -> Result<()> {
    let base_url = &config.source.base_url;
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        return Err(ScrapingError::ConfigError(format!(
            "base_url '{}' must start with http:// or https://",
            base_url
        )));
    }

    if config.source.timeout_secs == 0 {
        return Err(ScrapingError::ConfigError("timeout_secs must be greater than 0".to_string()));
    }

    if config.source.user_agent.trim().is_empty() {
        return Err(ScrapingError::ConfigError("user_agent cannot be empty".to_string()));
    }

    if config.extraction.language.contains('/') {
        return Err(ScrapingError::ConfigError(format!(
            "language '{}' cannot contain '/'",
            config.extraction.language
        )));
    }

    if config.output.path.as_os_str().is_empty() {
        return Err(ScrapingError::ConfigError("output path cannot be empty".to_string()));
    }

    Ok(())
}
