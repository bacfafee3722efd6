use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";
pub const API_KEY_PLACEHOLDER: &str = "YOUR_API_KEY";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub home: HomeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HomeConfig {
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_ttl_seconds() -> u64 {
    300 // 5 minutes
}

fn default_categories() -> Vec<String> {
    ["action", "comedy", "drama", "thriller"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
        }
    }
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the file if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `OMDB_API_KEY` wins over the file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("OMDB_API_KEY") {
            if !key.trim().is_empty() {
                self.omdb.api_key = key.trim().to_string();
            }
        }
    }

    pub fn is_api_key_configured(&self) -> bool {
        let key = self.omdb.api_key.trim();
        !key.is_empty() && key != API_KEY_PLACEHOLDER
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.is_api_key_configured() {
            return Err(anyhow::anyhow!(
                "OMDb API key is not configured (set omdb.api_key or OMDB_API_KEY)"
            ));
        }
        if self.omdb.base_url.trim().is_empty() {
            return Err(anyhow::anyhow!("omdb.base_url cannot be empty"));
        }
        if self.cache.ttl_seconds == 0 {
            return Err(anyhow::anyhow!("cache.ttl_seconds must be greater than zero"));
        }
        if self.home.categories.iter().all(|c| c.trim().is_empty()) {
            return Err(anyhow::anyhow!("home.categories must name at least one category"));
        }
        Ok(())
    }

    /// API key with all but the last four characters masked
    pub fn masked_api_key(&self) -> String {
        let key = self.omdb.api_key.trim();
        if key.is_empty() {
            return "(not set)".to_string();
        }
        let visible: String = key.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
        format!("{}{}", "*".repeat(key.chars().count().saturating_sub(4)), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            omdb: OmdbConfig {
                api_key: "abc12345".to_string(),
                ..OmdbConfig::default()
            },
            cache: CacheConfig { ttl_seconds: 60 },
            home: HomeConfig {
                categories: vec!["horror".to_string()],
            },
            logging: LoggingConfig::default(),
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.omdb.api_key, "abc12345");
        assert_eq!(loaded.omdb.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.cache.ttl_seconds, 60);
        assert_eq!(loaded.home.categories, vec!["horror".to_string()]);
    }

    #[test]
    fn test_config_defaults_from_partial_file() {
        let config: Config = toml::from_str("[omdb]\napi_key = \"k\"\n").unwrap();
        assert_eq!(config.omdb.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache.ttl_seconds, 300);
        assert_eq!(config.home.categories.len(), 4);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        config.omdb.api_key = API_KEY_PLACEHOLDER.to_string();
        assert!(config.validate().is_err());
        assert!(!config.is_api_key_configured());

        config.omdb.api_key = "real_key".to_string();
        assert!(config.validate().is_ok());

        config.cache.ttl_seconds = 0;
        assert!(config.validate().is_err());

        config.cache.ttl_seconds = 300;
        config.home.categories = vec![];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = Config::default();
        assert_eq!(config.masked_api_key(), "(not set)");
        config.omdb.api_key = "abcd1234".to_string();
        assert_eq!(config.masked_api_key(), "****1234");
        config.omdb.api_key = "xy".to_string();
        assert_eq!(config.masked_api_key(), "xy");
    }
}
