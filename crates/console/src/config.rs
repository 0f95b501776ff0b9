use anyhow::Result;
use gameguide_shared::ScraperConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Scraper settings for this run: the saved file, then `GAMEGUIDE_*`
    /// overrides from the environment. Overrides are never written back.
    pub fn effective_scraper(&self) -> ScraperConfig {
        let mut scraper = self.scraper.clone();
        scraper.apply_env();
        scraper
    }

    /// Updates one setting by key. Returns false for unknown keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool> {
        match key {
            "base_url" => self.scraper.base_url = value.to_string(),
            "timeout_secs" => self.scraper.timeout_secs = value.parse()?,
            "max_redirects" => self.scraper.max_redirects = value.parse()?,
            "user_agent" => self.scraper.user_agent = value.to_string(),
            "log_filter" => self.log_filter = value.to_string(),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("gameguide").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_set_known_keys() {
        let mut config = Config::default();

        assert!(config.set("base_url", "http://localhost:3000").unwrap());
        assert!(config.set("timeout_secs", "30").unwrap());
        assert!(config.set("log_filter", "debug").unwrap());

        assert_eq!(config.scraper.base_url, "http://localhost:3000");
        assert_eq!(config.scraper.timeout_secs, 30);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_number() {
        let mut config = Config::default();

        assert!(!config.set("colour", "blue").unwrap());
        assert!(config.set("timeout_secs", "soon").is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "log_filter": "info" }"#).unwrap();

        assert_eq!(config.log_filter, "info");
        assert_eq!(config.scraper.timeout_secs, ScraperConfig::default().timeout_secs);
    }

    #[test]
    #[serial]
    fn test_env_overrides_saved_file_without_persisting() {
        // SAFETY: env-mutating tests are serialized.
        unsafe {
            std::env::set_var("GAMEGUIDE_BASE_URL", "http://127.0.0.1:8080");
        }

        let config = Config::default();
        let effective = config.effective_scraper();

        unsafe {
            std::env::remove_var("GAMEGUIDE_BASE_URL");
        }

        assert_eq!(effective.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.scraper.base_url, ScraperConfig::default().base_url);
        assert!(!serde_json::to_string(&config).unwrap().contains("8080"));
    }
}
