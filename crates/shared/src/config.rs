// crates/shared/src/config.rs
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://www.metacritic.com";

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// HTTP settings for talking to the review aggregator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScraperConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub max_redirects: usize,
    pub user_agent: String,
    pub accept: String,
    pub accept_language: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 15,
            max_redirects: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8".to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
        }
    }
}

impl ScraperConfig {
    /// Defaults, overridden by `GAMEGUIDE_*` variables from the environment or `.env`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Applies `GAMEGUIDE_*` overrides from the environment or `.env` on top
    /// of the current values. Unset or blank variables leave a field alone.
    pub fn apply_env(&mut self) {
        dotenvy::dotenv().ok();

        if let Ok(url) = std::env::var("GAMEGUIDE_BASE_URL") {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }

        if let Ok(raw) = std::env::var("GAMEGUIDE_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.timeout_secs = secs,
                _ => warn!("Ignoring invalid GAMEGUIDE_TIMEOUT_SECS value '{}'", raw),
            }
        }

        if let Ok(agent) = std::env::var("GAMEGUIDE_USER_AGENT") {
            if !agent.trim().is_empty() {
                self.user_agent = agent;
            }
        }
    }

    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

// Global config management
static CONFIG: OnceCell<ScraperConfig> = OnceCell::new();

/// Host binaries call this at startup. Returns false if a config was already installed.
pub fn install(config: ScraperConfig) -> bool {
    CONFIG.set(config).is_ok()
}

pub fn current() -> ScraperConfig {
    CONFIG.get().cloned().unwrap_or_else(ScraperConfig::from_env)
}
