//! Application configuration.
//!
//! All credentials and endpoints live in an explicit [`Config`] passed into
//! each collaborator constructor; nothing is read from the environment at
//! call time. Loading fails fast with [`Error::MissingCredential`] instead
//! of deferring the failure to the first remote call.

use crate::error::{Error, Result};

/// Environment variable holding the completion-oracle API key.
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";

/// Environment variable holding the scraping API key.
pub const FIRECRAWL_API_KEY: &str = "FIRECRAWL_API_KEY";

/// Environment variable enabling offline mode.
pub const OFFLINE_VAR: &str = "APPLYKIT_OFFLINE";

const DEFAULT_FIRECRAWL_BASE_URL: &str = "https://api.firecrawl.dev/v1";

/// Credentials and endpoints for the remote collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    /// Completion-oracle API key. Empty only in offline mode.
    pub anthropic_api_key: String,

    /// Scraping API key. Empty only in offline mode.
    pub firecrawl_api_key: String,

    /// Scraping API base URL.
    pub firecrawl_base_url: String,

    /// When set, remote collaborators serve deterministic placeholder
    /// content and no network calls are made.
    pub offline: bool,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    ///
    /// Required credentials missing while offline mode is off yield
    /// [`Error::MissingCredential`] immediately.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let offline = std::env::var(OFFLINE_VAR)
            .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "t" | "yes"))
            .unwrap_or(false);

        if offline {
            log::warn!("offline mode: remote collaborators will serve placeholder content");
            return Ok(Self::offline());
        }

        Ok(Self {
            anthropic_api_key: require_env(ANTHROPIC_API_KEY)?,
            firecrawl_api_key: require_env(FIRECRAWL_API_KEY)?,
            firecrawl_base_url: std::env::var("FIRECRAWL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_FIRECRAWL_BASE_URL.to_string()),
            offline: false,
        })
    }

    /// A configuration that never touches the network.
    pub fn offline() -> Self {
        Self {
            anthropic_api_key: String::new(),
            firecrawl_api_key: String::new(),
            firecrawl_base_url: DEFAULT_FIRECRAWL_BASE_URL.to_string(),
            offline: true,
        }
    }
}

fn require_env(key: &'static str) -> Result<String> {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingCredential(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_config_needs_no_credentials() {
        let config = Config::offline();
        assert!(config.offline);
        assert!(config.anthropic_api_key.is_empty());
        assert_eq!(config.firecrawl_base_url, DEFAULT_FIRECRAWL_BASE_URL);
    }

    #[test]
    fn test_require_env_missing() {
        std::env::remove_var("APPLYKIT_TEST_ABSENT");
        let err = require_env("APPLYKIT_TEST_ABSENT").unwrap_err();
        assert!(matches!(err, Error::MissingCredential("APPLYKIT_TEST_ABSENT")));
    }
}
