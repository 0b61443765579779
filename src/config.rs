//! Runtime configuration
//!
//! All externally-sourced settings (search endpoint, SMTP host, credentials)
//! are gathered into a single [`Config`] constructed once at process start and
//! passed into the components that need them. No component reads environment
//! variables or global constants on its own.

use crate::{ConfigError, ConfigResult};

/// Default search endpoint (Semantic Scholar Graph API paper search)
pub const DEFAULT_SEARCH_URL: &str = "https://api.semanticscholar.org/graph/v1/paper/search";

/// Default SMTP relay for outbound notification email
pub const DEFAULT_SMTP_HOST: &str = "smtp.office365.com";

/// Number of results requested per page of search output
pub const PAGE_SIZE: u32 = 10;

/// Fields requested from the search API for every result
pub const SEARCH_FIELDS: [&str; 7] = [
    "title",
    "authors",
    "url",
    "abstract",
    "citationCount",
    "fieldsOfStudy",
    "isOpenAccess",
];

/// Environment variable holding the SMTP login (also used as sender address)
pub const ENV_LOGIN: &str = "LOGIN";

/// Environment variable holding the SMTP password
pub const ENV_PASSWORD: &str = "PASSWORD";

/// Top-level runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub search: SearchConfig,
    pub smtp: SmtpConfig,
}

/// Search API configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Base URL of the paper search endpoint
    pub base_url: String,

    /// Results per requested page
    pub page_size: u32,
}

/// SMTP configuration for the notifier
///
/// Credentials are captured from the environment when the config is built but
/// their absence is only surfaced when an email send is actually attempted,
/// so runs without `--email` never require them.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host (STARTTLS)
    pub host: String,

    /// Login identity, also used as the sender address
    pub login: Option<String>,

    /// Password for the login identity
    pub password: Option<String>,
}

impl Config {
    /// Builds the configuration from defaults plus the process environment
    ///
    /// Reads `LOGIN` and `PASSWORD` for the SMTP credentials. Missing
    /// credentials are not an error here; they become one at send time.
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            search: SearchConfig {
                base_url: DEFAULT_SEARCH_URL.to_string(),
                page_size: PAGE_SIZE,
            },
            smtp: SmtpConfig {
                host: DEFAULT_SMTP_HOST.to_string(),
                login: std::env::var(ENV_LOGIN).ok(),
                password: std::env::var(ENV_PASSWORD).ok(),
            },
        };

        validate(&config)?;
        Ok(config)
    }
}

/// Validates a configuration
///
/// # Returns
///
/// * `Ok(())` - Configuration is usable
/// * `Err(ConfigError)` - A setting is malformed
pub fn validate(config: &Config) -> ConfigResult<()> {
    if url::Url::parse(&config.search.base_url).is_err() {
        return Err(ConfigError::InvalidEndpoint(
            config.search.base_url.clone(),
        ));
    }

    if config.search.page_size == 0 {
        return Err(ConfigError::Validation(
            "search page size must be at least 1".to_string(),
        ));
    }

    if config.smtp.host.is_empty() {
        return Err(ConfigError::Validation(
            "SMTP host must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            search: SearchConfig {
                base_url: DEFAULT_SEARCH_URL.to_string(),
                page_size: PAGE_SIZE,
            },
            smtp: SmtpConfig {
                host: DEFAULT_SMTP_HOST.to_string(),
                login: None,
                password: None,
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&test_config()).is_ok());
    }

    #[test]
    fn test_invalid_endpoint() {
        let mut config = test_config();
        config.search.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidEndpoint(_))
        ));
    }

    #[test]
    fn test_zero_page_size() {
        let mut config = test_config();
        config.search.page_size = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_smtp_host() {
        let mut config = test_config();
        config.smtp.host = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_credentials_are_not_fatal() {
        let config = test_config();
        assert!(config.smtp.login.is_none());
        assert!(config.smtp.password.is_none());
        assert!(validate(&config).is_ok());
    }
}
