use std::env;
use std::time::Duration;
use url::Url;
use validator::Validate;

use crate::assistant::Role;
use crate::error::AppError;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl LogFormat {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "LOG_FORMAT must be 'pretty' or 'json', got '{}'",
                other
            ))),
        }
    }
}

/// Runtime configuration, read from the environment.
#[derive(Debug, Clone, Validate)]
pub struct AppConfig {
    /// Base URL of the remote chat backend. Offline-only when unset.
    #[validate(url)]
    pub chat_api_url: Option<String>,
    pub chat_api_token: Option<String>,
    /// Upper bound for a single remote call, in seconds.
    #[validate(range(min = 1, max = 120))]
    pub chat_api_timeout_secs: u64,
    pub default_role: Role,
    pub user_id: Option<String>,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat_api_url: None,
            chat_api_token: None,
            chat_api_timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_role: Role::Visitor,
            user_id: None,
            log_format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Reads `CHAT_API_URL`, `CHAT_API_TOKEN`, `CHAT_API_TIMEOUT_SECS`,
    /// `CHAT_DEFAULT_ROLE`, `CHAT_USER_ID` and `LOG_FORMAT`.
    ///
    /// Call `dotenv::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self, AppError> {
        let chat_api_timeout_secs = match non_empty_var("CHAT_API_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!("CHAT_API_TIMEOUT_SECS '{}' is invalid: {}", raw, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            chat_api_url: non_empty_var("CHAT_API_URL"),
            chat_api_token: non_empty_var("CHAT_API_TOKEN"),
            chat_api_timeout_secs,
            default_role: non_empty_var("CHAT_DEFAULT_ROLE")
                .map(|raw| Role::parse(&raw))
                .unwrap_or_default(),
            user_id: non_empty_var("CHAT_USER_ID"),
            log_format: LogFormat::parse(&non_empty_var("LOG_FORMAT").unwrap_or_default())?,
        };

        config.check()?;
        Ok(config)
    }

    /// Field validation plus the http(s) scheme rule for the backend URL.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate()?;

        if let Some(raw) = &self.chat_api_url {
            let url = Url::parse(raw)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AppError::Config(format!(
                    "CHAT_API_URL must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }

        Ok(())
    }

    pub fn chat_api_timeout(&self) -> Duration {
        Duration::from_secs(self.chat_api_timeout_secs)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
