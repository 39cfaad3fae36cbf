use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ACCEPT_VERSION: &str = "v10";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    // QuickPay (upstream processor)
    pub api_secret: String,
    pub base_url: String,
    pub accept_version: String,
    pub upstream_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Missing credentials are
    /// tolerated here; the processor rejects the calls later.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match var("PORT") {
                Some(port) => port.parse().context("Invalid PORT")?,
                None => DEFAULT_PORT,
            },

            api_secret: var("QUICKPAY_USER_KEY").unwrap_or_default(),
            base_url: var("BASE_URL").unwrap_or_default(),
            accept_version: var("QUICKPAY_ACCEPT_VERSION")
                .unwrap_or_else(|| DEFAULT_ACCEPT_VERSION.to_string()),
            upstream_timeout: var("QUICKPAY_TIMEOUT_SECS")
                .map(|secs| secs.parse().map(Duration::from_secs))
                .transpose()
                .context("Invalid QUICKPAY_TIMEOUT_SECS")?,
        };

        config.warn_if_incomplete();
        Ok(config)
    }

    /// Test and embedding constructor: everything but the credentials defaulted.
    pub fn new(api_secret: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            api_secret: api_secret.into(),
            base_url: base_url.into(),
            accept_version: DEFAULT_ACCEPT_VERSION.to_string(),
            upstream_timeout: None,
        }
    }

    pub fn auth_header(&self) -> String {
        basic_auth(&self.api_secret)
    }

    fn warn_if_incomplete(&self) {
        if self.api_secret.is_empty() {
            tracing::warn!("QUICKPAY_USER_KEY is not set, upstream calls will be rejected");
        }
        if self.base_url.is_empty() {
            tracing::warn!("BASE_URL is not set, upstream calls will fail");
        }
    }
}

/// HTTP Basic credential with an empty username and the secret as password.
pub fn basic_auth(secret: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!(":{}", secret)))
}
