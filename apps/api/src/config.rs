use anyhow::{Context, Result};

use crate::templates::TemplateStyle;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare environment starts the service.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Template used when a request names an unknown one.
    pub default_template: TemplateStyle,
    /// Request body limit; photos arrive inline as data URLs.
    pub max_body_bytes: usize,
}

const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            default_template: TemplateStyle::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_template = match std::env::var("FOLIO_DEFAULT_TEMPLATE") {
            Ok(tag) => TemplateStyle::parse(&tag)
                .with_context(|| format!("FOLIO_DEFAULT_TEMPLATE '{tag}' is not a known template"))?,
            Err(_) => TemplateStyle::default(),
        };

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            default_template,
            max_body_bytes: match std::env::var("FOLIO_MAX_BODY_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("FOLIO_MAX_BODY_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_BODY_BYTES,
            },
        })
    }
}
