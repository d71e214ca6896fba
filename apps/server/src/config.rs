use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use rust_decimal::Decimal;
use tariffwatch_core::settings::ModelSettings;
use tariffwatch_core::utils::numeric_utils::ParseMode;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Optional JSON file replacing the built-in alert/mitigation catalog
    pub content_file: Option<PathBuf>,
    pub model: ModelSettings,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = env_or("TW_LISTEN_ADDR", "0.0.0.0:8080")
            .parse()
            .context("Invalid TW_LISTEN_ADDR")?;
        let cors_allow = env_or("TW_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("TW_REQUEST_TIMEOUT_MS", "30000")
            .parse()
            .unwrap_or(30000);
        let content_file = std::env::var("TW_CONTENT_FILE")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let mut model = ModelSettings::default();
        if let Ok(rate) = std::env::var("TW_FLAT_TARIFF_RATE") {
            model.flat_tariff_rate_percent =
                Decimal::from_str(rate.trim()).context("Invalid TW_FLAT_TARIFF_RATE")?;
        }
        if let Ok(per_page) = std::env::var("TW_PRODUCTS_PER_PAGE") {
            model.products_per_page = per_page
                .trim()
                .parse()
                .context("Invalid TW_PRODUCTS_PER_PAGE")?;
        }
        let strict = env_or("TW_STRICT_PARSING", "false");
        if strict.eq_ignore_ascii_case("true") || strict == "1" {
            model.parse_mode = ParseMode::Strict;
        }
        model.validate()?;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            content_file,
            model,
        })
    }
}
