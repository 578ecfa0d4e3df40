//! Process configuration, read once from the environment at startup.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, anyhow, bail};

use hanumantay_ai::GeminiConfig;
use hanumantay_observability::LogFormat;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: SocketAddr,
    /// Directory holding the persisted catalog entries.
    pub data_dir: PathBuf,
    pub gemini: GeminiConfig,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = var("HANUMANTAY_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .with_context(|| format!("HANUMANTAY_BIND is not a socket address: {bind_raw:?}"))?;

        let data_dir = match var("HANUMANTAY_DATA_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::data_dir()
                .map(|d| d.join("hanumantay"))
                .ok_or_else(|| anyhow!("no platform data directory; set HANUMANTAY_DATA_DIR"))?,
        };

        let mut gemini = GeminiConfig::default();
        gemini.api_key = var("GEMINI_API_KEY").or_else(|| var("API_KEY"));
        if let Some(model) = var("GEMINI_MODEL") {
            gemini.model = model;
        }
        if let Some(base_url) = var("GEMINI_BASE_URL") {
            gemini.base_url = base_url;
        }
        if let Some(raw) = var("GEMINI_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("GEMINI_TIMEOUT_SECS is not a number: {raw:?}"))?;
            if secs == 0 {
                bail!("GEMINI_TIMEOUT_SECS must be positive");
            }
            gemini.timeout = Duration::from_secs(secs);
        }

        let log_format = var("HANUMANTAY_LOG_FORMAT")
            .map(|f| LogFormat::from_name(&f))
            .unwrap_or_default();

        Ok(Self {
            bind,
            data_dir,
            gemini,
            log_format,
        })
    }
}
