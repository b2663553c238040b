use serde::Deserialize;

use crate::locale::Locale;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub polling: PollingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Root URL of the transport server, e.g. "http://127.0.0.1:3031".
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    pub poll_interval_ms: u64,
    /// How often to log app stats (ticks, feed failures) at INFO level.
    pub stats_log_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Default page language; overridable per request via the lang query param.
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Unit suffix for the energy rate column.
    #[serde(default = "default_rate_suffix")]
    pub rate_suffix: String,
}

fn default_locale() -> String {
    "en".into()
}

fn default_rate_suffix() -> String {
    "RF/t".into()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            rate_suffix: default_rate_suffix(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            self.backend.base_url.starts_with("http://") || self.backend.base_url.starts_with("https://"),
            "backend.base_url must be an http(s) URL, got {:?}",
            self.backend.base_url
        );
        anyhow::ensure!(
            self.polling.poll_interval_ms > 0,
            "polling.poll_interval_ms must be > 0, got {}",
            self.polling.poll_interval_ms
        );
        anyhow::ensure!(
            self.polling.stats_log_interval_secs > 0,
            "polling.stats_log_interval_secs must be > 0, got {}",
            self.polling.stats_log_interval_secs
        );
        anyhow::ensure!(
            Locale::parse(&self.display.locale).is_some(),
            "display.locale must be one of \"en\", \"ja\", got {:?}",
            self.display.locale
        );
        anyhow::ensure!(
            !self.display.rate_suffix.is_empty(),
            "display.rate_suffix must be non-empty"
        );
        Ok(())
    }

    pub fn locale(&self) -> Locale {
        Locale::parse(&self.display.locale).unwrap_or_default()
    }
}
