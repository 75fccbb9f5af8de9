use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Display name reported under `server.name` in every snapshot.
    pub name: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    3405
}

/// Shared-secret check on the `x-api-key` header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub key: String,
    #[serde(default, alias = "needAuth")]
    pub need_auth: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoringConfig {
    /// Upper bound for one full provider collection (all five fetches).
    #[serde(default = "default_collect_timeout_ms")]
    pub collect_timeout_ms: u64,
}

fn default_collect_timeout_ms() -> u64 {
    10_000
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            collect_timeout_ms: default_collect_timeout_ms(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
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
            !self.server.name.trim().is_empty(),
            "server.name must be non-empty"
        );
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.api.need_auth || !self.api.key.is_empty(),
            "api.key must be non-empty when api.need_auth is true"
        );
        anyhow::ensure!(
            self.monitoring.collect_timeout_ms > 0,
            "monitoring.collect_timeout_ms must be > 0, got {}",
            self.monitoring.collect_timeout_ms
        );
        Ok(())
    }

    pub fn collect_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.monitoring.collect_timeout_ms)
    }
}
