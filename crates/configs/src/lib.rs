use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;
use std::path::Path;
use url::Url;

/// URL used when the embedded database is selected.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8081 }

/// Database selection and pool settings.
///
/// `url`, `user` and `password` select the server database. With
/// `embedded = true` (or no URL at all) an in-process SQLite memory
/// database is used instead.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub embedded: bool,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            user: None,
            password: None,
            embedded: false,
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

/// Like [`load_default`], but a missing file yields the built-in defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_path();
    if !Path::new(&path).exists() {
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_or_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Defaults plus environment overrides, without reading any file.
    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_with(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup` (environment variable style keys), then validate.
    pub fn normalize_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.server.apply_overrides(&lookup)?;
        self.server.normalize()?;
        self.database.apply_overrides(&lookup)?;
        self.database.normalize();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: &F) -> Result<()> {
        if let Some(host) = lookup("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT") {
            self.port = port.trim().parse().map_err(|_| anyhow!("SERVER_PORT is not a valid port: {port}"))?;
        }
        if let Some(threads) = lookup("TOKIO_WORKER_THREADS") {
            self.worker_threads = threads.trim().parse().ok();
        }
        Ok(())
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    /// Configuration for the embedded in-memory database.
    pub fn in_memory() -> Self {
        Self { embedded: true, ..Self::default() }
    }

    fn apply_overrides<F: Fn(&str) -> Option<String>>(&mut self, lookup: &F) -> Result<()> {
        if let Some(url) = lookup("DATABASE_URL") {
            self.url = url;
        }
        if let Some(user) = lookup("DATABASE_USER") {
            self.user = Some(user);
        }
        if let Some(password) = lookup("DATABASE_PASSWORD") {
            self.password = Some(password);
        }
        if let Some(embedded) = lookup("DATABASE_EMBEDDED") {
            self.embedded = parse_bool(&embedded)
                .ok_or_else(|| anyhow!("DATABASE_EMBEDDED must be true/false, got {embedded}"))?;
        }
        Ok(())
    }

    fn normalize(&mut self) {
        if self.url.trim().is_empty() {
            self.embedded = true;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.embedded {
            let parsed = Url::parse(self.url.trim()).map_err(|e| anyhow!("database.url is not a valid URL: {e}"))?;
            if !matches!(parsed.scheme(), "postgres" | "postgresql" | "sqlite") {
                return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
            }
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }

    /// URL handed to the driver, with `user`/`password` spliced in when the
    /// configured URL carries no credentials of its own.
    pub fn connection_url(&self) -> String {
        if self.embedded {
            return IN_MEMORY_URL.to_string();
        }
        match Url::parse(self.url.trim()) {
            Ok(url) => with_credentials(url, self.user.as_deref(), self.password.as_deref()).into(),
            Err(_) => self.url.clone(),
        }
    }

    /// Connection URL with any credentials stripped, for logging.
    pub fn display_url(&self) -> String {
        let raw = self.connection_url();
        let Ok(mut url) = Url::parse(&raw) else { return raw };
        if url.cannot_be_a_base() {
            return raw;
        }
        // a base URL always accepts an empty username and no password
        let _ = url.set_password(None);
        let _ = url.set_username("");
        url.into()
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn with_credentials(mut url: Url, user: Option<&str>, password: Option<&str>) -> Url {
    let Some(user) = user.filter(|u| !u.is_empty()) else { return url };
    if !url.username().is_empty() || url.cannot_be_a_base() {
        return url;
    }
    let original = url.clone();
    if url.set_username(user).is_err() {
        return original;
    }
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        if url.set_password(Some(password)).is_err() {
            return original;
        }
    }
    url
}
