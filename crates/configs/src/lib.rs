use std::io;

use anyhow::Result;
use serde::Deserialize;
use anyhow::{anyhow, Context};

pub use models::contact::DEFAULT_CONTACT_KEY;
pub use models::video::DEFAULT_VIDEOS_KEY;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4), log_format: LogFormat::Compact }
    }
}

/// Key-value backend settings. Without a `redis_url` the site runs on the
/// non-persistent in-memory store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub redis_url: Option<String>,
    #[serde(default = "default_videos_key")]
    pub videos_key: String,
    #[serde(default = "default_contact_key")]
    pub contact_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { redis_url: None, videos_key: default_videos_key(), contact_key: default_contact_key() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: String,
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { frontend_dir: default_frontend_dir(), api_prefix: default_api_prefix() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }
fn default_videos_key() -> String { DEFAULT_VIDEOS_KEY.into() }
fn default_contact_key() -> String { DEFAULT_CONTACT_KEY.into() }
fn default_frontend_dir() -> String { "frontend".into() }
fn default_api_prefix() -> String { "/api".into() }

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// Parsed config file, `None` when the file does not exist. A file that
/// exists but cannot be read or parsed is an error.
pub fn load_from_file(path: &str) -> Result<Option<AppConfig>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("failed to read config file {path}")),
    };
    parse(&content).with_context(|| format!("invalid config file {path}")).map(Some)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file when present, defaults otherwise; environment variables
    /// fill in whatever the file leaves open.
    pub fn load_or_env() -> Result<Self> {
        Self::load_from(&config_path(), |k| std::env::var(k).ok())
    }

    pub fn load_from<F>(path: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = load_from_file(path)?.unwrap_or_default();
        cfg.apply_env(lookup);
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Environment overrides. `SERVER_HOST`, `SERVER_PORT`, `TOKIO_WORKER_THREADS`
    /// and `LOG_FORMAT` replace file values; `REDIS_URL` only fills an empty
    /// `store.redis_url`.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("SERVER_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SERVER_PORT").and_then(|p| p.parse::<u16>().ok()) {
            self.server.port = port;
        }
        if let Some(w) = lookup("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }
        match lookup("LOG_FORMAT").as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("json") => self.server.log_format = LogFormat::Json,
            Some("compact") => self.server.log_format = LogFormat::Compact,
            _ => {}
        }
        self.store.fill_from_env(&lookup);
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.store.validate()?;
        self.site.validate()?;
        Ok(())
    }
}

impl ServerConfig {
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
}

impl StoreConfig {
    fn fill_from_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let configured = self.redis_url.as_deref().map(str::trim).is_some_and(|u| !u.is_empty());
        if !configured {
            self.redis_url = lookup("REDIS_URL").filter(|u| !u.trim().is_empty());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.videos_key.trim().is_empty() || self.contact_key.trim().is_empty() {
            return Err(anyhow!("store.videos_key and store.contact_key must not be empty"));
        }
        if self.videos_key == self.contact_key {
            return Err(anyhow!("store.videos_key and store.contact_key must differ"));
        }
        Ok(())
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.api_prefix.starts_with('/') || self.api_prefix.len() < 2 || self.api_prefix.ends_with('/') {
            return Err(anyhow!("site.api_prefix must look like `/api`"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let mut cfg = parse("").unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert_eq!(cfg.server.log_format, LogFormat::Compact);
        assert_eq!(cfg.store.videos_key, DEFAULT_VIDEOS_KEY);
        assert_eq!(cfg.store.contact_key, DEFAULT_CONTACT_KEY);
        assert!(cfg.store.redis_url.is_none());
        assert_eq!(cfg.site.api_prefix, "/api");
    }

    #[test]
    fn file_values_are_read() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000
            log_format = "json"

            [store]
            redis_url = "redis://cache:6379"
            videos_key = "v"
            contact_key = "c"

            [site]
            frontend_dir = "dist"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.log_format, LogFormat::Json);
        assert_eq!(cfg.store.redis_url.as_deref(), Some("redis://cache:6379"));
        assert_eq!(cfg.site.frontend_dir, "dist");
    }

    #[test]
    fn env_fills_missing_redis_url_only() {
        let mut cfg = AppConfig::default();
        cfg.apply_env(env(&[("REDIS_URL", "redis://env:6379"), ("SERVER_PORT", "9000"), ("LOG_FORMAT", "JSON")]));
        assert_eq!(cfg.store.redis_url.as_deref(), Some("redis://env:6379"));
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.log_format, LogFormat::Json);

        let mut cfg = parse("[store]\nredis_url = \"redis://file:6379\"").unwrap();
        cfg.apply_env(env(&[("REDIS_URL", "redis://env:6379")]));
        assert_eq!(cfg.store.redis_url.as_deref(), Some("redis://file:6379"));
    }

    fn temp_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("heritage-configs-{}-{name}.toml", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults_and_env() {
        let cfg = AppConfig::load_from("/definitely/not/here/config.toml", env(&[("REDIS_URL", "redis://env:6379")]))
            .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.store.redis_url.as_deref(), Some("redis://env:6379"));
    }

    #[test]
    fn malformed_file_is_an_error_not_defaults() {
        let path = temp_config("malformed", "[store]\nredis_url = \"redis://prod:6379\"\nvideos_key = \n");
        let res = AppConfig::load_from(path.to_str().unwrap(), env(&[]));
        let _ = std::fs::remove_file(&path);
        let err = res.unwrap_err();
        assert!(format!("{err:#}").contains("invalid config file"), "{err:#}");
    }

    #[test]
    fn existing_file_is_used() {
        let path = temp_config("valid", "[store]\nredis_url = \"redis://prod:6379\"\n");
        let res = AppConfig::load_from(path.to_str().unwrap(), env(&[]));
        let _ = std::fs::remove_file(&path);
        assert_eq!(res.unwrap().store.redis_url.as_deref(), Some("redis://prod:6379"));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut cfg = parse("[server]\nport = 0").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[store]\nvideos_key = \"same\"\ncontact_key = \"same\"").unwrap();
        assert!(cfg.normalize_and_validate().is_err());

        let mut cfg = parse("[site]\napi_prefix = \"api\"").unwrap();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
