use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICE_URL: &str = "https://mentorix-ai-backend.onrender.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_service_url")]
    pub url: String,
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,
    #[serde(default = "default_health_path")]
    pub health_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/mentorix/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(db_path) = overrides.db_path {
            self.storage.db_path = db_path.display().to_string();
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.service.timeout_secs = timeout_secs;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    pub fn default_template() -> String {
        let template = r#"[service]
# Default scoring service address. `--service-url` and a persisted
# override (`mentorix config --set-endpoint`) both take precedence.
url = "https://mentorix-ai-backend.onrender.com"
analyze_path = "/analyze-risk"
health_path = "/"
timeout_secs = 12
connect_timeout_secs = 6

[storage]
db_path = "~/.local/share/mentorix/progress.db"
"#;
        template.to_string()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            analyze_path: default_analyze_path(),
            health_path: default_health_path(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_analyze_path() -> String {
    "/analyze-risk".to_string()
}

fn default_health_path() -> String {
    "/".to_string()
}

fn default_timeout_secs() -> u64 {
    12
}

fn default_connect_timeout_secs() -> u64 {
    6
}

fn default_db_path() -> String {
    "~/.local/share/mentorix/progress.db".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::default_template()).expect("template");
        let defaults = Config::default();
        assert_eq!(parsed.service.url, defaults.service.url);
        assert_eq!(parsed.service.analyze_path, defaults.service.analyze_path);
        assert_eq!(parsed.service.timeout_secs, defaults.service.timeout_secs);
        assert_eq!(parsed.storage.db_path, defaults.storage.db_path);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let parsed: Config = toml::from_str("[service]\ntimeout_secs = 3\n").expect("partial");
        assert_eq!(parsed.service.timeout_secs, 3);
        assert_eq!(parsed.service.url, DEFAULT_SERVICE_URL);
        assert_eq!(parsed.service.health_path, "/");
    }

    #[test]
    fn missing_file_loads_defaults_and_bad_file_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("absent.toml");
        assert_eq!(
            Config::load(Some(&missing)).expect("defaults").service.timeout_secs,
            12
        );

        let bad = dir.path().join("bad.toml");
        fs::write(&bad, "[service\nurl = ").expect("write");
        assert!(Config::load(Some(&bad)).is_err());

        let written = dir.path().join("nested/config.toml");
        Config::write_template(&written).expect("template");
        assert!(Config::load(Some(&written)).is_ok());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            db_path: Some(PathBuf::from("/tmp/progress.db")),
            timeout_secs: Some(30),
        });
        assert_eq!(config.resolved_db_path(), PathBuf::from("/tmp/progress.db"));
        assert_eq!(config.service.timeout_secs, 30);
    }
}
