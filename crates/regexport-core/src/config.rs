use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP settings for downloading exports (optional `[http]` section).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole-request timeout; large events take a while to render.
    pub timeout_secs: u64,
    pub follow_redirects: bool,
    /// `Cookie` header value for the export endpoint, e.g. `sessionid=...`.
    /// Exports require a logged-in session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

impl HttpConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 120,
            follow_redirects: true,
            session_cookie: None,
        }
    }
}

/// Global configuration loaded from `~/.config/regexport/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexportConfig {
    /// Origin the export paths are resolved against, e.g. `https://helfer.example.org`.
    pub origin: String,
    /// Where downloaded exports are saved; current directory when unset.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for RegexportConfig {
    fn default() -> Self {
        Self {
            origin: "http://localhost:8000".to_string(),
            download_dir: None,
            http: HttpConfig::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("regexport")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RegexportConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<RegexportConfig> {
    if !path.exists() {
        let default_cfg = RegexportConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: RegexportConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
