use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Notification surface parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Delay in seconds between showing the surface and the notification firing.
    pub delay_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { delay_secs: 1 }
    }
}

fn default_app_schemes() -> Vec<String> {
    ["firefox", "firefox-beta", "firefox-nightly", "fennec"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

/// Global configuration loaded from `~/.config/linkroute/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkrouteConfig {
    /// Custom URL schemes owned by the application (compared lowercase).
    #[serde(default = "default_app_schemes")]
    pub app_schemes: Vec<String>,
    /// Browsing mode assumed when nothing has been recorded yet.
    #[serde(default)]
    pub private_by_default: bool,
    /// JSON snapshot of open tabs written by the widget extension.
    #[serde(default)]
    pub tabs_snapshot: Option<PathBuf>,
    /// Feature flag for the update onboarding sheet.
    #[serde(default = "default_true")]
    pub onboarding_upgrade: bool,
    /// Optional notification settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub notification: Option<NotificationConfig>,
}

impl Default for LinkrouteConfig {
    fn default() -> Self {
        Self {
            app_schemes: default_app_schemes(),
            private_by_default: false,
            tabs_snapshot: None,
            onboarding_upgrade: true,
            notification: None,
        }
    }
}

impl LinkrouteConfig {
    /// Notification settings, falling back to defaults.
    pub fn notification_or_default(&self) -> NotificationConfig {
        self.notification.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkroute")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkrouteConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinkrouteConfig> {
    if !path.exists() {
        let default_cfg = LinkrouteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: LinkrouteConfig = toml::from_str(&data)?;
    Ok(cfg)
}
