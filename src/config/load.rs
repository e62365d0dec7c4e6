use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 設定檔位於目前工作目錄
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::from_settings_file(Path::new(SETTINGS_FILE))
    }

    /// 讀取設定檔；檔案不存在時使用預設值，讀取或解析失敗時記錄警告後使用預設值
    #[must_use]
    pub fn from_settings_file(path: &Path) -> Self {
        let settings = match Self::load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{e:#}");
                UserSettings::default()
            }
        };

        Self { settings }
    }

    fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}
