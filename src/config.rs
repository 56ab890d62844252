use crate::error::{AppError, Result};
use namelist_common::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを上書きする環境変数
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    /// Google Apps Script Web App URL
    pub sheet_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            endpoint: DEFAULT_ENDPOINT.into(),
            sheet_url: None,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AppError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("namelist-ocr").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key.trim().to_string());
            }
        }

        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .ok_or(AppError::MissingApiKey)
    }

    pub fn has_api_key(&self) -> bool {
        self.get_api_key().is_ok()
    }

    /// 空文字は未設定として扱う
    pub fn sheet_url(&self) -> Option<&str> {
        self.sheet_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
    }

    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    pub fn set_sheet_url(&mut self, url: String) {
        self.sheet_url = Some(url);
    }

    pub fn clear_sheet_url(&mut self) {
        self.sheet_url = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_seconds, 120);
        assert!(config.sheet_url().is_none());
    }

    #[test]
    fn test_load_missing_file_gives_default() {
        let dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_save_and_load_sheet_url() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::default();
        config.set_sheet_url("https://script.google.com/macros/s/abc/exec".into());
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"sheet_url\""));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.sheet_url(), Some("https://script.google.com/macros/s/abc/exec"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"sheet_url": "https://example.com/exec"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.sheet_url(), Some("https://example.com/exec"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_blank_sheet_url_is_unset() {
        let mut config = Config::default();
        config.set_sheet_url("   ".into());
        assert!(config.sheet_url().is_none());

        config.set_sheet_url("https://example.com/exec".into());
        config.clear_sheet_url();
        assert!(config.sheet_url().is_none());
    }

    #[test]
    fn test_blank_api_key_in_file_is_missing() {
        let config = Config {
            api_key: Some("  ".into()),
            ..Default::default()
        };
        if std::env::var(API_KEY_ENV).is_err() {
            assert!(matches!(config.get_api_key(), Err(AppError::MissingApiKey)));
        }
    }
}
