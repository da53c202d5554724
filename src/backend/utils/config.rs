use crate::backend::splash::SplashTiming;
use crate::backend::splash::timing::{DISPLAY_MS, FADE_MS};
use crate::utils::{Error, Result, dirs};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowSettings,
    pub splash: SplashConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub enabled: bool,
    pub display_ms: u64,
    pub fade_ms: u64,
    pub title: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub animations_enabled: bool,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Dream Splash".to_string(),
            width: 1280.0,
            height: 832.0,
            resizable: false,
        }
    }
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            display_ms: DISPLAY_MS,
            fade_ms: FADE_MS,
            title: "Dream Splash".to_string(),
            tagline: "Getting things ready...".to_string(),
        }
    }
}

impl SplashConfig {
    pub fn timing(&self) -> SplashTiming {
        SplashTiming::from_millis(self.display_ms, self.fade_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animations_enabled: true,
        }
    }
}

pub struct ConfigManager {
    config_path: PathBuf,
    config: AppConfig,
}

impl ConfigManager {
    /// Opens the config in the application directory.
    pub fn new() -> Result<Self> {
        Self::open(dirs::app_dir().join("config.json"))
    }

    /// Loads `config_path`, writing defaults there first if it does not exist.
    pub fn open(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();

        let config = if config_path.exists() {
            debug!("Loading config from {}", config_path.display());
            Self::load_config(&config_path)?
        } else {
            info!("No config at {}, writing defaults", config_path.display());
            let default_config = AppConfig::default();
            Self::save_config(&config_path, &default_config)?;
            default_config
        };

        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    fn load_config(path: &Path) -> Result<AppConfig> {
        let content = fs::read_to_string(path).map_err(|e| Error::from(e).at(path))?;
        serde_json::from_str(&content).map_err(|e| Error::from(e).at(path))
    }

    fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::from(e).at(parent))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content).map_err(|e| Error::from(e).at(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let manager = ConfigManager::open(&path).unwrap();
        assert_eq!(manager.path(), path.as_path());
        assert!(path.exists());
        assert_eq!(manager.into_config(), AppConfig::default());

        let written: AppConfig =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, AppConfig::default());
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "splash": { "display_ms": 1500 } }"#).unwrap();

        let config = ConfigManager::open(&path).unwrap().into_config();
        assert_eq!(config.splash.display_ms, 1500);
        assert_eq!(config.splash.fade_ms, 300);
        assert!(config.splash.enabled);
        assert_eq!(config.window, WindowSettings::default());
        assert_eq!(
            config.splash.timing().display,
            Duration::from_millis(1500)
        );
    }

    #[test]
    fn invalid_json_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ splash: ").unwrap();

        let message = ConfigManager::open(&path).err().unwrap().to_string();
        assert!(message.starts_with(&path.display().to_string()));
        assert!(message.contains("JSON error:"));
    }

    #[test]
    fn default_timing_matches_splash_defaults() {
        assert_eq!(SplashConfig::default().timing(), SplashTiming::default());
    }
}
