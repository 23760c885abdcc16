use crate::core::ParserSettings;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod check; // use submodule at src/config/check.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub parser: ParserSettings,
    #[serde(default = "default_today_label")]
    pub today_label: String,
}

fn default_today_label() -> String {
    "Today".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserSettings::default(),
            today_label: default_today_label(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rtimetable")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rtimetable")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimetable.conf")
    }

    /// `--config` override (with `~/` expanded) or the default location
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        custom.map(expand_tilde).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(custom: Option<&str>) -> AppResult<Self> {
        let path = Self::resolve_path(custom);
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        log::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration file.
    /// An existing file is left alone; in test mode nothing is written.
    pub fn init_all(custom: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::resolve_path(custom);

        if is_test {
            return Ok(path);
        }

        if path.exists() {
            return Err(AppError::Config(format!(
                "config file already exists: {}",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = Config::default().to_yaml()?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }
}
