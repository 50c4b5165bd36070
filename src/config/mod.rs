//! Configuration management module.
//!
//! This module handles loading, saving, and managing application configuration,
//! including the API base URL, page size, theme preference and key bindings.

mod error;
pub mod hotkeys;

pub use error::ConfigError;
pub use hotkeys::{HotkeyAction, ViewHotkeys};

use crate::error::AppResult;
use crate::state::{ThemeMode, ThemePreference};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/jobbank-tui";
const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Oversees management of configuration file.
///
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: String,
    pub page_size: u32,
    pub theme: Option<ThemeMode>,
    pub request_timeout_secs: Option<u64>,
    pub hotkeys: ViewHotkeys,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub hotkeys: ViewHotkeys,
}

/// Parse a page size given as text, e.g. on the command line, with the same
/// bounds the config file is held to.
///
pub fn parse_page_size(value: &str) -> Result<u32, ConfigError> {
    let page_size = value
        .trim()
        .parse::<u32>()
        .map_err(|_| ConfigError::InvalidValue {
            field: "page_size",
            message: format!("'{}' is not a number", value),
        })?;
    check_page_size(page_size)?;
    Ok(page_size)
}

fn check_page_size(page_size: u32) -> Result<(), ConfigError> {
    if page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(ConfigError::InvalidValue {
            field: "page_size",
            message: format!("must be between 1 and {}, got {}", MAX_PAGE_SIZE, page_size),
        });
    }
    Ok(())
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Return a new instance with default values and no file.
    ///
    pub fn new() -> Config {
        Config {
            api_url: default_api_url(),
            page_size: DEFAULT_PAGE_SIZE,
            theme: None,
            request_timeout_secs: None,
            hotkeys: ViewHotkeys::default(),
            file_path: None,
        }
    }

    /// Try to load an existing configuration from the disk using the custom
    /// directory if provided. A missing file leaves the defaults in place; the
    /// file is created on the first save.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };
        self.file_path = Some(dir_path.join(Path::new(FILE_NAME)));
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;

        if file_path.exists() {
            let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
                path: file_path.clone(),
                message: format!("IO error: {}", e),
            })?;
            let data: FileSpec = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
            self.api_url = data.api_url;
            self.page_size = data.page_size;
            self.theme = data.theme;
            self.request_timeout_secs = data.request_timeout_secs;
            self.hotkeys = data.hotkeys;
        }

        self.validate()?;
        Ok(())
    }

    /// Apply command line overrides on top of the loaded values.
    ///
    pub fn apply_overrides(
        &mut self,
        api_url: Option<&str>,
        page_size: Option<u32>,
    ) -> AppResult<()> {
        if let Some(api_url) = api_url {
            self.api_url = api_url.to_string();
        }
        if let Some(page_size) = page_size {
            self.page_size = page_size;
        }
        self.validate()?;
        Ok(())
    }

    /// Returns the configured request timeout, if any.
    ///
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        check_page_size(self.page_size)?;
        if self.api_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_url",
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Save the current configuration to disk, creating the directory if it
    /// doesn't exist.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            api_url: self.api_url.clone(),
            page_size: self.page_size,
            theme: self.theme,
            request_timeout_secs: self.request_timeout_secs,
            hotkeys: self.hotkeys.clone(),
        };
        let content = serde_yaml::to_string(&data)
            .map_err(|e| ConfigError::SerializationFailed(e.to_string()))?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content).map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        file.flush().map_err(|e| ConfigError::SaveFailed {
            path: file_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}

/// The configuration file is the durable home of the theme preference.
///
impl ThemePreference for Config {
    fn stored_theme(&self) -> Option<ThemeMode> {
        self.theme
    }

    fn store_theme(&mut self, mode: ThemeMode) -> AppResult<()> {
        self.theme = Some(mode);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn scratch_dir(name: &str) -> PathBuf {
        let stamp = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        std::env::temp_dir().join(format!("jobbank-tui-{}-{}", name, stamp))
    }

    #[test]
    fn load_without_file_keeps_defaults() {
        let dir = scratch_dir("defaults");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.theme, None);
        assert_eq!(config.request_timeout(), None);
        assert!(!dir.join(FILE_NAME).exists());
    }

    #[test]
    fn save_then_load_round_trip() {
        let dir = scratch_dir("round-trip");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.api_url = "https://jobs.example.com".to_string();
        config.page_size = 25;
        config.theme = Some(ThemeMode::Dark);
        config.request_timeout_secs = Some(30);
        config.save().unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.api_url, "https://jobs.example.com");
        assert_eq!(reloaded.page_size, 25);
        assert_eq!(reloaded.theme, Some(ThemeMode::Dark));
        assert_eq!(reloaded.request_timeout(), Some(Duration::from_secs(30)));
        assert_eq!(reloaded.hotkeys, ViewHotkeys::default());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = scratch_dir("partial");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "theme: light\n").unwrap();

        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        assert_eq!(config.theme, Some(ThemeMode::Light));
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.page_size, 10);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(FILE_NAME), "page_size: [not, a, number]\n").unwrap();

        let mut config = Config::new();
        let result = config.load(dir.to_str());
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::DeserializationFailed(_)))
        ));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn overrides_win_and_are_validated() {
        let mut config = Config::new();
        config
            .apply_overrides(Some("http://10.0.0.5:9000"), Some(50))
            .unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:9000");
        assert_eq!(config.page_size, 50);

        assert!(config.apply_overrides(None, Some(0)).is_err());
        assert!(config.apply_overrides(None, Some(101)).is_err());
    }

    #[test]
    fn parse_page_size_enforces_bounds() {
        assert_eq!(parse_page_size("25").unwrap(), 25);
        assert_eq!(parse_page_size(" 100 ").unwrap(), 100);
        for value in ["0", "101", "-3", "ten"] {
            let error = parse_page_size(value).unwrap_err();
            assert!(matches!(
                error,
                ConfigError::InvalidValue {
                    field: "page_size",
                    ..
                }
            ));
        }
        assert!(parse_page_size("0")
            .unwrap_err()
            .to_string()
            .contains("must be between 1 and 100"));
    }

    #[test]
    fn save_without_path_fails() {
        let config = Config::new();
        assert!(matches!(
            config.save(),
            Err(AppError::Config(ConfigError::FilePathNotSet))
        ));
    }

    #[test]
    fn store_theme_persists_to_file() {
        let dir = scratch_dir("theme");
        let mut config = Config::new();
        config.load(dir.to_str()).unwrap();
        config.store_theme(ThemeMode::Dark).unwrap();

        let mut reloaded = Config::new();
        reloaded.load(dir.to_str()).unwrap();
        assert_eq!(reloaded.stored_theme(), Some(ThemeMode::Dark));
        let _ = fs::remove_dir_all(dir);
    }
}
