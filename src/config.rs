//! Optional TOML configuration (`~/.config/homedeck/config.toml`).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widgets::{ClockFormat, ClockPrefs};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    pub autosave_ms: u64,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self { autosave_ms: 1000 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub format: ClockFormat,
    pub show_seconds: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where notes, bookmarks, prefs and the log live.
    pub data_dir: PathBuf,
    /// UI refresh interval.
    pub tick_ms: u64,
    pub notes: NotesConfig,
    pub clock: ClockConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: Self::default_data_dir(),
            tick_ms: 250,
            notes: NotesConfig::default(),
            clock: ClockConfig::default(),
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("homedeck").join("config.toml"))
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homedeck")
    }

    /// Loads `path`, or the default location when `None`. A missing default
    /// file yields defaults; an explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if !explicit && e.kind() == io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.notes.autosave_ms)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("homedeck.log")
    }

    pub fn clock_prefs(&self) -> ClockPrefs {
        ClockPrefs {
            format: self.clock.format,
            show_seconds: self.clock.show_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "tick_ms = 100\n\n[clock]\nformat = \"12h\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.tick_ms, 100);
        assert_eq!(config.clock.format, ClockFormat::H12);
        assert!(!config.clock.show_seconds);
        assert_eq!(config.notes.autosave_ms, 1000);
        assert_eq!(config.data_dir, Config::default_data_dir());
    }

    #[test]
    fn test_data_dir_and_derived_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "data_dir = \"/tmp/deck\"\n[notes]\nautosave_ms = 250\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.log_path(), PathBuf::from("/tmp/deck/homedeck.log"));
        assert_eq!(config.autosave_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "tick_ms = \"fast\"").unwrap();
        assert!(matches!(
            Config::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
