//! Clock widget: time, long date and greeting.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

impl ClockFormat {
    pub fn toggle(self) -> Self {
        match self {
            ClockFormat::H24 => ClockFormat::H12,
            ClockFormat::H12 => ClockFormat::H24,
        }
    }
}

/// Persisted clock preferences (`prefs.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockPrefs {
    pub format: ClockFormat,
    pub show_seconds: bool,
}

impl ClockPrefs {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("prefs.json")
    }

    /// Loads preferences; a missing or unreadable file yields `fallback`.
    pub fn load_or(data_dir: &Path, fallback: ClockPrefs) -> ClockPrefs {
        let path = Self::path(data_dir);
        let Ok(content) = fs::read_to_string(&path) else {
            return fallback;
        };
        match serde_json::from_str(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid clock prefs");
                fallback
            }
        }
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), StoreError> {
        let path = Self::path(data_dir);
        fs::create_dir_all(data_dir).map_err(|e| StoreError::io(data_dir, e))?;
        let json = serde_json::to_string_pretty(self).map_err(|e| StoreError::json(&path, e))?;
        fs::write(&path, json).map_err(|e| StoreError::io(&path, e))
    }
}

/// Text shown by the clock for one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFace {
    pub time: String,
    pub seconds: String,
    pub date: String,
    pub greeting: &'static str,
}

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        0..=4 => "Good night",
        5..=11 => "Good morning",
        12..=16 => "Good afternoon",
        17..=20 => "Good evening",
        _ => "Good night",
    }
}

pub fn clock_face<Tz: TimeZone>(now: &DateTime<Tz>, format: ClockFormat) -> ClockFace
where
    Tz::Offset: std::fmt::Display,
{
    let hour = now.hour();
    let (time, seconds) = match format {
        ClockFormat::H12 => {
            let ampm = if hour >= 12 { "PM" } else { "AM" };
            let display_hour = match hour % 12 {
                0 => 12,
                h => h,
            };
            (
                format!("{}:{:02}", display_hour, now.minute()),
                format!("{:02} {}", now.second(), ampm),
            )
        }
        ClockFormat::H24 => (
            format!("{:02}:{:02}", hour, now.minute()),
            format!("{:02}", now.second()),
        ),
    };

    ClockFace {
        time,
        seconds,
        date: now.format("%A, %B %-d, %Y").to_string(),
        greeting: greeting(hour),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 5, h, m, s).unwrap()
    }

    #[test]
    fn test_24h_face() {
        let face = clock_face(&at(7, 5, 9), ClockFormat::H24);
        assert_eq!(face.time, "07:05");
        assert_eq!(face.seconds, "09");
        assert_eq!(face.date, "Monday, January 5, 2026");
        assert_eq!(face.greeting, "Good morning");
    }

    #[test]
    fn test_12h_face_midnight_and_afternoon() {
        let face = clock_face(&at(0, 30, 0), ClockFormat::H12);
        assert_eq!(face.time, "12:30");
        assert_eq!(face.seconds, "00 AM");

        let face = clock_face(&at(15, 4, 59), ClockFormat::H12);
        assert_eq!(face.time, "3:04");
        assert_eq!(face.seconds, "59 PM");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting(4), "Good night");
        assert_eq!(greeting(5), "Good morning");
        assert_eq!(greeting(12), "Good afternoon");
        assert_eq!(greeting(17), "Good evening");
        assert_eq!(greeting(21), "Good night");
    }

    #[test]
    fn test_prefs_round_trip_and_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = ClockPrefs::default();
        assert_eq!(ClockPrefs::load_or(dir.path(), fallback), fallback);

        let prefs = ClockPrefs {
            format: ClockFormat::H12,
            show_seconds: true,
        };
        prefs.save(dir.path()).unwrap();
        assert_eq!(ClockPrefs::load_or(dir.path(), fallback), prefs);

        std::fs::write(ClockPrefs::path(dir.path()), "not json").unwrap();
        assert_eq!(ClockPrefs::load_or(dir.path(), fallback), fallback);
    }
}
