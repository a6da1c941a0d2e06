use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use log::debug;
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    keywords::Keywords, notification::NotificationLabels, parse_input::DEFAULT_FORMATS,
    vacation::VacationRecord,
};

#[derive(Debug, Clone)]
pub struct Config {
    /// `chrono` formats tried, in order, when parsing dates typed by the user.
    pub input_date_formats: Vec<String>,
    /// The date relative keywords (`today`, `next week`) are resolved against.
    pub reference_date: NaiveDate,
    /// Days of the month highlighted by the demo calendar.
    pub highlight_days: Vec<u32>,
    /// The user whose vacation days are tracked, and the days already booked.
    pub record: RecordConfig,
    pub notifications: NotificationLabels,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    pub name: String,
    pub workplace: String,
    pub employee_number: u32,
    pub vacation_days: Vec<String>,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            name: "Max Mustermann".to_string(),
            workplace: "Entwicklungsabteilung".to_string(),
            employee_number: 2398,
            vacation_days: [
                "2024-11-03",
                "2024-11-14",
                "2024-12-11",
                "2024-12-12",
                "2024-12-13",
                "2024-12-14",
                "2024-12-15",
                "2024-12-16",
                "2024-12-17",
                "2024-12-18",
                "2024-12-19",
                "2024-12-20",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl RecordConfig {
    /// Builds the in-memory record, rejecting malformed vacation days.
    pub fn to_record(&self) -> Result<VacationRecord> {
        VacationRecord::new(&self.name, &self.workplace, self.employee_number)
            .with_vacation_days(&self.vacation_days)
            .with_context(|| format!("loading vacation days of {}", self.name))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    input_date_formats: Option<Vec<String>>,
    highlight_days: Option<Vec<u32>>,
    record: Option<RecordConfig>,
    notifications: Option<NotificationLabels>,
    /// Optional table:
    /// [synonyms]
    /// heute = "today"
    /// morgen = "tomorrow"
    synonyms: Option<HashMap<String, String>>,
}

impl Config {
    /// Load config from disk (first XDG path, then native), apply defaults, and extend
    /// the global Keywords registry with user-defined synonyms if present.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    /// Same as [`load`](Self::load) with an explicit config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file_config = Self::read_file(path)?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let input_date_formats = file_config
            .input_date_formats
            .filter(|formats| !formats.is_empty())
            .unwrap_or_else(|| DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect());

        let highlight_days = file_config.highlight_days.unwrap_or_else(|| vec![1, 20]);

        Self::load_synonyms(&file_config.synonyms);

        Self {
            input_date_formats,
            reference_date: Local::now().date_naive(),
            highlight_days,
            record: file_config.record.unwrap_or_default(),
            notifications: file_config.notifications.unwrap_or_default(),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("vacation")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("vacation").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it. No file means defaults.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if path.exists() {
                return Self::read_file(&path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(FileConfig::default())
    }

    fn read_file(path: &Path) -> Result<FileConfig> {
        debug!("reading config from {}", path.display());
        let s = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }

    /// Merge `[synonyms]` into the global Keywords registry.
    fn load_synonyms(synonyms: &Option<HashMap<String, String>>) {
        match synonyms {
            Some(map) if !map.is_empty() => {
                let pairs: Vec<(String, String)> =
                    map.iter().map(|(a, t)| (a.clone(), t.clone())).collect();
                Keywords::extend(&pairs);
            }
            _ => {}
        }
    }
}
