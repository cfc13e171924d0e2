pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    BoolConfigItem, ConfigItem, LogLevelConfigItem, ThresholdConfigItem, ViewConfigItem,
    WeekStartConfigItem,
};
use crate::core::types::{Bool, LogLevel, Threshold, ViewMode, WeekStart};
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ConfigKey {
    WeekStartsOn,
    SwipeThreshold,
    DefaultView,
    ShowArchived,
    ShowCompleted,
    FileLoggingEnabled,
    ConsoleLogLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub week_starts_on: WeekStartConfigItem,
    #[serde(default)]
    pub swipe_threshold: ThresholdConfigItem,
    #[serde(default)]
    pub default_view: ViewConfigItem,
    #[serde(default = "BoolConfigItem::show_archived")]
    pub show_archived: BoolConfigItem,
    #[serde(default = "BoolConfigItem::show_completed")]
    pub show_completed: BoolConfigItem,
    #[serde(default = "BoolConfigItem::file_logging")]
    pub file_logging_enabled: BoolConfigItem,
    #[serde(default)]
    pub console_log_level: LogLevelConfigItem,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            week_starts_on: WeekStartConfigItem::default(),
            swipe_threshold: ThresholdConfigItem::default(),
            default_view: ViewConfigItem::default(),
            show_archived: BoolConfigItem::show_archived(),
            show_completed: BoolConfigItem::show_completed(),
            file_logging_enabled: BoolConfigItem::file_logging(),
            console_log_level: LogLevelConfigItem::default(),
        }
    }
}

impl ConfigFile {
    fn item_mut(&mut self, key: ConfigKey) -> &mut dyn ConfigItemDyn {
        match key {
            ConfigKey::WeekStartsOn => &mut self.week_starts_on,
            ConfigKey::SwipeThreshold => &mut self.swipe_threshold,
            ConfigKey::DefaultView => &mut self.default_view,
            ConfigKey::ShowArchived => &mut self.show_archived,
            ConfigKey::ShowCompleted => &mut self.show_completed,
            ConfigKey::FileLoggingEnabled => &mut self.file_logging_enabled,
            ConfigKey::ConsoleLogLevel => &mut self.console_log_level,
        }
    }

    fn item(&self, key: ConfigKey) -> &dyn ConfigItemDyn {
        match key {
            ConfigKey::WeekStartsOn => &self.week_starts_on,
            ConfigKey::SwipeThreshold => &self.swipe_threshold,
            ConfigKey::DefaultView => &self.default_view,
            ConfigKey::ShowArchived => &self.show_archived,
            ConfigKey::ShowCompleted => &self.show_completed,
            ConfigKey::FileLoggingEnabled => &self.file_logging_enabled,
            ConfigKey::ConsoleLogLevel => &self.console_log_level,
        }
    }
}

/// Type-erased view of a `ConfigItem<T>` for table rows and edits.
trait ConfigItemDyn {
    fn value_string(&self) -> String;
    fn description_str(&self) -> &str;
    fn set_from_str(&mut self, new_value: &str) -> Result<()>;
}

macro_rules! config_item_dyn {
    ($($item:ty => $value:ty),* $(,)?) => {$(
        impl ConfigItemDyn for $item {
            fn value_string(&self) -> String {
                ConfigItem::<$value>::get_value(self).to_string()
            }
            fn description_str(&self) -> &str {
                ConfigItem::<$value>::description(self)
            }
            fn set_from_str(&mut self, new_value: &str) -> Result<()> {
                ConfigItem::<$value>::set_value(self, new_value)
            }
        }
    )*};
}

config_item_dyn! {
    WeekStartConfigItem => WeekStart,
    ThresholdConfigItem => Threshold,
    ViewConfigItem => ViewMode,
    BoolConfigItem => Bool,
    LogLevelConfigItem => LogLevel,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    /// All defaults, bound to `path` for later saves.
    pub fn defaults_at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            data: ConfigFile::default(),
            last_change: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn week_starts_on(&self) -> &WeekStart {
        self.data.week_starts_on.get_value()
    }
    pub fn swipe_threshold(&self) -> &Threshold {
        self.data.swipe_threshold.get_value()
    }
    pub fn default_view(&self) -> &ViewMode {
        self.data.default_view.get_value()
    }
    pub fn show_archived(&self) -> bool {
        self.data.show_archived.get_value().0
    }
    pub fn show_completed(&self) -> bool {
        self.data.show_completed.get_value().0
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }
    pub fn console_log_level(&self) -> &LogLevel {
        self.data.console_log_level.get_value()
    }

    /// `(KEY, description, value)` per key, in declaration order.
    pub fn rows(&self) -> ConfigRows {
        ConfigRows(
            ConfigKey::iter()
                .map(|key| {
                    let item = self.data.item(key);
                    (
                        key.to_string(),
                        item.description_str().to_string(),
                        item.value_string(),
                    )
                })
                .collect(),
        )
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.data.item(key).value_string();
        self.edit(|cfg| cfg.item_mut(key).set_from_str(new_value))?;
        let new_val = self.data.item(key).value_string();
        // stash for caller to log.
        self.last_change = Some((key.to_string(), old, new_val));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::config(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str.trim(),
                valid_csv::<ConfigKey>()
            ))
        })?;
        self.set_key(key, new_value)
    }

    // Validation happens on a copy so a rejected value leaves the config untouched.
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        self.data = draft;
        self.save()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(&self.path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", self.path.display(), e)))
    }
}
