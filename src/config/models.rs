use crate::core::types::{Bool, LogLevel, Threshold, ViewMode, WeekStart};
use crate::errors::Error;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<(), Error>;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStartConfigItem {
    pub value: WeekStart,
    pub description: String,
}

impl Default for WeekStartConfigItem {
    fn default() -> Self {
        Self {
            value: WeekStart::Mon,
            description: "First column of the calendar grid (mon or sun).".into(),
        }
    }
}

impl ConfigItem<WeekStart> for WeekStartConfigItem {
    fn get_value(&self) -> &WeekStart {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = WeekStart::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfigItem {
    pub value: Threshold,
    pub description: String,
}

impl Default for ThresholdConfigItem {
    fn default() -> Self {
        Self {
            value: Threshold::DEFAULT,
            description: "Horizontal swipe distance that changes the period.".into(),
        }
    }
}

impl ConfigItem<Threshold> for ThresholdConfigItem {
    fn get_value(&self) -> &Threshold {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Threshold::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewConfigItem {
    pub value: ViewMode,
    pub description: String,
}

impl Default for ViewConfigItem {
    fn default() -> Self {
        Self {
            value: ViewMode::Month,
            description: "View shown at startup (month or week).".into(),
        }
    }
}

impl ConfigItem<ViewMode> for ViewConfigItem {
    fn get_value(&self) -> &ViewMode {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = ViewMode::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoolConfigItem {
    pub value: Bool,
    pub description: String,
}

impl BoolConfigItem {
    fn enabled(description: &str) -> Self {
        Self {
            value: Bool(true),
            description: description.into(),
        }
    }

    pub fn show_archived() -> Self {
        Self::enabled("Place archived tasks on the calendar.")
    }

    pub fn show_completed() -> Self {
        Self::enabled("Place completed tasks on the calendar.")
    }

    pub fn file_logging() -> Self {
        Self::enabled("Enable writing log messages to file.")
    }
}

impl ConfigItem<Bool> for BoolConfigItem {
    fn get_value(&self) -> &Bool {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = Bool::try_from_str(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogLevelConfigItem {
    pub value: LogLevel,
    pub description: String,
}

impl Default for LogLevelConfigItem {
    fn default() -> Self {
        Self {
            value: LogLevel::Info,
            description: "Lowest log level echoed to the terminal (debug, info, warn or error)."
                .into(),
        }
    }
}

impl ConfigItem<LogLevel> for LogLevelConfigItem {
    fn get_value(&self) -> &LogLevel {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<(), Error> {
        Ok(self.value = LogLevel::try_from(new_value)?)
    }
    fn description(&self) -> &str {
        &self.description
    }
}
