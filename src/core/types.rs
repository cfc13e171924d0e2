use crate::errors::{Error, Result};
use crate::extensions::enums::{parse_enum, valid_csv};
use chrono::Weekday;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum CalendarCommand {
    #[strum(serialize = "next", serialize = "n", to_string = "next")]
    Next,
    #[strum(serialize = "prev", serialize = "p", serialize = "previous", to_string = "prev")]
    Previous,
    #[strum(serialize = "today", serialize = "t", to_string = "today")]
    Today,
    #[strum(serialize = "view", serialize = "v", serialize = "toggle", to_string = "view")]
    ToggleView,
    #[strum(serialize = "select", serialize = "s", to_string = "select")]
    Select,
    #[strum(serialize = "swipe", to_string = "swipe")]
    Swipe,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "set", to_string = "set")]
    Set,
    #[strum(serialize = "reload", serialize = "r", to_string = "reload")]
    Reload,
    #[strum(serialize = "help", serialize = "h", serialize = "?", to_string = "help")]
    Help,
}

impl CalendarCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::unknown(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<CalendarCommand>()
            ))
        })
    }

    /// How the command is typed, aliases included.
    pub fn syntax(&self) -> &'static str {
        match self {
            CalendarCommand::Next => "next | n",
            CalendarCommand::Previous => "prev | p",
            CalendarCommand::Today => "today | t",
            CalendarCommand::ToggleView => "view | v",
            CalendarCommand::Select => "select | s <date>",
            CalendarCommand::Swipe => "swipe <x1> <y1> <x2> <y2>",
            CalendarCommand::Config => "config",
            CalendarCommand::Set => "set <KEY> <value>",
            CalendarCommand::Reload => "reload | r",
            CalendarCommand::Help => "help | h",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalendarCommand::Next => "step forward one month or week",
            CalendarCommand::Previous => "step back one month or week",
            CalendarCommand::Today => "jump to and select today",
            CalendarCommand::ToggleView => "switch between month and week",
            CalendarCommand::Select => "select a day (YYYY-MM-DD)",
            CalendarCommand::Swipe => "replay a touch gesture",
            CalendarCommand::Config => "show configuration",
            CalendarCommand::Set => "change a configuration value",
            CalendarCommand::Reload => "re-read the task file",
            CalendarCommand::Help => "show this list",
        }
    }

    /// One aligned help line.
    pub fn usage(&self) -> String {
        format!("{:<27}{}", self.syntax(), self.description())
    }
}

/// Task urgency, ordered from least to most pressing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "priority")
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    Week,
}

impl ViewMode {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "view mode")
    }

    /// The other view; toggling is total.
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Month => ViewMode::Week,
            ViewMode::Week => ViewMode::Month,
        }
    }
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Month
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[strum(serialize = "mon", serialize = "monday", to_string = "mon")]
    #[serde(alias = "monday")]
    Mon,
    #[strum(serialize = "sun", serialize = "sunday", to_string = "sun")]
    #[serde(alias = "sunday")]
    Sun,
}

impl WeekStart {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "week start")
    }

    pub fn first_weekday(self) -> Weekday {
        match self {
            WeekStart::Mon => Weekday::Mon,
            WeekStart::Sun => Weekday::Sun,
        }
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart::Mon
    }
}

/// Severity of a log line; the console shows lines at or above the
/// configured level.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    #[strum(serialize = "warn", serialize = "warning", to_string = "warn")]
    #[serde(alias = "warning")]
    Warn,
    Error,
}

impl LogLevel {
    pub fn try_from(s: &str) -> Result<Self> {
        parse_enum(s, "log level")
    }

    /// Column label used in the session log file.
    pub fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::TextTrue)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(fmt.to_bool())),
            Err(_) => Err(Error::Parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}

/// Horizontal swipe distance, in logical pixels, that counts as navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold(pub f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(50.0);

    pub fn try_from_str(s: &str) -> Result<Self> {
        let value: f64 = s.trim().parse().map_err(|_| {
            Error::Parse(format!(
                "Invalid swipe threshold: '{}'. Expected a positive number.",
                s.trim()
            ))
        })?;
        Self::validate(value)
    }

    fn validate(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::Parse(format!(
                "Invalid swipe threshold: '{}'. Expected a positive number.",
                value
            )));
        }
        Ok(Threshold(value))
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Threshold {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Threshold {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Threshold, <D as Deserializer<'de>>::Error> {
        let raw = f64::deserialize(deserializer)?;
        Threshold::validate(raw).map_err(serde::de::Error::custom)
    }
}
