use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Domain-specific error set for the calendar engine and its shell.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Parsing & Routing --------------------------------------------------
    /// Command/argument problems in the interactive flow.
    #[error("Parse error: {0}")]
    Parse(String),

    /// No command matches the typed keyword.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    // ---- Calendar / Domain --------------------------------------------------
    /// A timestamp could not be reduced to a calendar day.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// A task carries a date that cannot be bucketed.
    #[error("Task with id {task_id} has an invalid date. {source}")]
    InvalidTaskDate {
        task_id: i64,
        #[source]
        source: Box<Error>,
    },

    // ---- Config -------------------------------------------------------------
    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    // ---- Plumbing / Wrappers ------------------------------------------------
    /// Generic domain error when you want to bubble a message without a new variant.
    #[error("{0}")]
    Domain(String),

    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config and task file decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a parse error from any displayable value.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper for unknown command.
    pub fn unknown<S: Into<String>>(cmd: S) -> Self {
        Error::UnknownCommand(cmd.into())
    }
    pub fn invalid_timestamp<V: Into<String>, R: Into<String>>(value: V, reason: R) -> Self {
        Error::InvalidTimestamp {
            value: value.into(),
            reason: reason.into(),
        }
    }
    /// Attach the owning task id to a timestamp failure.
    pub fn task_date(task_id: i64, source: Error) -> Self {
        Error::InvalidTaskDate {
            task_id,
            source: Box::new(source),
        }
    }
}

// ----------------------- Small result helpers --------------------------------

/// Map an `Option<T>` into `Result<T, Error::Parse>` with a custom message.
/// Useful when pulling positional arguments out of a command line.
pub fn require_parse<T, S: Into<String>>(opt: Option<T>, msg: S) -> Result<T> {
    opt.ok_or_else(|| Error::Parse(msg.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_constructor_wraps_message() {
        let err = Error::parse("bad args");
        match err {
            Error::Parse(msg) => assert_eq!(msg, "bad args"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn config_constructor_wraps_message() {
        let err = Error::config("config missing");
        match err {
            Error::Config(msg) => assert_eq!(msg, "config missing"),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_constructor_wraps_message() {
        let err = Error::unknown("noop");
        match err {
            Error::UnknownCommand(msg) => assert_eq!(msg, "noop"),
            other => panic!("expected unknown command error, got {other:?}"),
        }
    }

    #[test]
    fn require_parse_returns_value_when_present() {
        let value = require_parse(Some(4), "missing").unwrap();
        assert_eq!(value, 4);
    }

    #[test]
    fn require_parse_errors_with_message_when_missing() {
        let err = require_parse::<i32, _>(None, "missing").unwrap_err();
        match err {
            Error::Parse(msg) => assert_eq!(msg, "missing"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_timestamp_formats_message() {
        let err = Error::invalid_timestamp("yesterday-ish", "unrecognized format");
        assert_eq!(
            err.to_string(),
            "Invalid timestamp 'yesterday-ish': unrecognized format"
        );
    }

    #[test]
    fn task_date_error_names_task_and_keeps_source() {
        let inner = Error::invalid_timestamp("NaN", "unrecognized format");
        let err = Error::task_date(7, inner);
        assert_eq!(
            err.to_string(),
            "Task with id 7 has an invalid date. Invalid timestamp 'NaN': unrecognized format"
        );
        let source = std::error::Error::source(&err).expect("source should be kept");
        assert!(source.to_string().contains("NaN"));
    }

    #[test]
    fn domain_error_displays_raw_message() {
        let err = Error::Domain("oops".to_string());
        assert_eq!(err.to_string(), "oops");
    }

    #[test]
    fn io_error_formats_message() {
        let raw = std::io::Error::new(std::io::ErrorKind::Other, "disk");
        let err = Error::from(raw);
        assert_eq!(err.to_string(), "I/O error: disk");
    }

    #[test]
    fn json_error_formats_message() {
        let raw = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let expected = format!("JSON error: {}", raw);
        let err = Error::from(raw);
        assert_eq!(err.to_string(), expected);
    }
}
