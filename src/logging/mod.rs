
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Local;

pub use crate::core::types::LogLevel;

const FILE_STEM: &str = "taskgrid";

/// Where one message should go.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogTarget {
    ConsoleOnly,
    #[default]
    ConsoleAndFile,
    FileOnly,
}

impl LogTarget {
    fn reaches_console(self) -> bool {
        !matches!(self, LogTarget::FileOnly)
    }

    fn reaches_file(self) -> bool {
        !matches!(self, LogTarget::ConsoleOnly)
    }
}

/// The per-session log file. It is opened by the first line written to it,
/// so sessions with file logging off never touch the logs directory.
enum SessionFile {
    Pending { dir: PathBuf },
    Open { file: File, path: PathBuf, dir: PathBuf },
    Unavailable { dir: PathBuf },
}

impl SessionFile {
    fn dir(&self) -> &Path {
        match self {
            SessionFile::Pending { dir }
            | SessionFile::Open { dir, .. }
            | SessionFile::Unavailable { dir } => dir,
        }
    }

    fn path(&self) -> Option<&Path> {
        match self {
            SessionFile::Open { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }

    fn create(dir: &Path) -> io::Result<(File, PathBuf)> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("{FILE_STEM}-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok((file, path))
    }

    fn write_line(&mut self, line: &str) {
        if let SessionFile::Pending { dir } = self {
            let dir = std::mem::take(dir);
            *self = match Self::create(&dir) {
                Ok((file, path)) => SessionFile::Open { file, path, dir },
                Err(err) => {
                    eprintln!(
                        "WARN: File logging unavailable; continuing without a log file. ({err})"
                    );
                    SessionFile::Unavailable { dir }
                }
            };
        }
        if let SessionFile::Open { file, .. } = self {
            let _ = writeln!(file, "{line}");
        }
    }
}

struct LoggerState {
    console: bool,
    console_level: LogLevel,
    file_enabled: bool,
    file: SessionFile,
}

/// Session logger. Clones share one console policy and one log file, so the
/// context, the calendar observer and the flow all write to the same place.
///
/// On the terminal, debug and info lines go to stdout, warnings and errors
/// to stderr, and anything below the console level is dropped. The file gets
/// every line, stamped, while file logging is enabled.
#[derive(Clone)]
pub struct Logger {
    state: Arc<Mutex<LoggerState>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self::build(true)
    }

    /// No console output; the file still follows the file-logging switch.
    pub fn silent() -> Self {
        Self::build(false)
    }

    fn build(console: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(LoggerState {
                console,
                console_level: LogLevel::default(),
                file_enabled: true,
                file: SessionFile::Pending {
                    dir: PathBuf::from("logs"),
                },
            })),
        }
    }

    fn state(&self) -> Option<MutexGuard<'_, LoggerState>> {
        self.state.lock().ok()
    }

    fn log(&self, level: LogLevel, message: &str, target: LogTarget) {
        let Some(mut state) = self.state() else {
            return;
        };

        if target.reaches_console() && state.console && level >= state.console_level {
            match level {
                LogLevel::Debug | LogLevel::Info => println!("{message}"),
                LogLevel::Warn | LogLevel::Error => eprintln!("{message}"),
            }
        }

        if target.reaches_file() && state.file_enabled {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            state
                .file
                .write_line(&format!("[{timestamp}] {:<5} {message}", level.label()));
        }
    }

    /// Diagnostic detail; reaches the console only at the debug level.
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message.as_ref(), LogTarget::ConsoleAndFile);
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Info, message.as_ref(), target);
    }

    pub fn warn(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Warn, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.log(LogLevel::Error, message.as_ref(), target);
    }

    /// Apply both logging settings from config in one step.
    pub fn configure(&self, file_enabled: bool, console_level: LogLevel) {
        if let Some(mut state) = self.state() {
            state.file_enabled = file_enabled;
            state.console_level = console_level;
        }
    }

    pub fn set_file_logging_enabled(&self, enabled: bool) {
        if let Some(mut state) = self.state() {
            state.file_enabled = enabled;
        }
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.state().is_some_and(|s| s.file_enabled)
    }

    pub fn console_level(&self) -> LogLevel {
        self.state()
            .map(|s| s.console_level)
            .unwrap_or_default()
    }

    /// Ignored once the session file has been opened (or failed to open).
    pub fn set_log_dir(&self, dir: impl AsRef<Path>) {
        if let Some(mut state) = self.state() {
            if let SessionFile::Pending { dir: current } = &mut state.file {
                *current = dir.as_ref().to_path_buf();
            }
        }
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.state().map(|s| s.file.dir().to_path_buf())
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.state()
            .and_then(|s| s.file.path().map(Path::to_path_buf))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("console_level", &self.console_level())
            .field("log_path", &self.log_path())
            .finish()
    }
}
