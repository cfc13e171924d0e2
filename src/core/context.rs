use crate::calendar::{CalendarEngine, CalendarSettings};
use crate::config::Config;
use crate::core::persist::load_tasks;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::PathBuf;

pub struct AppContext {
    pub config: Config,
    pub calendar: CalendarEngine,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub tasks_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        tasks_path: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.configure(config.file_logging_enabled(), *config.console_log_level());

        let calendar = CalendarEngine::new(CalendarSettings::from_config(&config), logger.clone());

        let mut ctx = Self {
            config,
            calendar,
            logger,
            startup_displayed: false,
            config_path,
            tasks_path,
            logs_dir,
        };
        ctx.reload_tasks()?;
        Ok(ctx)
    }

    /// Re-read the task file and rebuild the index from scratch.
    /// Returns how many tasks were rejected for unusable dates.
    pub fn reload_tasks(&mut self) -> Result<usize> {
        let tasks = load_tasks(&self.tasks_path)?;
        let read = tasks.len();
        let rejected = self.calendar.load_tasks(tasks).len();
        self.logger.info(
            format!(
                "Loaded {read} task(s) from {} ({rejected} rejected)",
                self.tasks_path.display()
            ),
            LogTarget::FileOnly,
        );
        Ok(rejected)
    }

    /// Push the current config into the logger and the calendar, then
    /// re-read tasks so a changed filter takes effect.
    pub fn apply_config(&mut self) -> Result<usize> {
        self.logger.configure(
            self.config.file_logging_enabled(),
            *self.config.console_log_level(),
        );
        self.calendar
            .reconfigure(CalendarSettings::from_config(&self.config));
        self.reload_tasks()
    }
}
