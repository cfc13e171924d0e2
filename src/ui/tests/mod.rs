mod grid_printer_tests;

use crate::calendar::{CalendarEngine, CalendarSettings, DateBucketKey};
use crate::core::models::Task;
use crate::core::types::Priority;
use crate::logging::Logger;

pub(super) fn key(y: i32, m: u32, d: u32) -> DateBucketKey {
    DateBucketKey::from_ymd(y, m, d).unwrap()
}

/// February 2024, Monday start, today pinned to Valentine's day.
pub(super) fn february_engine() -> CalendarEngine {
    let logger = Logger::silent();
    logger.set_file_logging_enabled(false);
    let mut engine =
        CalendarEngine::new(CalendarSettings::default(), logger).pin_today(key(2024, 2, 14));
    engine.load_tasks(vec![
        Task::new(1, "2024-02-14T18:00:00", Priority::Medium).with_title("task 1"),
        Task::new(2, "2024-01-30T09:00:00", Priority::Low).with_title("task 2"),
        Task::new(3, "2024-02-14T07:15:00", Priority::Medium).with_title("task 3"),
        Task::new(4, "2024-03-02", Priority::Urgent),
        Task::new(5, "2024-02-29T12:00:00", Priority::High).completed(true),
        Task::new(6, "2024-02-14", Priority::Medium).with_title("task 6"),
    ]);
    engine
}
