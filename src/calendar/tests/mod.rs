
use crate::calendar::bucket_key::DateBucketKey;
use crate::core::models::Task;
use crate::core::types::Priority;

pub(super) fn key(y: i32, m: u32, d: u32) -> DateBucketKey {
    DateBucketKey::from_ymd(y, m, d).unwrap()
}

pub(super) fn task(id: i64, date: &str) -> Task {
    Task::new(id, date, Priority::Medium).with_title(format!("task {id}"))
}

/// A small spread around February 2024, in deliberately unsorted order.
pub(super) fn sample_tasks() -> Vec<Task> {
    vec![
        task(1, "2024-02-14T18:00:00"),
        task(2, "2024-01-30T09:00:00"),
        task(3, "2024-02-14T07:15:00"),
        Task::new(4, "2024-03-02", Priority::Urgent),
        Task::new(5, "2024-02-29T12:00:00", Priority::High).completed(true),
        task(6, "2024-02-14"),
    ]
}
