use crate::calendar::bucket_key::{DateBucketKey, to_bucket_key_in};
use crate::core::models::Task;
use crate::core::types::Priority;
use crate::errors::{Error, Result};
use chrono::{Local, TimeZone};
use std::collections::HashMap;

/// Immutable snapshot of tasks grouped by local calendar day.
///
/// Buckets exist only for days that have tasks; each bucket keeps the order
/// tasks had in the source collection.
#[derive(Debug, Clone, Default)]
pub struct TaskIndex {
    buckets: HashMap<DateBucketKey, Vec<Task>>,
    len: usize,
}

/// Per-day counts for badges and headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySummary {
    pub total: usize,
    pub completed: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub urgent: usize,
    /// Highest priority among tasks still open.
    pub highest_open: Option<Priority>,
}

impl DaySummary {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut summary = Self::default();
        for task in tasks {
            summary.record(task);
        }
        summary
    }

    pub fn open(&self) -> usize {
        self.total - self.completed
    }

    fn record(&mut self, task: &Task) {
        self.total += 1;
        match task.priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
            Priority::Urgent => self.urgent += 1,
        }
        if task.is_completed {
            self.completed += 1;
        } else if self.highest_open.is_none_or(|p| task.priority > p) {
            self.highest_open = Some(task.priority);
        }
    }
}

const NO_TASKS: &[Task] = &[];

impl TaskIndex {
    /// Group `tasks` by local day. Fails on the first task whose date cannot
    /// be parsed.
    pub fn build<I>(tasks: I) -> Result<Self>
    where
        I: IntoIterator<Item = Task>,
    {
        Self::build_in(tasks, &Local)
    }

    pub fn build_in<I, Tz>(tasks: I, tz: &Tz) -> Result<Self>
    where
        I: IntoIterator<Item = Task>,
        Tz: TimeZone,
    {
        let mut index = Self::default();
        for task in tasks {
            let key = to_bucket_key_in(&task.date, tz).map_err(|e| Error::task_date(task.id, e))?;
            index.insert(key, task);
        }
        Ok(index)
    }

    /// Index every task that parses and report each one that does not.
    pub fn build_partial<I>(tasks: I) -> (Self, Vec<Error>)
    where
        I: IntoIterator<Item = Task>,
    {
        Self::build_partial_in(tasks, &Local)
    }

    pub fn build_partial_in<I, Tz>(tasks: I, tz: &Tz) -> (Self, Vec<Error>)
    where
        I: IntoIterator<Item = Task>,
        Tz: TimeZone,
    {
        let mut index = Self::default();
        let mut rejected = Vec::new();
        for task in tasks {
            match to_bucket_key_in(&task.date, tz) {
                Ok(key) => index.insert(key, task),
                Err(e) => rejected.push(Error::task_date(task.id, e)),
            }
        }
        (index, rejected)
    }

    fn insert(&mut self, key: DateBucketKey, task: Task) {
        self.buckets.entry(key).or_default().push(task);
        self.len += 1;
    }

    /// Tasks on `key` in source order; empty when the day has none.
    pub fn tasks_on(&self, key: DateBucketKey) -> &[Task] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(NO_TASKS)
    }

    pub fn summary_on(&self, key: DateBucketKey) -> DaySummary {
        DaySummary::from_tasks(self.tasks_on(key))
    }

    /// Total number of indexed tasks.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of days with at least one task.
    pub fn day_count(&self) -> usize {
        self.buckets.len()
    }

    /// Days with tasks, in chronological order.
    pub fn keys(&self) -> Vec<DateBucketKey> {
        let mut keys: Vec<_> = self.buckets.keys().copied().collect();
        keys.sort();
        keys
    }
}
