use crate::core::types::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields the calendar never inspects; carried along for presenters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub archived: bool,
    // Recurrence arrives pre-materialized; these are informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_interval: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence_count: Option<u32>,
}

/// One scheduled occurrence as delivered by the task source.
///
/// `date` stays the raw timestamp string; bucketing parses it so that a bad
/// value surfaces as an error instead of disappearing at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(flatten)]
    pub payload: TaskPayload,
}

impl Task {
    pub fn new(id: i64, date: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            date: date.into(),
            priority,
            is_completed: false,
            payload: TaskPayload::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.payload.title = title.into();
        self
    }

    pub fn completed(mut self, done: bool) -> Self {
        self.is_completed = done;
        self
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.payload.archived = archived;
        self
    }

    pub fn title(&self) -> &str {
        &self.payload.title
    }

    pub fn is_archived(&self) -> bool {
        self.payload.archived
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task(id={}, title='{}', date={}, priority={}, completed={})",
            self.id, self.payload.title, self.date, self.priority, self.is_completed
        )
    }
}

/// Caller-side pre-filter applied before tasks reach the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFilter {
    pub show_archived: bool,
    pub show_completed: bool,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            show_archived: true,
            show_completed: true,
        }
    }
}

impl TaskFilter {
    pub fn accepts(&self, task: &Task) -> bool {
        (self.show_archived || !task.is_archived()) && (self.show_completed || !task.is_completed)
    }

    /// Keep accepted tasks, preserving source order.
    pub fn apply<I>(&self, tasks: I) -> Vec<Task>
    where
        I: IntoIterator<Item = Task>,
    {
        tasks.into_iter().filter(|t| self.accepts(t)).collect()
    }
}
