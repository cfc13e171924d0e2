use crate::core::models::Task;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk task snapshot: either a bare array or `{ "tasks": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskFile {
    Bare(Vec<Task>),
    Wrapped {
        #[serde(default)]
        tasks: Vec<Task>,
    },
}

impl TaskFile {
    fn into_tasks(self) -> Vec<Task> {
        match self {
            TaskFile::Bare(tasks) | TaskFile::Wrapped { tasks } => tasks,
        }
    }
}

pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    if !path.exists() {
        return Err(Error::Domain(format!(
            "Task file '{}' not found.",
            path.display()
        )));
    }
    let text = fs::read_to_string(path)?;
    let file: TaskFile = serde_json::from_str(&text).map_err(|e| {
        Error::Parse(format!("Invalid task file '{}': {}", path.display(), e))
    })?;
    Ok(file.into_tasks())
}
