use crate::config::Config;
use crate::core::models::Task;
use crate::extensions::string::Truncate;
use crate::ui::ansi::{STYLE_RESET, priority_fg};

const TITLE_MAX_CHARS: usize = 40;

/// Turns domain values into table rows.
#[derive(Debug, Clone)]
pub struct DisplayDataBuilder {
    color: bool,
}

impl Default for DisplayDataBuilder {
    fn default() -> Self {
        Self { color: true }
    }
}

impl DisplayDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    /// `ID | PRIORITY | DONE | TITLE`, in the order given.
    pub fn task_rows(&self, tasks: &[Task]) -> Vec<Vec<String>> {
        tasks
            .iter()
            .map(|t| {
                let priority = if self.color {
                    format!("{}{}{STYLE_RESET}", priority_fg(t.priority), t.priority)
                } else {
                    t.priority.to_string()
                };
                let title = match t.title() {
                    "" => "-".to_string(),
                    title => title.truncate_chars(TITLE_MAX_CHARS),
                };
                let done = if t.is_completed { "x" } else { " " };
                vec![t.id.to_string(), priority, done.to_string(), title]
            })
            .collect()
    }

    /// `ID | KEY | DESCRIPTION | VALUE`.
    pub fn config_rows(&self, config: &Config) -> Vec<Vec<String>> {
        config
            .rows()
            .iter()
            .enumerate()
            .map(|(i, (k, d, v))| vec![i.to_string(), k.clone(), d.clone(), v.clone()])
            .collect()
    }
}
