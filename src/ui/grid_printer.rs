use crate::calendar::grid::{CalendarDay, weekday_labels};
use crate::calendar::navigation::NavigationState;
use crate::calendar::task_index::DaySummary;
use crate::ui::ansi::{FG_DARK_GRAY, STYLE_BOLD, STYLE_RESET, STYLE_UNDERLINE, priority_fg};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

/// Visible columns per day cell: `[dd]*nn`.
pub const CELL_WIDTH: usize = 7;
const COLUMNS: usize = 7;
const GAP: &str = " ";

/// Renders a calendar grid as text rows of seven cells.
///
/// A cell reads `[14]*3`: brackets mark the selected day, `*` marks today and
/// the trailing number counts the day's tasks.
#[derive(Debug, Clone)]
pub struct GridPrinter {
    util: WidthUtil,
    color: bool,
    left_pad: usize,
}

impl Default for GridPrinter {
    fn default() -> Self {
        Self {
            util: WidthUtil::default(),
            color: true,
            left_pad: 0,
        }
    }
}

impl GridPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// No ANSI styling at all.
    pub fn plain() -> Self {
        Self {
            color: false,
            ..Self::default()
        }
    }

    pub fn with_left_pad(&self, pad: usize) -> Self {
        Self {
            left_pad: pad,
            ..self.clone()
        }
    }

    /// Width of one rendered row, without the left pad.
    pub fn row_width(&self) -> usize {
        CELL_WIDTH * COLUMNS + GAP.len() * (COLUMNS - 1)
    }

    pub fn render<W: Write + ?Sized>(
        &self,
        state: &NavigationState,
        days: &[CalendarDay<'_>],
        out: &mut W,
    ) -> io::Result<()> {
        let header = if self.color {
            format!("{STYLE_BOLD}{}{STYLE_RESET}", state.header_label())
        } else {
            state.header_label()
        };
        self.write_line(out, &self.util.center_visible(&header, self.row_width()))?;

        let labels: Vec<String> = weekday_labels(state.week_start())
            .iter()
            .map(|label| self.util.center_visible(label, CELL_WIDTH))
            .collect();
        self.write_line(out, &labels.join(GAP))?;

        for week in days.chunks(COLUMNS) {
            let cells: Vec<String> = week.iter().map(|day| self.format_cell(day)).collect();
            self.write_line(out, &cells.join(GAP))?;
        }
        Ok(())
    }

    pub fn format_cell(&self, day: &CalendarDay<'_>) -> String {
        let (open, close) = if day.is_selected { ("[", "]") } else { (" ", " ") };
        let today = if day.is_today { "*" } else { " " };
        let number = format!("{:>2}", day.date.day());
        let number = self.style_day(&number, day);

        let summary = DaySummary::from_tasks(day.tasks);
        let count = match summary.total {
            0 => String::new(),
            n => self.style_count(&n.min(99).to_string(), &summary),
        };

        let cell = format!("{open}{number}{close}{today}{count}");
        self.util.pad_visible(&cell, CELL_WIDTH)
    }

    fn style_day(&self, number: &str, day: &CalendarDay<'_>) -> String {
        if !self.color {
            return number.to_string();
        }
        match (day.in_current_period, day.is_today) {
            (_, true) => format!("{STYLE_BOLD}{STYLE_UNDERLINE}{number}{STYLE_RESET}"),
            (false, false) => format!("{FG_DARK_GRAY}{number}{STYLE_RESET}"),
            (true, false) => number.to_string(),
        }
    }

    fn style_count(&self, count: &str, summary: &DaySummary) -> String {
        if !self.color {
            return count.to_string();
        }
        let fg = summary.highest_open.map(priority_fg).unwrap_or(FG_DARK_GRAY);
        format!("{fg}{count}{STYLE_RESET}")
    }

    fn write_line<W: Write + ?Sized>(&self, out: &mut W, line: &str) -> io::Result<()> {
        writeln!(out, "{}{}", " ".repeat(self.left_pad), line.trim_end())
    }
}
