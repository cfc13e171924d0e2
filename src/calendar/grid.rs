use crate::calendar::bucket_key::DateBucketKey;
use crate::calendar::task_index::TaskIndex;
use crate::core::models::Task;
use crate::core::types::{ViewMode, WeekStart};
use crate::extensions::chrono::WeekdayExt;

/// One rendered grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: DateBucketKey,
    pub in_current_period: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub tasks: &'a [Task],
}

/// Builds full-week grids for a month or a single week.
#[derive(Debug, Clone, Copy)]
pub struct GridBuilder {
    week_start: WeekStart,
    today: DateBucketKey,
    selected: Option<DateBucketKey>,
}

impl GridBuilder {
    /// Default: "today" is the local current day, nothing selected.
    pub fn new(week_start: WeekStart) -> Self {
        Self {
            week_start,
            today: DateBucketKey::today(),
            selected: None,
        }
    }

    pub fn with_today(mut self, today: DateBucketKey) -> Self {
        self.today = today;
        self
    }

    pub fn with_selected(mut self, selected: Option<DateBucketKey>) -> Self {
        self.selected = selected;
        self
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    pub fn build<'a>(
        &self,
        view: ViewMode,
        anchor: DateBucketKey,
        index: &'a TaskIndex,
    ) -> Vec<CalendarDay<'a>> {
        match view {
            ViewMode::Month => self.month(anchor, index),
            ViewMode::Week => self.week(anchor, index),
        }
    }

    /// Whole weeks covering the anchor's month; neighbouring-month days are
    /// flagged out of period but still carry their tasks.
    pub fn month<'a>(&self, anchor: DateBucketKey, index: &'a TaskIndex) -> Vec<CalendarDay<'a>> {
        let (first, last) = visible_range(ViewMode::Month, anchor, self.week_start);
        self.cells(first, last, index, |d| d.same_month(anchor))
    }

    /// The seven days of the week containing `anchor`.
    pub fn week<'a>(&self, anchor: DateBucketKey, index: &'a TaskIndex) -> Vec<CalendarDay<'a>> {
        let (first, last) = visible_range(ViewMode::Week, anchor, self.week_start);
        self.cells(first, last, index, |_| true)
    }

    fn cells<'a>(
        &self,
        first: DateBucketKey,
        last: DateBucketKey,
        index: &'a TaskIndex,
        in_period: impl Fn(DateBucketKey) -> bool,
    ) -> Vec<CalendarDay<'a>> {
        let mut out = Vec::with_capacity(42);
        let mut date = first;
        loop {
            out.push(CalendarDay {
                date,
                in_current_period: in_period(date),
                is_today: date == self.today,
                is_selected: self.selected == Some(date),
                tasks: index.tasks_on(date),
            });
            if date >= last {
                break;
            }
            date = date.add_days(1);
        }
        out
    }
}

/// Month grid for `anchor` with "today" injected.
pub fn build_month_grid<'a>(
    anchor: DateBucketKey,
    week_start: WeekStart,
    index: &'a TaskIndex,
    selected: Option<DateBucketKey>,
    today: DateBucketKey,
) -> Vec<CalendarDay<'a>> {
    GridBuilder::new(week_start)
        .with_today(today)
        .with_selected(selected)
        .month(anchor, index)
}

/// Week grid for `anchor` with "today" injected.
pub fn build_week_grid<'a>(
    anchor: DateBucketKey,
    week_start: WeekStart,
    index: &'a TaskIndex,
    selected: Option<DateBucketKey>,
    today: DateBucketKey,
) -> Vec<CalendarDay<'a>> {
    GridBuilder::new(week_start)
        .with_today(today)
        .with_selected(selected)
        .week(anchor, index)
}

/// First and last day shown for `anchor` under `view`.
///
/// Near chrono's `NaiveDate::MIN`/`MAX` the padding days do not exist, so the
/// range stops at the bound and the first or last row comes out short.
pub fn visible_range(
    view: ViewMode,
    anchor: DateBucketKey,
    week_start: WeekStart,
) -> (DateBucketKey, DateBucketKey) {
    match view {
        ViewMode::Month => (
            anchor.first_of_month().start_of_week(week_start),
            anchor.last_of_month().end_of_week(week_start),
        ),
        ViewMode::Week => (
            anchor.start_of_week(week_start),
            anchor.end_of_week(week_start),
        ),
    }
}

/// Column headers in grid order.
pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    let mut labels = [""; 7];
    let mut day = week_start.first_weekday();
    for label in labels.iter_mut() {
        *label = day.short_label();
        day = day.succ();
    }
    labels
}
