use crate::config::Config;
use crate::core::models::{Task, TaskFilter};
use crate::core::types::{Threshold, ViewMode, WeekStart};
use crate::errors::Error;
use crate::logging::{LogTarget, Logger};

pub mod bucket_key;
pub mod grid;
pub mod navigation;
pub mod swipe;
pub mod task_index;
#[cfg(test)]
mod tests;

pub use bucket_key::{DateBucketKey, compare, to_bucket_key, to_bucket_key_in};
pub use grid::{CalendarDay, GridBuilder, build_month_grid, build_week_grid};
pub use navigation::{NavCommand, NavigationState};
pub use swipe::{SwipeGesture, SwipeIntent, SwipeInterpreter, interpret};
pub use task_index::{DaySummary, TaskIndex};

/// The knobs one presenter keeps fixed for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarSettings {
    pub week_start: WeekStart,
    pub swipe_threshold: Threshold,
    pub default_view: ViewMode,
    pub filter: TaskFilter,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            week_start: WeekStart::Mon,
            swipe_threshold: Threshold::DEFAULT,
            default_view: ViewMode::Month,
            filter: TaskFilter::default(),
        }
    }
}

impl CalendarSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            week_start: *config.week_starts_on(),
            swipe_threshold: *config.swipe_threshold(),
            default_view: *config.default_view(),
            filter: TaskFilter {
                show_archived: config.show_archived(),
                show_completed: config.show_completed(),
            },
        }
    }
}

pub trait CalendarObserver {
    fn navigated(&self, cause: &str, before: &NavigationState, after: &NavigationState);
    fn tasks_loaded(&self, indexed: usize, days: usize, rejected: &[Error]);
}

struct LoggerObserver {
    logger: Logger,
}

impl CalendarObserver for LoggerObserver {
    fn navigated(&self, cause: &str, before: &NavigationState, after: &NavigationState) {
        if before == after {
            self.logger
                .debug(format!("Navigation '{cause}' left the view unchanged"));
            return;
        }
        self.logger.info(
            format!(
                "Navigation '{}': anchor {} -> {}, view {} -> {}, selected {} -> {}",
                cause,
                before.anchor(),
                after.anchor(),
                before.view(),
                after.view(),
                fmt_selected(before),
                fmt_selected(after),
            ),
            LogTarget::FileOnly,
        );
    }

    fn tasks_loaded(&self, indexed: usize, days: usize, rejected: &[Error]) {
        self.logger.info(
            format!("Indexed {indexed} task(s) across {days} day(s)"),
            LogTarget::FileOnly,
        );
        for err in rejected {
            self.logger
                .warn(format!("Skipped task: {err}"), LogTarget::ConsoleAndFile);
        }
    }
}

fn fmt_selected(state: &NavigationState) -> String {
    state
        .selected()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// One presenter's calendar: navigation state, the current task snapshot and
/// the settings both are read with.
pub struct CalendarEngine {
    settings: CalendarSettings,
    index: TaskIndex,
    state: NavigationState,
    gesture: SwipeGesture,
    pinned_today: Option<DateBucketKey>,
    observer: Box<dyn CalendarObserver>,
}

impl CalendarEngine {
    pub fn new(settings: CalendarSettings, logger: Logger) -> Self {
        Self::with_observer(settings, Box::new(LoggerObserver { logger }))
    }

    pub fn with_observer(settings: CalendarSettings, observer: Box<dyn CalendarObserver>) -> Self {
        let state = NavigationState::starting_at(
            DateBucketKey::today(),
            settings.default_view,
            settings.week_start,
        );
        Self {
            settings,
            index: TaskIndex::default(),
            state,
            gesture: SwipeGesture::new(SwipeInterpreter::new(settings.swipe_threshold)),
            pinned_today: None,
            observer,
        }
    }

    /// Fix "today" (and re-anchor on it); used for reproducible output.
    pub fn pin_today(mut self, today: DateBucketKey) -> Self {
        self.pinned_today = Some(today);
        self.state =
            NavigationState::starting_at(today, self.settings.default_view, self.settings.week_start);
        self
    }

    /// Swap in new settings, keeping the anchor, view and selection. The task
    /// snapshot is kept as is; reload it if the filter changed.
    pub fn reconfigure(&mut self, settings: CalendarSettings) {
        let state = self.state.with_week_start(settings.week_start);
        self.settings = settings;
        self.gesture = SwipeGesture::new(SwipeInterpreter::new(settings.swipe_threshold));
        self.commit("reconfigure", state);
    }

    pub fn today(&self) -> DateBucketKey {
        self.pinned_today.unwrap_or_else(DateBucketKey::today)
    }

    pub fn settings(&self) -> &CalendarSettings {
        &self.settings
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn index(&self) -> &TaskIndex {
        &self.index
    }

    /// Replace the task snapshot. Tasks with unusable dates are reported back
    /// (and logged) rather than dropped silently.
    pub fn load_tasks<I>(&mut self, tasks: I) -> Vec<Error>
    where
        I: IntoIterator<Item = Task>,
    {
        let filtered = self.settings.filter.apply(tasks);
        let (index, rejected) = TaskIndex::build_partial(filtered);
        self.observer
            .tasks_loaded(index.len(), index.day_count(), &rejected);
        self.index = index;
        rejected
    }

    /// Cells for the current view.
    pub fn visible_days(&self) -> Vec<CalendarDay<'_>> {
        GridBuilder::new(self.settings.week_start)
            .with_today(self.today())
            .with_selected(self.state.selected())
            .build(self.state.view(), self.state.anchor(), &self.index)
    }

    /// Tasks on the selected day, empty when nothing is selected.
    pub fn selected_tasks(&self) -> &[Task] {
        match self.state.selected() {
            Some(day) => self.index.tasks_on(day),
            None => &[],
        }
    }

    /// Apply `command`; returns whether the state changed.
    pub fn navigate(&mut self, command: NavCommand) -> bool {
        let cause = match command {
            NavCommand::Next => "next",
            NavCommand::Previous => "previous",
            NavCommand::Today(_) => "today",
            NavCommand::ToggleView => "toggle-view",
            NavCommand::Select(_) => "select",
        };
        let next = self.state.apply(command);
        self.commit(cause, next)
    }

    pub fn go_to_today(&mut self) -> bool {
        let today = self.today();
        self.navigate(NavCommand::Today(today))
    }

    /// Interpret a whole gesture at once and navigate accordingly.
    pub fn swipe(&mut self, start: (f64, f64), end: (f64, f64)) -> SwipeIntent {
        let intent = SwipeInterpreter::new(self.settings.swipe_threshold).interpret(start, end);
        self.apply_intent(intent);
        intent
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.gesture.begin(x, y);
    }

    pub fn touch_move(&mut self, x: f64, y: f64) {
        self.gesture.update(x, y);
    }

    pub fn touch_end(&mut self) -> SwipeIntent {
        let intent = self.gesture.finish();
        self.apply_intent(intent);
        intent
    }

    fn apply_intent(&mut self, intent: SwipeIntent) {
        let next = self.state.apply_swipe(intent);
        let cause = format!("swipe-{intent}");
        self.commit(&cause, next);
    }

    fn commit(&mut self, cause: &str, next: NavigationState) -> bool {
        let before = std::mem::replace(&mut self.state, next);
        self.observer.navigated(cause, &before, &self.state);
        before != self.state
    }
}
