use crate::calendar::bucket_key::DateBucketKey;
use crate::calendar::grid::visible_range;
use crate::calendar::swipe::SwipeIntent;
use crate::core::types::{ViewMode, WeekStart};

/// A navigation request a presenter hands to [`NavigationState::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    Today(DateBucketKey),
    ToggleView,
    Select(DateBucketKey),
}

/// Where a calendar presenter is looking.
///
/// Every transition returns a new value; compare old and new to decide
/// whether to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    anchor: DateBucketKey,
    selected: Option<DateBucketKey>,
    view: ViewMode,
    week_start: WeekStart,
    // Day of month month-steps aim for, so a clamped step can be undone.
    anchor_day: u32,
}

impl NavigationState {
    /// Month view anchored on the local current day, nothing selected.
    pub fn new(week_start: WeekStart) -> Self {
        Self::starting_at(DateBucketKey::today(), ViewMode::Month, week_start)
    }

    pub fn starting_at(anchor: DateBucketKey, view: ViewMode, week_start: WeekStart) -> Self {
        Self {
            anchor,
            selected: None,
            view,
            week_start,
            anchor_day: anchor.day(),
        }
    }

    pub fn anchor(&self) -> DateBucketKey {
        self.anchor
    }

    pub fn selected(&self) -> Option<DateBucketKey> {
        self.selected
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Same position and selection, laid out from another first weekday.
    pub fn with_week_start(&self, week_start: WeekStart) -> Self {
        Self {
            week_start,
            ..*self
        }
    }

    pub fn next(&self) -> Self {
        self.step(1)
    }

    pub fn previous(&self) -> Self {
        self.step(-1)
    }

    fn step(&self, direction: i32) -> Self {
        match self.view {
            ViewMode::Month => Self {
                anchor: self
                    .anchor
                    .first_of_month()
                    .add_months(direction)
                    .with_day_clamped(self.anchor_day),
                ..*self
            },
            ViewMode::Week => {
                let anchor = self.anchor.add_weeks(i64::from(direction));
                Self {
                    anchor,
                    anchor_day: anchor.day(),
                    ..*self
                }
            }
        }
    }

    pub fn go_to_today(&self) -> Self {
        self.go_to_today_on(DateBucketKey::today())
    }

    pub fn go_to_today_on(&self, today: DateBucketKey) -> Self {
        Self {
            anchor: today,
            selected: Some(today),
            anchor_day: today.day(),
            ..*self
        }
    }

    pub fn toggle_view(&self) -> Self {
        Self {
            view: self.view.toggled(),
            ..*self
        }
    }

    /// Select `date`, moving the anchor onto it only when it is off-grid.
    pub fn select_date(&self, date: DateBucketKey) -> Self {
        if self.is_visible(date) {
            return Self {
                selected: Some(date),
                ..*self
            };
        }
        Self {
            anchor: date,
            selected: Some(date),
            anchor_day: date.day(),
            ..*self
        }
    }

    pub fn apply(&self, command: NavCommand) -> Self {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::Today(today) => self.go_to_today_on(today),
            NavCommand::ToggleView => self.toggle_view(),
            NavCommand::Select(date) => self.select_date(date),
        }
    }

    pub fn apply_swipe(&self, intent: SwipeIntent) -> Self {
        match intent {
            SwipeIntent::Previous => self.previous(),
            SwipeIntent::Next => self.next(),
            SwipeIntent::None => *self,
        }
    }

    /// Whether `date` is one of the cells of the current grid.
    pub fn is_visible(&self, date: DateBucketKey) -> bool {
        let (first, last) = self.visible_range();
        first <= date && date <= last
    }

    pub fn visible_range(&self) -> (DateBucketKey, DateBucketKey) {
        visible_range(self.view, self.anchor, self.week_start)
    }

    /// "March 2024" in month view, "Week of 2024-03-11" in week view.
    pub fn header_label(&self) -> String {
        match self.view {
            ViewMode::Month => self.anchor.as_naive().format("%B %Y").to_string(),
            ViewMode::Week => format!("Week of {}", self.visible_range().0),
        }
    }
}
