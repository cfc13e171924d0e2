use crate::core::types::WeekStart;
use chrono::Weekday;

pub trait WeekdayExt {
    /// Three-letter column label.
    fn short_label(self) -> &'static str;
    /// Zero-based grid column of this weekday under `start`.
    fn column(self, start: WeekStart) -> u32;
}

impl WeekdayExt for Weekday {
    fn short_label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    fn column(self, start: WeekStart) -> u32 {
        match start {
            WeekStart::Mon => self.num_days_from_monday(),
            WeekStart::Sun => self.num_days_from_sunday(),
        }
    }
}
