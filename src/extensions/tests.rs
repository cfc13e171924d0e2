use super::{
    chrono::WeekdayExt,
    enums::valid_csv,
    string::{ToDashSeparators, Truncate},
};
use crate::core::types::{Priority, WeekStart};
use chrono::Weekday;

#[test]
fn weekday_ext_places_columns_per_week_start() {
    assert_eq!(Weekday::Mon.column(WeekStart::Mon), 0);
    assert_eq!(Weekday::Sun.column(WeekStart::Mon), 6);
    assert_eq!(Weekday::Sun.column(WeekStart::Sun), 0);
    assert_eq!(Weekday::Sat.column(WeekStart::Sun), 6);
    assert_eq!(Weekday::Thu.column(WeekStart::Sun), 4);
}

#[test]
fn weekday_ext_short_labels() {
    assert_eq!(Weekday::Mon.short_label(), "Mon");
    assert_eq!(Weekday::Sun.short_label(), "Sun");
}

#[test]
fn valid_csv_lists_enum_variants_as_strings() {
    let csv = valid_csv::<Priority>();
    assert_eq!(csv, "low, medium, high, urgent");
    assert_eq!(valid_csv::<WeekStart>(), "mon, sun");
}

#[test]
fn to_dash_separators_replaces_and_trims() {
    let s = " 2025/01/02 ";
    assert_eq!(s.to_dash_separators(), "2025-01-02");

    let owned = "a/b/c".to_string();
    assert_eq!(owned.to_dash_separators(), "a-b-c");
}

#[test]
fn truncate_chars_marks_cut() {
    assert_eq!("groceries".truncate_chars(20), "groceries");
    assert_eq!("groceries".truncate_chars(5), "groc…");
    assert_eq!("groceries".truncate_chars(0), "");
}
