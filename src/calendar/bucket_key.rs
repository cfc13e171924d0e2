use crate::core::types::WeekStart;
use crate::errors::{Error, Result};
use crate::extensions::chrono::WeekdayExt;
use chrono::{DateTime, Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter as EnumIterDerive};

/// A local calendar day, the unit tasks are bucketed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateBucketKey(NaiveDate);

/// Zoned layouts that `DateTime::parse_from_rfc3339` does not cover.
#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
enum ZonedFormat {
    #[strum(serialize = "%Y-%m-%dT%H:%M:%S%.f%z")]
    CompactOffset,
    #[strum(serialize = "%Y-%m-%d %H:%M:%S%.f%:z")]
    SpacedOffset,
}

/// Layouts read as wall-clock time in the local zone.
#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr)]
enum NaiveFormat {
    #[strum(serialize = "%Y-%m-%dT%H:%M:%S%.f")]
    IsoSeconds,
    #[strum(serialize = "%Y-%m-%dT%H:%M")]
    IsoMinutes,
    #[strum(serialize = "%Y-%m-%d %H:%M:%S%.f")]
    SpacedSeconds,
    #[strum(serialize = "%Y-%m-%d %H:%M")]
    SpacedMinutes,
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Truncate a timestamp to its calendar day in the local timezone.
pub fn to_bucket_key(timestamp: &str) -> Result<DateBucketKey> {
    to_bucket_key_in(timestamp, &Local)
}

/// Truncate a timestamp to its calendar day as observed in `tz`.
///
/// Timestamps carrying an offset are converted into `tz` first; naive
/// timestamps and plain dates are taken as already being wall-clock time.
pub fn to_bucket_key_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> Result<DateBucketKey> {
    let raw = timestamp.trim();
    if raw.is_empty() {
        return Err(Error::invalid_timestamp(raw, "empty timestamp"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(DateBucketKey(dt.with_timezone(tz).date_naive()));
    }
    for f in ZonedFormat::iter() {
        if let Ok(dt) = DateTime::parse_from_str(raw, f.as_ref()) {
            return Ok(DateBucketKey(dt.with_timezone(tz).date_naive()));
        }
    }
    for f in NaiveFormat::iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, f.as_ref()) {
            return Ok(DateBucketKey(dt.date()));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(DateBucketKey(date));
    }

    Err(Error::invalid_timestamp(
        raw,
        "expected an ISO-8601 date or date-time",
    ))
}

/// Total order by (year, month, day).
pub fn compare(a: DateBucketKey, b: DateBucketKey) -> Ordering {
    a.cmp(&b)
}

impl DateBucketKey {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(DateBucketKey)
            .ok_or_else(|| {
                Error::invalid_timestamp(
                    format!("{year:04}-{month:02}-{day:02}"),
                    "no such calendar day",
                )
            })
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        DateBucketKey(date)
    }

    pub fn today() -> Self {
        DateBucketKey(Local::now().date_naive())
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    // Arithmetic saturates at the representable calendar bounds so that
    // navigation never fails.

    pub fn add_days(self, n: i64) -> Self {
        let step = Days::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.0.checked_add_days(step)
        } else {
            self.0.checked_sub_days(step)
        };
        DateBucketKey(moved.unwrap_or(if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN }))
    }

    pub fn add_weeks(self, n: i64) -> Self {
        self.add_days(n.saturating_mul(7))
    }

    /// Month steps clamp the day to the target month's length.
    pub fn add_months(self, n: i32) -> Self {
        let step = Months::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.0.checked_add_months(step)
        } else {
            self.0.checked_sub_months(step)
        };
        DateBucketKey(moved.unwrap_or(if n >= 0 { NaiveDate::MAX } else { NaiveDate::MIN }))
    }

    /// Same month, `day` clamped to the month's length.
    pub fn with_day_clamped(self, day: u32) -> Self {
        let day = day.clamp(1, self.days_in_month());
        DateBucketKey(self.0.with_day(day).unwrap_or(self.0))
    }

    pub fn first_of_month(self) -> Self {
        DateBucketKey(self.0.with_day(1).unwrap_or(self.0))
    }

    pub fn last_of_month(self) -> Self {
        self.first_of_month()
            .0
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .map(DateBucketKey)
            .unwrap_or(DateBucketKey(NaiveDate::MAX))
    }

    pub fn days_in_month(self) -> u32 {
        self.last_of_month().day()
    }

    pub fn start_of_week(self, week_start: WeekStart) -> Self {
        self.add_days(-i64::from(self.weekday().column(week_start)))
    }

    pub fn end_of_week(self, week_start: WeekStart) -> Self {
        self.start_of_week(week_start).add_days(6)
    }

    pub fn same_month(self, other: DateBucketKey) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl fmt::Display for DateBucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for DateBucketKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        to_bucket_key(s)
    }
}

impl From<NaiveDate> for DateBucketKey {
    fn from(date: NaiveDate) -> Self {
        DateBucketKey(date)
    }
}

impl Serialize for DateBucketKey {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateBucketKey {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<DateBucketKey, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        to_bucket_key(&s).map_err(serde::de::Error::custom)
    }
}
