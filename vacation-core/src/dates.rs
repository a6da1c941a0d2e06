//! Day-keys and inclusive date ranges.
//!
//! A day-key is the canonical `YYYY-MM-DD` form of a calendar date. Every key the
//! crate stores or compares is produced by [`format_date`].

use chrono::{NaiveDate, NaiveDateTime};
use std::iter::FusedIterator;

/// Canonical day-key format.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Formats a date as a day-key (`2024-12-05`), zero-padded and with a 1-indexed month.
///
/// ```
/// # use chrono::NaiveDate;
/// # use vacation_core::dates::format_date;
/// let date = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
/// assert_eq!(format_date(date), "2024-12-05");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

/// Same as [`format_date`], the time of day is dropped.
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    format_date(date_time.date())
}

/// Parses a day-key back into a date. Only the canonical form is accepted.
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()?;
    // chrono accepts unpadded fields ("2024-1-5"), a key must round-trip exactly.
    (format_date(date) == key).then_some(date)
}

/// Returns the day-keys from `start` to `end`, both inclusive, in ascending order.
/// If `start` is after `end` the sequence is empty.
///
/// The returned iterator is lazy and can be cloned to walk the range again.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use vacation_core::dates::expand_range;
/// let start = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// let keys: Vec<String> = expand_range(start, end).collect();
///
/// assert_eq!(keys, ["2024-12-30", "2024-12-31", "2025-01-01"]);
/// ```
pub fn expand_range(start: NaiveDate, end: NaiveDate) -> DayKeys {
    DateRange::new(start, end).keys()
}

/// An inclusive `(start, end)` pair of calendar dates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Builds a range only when both bounds are present.
    pub fn from_bounds(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Some(Self::new(start, end)),
            _ => None,
        }
    }

    /// Number of days in the range, `0` when `start > end`.
    pub fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }

    pub fn keys(&self) -> DayKeys {
        DayKeys { days: self.days() }
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Clone, Debug)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        // `succ_opt` is `None` only at `NaiveDate::MAX`, which ends the walk.
        self.next = current.succ_opt();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) => DateRange::new(next, self.end).len(),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}
impl FusedIterator for Days {}

/// Iterator over the day-keys of a [`DateRange`].
#[derive(Clone, Debug)]
pub struct DayKeys {
    days: Days,
}

impl Iterator for DayKeys {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.days.next().map(format_date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.days.size_hint()
    }
}

impl ExactSizeIterator for DayKeys {}
impl FusedIterator for DayKeys {}
