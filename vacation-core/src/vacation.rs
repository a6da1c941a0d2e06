//! The per-user vacation record and the operations that mark, unmark and query
//! vacation days over a date range.

use crate::dates::{DateRange, format_date, parse_day_key};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use log::{debug, trace};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationRecord {
    pub name: String,
    pub workplace: String,
    pub employee_number: u32,
    vacation_days: HashSet<String>,
}

impl VacationRecord {
    /// A record without any vacation days.
    pub fn new(name: impl Into<String>, workplace: impl Into<String>, employee_number: u32) -> Self {
        Self {
            name: name.into(),
            workplace: workplace.into(),
            employee_number,
            vacation_days: HashSet::new(),
        }
    }

    /// Adds already known vacation days, e.g. read from configuration.
    ///
    /// Fails on the first key that is not a canonical `YYYY-MM-DD` date, leaving the
    /// record untouched.
    pub fn with_vacation_days<I, S>(mut self, keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut days = HashSet::new();
        for key in keys {
            let key = key.as_ref();
            if parse_day_key(key).is_none() {
                bail!("'{key}' is not a valid vacation day, expected YYYY-MM-DD");
            }
            days.insert(key.to_string());
        }
        self.vacation_days.extend(days);
        Ok(self)
    }

    /// Marks every day from `start` to `end` (inclusive) as vacation.
    ///
    /// Returns the number of days in the range, whether or not they were already
    /// marked. Does nothing and returns `0` if a bound is missing.
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use vacation_core::VacationRecord;
    /// let mut record = VacationRecord::new("Max Mustermann", "Entwicklungsabteilung", 2398);
    /// let start = NaiveDate::from_ymd_opt(2024, 12, 1);
    /// let end = NaiveDate::from_ymd_opt(2024, 12, 3);
    ///
    /// assert_eq!(record.add_vacation_days(start, end), 3);
    /// assert_eq!(record.add_vacation_days(start, end), 3);
    /// assert_eq!(record.len(), 3);
    /// ```
    pub fn add_vacation_days(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> usize {
        let Some(range) = DateRange::from_bounds(start, end) else {
            return 0;
        };
        let keys = range.keys();
        let processed = keys.len();
        trace!("adding {processed} days from {} to {}", range.start, range.end);
        self.vacation_days.extend(keys);
        debug!("{self:?}");
        processed
    }

    /// Unmarks every vacation day from `start` to `end` (inclusive).
    ///
    /// Returns the number of days that were actually removed. Does nothing and
    /// returns `0` if a bound is missing.
    pub fn remove_vacation_days(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> usize {
        let Some(range) = DateRange::from_bounds(start, end) else {
            return 0;
        };
        let removed = range
            .keys()
            .filter(|key| self.vacation_days.remove(key))
            .count();
        trace!("removed {removed} days from {} to {}", range.start, range.end);
        debug!("{self:?}");
        removed
    }

    /// `true` if at least one day from `start` to `end` is a vacation day.
    /// `false` if a bound is missing.
    pub fn has_vacation_days_in_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
        DateRange::from_bounds(start, end)
            .is_some_and(|range| range.keys().any(|key| self.vacation_days.contains(&key)))
    }

    /// The vacation days inside `start..=end`, ascending.
    pub fn vacation_days_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<String> {
        DateRange::new(start, end)
            .keys()
            .filter(|key| self.vacation_days.contains(key))
            .collect()
    }

    pub fn is_vacation_day(&self, date: NaiveDate) -> bool {
        self.vacation_days.contains(&format_date(date))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.vacation_days.contains(key)
    }

    /// All vacation days, ascending. Day-keys sort chronologically as strings.
    pub fn sorted_days(&self) -> Vec<&str> {
        let mut days: Vec<&str> = self.vacation_days.iter().map(String::as_str).collect();
        days.sort_unstable();
        days
    }

    pub fn len(&self) -> usize {
        self.vacation_days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vacation_days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, day)
    }

    fn mk_record() -> VacationRecord {
        VacationRecord::new("Max Mustermann", "Entwicklungsabteilung", 2398)
    }

    #[test]
    fn add_range_to_empty_record() {
        let mut record = mk_record();
        let added = record.add_vacation_days(d(2024, 12, 1), d(2024, 12, 3));
        assert_eq!(added, 3);
        assert_eq!(record.sorted_days(), ["2024-12-01", "2024-12-02", "2024-12-03"]);
    }

    #[test]
    fn adding_same_range_again_reports_range_length() {
        let mut record = mk_record();
        record.add_vacation_days(d(2024, 12, 1), d(2024, 12, 3));
        let added = record.add_vacation_days(d(2024, 12, 1), d(2024, 12, 3));
        assert_eq!(added, 3);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn remove_counts_actual_removals() {
        let mut record = mk_record();
        record.add_vacation_days(d(2024, 12, 1), d(2024, 12, 3));

        assert_eq!(record.remove_vacation_days(d(2024, 12, 2), d(2024, 12, 2)), 1);
        assert_eq!(record.len(), 2);
        assert!(!record.contains_key("2024-12-02"));

        // Only 12-01 and 12-03 are left in this range.
        assert_eq!(record.remove_vacation_days(d(2024, 11, 25), d(2024, 12, 5)), 2);
        assert!(record.is_empty());
    }

    #[test]
    fn no_vacation_in_november() {
        let mut record = mk_record();
        record.add_vacation_days(d(2024, 12, 1), d(2024, 12, 3));
        assert!(!record.has_vacation_days_in_range(d(2024, 11, 1), d(2024, 11, 30)));
        assert!(record.has_vacation_days_in_range(d(2024, 11, 1), d(2024, 12, 1)));
    }

    #[test]
    fn missing_bounds_are_no_ops() {
        let mut record = mk_record();
        record.add_vacation_days(d(2024, 12, 1), d(2024, 12, 3));
        let before = record.clone();

        assert_eq!(record.add_vacation_days(None, d(2024, 12, 10)), 0);
        assert_eq!(record.add_vacation_days(d(2024, 12, 10), None), 0);
        assert_eq!(record.remove_vacation_days(None, d(2024, 12, 3)), 0);
        assert_eq!(record.remove_vacation_days(d(2024, 12, 1), None), 0);
        assert!(!record.has_vacation_days_in_range(None, d(2024, 12, 3)));
        assert!(!record.has_vacation_days_in_range(None, None));
        assert_eq!(record, before);
    }

    #[test]
    fn inverted_range_changes_nothing() {
        let mut record = mk_record();
        assert_eq!(record.add_vacation_days(d(2024, 12, 3), d(2024, 12, 1)), 0);
        assert!(record.is_empty());
        assert!(!record.has_vacation_days_in_range(d(2024, 12, 3), d(2024, 12, 1)));
    }

    #[test]
    fn with_vacation_days_validates_keys() {
        let record = mk_record()
            .with_vacation_days(["2024-11-03", "2024-11-14", "2024-11-03"])
            .unwrap();
        assert_eq!(record.sorted_days(), ["2024-11-03", "2024-11-14"]);
        assert!(record.is_vacation_day(NaiveDate::from_ymd_opt(2024, 11, 14).unwrap()));

        let err = mk_record()
            .with_vacation_days(["2024-11-03", "2024-13-01"])
            .unwrap_err();
        assert!(err.to_string().contains("2024-13-01"));
    }

    #[test]
    fn vacation_days_in_range_is_ascending() {
        let record = mk_record()
            .with_vacation_days(["2024-12-20", "2024-12-11", "2024-11-03"])
            .unwrap();
        let days = record.vacation_days_in_range(
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
        );
        assert_eq!(days, ["2024-12-11", "2024-12-20"]);
    }
}
