//! Cell classes for calendar widgets.
//!
//! A calendar front-end asks, for every displayed day, which CSS-like class the cell
//! gets. An empty string means no class.

use crate::vacation::VacationRecord;
use chrono::{Datelike, NaiveDate};
use strum_macros::{AsRefStr, EnumIter, EnumString};

pub const VACATION_DAY_CLASS: &str = "user-vacation-day";
pub const HIGHLIGHTED_DAY_CLASS: &str = "example-custom-date-class";

/// Which level of the calendar is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum CalendarView {
    Month,
    Year,
    MultiYear,
}

/// Class for `date` in the vacation calendar. Only single days (the month view)
/// are marked.
pub fn vacation_day_class(record: &VacationRecord, date: NaiveDate, view: CalendarView) -> &'static str {
    match view {
        CalendarView::Month if record.is_vacation_day(date) => VACATION_DAY_CLASS,
        _ => "",
    }
}

/// The demo calendar: highlights the same days of every month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDayHighlighter {
    days: Vec<u32>,
}

impl Default for FixedDayHighlighter {
    fn default() -> Self {
        Self { days: vec![1, 20] }
    }
}

impl FixedDayHighlighter {
    /// Days outside `1..=31` can never match and are dropped.
    pub fn new(days: impl IntoIterator<Item = u32>) -> Self {
        let mut days: Vec<u32> = days.into_iter().filter(|d| (1..=31).contains(d)).collect();
        days.sort_unstable();
        days.dedup();
        Self { days }
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn class_for(&self, date: NaiveDate, view: CalendarView) -> &'static str {
        match view {
            CalendarView::Month if self.days.contains(&date.day()) => HIGHLIGHTED_DAY_CLASS,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn vacation_days_are_marked_in_month_view_only() {
        let record = VacationRecord::new("Max Mustermann", "Entwicklungsabteilung", 2398)
            .with_vacation_days(["2024-12-11"])
            .unwrap();

        assert_eq!(
            vacation_day_class(&record, d(2024, 12, 11), CalendarView::Month),
            VACATION_DAY_CLASS
        );
        assert_eq!(vacation_day_class(&record, d(2024, 12, 12), CalendarView::Month), "");
        assert_eq!(vacation_day_class(&record, d(2024, 12, 11), CalendarView::Year), "");
        assert_eq!(vacation_day_class(&record, d(2024, 12, 11), CalendarView::MultiYear), "");
    }

    #[test]
    fn default_highlighter_marks_first_and_twentieth() {
        let highlighter = FixedDayHighlighter::default();
        let marked: Vec<u32> = (1..=31)
            .filter(|day| highlighter.class_for(d(2024, 12, *day), CalendarView::Month) != "")
            .collect();
        assert_eq!(marked, [1, 20]);
        assert_eq!(highlighter.class_for(d(2024, 12, 1), CalendarView::Year), "");
    }

    #[test]
    fn highlighter_drops_impossible_days() {
        let highlighter = FixedDayHighlighter::new([31, 0, 15, 32, 15]);
        assert_eq!(highlighter.days(), [15, 31]);
        assert_eq!(
            highlighter.class_for(d(2024, 1, 31), CalendarView::Month),
            HIGHLIGHTED_DAY_CLASS
        );
    }

    #[test]
    fn view_names_are_kebab_case() {
        let names: Vec<String> = CalendarView::iter().map(|v| v.as_ref().to_string()).collect();
        assert_eq!(names, ["month", "year", "multi-year"]);
        assert_eq!(CalendarView::from_str("multi-year").unwrap(), CalendarView::MultiYear);
    }
}
