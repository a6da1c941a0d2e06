//! The vacation tracker: a record plus the start/end selection a user is editing.
//!
//! Every call returns what changed; the caller decides when to redraw.

use crate::calendar::{CalendarView, vacation_day_class};
use crate::dates::DateRange;
use crate::notification::Notification;
use crate::vacation::VacationRecord;
use chrono::NaiveDate;
use log::debug;

/// The start/end pair of the date-range input. Either side may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeSelection {
    pub fn range(&self) -> Option<DateRange> {
        DateRange::from_bounds(self.start, self.end)
    }
}

#[derive(Debug, Clone)]
pub struct VacationTracker {
    record: VacationRecord,
    selection: RangeSelection,
}

impl VacationTracker {
    pub fn new(record: VacationRecord) -> Self {
        Self {
            record,
            selection: RangeSelection::default(),
        }
    }

    pub fn record(&self) -> &VacationRecord {
        &self.record
    }

    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    pub fn select_start(&mut self, start: Option<NaiveDate>) {
        self.selection.start = start;
    }

    pub fn select_end(&mut self, end: Option<NaiveDate>) {
        self.selection.end = end;
    }

    pub fn select(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.selection = RangeSelection { start, end };
    }

    pub fn reset_selection(&mut self) {
        self.selection = RangeSelection::default();
    }

    /// Marks the selected range as vacation and clears the selection.
    ///
    /// Returns `None`, and keeps the selection, when start or end is missing.
    pub fn add_selected(&mut self) -> Option<Notification> {
        let range = self.selection.range()?;
        let count = self
            .record
            .add_vacation_days(Some(range.start), Some(range.end));
        self.reset_selection();
        debug!("added {count} vacation days for {}", self.record.name);
        Some(Notification::added(count))
    }

    /// Unmarks the selected range and clears the selection.
    ///
    /// Returns `None`, and keeps the selection, when start or end is missing.
    pub fn remove_selected(&mut self) -> Option<Notification> {
        let range = self.selection.range()?;
        let count = self
            .record
            .remove_vacation_days(Some(range.start), Some(range.end));
        self.reset_selection();
        debug!("removed {count} vacation days for {}", self.record.name);
        Some(Notification::removed(count))
    }

    pub fn has_vacation_days_in_selection(&self) -> bool {
        self.record
            .has_vacation_days_in_range(self.selection.start, self.selection.end)
    }

    /// Calendar cell class for `date` in this tracker's calendar.
    pub fn day_class(&self, date: NaiveDate, view: CalendarView) -> &'static str {
        vacation_day_class(&self.record, date, view)
    }
}
