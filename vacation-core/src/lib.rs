pub mod calendar;
pub mod config;
pub mod dates;
pub mod keywords;
pub mod notification;
pub mod parse_input;
pub mod tracker;
pub mod vacation;
pub mod vacation_app;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarView, FixedDayHighlighter};
pub use config::Config;
pub use dates::{DateRange, expand_range, format_date};
pub use notification::{Notification, NotificationLabels, VacationAction};
pub use tracker::{RangeSelection, VacationTracker};
pub use vacation::VacationRecord;
pub use vacation_app::{MarkedDay, VacationApp};
