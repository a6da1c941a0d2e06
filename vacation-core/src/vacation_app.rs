use crate::{
    Config,
    calendar::{CalendarView, FixedDayHighlighter},
    dates::{DateRange, format_date},
    parse_input::{ParseOptions, parse_range},
    tracker::VacationTracker,
};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;

/// A day of a displayed month together with the calendar class it gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedDay {
    pub key: String,
    pub class: &'static str,
}

pub struct VacationApp {
    pub config: Config,
    pub tracker: VacationTracker,
    pub highlighter: FixedDayHighlighter,
}

impl VacationApp {
    /// Creates a new `VacationApp`, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `VacationApp` with a specific `Config`, seeding the tracker
    /// with the configured record.
    pub fn with_config(config: Config) -> Result<Self> {
        let record = config.record.to_record()?;
        let tracker = VacationTracker::new(record);
        let highlighter = FixedDayHighlighter::new(config.highlight_days.iter().copied());
        Ok(Self {
            config,
            tracker,
            highlighter,
        })
    }

    /// Parses user-typed bounds into a range, using the configured formats and
    /// reference date. `end` defaults to the end of whatever `start` denotes.
    pub fn parse_dates(&self, start: &str, end: Option<&str>) -> Result<DateRange> {
        let format_strs: Vec<&str> = self
            .config
            .input_date_formats
            .iter()
            .map(AsRef::as_ref)
            .collect();
        let opts = ParseOptions {
            reference_date: Some(self.config.reference_date),
            formats: Some(&format_strs),
        };
        parse_range(start, end, Some(opts)).ok_or_else(|| {
            let input = match end {
                Some(end) => format!("{start}' to '{end}"),
                None => start.to_string(),
            };
            anyhow!("'{input}' is not a valid date or keyword")
        })
    }

    /// Days of the month that carry a class in the month view: vacation days first,
    /// otherwise the demo highlight.
    pub fn marked_days(&self, year: i32, month: u32) -> Result<Vec<MarkedDay>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| anyhow!("{year}-{month:02} is not a valid month"))?;
        let last = match month {
            12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
            m => NaiveDate::from_ymd_opt(year, m + 1, 1),
        }
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| anyhow!("{year}-{month:02} is out of range"))?;

        let marked = DateRange::new(first, last)
            .days()
            .filter_map(|day| {
                let class = match self.tracker.day_class(day, CalendarView::Month) {
                    "" => self.highlighter.class_for(day, CalendarView::Month),
                    class => class,
                };
                (!class.is_empty()).then(|| MarkedDay {
                    key: format_date(day),
                    class,
                })
            })
            .collect();
        Ok(marked)
    }
}
