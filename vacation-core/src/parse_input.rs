use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use log::trace;

use crate::dates::DateRange;
use crate::keywords::{Keyword, Keywords};

/// Default accepted input date formats (parsing only).
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y"];

/// The result of parsing a date string, which can be a single day or a range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DateFilter {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

impl DateFilter {
    pub fn first(&self) -> NaiveDate {
        match *self {
            DateFilter::Single(d) | DateFilter::Range(d, _) => d,
        }
    }

    pub fn last(&self) -> NaiveDate {
        match *self {
            DateFilter::Single(d) | DateFilter::Range(_, d) => d,
        }
    }
}

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Parses a string token into a day or a range of days.
///
/// Processed in this order:
/// 1.  **Relative Keywords**: `today`, `yesterday`, `tomorrow`, `this week`, `next week`,
///     `this month`, `next month` and user-defined synonyms, relative to `reference_date`.
///     Weeks run Monday to Sunday.
/// 2.  **Weekdays**: `monday` … `sunday` resolve to the next such day, on or after
///     `reference_date`.
/// 3.  **Formatted Dates**: any format string in `formats`, such as `"%d.%m.%Y"`.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use vacation_core::parse_input::{parse_date_token, ParseOptions, DateFilter};
/// let opts = ParseOptions {
///     reference_date: Some(NaiveDate::from_ymd_opt(2024, 12, 4).unwrap()),
///     formats: Some(&["%d.%m.%Y"]),
/// };
///
/// let tomorrow = parse_date_token("tomorrow", Some(opts)).unwrap();
/// assert_eq!(tomorrow, DateFilter::Single(NaiveDate::from_ymd_opt(2024, 12, 5).unwrap()));
///
/// let christmas = parse_date_token("24.12.2024", Some(opts)).unwrap();
/// assert_eq!(christmas, DateFilter::Single(NaiveDate::from_ymd_opt(2024, 12, 24).unwrap()));
/// ```
pub fn parse_date_token(s: &str, options: Option<ParseOptions>) -> Option<DateFilter> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);
    let s = s.trim();

    if let Some(keyword) = Keywords::lookup(s) {
        let filter = resolve_keyword(keyword, reference_date);
        trace!("'{s}' resolved to {filter:?}");
        return filter;
    }

    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(DateFilter::Single)
        .next()
}

/// Combines a start token and an optional end token into one inclusive range.
///
/// With only `start`, the range is whatever `start` denotes (one day or a keyword
/// range such as `next week`). With both, the range runs from the first day of
/// `start` to the last day of `end`.
pub fn parse_range(start: &str, end: Option<&str>, options: Option<ParseOptions>) -> Option<DateRange> {
    let first = parse_date_token(start, options)?;
    let last = match end {
        Some(end) => parse_date_token(end, options)?,
        None => first,
    };
    Some(DateRange::new(first.first(), last.last()))
}

fn resolve_keyword(keyword: Keyword, reference_date: NaiveDate) -> Option<DateFilter> {
    let filter = match keyword {
        Keyword::Today => DateFilter::Single(reference_date),
        Keyword::Yesterday => DateFilter::Single(reference_date.pred_opt()?),
        Keyword::Tomorrow => DateFilter::Single(reference_date.succ_opt()?),
        Keyword::ThisWeek => week_of(reference_date)?,
        Keyword::NextWeek => week_of(reference_date.checked_add_signed(Duration::days(7))?)?,
        Keyword::ThisMonth => month_of(reference_date.year(), reference_date.month())?,
        Keyword::NextMonth => {
            let (year, month) = match reference_date.month() {
                12 => (reference_date.year() + 1, 1),
                m => (reference_date.year(), m + 1),
            };
            month_of(year, month)?
        }
        Keyword::Monday => next_weekday(reference_date, Weekday::Mon)?,
        Keyword::Tuesday => next_weekday(reference_date, Weekday::Tue)?,
        Keyword::Wednesday => next_weekday(reference_date, Weekday::Wed)?,
        Keyword::Thursday => next_weekday(reference_date, Weekday::Thu)?,
        Keyword::Friday => next_weekday(reference_date, Weekday::Fri)?,
        Keyword::Saturday => next_weekday(reference_date, Weekday::Sat)?,
        Keyword::Sunday => next_weekday(reference_date, Weekday::Sun)?,
    };
    Some(filter)
}

/// Monday to Sunday around `date`.
fn week_of(date: NaiveDate) -> Option<DateFilter> {
    let days_from_monday = date.weekday().num_days_from_monday() as i64;
    let monday = date.checked_sub_signed(Duration::days(days_from_monday))?;
    let sunday = monday.checked_add_signed(Duration::days(6))?;
    Some(DateFilter::Range(monday, sunday))
}

fn month_of(year: i32, month: u32) -> Option<DateFilter> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
        m => NaiveDate::from_ymd_opt(year, m + 1, 1)?,
    };
    Some(DateFilter::Range(first, next_first.pred_opt()?))
}

fn next_weekday(reference_date: NaiveDate, weekday: Weekday) -> Option<DateFilter> {
    let today = reference_date.weekday().num_days_from_monday();
    let days_ahead = (weekday.num_days_from_monday() + 7 - today) % 7;
    let date = reference_date.checked_add_signed(Duration::days(days_ahead as i64))?;
    Some(DateFilter::Single(date))
}
