use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use vacation_core::VacationApp;

/// `--month YYYY-MM`: the days of that month carrying a calendar class.
pub fn month_mode(cli: &Cli, renderer: &Renderer, app: &VacationApp) -> Result<CliModeResult> {
    let Some(month) = &cli.month else {
        return Ok(CliModeResult::NothingToDo);
    };
    let first = NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .with_context(|| format!("'{month}' is not a month, expected YYYY-MM"))?;

    let marked = app.marked_days(first.year(), first.month())?;
    if cli.count {
        renderer.print_info(&format!("{} marked days found.", marked.len()));
    } else if marked.is_empty() {
        renderer.print_info(&format!("Nothing marked in {month}."));
    } else {
        renderer.print_marked_days(&marked);
    }
    Ok(CliModeResult::Finish)
}
