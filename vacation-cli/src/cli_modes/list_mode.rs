use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use vacation_core::{DateRange, VacationApp};

/// `--list`: prints the vacation days, only those of the range if one was given.
pub fn list_mode(
    cli: &Cli,
    renderer: &Renderer,
    app: &VacationApp,
    range: Option<DateRange>,
) -> Result<CliModeResult> {
    if !cli.list {
        return Ok(CliModeResult::NothingToDo);
    }
    let record = app.tracker.record();
    let in_range;
    let days: Vec<&str> = match range {
        Some(range) => {
            in_range = record.vacation_days_in_range(range.start, range.end);
            in_range.iter().map(String::as_str).collect()
        }
        None => record.sorted_days(),
    };

    if cli.count {
        renderer.print_info(&format!("{} vacation days found.", days.len()));
        return Ok(CliModeResult::Finish);
    }
    renderer.print_record(record);
    if days.is_empty() {
        renderer.print_info("No vacation days found.");
    } else {
        renderer.print_days(&days);
    }
    Ok(CliModeResult::Finish)
}
