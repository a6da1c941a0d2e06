use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use vacation_core::{DateRange, VacationApp, format_date};

/// `--check`: tells whether the selected range overlaps booked vacation.
pub fn check_mode(
    cli: &Cli,
    renderer: &Renderer,
    app: &mut VacationApp,
    range: Option<DateRange>,
) -> Result<CliModeResult> {
    if !cli.check {
        return Ok(CliModeResult::NothingToDo);
    }
    let Some(range) = range else {
        return Ok(CliModeResult::NothingToDo);
    };

    app.tracker.select(Some(range.start), Some(range.end));
    let overlapping = app.tracker.has_vacation_days_in_selection();
    let span = format!("{} - {}", format_date(range.start), format_date(range.end));
    if overlapping {
        let days = app
            .tracker
            .record()
            .vacation_days_in_range(range.start, range.end);
        renderer.print_info(&format!("{} vacation days in {span}.", days.len()));
        if !cli.count {
            let days: Vec<&str> = days.iter().map(String::as_str).collect();
            renderer.print_days(&days);
        }
    } else {
        renderer.print_info(&format!("No vacation days in {span}."));
    }
    app.tracker.reset_selection();
    Ok(CliModeResult::Finish)
}
