use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::Result;
use vacation_core::{DateRange, VacationApp};

/// `--add` / `--remove`: applies the selected range and shows the notification.
pub fn update_mode(
    cli: &Cli,
    renderer: &Renderer,
    app: &mut VacationApp,
    range: Option<DateRange>,
) -> Result<CliModeResult> {
    if !cli.add && !cli.remove {
        return Ok(CliModeResult::NothingToDo);
    }
    let Some(range) = range else {
        return Ok(CliModeResult::NothingToDo);
    };

    app.tracker.select(Some(range.start), Some(range.end));
    let notification = if cli.add {
        app.tracker.add_selected()
    } else {
        app.tracker.remove_selected()
    };

    if let Some(notification) = notification {
        renderer.print_notification(&notification);
    }
    if !cli.count {
        renderer.print_days(&app.tracker.record().sorted_days());
    }
    Ok(CliModeResult::Finish)
}
