mod cli_modes;
mod render;

use anyhow::Result;
use clap::{ArgGroup, Parser};
use cli_modes::{CliModeResult, check_mode, list_mode, month_mode, update_mode};
use flexi_logger::Logger;
use render::{ColorMode, RenderOptions, Renderer};
use std::path::PathBuf;
use std::process::ExitCode;
use vacation_core::{Config, DateRange, VacationApp};

const DEFAULT_LOG_LEVEL: &str = "warn";

/// vacation: mark vacation days over date ranges
///
/// The vacation days come from the config file and live only for this run.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("range").args(["on", "from"])),
    group(ArgGroup::new("action").args(["add", "remove", "check", "month"])),
)]
pub struct Cli {
    /// Selects a single day or a keyword range (e.g., `--on tomorrow`, `--on "next week"`)
    #[arg(long)]
    pub on: Option<String>,
    /// Start of the selected range (e.g., `--from 2024-12-01`, `--from monday`)
    #[arg(long, conflicts_with = "on")]
    pub from: Option<String>,
    /// End of the selected range, inclusive. Defaults to the end of `--from`.
    #[arg(long, conflicts_with = "on", requires = "from")]
    pub to: Option<String>,

    /// Marks the selected range as vacation.
    #[arg(long, short, requires = "range")]
    pub add: bool,
    /// Removes vacation days in the selected range.
    #[arg(long, short, requires = "range")]
    pub remove: bool,
    /// Checks whether the selected range contains vacation days.
    #[arg(long, short, requires = "range")]
    pub check: bool,
    /// Prints the vacation days, restricted to the selected range if any.
    #[arg(long, short)]
    pub list: bool,
    /// Prints the marked days of a month, YYYY-MM (vacation and highlighted days).
    #[arg(long, short, conflicts_with = "range")]
    pub month: Option<String>,
    /// Prints only counts.
    #[arg(long)]
    pub count: bool,

    /// Reads this config file instead of the default locations.
    #[arg(long, env = "VACATION_CONFIG")]
    pub config: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log specification (e.g. `debug`), overrides `RUST_LOG`. Logs go to stderr.
    #[arg(long)]
    pub log_level: Option<String>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("vacation: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let logger = match &cli.log_level {
        Some(spec) => Logger::try_with_str(spec)?,
        None => Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?,
    };
    let _logger = logger.start()?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let mut app = VacationApp::with_config(config)?;

    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
        labels: app.config.notifications.clone(),
    }));

    let range = selected_range(&cli, &app)?;
    log::debug!("selected range: {range:?}");

    if let CliModeResult::Finish = update_mode(&cli, &renderer, &mut app, range)? {
        return Ok(());
    }
    if let CliModeResult::Finish = check_mode(&cli, &renderer, &mut app, range)? {
        return Ok(());
    }
    if let CliModeResult::Finish = month_mode(&cli, &renderer, &app)? {
        return Ok(());
    }
    if let CliModeResult::Finish = list_mode(&cli, &renderer, &app, range)? {
        return Ok(());
    }

    // Nothing asked for: show who is tracked and how many days are booked.
    let record = app.tracker.record();
    renderer.print_record(record);
    renderer.print_info(&format!("{} vacation days booked.", record.len()));
    Ok(())
}

fn selected_range(cli: &Cli, app: &VacationApp) -> Result<Option<DateRange>> {
    match (cli.on.as_deref(), cli.from.as_deref(), cli.to.as_deref()) {
        (Some(on), _, _) => app.parse_dates(on, None).map(Some),
        (None, Some(from), to) => app.parse_dates(from, to).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn about_text() {
        let about = Cli::command().get_about().map(|a| a.to_string());
        assert_eq!(about.as_deref(), Some("vacation: mark vacation days over date ranges"));
    }

    #[test]
    fn add_with_range() {
        let cli = Cli::try_parse_from(["vacation", "--from", "2024-12-01", "--to", "2024-12-03", "--add"])
            .unwrap();
        assert!(cli.add);
        assert_eq!(cli.from.as_deref(), Some("2024-12-01"));
        assert_eq!(cli.to.as_deref(), Some("2024-12-03"));
    }

    #[test]
    fn actions_need_a_range() {
        assert!(Cli::try_parse_from(["vacation", "--add"]).is_err());
        assert!(Cli::try_parse_from(["vacation", "--check"]).is_err());
        assert!(Cli::try_parse_from(["vacation", "--on", "today", "--remove"]).is_ok());
    }

    #[test]
    fn actions_are_exclusive() {
        assert!(Cli::try_parse_from(["vacation", "--on", "today", "--add", "--remove"]).is_err());
        assert!(Cli::try_parse_from(["vacation", "--month", "2024-12", "--add"]).is_err());
    }

    #[test]
    fn to_requires_from_and_on_excludes_from() {
        assert!(Cli::try_parse_from(["vacation", "--to", "2024-12-03", "--list"]).is_err());
        assert!(Cli::try_parse_from(["vacation", "--on", "today", "--from", "today"]).is_err());
    }

    #[test]
    fn list_works_with_or_without_range() {
        assert!(Cli::try_parse_from(["vacation", "--list"]).is_ok());
        assert!(Cli::try_parse_from(["vacation", "--list", "--on", "this month", "--count"]).is_ok());
    }
}
