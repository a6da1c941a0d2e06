mod check_mode;
mod list_mode;
mod month_mode;
mod update_mode;

pub use check_mode::check_mode;
pub use list_mode::list_mode;
pub use month_mode::month_mode;
pub use update_mode::update_mode;

/// Whether a mode handled the invocation or the next one should be tried.
pub enum CliModeResult {
    Finish,
    NothingToDo,
}
