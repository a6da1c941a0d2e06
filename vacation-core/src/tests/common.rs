use crate::{Config, config::RecordConfig, notification::NotificationLabels};
use chrono::{Local, NaiveDate};

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(reference_date: Option<NaiveDate>) -> Config {
    Config {
        input_date_formats: ["%d/%m/%Y".to_string()].to_vec(),
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
        highlight_days: vec![1, 20],
        record: RecordConfig::default(),
        notifications: NotificationLabels::default(),
    }
}
