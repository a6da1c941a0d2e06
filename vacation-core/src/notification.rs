use serde::Deserialize;
use strum_macros::{AsRefStr, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum VacationAction {
    Added,
    Removed,
}

/// The short-lived message shown after vacation days were added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub action: VacationAction,
    pub count: usize,
}

/// Texts and timing used to display a [`Notification`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NotificationLabels {
    /// Unit after the count, e.g. `Urlaubstag(e)`.
    pub unit: String,
    pub added: String,
    pub removed: String,
    /// Label of the dismiss action.
    pub action: String,
}

impl Default for NotificationLabels {
    fn default() -> Self {
        Self {
            unit: "Urlaubstag(e)".to_string(),
            added: "wurden hinzugefügt".to_string(),
            removed: "wurden entfernt".to_string(),
            action: "OK".to_string(),
        }
    }
}

impl Notification {
    pub fn added(count: usize) -> Self {
        Self {
            action: VacationAction::Added,
            count,
        }
    }

    pub fn removed(count: usize) -> Self {
        Self {
            action: VacationAction::Removed,
            count,
        }
    }

    /// `3 Urlaubstag(e) wurden hinzugefügt`
    pub fn message(&self, labels: &NotificationLabels) -> String {
        let verb = match self.action {
            VacationAction::Added => &labels.added,
            VacationAction::Removed => &labels.removed,
        };
        format!("{} {} {}", self.count, labels.unit, verb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages() {
        let labels = NotificationLabels::default();
        assert_eq!(
            Notification::added(3).message(&labels),
            "3 Urlaubstag(e) wurden hinzugefügt"
        );
        assert_eq!(
            Notification::removed(0).message(&labels),
            "0 Urlaubstag(e) wurden entfernt"
        );
    }

    #[test]
    fn custom_labels() {
        let labels = NotificationLabels {
            unit: "day(s)".to_string(),
            added: "added".to_string(),
            removed: "removed".to_string(),
            ..Default::default()
        };
        assert_eq!(Notification::removed(2).message(&labels), "2 day(s) removed");
        assert_eq!(labels.action, "OK");
    }

    #[test]
    fn labels_are_texts_only() {
        let labels = NotificationLabels {
            unit: "Tag(e)".to_string(),
            added: "gebucht".to_string(),
            removed: "storniert".to_string(),
            action: "Schließen".to_string(),
        };
        assert_eq!(Notification::added(1).message(&labels), "1 Tag(e) gebucht");
    }

    #[test]
    fn action_names() {
        assert_eq!(VacationAction::Added.as_ref(), "added");
        assert_eq!(VacationAction::Removed.to_string(), "removed");
    }
}
