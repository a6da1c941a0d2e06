use super::theme::OneDark;
use termimad::{MadSkin, crossterm::style::Stylize};
use vacation_core::{
    MarkedDay, Notification, NotificationLabels, VacationRecord, calendar::VACATION_DAY_CLASS,
};

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
    pub labels: NotificationLabels,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or_else(|| RenderOptions {
                use_color: true,
                labels: NotificationLabels::default(),
            }),
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        let md = format!("|-|\n| {message} |\n|-|\n");
        if self.opts.use_color {
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    /// The snackbar equivalent: `3 Urlaubstag(e) wurden hinzugefügt [OK]`.
    pub fn print_notification(&self, notification: &Notification) {
        let message = notification.message(&self.opts.labels);
        if self.opts.use_color {
            let action = format!("[{}]", self.opts.labels.action);
            println!("{} {}", message.with(OneDark::YELLOW), action.with(OneDark::BLUE));
        } else {
            println!("{message} [{}]", self.opts.labels.action);
        }
    }

    pub fn print_record(&self, record: &VacationRecord) {
        self.print_md(&format!(
            "# {}\n*{}* - **#{}**\n",
            record.name, record.workplace, record.employee_number
        ));
    }

    pub fn print_days(&self, days: &[&str]) {
        for day in days {
            if self.opts.use_color {
                println!("{}", day.with(OneDark::GREEN));
            } else {
                println!("{day}");
            }
        }
    }

    pub fn print_marked_days(&self, days: &[MarkedDay]) {
        for day in days {
            if !self.opts.use_color {
                println!("{} {}", day.key, day.class);
                continue;
            }
            let color = if day.class == VACATION_DAY_CLASS {
                OneDark::GREEN
            } else {
                OneDark::PURPLE
            };
            println!("{} {}", day.key.as_str().with(color), day.class.with(OneDark::COMMENT));
        }
    }
}
