use once_cell::sync::Lazy;
use strum::IntoEnumIterator;

use crate::core::types::SessionCommand;
use crate::errors::Result;

#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub command: SessionCommand,
    pub usage: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

impl HelpEntry {
    pub fn render(&self) -> String {
        let mut out = format!("USAGE\n  {}\n\nSUMMARY\n  {}\n", self.usage, self.summary);
        if !self.details.is_empty() {
            out.push_str("\nDETAILS\n");
            for line in self.details {
                out.push_str("  ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.trim_end().to_string()
    }
}

fn entry(command: SessionCommand) -> HelpEntry {
    let (usage, summary, details): (&str, &str, &[&str]) = match command {
        SessionCommand::Dates => ("dates", "List the bookable dates.", &[]),
        SessionCommand::Date => (
            "date <n|YYYY-MM-DD>",
            "Select a date by its number in `dates` or by its key.",
            &["Changing the date drops every selected slot."],
        ),
        SessionCommand::Grid => (
            "grid",
            "Show the availability grid for the selected date.",
            &["'.' available, 'X' booked, '*' selected."],
        ),
        SessionCommand::Toggle => (
            "toggle <slot> <court>",
            "Select or unselect one slot on one court.",
            &[
                "Slot and court are the numbers shown in `grid`.",
                "Booked slots cannot be selected.",
            ],
        ),
        SessionCommand::Clear => ("clear", "Drop every selected slot.", &[]),
        SessionCommand::Price => (
            "price [participants]",
            "Show the total for the selected slots.",
            &["With participants, also show each person's share, rounded up."],
        ),
        SessionCommand::Book => (
            "book",
            "Reserve every selected slot.",
            &[
                "Each slot is booked on its own; some may fail while others succeed.",
                "Failed slots stay selected so they can be retried.",
            ],
        ),
        SessionCommand::History => (
            "history [search]",
            "List your reservations, merging back-to-back slots.",
            &["The search matches sport, court type, status or date."],
        ),
        SessionCommand::Cancel => ("cancel <id>", "Cancel one reservation by id.", &[]),
        SessionCommand::Config => ("config", "Show the facility configuration.", &[]),
        SessionCommand::Set => (
            "set <KEY> <VALUE>",
            "Change one configuration value and rebuild the grid.",
            &["Keys are listed by `config`."],
        ),
        SessionCommand::Help => ("help [command]", "Show this help.", &[]),
    };
    HelpEntry {
        command,
        usage,
        summary,
        details,
    }
}

pub static HELP: Lazy<Vec<HelpEntry>> = Lazy::new(|| SessionCommand::iter().map(entry).collect());

pub fn usage_for(command: SessionCommand) -> &'static str {
    HELP.iter()
        .find(|e| e.command == command)
        .map(|e| e.usage)
        .unwrap_or("help")
}

/// Overview of every command, or the full entry for one.
pub fn render_help(topic: Option<&str>) -> Result<String> {
    match topic {
        Some(name) => {
            let command = SessionCommand::try_from(name)?;
            Ok(HELP
                .iter()
                .find(|e| e.command == command)
                .map(HelpEntry::render)
                .unwrap_or_default())
        }
        None => {
            let width = HELP.iter().map(|e| e.usage.len()).max().unwrap_or(0);
            let mut out = String::from("COMMANDS\n");
            for e in HELP.iter() {
                out.push_str(&format!("  {:<width$}  {}\n", e.usage, e.summary));
            }
            out.push_str(&format!("  {:<width$}  {}", "exit", "Leave the session."));
            Ok(out)
        }
    }
}
