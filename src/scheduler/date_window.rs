use crate::core::models::DateEntry;
use crate::extensions::chrono::DateLabelExt;
use chrono::{Datelike, Duration, Local, NaiveDate};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// The caller's calendar day in the process's local zone.
///
/// Read from `Local` directly so the date never passes through a
/// UTC-normalized string.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct DateWindow {
    start: NaiveDate,
    days: u32,
}

impl DateWindow {
    /// Default: 7 days starting at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            start: today,
            days: DEFAULT_WINDOW_DAYS,
        }
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Ordered list of selectable dates.
    pub fn days(&self) -> Vec<NaiveDate> {
        (0..self.days)
            .map(|offset| self.start + Duration::days(offset as i64))
            .collect()
    }

    pub fn entries(&self) -> Vec<DateEntry> {
        self.days().into_iter().map(date_entry).collect()
    }
}

pub fn date_entry(date: NaiveDate) -> DateEntry {
    DateEntry {
        date,
        key: date.format("%Y-%m-%d").to_string(),
        weekday_label: date.weekday_label().to_string(),
        day_of_month: date.day(),
        month_label: date.month_label().to_string(),
    }
}

pub fn generate_date_window(days: u32, reference_today: NaiveDate) -> Vec<DateEntry> {
    DateWindow::new(reference_today).with_days(days).entries()
}
