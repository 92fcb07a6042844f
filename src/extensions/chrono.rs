use chrono::{Datelike, NaiveDate, Weekday};

pub trait WeekdayExt {
    /// Three-letter label used by the date selector ("Mon", "Tue", ...).
    fn short_label(self) -> &'static str;
}

impl WeekdayExt for Weekday {
    fn short_label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }
}

pub trait DateLabelExt {
    fn weekday_label(&self) -> &'static str;
    fn month_label(&self) -> &'static str;
}

impl DateLabelExt for NaiveDate {
    fn weekday_label(&self) -> &'static str {
        self.weekday().short_label()
    }

    fn month_label(&self) -> &'static str {
        const MONTHS: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        MONTHS[self.month0() as usize]
    }
}
