use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;
use crate::extensions::string::ToDashSeparators;
use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum SessionCommand {
    #[strum(serialize = "dates", to_string = "dates")]
    Dates,
    #[strum(serialize = "date", to_string = "date")]
    Date,
    #[strum(serialize = "grid", to_string = "grid")]
    Grid,
    #[strum(serialize = "toggle", serialize = "t", to_string = "toggle")]
    Toggle,
    #[strum(serialize = "clear", to_string = "clear")]
    Clear,
    #[strum(serialize = "price", to_string = "price")]
    Price,
    #[strum(serialize = "book", to_string = "book")]
    Book,
    #[strum(serialize = "history", to_string = "history")]
    History,
    #[strum(serialize = "cancel", to_string = "cancel")]
    Cancel,
    #[strum(serialize = "config", to_string = "config")]
    Config,
    #[strum(serialize = "set", to_string = "set")]
    Set,
    #[strum(serialize = "help", serialize = "man", to_string = "help")]
    Help,
}

impl SessionCommand {
    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s).map_err(|_| {
            Error::unknown(format!(
                "'{}'. Valid commands: {}",
                s.trim(),
                valid_csv::<SessionCommand>()
            ))
        })
    }
}

// =========
// Clock
// =========

/// Local wall-clock time of day at minute precision, written "HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub NaiveTime);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum ClockFormat {
    #[strum(serialize = "%H:%M")]
    Hm,
    #[strum(serialize = "%H:%M:%S")]
    Hms,
    #[strum(serialize = "%-I:%M%p")]
    HmMeridian,
}

impl ClockTime {
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(ClockTime)
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let token = input.trim().to_ascii_uppercase();
        for f in ClockFormat::iter() {
            if let Ok(t) = NaiveTime::parse_from_str(&token, f.as_ref()) {
                return Ok(ClockTime(t.with_second(0).unwrap_or(t)));
            }
        }
        Err(Error::parse(format!(
            "Invalid time: '{}'. Expected format: HH:MM (24-hour).",
            input.trim()
        )))
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.0.hour() * 60 + self.0.minute()
    }

    /// Same-day addition; `None` once the result would reach midnight.
    pub fn add_minutes(&self, minutes: u32) -> Option<Self> {
        let total = self.minutes_since_midnight().checked_add(minutes)?;
        if total >= MINUTES_PER_DAY {
            return None;
        }
        Self::from_hm(total / 60, total % 60)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ClockFormat::Hm.as_ref()))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<ClockTime, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One bookable half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn overlaps(&self, start: ClockTime, end: ClockTime) -> bool {
        self.start < end && start < self.end
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Facility operating window; always `open < close` once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub open: ClockTime,
    pub close: ClockTime,
}

impl OpeningHours {
    pub fn try_from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (open, close) = s.split_once('-').ok_or_else(|| {
            Error::parse(format!(
                "Invalid opening hours: '{}'. Expected format: 'HH:MM-HH:MM'.",
                s
            ))
        })?;
        let open = ClockTime::try_from_str(open)?;
        let close = ClockTime::try_from_str(close)?;
        if open >= close {
            return Err(Error::parse(format!(
                "Opening time '{}' must be earlier than closing time '{}'.",
                open, close
            )));
        }
        Ok(Self { open, close })
    }
}

impl fmt::Display for OpeningHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.open, self.close)
    }
}

impl Serialize for OpeningHours {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for OpeningHours {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<OpeningHours, <D as Deserializer<'de>>::Error> {
        let s = String::deserialize(deserializer)?;
        OpeningHours::try_from_str(&s).map_err(serde::de::Error::custom)
    }
}

// =========
// Dates
// =========

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub NaiveDate);

#[derive(Copy, Clone, Debug, EnumIterDerive, AsRefStr, EnumString)]
pub enum DateFormat {
    #[strum(serialize = "%Y-%m-%d")]
    YmdDash,
    #[strum(serialize = "%d-%m-%Y")]
    DmYDash,
}

impl Date {
    pub fn usage() -> String {
        let today = Local::now().date_naive();
        let formats = DateFormat::iter()
            .map(|df| today.format(df.as_ref()).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("Supported formats: {}", formats)
    }

    pub fn try_from_str(input: &str) -> Result<Self> {
        let input = input.to_dash_separators();
        for f in DateFormat::iter() {
            if let Ok(date) = NaiveDate::parse_from_str(&input, f.as_ref()) {
                return Ok(Date(date));
            }
        }
        Err(Error::parse(format!(
            "Invalid date format: '{}'. {}",
            input,
            Self::usage()
        )))
    }

    /// The `YYYY-MM-DD` key used everywhere dates are compared or stored.
    pub fn key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// =========
// Statuses
// =========

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl ReservationStatus {
    /// Everything except `CANCELLED` occupies its slots.
    pub fn is_active(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::parse(format!(
                "Invalid reservation status: '{}'. Valid statuses: {}",
                s.trim(),
                valid_csv::<ReservationStatus>()
            ))
        })
    }
}

/// Value of one availability-grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIterDerive)]
#[strum(serialize_all = "lowercase")]
pub enum SlotStatus {
    Available,
    Locked,
    Selected,
}

impl SlotStatus {
    pub fn marker(self) -> &'static str {
        match self {
            SlotStatus::Available => ".",
            SlotStatus::Locked => "X",
            SlotStatus::Selected => "*",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    EnumString,
    Display,
    AsRefStr,
    EnumIterDerive,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SlotCoverage {
    /// Lock only the slot a reservation starts in.
    StartSlotOnly,
    /// Lock every slot between a reservation's start and end.
    #[default]
    FullRange,
}

impl SlotCoverage {
    pub fn help(&self) -> &'static str {
        match self {
            SlotCoverage::StartSlotOnly => "Lock only the slot where a reservation starts.",
            SlotCoverage::FullRange => "Lock every slot a reservation spans.",
        }
    }

    pub fn try_from(s: &str) -> Result<Self> {
        Self::from_str(s.trim()).map_err(|_| {
            Error::parse(format!(
                "Invalid slot coverage: '{}'. Allowed values: {}",
                s.trim(),
                valid_csv::<SlotCoverage>()
            ))
        })
    }
}

// =========
// Bool
// =========

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive)]
pub enum BoolFormat {
    #[strum(serialize = "true", serialize = "True", to_string = "True")]
    TextTrue,

    #[strum(serialize = "false", serialize = "False", to_string = "False")]
    TextFalse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bool(pub bool);

impl Bool {
    pub fn try_from_str(s: &str) -> Result<Self> {
        match BoolFormat::from_str(s.trim()) {
            Ok(fmt) => Ok(Bool(matches!(fmt, BoolFormat::TextTrue))),
            Err(_) => Err(Error::parse(format!(
                "Invalid string value for boolean: '{}'. Valid values: {}",
                s,
                valid_csv::<BoolFormat>()
            ))),
        }
    }
}

impl fmt::Display for Bool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Bool {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<<S as Serializer>::Ok, <S as Serializer>::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bool {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Bool, <D as Deserializer<'de>>::Error> {
        let b = String::deserialize(deserializer)?;
        Bool::try_from_str(&b).map_err(serde::de::Error::custom)
    }
}
