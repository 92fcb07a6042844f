use crate::core::types::{Bool, OpeningHours, SlotCoverage};
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn set_value(&mut self, new_value: &str) -> Result<()>;
    fn description(&self) -> &str;
}

/// Object-safe view used by the key-driven accessors in `Config`.
pub trait EditableItem {
    fn set_from_str(&mut self, new_value: &str) -> Result<()>;
    fn display_value(&self) -> String;
    fn describe(&self) -> &str;
}

/// Parsing and rendering rules for one kind of configuration value.
pub trait ConfigValue: Sized {
    fn parse_value(raw: &str) -> Result<Self>;
    fn render(&self) -> String;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigEntry<T> {
    pub value: T,
    pub description: String,
}

impl<T> ConfigEntry<T> {
    pub fn new(value: T, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

impl<T: ConfigValue> ConfigItem<T> for ConfigEntry<T> {
    fn get_value(&self) -> &T {
        &self.value
    }
    fn set_value(&mut self, new_value: &str) -> Result<()> {
        self.value = T::parse_value(new_value)?;
        Ok(())
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl<T: ConfigValue> EditableItem for ConfigEntry<T> {
    fn set_from_str(&mut self, new_value: &str) -> Result<()> {
        self.set_value(new_value)
    }
    fn display_value(&self) -> String {
        self.value.render()
    }
    fn describe(&self) -> &str {
        &self.description
    }
}

// ---------------------------------------------------------------------------
// Value kinds
// ---------------------------------------------------------------------------

impl ConfigValue for String {
    fn parse_value(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Parse("Value cannot be empty.".into()));
        }
        Ok(trimmed.to_string())
    }
    fn render(&self) -> String {
        self.clone()
    }
}

impl ConfigValue for OpeningHours {
    fn parse_value(raw: &str) -> Result<Self> {
        OpeningHours::try_from_str(raw)
    }
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ConfigValue for SlotCoverage {
    fn parse_value(raw: &str) -> Result<Self> {
        SlotCoverage::try_from(raw)
    }
    fn render(&self) -> String {
        self.to_string()
    }
}

impl ConfigValue for Bool {
    fn parse_value(raw: &str) -> Result<Self> {
        Bool::try_from_str(raw)
    }
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Price of one slot, capped at [`SlotPrice::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SlotPrice(pub u64);

impl SlotPrice {
    pub const MAX: u64 = 1_000_000_000_000;
}

impl TryFrom<u64> for SlotPrice {
    type Error = Error;
    fn try_from(v: u64) -> Result<Self> {
        if v <= Self::MAX {
            Ok(Self(v))
        } else {
            Err(Error::Parse(format!(
                "Price {} is too large; the maximum is {}.",
                v,
                Self::MAX
            )))
        }
    }
}

impl From<SlotPrice> for u64 {
    fn from(p: SlotPrice) -> u64 {
        p.0
    }
}

/// Optional price; `-`, `none` or an empty string clear it.
impl ConfigValue for Option<SlotPrice> {
    fn parse_value(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "-" || trimmed.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        let n = trimmed
            .parse::<u64>()
            .map_err(|_| Error::Parse(format!("Invalid price: '{}'.", trimmed)))?;
        SlotPrice::try_from(n).map(Some)
    }
    fn render(&self) -> String {
        self.map(|v| v.0.to_string()).unwrap_or_else(|| "-".to_string())
    }
}

/// Comma-separated court names; `-` or an empty string clear the list.
impl ConfigValue for Vec<String> {
    fn parse_value(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed == "-" {
            return Ok(Vec::new());
        }
        Ok(trimmed
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
    fn render(&self) -> String {
        if self.is_empty() {
            "-".to_string()
        } else {
            self.join(", ")
        }
    }
}

/// Bounded positive integer (slot width, window length, court count).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Bounded<const MIN: u32, const MAX: u32>(pub u32);

impl<const MIN: u32, const MAX: u32> TryFrom<u32> for Bounded<MIN, MAX> {
    type Error = Error;
    fn try_from(v: u32) -> Result<Self> {
        if (MIN..=MAX).contains(&v) {
            Ok(Self(v))
        } else {
            Err(Error::Parse(format!(
                "Value {} is out of range; expected {}..={}.",
                v, MIN, MAX
            )))
        }
    }
}

impl<const MIN: u32, const MAX: u32> From<Bounded<MIN, MAX>> for u32 {
    fn from(b: Bounded<MIN, MAX>) -> u32 {
        b.0
    }
}

impl<const MIN: u32, const MAX: u32> ConfigValue for Bounded<MIN, MAX> {
    fn parse_value(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let n = trimmed
            .parse::<u32>()
            .map_err(|_| Error::Parse(format!("Invalid number: '{}'.", trimmed)))?;
        Self::try_from(n)
    }
    fn render(&self) -> String {
        self.0.to_string()
    }
}

pub type SlotMinutes = Bounded<5, 240>;
pub type WindowDays = Bounded<1, 60>;
pub type CourtCount = Bounded<1, 64>;

// ---------------------------------------------------------------------------
// Defaults for optional keys
// ---------------------------------------------------------------------------

pub(super) mod defaults {
    use super::*;

    pub fn stadium_id() -> ConfigEntry<String> {
        ConfigEntry::new("stadium-1".to_string(), "Identifier of the facility.")
    }
    pub fn slot_minutes() -> ConfigEntry<SlotMinutes> {
        ConfigEntry::new(Bounded(30), "Width of one bookable slot in minutes.")
    }
    pub fn price_per_slot() -> ConfigEntry<Option<SlotPrice>> {
        ConfigEntry::new(None, "Price of one slot; '-' uses the default price.")
    }
    pub fn fields() -> ConfigEntry<Vec<String>> {
        ConfigEntry::new(Vec::new(), "Comma-separated court names.")
    }
    pub fn court_count() -> ConfigEntry<CourtCount> {
        ConfigEntry::new(Bounded(1), "Number of courts when no names are given.")
    }
    pub fn sport() -> ConfigEntry<String> {
        ConfigEntry::new("badminton".to_string(), "Sport played on the courts.")
    }
    pub fn court_type() -> ConfigEntry<String> {
        ConfigEntry::new("indoor".to_string(), "Surface or court type.")
    }
    pub fn date_window_days() -> ConfigEntry<WindowDays> {
        ConfigEntry::new(Bounded(7), "Number of selectable days starting today.")
    }
    pub fn slot_coverage() -> ConfigEntry<SlotCoverage> {
        ConfigEntry::new(
            SlotCoverage::FullRange,
            "How reservations lock slots: full-range or start-slot-only.",
        )
    }
    pub fn file_logging_enabled() -> ConfigEntry<Bool> {
        ConfigEntry::new(Bool(true), "Enable writing log messages to file.")
    }
}
