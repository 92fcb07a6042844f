pub mod models;

use std::fs;
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigEntry, ConfigItem, CourtCount, EditableItem, SlotMinutes, SlotPrice, WindowDays,
    defaults,
};
use crate::core::models::{Court, FacilityProfile};
use crate::core::types::{Bool, OpeningHours, SlotCoverage};
use crate::errors::{Error, Result, require_config_item};
use crate::extensions::enums::valid_csv;
use crate::scheduler::pricing::price_or_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(ascii_case_insensitive, serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    StadiumId,
    OpeningHours,
    SlotMinutes,
    PricePerSlot,
    Fields,
    CourtCount,
    Sport,
    CourtType,
    DateWindowDays,
    SlotCoverage,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default = "defaults::stadium_id")]
    pub stadium_id: ConfigEntry<String>,
    pub opening_hours: ConfigEntry<OpeningHours>,
    #[serde(default = "defaults::slot_minutes")]
    pub slot_minutes: ConfigEntry<SlotMinutes>,
    #[serde(default = "defaults::price_per_slot")]
    pub price_per_slot: ConfigEntry<Option<SlotPrice>>,
    #[serde(default = "defaults::fields")]
    pub fields: ConfigEntry<Vec<String>>,
    #[serde(default = "defaults::court_count")]
    pub court_count: ConfigEntry<CourtCount>,
    #[serde(default = "defaults::sport")]
    pub sport: ConfigEntry<String>,
    #[serde(default = "defaults::court_type")]
    pub court_type: ConfigEntry<String>,
    #[serde(default = "defaults::date_window_days")]
    pub date_window_days: ConfigEntry<WindowDays>,
    #[serde(default = "defaults::slot_coverage")]
    pub slot_coverage: ConfigEntry<SlotCoverage>,
    #[serde(default = "defaults::file_logging_enabled")]
    pub file_logging_enabled: ConfigEntry<Bool>,
}

impl ConfigFile {
    fn item(&self, key: ConfigKey) -> &dyn EditableItem {
        match key {
            ConfigKey::StadiumId => &self.stadium_id,
            ConfigKey::OpeningHours => &self.opening_hours,
            ConfigKey::SlotMinutes => &self.slot_minutes,
            ConfigKey::PricePerSlot => &self.price_per_slot,
            ConfigKey::Fields => &self.fields,
            ConfigKey::CourtCount => &self.court_count,
            ConfigKey::Sport => &self.sport,
            ConfigKey::CourtType => &self.court_type,
            ConfigKey::DateWindowDays => &self.date_window_days,
            ConfigKey::SlotCoverage => &self.slot_coverage,
            ConfigKey::FileLoggingEnabled => &self.file_logging_enabled,
        }
    }

    fn item_mut(&mut self, key: ConfigKey) -> &mut dyn EditableItem {
        match key {
            ConfigKey::StadiumId => &mut self.stadium_id,
            ConfigKey::OpeningHours => &mut self.opening_hours,
            ConfigKey::SlotMinutes => &mut self.slot_minutes,
            ConfigKey::PricePerSlot => &mut self.price_per_slot,
            ConfigKey::Fields => &mut self.fields,
            ConfigKey::CourtCount => &mut self.court_count,
            ConfigKey::Sport => &mut self.sport,
            ConfigKey::CourtType => &mut self.court_type,
            ConfigKey::DateWindowDays => &mut self.date_window_days,
            ConfigKey::SlotCoverage => &mut self.slot_coverage,
            ConfigKey::FileLoggingEnabled => &mut self.file_logging_enabled,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    pub last_change: Option<(String, String, String)>,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}
impl Index<usize> for ConfigRows {
    type Output = (String, String, String);
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let invalid = |e: serde_json::Error| {
            Error::config(format!("Invalid JSON in '{}': {}", path.display(), e))
        };
        let raw: serde_json::Value = serde_json::from_str(&text).map_err(invalid)?;
        require_config_item(raw.get("opening_hours"), "OPENING_HOURS")?;
        let data: ConfigFile = serde_json::from_value(raw).map_err(invalid)?;
        Ok(Self {
            path,
            data,
            last_change: None,
        })
    }

    pub fn view(&self) -> &ConfigFile {
        &self.data
    }

    pub fn stadium_id(&self) -> &str {
        self.data.stadium_id.get_value()
    }
    pub fn opening_hours(&self) -> &OpeningHours {
        self.data.opening_hours.get_value()
    }
    pub fn slot_minutes(&self) -> u32 {
        self.data.slot_minutes.get_value().0
    }
    pub fn price_per_slot(&self) -> Option<u64> {
        self.data.price_per_slot.get_value().map(u64::from)
    }
    pub fn date_window_days(&self) -> u32 {
        self.data.date_window_days.get_value().0
    }
    pub fn slot_coverage(&self) -> SlotCoverage {
        *self.data.slot_coverage.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    /// Court list resolved once: named fields if present, else synthesized.
    pub fn courts(&self) -> Vec<Court> {
        Court::normalize(
            self.data.fields.get_value(),
            self.data.court_count.get_value().0,
        )
    }

    pub fn facility(&self) -> FacilityProfile {
        FacilityProfile {
            stadium_id: self.stadium_id().to_string(),
            hours: *self.opening_hours(),
            slot_minutes: self.slot_minutes(),
            price_per_slot: price_or_default(self.price_per_slot()),
            courts: self.courts(),
            sport: self.data.sport.get_value().clone(),
            court_type: self.data.court_type.get_value().clone(),
        }
    }

    pub fn rows(&self) -> ConfigRows {
        let rows = ConfigKey::iter()
            .map(|key| {
                let item = self.data.item(key);
                (
                    key.to_string(),
                    item.describe().to_string(),
                    item.display_value(),
                )
            })
            .collect();
        ConfigRows(rows)
    }

    pub fn set_key(&mut self, key: ConfigKey, new_value: &str) -> Result<()> {
        let old = self.data.item(key).display_value();
        self.edit(|cfg| cfg.item_mut(key).set_from_str(new_value))?;
        let new_val = self.data.item(key).display_value();
        // stash for caller to log
        self.last_change = Some((key.to_string(), old, new_val));
        Ok(())
    }

    pub fn take_last_change(&mut self) -> Option<(String, String, String)> {
        self.last_change.take()
    }

    pub fn set(&mut self, key_str: &str, new_value: &str) -> Result<()> {
        let key = Self::parse_key(key_str)?;
        self.set_key(key, new_value)
    }

    fn parse_key(key_str: &str) -> Result<ConfigKey> {
        ConfigKey::from_str(key_str.trim()).map_err(|_| {
            Error::config(format!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key_str.trim(),
                valid_csv::<ConfigKey>()
            ))
        })
    }

    /// Apply the edit to a copy and persist it; the in-memory config only
    /// changes when both the edit and the write succeed.
    fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut ConfigFile) -> Result<()>,
    {
        let mut draft = self.data.clone();
        f(&mut draft)?;
        Self::save(&self.path, &draft)?;
        self.data = draft;
        Ok(())
    }

    fn save(path: &Path, data: &ConfigFile) -> Result<()> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| Error::config(format!("Failed to encode config: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| Error::config(format!("Failed to write {}: {}", path.display(), e)))
    }
}
