use crate::core::types::{ClockTime, OpeningHours, ReservationStatus, TimeSlot};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

pub trait BaseEntity {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

// =====
// Court
// =====

/// One grid column. `court_number` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub court_number: u32,
    pub name: String,
}

impl Court {
    pub fn new(court_number: u32, name: impl Into<String>) -> Self {
        Self {
            court_number,
            name: name.into(),
        }
    }

    /// Resolve the column list once: explicit field names win, otherwise
    /// `count` placeholder courts are synthesized.
    pub fn normalize(fields: &[String], count: u32) -> Vec<Court> {
        if fields.is_empty() {
            return (1..=count)
                .map(|n| Court::new(n, format!("Court {n}")))
                .collect();
        }
        fields
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let number = idx as u32 + 1;
                let name = name.trim();
                if name.is_empty() {
                    Court::new(number, format!("Court {number}"))
                } else {
                    Court::new(number, name)
                }
            })
            .collect()
    }
}

/// Everything the grid needs to know about one stadium, resolved from
/// configuration before any scheduling runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityProfile {
    pub stadium_id: String,
    pub hours: OpeningHours,
    pub slot_minutes: u32,
    pub price_per_slot: u64,
    pub courts: Vec<Court>,
    pub sport: String,
    pub court_type: String,
}

// ===========
// Reservation
// ===========

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i32,
    pub stadium_id: String,
    pub court_number: u32,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub status: ReservationStatus,
    #[serde(default)]
    pub sport: String,
    #[serde(default)]
    pub court_type: String,
    #[serde(default)]
    pub total_price: u64,
    #[serde(default)]
    pub user_id: String,
    pub created_at: NaiveDateTime,
}

impl Reservation {
    pub fn from_request(
        request: &BookingRequest,
        user_id: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: 1,
            stadium_id: request.stadium_id.clone(),
            court_number: request.court_number,
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            status: request.status,
            sport: request.sport.clone(),
            court_type: request.court_type.clone(),
            total_price: request.total_price,
            user_id: user_id.into(),
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }

    /// Case-insensitive match over the fields the history view searches.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            self.sport.as_str(),
            self.court_type.as_str(),
            self.status.as_ref(),
            &self.date.format("%Y-%m-%d").to_string(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl BaseEntity for Reservation {
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation(id={}, court={}, date={}, time={}, status={})",
            self.id,
            self.court_number,
            self.date.format("%Y-%m-%d"),
            self.slot(),
            self.status
        )
    }
}

/// Payload for one per-cell creation call to the booking gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub stadium_id: String,
    pub court_number: u32,
    pub sport: String,
    pub court_type: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub total_price: u64,
    pub status: ReservationStatus,
}

impl BookingRequest {
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

// =========
// Date window
// =========

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateEntry {
    pub date: NaiveDate,
    pub key: String,
    pub weekday_label: String,
    pub day_of_month: u32,
    pub month_label: String,
}

impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.weekday_label, self.day_of_month, self.month_label
        )
    }
}

// =========
// History
// =========

/// Time-contiguous run of reservations on one court and date.
///
/// Always holds at least one reservation: it is only built from a first
/// member and only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedReservation {
    pub(crate) reservations: Vec<Reservation>,
    pub(crate) start_time: ClockTime,
    pub(crate) end_time: ClockTime,
}

impl GroupedReservation {
    pub fn new(first: Reservation) -> Self {
        Self {
            start_time: first.start_time,
            end_time: first.end_time,
            reservations: vec![first],
        }
    }

    /// The first member; carries the group's date, court, sport and status.
    pub fn representative(&self) -> &Reservation {
        &self.reservations[0]
    }

    pub fn last(&self) -> &Reservation {
        &self.reservations[self.reservations.len() - 1]
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn push(&mut self, next: Reservation) {
        self.end_time = next.end_time;
        self.reservations.push(next);
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn total_price(&self) -> u64 {
        self.reservations
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.total_price))
    }

    pub fn span(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

/// Address of one grid cell: `row` indexes slots, `col` indexes courts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}
