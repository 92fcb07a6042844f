mod grid_tests;
mod time_axis_tests;

use crate::core::models::{Court, FacilityProfile, Reservation};
use crate::core::types::{ClockTime, OpeningHours, ReservationStatus};
use chrono::{NaiveDate, NaiveDateTime};

pub(super) fn t(s: &str) -> ClockTime {
    ClockTime::try_from_str(s).unwrap()
}

pub(super) fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 30).unwrap()
}

fn created_at() -> NaiveDateTime {
    sample_date().and_hms_opt(7, 0, 0).unwrap()
}

/// 05:00-21:00 in 30-minute slots over `courts` numbered courts.
pub(super) fn make_facility(courts: u32) -> FacilityProfile {
    FacilityProfile {
        stadium_id: "arena".to_string(),
        hours: OpeningHours::try_from_str("05:00-21:00").unwrap(),
        slot_minutes: 30,
        price_per_slot: 100_000,
        courts: Court::normalize(&[], courts),
        sport: "badminton".to_string(),
        court_type: "indoor".to_string(),
    }
}

pub(super) fn make_reservation(
    id: i32,
    court_number: u32,
    date: NaiveDate,
    start: &str,
    end: &str,
    status: ReservationStatus,
) -> Reservation {
    Reservation {
        id,
        stadium_id: "arena".to_string(),
        court_number,
        date,
        start_time: t(start),
        end_time: t(end),
        status,
        sport: "badminton".to_string(),
        court_type: "indoor".to_string(),
        total_price: 100_000,
        user_id: "u-1".to_string(),
        created_at: created_at(),
    }
}
