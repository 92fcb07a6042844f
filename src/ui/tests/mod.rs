
use crate::core::models::{Court, FacilityProfile};
use crate::core::types::{OpeningHours, SlotCoverage};
use crate::logging::Logger;
use crate::scheduler::{BookingSession, LoggerObserver};
use crate::ui::width_util::WidthUtil;
use chrono::NaiveDate;

pub(super) fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 30).unwrap()
}

/// Two courts open 08:00-10:00 in half-hour slots.
pub(super) fn small_session() -> BookingSession {
    let facility = FacilityProfile {
        stadium_id: "arena".to_string(),
        hours: OpeningHours::try_from_str("08:00-10:00").unwrap(),
        slot_minutes: 30,
        price_per_slot: 100_000,
        courts: vec![Court::new(1, "Center"), Court::new(2, "North")],
        sport: "tennis".to_string(),
        court_type: "clay".to_string(),
    };
    BookingSession::new(
        facility,
        SlotCoverage::FullRange,
        3,
        sample_date(),
        Box::new(LoggerObserver::new(Logger::console_only())),
    )
}

pub(super) fn plain(bytes: Vec<u8>) -> String {
    WidthUtil::strip_ansi(&String::from_utf8(bytes).unwrap())
}
