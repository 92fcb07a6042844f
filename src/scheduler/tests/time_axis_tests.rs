use super::t;
use crate::core::types::OpeningHours;
use crate::scheduler::time_axis::{
    DEFAULT_SLOT_MINUTES, generate_slots, slot_index_starting_at, slots_for_hours,
};

#[test]
fn opening_hours_produce_thirty_two_half_hour_slots() {
    let slots = generate_slots(t("05:00"), t("21:00"), DEFAULT_SLOT_MINUTES);
    assert_eq!(slots.len(), 32);
    assert_eq!(slots[0].to_string(), "05:00 - 05:30");
    assert_eq!(slots[31].to_string(), "20:30 - 21:00");
}

#[test]
fn slots_tile_the_range_without_gaps() {
    let slots = generate_slots(t("08:00"), t("12:00"), 30);
    assert_eq!(slots.first().unwrap().start, t("08:00"));
    assert_eq!(slots.last().unwrap().end, t("12:00"));
    for pair in slots.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert!(pair[0].start < pair[1].start);
    }
    assert!(slots.iter().all(|s| s.start.add_minutes(30) == Some(s.end)));
}

#[test]
fn empty_axis_when_start_not_before_end() {
    assert!(generate_slots(t("21:00"), t("05:00"), 30).is_empty());
    assert!(generate_slots(t("09:00"), t("09:00"), 30).is_empty());
    assert!(generate_slots(t("09:00"), t("10:00"), 0).is_empty());
}

#[test]
fn no_partial_trailing_slot() {
    let slots = generate_slots(t("08:00"), t("09:45"), 30);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots.last().unwrap().end, t("09:30"));
}

#[test]
fn axis_stops_before_midnight() {
    let slots = generate_slots(t("22:00"), t("23:59"), 30);
    assert_eq!(slots.len(), 3);
    assert_eq!(slots.last().unwrap().to_string(), "23:00 - 23:30");
}

#[test]
fn malformed_hours_never_reach_the_axis() {
    assert!(OpeningHours::try_from_str("five-21:00").is_err());
    assert!(OpeningHours::try_from_str("05:00-").is_err());
    let hours = OpeningHours::try_from_str("05:00-06:00").unwrap();
    assert_eq!(slots_for_hours(&hours, 30).len(), 2);
}

#[test]
fn hours_helper_and_start_lookup() {
    let hours = OpeningHours::try_from_str("06:00-08:00").unwrap();
    let slots = slots_for_hours(&hours, 60);
    assert_eq!(slots.len(), 2);
    assert_eq!(slot_index_starting_at(&slots, t("07:00")), Some(1));
    assert_eq!(slot_index_starting_at(&slots, t("07:30")), None);
}
