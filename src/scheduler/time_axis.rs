use crate::core::types::{ClockTime, OpeningHours, TimeSlot};

pub const DEFAULT_SLOT_MINUTES: u32 = 30;

/// Tile `[start, end)` with `step_minutes`-wide slots.
///
/// Returns an empty axis when `start >= end` or the step is zero. A step that
/// would overshoot `end` is not emitted, so there is never a partial trailing
/// slot.
pub fn generate_slots(start: ClockTime, end: ClockTime, step_minutes: u32) -> Vec<TimeSlot> {
    if step_minutes == 0 || start >= end {
        return Vec::new();
    }

    let mut slots = Vec::new();
    let mut clock = start;
    while let Some(next) = clock.add_minutes(step_minutes) {
        if next > end {
            break;
        }
        slots.push(TimeSlot::new(clock, next));
        clock = next;
    }
    slots
}

pub fn slots_for_hours(hours: &OpeningHours, step_minutes: u32) -> Vec<TimeSlot> {
    generate_slots(hours.open, hours.close, step_minutes)
}

/// Index of the slot that begins exactly at `start`.
pub fn slot_index_starting_at(slots: &[TimeSlot], start: ClockTime) -> Option<usize> {
    slots.iter().position(|s| s.start == start)
}
