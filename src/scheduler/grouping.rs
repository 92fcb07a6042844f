use crate::core::models::{GroupedReservation, Reservation};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;

type PartitionKey = (NaiveDate, u32);

/// Merge time-adjacent reservations on the same date and court.
///
/// Partitions are visited in the order their first member appears in the
/// input, and groups come out in that scan order. Sorting for display is a
/// separate step (`sort_for_display`).
pub fn group(reservations: &[Reservation]) -> Vec<GroupedReservation> {
    let mut index: HashMap<PartitionKey, usize> = HashMap::new();
    let mut partitions: Vec<Vec<Reservation>> = Vec::new();

    for r in reservations {
        let key = (r.date, r.court_number);
        let slot = *index.entry(key).or_insert_with(|| {
            partitions.push(Vec::new());
            partitions.len() - 1
        });
        partitions[slot].push(r.clone());
    }

    let mut groups = Vec::new();
    for mut members in partitions {
        // stable: equal starts keep input order
        members.sort_by_key(|r| r.start_time);

        let mut iter = members.into_iter();
        let Some(first) = iter.next() else {
            continue;
        };
        let mut open = GroupedReservation::new(first);
        for next in iter {
            if next.start_time == open.last().end_time {
                open.push(next);
            } else {
                groups.push(open);
                open = GroupedReservation::new(next);
            }
        }
        groups.push(open);
    }
    groups
}

fn display_order(a: &GroupedReservation, b: &GroupedReservation) -> Ordering {
    let (ra, rb) = (a.representative(), b.representative());
    rb.date
        .cmp(&ra.date)
        .then_with(|| a.start_time.cmp(&b.start_time))
        .then_with(|| ra.court_number.cmp(&rb.court_number))
}

/// Newest date first; earlier start, then lower court, within a date.
pub fn sort_for_display(groups: &mut [GroupedReservation]) {
    groups.sort_by(display_order);
}

/// Filter by `search`, group, and order for the booking-history screen.
pub fn history_view(reservations: &[Reservation], search: Option<&str>) -> Vec<GroupedReservation> {
    let filtered: Vec<Reservation> = reservations
        .iter()
        .filter(|r| search.is_none_or(|needle| r.matches_search(needle)))
        .cloned()
        .collect();
    let mut groups = group(&filtered);
    sort_for_display(&mut groups);
    groups
}
