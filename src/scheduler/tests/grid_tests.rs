use super::{make_facility, make_reservation, sample_date};
use crate::core::models::{CellRef, Court};
use crate::core::types::{ReservationStatus, SlotCoverage, SlotStatus, TimeSlot};
use crate::scheduler::grid::{AvailabilityGrid, build_grid, covered_rows, toggle};
use crate::scheduler::time_axis::slots_for_hours;

fn axes(courts: u32) -> (Vec<TimeSlot>, Vec<Court>) {
    let facility = make_facility(courts);
    (
        slots_for_hours(&facility.hours, facility.slot_minutes),
        facility.courts,
    )
}

#[test]
fn grid_has_one_cell_per_slot_and_court() {
    let (slots, courts) = axes(3);
    let grid = build_grid(&slots, &courts, &[], SlotCoverage::FullRange);
    assert_eq!(grid.rows(), 32);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.count(SlotStatus::Available), 96);
    for row in 0..grid.rows() {
        assert_eq!(grid.row(row).unwrap().len(), 3);
    }
}

#[test]
fn active_reservation_locks_its_start_slot() {
    let (slots, courts) = axes(2);
    let reservations = vec![make_reservation(
        1,
        2,
        sample_date(),
        "08:00",
        "08:30",
        ReservationStatus::Confirmed,
    )];
    let grid = build_grid(&slots, &courts, &reservations, SlotCoverage::FullRange);
    // 08:00 is the seventh slot after 05:00
    assert_eq!(grid.get(6, 1), Some(SlotStatus::Locked));
    assert_eq!(grid.get(6, 0), Some(SlotStatus::Available));
    assert_eq!(grid.count(SlotStatus::Locked), 1);
}

#[test]
fn cancelled_reservation_leaves_slot_available() {
    let (slots, courts) = axes(2);
    let reservations = vec![make_reservation(
        1,
        1,
        sample_date(),
        "08:00",
        "09:00",
        ReservationStatus::Cancelled,
    )];
    let grid = build_grid(&slots, &courts, &reservations, SlotCoverage::FullRange);
    assert_eq!(grid.count(SlotStatus::Locked), 0);
}

#[test]
fn pending_and_completed_reservations_also_lock() {
    let (slots, courts) = axes(1);
    let reservations = vec![
        make_reservation(1, 1, sample_date(), "05:00", "05:30", ReservationStatus::Pending),
        make_reservation(2, 1, sample_date(), "06:00", "06:30", ReservationStatus::Completed),
    ];
    let grid = build_grid(&slots, &courts, &reservations, SlotCoverage::FullRange);
    assert_eq!(grid.get(0, 0), Some(SlotStatus::Locked));
    assert_eq!(grid.get(2, 0), Some(SlotStatus::Locked));
}

#[test]
fn unaligned_start_is_not_represented() {
    let (slots, courts) = axes(1);
    let reservations = vec![make_reservation(
        1,
        1,
        sample_date(),
        "08:15",
        "09:15",
        ReservationStatus::Confirmed,
    )];
    let grid = build_grid(&slots, &courts, &reservations, SlotCoverage::FullRange);
    assert_eq!(grid.count(SlotStatus::Locked), 0);
}

#[test]
fn coverage_mode_decides_how_many_slots_a_long_booking_locks() {
    let (slots, courts) = axes(1);
    let long = make_reservation(
        1,
        1,
        sample_date(),
        "08:00",
        "09:30",
        ReservationStatus::Confirmed,
    );

    assert_eq!(covered_rows(&slots, &long, SlotCoverage::StartSlotOnly), vec![6]);
    assert_eq!(covered_rows(&slots, &long, SlotCoverage::FullRange), vec![6, 7, 8]);

    let start_only = build_grid(&slots, &courts, &[long.clone()], SlotCoverage::StartSlotOnly);
    assert_eq!(start_only.count(SlotStatus::Locked), 1);
    let full = build_grid(&slots, &courts, &[long], SlotCoverage::FullRange);
    assert_eq!(full.count(SlotStatus::Locked), 3);
    assert_eq!(full.get(9, 0), Some(SlotStatus::Available));
}

#[test]
fn full_range_locks_a_partially_covered_trailing_slot() {
    let (slots, _) = axes(1);
    let r = make_reservation(
        1,
        1,
        sample_date(),
        "08:00",
        "08:45",
        ReservationStatus::Confirmed,
    );
    assert_eq!(covered_rows(&slots, &r, SlotCoverage::FullRange), vec![6, 7]);
}

#[test]
fn short_booking_on_a_wider_axis_still_locks_its_start_slot() {
    let facility = make_facility(1);
    let slots = slots_for_hours(&facility.hours, 60);
    let r = make_reservation(
        1,
        1,
        sample_date(),
        "08:00",
        "08:30",
        ReservationStatus::Confirmed,
    );

    assert_eq!(covered_rows(&slots, &r, SlotCoverage::StartSlotOnly), vec![3]);
    assert_eq!(covered_rows(&slots, &r, SlotCoverage::FullRange), vec![3]);

    let grid = build_grid(&slots, &facility.courts, &[r], SlotCoverage::FullRange);
    assert_eq!(grid.get(3, 0), Some(SlotStatus::Locked));
    assert_eq!(grid.count(SlotStatus::Locked), 1);
}

#[test]
fn full_range_never_locks_fewer_cells_than_start_slot_only() {
    let (slots, courts) = axes(1);
    let spans = [
        ("08:00", "08:30"),
        ("08:00", "08:10"),
        ("08:00", "10:00"),
        ("20:30", "22:00"),
    ];
    for (start, end) in spans {
        let r = make_reservation(1, 1, sample_date(), start, end, ReservationStatus::Confirmed);
        let start_only =
            build_grid(&slots, &courts, &[r.clone()], SlotCoverage::StartSlotOnly);
        let full = build_grid(&slots, &courts, &[r], SlotCoverage::FullRange);
        assert!(
            full.count(SlotStatus::Locked) >= start_only.count(SlotStatus::Locked),
            "{start}-{end}"
        );
        assert_eq!(start_only.count(SlotStatus::Locked), 1, "{start}-{end}");
    }
}

#[test]
fn reservation_for_unknown_court_is_skipped() {
    let (slots, courts) = axes(2);
    let reservations = vec![
        make_reservation(1, 3, sample_date(), "08:00", "08:30", ReservationStatus::Confirmed),
        make_reservation(2, 0, sample_date(), "08:00", "08:30", ReservationStatus::Confirmed),
    ];
    let grid = build_grid(&slots, &courts, &reservations, SlotCoverage::FullRange);
    assert_eq!(grid.count(SlotStatus::Locked), 0);
    assert_eq!(grid.cols(), 2);
}

#[test]
fn toggle_twice_restores_the_grid() {
    let grid = AvailabilityGrid::all_available(4, 2);
    let once = toggle(&grid, 1, 1);
    assert_eq!(once.get(1, 1), Some(SlotStatus::Selected));
    let twice = toggle(&once, 1, 1);
    assert_eq!(twice, grid);
}

#[test]
fn toggle_never_changes_locked_or_out_of_range_cells() {
    let grid = AvailabilityGrid::all_available(2, 2).with_locked(&[CellRef { row: 0, col: 0 }]);
    assert_eq!(toggle(&grid, 0, 0), grid);
    assert_eq!(toggle(&grid, 5, 0), grid);
    assert_eq!(toggle(&grid, 0, 9), grid);
}

#[test]
fn toggle_leaves_its_input_untouched() {
    let grid = AvailabilityGrid::all_available(2, 2);
    let next = toggle(&grid, 0, 1);
    assert_eq!(grid.count(SlotStatus::Selected), 0);
    assert_eq!(next.count(SlotStatus::Selected), 1);
    assert_eq!(next.cells_with(SlotStatus::Selected), vec![CellRef { row: 0, col: 1 }]);
}

#[test]
fn without_selection_only_clears_selected_cells() {
    let grid = AvailabilityGrid::all_available(2, 2).with_locked(&[CellRef { row: 1, col: 1 }]);
    let grid = toggle(&toggle(&grid, 0, 0), 0, 1);
    let cleared = grid.without_selection();
    assert_eq!(cleared.count(SlotStatus::Selected), 0);
    assert_eq!(cleared.count(SlotStatus::Locked), 1);
    assert_eq!(cleared.count(SlotStatus::Available), 3);
}
