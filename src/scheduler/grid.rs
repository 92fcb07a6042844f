use crate::core::models::{CellRef, Court, Reservation};
use crate::core::types::{SlotCoverage, SlotStatus, TimeSlot};
use crate::scheduler::time_axis::slot_index_starting_at;

/// Slot x court status matrix. Rows follow the time axis, columns follow
/// the court list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityGrid {
    cells: Vec<Vec<SlotStatus>>,
}

impl AvailabilityGrid {
    /// Every cell `available`; also the fail-open result when a fetch fails.
    pub fn all_available(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![vec![SlotStatus::Available; cols]; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<SlotStatus> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[SlotStatus]> {
        self.cells.get(row).map(|r| r.as_slice())
    }

    pub fn count(&self, status: SlotStatus) -> usize {
        self.cells
            .iter()
            .flat_map(|r| r.iter())
            .filter(|s| **s == status)
            .count()
    }

    /// Cells in `status`, row-major.
    pub fn cells_with(&self, status: SlotStatus) -> Vec<CellRef> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, statuses)| {
                statuses
                    .iter()
                    .enumerate()
                    .filter(move |(_, s)| **s == status)
                    .map(move |(col, _)| CellRef { row, col })
            })
            .collect()
    }

    fn set(&mut self, row: usize, col: usize, status: SlotStatus) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = status;
        }
    }

    /// Copy with every selected cell turned back to available.
    pub fn without_selection(&self) -> Self {
        let mut next = self.clone();
        for cells in next.cells.iter_mut() {
            for cell in cells.iter_mut() {
                if *cell == SlotStatus::Selected {
                    *cell = SlotStatus::Available;
                }
            }
        }
        next
    }

    /// Copy with the given cells locked (e.g. after a successful booking).
    pub fn with_locked(&self, cells: &[CellRef]) -> Self {
        let mut next = self.clone();
        for cell in cells {
            next.set(cell.row, cell.col, SlotStatus::Locked);
        }
        next
    }
}

/// Slot indices a single reservation occupies under `coverage`.
///
/// Both modes lock the slot the reservation starts in. `FullRange` also locks
/// every following slot that begins before the reservation ends, so a slot
/// the reservation only partly covers is locked too.
///
/// A reservation whose start does not line up with a slot boundary cannot be
/// represented and yields nothing.
pub fn covered_rows(
    slots: &[TimeSlot],
    reservation: &Reservation,
    coverage: SlotCoverage,
) -> Vec<usize> {
    let Some(first) = slot_index_starting_at(slots, reservation.start_time) else {
        return Vec::new();
    };

    match coverage {
        SlotCoverage::StartSlotOnly => vec![first],
        SlotCoverage::FullRange => {
            let mut rows = vec![first];
            rows.extend(
                slots
                    .iter()
                    .enumerate()
                    .skip(first + 1)
                    .take_while(|(_, slot)| slot.start < reservation.end_time)
                    .map(|(idx, _)| idx),
            );
            rows
        }
    }
}

/// Build the status matrix for one date's reservations.
///
/// Cancelled reservations leave their slots available. Reservations whose
/// court number falls outside `courts` are skipped.
pub fn build_grid(
    slots: &[TimeSlot],
    courts: &[Court],
    reservations: &[Reservation],
    coverage: SlotCoverage,
) -> AvailabilityGrid {
    let mut grid = AvailabilityGrid::all_available(slots.len(), courts.len());

    for reservation in reservations.iter().filter(|r| r.is_active()) {
        let Some(col) = (reservation.court_number as usize).checked_sub(1) else {
            continue;
        };
        if col >= courts.len() {
            continue;
        }
        for row in covered_rows(slots, reservation, coverage) {
            grid.set(row, col, SlotStatus::Locked);
        }
    }
    grid
}

/// Flip one cell between available and selected.
///
/// Locked and out-of-range cells come back unchanged. The input grid is never
/// modified; a new grid is always returned.
pub fn toggle(grid: &AvailabilityGrid, row: usize, col: usize) -> AvailabilityGrid {
    let mut next = grid.clone();
    match grid.get(row, col) {
        Some(SlotStatus::Available) => next.set(row, col, SlotStatus::Selected),
        Some(SlotStatus::Selected) => next.set(row, col, SlotStatus::Available),
        Some(SlotStatus::Locked) | None => {}
    }
    next
}
