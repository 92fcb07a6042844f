use crate::core::models::{BookingRequest, CellRef, Court, DateEntry, FacilityProfile, Reservation};
use crate::core::types::{SlotCoverage, SlotStatus, TimeSlot};
use crate::errors::{Error, Result};
use crate::logging::{LogTarget, Logger};
use crate::scheduler::booking::{BookingGateway, BookingObserver, BookingOutcome, ReservationSource};
use crate::scheduler::grid::AvailabilityGrid;
use crate::scheduler::pricing::PriceSummary;
use chrono::NaiveDate;

pub mod booking;
pub mod date_window;
pub mod grid;
pub mod grouping;
pub mod pricing;
pub mod time_axis;
#[cfg(test)]
mod tests;

/// Identifies one grid rebuild. Only the newest ticket for the currently
/// selected date may replace the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildTicket {
    pub generation: u64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildApplied {
    Applied { locked: usize },
    /// Fetch failed; the grid is shown fully available.
    FailOpen,
    /// A newer build or a different date superseded this one.
    Stale,
}

pub trait SessionObserver: BookingObserver {
    fn grid_built(&self, date: NaiveDate, generation: u64, locked: usize);
    fn build_discarded(&self, ticket: BuildTicket, selected: NaiveDate, current: u64);
    fn fetch_failed(&self, date: NaiveDate, err: &Error);
    fn toggle_refused(&self, slot: TimeSlot, court: &Court);
}

pub struct LoggerObserver {
    logger: Logger,
}

impl LoggerObserver {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl BookingObserver for LoggerObserver {
    fn request_finished(
        &self,
        request: &BookingRequest,
        result: std::result::Result<&Reservation, &Error>,
    ) {
        match result {
            Ok(reservation) => self.logger.info(
                format!(
                    "Reservation {} created for court {} on {} at {}",
                    reservation.id,
                    request.court_number,
                    request.date,
                    request.slot()
                ),
                LogTarget::FileOnly,
            ),
            Err(err) => self.logger.warn(
                format!(
                    "Reservation for court {} on {} at {} failed: {}",
                    request.court_number,
                    request.date,
                    request.slot(),
                    err
                ),
                LogTarget::FileOnly,
            ),
        }
    }
}

impl SessionObserver for LoggerObserver {
    fn grid_built(&self, date: NaiveDate, generation: u64, locked: usize) {
        self.logger.info(
            format!("Grid for {date} rebuilt (build {generation}, {locked} locked cells)"),
            LogTarget::FileOnly,
        );
    }

    fn build_discarded(&self, ticket: BuildTicket, selected: NaiveDate, current: u64) {
        self.logger.info(
            format!(
                "Discarded stale build {} for {} (selected {}, current build {})",
                ticket.generation, ticket.date, selected, current
            ),
            LogTarget::FileOnly,
        );
    }

    fn fetch_failed(&self, date: NaiveDate, err: &Error) {
        self.logger.warn(
            format!("Could not load reservations for {date}; showing all slots as available. ({err})"),
            LogTarget::ConsoleAndFile,
        );
    }

    fn toggle_refused(&self, slot: TimeSlot, court: &Court) {
        self.logger.warn(
            format!("{} at {} is already booked.", court.name, slot),
            LogTarget::ConsoleOnly,
        );
    }
}

/// Interactive booking state for one facility: the axes, the grid for the
/// selected date and the user's pending selection.
pub struct BookingSession {
    facility: FacilityProfile,
    coverage: SlotCoverage,
    dates: Vec<DateEntry>,
    slots: Vec<TimeSlot>,
    selected_date: NaiveDate,
    grid: AvailabilityGrid,
    generation: u64,
    observer: Box<dyn SessionObserver>,
}

impl BookingSession {
    pub fn new(
        facility: FacilityProfile,
        coverage: SlotCoverage,
        window_days: u32,
        today: NaiveDate,
        observer: Box<dyn SessionObserver>,
    ) -> Self {
        let dates = date_window::generate_date_window(window_days.max(1), today);
        let slots = time_axis::slots_for_hours(&facility.hours, facility.slot_minutes);
        let grid = AvailabilityGrid::all_available(slots.len(), facility.courts.len());
        Self {
            facility,
            coverage,
            dates,
            slots,
            selected_date: today,
            grid,
            generation: 0,
            observer,
        }
    }

    pub fn facility(&self) -> &FacilityProfile {
        &self.facility
    }
    pub fn dates(&self) -> &[DateEntry] {
        &self.dates
    }
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }
    pub fn courts(&self) -> &[Court] {
        &self.facility.courts
    }
    pub fn grid(&self) -> &AvailabilityGrid {
        &self.grid
    }
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Switch dates. The selection is dropped and the grid shows all slots
    /// available until the returned build is applied.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<BuildTicket> {
        if !self.dates.iter().any(|d| d.date == date) {
            return Err(Error::Parse(format!(
                "Date {} is outside the booking window ({} to {}).",
                date,
                self.dates.first().map(|d| d.key.as_str()).unwrap_or("-"),
                self.dates.last().map(|d| d.key.as_str()).unwrap_or("-"),
            )));
        }
        self.selected_date = date;
        self.grid = AvailabilityGrid::all_available(self.slots.len(), self.courts().len());
        Ok(self.begin_build())
    }

    /// Start a rebuild of the currently selected date.
    pub fn begin_build(&mut self) -> BuildTicket {
        self.generation += 1;
        BuildTicket {
            generation: self.generation,
            date: self.selected_date,
        }
    }

    pub fn apply_build(
        &mut self,
        ticket: BuildTicket,
        fetched: Result<Vec<Reservation>>,
    ) -> BuildApplied {
        if ticket.generation != self.generation || ticket.date != self.selected_date {
            self.observer
                .build_discarded(ticket, self.selected_date, self.generation);
            return BuildApplied::Stale;
        }

        match fetched {
            Ok(reservations) => {
                let relevant: Vec<Reservation> = reservations
                    .into_iter()
                    .filter(|r| r.date == ticket.date && r.stadium_id == self.facility.stadium_id)
                    .collect();
                self.grid =
                    grid::build_grid(&self.slots, self.courts(), &relevant, self.coverage);
                let locked = self.grid.count(SlotStatus::Locked);
                self.observer
                    .grid_built(ticket.date, ticket.generation, locked);
                BuildApplied::Applied { locked }
            }
            Err(err) => {
                self.observer.fetch_failed(ticket.date, &err);
                self.grid = AvailabilityGrid::all_available(self.slots.len(), self.courts().len());
                BuildApplied::FailOpen
            }
        }
    }

    /// Fetch and apply in one step for the selected date.
    pub fn refresh<S: ReservationSource + ?Sized>(&mut self, source: &S) -> BuildApplied {
        let ticket = self.begin_build();
        let fetched = source.fetch_reservations(&self.facility.stadium_id, ticket.date);
        self.apply_build(ticket, fetched)
    }

    /// Returns whether the cell changed.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        let next = grid::toggle(&self.grid, row, col);
        let changed = next != self.grid;
        if !changed && self.grid.get(row, col) == Some(SlotStatus::Locked) {
            if let (Some(slot), Some(court)) = (self.slots.get(row), self.facility.courts.get(col)) {
                self.observer.toggle_refused(*slot, court);
            }
        }
        self.grid = next;
        changed
    }

    pub fn clear_selection(&mut self) {
        self.grid = self.grid.without_selection();
    }

    pub fn price_summary(&self, shared_by: Option<u32>) -> PriceSummary {
        pricing::summarize(&self.grid, self.facility.price_per_slot, shared_by)
    }

    pub fn booking_requests(&self) -> Vec<(CellRef, BookingRequest)> {
        booking::build_requests(
            &self.grid,
            &self.slots,
            self.courts(),
            &self.facility,
            self.selected_date,
        )
    }

    /// Submit one request per selected cell. Booked cells become locked,
    /// failed ones stay selected so they can be retried.
    pub fn submit<G: BookingGateway + ?Sized>(&mut self, gateway: &mut G) -> BookingOutcome {
        let requests = self.booking_requests();
        let outcome = booking::submit_all(gateway, requests, self.observer.as_ref());
        self.grid = self.grid.with_locked(&outcome.succeeded_cells());
        outcome
    }
}
