use crate::core::models::{BookingRequest, CellRef, Court, FacilityProfile, Reservation};
use crate::core::types::{ReservationStatus, SlotStatus, TimeSlot};
use crate::errors::{Error, Result};
use crate::scheduler::grid::AvailabilityGrid;
use chrono::NaiveDate;

/// Where reservations for a stadium and date come from. Implementations
/// return everything, cancelled rows included.
pub trait ReservationSource {
    fn fetch_reservations(&self, stadium_id: &str, date: NaiveDate) -> Result<Vec<Reservation>>;
}

/// Accepts one reservation-creation request at a time.
pub trait BookingGateway {
    fn create_reservation(&mut self, request: &BookingRequest) -> Result<Reservation>;
}

/// Per-request results of one booking action. Requests are independent, so
/// some may succeed while others fail.
#[derive(Debug, Default)]
pub struct BookingOutcome {
    pub succeeded: Vec<(CellRef, Reservation)>,
    pub failed: Vec<(CellRef, BookingRequest, Error)>,
}

impl BookingOutcome {
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.failed.is_empty()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && !self.succeeded.is_empty()
    }

    pub fn is_partial(&self) -> bool {
        !self.succeeded.is_empty() && !self.failed.is_empty()
    }

    pub fn succeeded_cells(&self) -> Vec<CellRef> {
        self.succeeded.iter().map(|(cell, _)| *cell).collect()
    }
}

/// Observer for each request's result, e.g. for logging.
pub trait BookingObserver {
    fn request_finished(
        &self,
        request: &BookingRequest,
        result: std::result::Result<&Reservation, &Error>,
    );
}

/// One `PENDING` creation request per selected cell, each priced at one
/// slot. Cells outside the axis or court list are skipped.
pub fn build_requests(
    grid: &AvailabilityGrid,
    slots: &[TimeSlot],
    courts: &[Court],
    facility: &FacilityProfile,
    date: NaiveDate,
) -> Vec<(CellRef, BookingRequest)> {
    grid.cells_with(SlotStatus::Selected)
        .into_iter()
        .filter_map(|cell| {
            let slot = slots.get(cell.row)?;
            let court = courts.get(cell.col)?;
            Some((
                cell,
                BookingRequest {
                    stadium_id: facility.stadium_id.clone(),
                    court_number: court.court_number,
                    sport: facility.sport.clone(),
                    court_type: facility.court_type.clone(),
                    date,
                    start_time: slot.start,
                    end_time: slot.end,
                    total_price: facility.price_per_slot,
                    status: ReservationStatus::Pending,
                },
            ))
        })
        .collect()
}

/// Send every request; a failure never stops the remaining requests.
pub fn submit_all<G, O>(
    gateway: &mut G,
    requests: Vec<(CellRef, BookingRequest)>,
    observer: &O,
) -> BookingOutcome
where
    G: BookingGateway + ?Sized,
    O: BookingObserver + ?Sized,
{
    let mut outcome = BookingOutcome::default();
    for (cell, request) in requests {
        match gateway.create_reservation(&request) {
            Ok(reservation) => {
                observer.request_finished(&request, Ok(&reservation));
                outcome.succeeded.push((cell, reservation));
            }
            Err(err) => {
                observer.request_finished(&request, Err(&err));
                outcome.failed.push((cell, request, err));
            }
        }
    }
    outcome
}
