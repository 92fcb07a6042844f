use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::core::models::{BaseEntity, BookingRequest, Reservation};
use crate::core::persist::{BookFile, load_book, save_book};
use crate::core::types::ReservationStatus;
use crate::errors::{Error, Result, require_parse};
use crate::scheduler::booking::{BookingGateway, ReservationSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sort {
    IdAsc,
    /// Date, then start time, then court.
    Chronological,
}

/// Local stand-in for the remote reservation backend: an id-keyed store
/// that can be persisted to a JSON file.
#[derive(Debug)]
pub struct ReservationBook {
    items: HashMap<i32, Reservation>,
    next_id: i32,
    user_id: String,
    path: Option<PathBuf>,
}

impl ReservationBook {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            items: HashMap::new(),
            next_id: 1,
            user_id: user_id.into(),
            path: None,
        }
    }

    /// Open the book stored at `path`; a missing file starts an empty book
    /// that will be written there on the first save.
    pub fn open(path: impl AsRef<Path>, user_id: impl Into<String>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let mut book = Self::new(user_id);
        if path.exists() {
            let file = load_book(&path)?;
            for reservation in file.reservations {
                book.insert_with_id(reservation)?;
            }
            book.next_id = book.next_id.max(file.next_id);
        }
        book.path = Some(path);
        Ok(book)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn insert(&mut self, mut reservation: Reservation) -> &Reservation {
        let id = self.next_id;
        self.next_id += 1;
        reservation.set_id(id);
        self.items.entry(id).or_insert(reservation)
    }

    pub fn insert_with_id(&mut self, reservation: Reservation) -> Result<()> {
        let id = reservation.id();
        if id <= 0 {
            return Err(Error::Parse("ID must be positive.".into()));
        }
        if self.items.contains_key(&id) {
            return Err(Error::Parse(format!(
                "Reservation with id {} already exists.",
                id
            )));
        }
        self.next_id = self.next_id.max(id + 1);
        self.items.insert(id, reservation);
        Ok(())
    }

    pub fn get(&self, id: i32) -> Result<&Reservation> {
        require_parse(
            self.items.get(&id),
            format!("Reservation with id {} not found.", id),
        )
    }

    /// Mark a reservation cancelled; the row stays for history.
    pub fn cancel(&mut self, id: i32) -> Result<&Reservation> {
        let reservation = require_parse(
            self.items.get_mut(&id),
            format!("Reservation with id {} not found.", id),
        )?;
        if matches!(
            reservation.status,
            ReservationStatus::Cancelled | ReservationStatus::Completed
        ) {
            return Err(Error::Domain(format!(
                "Reservation {} is already {}.",
                id, reservation.status
            )));
        }
        reservation.status = ReservationStatus::Cancelled;
        Ok(reservation)
    }

    pub fn values(&self, sort: Sort) -> Vec<&Reservation> {
        let mut values: Vec<&Reservation> = self.items.values().collect();
        match sort {
            Sort::IdAsc => values.sort_by_key(|r| r.id),
            Sort::Chronological => {
                values.sort_by_key(|r| (r.date, r.start_time, r.court_number, r.id))
            }
        }
        values
    }

    /// Every reservation made by `user_id`, cancelled ones included.
    pub fn for_user(&self, user_id: &str) -> Vec<Reservation> {
        self.values(Sort::Chronological)
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn save(&self) -> Result<Option<PathBuf>> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let file = BookFile {
            next_id: self.next_id,
            reservations: self.values(Sort::IdAsc).into_iter().cloned().collect(),
        };
        save_book(&file, path).map(Some)
    }

    fn check_request(&self, request: &BookingRequest) -> std::result::Result<(), String> {
        if request.court_number == 0 {
            return Err("court numbers start at 1".to_string());
        }
        if request.start_time >= request.end_time {
            return Err("start time must be earlier than end time".to_string());
        }
        let clash = self.items.values().any(|r| {
            r.is_active()
                && r.stadium_id == request.stadium_id
                && r.court_number == request.court_number
                && r.date == request.date
                && r.slot().overlaps(request.start_time, request.end_time)
        });
        if clash {
            return Err("slot already reserved".to_string());
        }
        Ok(())
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl ReservationSource for ReservationBook {
    /// In-memory reservations plus any the backing file holds that this book
    /// has not seen, e.g. ones written by another session.
    fn fetch_reservations(&self, stadium_id: &str, date: NaiveDate) -> Result<Vec<Reservation>> {
        let mut found: Vec<Reservation> = self
            .values(Sort::Chronological)
            .into_iter()
            .cloned()
            .collect();

        if let Some(path) = self.path.as_deref().filter(|p| p.exists()) {
            let on_disk = load_book(path)
                .map_err(|e| Error::fetch(format!("could not read {}: {e}", path.display())))?;
            let unseen: Vec<Reservation> = on_disk
                .reservations
                .into_iter()
                .filter(|r| !found.contains(r))
                .collect();
            found.extend(unseen);
        }

        Ok(found
            .into_iter()
            .filter(|r| r.stadium_id == stadium_id && r.date == date)
            .collect())
    }
}

impl BookingGateway for ReservationBook {
    /// Re-validates the slot against active reservations before accepting.
    fn create_reservation(&mut self, request: &BookingRequest) -> Result<Reservation> {
        if let Err(reason) = self.check_request(request) {
            return Err(Error::Booking {
                court_number: request.court_number,
                slot: request.slot(),
                reason,
            });
        }
        let reservation = Reservation::from_request(request, self.user_id.clone(), Self::now());
        Ok(self.insert(reservation).clone())
    }
}
