use chrono::Utc;
use roamly_core::{new_record_id, BookingRequest, BookingStatus, NewBookingRequest};
use roamly_shared::{Masked, StoreSignal};
use tracing::info;

use crate::local::{sort_newest_first, Collection, LocalStore};
use crate::StoreResult;

pub struct BookingRequests;

impl Collection for BookingRequests {
    type Record = BookingRequest;
    const NAME: &'static str = "booking_requests";
    const KEY: &'static str = "roamly_booking_requests";
    const SIGNAL: StoreSignal = StoreSignal::BookingRequestsUpdated;

    /// Booking requests only come from travelers; the feed starts empty.
    fn seed() -> Vec<BookingRequest> {
        Vec::new()
    }

    fn normalize(records: Vec<BookingRequest>) -> Vec<BookingRequest> {
        let mut records: Vec<BookingRequest> = records.into_iter().map(BookingRequest::normalized).collect();
        sort_newest_first(&mut records, |r| r.requested_at);
        records
    }
}

pub type BookingRequestStore = LocalStore<BookingRequests>;

impl LocalStore<BookingRequests> {
    /// Record a new PENDING request
    pub fn create(&self, fields: NewBookingRequest) -> StoreResult<BookingRequest> {
        let request = fields.into_request(new_record_id("BK"), Utc::now());
        let created = request.clone();
        self.modify(move |records| records.insert(0, request))?;
        info!(
            "Booking request {} created for {} ({})",
            created.id,
            created.destination,
            Masked::new(&created.traveler_email)
        );
        Ok(created)
    }

    pub fn find(&self, id: &str) -> Option<BookingRequest> {
        self.read_all().into_iter().find(|r| r.id == id)
    }

    /// Set the status and, when given, the admin note.
    ///
    /// Returns the updated request, or `None` for an unknown id.
    pub fn update_status(
        &self,
        id: &str,
        status: BookingStatus,
        note: Option<&str>,
    ) -> StoreResult<Option<BookingRequest>> {
        let updated = self.try_modify(|records| {
            records.iter_mut().find(|r| r.id == id).map(|request| {
                request.decide(status, note);
                request.clone()
            })
        })?;
        if let Some(request) = &updated {
            info!("Booking request {} is now {}", request.id, request.status);
        }
        Ok(updated)
    }

    /// Returns false when no request has this id
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self.try_modify(|records| {
            let index = records.iter().position(|r| r.id == id)?;
            Some(records.remove(index))
        })?;
        Ok(removed.is_some())
    }

    /// A traveler's own trips, newest first
    pub fn for_traveler(&self, email: &str) -> Vec<BookingRequest> {
        let email = email.trim().to_lowercase();
        self.read_all()
            .into_iter()
            .filter(|r| r.traveler_email == email)
            .collect()
    }

    pub fn with_status(&self, status: BookingStatus) -> Vec<BookingRequest> {
        self.read_all().into_iter().filter(|r| r.status == status).collect()
    }
}
