use roamly_core::{BookingRequest, BookingStatus, NewNotification, Session, Severity, TravelerNotificationKind};
use roamly_store::{BookingRequestStore, StoreError, TravelerNotificationStore};
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("Admin session required")]
    Forbidden,

    #[error("Booking request not found: {0}")]
    NotFound(String),

    #[error("Invalid transition for {id}: cannot move to {to}")]
    InvalidTransition { id: String, to: BookingStatus },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Admin-side decisions on booking requests
pub struct BookingManager {
    bookings: BookingRequestStore,
    traveler_notifications: TravelerNotificationStore,
}

impl BookingManager {
    pub fn new(bookings: BookingRequestStore, traveler_notifications: TravelerNotificationStore) -> Self {
        Self {
            bookings,
            traveler_notifications,
        }
    }

    pub fn approve(&self, session: &Session, id: &str, note: Option<&str>) -> Result<BookingRequest, ManagerError> {
        self.decide(session, id, BookingStatus::Approved, note)
    }

    pub fn reject(&self, session: &Session, id: &str, note: Option<&str>) -> Result<BookingRequest, ManagerError> {
        self.decide(session, id, BookingStatus::Rejected, note)
    }

    /// Move a request to APPROVED or REJECTED and tell the traveler.
    ///
    /// Decisions can be revised; nothing moves back to PENDING.
    pub fn decide(
        &self,
        session: &Session,
        id: &str,
        status: BookingStatus,
        note: Option<&str>,
    ) -> Result<BookingRequest, ManagerError> {
        if !session.is_admin() {
            return Err(ManagerError::Forbidden);
        }
        if status == BookingStatus::Pending {
            return Err(ManagerError::InvalidTransition {
                id: id.to_string(),
                to: status,
            });
        }

        let request = self
            .bookings
            .update_status(id, status, note)?
            .ok_or_else(|| ManagerError::NotFound(id.to_string()))?;

        info!("{} set booking {} to {}", session.name, request.id, request.status);
        self.notify_traveler(&request);
        Ok(request)
    }

    pub fn delete(&self, session: &Session, id: &str) -> Result<(), ManagerError> {
        if !session.is_admin() {
            return Err(ManagerError::Forbidden);
        }
        if !self.bookings.delete(id)? {
            return Err(ManagerError::NotFound(id.to_string()));
        }
        info!("{} deleted booking {}", session.name, id);
        Ok(())
    }

    fn notify_traveler(&self, request: &BookingRequest) {
        let (title, verb, severity) = match request.status {
            BookingStatus::Approved => ("Booking approved", "approved", Severity::Success),
            _ => ("Booking rejected", "rejected", Severity::Warning),
        };
        let mut message = format!(
            "Your {}, {} trip on {} has been {}.",
            request.destination, request.country, request.travel_date, verb
        );
        if !request.admin_note.is_empty() {
            message.push_str(&format!(" Note: {}", request.admin_note));
        }

        let notification =
            NewNotification::new(TravelerNotificationKind::BookingUpdate, title, message).with_severity(severity);
        if let Err(e) = self.traveler_notifications.push(notification) {
            warn!("Failed to notify traveler about booking {}: {}", request.id, e);
        }
    }
}
