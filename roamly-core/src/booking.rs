use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Booking request status in the admin review lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Transportation {
    #[default]
    Suv,
    Van,
    Bus,
}

/// Per-traveler details captured by the booking form.
///
/// Only the number of entries matters to the core.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelerDetails {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
}

/// A traveler's ask to reserve a tour on a date, awaiting admin approval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub id: String,
    pub traveler_name: String,
    pub traveler_email: String,
    pub destination: String,
    pub country: String,
    pub travel_date: NaiveDate,
    #[serde(default)]
    pub transportation: Transportation,
    #[serde(default = "one")]
    pub travelers_count: u32,
    pub status: BookingStatus,
    pub requested_at: DateTime<Utc>,
    #[serde(default)]
    pub admin_note: String,
}

fn one() -> u32 {
    1
}

impl BookingRequest {
    /// Re-derive computed fields after a read or before a write
    pub fn normalized(mut self) -> Self {
        self.travelers_count = self.travelers_count.max(1);
        self.traveler_name = self.traveler_name.trim().to_string();
        self.traveler_email = self.traveler_email.trim().to_lowercase();
        self.admin_note = self.admin_note.trim().to_string();
        self
    }

    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    /// Record an admin decision
    pub fn decide(&mut self, status: BookingStatus, note: Option<&str>) {
        self.status = status;
        if let Some(note) = note {
            self.admin_note = note.trim().to_string();
        }
    }
}

/// Fields submitted by a traveler when creating a booking request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBookingRequest {
    pub traveler_name: String,
    #[serde(default)]
    pub traveler_email: String,
    pub destination: String,
    pub country: String,
    pub travel_date: NaiveDate,
    #[serde(default)]
    pub transportation: Transportation,
    #[serde(default)]
    pub travelers: Vec<TravelerDetails>,
}

impl NewBookingRequest {
    /// Travelers on the request, never less than one
    pub fn travelers_count(&self) -> u32 {
        (self.travelers.len() as u32).max(1)
    }

    pub fn into_request(self, id: String, requested_at: DateTime<Utc>) -> BookingRequest {
        let travelers_count = self.travelers_count();
        BookingRequest {
            id,
            traveler_name: self.traveler_name,
            traveler_email: self.traveler_email,
            destination: self.destination,
            country: self.country,
            travel_date: self.travel_date,
            transportation: self.transportation,
            travelers_count,
            status: BookingStatus::Pending,
            requested_at,
            admin_note: String::new(),
        }
        .normalized()
    }
}
