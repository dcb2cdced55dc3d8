use roamly_catalog::{PriceBreakdown, Reading, TourCategory};
use roamly_order::{OperationsReport, ReportBuilder};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourSummary {
    pub id: String,
    pub location: String,
    pub category: TourCategory,
    pub duration: u32,
    pub price: PriceBreakdown,
    pub weather: Reading,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub report: OperationsReport,
    pub unread_admin_notifications: usize,
    pub unread_contact_messages: usize,
}

/// Catalog cards: quote and today's weather per tour
pub fn catalog(state: &AppState) -> Vec<TourSummary> {
    state
        .tours
        .read_all()
        .into_iter()
        .map(|tour| TourSummary {
            price: state.pricing.breakdown(&tour),
            weather: state.weather.weather_for_tour(&tour).current,
            location: tour.location(),
            category: tour.category,
            duration: tour.duration,
            id: tour.id,
        })
        .collect()
}

pub fn dashboard(state: &AppState) -> Dashboard {
    Dashboard {
        report: ReportBuilder::new().build(&state.bookings.read_all(), &state.payments.read_all()),
        unread_admin_notifications: state.admin_notifications.unread_count(),
        unread_contact_messages: state.contacts.unread_count(),
    }
}
