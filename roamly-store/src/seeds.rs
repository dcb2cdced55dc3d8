//! Built-in datasets written the first time each collection is read.

use chrono::{DateTime, NaiveDate, Utc};
use roamly_catalog::{Tour, TourDraft, WeatherCondition, WeatherProfile};
use roamly_core::{
    AdminNotification, AdminNotificationKind, ContactMessage, Notification, PaymentMethod,
    PaymentRecord, PaymentStatus, Severity, TravelerNotification, TravelerNotificationKind, CURRENCY,
};
use tracing::warn;

fn seeded_at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2026, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn notification<K>(
    id: &str,
    kind: K,
    title: &str,
    message: &str,
    created_at: DateTime<Utc>,
    read: bool,
    severity: Option<Severity>,
) -> Notification<K> {
    Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        created_at,
        read,
        severity,
    }
}

pub fn admin_notifications() -> Vec<AdminNotification> {
    vec![
        notification(
            "NT-ADMIN-001",
            AdminNotificationKind::NewBooking,
            "New booking request",
            "Priya Sharma requested Kyoto, Japan for 2 travelers.",
            seeded_at(1, 14, 9, 15),
            false,
            Some(Severity::Info),
        ),
        notification(
            "NT-ADMIN-002",
            AdminNotificationKind::Payment,
            "Payment received",
            "INR 285000 received via UPI for booking BK-DEMO-001.",
            seeded_at(1, 13, 18, 40),
            false,
            Some(Severity::Success),
        ),
        notification(
            "NT-ADMIN-003",
            AdminNotificationKind::NewUser,
            "New traveler signed up",
            "Arjun Mehta created a traveler account.",
            seeded_at(1, 12, 11, 5),
            true,
            None,
        ),
        notification(
            "NT-ADMIN-004",
            AdminNotificationKind::System,
            "Catalog refreshed",
            "Seasonal prices were recalculated for all tours.",
            seeded_at(1, 10, 7, 0),
            true,
            Some(Severity::Warning),
        ),
    ]
}

pub fn traveler_notifications() -> Vec<TravelerNotification> {
    vec![
        notification(
            "NT-TRAV-001",
            TravelerNotificationKind::BookingUpdate,
            "Booking approved",
            "Your Bali, Indonesia trip has been approved.",
            seeded_at(1, 14, 10, 0),
            false,
            Some(Severity::Success),
        ),
        notification(
            "NT-TRAV-002",
            TravelerNotificationKind::WeatherAlert,
            "Weather update",
            "Light showers expected in Bali on your arrival day.",
            seeded_at(1, 13, 8, 30),
            false,
            Some(Severity::Warning),
        ),
        notification(
            "NT-TRAV-003",
            TravelerNotificationKind::Promotion,
            "Early bird offer",
            "Book a Culture tour this month and travel in spring.",
            seeded_at(1, 11, 12, 0),
            true,
            None,
        ),
    ]
}

pub fn payment_history() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: "PAY-DEMO-001".to_string(),
            booking_id: "BK-DEMO-001".to_string(),
            traveler_name: "Priya Sharma".to_string(),
            traveler_email: "priya.sharma@example.com".to_string(),
            method: PaymentMethod::Upi,
            amount: 285_000,
            currency: CURRENCY.to_string(),
            status: PaymentStatus::Success,
            paid_at: seeded_at(1, 13, 18, 40),
        },
        PaymentRecord {
            id: "PAY-DEMO-002".to_string(),
            booking_id: "BK-DEMO-002".to_string(),
            traveler_name: "Arjun Mehta".to_string(),
            traveler_email: "arjun.mehta@example.com".to_string(),
            method: PaymentMethod::Card,
            amount: 142_500,
            currency: CURRENCY.to_string(),
            status: PaymentStatus::Refunded,
            paid_at: seeded_at(1, 9, 14, 20),
        },
        PaymentRecord {
            id: "PAY-DEMO-003".to_string(),
            booking_id: "BK-DEMO-003".to_string(),
            traveler_name: "Meera Nair".to_string(),
            traveler_email: "meera.nair@example.com".to_string(),
            method: PaymentMethod::BankTransfer,
            amount: 396_000,
            currency: CURRENCY.to_string(),
            status: PaymentStatus::Pending,
            paid_at: seeded_at(1, 6, 16, 45),
        },
    ]
}

pub fn contact_messages() -> Vec<ContactMessage> {
    vec![
        ContactMessage {
            id: "MSG-DEMO-001".to_string(),
            name: "Kavya Iyer".to_string(),
            email: "kavya.iyer@example.com".to_string(),
            subject: "Group discount".to_string(),
            message: "Do you offer discounts for groups of eight?".to_string(),
            created_at: seeded_at(1, 14, 7, 50),
            read: false,
        },
        ContactMessage {
            id: "MSG-DEMO-002".to_string(),
            name: "Rahul Verma".to_string(),
            email: "rahul.verma@example.com".to_string(),
            subject: "Visa help".to_string(),
            message: "Can you help with the Japan visa paperwork?".to_string(),
            created_at: seeded_at(1, 8, 19, 10),
            read: true,
        },
    ]
}

struct TourSeed {
    id: &'static str,
    destination: &'static str,
    country: &'static str,
    category: &'static str,
    description: &'static str,
    duration: u32,
    image_url: &'static str,
    plan: &'static [&'static str],
    profile: (i32, i32, i32, WeatherCondition),
}

const TOURS: &[TourSeed] = &[
    TourSeed {
        id: "tour-kyoto",
        destination: "Kyoto",
        country: "Japan",
        category: "Culture",
        description: "Temples, tea houses and the lantern-lit lanes of Gion.",
        duration: 5,
        image_url: "/images/tours/kyoto.jpg",
        plan: &[
            "Day 1: Arrive and evening walk through Gion",
            "Day 2: Fushimi Inari and Tofuku-ji",
            "Day 3: Arashiyama bamboo grove",
            "Day 4: Tea ceremony and Nishiki market",
            "Day 5: Departure",
        ],
        profile: (16, 65, 9, WeatherCondition::Cloudy),
    },
    TourSeed {
        id: "tour-queenstown",
        destination: "Queenstown",
        country: "New Zealand",
        category: "Adventure",
        description: "Bungy, jet boats and alpine trails on Lake Wakatipu.",
        duration: 5,
        image_url: "/images/tours/queenstown.jpg",
        plan: &[
            "Day 1: Arrive and gondola ride",
            "Day 2: Kawarau bungy",
            "Day 3: Shotover jet and Arrowtown",
            "Day 4: Milford Sound day trip",
        ],
        profile: (12, 70, 18, WeatherCondition::Windy),
    },
    TourSeed {
        id: "tour-bali",
        destination: "Bali",
        country: "Indonesia",
        category: "Couple",
        description: "Rice terraces, cliff temples and beach sunsets.",
        duration: 6,
        image_url: "/images/tours/bali.jpg",
        plan: &[
            "Day 1: Arrive in Seminyak",
            "Day 2: Ubud rice terraces",
            "Day 3: Uluwatu temple at sunset",
            "Day 4: Nusa Penida",
            "Day 5: Spa day",
            "Day 6: Departure",
        ],
        profile: (29, 80, 11, WeatherCondition::Rainy),
    },
    TourSeed {
        id: "tour-singapore",
        destination: "Singapore",
        country: "Singapore",
        category: "Family",
        description: "Gardens, zoo nights and a day at Sentosa.",
        duration: 4,
        image_url: "/images/tours/singapore.jpg",
        plan: &[
            "Day 1: Gardens by the Bay",
            "Day 2: Night safari",
            "Day 3: Sentosa island",
            "Day 4: Departure",
        ],
        profile: (30, 78, 8, WeatherCondition::PartlyCloudy),
    },
    TourSeed {
        id: "tour-reykjavik",
        destination: "Reykjavik",
        country: "Iceland",
        category: "Adventure",
        description: "Northern lights, glaciers and geothermal lagoons.",
        duration: 7,
        image_url: "/images/tours/reykjavik.jpg",
        plan: &[
            "Day 1: Arrive and Blue Lagoon",
            "Day 2: Golden Circle",
            "Day 3: South coast waterfalls",
            "Day 4: Glacier hike",
            "Day 5: Northern lights hunt",
            "Day 6: Snaefellsnes peninsula",
            "Day 7: Departure",
            "Day 8: Optional extension",
        ],
        profile: (2, 82, 20, WeatherCondition::Snowy),
    },
    TourSeed {
        id: "tour-jaipur",
        destination: "Jaipur",
        country: "India",
        category: "Culture",
        description: "Forts, palaces and bazaars of the Pink City.",
        duration: 3,
        image_url: "/images/tours/jaipur.jpg",
        plan: &[
            "Day 1: Amber Fort",
            "Day 2: City Palace and Hawa Mahal",
            "Day 3: Bazaars and departure",
        ],
        profile: (27, 40, 12, WeatherCondition::Sunny),
    },
];

pub fn tours() -> Vec<Tour> {
    TOURS
        .iter()
        .filter_map(|seed| {
            let (base_temp, base_humidity, base_wind, default_condition) = seed.profile;
            let draft = TourDraft {
                id: Some(seed.id.to_string()),
                destination: Some(seed.destination.to_string()),
                country: Some(seed.country.to_string()),
                category: Some(seed.category.to_string()),
                description: Some(seed.description.to_string()),
                duration: Some(serde_json::json!(seed.duration)),
                image_url: Some(seed.image_url.to_string()),
                plan: Some(seed.plan.iter().map(|s| s.to_string()).collect()),
                weather_profile: Some(WeatherProfile {
                    base_temp,
                    base_humidity,
                    base_wind,
                    default_condition,
                }),
                price_per_traveler: None,
            };
            Tour::from_draft(draft)
                .map_err(|e| warn!("Skipping invalid seed tour {}: {}", seed.id, e))
                .ok()
        })
        .collect()
}
