use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminNotificationKind {
    NewBooking,
    Payment,
    NewUser,
    ContactMessage,
    System,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelerNotificationKind {
    BookingUpdate,
    Payment,
    TripReminder,
    WeatherAlert,
    Promotion,
}

/// A notification in one of the two scoped feeds.
///
/// `K` is the scope's notification type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification<K> {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: K,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

pub type AdminNotification = Notification<AdminNotificationKind>;
pub type TravelerNotification = Notification<TravelerNotificationKind>;

impl<K> Notification<K> {
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

/// Fields for pushing a fresh notification onto a feed
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification<K> {
    pub kind: K,
    pub title: String,
    pub message: String,
    pub severity: Option<Severity>,
}

impl<K> NewNotification<K> {
    pub fn new(kind: K, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            severity: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn into_notification(self, id: String, created_at: DateTime<Utc>) -> Notification<K> {
        Notification {
            id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            created_at,
            read: false,
            severity: self.severity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_field_name() {
        let notification = NewNotification::new(
            AdminNotificationKind::NewBooking,
            "New booking request",
            "Asha requested Kyoto",
        )
        .with_severity(Severity::Info)
        .into_notification("NT-1".to_string(), Utc::now());

        let json = serde_json::to_value(&notification).unwrap();
        assert_eq!(json["type"], "NEW_BOOKING");
        assert_eq!(json["read"], false);
        assert_eq!(json["severity"], "INFO");
    }

    #[test]
    fn test_severity_is_optional() {
        let json = serde_json::json!({
            "id": "NT-2",
            "type": "TRIP_REMINDER",
            "title": "Trip soon",
            "message": "Pack your bags",
            "createdAt": "2026-02-01T09:30:00Z"
        });
        let notification: TravelerNotification = serde_json::from_value(json).unwrap();
        assert_eq!(notification.kind, TravelerNotificationKind::TripReminder);
        assert!(!notification.read);
        assert!(notification.severity.is_none());
    }
}
