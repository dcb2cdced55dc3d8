use chrono::Utc;
use roamly_core::{new_record_id, NewPaymentRecord, PaymentRecord};
use roamly_shared::StoreSignal;
use tracing::info;

use crate::local::{sort_newest_first, Collection, LocalStore, SchemaVersion};
use crate::{seeds, StoreResult};

pub struct PaymentHistory;

impl Collection for PaymentHistory {
    type Record = PaymentRecord;
    const NAME: &'static str = "payment_history";
    const KEY: &'static str = "roamly_payment_history";
    const SIGNAL: StoreSignal = StoreSignal::PaymentHistoryUpdated;
    const SCHEMA: Option<SchemaVersion> = Some(SchemaVersion {
        key: "roamly_payment_history_version",
        value: "2",
    });

    fn seed() -> Vec<PaymentRecord> {
        seeds::payment_history()
    }

    fn normalize(records: Vec<PaymentRecord>) -> Vec<PaymentRecord> {
        let mut records: Vec<PaymentRecord> = records.into_iter().map(PaymentRecord::normalized).collect();
        sort_newest_first(&mut records, |p| p.paid_at);
        records
    }
}

pub type PaymentHistoryStore = LocalStore<PaymentHistory>;

impl LocalStore<PaymentHistory> {
    /// Log a payment. Records are never updated afterwards.
    pub fn create(&self, fields: NewPaymentRecord) -> StoreResult<PaymentRecord> {
        let record = fields.into_record(new_record_id("PAY"), Utc::now());
        let created = record.clone();
        self.modify(move |records| records.insert(0, record))?;
        info!(
            "Payment {} logged for booking {}: {} {} ({:?})",
            created.id, created.booking_id, created.currency, created.amount, created.status
        );
        Ok(created)
    }

    pub fn for_traveler(&self, email: &str) -> Vec<PaymentRecord> {
        let email = email.trim().to_lowercase();
        self.read_all()
            .into_iter()
            .filter(|p| p.traveler_email == email)
            .collect()
    }

    pub fn for_booking(&self, booking_id: &str) -> Vec<PaymentRecord> {
        self.read_all()
            .into_iter()
            .filter(|p| p.booking_id == booking_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStorage;
    use crate::events::InProcessBus;
    use roamly_core::{KeyValueStore, PaymentMethod, PaymentStatus};
    use std::sync::Arc;

    fn store_with(storage: Arc<MemoryStorage>) -> PaymentHistoryStore {
        PaymentHistoryStore::new(storage, Arc::new(InProcessBus::new()))
    }

    fn payment(booking_id: &str) -> NewPaymentRecord {
        NewPaymentRecord {
            booking_id: booking_id.to_string(),
            traveler_name: "Asha".to_string(),
            traveler_email: "Asha@Example.com".to_string(),
            method: PaymentMethod::Card,
            amount: 285_000,
            status: PaymentStatus::Success,
        }
    }

    #[test]
    fn test_create_lands_on_top() {
        let store = store_with(Arc::new(MemoryStorage::new()));
        let created = store.create(payment("BK-1")).unwrap();
        let records = store.read_all();
        assert_eq!(records[0], created);
        assert_eq!(created.currency, "INR");
        assert_eq!(store.for_booking("BK-1").len(), 1);
        assert_eq!(store.for_traveler("asha@example.com").len(), 1);
    }

    #[test]
    fn test_old_schema_is_discarded() {
        let storage = Arc::new(MemoryStorage::new());
        let legacy = serde_json::json!([{
            "id": "PAY-LEGACY",
            "bookingId": "BK-LEGACY",
            "travelerName": "Old",
            "travelerEmail": "old@example.com",
            "method": "CARD",
            "amount": 100,
            "currency": "INR",
            "status": "SUCCESS",
            "paidAt": "2030-01-01T00:00:00Z"
        }]);
        storage.set("roamly_payment_history", &legacy.to_string()).unwrap();
        storage.set("roamly_payment_history_version", "1").unwrap();

        let records = store_with(storage).read_all();
        assert!(records.iter().all(|p| p.id != "PAY-LEGACY"));
        assert_eq!(records, PaymentHistory::normalize(PaymentHistory::seed()));
    }

    #[test]
    fn test_current_schema_is_kept() {
        let storage = Arc::new(MemoryStorage::new());
        let store = store_with(storage.clone());
        store.read_all();
        store.create(payment("BK-2")).unwrap();

        let reopened = store_with(storage);
        assert_eq!(reopened.for_booking("BK-2").len(), 1);
    }

    #[test]
    fn test_malformed_amount_coerced() {
        let storage = Arc::new(MemoryStorage::new());
        let stored = serde_json::json!([{
            "id": "PAY-X",
            "bookingId": "BK-X",
            "travelerName": "X",
            "travelerEmail": "x@example.com",
            "amount": "not a number",
            "currency": "EUR",
            "status": "FAILED",
            "paidAt": "2026-01-01T00:00:00Z"
        }]);
        storage.set("roamly_payment_history", &stored.to_string()).unwrap();
        storage.set("roamly_payment_history_version", "2").unwrap();

        let records = store_with(storage).read_all();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 0);
        assert_eq!(records[0].currency, "INR");
        assert_eq!(records[0].method, PaymentMethod::Card);
    }
}
