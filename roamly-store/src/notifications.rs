use chrono::Utc;
use roamly_core::{
    new_record_id, AdminNotificationKind, NewNotification, Notification, TravelerNotificationKind,
};
use roamly_shared::StoreSignal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::info;

use crate::local::{sort_newest_first, Collection, LocalStore};
use crate::{seeds, StoreResult};

/// One of the two independent notification feeds.
pub trait NotificationScope: Send + Sync + 'static {
    type Kind: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    const NAME: &'static str;
    const KEY: &'static str;
    const SIGNAL: StoreSignal;

    fn seed() -> Vec<Notification<Self::Kind>>;
}

pub enum AdminScope {}

pub enum TravelerScope {}

impl NotificationScope for AdminScope {
    type Kind = AdminNotificationKind;
    const NAME: &'static str = "admin_notifications";
    const KEY: &'static str = "roamly_admin_notifications";
    const SIGNAL: StoreSignal = StoreSignal::AdminNotificationsUpdated;

    fn seed() -> Vec<Notification<Self::Kind>> {
        seeds::admin_notifications()
    }
}

impl NotificationScope for TravelerScope {
    type Kind = TravelerNotificationKind;
    const NAME: &'static str = "traveler_notifications";
    const KEY: &'static str = "roamly_traveler_notifications";
    const SIGNAL: StoreSignal = StoreSignal::TravelerNotificationsUpdated;

    fn seed() -> Vec<Notification<Self::Kind>> {
        seeds::traveler_notifications()
    }
}

pub struct Notifications<S>(PhantomData<S>);

impl<S: NotificationScope> Collection for Notifications<S> {
    type Record = Notification<S::Kind>;
    const NAME: &'static str = S::NAME;
    const KEY: &'static str = S::KEY;
    const SIGNAL: StoreSignal = S::SIGNAL;

    fn seed() -> Vec<Self::Record> {
        S::seed()
    }

    fn normalize(mut records: Vec<Self::Record>) -> Vec<Self::Record> {
        sort_newest_first(&mut records, |n| n.created_at);
        records
    }
}

pub type AdminNotificationStore = LocalStore<Notifications<AdminScope>>;
pub type TravelerNotificationStore = LocalStore<Notifications<TravelerScope>>;

impl<S: NotificationScope> LocalStore<Notifications<S>> {
    /// Returns false when no notification has this id
    pub fn mark_read(&self, id: &str) -> StoreResult<bool> {
        let found = self.try_modify(|records| {
            records.iter_mut().find(|n| n.id == id).map(|notification| notification.mark_read())
        })?;
        Ok(found.is_some())
    }

    /// Returns how many notifications changed
    pub fn mark_all_read(&self) -> StoreResult<usize> {
        let changed = self.try_modify(|records| {
            let unread = records.iter().filter(|n| !n.read).count();
            records.iter_mut().for_each(|n| n.mark_read());
            (unread > 0).then_some(unread)
        })?;
        Ok(changed.unwrap_or(0))
    }

    /// Returns false when no notification has this id
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self.try_modify(|records| {
            let index = records.iter().position(|n| n.id == id)?;
            Some(records.remove(index))
        })?;
        Ok(removed.is_some())
    }

    pub fn push(&self, fields: NewNotification<S::Kind>) -> StoreResult<Notification<S::Kind>> {
        let notification = fields.into_notification(new_record_id("NT"), Utc::now());
        let created = notification.clone();
        self.modify(move |records| records.insert(0, notification))?;
        info!("{}: pushed notification {}", S::NAME, created.id);
        Ok(created)
    }

    pub fn unread_count(&self) -> usize {
        self.read_all().iter().filter(|n| !n.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStorage;
    use crate::events::InProcessBus;
    use roamly_core::SignalBus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn admin_store() -> (AdminNotificationStore, Arc<InProcessBus>) {
        let bus = Arc::new(InProcessBus::new());
        let store = AdminNotificationStore::new(Arc::new(MemoryStorage::new()), bus.clone());
        (store, bus)
    }

    #[test]
    fn test_seed_sorted_newest_first() {
        let (store, _) = admin_store();
        let records = store.read_all();
        assert!(!records.is_empty());
        assert!(records.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_mark_read_and_count() {
        let (store, _) = admin_store();
        let unread_before = store.unread_count();
        let target = store.read_all().into_iter().find(|n| !n.read).unwrap();

        assert!(store.mark_read(&target.id).unwrap());
        assert_eq!(store.unread_count(), unread_before - 1);
        assert!(!store.mark_read("NT-MISSING").unwrap());
    }

    #[test]
    fn test_mark_all_read() {
        let (store, _) = admin_store();
        let unread = store.unread_count();
        assert_eq!(store.mark_all_read().unwrap(), unread);
        assert_eq!(store.unread_count(), 0);
        assert_eq!(store.mark_all_read().unwrap(), 0);
    }

    #[test]
    fn test_unknown_id_does_not_signal() {
        let (store, bus) = admin_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        bus.subscribe(StoreSignal::AdminNotificationsUpdated, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!store.mark_read("NT-MISSING").unwrap());
        assert!(!store.delete("NT-MISSING").unwrap());
        store.mark_all_read().unwrap();
        store.mark_all_read().unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delete() {
        let (store, _) = admin_store();
        let first = store.read_all()[0].id.clone();
        assert!(store.delete(&first).unwrap());
        assert!(store.read_all().iter().all(|n| n.id != first));
        assert!(!store.delete(&first).unwrap());
    }

    #[test]
    fn test_push_lands_on_top_and_signals() {
        let (store, bus) = admin_store();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        bus.subscribe(StoreSignal::AdminNotificationsUpdated, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let pushed = store
            .push(NewNotification::new(
                AdminNotificationKind::NewBooking,
                "New booking request",
                "Asha requested Kyoto",
            ))
            .unwrap();
        assert_eq!(store.read_all()[0], pushed);
        assert!(!pushed.read);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_feeds_are_independent() {
        let storage = Arc::new(MemoryStorage::new());
        let bus: Arc<dyn SignalBus> = Arc::new(InProcessBus::new());
        let admin = AdminNotificationStore::new(storage.clone(), bus.clone());
        let traveler = TravelerNotificationStore::new(storage, bus);

        admin.mark_all_read().unwrap();
        assert_eq!(admin.unread_count(), 0);
        assert!(traveler.unread_count() > 0);
    }
}
