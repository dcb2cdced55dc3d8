use roamly_core::ContactMessage;
use roamly_shared::StoreSignal;

use crate::local::{sort_newest_first, Collection, LocalStore};
use crate::{seeds, StoreResult};

pub struct ContactMessages;

impl Collection for ContactMessages {
    type Record = ContactMessage;
    const NAME: &'static str = "contact_messages";
    const KEY: &'static str = "roamly_contact_messages";
    const SIGNAL: StoreSignal = StoreSignal::ContactMessagesUpdated;

    fn seed() -> Vec<ContactMessage> {
        seeds::contact_messages()
    }

    fn normalize(mut records: Vec<ContactMessage>) -> Vec<ContactMessage> {
        sort_newest_first(&mut records, |m| m.created_at);
        records
    }
}

pub type ContactMessageStore = LocalStore<ContactMessages>;

impl LocalStore<ContactMessages> {
    /// Flip the read flag. Returns false when no message has this id.
    pub fn mark_read(&self, id: &str, read: bool) -> StoreResult<bool> {
        let found = self.try_modify(|records| {
            records.iter_mut().find(|m| m.id == id).map(|message| message.read = read)
        })?;
        Ok(found.is_some())
    }

    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self.try_modify(|records| {
            let index = records.iter().position(|m| m.id == id)?;
            Some(records.remove(index))
        })?;
        Ok(removed.is_some())
    }

    pub fn unread_count(&self) -> usize {
        self.read_all().iter().filter(|m| !m.read).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryStorage;
    use crate::events::InProcessBus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_read_flip_and_delete_signal() {
        let bus = Arc::new(InProcessBus::new());
        let store = ContactMessageStore::new(Arc::new(MemoryStorage::new()), bus.clone());
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        bus.subscribe(StoreSignal::ContactMessagesUpdated, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let unread = store.unread_count();
        let target = store.read_all().into_iter().find(|m| !m.read).unwrap();
        assert!(store.mark_read(&target.id, true).unwrap());
        assert_eq!(store.unread_count(), unread - 1);
        assert!(store.mark_read(&target.id, false).unwrap());
        assert_eq!(store.unread_count(), unread);

        assert!(store.delete(&target.id).unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 3);

        assert!(!store.mark_read(&target.id, true).unwrap());
        assert!(!store.delete(&target.id).unwrap());
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }
}
