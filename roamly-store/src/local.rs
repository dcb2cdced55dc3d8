//! Versioned local store: one JSON array per collection in a key-value
//! backend, seeded on first read and broadcast on every write.

use chrono::{DateTime, Utc};
use roamly_core::{KeyValueStore, SignalBus, StorageError};
use roamly_shared::StoreSignal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{StoreError, StoreResult};

/// Version tag persisted next to a collection.
///
/// Bump `value` whenever the seed schema changes incompatibly; stored data
/// with any other tag is discarded and reseeded on the next read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaVersion {
    pub key: &'static str,
    pub value: &'static str,
}

/// Describes one persisted collection.
pub trait Collection: Send + Sync + 'static {
    type Record: Serialize + DeserializeOwned + Clone + Send + Sync;

    /// Label used in log lines
    const NAME: &'static str;

    /// Backing key holding the serialized array
    const KEY: &'static str;

    const SIGNAL: StoreSignal;

    const SCHEMA: Option<SchemaVersion> = None;

    /// Built-in dataset used when nothing usable is persisted
    fn seed() -> Vec<Self::Record>;

    /// Re-derive computed fields and re-sort.
    fn normalize(records: Vec<Self::Record>) -> Vec<Self::Record> {
        records
    }

    /// Parse the persisted payload.
    fn decode(raw: &str) -> Result<Vec<Self::Record>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// Sort records newest first by `timestamp`, keeping input order on ties.
pub fn sort_newest_first<R, F>(records: &mut [R], timestamp: F)
where
    F: Fn(&R) -> DateTime<Utc>,
{
    records.sort_by(|a, b| timestamp(b).cmp(&timestamp(a)));
}

/// Store for one collection over injected storage and signal ports.
///
/// Every mutation is a read-modify-write of the whole collection; the last
/// writer wins.
pub struct LocalStore<C: Collection> {
    storage: Arc<dyn KeyValueStore>,
    bus: Arc<dyn SignalBus>,
    _collection: PhantomData<C>,
}

impl<C: Collection> Clone for LocalStore<C> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            bus: self.bus.clone(),
            _collection: PhantomData,
        }
    }
}

impl<C: Collection> LocalStore<C> {
    pub fn new(storage: Arc<dyn KeyValueStore>, bus: Arc<dyn SignalBus>) -> Self {
        Self {
            storage,
            bus,
            _collection: PhantomData,
        }
    }

    /// All records, in the collection's order.
    ///
    /// Absent, corrupt or outdated data is replaced by the seed, which is
    /// persisted. Without a backing store the seed is returned as-is.
    pub fn read_all(&self) -> Vec<C::Record> {
        match self.load() {
            Ok(Some(records)) => return C::normalize(records),
            Ok(None) => {}
            Err(StorageError::Unavailable) => {
                debug!("{}: storage unavailable, serving seed read-only", C::NAME);
                return C::normalize(C::seed());
            }
            Err(e) => {
                warn!("{}: failed to read storage, serving seed: {}", C::NAME, e);
                return C::normalize(C::seed());
            }
        }

        let seeded = C::normalize(C::seed());
        if let Err(e) = self.persist(&seeded) {
            warn!("{}: failed to persist seed: {}", C::NAME, e);
        } else {
            debug!("{}: seeded {} records", C::NAME, seeded.len());
        }
        seeded
    }

    /// Normalize, persist and broadcast.
    ///
    /// Returns the records as stored. Without a backing store the write is
    /// dropped and no signal is emitted.
    pub fn write(&self, records: Vec<C::Record>) -> StoreResult<Vec<C::Record>> {
        let records = C::normalize(records);
        match self.persist(&records) {
            Ok(()) => {}
            Err(StoreError::Storage(StorageError::Unavailable)) => {
                debug!("{}: storage unavailable, write dropped", C::NAME);
                return Ok(records);
            }
            Err(e) => return Err(e),
        }
        debug!("{}: wrote {} records", C::NAME, records.len());
        self.bus.emit(C::SIGNAL);
        Ok(records)
    }

    /// Read, apply `change`, write back. Returns whatever `change` returns.
    pub fn modify<T, F>(&self, change: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Vec<C::Record>) -> T,
    {
        let mut records = self.read_all();
        let outcome = change(&mut records);
        self.write(records)?;
        Ok(outcome)
    }

    /// Like [`modify`](Self::modify), but writes and signals only when
    /// `change` returns `Some`.
    pub fn try_modify<T, F>(&self, change: F) -> StoreResult<Option<T>>
    where
        F: FnOnce(&mut Vec<C::Record>) -> Option<T>,
    {
        let mut records = self.read_all();
        let Some(outcome) = change(&mut records) else {
            return Ok(None);
        };
        self.write(records)?;
        Ok(Some(outcome))
    }

    /// Drop persisted data and reseed.
    pub fn reset(&self) -> StoreResult<Vec<C::Record>> {
        self.write(C::seed())
    }

    /// Persisted records, or `None` when they are missing, unparsable or
    /// carry a different schema version.
    fn load(&self) -> Result<Option<Vec<C::Record>>, StorageError> {
        if let Some(schema) = C::SCHEMA {
            let stored = self.storage.get(schema.key)?;
            if stored.as_deref() != Some(schema.value) {
                debug!(
                    "{}: schema version {:?} does not match {}, reseeding",
                    C::NAME,
                    stored,
                    schema.value
                );
                return Ok(None);
            }
        }

        let Some(raw) = self.storage.get(C::KEY)? else {
            return Ok(None);
        };

        match C::decode(&raw) {
            Ok(records) => Ok(Some(records)),
            Err(e) => {
                debug!("{}: discarding unparsable payload: {}", C::NAME, e);
                Ok(None)
            }
        }
    }

    fn persist(&self, records: &[C::Record]) -> StoreResult<()> {
        let payload = serde_json::to_string(records)?;
        self.storage.set(C::KEY, &payload)?;
        if let Some(schema) = C::SCHEMA {
            self.storage.set(schema.key, schema.value)?;
        }
        Ok(())
    }
}
