use roamly_catalog::tour::normalize_plan;
use roamly_catalog::{Tour, TourDraft};
use roamly_core::new_record_id;
use roamly_shared::StoreSignal;
use tracing::{info, warn};

use crate::local::{Collection, LocalStore, SchemaVersion};
use crate::{seeds, StoreResult};

pub struct TourCatalog;

impl Collection for TourCatalog {
    type Record = Tour;
    const NAME: &'static str = "tours_catalog";
    const KEY: &'static str = "roamly_tours_catalog";
    const SIGNAL: StoreSignal = StoreSignal::ToursUpdated;
    const SCHEMA: Option<SchemaVersion> = Some(SchemaVersion {
        key: "roamly_tours_catalog_version",
        value: "3",
    });

    fn seed() -> Vec<Tour> {
        seeds::tours()
    }

    /// Catalog order is kept; only the plan/duration invariant is re-applied.
    fn normalize(records: Vec<Tour>) -> Vec<Tour> {
        records
            .into_iter()
            .map(|mut tour| {
                tour.duration = tour.duration.max(1);
                tour.plan = normalize_plan(std::mem::take(&mut tour.plan), tour.duration, &tour.destination);
                tour
            })
            .collect()
    }

    /// Only a payload that is not a JSON array fails; entries that do not
    /// parse or validate are dropped one by one.
    fn decode(raw: &str) -> Result<Vec<Tour>, serde_json::Error> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
        Ok(entries.into_iter().filter_map(decode_entry).collect())
    }
}

fn decode_entry(entry: serde_json::Value) -> Option<Tour> {
    let id = entry.get("id").and_then(|v| v.as_str()).unwrap_or_default().to_string();
    serde_json::from_value::<TourDraft>(entry)
        .map_err(|e| warn!("Dropping unreadable stored tour '{}': {}", id, e))
        .ok()
        .and_then(|draft| {
            Tour::from_draft(draft)
                .map_err(|e| warn!("Dropping invalid stored tour '{}': {}", id, e))
                .ok()
        })
}

pub type TourCatalogStore = LocalStore<TourCatalog>;

impl LocalStore<TourCatalog> {
    pub fn find(&self, id: &str) -> Option<Tour> {
        self.read_all().into_iter().find(|t| t.id == id)
    }

    /// Validate and insert or replace a tour.
    ///
    /// A draft without an id gets a fresh one and is appended.
    pub fn upsert(&self, mut draft: TourDraft) -> StoreResult<Tour> {
        if draft.id.as_deref().map(str::trim).unwrap_or_default().is_empty() {
            draft.id = Some(new_record_id("TOUR").to_lowercase());
        }
        let tour = Tour::from_draft(draft)?;
        let saved = tour.clone();
        let replaced = self.modify(move |records| match records.iter_mut().find(|t| t.id == tour.id) {
            Some(existing) => {
                *existing = tour;
                true
            }
            None => {
                records.push(tour);
                false
            }
        })?;
        info!(
            "Tour {} {} ({})",
            saved.id,
            if replaced { "updated" } else { "added" },
            saved.location()
        );
        Ok(saved)
    }

    /// Returns false when no tour has this id
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let removed = self.try_modify(|records| {
            let index = records.iter().position(|t| t.id == id)?;
            Some(records.remove(index))
        })?;
        Ok(removed.is_some())
    }
}
