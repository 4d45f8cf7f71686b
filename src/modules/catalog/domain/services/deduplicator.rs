use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::modules::catalog::domain::entities::CatalogRecord;
use crate::modules::catalog::domain::services::TitleService;
use crate::modules::search::normalize;

/// Collapses records that describe the same underlying title.
///
/// Two records collide when their display titles normalize to the same
/// string, so case and punctuation variants merge while different seasons
/// stay apart. Among colliding records the one with the highest rating
/// survives in the slot of the first one seen; unrated records lose to
/// rated ones, and runs on already deduplicated input change nothing.
pub struct CatalogDeduplicator {
    titles: TitleService,
}

impl CatalogDeduplicator {
    pub fn new() -> Self {
        Self {
            titles: TitleService::new(),
        }
    }

    pub fn with_title_service(titles: TitleService) -> Self {
        Self { titles }
    }

    /// Canonical key a record is deduplicated under, if it has title text
    pub fn dedup_key(&self, record: &CatalogRecord) -> Option<String> {
        let best = self.titles.best_title(record)?;
        let key = normalize(&best);
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// One record per canonical title, in first-seen order
    pub fn dedupe(&self, records: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
        let input_count = records.len();
        let mut slots: Vec<Option<CatalogRecord>> = Vec::with_capacity(records.len());
        let mut by_key: HashMap<String, usize> = HashMap::new();

        for record in records {
            match self.dedup_key(&record) {
                // Records without any title text cannot collide
                None => slots.push(Some(record)),
                Some(key) => match by_key.entry(key) {
                    Entry::Vacant(vacant) => {
                        vacant.insert(slots.len());
                        slots.push(Some(record));
                    }
                    Entry::Occupied(occupied) => {
                        let slot = *occupied.get();
                        if let Some(incumbent) = &slots[slot] {
                            if outranks(&record, incumbent) {
                                slots[slot] = Some(record);
                            }
                        }
                    }
                },
            }
        }

        let deduped: Vec<CatalogRecord> = slots.into_iter().flatten().collect();
        log::debug!(
            "DEDUP: {} records -> {} after merging duplicates",
            input_count,
            deduped.len()
        );
        deduped
    }
}

impl Default for CatalogDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Strictly higher rating wins; missing and NaN ratings never replace
fn outranks(challenger: &CatalogRecord, incumbent: &CatalogRecord) -> bool {
    match (challenger.rating, incumbent.rating) {
        (Some(new), Some(old)) => new.partial_cmp(&old) == Some(std::cmp::Ordering::Greater),
        (Some(new), None) => !new.is_nan(),
        (None, _) => false,
    }
}
