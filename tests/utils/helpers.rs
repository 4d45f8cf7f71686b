/// Test helper functions
use std::sync::Once;

use sagasu::{CatalogRecord, SearchHit};

static INIT: Once = Once::new();

/// Initialize logging once for the whole test binary
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Record ids of hits in rank order
pub fn hit_ids<'a>(hits: &[SearchHit<'a, CatalogRecord>]) -> Vec<&'a str> {
    hits.iter().map(|hit| hit.record.id.as_str()).collect()
}

/// Record ids of a catalog in stored order
pub fn record_ids(records: &[CatalogRecord]) -> Vec<&str> {
    records.iter().map(|record| record.id.as_str()).collect()
}
