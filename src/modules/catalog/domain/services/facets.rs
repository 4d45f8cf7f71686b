use std::collections::BTreeSet;

use serde::Serialize;

use crate::modules::catalog::domain::entities::CatalogRecord;

/// Filter facets computed from one catalog snapshot.
///
/// The caller owns the instance and rebuilds it whenever the snapshot
/// changes; nothing here caches across catalogs. Genres and kinds come out
/// alphabetical, years newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
    genres: Vec<String>,
    years: Vec<i32>,
    kinds: Vec<String>,
}

impl CatalogFacets {
    /// Collect the distinct facet values of a snapshot
    pub fn build(records: &[CatalogRecord]) -> Self {
        let mut genres = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut kinds = BTreeSet::new();

        for record in records {
            for genre in &record.genres {
                let genre = genre.trim();
                if !genre.is_empty() {
                    genres.insert(genre.to_string());
                }
            }
            if let Some(year) = record.year {
                years.insert(year);
            }
            if let Some(kind) = &record.kind {
                let kind = kind.trim();
                if !kind.is_empty() {
                    kinds.insert(kind.to_string());
                }
            }
        }

        log::trace!(
            "FACETS: {} genres, {} years, {} kinds from {} records",
            genres.len(),
            years.len(),
            kinds.len(),
            records.len()
        );

        Self {
            genres: genres.into_iter().collect(),
            years: years.into_iter().rev().collect(),
            kinds: kinds.into_iter().collect(),
        }
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn kinds(&self) -> &[String] {
        &self.kinds
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty() && self.years.is_empty() && self.kinds.is_empty()
    }
}
