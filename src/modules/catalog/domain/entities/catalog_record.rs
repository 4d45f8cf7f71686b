use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::modules::catalog::domain::value_objects::RecordTitle;
use crate::modules::search::SearchableRecord;

/// One catalog entry assembled from provider metadata.
///
/// The search pipeline reads the title spellings and the rating; year, kind
/// and genres feed the facet cache. Everything else a provider sent rides
/// along untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    pub id: String,
    #[serde(default)]
    pub title: RecordTitle,
    /// Provider quality score, used to pick a survivor when records collide
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Format tag such as "tv", "movie" or "ova"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    /// Provider payload the pipeline never interprets
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl CatalogRecord {
    pub fn new(id: impl Into<String>, title: RecordTitle) -> Self {
        Self {
            id: id.into(),
            title,
            ..Default::default()
        }
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }
}

impl SearchableRecord for CatalogRecord {
    fn searchable_fields(&self) -> Vec<&str> {
        self.title.variants()
    }
}
