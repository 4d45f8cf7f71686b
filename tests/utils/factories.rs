/// Test data factories using builder pattern
///
/// Provides convenient methods to create catalog records with sensible defaults
use sagasu::{CatalogRecord, RecordTitle};

pub struct RecordFactory {
    id: String,
    raw: Option<String>,
    alternate: Option<String>,
    original: Option<String>,
    synonyms: Vec<String>,
    rating: Option<f32>,
    year: Option<i32>,
    kind: Option<String>,
    genres: Vec<String>,
}

impl Default for RecordFactory {
    fn default() -> Self {
        Self {
            id: "test-record".to_string(),
            raw: Some("Test Title".to_string()),
            alternate: None,
            original: None,
            synonyms: Vec::new(),
            rating: None,
            year: None,
            kind: None,
            genres: Vec::new(),
        }
    }
}

impl RecordFactory {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_raw(mut self, raw: &str) -> Self {
        self.raw = Some(raw.to_string());
        self
    }

    pub fn without_titles(mut self) -> Self {
        self.raw = None;
        self.alternate = None;
        self.original = None;
        self.synonyms.clear();
        self
    }

    pub fn with_alternate(mut self, alternate: &str) -> Self {
        self.alternate = Some(alternate.to_string());
        self
    }

    pub fn with_original(mut self, original: &str) -> Self {
        self.original = Some(original.to_string());
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<&str>) -> Self {
        self.synonyms = synonyms.into_iter().map(str::to_string).collect();
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_genres(mut self, genres: Vec<&str>) -> Self {
        self.genres = genres.into_iter().map(str::to_string).collect();
        self
    }

    pub fn build(self) -> CatalogRecord {
        let title = RecordTitle {
            raw: self.raw,
            alternate: self.alternate,
            original: self.original,
            synonyms: self.synonyms,
        };

        let mut record = CatalogRecord::new(self.id, title);
        record.rating = self.rating;
        record.year = self.year;
        record.kind = self.kind;
        record.genres = self.genres;
        record
    }
}

/// Multilingual catalog shared by the pipeline tests
pub fn demo_catalog() -> Vec<CatalogRecord> {
    vec![
        RecordFactory::new("naruto")
            .with_raw("Наруто")
            .with_alternate("Naruto")
            .with_rating(8.0)
            .with_year(2002)
            .with_kind("tv")
            .with_genres(vec!["Action", "Shounen"])
            .build(),
        RecordFactory::new("shippuden")
            .with_raw("Наруто: Ураганные хроники")
            .with_alternate("Naruto Shippuden")
            .with_rating(8.2)
            .with_year(2007)
            .with_kind("tv")
            .with_genres(vec!["Action", "Shounen"])
            .build(),
        RecordFactory::new("boruto")
            .with_raw("Боруто: Новое поколение Наруто")
            .with_alternate("Boruto: Naruto Next Generations")
            .with_rating(5.9)
            .with_year(2017)
            .with_kind("tv")
            .with_genres(vec!["Action"])
            .build(),
        RecordFactory::new("titan")
            .with_raw("Атака титанов")
            .with_alternate("Attack on Titan")
            .with_original("Shingeki no Kyojin")
            .with_synonyms(vec!["進撃の巨人"])
            .with_rating(8.5)
            .with_year(2013)
            .with_kind("tv")
            .with_genres(vec!["Action", "Drama"])
            .build(),
        RecordFactory::new("vinland")
            .with_raw("Сага о Винланде")
            .with_alternate("Vinland Saga")
            .with_rating(8.8)
            .with_year(2019)
            .with_kind("tv")
            .with_genres(vec!["Action", "History"])
            .build(),
        RecordFactory::new("fate")
            .with_raw("Fate/Zero")
            .with_rating(8.3)
            .with_year(2011)
            .with_kind("tv")
            .with_genres(vec!["Action", "Fantasy"])
            .build(),
    ]
}
