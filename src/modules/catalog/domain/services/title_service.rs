use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::entities::CatalogRecord;
use crate::shared::AppResult;

/// Season-marker spellings stripped from the end of titles. Every pattern
/// must capture the season number as group 1.
pub const SEASON_MARKER_PATTERNS: &[&str] = &[
    r"(?i)\s*\[\s*(?:tv|тв)\s*-?\s*(\d+)\s*\]\s*$",
    r"(?i)\s*\(\s*(?:tv|тв)\s*-?\s*(\d+)\s*\)\s*$",
];

static DEFAULT_MARKERS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SEASON_MARKER_PATTERNS
        .iter()
        .map(|pattern| Regex::new(pattern).expect("valid season marker regex"))
        .collect()
});

/// Script family used to pick a localized spelling from the synonym list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TitleScript {
    Cyrillic,
    Latin,
    Japanese,
}

impl TitleScript {
    /// True when any character of the text belongs to this script
    pub fn matches(&self, text: &str) -> bool {
        match self {
            TitleScript::Cyrillic => text
                .chars()
                .any(|c| ('\u{0400}'..='\u{04FF}').contains(&c)),
            TitleScript::Latin => text.chars().any(|c| c.is_ascii_alphabetic()),
            TitleScript::Japanese => text.chars().any(|c| {
                ('\u{3040}'..='\u{30FF}').contains(&c) || ('\u{4E00}'..='\u{9FAF}').contains(&c)
            }),
        }
    }
}

/// Chooses display titles and strips season-marker artifacts.
///
/// Providers store season markers like "[ТВ-2]" inside the title text
/// itself. For display the marker is replaced by a plain season number, so
/// "Сага о Винланде [ТВ-2]" becomes "Сага о Винланде 2".
pub struct TitleService {
    markers: Vec<Regex>,
    script: TitleScript,
}

impl TitleService {
    pub fn new() -> Self {
        Self {
            markers: DEFAULT_MARKERS.clone(),
            script: TitleScript::Cyrillic,
        }
    }

    /// Replace the accepted marker patterns. Each pattern must compile and
    /// capture the season number as group 1.
    pub fn with_patterns(patterns: &[&str]) -> AppResult<Self> {
        let markers = patterns
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            markers,
            script: TitleScript::Cyrillic,
        })
    }

    pub fn with_script(mut self, script: TitleScript) -> Self {
        self.script = script;
        self
    }

    /// Strip a trailing season marker, if any
    pub fn clean_season_markers(&self, title: &str) -> String {
        self.extract_season(title).0
    }

    /// Cleaned title plus the season number carried by its marker
    pub fn extract_season(&self, title: &str) -> (String, Option<u32>) {
        for pattern in &self.markers {
            if let Some(captures) = pattern.captures(title) {
                let season = captures
                    .get(1)
                    .and_then(|group| group.as_str().parse::<u32>().ok());
                let cleaned = pattern.replace(title, "").trim().to_string();
                log::trace!(
                    "TITLE: '{}' -> '{}' (season {:?})",
                    title,
                    cleaned,
                    season
                );
                return (cleaned, season);
            }
        }
        (title.trim().to_string(), None)
    }

    /// Best display title for a record.
    ///
    /// Preference order: the alternate spelling when it differs from the raw
    /// title, then the first synonym in the preferred script, then the
    /// cleaned raw title, then the original spelling, then any remaining
    /// synonym. A season number above 1 taken from the raw title's marker is
    /// appended, unless the chosen spelling already ends in a bare number.
    /// Returns `None` only when the record carries no title text at all.
    pub fn best_title(&self, record: &CatalogRecord) -> Option<String> {
        let title = &record.title;
        let raw = title.raw.as_deref().filter(|t| !t.trim().is_empty());

        let (cleaned_raw, season) = match raw {
            Some(raw) => {
                let (cleaned, season) = self.extract_season(raw);
                let cleaned = if cleaned.is_empty() { None } else { Some(cleaned) };
                (cleaned, season)
            }
            None => (None, None),
        };

        let alternate = title
            .alternate
            .as_deref()
            .filter(|alt| raw.map_or(true, |r| *alt != r));

        let base = alternate
            .and_then(|alt| self.cleaned_nonblank(alt))
            .or_else(|| {
                title
                    .synonyms
                    .iter()
                    .find(|synonym| self.script.matches(synonym))
                    .and_then(|synonym| self.cleaned_nonblank(synonym))
            })
            .or(cleaned_raw)
            .or_else(|| {
                title
                    .original
                    .as_deref()
                    .and_then(|orig| self.cleaned_nonblank(orig))
            })
            .or_else(|| {
                title
                    .synonyms
                    .iter()
                    .find_map(|synonym| self.cleaned_nonblank(synonym))
            })?;

        match season {
            Some(season) if season > 1 && !ends_with_bare_number(&base) => {
                Some(format!("{} {}", base, season))
            }
            _ => Some(base),
        }
    }

    /// Cleaned spelling, or `None` when nothing but a marker was left
    fn cleaned_nonblank(&self, text: &str) -> Option<String> {
        let cleaned = self.clean_season_markers(text);
        if cleaned.is_empty() {
            None
        } else {
            Some(cleaned)
        }
    }
}

impl Default for TitleService {
    fn default() -> Self {
        Self::new()
    }
}

/// True when the last whitespace-separated word is all digits
fn ends_with_bare_number(title: &str) -> bool {
    title
        .split_whitespace()
        .next_back()
        .map_or(false, |word| word.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::value_objects::RecordTitle;

    fn record(title: RecordTitle) -> CatalogRecord {
        CatalogRecord::new("test", title)
    }

    #[test]
    fn test_clean_strips_trailing_cyrillic_marker() {
        let service = TitleService::new();
        assert_eq!(
            service.clean_season_markers("Show Title [ТВ-2]"),
            "Show Title"
        );
    }

    #[test]
    fn test_clean_strips_latin_and_parenthesized_markers() {
        let service = TitleService::new();
        assert_eq!(service.clean_season_markers("Naruto [TV-2]"), "Naruto");
        assert_eq!(service.clean_season_markers("Bleach (TV-3)"), "Bleach");
    }

    #[test]
    fn test_clean_ignores_case_and_spacing() {
        let service = TitleService::new();
        assert_eq!(service.clean_season_markers("Шоу [тв-2]"), "Шоу");
        assert_eq!(service.clean_season_markers("Show [ Tv - 4 ]"), "Show");
    }

    #[test]
    fn test_marker_in_the_middle_is_kept() {
        let service = TitleService::new();
        assert_eq!(
            service.clean_season_markers("Naruto [ТВ-2] Special"),
            "Naruto [ТВ-2] Special"
        );
    }

    #[test]
    fn test_extract_season_returns_cleaned_title_and_number() {
        let service = TitleService::new();
        assert_eq!(
            service.extract_season("Show Title [ТВ-2]"),
            ("Show Title".to_string(), Some(2))
        );
        assert_eq!(
            service.extract_season("Naruto"),
            ("Naruto".to_string(), None)
        );
    }

    #[test]
    fn test_best_title_appends_season_above_one() {
        let service = TitleService::new();
        let rec = record(RecordTitle::new("Show Title [ТВ-2]"));
        assert_eq!(service.best_title(&rec), Some("Show Title 2".to_string()));
    }

    #[test]
    fn test_best_title_skips_suffix_for_first_season() {
        let service = TitleService::new();
        let rec = record(RecordTitle::new("Naruto [ТВ-1]"));
        assert_eq!(service.best_title(&rec), Some("Naruto".to_string()));
    }

    #[test]
    fn test_best_title_prefers_distinct_alternate() {
        let service = TitleService::new();
        let rec = record(RecordTitle::new("Naruto [ТВ-2]").with_alternate("Наруто"));
        assert_eq!(service.best_title(&rec), Some("Наруто 2".to_string()));
    }

    #[test]
    fn test_best_title_ignores_alternate_equal_to_raw() {
        let service = TitleService::new();
        let rec = record(RecordTitle::new("Наруто").with_alternate("Наруто"));
        assert_eq!(service.best_title(&rec), Some("Наруто".to_string()));
    }

    #[test]
    fn test_best_title_falls_back_to_preferred_script_synonym() {
        let service = TitleService::new();
        let rec = record(
            RecordTitle::new("Vinland Saga")
                .with_synonyms(vec!["Vinland".to_string(), "Сага о Винланде".to_string()]),
        );
        assert_eq!(
            service.best_title(&rec),
            Some("Сага о Винланде".to_string())
        );
    }

    #[test]
    fn test_best_title_respects_script_preference() {
        let service = TitleService::new().with_script(TitleScript::Latin);
        let rec = record(
            RecordTitle::new("ワンパンマン")
                .with_synonyms(vec!["Ванпанчмен".to_string(), "One Punch Man".to_string()]),
        );
        assert_eq!(service.best_title(&rec), Some("One Punch Man".to_string()));
    }

    #[test]
    fn test_best_title_never_doubles_a_trailing_number() {
        let service = TitleService::new();
        let rec = record(RecordTitle::new("Show 2 [ТВ-2]"));
        assert_eq!(service.best_title(&rec), Some("Show 2".to_string()));
    }

    #[test]
    fn test_best_title_for_blank_record_is_none() {
        let service = TitleService::new();
        let rec = record(RecordTitle::default());
        assert_eq!(service.best_title(&rec), None);
    }

    #[test]
    fn test_best_title_survives_marker_only_raw() {
        let service = TitleService::new();
        let rec = record(RecordTitle {
            raw: Some("[ТВ-2]".to_string()),
            alternate: None,
            original: Some("Kimetsu no Yaiba".to_string()),
            synonyms: vec![],
        });
        assert_eq!(
            service.best_title(&rec),
            Some("Kimetsu no Yaiba 2".to_string())
        );
    }

    #[test]
    fn test_custom_patterns_must_compile() {
        let result = TitleService::with_patterns(&[r"[unclosed"]);
        assert!(result.is_err());

        let service = TitleService::with_patterns(&[r"(?i)\s*s(\d+)\s*$"]).unwrap();
        assert_eq!(
            service.extract_season("Overlord S4"),
            ("Overlord".to_string(), Some(4))
        );
    }

    #[test]
    fn test_script_detection_covers_all_families() {
        assert!(TitleScript::Cyrillic.matches("Наруто"));
        assert!(!TitleScript::Cyrillic.matches("Naruto"));
        assert!(TitleScript::Latin.matches("Naruto"));
        assert!(TitleScript::Japanese.matches("進撃の巨人"));
        assert!(TitleScript::Japanese.matches("ナルト"));
        assert!(!TitleScript::Japanese.matches("Attack on Titan"));
    }
}
