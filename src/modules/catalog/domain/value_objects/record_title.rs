use serde::{Deserialize, Serialize};

/// Title fields of a catalog record as delivered by providers.
///
/// Sources disagree on which spellings they carry, so every field is
/// optional. A record whose fields are all empty cannot be searched or
/// deduplicated and passes through the pipeline untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordTitle {
    /// Primary title as stored by the source, season markers included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// Dedicated localized spelling, when the source has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<String>,
    /// Original-language or romanized spelling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    /// Remaining alternative spellings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
}

impl RecordTitle {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Default::default()
        }
    }

    pub fn with_alternate(mut self, alternate: impl Into<String>) -> Self {
        self.alternate = Some(alternate.into());
        self
    }

    pub fn with_original(mut self, original: impl Into<String>) -> Self {
        self.original = Some(original.into());
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<String>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// All non-blank spellings in precedence order: raw, alternate,
    /// original, then synonyms.
    pub fn variants(&self) -> Vec<&str> {
        let mut variants = Vec::new();
        for field in [&self.raw, &self.alternate, &self.original] {
            if let Some(value) = field {
                if !value.trim().is_empty() {
                    variants.push(value.as_str());
                }
            }
        }
        variants.extend(
            self.synonyms
                .iter()
                .filter(|synonym| !synonym.trim().is_empty())
                .map(String::as_str),
        );
        variants
    }

    /// True when no field carries any title text
    pub fn is_blank(&self) -> bool {
        self.variants().is_empty()
    }
}
