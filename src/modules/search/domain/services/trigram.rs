use std::collections::HashSet;

/// Boundary sentinels wrapped around the input before windowing, so that
/// prefix and suffix trigrams are distinguishable from interior ones.
const LEADING_SENTINEL: char = '<';
const TRAILING_SENTINEL: char = '>';

/// Builds the set of 3-character windows over a sentinel-bounded string.
///
/// Expects already-normalized text (see `text_normalizer::normalize`); the
/// generator does not re-normalize. The sentinels let short strings still
/// produce useful trigrams: "go" yields {"<go", "go>"}. Duplicate windows
/// collapse into the set. Empty input yields an empty set.
pub fn trigram_set(text: &str) -> HashSet<String> {
    if text.is_empty() {
        return HashSet::new();
    }

    let mut bounded: Vec<char> = Vec::with_capacity(text.chars().count() + 2);
    bounded.push(LEADING_SENTINEL);
    bounded.extend(text.chars());
    bounded.push(TRAILING_SENTINEL);

    bounded
        .windows(3)
        .map(|window| window.iter().collect::<String>())
        .collect()
}
