/// Normalizes raw text into the canonical form used for every comparison.
///
/// Lowercases with Unicode case folding (Cyrillic and Latin fold
/// consistently), turns every character that is not a letter, digit or
/// whitespace into a single space, then collapses whitespace runs and trims.
/// Stripped characters become separators instead of vanishing, so
/// "Fate/Zero" normalizes to "fate zero" rather than fusing into one word.
///
/// Returns an empty string for empty input. Pure, deterministic and
/// idempotent.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_latin_and_cyrillic() {
        assert_eq!(normalize("NARUTO"), "naruto");
        assert_eq!(normalize("Сага о Винланде"), "сага о винланде");
    }

    #[test]
    fn test_punctuation_becomes_separator() {
        assert_eq!(normalize("Fate/Zero"), "fate zero");
        assert_eq!(normalize("Re:Zero"), "re zero");
        assert_eq!(normalize("K-On!"), "k on");
    }

    #[test]
    fn test_whitespace_collapses_and_trims() {
        assert_eq!(normalize("  attack   on\ttitan  "), "attack on titan");
    }

    #[test]
    fn test_digits_are_kept() {
        assert_eq!(normalize("Mob Psycho 100"), "mob psycho 100");
    }

    #[test]
    fn test_empty_input_yields_empty_string() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_japanese_characters_survive() {
        assert_eq!(normalize("進撃の巨人"), "進撃の巨人");
    }

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(normalize("Ван-Пис (One Piece)"), "ван пис one piece");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("Стальной алхимик: Братство!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_deterministic() {
        let a = normalize("Bleach: Thousand-Year Blood War");
        let b = normalize("Bleach: Thousand-Year Blood War");
        assert_eq!(a, b);
    }
}
