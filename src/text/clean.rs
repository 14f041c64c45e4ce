//! Article text normalization.
//!
//! Cleaning keeps ASCII letters, digits and the Latin-1 letters
//! (`À`..=`ÿ` minus `×` and `÷`), collapses whitespace runs to a single
//! space and lowercases.

use regex::Regex;
use std::sync::LazyLock;

/// Everything that is not a kept character or whitespace.
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^A-Za-z\x{00C0}-\x{00D6}\x{00D8}-\x{00F6}\x{00F8}-\x{00FF}0-9\s]+").unwrap()
});

/// Runs of whitespace of any kind.
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean a possibly missing field value.
///
/// Missing values map to the empty string. Symbols are stripped before
/// whitespace is collapsed so that removing a symbol between two spaces
/// cannot leave a double space behind; this keeps the function idempotent.
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let stripped = DISALLOWED.replace_all(text, "");
    let collapsed = WHITESPACE.replace_all(&stripped, " ");
    collapsed.to_lowercase()
}

/// Whether cleaned text carries nothing to analyze.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Whether a character may appear in cleaned output.
pub fn is_clean_char(c: char) -> bool {
    c == ' '
        || c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || (is_latin1_letter(c) && !c.is_uppercase())
}

/// `À`..=`ÿ` without the multiplication and division signs.
fn is_latin1_letter(c: char) -> bool {
    ('\u{00C0}'..='\u{00FF}').contains(&c) && c != '\u{00D7}' && c != '\u{00F7}'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_is_empty() {
        assert_eq!(clean_text(None), "");
    }

    #[test]
    fn test_lowercases_and_strips_symbols() {
        assert_eq!(clean_text(Some("I love this!")), "i love this");
        assert_eq!(
            clean_text(Some("Kota Kinabalu, Sabah: 2024 floods...")),
            "kota kinabalu sabah 2024 floods"
        );
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text(Some("one \t two\n\nthree")), "one two three");
    }

    #[test]
    fn test_symbol_between_spaces_leaves_single_space() {
        assert_eq!(clean_text(Some("left - right")), "left right");
        assert_eq!(clean_text(Some("a ! ? b")), "a b");
    }

    #[test]
    fn test_keeps_accented_latin() {
        assert_eq!(clean_text(Some("Café Déjà Vu")), "café déjà vu");
        assert_eq!(clean_text(Some("ÀÉÎÕÜ")), "àéîõü");
    }

    #[test]
    fn test_drops_latin1_math_signs() {
        assert_eq!(clean_text(Some("5 × 3 ÷ 2")), "5 3 2");
        assert!(!is_clean_char('×'));
        assert!(!is_clean_char('÷'));
        assert!(is_clean_char('ß'));
    }

    #[test]
    fn test_drops_non_latin_scripts() {
        assert_eq!(clean_text(Some("hello 世界")), "hello ");
        assert_eq!(clean_text(Some("doğru yol")), "doru yol");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  Leading and trailing  ",
            "Mixed\tCASE -- with ### symbols & numbers 42",
            "Ñandú, über, façade; naïve!",
            "Berita: Harga minyak naik 5% hari ini.",
            "",
            "   ",
            "a ! b",
        ];
        for sample in samples {
            let once = clean_text(Some(sample));
            let twice = clean_text(Some(&once));
            assert_eq!(once, twice, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_output_alphabet() {
        let samples = [
            "Hello, World! 123",
            "Ça va?\r\n  Très bien…",
            "tabs\tand\u{00A0}nbsp",
            "emoji 🎉 and — dashes",
            "2 × 4 ÷ 8 = 1",
        ];
        for sample in samples {
            let cleaned = clean_text(Some(sample));
            assert!(cleaned.chars().all(is_clean_char), "bad char in {:?}", cleaned);
            assert!(!cleaned.contains("  "), "double space in {:?}", cleaned);
        }
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" "));
        assert!(!is_blank("x"));
    }
}
