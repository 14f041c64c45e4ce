//! Word frequency counting for the per-language word lists.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Tokens of two or more word characters, apostrophes allowed inside.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w[\w']+").unwrap());

/// Common English function words that would otherwise dominate the counts.
static STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "after", "all", "also", "am", "an", "and", "any", "are", "as", "at", "be",
        "because", "been", "before", "being", "but", "by", "can", "could", "did", "do", "does",
        "for", "from", "had", "has", "have", "he", "her", "here", "him", "his", "how", "i", "if",
        "in", "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "not", "of",
        "on", "only", "or", "other", "our", "out", "over", "said", "she", "should", "so", "some",
        "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
        "to", "under", "up", "very", "was", "we", "were", "what", "when", "where", "which",
        "while", "who", "will", "with", "would", "you", "your",
    ]
    .into_iter()
    .collect()
});

/// Count the `top` most frequent words across `texts`.
///
/// Ties are broken alphabetically so output is stable.
pub fn top_words<'a, I>(texts: I, top: usize) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        for token in TOKEN.find_iter(text) {
            let word = token.as_str().to_lowercase();
            if !STOPWORDS.contains(word.as_str()) {
                *counts.entry(word).or_default() += 1;
            }
        }
    }

    let mut words: Vec<(String, usize)> = counts.into_iter().collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(top);
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_orders() {
        let words = top_words(["banjir di sabah", "banjir besar di kota", "the flood"], 3);
        assert_eq!(
            words,
            vec![
                ("banjir".to_string(), 2),
                ("di".to_string(), 2),
                ("besar".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_skips_stopwords_and_single_letters() {
        let words = top_words(["the a x flood"], 10);
        assert_eq!(words, vec![("flood".to_string(), 1)]);
    }
}
