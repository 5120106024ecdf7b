//! Pure text property functions
//!
//! Total over any input, including the empty string. No state, no I/O.

use std::collections::{BTreeMap, HashSet};

/// Count of Unicode scalar values (NOT bytes)
pub fn length(text: &str) -> usize {
    text.chars().count()
}

/// True iff the lowercased, alphanumeric-only projection of `text` reads the
/// same forwards and backwards. An empty projection (empty input, or input
/// with no alphanumeric characters) counts as palindromic.
pub fn is_palindrome(text: &str) -> bool {
    let cleaned: Vec<char> = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    cleaned.iter().eq(cleaned.iter().rev())
}

/// Number of distinct characters other than the space character.
/// Case-sensitive: 'A' and 'a' are two characters.
pub fn unique_characters(text: &str) -> usize {
    let distinct: HashSet<char> = text.chars().filter(|&c| c != ' ').collect();
    distinct.len()
}

/// Number of maximal runs of non-space characters.
/// Splits on the literal space character ONLY: a run of tabs or newlines
/// with no spaces is one word.
pub fn word_count(text: &str) -> usize {
    text.split(' ').filter(|run| !run.is_empty()).count()
}

/// Occurrence count for every character in `text`, spaces included
pub fn frequency_map(text: &str) -> BTreeMap<char, u64> {
    let mut freq = BTreeMap::new();
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_counts_chars_not_bytes() {
        assert_eq!(length(""), 0);
        assert_eq!(length("hello"), 5);
        assert_eq!(length("héllo"), 5);
    }

    #[test]
    fn palindrome_ignores_case_and_punctuation() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome("racecar"));
        assert!(!is_palindrome("hello"));
    }

    #[test]
    fn palindrome_empty_projection_is_true() {
        assert!(is_palindrome(""));
        assert!(is_palindrome("?!, .:"));
    }

    #[test]
    fn unique_characters_excludes_space_keeps_case() {
        assert_eq!(unique_characters("aabbc"), 3);
        assert_eq!(unique_characters("a a a"), 1);
        assert_eq!(unique_characters("Aa"), 2);
        assert_eq!(unique_characters(""), 0);
    }

    #[test]
    fn word_count_splits_on_literal_space_only() {
        assert_eq!(word_count("  hello   world "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        // Tabs and newlines do not split
        assert_eq!(word_count("a\tb\nc"), 1);
        assert_eq!(word_count("a\tb c"), 2);
    }

    #[test]
    fn frequency_map_counts_every_char() {
        let freq = frequency_map("aab c");
        assert_eq!(freq[&'a'], 2);
        assert_eq!(freq[&'b'], 1);
        assert_eq!(freq[&' '], 1);
        assert_eq!(freq[&'c'], 1);
        assert!(frequency_map("").is_empty());
    }

    #[test]
    fn frequency_map_sums_to_length() {
        for text in ["", "hello world", "héllo  ", "a\tb\nc"] {
            let total: u64 = frequency_map(text).values().sum();
            assert_eq!(total as usize, length(text));
        }
    }
}
