// Word-frequency tables. Data lives under assets/lexicon/ as
// newline-delimited, frequency-ordered bands; only membership is probed.

use lazy_static::lazy_static;
use std::collections::HashSet;

const RANK_1K: &str = include_str!("../../assets/lexicon/rank_00001_01000.txt");
const RANK_5K: &str = include_str!("../../assets/lexicon/rank_01001_05000.txt");
const RANK_20K: &str = include_str!("../../assets/lexicon/rank_05001_20000.txt");

fn entries(raw: &'static str) -> impl Iterator<Item = &'static str> {
    raw.lines().map(str::trim).filter(|line| !line.is_empty())
}

lazy_static! {
    /// Top 1,000 English lemmas.
    pub static ref COMMON_WORDS_1K: HashSet<&'static str> = entries(RANK_1K).collect();

    /// Top 5,000 English lemmas (superset of the 1K table).
    pub static ref COMMON_WORDS_5K: HashSet<&'static str> =
        entries(RANK_1K).chain(entries(RANK_5K)).collect();

    /// Top 20,000 English lemmas (superset of the 5K table).
    pub static ref COMMON_WORDS_20K: HashSet<&'static str> = entries(RANK_1K)
        .chain(entries(RANK_5K))
        .chain(entries(RANK_20K))
        .collect();
}

/// Membership probe against the top-1K table. Callers pass the lowercased,
/// letters-only form of the word.
pub fn in_top_1k(word: &str) -> bool {
    COMMON_WORDS_1K.contains(word)
}

pub fn in_top_5k(word: &str) -> bool {
    COMMON_WORDS_5K.contains(word)
}

pub fn in_top_20k(word: &str) -> bool {
    COMMON_WORDS_20K.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_words_are_top_1k() {
        for word in ["the", "and", "of", "to", "because", "which"] {
            assert!(in_top_1k(word), "{} should be in the 1K table", word);
        }
    }

    #[test]
    fn test_tables_are_cumulative() {
        for word in COMMON_WORDS_1K.iter() {
            assert!(COMMON_WORDS_5K.contains(word));
            assert!(COMMON_WORDS_20K.contains(word));
        }
        for word in COMMON_WORDS_5K.iter() {
            assert!(COMMON_WORDS_20K.contains(word));
        }
    }

    #[test]
    fn test_band_membership() {
        // "elephant" sits in the 1K-5K band, "paradigm" in the 5K-20K band.
        assert!(!in_top_1k("elephant"));
        assert!(in_top_5k("elephant"));
        assert!(!in_top_5k("paradigm"));
        assert!(in_top_20k("paradigm"));
    }

    #[test]
    fn test_rare_word_absent() {
        assert!(!in_top_20k("sesquipedalian"));
    }

    #[test]
    fn test_probe_is_case_sensitive() {
        // Tables hold lowercase lemmas; callers normalize before probing.
        assert!(!in_top_1k("The"));
    }
}
