// Word-complexity scoring: frequency-band misses, morphological affixes,
// raw length, acronyms, digits. Clamped to [0, 1].

use lazy_static::lazy_static;
use regex::Regex;

use crate::lexicon;

const PREFIXES: &[&str] = &[
    "un", "pre", "dis", "mis", "non", "anti", "over", "under", "semi", "super", "re", "de", "ex",
    "sub", "inter", "trans", "counter", "multi", "poly",
];

const SUFFIXES: &[&str] = &[
    "tion", "sion", "ness", "ment", "able", "ible", "ful", "less", "ous", "ive", "ly", "ity",
    "ism", "ist", "ize", "ise", "ify", "ical", "ology", "ography",
];

lazy_static! {
    static ref ACRONYM: Regex = Regex::new(r"^[A-Z]{3,}$").unwrap();
}

/// Scores how much extra fixation a word demands. Zero for the most common
/// short words, approaching 1.0 for long, rare, affixed jargon.
pub fn word_complexity(text: &str) -> f64 {
    let letters: String = text.chars().filter(|c| c.is_alphabetic()).collect();
    let lower = letters.to_lowercase();
    let mut score = 0.0;

    if !lower.is_empty() {
        // Frequency-band misses.
        if !lexicon::in_top_5k(&lower) {
            score += 0.25;
            if !lexicon::in_top_20k(&lower) {
                score += 0.15;
            }
        }

        // Morphological affixes, 0.10 each, requiring at least two letters
        // beyond the affix itself.
        if PREFIXES
            .iter()
            .any(|p| lower.starts_with(p) && lower.len() >= p.len() + 2)
        {
            score += 0.10;
        }
        if SUFFIXES
            .iter()
            .any(|s| lower.ends_with(s) && lower.len() >= s.len() + 2)
        {
            score += 0.10;
        }

        // Raw length beyond ten letters, up to 0.15.
        let length = lower.chars().count();
        if length > 10 {
            score += ((length - 10) as f64 * 0.03).min(0.15);
        }

        if ACRONYM.is_match(&letters) {
            score += 0.10;
        }
    }

    if text.chars().any(|c| c.is_ascii_digit()) {
        score += 0.05;
    }

    score.min(1.0)
}
