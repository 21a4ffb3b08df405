// Token classification heuristics. All of these are deliberately
// approximate; they trade linguistic accuracy for stable, testable behavior.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

use crate::tokenize::token::{EndPunctuation, NumberType};

/// Common abbreviations, matched case-insensitively with any trailing
/// period stripped.
pub const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "rev", "hon", "gen", "col", "lt", "sgt", "phd",
    "md", "ba", "bs", "ma", "mba", "jd", "esq", "dds", "rn", "etc", "eg", "ie", "vs", "viz", "cf",
    "al", "ca", "et", "nb", "ps", "ibid", "st", "ave", "blvd", "rd", "apt", "no", "mt", "ft", "in",
    "lb", "oz", "hr", "min", "sec", "yr", "mo", "wk", "inc", "corp", "ltd", "co", "llc", "plc",
    "am", "pm", "ad", "bc", "ce", "bce", "approx", "dept", "est", "govt", "misc", "natl", "orig",
    "pp", "vol", "fig", "ch",
];

/// Words that open a new phrase; a token is a phrase boundary when the next
/// word's body is one of these. FANBOYS, subordinating conjunctions,
/// sentence adverbs, relative pronouns, contrastive markers.
pub const PHRASE_BOUNDARY_WORDS: &[&str] = &[
    // FANBOYS
    "and", "but", "or", "nor", "for", "yet", "so",
    // Subordinating conjunctions
    "because", "although", "while", "when", "where", "if", "unless", "since", "until", "before",
    "after", "though", "whereas", "whenever", "wherever", "whether", "once", "as",
    // Sentence adverbs
    "however", "therefore", "moreover", "furthermore", "meanwhile", "consequently",
    "nevertheless", "otherwise", "hence", "thus", "instead", "indeed", "besides", "accordingly",
    "similarly", "likewise", "nonetheless", "regardless", "finally", "subsequently",
    // Relative pronouns
    "which", "that", "who", "whom", "whose",
    // Contrastive markers
    "then", "still", "also", "even",
];

/// Very frequent words that read in a single fixation even above two
/// characters.
pub const SHORT_WORDS: &[&str] = &[
    "a", "an", "as", "at", "be", "by", "do", "go", "he", "if", "in", "is", "it", "me", "my", "no",
    "of", "on", "or", "so", "to", "up", "us", "we", "am", "are", "the", "and", "but", "for",
    "not", "you", "all", "can", "had", "her", "was", "one", "our", "out",
];

lazy_static! {
    static ref ABBREVIATION_SET: HashSet<&'static str> = ABBREVIATIONS.iter().copied().collect();
    static ref PHRASE_BOUNDARY_SET: HashSet<&'static str> =
        PHRASE_BOUNDARY_WORDS.iter().copied().collect();
    static ref SHORT_WORD_SET: HashSet<&'static str> = SHORT_WORDS.iter().copied().collect();

    // Abbreviation shapes.
    static ref INITIALISM: Regex = Regex::new(r"^([A-Z]\.){2,}$").unwrap();
    static ref DEGREE_ABBREVIATION: Regex = Regex::new(r"^[A-Z][a-z]?\.[A-Z]\.$").unwrap();
    static ref SINGLE_INITIAL: Regex = Regex::new(r"^[A-Z]\.$").unwrap();
    static ref LOWERCASE_PAIR: Regex = Regex::new(r"^[a-z]\.[a-z]\.$").unwrap();

    // Number shapes, probed in detect_number_type's fixed order.
    static ref BRACKET_CITATION: Regex =
        Regex::new(r"^\[\d+([-–,]\d+)*\]$|^\[[A-Za-z]+\d{4}[a-z]?\]$").unwrap();
    static ref PAREN_CITATION: Regex = Regex::new(
        r"^\([A-Z][a-z]+(\s+et\s+al\.?)?,?\s*\d{4}[a-z]?\)$|^\(see\s+(Fig|Table|Section|Chapter|Eq|Appendix)\.\s*\d+\)$"
    )
    .unwrap();
    static ref CURRENCY: Regex = Regex::new(r"^[$€£¥₹]\d+([.,]\d+)?$").unwrap();
    static ref PERCENT: Regex = Regex::new(r"^\d+\.?\d*%$").unwrap();
    static ref UNIT: Regex = Regex::new(
        r"(?i)^\d+\.?\d*(kg|g|mg|lb|oz|km|m|cm|mm|mi|ft|in|yd|°[cfk]|ml|l|hz|khz|mhz|ghz|mb|gb|tb|kb|mph|kph|rpm|fps|bps|px|pt|em|rem|vw|vh)$"
    )
    .unwrap();
    static ref RANGE: Regex = Regex::new(r"^(pp\.\s*)?\d+[-–]\d+$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^\d+\.\d+$|^\d{1,3}(,\d{3})+(\.\d+)?$").unwrap();
    static ref PLAIN_NUMBER: Regex = Regex::new(r"^\d+$").unwrap();
    static ref TIME_OF_DAY: Regex =
        Regex::new(r"(?i)^\d{1,2}:\d{2}(:\d{2})?\s*(am|pm)?$").unwrap();

    // Identifier casings.
    static ref CAMEL_CASE: Regex = Regex::new(r"^[a-z]+([A-Z][a-z0-9]*)+$").unwrap();
    static ref PASCAL_CASE: Regex = Regex::new(r"^([A-Z][a-z0-9]+){2,}$").unwrap();
    static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z0-9]+(_[a-z0-9]+)+$").unwrap();
    static ref SCREAMING_SNAKE: Regex = Regex::new(r"^[A-Z0-9]+(_[A-Z0-9]+)+$").unwrap();
    static ref KEBAB_CASE: Regex = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)+$").unwrap();
}

const MATH_SYMBOLS: &str = "∑∏∫∂∇√∞±×÷≠≈≤≥∈∉⊂⊃∪∩∧∨¬∀∃";
const OPENING_PUNCTUATION: &str = "([{\u{201C}\u{2018}«\"'";
const CLOSING_PUNCTUATION: &str = ")]}\u{201D}\u{2019}»\"'";

/// Trailing terminator characters stripped before shape matching.
fn strip_trailing_terminators(text: &str) -> &str {
    text.trim_end_matches(|c| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | '…'))
}

/// Word body: surrounding punctuation stripped, interior kept.
pub fn word_body(text: &str) -> &str {
    text.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Lowercased, letters-only form used for lexicon probes and phrase lookups.
pub fn letters_lower(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase()
}

/// Punctuation class read off the last character, before any overrides.
fn raw_end_punctuation(text: &str) -> EndPunctuation {
    match text.trim_end().chars().last() {
        Some('.') | Some('…') => EndPunctuation::Period,
        Some('?') => EndPunctuation::Question,
        Some('!') => EndPunctuation::Exclamation,
        Some(',') => EndPunctuation::Comma,
        Some(';') => EndPunctuation::Semicolon,
        Some(':') => EndPunctuation::Colon,
        _ => EndPunctuation::None,
    }
}

/// Punctuation class with the abbreviation, decimal, and time-of-day
/// overrides applied: "Dr.", "3.14", and "12:30:" do not end anything.
pub fn classify_end_punctuation(text: &str) -> EndPunctuation {
    let raw = raw_end_punctuation(text);
    match raw {
        EndPunctuation::Period => {
            if is_abbreviation(text) {
                return EndPunctuation::None;
            }
            let bare = text.trim_end().trim_end_matches(|c| c == '.' || c == '…');
            if DECIMAL.is_match(bare) || DECIMAL.is_match(text.trim_end()) {
                return EndPunctuation::None;
            }
            EndPunctuation::Period
        }
        EndPunctuation::Colon => {
            let bare = text.trim_end().trim_end_matches(':');
            if TIME_OF_DAY.is_match(bare) || TIME_OF_DAY.is_match(text.trim_end()) {
                return EndPunctuation::None;
            }
            EndPunctuation::Colon
        }
        other => other,
    }
}

pub fn is_abbreviation(text: &str) -> bool {
    let trimmed = text.trim().trim_end_matches(|c| matches!(c, ',' | ';' | ':' | '!' | '?'));
    if INITIALISM.is_match(trimmed)
        || DEGREE_ABBREVIATION.is_match(trimmed)
        || SINGLE_INITIAL.is_match(trimmed)
        || LOWERCASE_PAIR.is_match(trimmed)
    {
        return true;
    }
    let bare = trimmed.trim_end_matches('.').to_lowercase();
    ABBREVIATION_SET.contains(bare.as_str())
}

/// First matching number shape, or None. Citations win over everything so
/// "[12]" never reads as a plain number.
pub fn detect_number_type(text: &str) -> NumberType {
    let core = strip_trailing_terminators(text.trim());
    if core.is_empty() {
        return NumberType::None;
    }
    if BRACKET_CITATION.is_match(core) || PAREN_CITATION.is_match(core) {
        NumberType::Citation
    } else if CURRENCY.is_match(core) {
        NumberType::Currency
    } else if PERCENT.is_match(core) {
        NumberType::Percent
    } else if UNIT.is_match(core) {
        NumberType::Unit
    } else if RANGE.is_match(core) {
        NumberType::Range
    } else if DECIMAL.is_match(core) {
        NumberType::Decimal
    } else if PLAIN_NUMBER.is_match(core) {
        NumberType::Plain
    } else {
        NumberType::None
    }
}

pub fn is_citation(text: &str) -> bool {
    let core = strip_trailing_terminators(text.trim());
    BRACKET_CITATION.is_match(core) || PAREN_CITATION.is_match(core)
}

pub fn is_countable_number(number_type: NumberType) -> bool {
    matches!(
        number_type,
        NumberType::Decimal
            | NumberType::Range
            | NumberType::Percent
            | NumberType::Currency
            | NumberType::Unit
            | NumberType::Plain
    )
}

pub fn has_math_symbols(text: &str) -> bool {
    text.chars()
        .any(|c| MATH_SYMBOLS.contains(c) || ('\u{03B1}'..='\u{03C9}').contains(&c))
}

pub fn is_code_like(text: &str) -> bool {
    let identifier: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if identifier.is_empty() {
        return false;
    }
    identifier.contains('_')
        || CAMEL_CASE.is_match(&identifier)
        || PASCAL_CASE.is_match(&identifier)
        || SNAKE_CASE.is_match(&identifier)
        || SCREAMING_SNAKE.is_match(&identifier)
        || KEBAB_CASE.is_match(&identifier)
}

pub fn has_opening_punctuation(text: &str) -> bool {
    text.chars()
        .next()
        .map_or(false, |c| OPENING_PUNCTUATION.contains(c))
}

pub fn has_closing_punctuation(text: &str) -> bool {
    strip_trailing_terminators(text)
        .chars()
        .last()
        .map_or(false, |c| CLOSING_PUNCTUATION.contains(c))
}

pub fn has_dash(text: &str) -> bool {
    let leading = text
        .chars()
        .next()
        .map_or(false, |c| c == '\u{2014}' || c == '\u{2013}');
    let trailing = text
        .chars()
        .last()
        .map_or(false, |c| c == '\u{2014}' || c == '\u{2013}');
    leading || trailing
}

pub fn is_short_word(body_lower: &str) -> bool {
    body_lower.chars().count() <= 2 || SHORT_WORD_SET.contains(body_lower)
}

pub fn is_phrase_boundary_word(body_lower: &str) -> bool {
    PHRASE_BOUNDARY_SET.contains(body_lower)
}

pub fn is_time_of_day(text: &str) -> bool {
    TIME_OF_DAY.is_match(text.trim())
}
