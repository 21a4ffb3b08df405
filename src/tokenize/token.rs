#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal punctuation class of a token, read off its last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EndPunctuation {
    #[default]
    None,
    Comma,
    Semicolon,
    Colon,
    Period,
    Question,
    Exclamation,
}

/// Numeric shape of a token, first-match wins (citation before currency
/// before percent before unit before range before decimal before plain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumberType {
    #[default]
    None,
    Decimal,
    Range,
    Percent,
    Currency,
    Unit,
    Citation,
    Plain,
}

/// Classification of the pause that should follow a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryType {
    #[default]
    None,
    Micro,
    Clause,
    Sentence,
    Paragraph,
    Heading,
    ListItem,
    CodeLine,
    MathChunk,
}

/// One displayed word (or a synthetic paragraph break) plus its enrichment
/// metadata. Tokens are immutable once the stream is built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// Literal display string, possibly with attached punctuation. Empty for
    /// paragraph breaks.
    pub text: String,
    /// 0-based position in the stream.
    pub index: usize,
    /// 0-based position within the current paragraph; -1 for breaks.
    pub paragraph_index: i32,
    pub is_paragraph_break: bool,
    pub end_punctuation: EndPunctuation,
    /// Characters in the word body with surrounding punctuation stripped.
    pub word_length: usize,
    /// Heuristic syllable count, 1..=6. Zero only on paragraph breaks.
    pub estimated_syllables: u8,
    pub is_short_word: bool,
    pub is_sentence_end: bool,
    pub is_clause_end: bool,
    pub is_phrase_boundary: bool,
    pub is_abbreviation: bool,
    pub is_number: bool,
    pub is_citation: bool,
    pub is_code_like: bool,
    pub has_math_symbols: bool,
    pub has_opening_punctuation: bool,
    pub has_closing_punctuation: bool,
    pub has_dash: bool,
    pub is_easy_word: bool,
    pub number_type: NumberType,
    pub boundary_type: BoundaryType,
    /// 0.0 (trivial) to 1.0 (dense).
    pub token_complexity: f64,
    /// Words seen since the last punctuation, phrase boundary, or paragraph
    /// start, counted before this token.
    pub words_since_last_pause: u32,
}

impl Token {
    /// Synthetic marker emitted between paragraphs. Not displayed as text.
    pub fn paragraph_break(index: usize) -> Self {
        Token {
            text: String::new(),
            index,
            paragraph_index: -1,
            is_paragraph_break: true,
            end_punctuation: EndPunctuation::None,
            word_length: 0,
            estimated_syllables: 0,
            is_short_word: false,
            is_sentence_end: false,
            is_clause_end: false,
            is_phrase_boundary: false,
            is_abbreviation: false,
            is_number: false,
            is_citation: false,
            is_code_like: false,
            has_math_symbols: false,
            has_opening_punctuation: false,
            has_closing_punctuation: false,
            has_dash: false,
            is_easy_word: false,
            number_type: NumberType::None,
            boundary_type: BoundaryType::Paragraph,
            token_complexity: 0.0,
            words_since_last_pause: 0,
        }
    }
}
