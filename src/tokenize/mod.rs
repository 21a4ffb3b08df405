// Tokenizer: raw text in, enriched token stream out.

pub mod classify;
pub mod complexity;
pub mod mapping;
pub mod sanitize;
pub mod syllables;
pub mod token;

pub use mapping::{
    blocks_to_text, create_token_block_mapping, find_token_index_by_block_word, tokenize_blocks,
    Block, BlockKind, TokenOrigin, PARAGRAPH_BREAK_ORIGIN,
};
pub use token::{BoundaryType, EndPunctuation, NumberType, Token};

use crate::lexicon;
use classify::{
    classify_end_punctuation, detect_number_type, has_closing_punctuation, has_dash,
    has_math_symbols, has_opening_punctuation, is_abbreviation, is_citation, is_code_like,
    is_countable_number, is_phrase_boundary_word, is_short_word, letters_lower, word_body,
};
use complexity::word_complexity;
use sanitize::{normalize_whitespace, sanitize};
use syllables::estimate_syllables;

/// Sub-tokens longer than this get split at internal ASCII hyphens.
const HYPHEN_SPLIT_THRESHOLD: usize = 10;

/// Tokenizes raw text into an enriched stream. Paragraphs are separated by
/// synthetic break tokens; every other token is one displayed word.
/// Empty or whitespace-only input yields an empty stream.
pub fn tokenize(text: &str) -> Vec<Token> {
    let paragraphs = split_into_paragraphs(text);
    build_tokens(&paragraphs)
}

/// The sanitize/normalize/split half of the pipeline, shared with the
/// source-mapping generator so both walk identical word sequences.
pub(crate) fn split_into_paragraphs(text: &str) -> Vec<Vec<String>> {
    let cleaned = sanitize(text);
    let normalized = normalize_whitespace(&cleaned);
    if normalized.is_empty() {
        return Vec::new();
    }
    normalized
        .split("\n\n")
        .map(split_paragraph_words)
        .filter(|words| !words.is_empty())
        .collect()
}

fn split_paragraph_words(paragraph: &str) -> Vec<String> {
    let mut words = Vec::new();
    for word in paragraph.split_whitespace() {
        for dashed in split_on_dashes(word) {
            for part in split_long_hyphenated(&dashed) {
                words.push(part);
            }
        }
    }
    words
}

/// Splits at em/en-dashes, keeping the dash attached to the preceding part.
fn split_on_dashes(word: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    for ch in word.chars() {
        current.push(ch);
        if ch == '\u{2014}' || ch == '\u{2013}' {
            parts.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Splits long sub-tokens at ASCII hyphens between word characters, keeping
/// the hyphen attached to the preceding part. Short sub-tokens pass through.
fn split_long_hyphenated(part: &str) -> Vec<String> {
    if part.chars().count() <= HYPHEN_SPLIT_THRESHOLD {
        return vec![part.to_string()];
    }
    let chars: Vec<char> = part.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();
    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);
        if ch == '-'
            && i > 0
            && i + 1 < chars.len()
            && chars[i - 1].is_alphanumeric()
            && chars[i + 1].is_alphanumeric()
        {
            parts.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

fn build_tokens(paragraphs: &[Vec<String>]) -> Vec<Token> {
    let flat: Vec<&str> = paragraphs
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();
    let mut tokens: Vec<Token> = Vec::with_capacity(flat.len() + paragraphs.len());
    let mut flat_position = 0usize;

    for (paragraph_number, words) in paragraphs.iter().enumerate() {
        if paragraph_number > 0 {
            tokens.push(Token::paragraph_break(tokens.len()));
        }
        let mut words_since_pause = 0u32;
        for (word_position, word) in words.iter().enumerate() {
            // Lookahead crosses paragraph joins so phrase boundaries at
            // paragraph ends still resolve.
            let next_body = flat
                .get(flat_position + 1)
                .map(|next| letters_lower(next));
            let token = enrich(
                word,
                tokens.len(),
                word_position as i32,
                words_since_pause,
                next_body.as_deref(),
            );
            let reset = token.end_punctuation != EndPunctuation::None || token.is_phrase_boundary;
            tokens.push(token);
            words_since_pause += 1;
            if reset {
                words_since_pause = 0;
            }
            flat_position += 1;
        }
    }
    tokens
}

fn enrich(
    text: &str,
    index: usize,
    paragraph_index: i32,
    words_since_last_pause: u32,
    next_body: Option<&str>,
) -> Token {
    let end_punctuation = classify_end_punctuation(text);
    let body = word_body(text);
    let word_length = body.chars().count();
    let estimated_syllables = estimate_syllables(body);
    let number_type = detect_number_type(text);
    let dash = has_dash(text);

    let is_phrase_boundary = end_punctuation == EndPunctuation::None
        && next_body.is_some_and(is_phrase_boundary_word);

    let body_lower = body.to_lowercase();
    let probe = letters_lower(text);
    let token_complexity = word_complexity(text);

    let ends_with_dash = text
        .chars()
        .last()
        .map_or(false, |c| c == '\u{2014}' || c == '\u{2013}');
    let is_sentence_end = matches!(
        end_punctuation,
        EndPunctuation::Period | EndPunctuation::Question | EndPunctuation::Exclamation
    ) || ends_with_dash;
    let is_clause_end = matches!(
        end_punctuation,
        EndPunctuation::Semicolon | EndPunctuation::Colon
    ) || (end_punctuation == EndPunctuation::Comma && word_length >= 4);

    let is_easy_word = lexicon::in_top_5k(&probe)
        && estimated_syllables <= 2
        && token_complexity <= 0.3
        && !matches!(
            end_punctuation,
            EndPunctuation::Period
                | EndPunctuation::Question
                | EndPunctuation::Exclamation
                | EndPunctuation::Semicolon
                | EndPunctuation::Colon
        );

    let boundary_type = match end_punctuation {
        EndPunctuation::Period | EndPunctuation::Question | EndPunctuation::Exclamation => {
            BoundaryType::Sentence
        }
        EndPunctuation::Comma | EndPunctuation::Semicolon | EndPunctuation::Colon => {
            BoundaryType::Clause
        }
        EndPunctuation::None => {
            if dash {
                BoundaryType::Clause
            } else if is_phrase_boundary {
                BoundaryType::Micro
            } else {
                BoundaryType::None
            }
        }
    };

    Token {
        text: text.to_string(),
        index,
        paragraph_index,
        is_paragraph_break: false,
        end_punctuation,
        word_length,
        estimated_syllables,
        is_short_word: is_short_word(&body_lower),
        is_sentence_end,
        is_clause_end,
        is_phrase_boundary,
        is_abbreviation: is_abbreviation(text),
        is_number: is_countable_number(number_type),
        is_citation: is_citation(text),
        is_code_like: is_code_like(text),
        has_math_symbols: has_math_symbols(text),
        has_opening_punctuation: has_opening_punctuation(text),
        has_closing_punctuation: has_closing_punctuation(text),
        has_dash: dash,
        is_easy_word,
        number_type,
        boundary_type,
        token_complexity,
        words_since_last_pause,
    }
}

/// Count of displayable tokens, excluding paragraph breaks.
pub fn get_word_count(tokens: &[Token]) -> usize {
    tokens.iter().filter(|t| !t.is_paragraph_break).count()
}

/// Walks back to the token after the nearest preceding paragraph break.
/// Out-of-range indices clamp; an empty stream yields 0.
pub fn find_paragraph_start(tokens: &[Token], current_index: usize) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let mut i = current_index.min(tokens.len() - 1);
    while i > 0 {
        if tokens[i - 1].is_paragraph_break {
            return i;
        }
        i -= 1;
    }
    0
}

/// Walks back to the start of the current sentence: the token after the
/// nearest preceding sentence end or paragraph break.
pub fn find_sentence_start(tokens: &[Token], current_index: usize) -> usize {
    if tokens.is_empty() {
        return 0;
    }
    let mut i = current_index.min(tokens.len() - 1);
    while i > 0 {
        let previous = &tokens[i - 1];
        if previous.is_sentence_end || previous.is_paragraph_break {
            return i;
        }
        i -= 1;
    }
    0
}
