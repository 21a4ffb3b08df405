// Input cleanup ahead of tokenization: PDF artifacts, invisible characters,
// dash variants, whitespace normalization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // A hyphen at a line break, optionally padded with spaces or tabs, is a
    // word split across PDF lines; rejoin it.
    static ref HYPHEN_LINE_BREAK: Regex = Regex::new(r"-[ \t]*\r?\n[ \t]*").unwrap();
    static ref HORIZONTAL_WS: Regex = Regex::new(r"[^\S\n]+").unwrap();
    static ref SPACE_AROUND_NEWLINE: Regex = Regex::new(r" *\n *").unwrap();
    static ref PARAGRAPH_RUN: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Strips invisible and garbage characters and canonicalizes dash variants.
/// Newlines and tabs survive for the whitespace pass.
pub fn sanitize(text: &str) -> String {
    let rejoined = HYPHEN_LINE_BREAK.replace_all(text, "-");
    let mut out = String::with_capacity(rejoined.len());
    for ch in rejoined.chars() {
        match ch {
            // BOM, zero-width characters, soft hyphen, replacement character.
            '\u{FEFF}' | '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{180E}' | '\u{00AD}'
            | '\u{FFFD}' => {}
            // Private-use area.
            '\u{E000}'..='\u{F8FF}' => {}
            // Hyphen variants to ASCII hyphen, horizontal bar to em-dash.
            '\u{2010}' | '\u{2011}' | '\u{2012}' => out.push('-'),
            '\u{2015}' => out.push('\u{2014}'),
            c if c.is_ascii_control() && c != '\n' && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

/// Collapses whitespace so the result is words separated by single spaces
/// and paragraphs separated by exactly one blank line.
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = HORIZONTAL_WS.replace_all(text, " ");
    let trimmed_lines = SPACE_AROUND_NEWLINE.replace_all(&collapsed, "\n");
    let folded = PARAGRAPH_RUN.replace_all(&trimmed_lines, "\n\n");
    let body = folded.trim();
    if body.is_empty() {
        return String::new();
    }
    // Surviving single newlines are soft wraps, not paragraph breaks.
    body.split("\n\n")
        .map(|paragraph| paragraph.replace('\n', " "))
        .collect::<Vec<_>>()
        .join("\n\n")
}
