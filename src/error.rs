use thiserror::Error;

/// Errors surfaced by the engine's fallible seams.
///
/// The engine itself is total: malformed text tokenizes to an empty stream,
/// out-of-range indices clamp, and the scheduler never panics. Looking up a
/// preset by name is the one place a caller can hand us something we cannot
/// answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CadenceError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}
