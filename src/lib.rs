//! Linguistically-paced RSVP reading engine.
//!
//! The pipeline: raw text goes through [`tokenize`] into an enriched token
//! stream, [`get_token_duration`] prices each token in milliseconds from a
//! [`CadenceConfig`], and a [`Scheduler`] drives the stream against a
//! monotonic clock, reporting position through callbacks.
//!
//! The engine is deliberately host-agnostic: embedders supply a frame
//! cadence (call [`Scheduler::on_frame`] roughly every 16.67 ms), optionally
//! a [`schedule::TimeSource`], and optionally a visibility signal. Rendering,
//! input, and persistence live outside this crate.

pub mod config;
pub mod error;
pub mod lexicon;
pub mod presets;
pub mod schedule;
pub mod timing;
pub mod tokenize;

pub use config::{clamp_wpm, CadenceConfig, DomainMode, DEFAULT_CONFIG, MAX_WPM, MIN_WPM};
pub use error::CadenceError;
pub use presets::{apply_preset, detect_current_preset, presets, Preset, PRESET_NAMES};
pub use schedule::{
    JitterStats, ManualClock, MonotonicClock, Scheduler, SchedulerState, TimeSource, Visibility,
    WpmRamp, MAX_CATCHUP_TOKENS,
};
pub use timing::{
    flow_adjusted_duration, format_duration, get_base_interval, get_estimated_duration,
    get_token_duration, FlowState,
};
pub use tokenize::{
    blocks_to_text, create_token_block_mapping, find_paragraph_start, find_sentence_start,
    find_token_index_by_block_word, get_word_count, tokenize, tokenize_blocks, Block, BlockKind,
    BoundaryType, EndPunctuation, NumberType, Token, TokenOrigin, PARAGRAPH_BREAK_ORIGIN,
};
