// Engine configuration with factory defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minimum and maximum WPM accepted by the engine. Values outside the range
/// are clamped, never rejected.
pub const MIN_WPM: u32 = 100;
pub const MAX_WPM: u32 = 1000;

/// Reading-material domain; selects which token classes get extra weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DomainMode {
    #[default]
    Prose,
    Technical,
    Math,
    Code,
}

/// Flat record of every pacing knob the engine recognizes.
///
/// Punctuation multipliers are additive on top of a base factor of 1.0: a
/// comma multiplier of 1.2 makes a comma-terminated word take 2.2x the base
/// interval in the classic formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CadenceConfig {
    /// Words per minute, clamped into [MIN_WPM, MAX_WPM].
    pub wpm: u32,

    // Punctuation multipliers.
    pub comma_multiplier: f64,
    pub semicolon_multiplier: f64,
    pub colon_multiplier: f64,
    pub period_multiplier: f64,
    pub question_multiplier: f64,
    pub exclamation_multiplier: f64,
    pub paragraph_multiplier: f64,

    // Word-length shaping.
    pub enable_short_word_boost: bool,
    pub short_word_multiplier: f64,
    pub enable_word_length_timing: bool,

    // Ease-in at session start and paragraph starts.
    pub enable_ease_in: bool,
    pub enable_paragraph_ease_in: bool,
    pub paragraph_ease_in_wpm_drop: u32,
    pub paragraph_ease_in_words: u32,

    // Phrase rhythm.
    pub phrase_boundary_multiplier: f64,
    pub enable_long_run_relief: bool,
    pub max_words_without_pause: u32,

    // Smooth speed changes.
    pub wpm_ramp_duration_ms: f64,
    pub enable_smooth_wpm_ramp: bool,

    // Cadence model.
    pub enable_syllable_weight: bool,
    pub enable_prosody_factor: bool,
    pub enable_complexity_factor: bool,
    pub domain_mode: DomainMode,
    pub breath_group_threshold: u32,
    pub min_duration_floor: f64,
    pub max_duration_cap: f64,

    // Adaptive flow.
    pub enable_adaptive_pacing: bool,
    pub target_wpm_variance: f64,
    pub average_window_size: usize,
    pub enable_momentum: bool,
    pub momentum_build_threshold: u32,
    pub momentum_max_boost: f64,
    pub momentum_decay_rate: f64,
}

/// Factory defaults.
pub const DEFAULT_CONFIG: CadenceConfig = CadenceConfig {
    wpm: 300,
    comma_multiplier: 1.2,
    semicolon_multiplier: 1.5,
    colon_multiplier: 1.0,
    period_multiplier: 2.2,
    question_multiplier: 2.5,
    exclamation_multiplier: 2.0,
    paragraph_multiplier: 2.5,
    enable_short_word_boost: true,
    short_word_multiplier: 0.15,
    enable_word_length_timing: true,
    enable_ease_in: true,
    enable_paragraph_ease_in: true,
    paragraph_ease_in_wpm_drop: 75,
    paragraph_ease_in_words: 5,
    phrase_boundary_multiplier: 0.3,
    enable_long_run_relief: true,
    max_words_without_pause: 7,
    wpm_ramp_duration_ms: 500.0,
    enable_smooth_wpm_ramp: true,
    enable_syllable_weight: true,
    enable_prosody_factor: true,
    enable_complexity_factor: false,
    domain_mode: DomainMode::Prose,
    breath_group_threshold: 8,
    min_duration_floor: 0.4,
    max_duration_cap: 4.0,
    enable_adaptive_pacing: true,
    target_wpm_variance: 0.20,
    average_window_size: 25,
    enable_momentum: true,
    momentum_build_threshold: 3,
    momentum_max_boost: 0.15,
    momentum_decay_rate: 0.5,
};

impl Default for CadenceConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Clamp a requested speed into the supported range.
pub fn clamp_wpm(wpm: u32) -> u32 {
    wpm.clamp(MIN_WPM, MAX_WPM)
}

impl CadenceConfig {
    /// Returns the config with out-of-range values pulled back in bounds.
    pub fn clamped(mut self) -> Self {
        self.wpm = clamp_wpm(self.wpm);
        self
    }
}
