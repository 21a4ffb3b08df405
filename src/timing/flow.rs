// Adaptive flow: momentum over runs of easy words plus a rolling-average
// correction pulling actual pace back toward the configured target.

use std::collections::VecDeque;

use crate::config::CadenceConfig;
use crate::timing::base_interval_f;
use crate::tokenize::token::Token;

/// Minimum samples before the rolling average starts correcting.
const MIN_AVERAGE_SAMPLES: usize = 5;

/// Mutable pacing state owned by the scheduler while adaptive pacing is on.
/// Updated once per displayed token.
#[derive(Debug, Clone)]
pub struct FlowState {
    pub consecutive_easy_words: u32,
    /// 1.0 is neutral; values below 1.0 speed the reader up.
    pub current_momentum: f64,
    recent_durations: VecDeque<f64>,
    recent_target_durations: VecDeque<f64>,
    pub average_deviation: f64,
    window_size: usize,
}

impl FlowState {
    pub fn new(config: &CadenceConfig) -> Self {
        let window_size = config.average_window_size.max(1);
        FlowState {
            consecutive_easy_words: 0,
            current_momentum: 1.0,
            recent_durations: VecDeque::with_capacity(window_size),
            recent_target_durations: VecDeque::with_capacity(window_size),
            average_deviation: 0.0,
            window_size,
        }
    }

    /// Momentum multiplier for a run of easy words: builds past the
    /// threshold, saturating at the configured maximum boost.
    pub fn momentum_multiplier(consecutive_easy_words: u32, config: &CadenceConfig) -> f64 {
        if !config.enable_momentum || consecutive_easy_words < config.momentum_build_threshold {
            return 1.0;
        }
        let progress =
            ((consecutive_easy_words - config.momentum_build_threshold) as f64 / 5.0).min(1.0);
        1.0 - progress * config.momentum_max_boost
    }

    /// Advances momentum bookkeeping for one displayed token.
    pub fn update_momentum(&mut self, token: &Token, config: &CadenceConfig) {
        if token.is_paragraph_break {
            self.consecutive_easy_words = 0;
            self.current_momentum = 1.0;
            return;
        }
        if token.is_easy_word {
            self.consecutive_easy_words += 1;
        } else {
            self.consecutive_easy_words = (self.consecutive_easy_words as f64
                * (1.0 - config.momentum_decay_rate))
                .floor() as u32;
        }
        self.current_momentum = Self::momentum_multiplier(self.consecutive_easy_words, config);
        // Natural pauses break the run entirely.
        if token.is_phrase_boundary || token.is_sentence_end {
            self.consecutive_easy_words = 0;
            self.current_momentum = 1.0;
        }
    }

    /// Records an (actual, target) duration pair into the sliding windows
    /// and refreshes the average deviation.
    pub fn push_sample(&mut self, actual_ms: f64, target_ms: f64) {
        self.recent_durations.push_back(actual_ms);
        self.recent_target_durations.push_back(target_ms);
        while self.recent_durations.len() > self.window_size {
            self.recent_durations.pop_front();
        }
        while self.recent_target_durations.len() > self.window_size {
            self.recent_target_durations.pop_front();
        }
        if self.recent_durations.len() >= MIN_AVERAGE_SAMPLES {
            let actual_avg = average(&self.recent_durations);
            let target_avg = average(&self.recent_target_durations);
            if target_avg > 0.0 {
                self.average_deviation = (actual_avg - target_avg) / target_avg;
            }
        }
    }

    /// Correction factor derived from the rolling average, held to a ±5%
    /// band so it never dominates the base cadence.
    pub fn correction_factor(&self) -> f64 {
        (1.0 - self.average_deviation * 0.1).clamp(0.95, 1.05)
    }

    pub fn sample_count(&self) -> usize {
        self.recent_durations.len()
    }
}

fn average(window: &VecDeque<f64>) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    window.iter().sum::<f64>() / window.len() as f64
}

/// Applies momentum and rolling-average correction to a base duration, then
/// clamps into the configured variance band around the base interval.
pub fn flow_adjusted_duration(
    base_duration_ms: f64,
    flow: &FlowState,
    config: &CadenceConfig,
    wpm: f64,
) -> f64 {
    let base_interval = base_interval_f(wpm);
    let adjusted = base_duration_ms * flow.current_momentum * flow.correction_factor();
    let floor = base_interval * (1.0 - config.target_wpm_variance);
    let ceiling = base_interval * (1.0 + config.target_wpm_variance) * 3.0;
    adjusted.clamp(floor, ceiling)
}
