// Duration math: pure functions from (token, config) to milliseconds.

pub mod flow;

pub use flow::{flow_adjusted_duration, FlowState};

use crate::config::{CadenceConfig, DomainMode};
use crate::tokenize::token::{BoundaryType, EndPunctuation, Token};

/// Milliseconds per word at the given speed: 60000 / wpm.
pub fn get_base_interval(wpm: u32) -> f64 {
    base_interval_f(wpm as f64)
}

pub(crate) fn base_interval_f(wpm: f64) -> f64 {
    60_000.0 / wpm.max(1.0)
}

/// Syllable-count multiplier for the cadence model.
fn length_factor(syllables: u8) -> f64 {
    match syllables {
        0 | 1 => 0.85,
        2 => 0.95,
        3 => 1.00,
        4 => 1.12,
        5 => 1.25,
        6 => 1.40,
        _ => 1.55,
    }
}

/// Character-count fallback when syllable weighting is off.
fn word_length_factor(length: usize) -> f64 {
    if length <= 2 {
        0.85
    } else if length <= 4 {
        1.00
    } else {
        (1.0 + (length - 4) as f64 * 0.10).min(1.60)
    }
}

/// Slow start over the first words of a session.
fn ease_in_multiplier(index: usize) -> f64 {
    match index {
        0 => 1.50,
        1 => 1.30,
        2 => 1.15,
        3 => 1.05,
        _ => 1.00,
    }
}

/// Slow start at each paragraph, decaying linearly over `ramp_words` words.
/// The drop is expressed as a lower effective WPM, which lengthens the
/// multiplier above 1.0.
fn paragraph_ease_in_multiplier(
    paragraph_index: i32,
    wpm: f64,
    wpm_drop: u32,
    ramp_words: u32,
) -> f64 {
    if ramp_words == 0 || paragraph_index < 0 || paragraph_index as u32 >= ramp_words {
        return 1.0;
    }
    let effective_target_wpm = (wpm - wpm_drop as f64).max(50.0);
    let full_drop_multiplier = wpm / effective_target_wpm;
    let ramp_factor = 1.0 - paragraph_index as f64 / ramp_words as f64;
    1.0 + (full_drop_multiplier - 1.0) * ramp_factor
}

/// Breath-group and bracketing pressure, capped at 1.35.
fn prosody_factor(token: &Token, breath_group_threshold: u32) -> f64 {
    let mut factor = 1.0;
    if token.words_since_last_pause >= breath_group_threshold {
        let excess = (token.words_since_last_pause - breath_group_threshold) as f64;
        factor *= 1.05 + (excess * 0.02).min(0.15);
    }
    if token.has_opening_punctuation {
        factor *= 1.08;
    }
    if token.has_closing_punctuation {
        factor *= 1.05;
    }
    if token.has_dash {
        factor *= 1.10;
    }
    factor.min(1.35)
}

fn domain_factor(token: &Token, mode: DomainMode) -> f64 {
    match mode {
        DomainMode::Math => {
            if token.has_math_symbols {
                1.40
            } else if token.is_number {
                1.15
            } else {
                1.00
            }
        }
        DomainMode::Code => {
            if token.is_code_like {
                1.25
            } else {
                1.00
            }
        }
        DomainMode::Technical => {
            if token.is_citation {
                1.20
            } else if token.is_number {
                1.10
            } else if token.token_complexity > 0.5 {
                1.15
            } else {
                1.00
            }
        }
        DomainMode::Prose => {
            if token.is_citation {
                1.15
            } else {
                1.00
            }
        }
    }
}

fn boundary_pause_multiplier(boundary: BoundaryType) -> f64 {
    match boundary {
        BoundaryType::None => 0.0,
        BoundaryType::Micro => 0.15,
        BoundaryType::Clause => 0.40,
        BoundaryType::Sentence => 0.90,
        BoundaryType::Paragraph => 2.00,
        BoundaryType::Heading => 2.50,
        BoundaryType::ListItem => 1.25,
        BoundaryType::CodeLine => 0.60,
        BoundaryType::MathChunk => 0.80,
    }
}

/// Additive pause in ms after a token, capped at the duration ceiling.
fn boundary_pause(boundary: BoundaryType, base_interval: f64, max_duration_cap: f64) -> f64 {
    (boundary_pause_multiplier(boundary) * base_interval).min(max_duration_cap * base_interval)
}

fn punctuation_multiplier(end: EndPunctuation, config: &CadenceConfig) -> f64 {
    match end {
        EndPunctuation::None => 0.0,
        EndPunctuation::Comma => config.comma_multiplier,
        EndPunctuation::Semicolon => config.semicolon_multiplier,
        EndPunctuation::Colon => config.colon_multiplier,
        EndPunctuation::Period => config.period_multiplier,
        EndPunctuation::Question => config.question_multiplier,
        EndPunctuation::Exclamation => config.exclamation_multiplier,
    }
}

/// Display duration for one token in ms. `index` overrides the token's own
/// stream index for ease-in purposes (a session may start mid-stream).
pub fn get_token_duration(token: &Token, config: &CadenceConfig, index: Option<usize>) -> f64 {
    token_duration_at_wpm(token, config, config.wpm as f64, index)
}

/// Duration at an explicit (possibly fractional) WPM; the scheduler prices
/// tokens mid-ramp through this entry.
pub(crate) fn token_duration_at_wpm(
    token: &Token,
    config: &CadenceConfig,
    wpm: f64,
    index: Option<usize>,
) -> f64 {
    let base_interval = base_interval_f(wpm);
    if token.is_paragraph_break {
        return base_interval * (1.0 + config.paragraph_multiplier);
    }
    let index = index.unwrap_or(token.index);
    if config.enable_syllable_weight && token.estimated_syllables > 0 {
        cadence_model_duration(token, config, wpm, base_interval, index)
    } else {
        classic_duration(token, config, wpm, base_interval, index)
    }
}

/// Multiplicative-factor model plus an additive boundary pause.
fn cadence_model_duration(
    token: &Token,
    config: &CadenceConfig,
    wpm: f64,
    base_interval: f64,
    index: usize,
) -> f64 {
    let mut factor = 1.0;
    if config.enable_syllable_weight {
        factor *= length_factor(token.estimated_syllables);
    } else if config.enable_word_length_timing {
        factor *= word_length_factor(token.word_length);
    }
    if config.enable_prosody_factor {
        factor *= prosody_factor(token, config.breath_group_threshold);
    }
    if config.enable_complexity_factor {
        factor *= 1.0 + token.token_complexity * 0.35;
    }
    factor *= domain_factor(token, config.domain_mode);
    factor = factor.clamp(config.min_duration_floor, config.max_duration_cap);

    let base = base_interval * factor
        + boundary_pause(token.boundary_type, base_interval, config.max_duration_cap);
    let ease = if config.enable_ease_in {
        ease_in_multiplier(index)
    } else {
        1.0
    };
    let paragraph_ease = if config.enable_paragraph_ease_in {
        paragraph_ease_in_multiplier(
            token.paragraph_index,
            wpm,
            config.paragraph_ease_in_wpm_drop,
            config.paragraph_ease_in_words,
        )
    } else {
        1.0
    };
    base * ease * paragraph_ease
}

/// Additive-multiplier formula used when the cadence model is off.
fn classic_duration(
    token: &Token,
    config: &CadenceConfig,
    wpm: f64,
    base_interval: f64,
    index: usize,
) -> f64 {
    let mut multiplier = 1.0;
    let mut length_lowered = false;
    if config.enable_word_length_timing {
        let factor = word_length_factor(token.word_length);
        multiplier *= factor;
        length_lowered = factor < 1.0;
    }
    // The short-word discount only applies when length timing has not
    // already shortened the word.
    if config.enable_short_word_boost && token.is_short_word && !length_lowered {
        multiplier -= config.short_word_multiplier;
    }
    if token.end_punctuation != EndPunctuation::None {
        multiplier += punctuation_multiplier(token.end_punctuation, config);
    } else if token.is_phrase_boundary {
        multiplier += config.phrase_boundary_multiplier;
    }
    if config.enable_long_run_relief && token.words_since_last_pause > 5 {
        multiplier += ((token.words_since_last_pause - 5) as f64 * 0.05).min(0.25);
    }
    if config.enable_ease_in {
        multiplier *= ease_in_multiplier(index);
    }
    if config.enable_paragraph_ease_in {
        multiplier *= paragraph_ease_in_multiplier(
            token.paragraph_index,
            wpm,
            config.paragraph_ease_in_wpm_drop,
            config.paragraph_ease_in_words,
        );
    }
    base_interval * multiplier.max(0.5)
}

/// Total expected playback time for a stream in ms.
pub fn get_estimated_duration(tokens: &[Token], config: &CadenceConfig) -> f64 {
    tokens
        .iter()
        .map(|token| get_token_duration(token, config, Some(token.index)))
        .sum()
}

/// Renders a duration as "3m 25s" or "45s", rounded to whole seconds.
pub fn format_duration(ms: f64) -> String {
    let total_seconds = (ms / 1000.0).round().max(0.0) as u64;
    if total_seconds >= 60 {
        format!("{}m {}s", total_seconds / 60, total_seconds % 60)
    } else {
        format!("{}s", total_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    /// Config with every shaping pass disabled: pure classic multipliers.
    fn bare_config() -> CadenceConfig {
        CadenceConfig {
            enable_syllable_weight: false,
            enable_prosody_factor: false,
            enable_complexity_factor: false,
            enable_word_length_timing: false,
            enable_short_word_boost: false,
            enable_ease_in: false,
            enable_paragraph_ease_in: false,
            enable_long_run_relief: false,
            enable_adaptive_pacing: false,
            enable_momentum: false,
            ..CadenceConfig::default()
        }
    }

    fn word_token(text: &str) -> Token {
        let tokens = tokenize(text);
        tokens.into_iter().next().expect("one token")
    }

    #[test]
    fn test_base_interval() {
        assert_eq!(get_base_interval(300), 200.0);
        assert_eq!(get_base_interval(600), 100.0);
        assert_eq!(get_base_interval(150), 400.0);
    }

    #[test]
    fn test_base_interval_guards_zero() {
        assert_eq!(get_base_interval(0), 60_000.0);
    }

    #[test]
    fn test_classic_punctuation_durations_at_300() {
        let config = bare_config();
        let cases = [
            ("word,", 440.0),
            ("word;", 500.0),
            ("word:", 400.0),
            ("word.", 640.0),
            ("word?", 700.0),
            ("word!", 600.0),
            ("word", 200.0),
        ];
        for (text, expected) in cases {
            let token = word_token(text);
            let duration = get_token_duration(&token, &config, None);
            assert!(
                (duration - expected).abs() < 1e-6,
                "duration for {:?} was {}",
                text,
                duration
            );
        }
    }

    #[test]
    fn test_phrase_boundary_additive() {
        let config = bare_config();
        let mut token = word_token("word");
        token.is_phrase_boundary = true;
        let duration = get_token_duration(&token, &config, None);
        assert!((duration - 260.0).abs() < 1e-6);
    }

    #[test]
    fn test_phrase_boundary_not_stacked_on_punctuation() {
        let config = bare_config();
        let mut token = word_token("word,");
        token.is_phrase_boundary = true;
        let duration = get_token_duration(&token, &config, None);
        assert!((duration - 440.0).abs() < 1e-6);
    }

    #[test]
    fn test_long_run_relief() {
        let mut config = bare_config();
        config.enable_long_run_relief = true;
        let cases = [(5, 200.0), (6, 210.0), (8, 230.0), (20, 250.0)];
        for (run, expected) in cases {
            let mut token = word_token("word");
            token.words_since_last_pause = run;
            let duration = get_token_duration(&token, &config, None);
            assert!(
                (duration - expected).abs() < 1e-9,
                "run {} gave {}",
                run,
                duration
            );
        }
    }

    #[test]
    fn test_paragraph_break_short_circuit() {
        let config = bare_config();
        let token = Token::paragraph_break(3);
        // base * (1 + paragraph multiplier) = 200 * 3.5
        assert_eq!(get_token_duration(&token, &config, None), 700.0);
    }

    #[test]
    fn test_short_word_discount() {
        let mut config = bare_config();
        config.enable_short_word_boost = true;
        let token = word_token("the");
        assert!(token.is_short_word);
        // 1.0 - 0.15 = 0.85 multiplier
        let duration = get_token_duration(&token, &config, None);
        assert!((duration - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_short_word_discount_skipped_when_length_lowered() {
        let mut config = bare_config();
        config.enable_short_word_boost = true;
        config.enable_word_length_timing = true;
        let token = word_token("at");
        // Length factor 0.85 already shortens two-letter words; no further
        // discount.
        let duration = get_token_duration(&token, &config, None);
        assert!((duration - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_word_length_factor_table() {
        assert_eq!(word_length_factor(2), 0.85);
        assert_eq!(word_length_factor(4), 1.00);
        assert!((word_length_factor(6) - 1.20).abs() < 1e-9);
        assert_eq!(word_length_factor(30), 1.60);
    }

    #[test]
    fn test_length_factor_table() {
        assert_eq!(length_factor(1), 0.85);
        assert_eq!(length_factor(3), 1.00);
        assert_eq!(length_factor(6), 1.40);
        assert_eq!(length_factor(7), 1.55);
    }

    #[test]
    fn test_ease_in_table() {
        assert_eq!(ease_in_multiplier(0), 1.50);
        assert_eq!(ease_in_multiplier(1), 1.30);
        assert_eq!(ease_in_multiplier(2), 1.15);
        assert_eq!(ease_in_multiplier(3), 1.05);
        assert_eq!(ease_in_multiplier(4), 1.00);
    }

    #[test]
    fn test_paragraph_ease_in_slows_paragraph_starts() {
        // 300 wpm, 75 drop: full drop multiplier 300/225 = 1.333...
        let first = paragraph_ease_in_multiplier(0, 300.0, 75, 5);
        assert!((first - 300.0 / 225.0).abs() < 1e-9);
        let later = paragraph_ease_in_multiplier(5, 300.0, 75, 5);
        assert_eq!(later, 1.0);
        // Monotone decay across the ramp.
        let mut previous = first;
        for paragraph_index in 1..5 {
            let multiplier = paragraph_ease_in_multiplier(paragraph_index, 300.0, 75, 5);
            assert!(multiplier < previous);
            assert!(multiplier >= 1.0);
            previous = multiplier;
        }
    }

    #[test]
    fn test_paragraph_ease_in_floors_effective_wpm() {
        // 100 wpm with a 75 drop would hit 25; floored at 50.
        let multiplier = paragraph_ease_in_multiplier(0, 100.0, 75, 5);
        assert!((multiplier - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_prosody_factor_breath_group() {
        let mut token = word_token("word");
        token.words_since_last_pause = 8;
        assert!((prosody_factor(&token, 8) - 1.05).abs() < 1e-9);
        token.words_since_last_pause = 20;
        // Excess capped at 0.15: 1.05 + 0.15 = 1.20.
        assert!((prosody_factor(&token, 8) - 1.20).abs() < 1e-9);
    }

    #[test]
    fn test_prosody_factor_caps_at_135() {
        let mut token = word_token("(word)\u{2014}");
        token.words_since_last_pause = 30;
        assert!(prosody_factor(&token, 8) <= 1.35);
    }

    #[test]
    fn test_domain_factors() {
        let citation = word_token("[12]");
        assert_eq!(domain_factor(&citation, DomainMode::Technical), 1.20);
        assert_eq!(domain_factor(&citation, DomainMode::Prose), 1.15);

        let number = word_token("42");
        assert_eq!(domain_factor(&number, DomainMode::Math), 1.15);
        assert_eq!(domain_factor(&number, DomainMode::Technical), 1.10);

        let symbol = word_token("α+β");
        assert_eq!(domain_factor(&symbol, DomainMode::Math), 1.40);

        let identifier = word_token("snake_case");
        assert_eq!(domain_factor(&identifier, DomainMode::Code), 1.25);

        let plain = word_token("word");
        assert_eq!(domain_factor(&plain, DomainMode::Prose), 1.00);
    }

    #[test]
    fn test_boundary_pause_capped() {
        // A heading pause is 2.5 base intervals, but never more than the
        // duration cap allows.
        assert_eq!(boundary_pause(BoundaryType::Heading, 200.0, 4.0), 500.0);
        assert_eq!(boundary_pause(BoundaryType::Heading, 200.0, 2.0), 400.0);
        assert_eq!(boundary_pause(BoundaryType::None, 200.0, 4.0), 0.0);
    }

    #[test]
    fn test_cadence_model_respects_floor_and_cap() {
        let mut config = CadenceConfig::default();
        config.enable_ease_in = false;
        config.enable_paragraph_ease_in = false;
        let base = get_base_interval(config.wpm);
        for text in ["a", "antidisestablishmentarianism,", "the", "x≤y"] {
            let token = word_token(text);
            let duration = get_token_duration(&token, &config, None);
            assert!(duration >= config.min_duration_floor * base);
            let max_pause = boundary_pause_multiplier(BoundaryType::Heading) * base;
            assert!(duration <= config.max_duration_cap * base + max_pause);
        }
    }

    #[test]
    fn test_cadence_model_syllable_weighting() {
        let mut config = CadenceConfig::default();
        config.enable_ease_in = false;
        config.enable_paragraph_ease_in = false;
        config.enable_prosody_factor = false;
        config.enable_adaptive_pacing = false;
        let short = word_token("cat");
        let long = word_token("elephant");
        let short_duration = get_token_duration(&short, &config, None);
        let long_duration = get_token_duration(&long, &config, None);
        // 1 syllable -> 0.85, 3 syllables -> 1.00.
        assert!((short_duration - 170.0).abs() < 1e-9);
        assert!((long_duration - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_cadence_model_adds_boundary_pause() {
        let mut config = CadenceConfig::default();
        config.enable_ease_in = false;
        config.enable_paragraph_ease_in = false;
        config.enable_prosody_factor = false;
        let token = word_token("cat.");
        // 0.85 * 200 + sentence pause 0.90 * 200 = 350.
        let duration = get_token_duration(&token, &config, None);
        assert!((duration - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_ease_in_multiplies_whole_cadence_duration() {
        let mut config = CadenceConfig::default();
        config.enable_paragraph_ease_in = false;
        config.enable_prosody_factor = false;
        let token = word_token("cat.");
        // Ease-in at index 0 scales the pause component too.
        let duration = get_token_duration(&token, &config, Some(0));
        assert!((duration - 350.0 * 1.5).abs() < 1e-9);
        let settled = get_token_duration(&token, &config, Some(10));
        assert!((settled - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_index_override_beats_token_index() {
        let mut config = bare_config();
        config.enable_ease_in = true;
        let token = word_token("word");
        assert_eq!(token.index, 0);
        let at_token_index = get_token_duration(&token, &config, None);
        let overridden = get_token_duration(&token, &config, Some(50));
        assert_eq!(at_token_index, 300.0);
        assert_eq!(overridden, 200.0);
    }

    #[test]
    fn test_classic_floor_multiplier() {
        let mut config = bare_config();
        config.enable_short_word_boost = true;
        config.short_word_multiplier = 0.9;
        let token = word_token("the");
        // 1.0 - 0.9 = 0.1 floors at 0.5.
        assert_eq!(get_token_duration(&token, &config, None), 100.0);
    }

    #[test]
    fn test_estimated_duration_sums_stream() {
        let config = bare_config();
        let tokens = tokenize("one two three");
        let total = get_estimated_duration(&tokens, &config);
        assert_eq!(total, 600.0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5_000.0), "5s");
        assert_eq!(format_duration(90_000.0), "1m 30s");
        assert_eq!(format_duration(59_400.0), "59s");
        assert_eq!(format_duration(59_600.0), "1m 0s");
        assert_eq!(format_duration(0.0), "0s");
        assert_eq!(format_duration(-10.0), "0s");
    }
}
