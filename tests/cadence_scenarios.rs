use cadence::{
    format_duration, get_base_interval, get_estimated_duration, get_token_duration, tokenize,
    CadenceConfig, EndPunctuation,
};

/// Classic path with every shaping pass off: punctuation multipliers only.
fn classic_only() -> CadenceConfig {
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

fn assert_ms(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "{}: expected {} ms, got {} ms",
        what,
        expected,
        actual
    );
}

#[test]
fn base_interval_values() {
    assert_eq!(get_base_interval(300), 200.0);
    assert_eq!(get_base_interval(600), 100.0);
    assert_eq!(get_base_interval(150), 400.0);
}

#[test]
fn classic_punctuation_table_at_300() {
    let config = classic_only();
    let expectations = [
        ("word,", 440.0),
        ("word;", 500.0),
        ("word:", 400.0),
        ("word.", 640.0),
        ("word?", 700.0),
        ("word!", 600.0),
        ("word", 200.0),
    ];
    for (text, expected) in expectations {
        let tokens = tokenize(text);
        let duration = get_token_duration(&tokens[0], &config, None);
        assert_ms(duration, expected, text);
    }
}

#[test]
fn phrase_boundary_is_not_stacked_on_punctuation() {
    let config = classic_only();

    let tokens = tokenize("pause and go");
    assert!(tokens[0].is_phrase_boundary);
    assert_ms(
        get_token_duration(&tokens[0], &config, None),
        260.0,
        "phrase boundary",
    );

    let tokens = tokenize("pause, and go");
    assert_eq!(tokens[0].end_punctuation, EndPunctuation::Comma);
    assert!(!tokens[0].is_phrase_boundary);
    assert_ms(
        get_token_duration(&tokens[0], &config, None),
        440.0,
        "comma wins over phrase boundary",
    );
}

#[test]
fn long_run_relief_curve() {
    let mut config = classic_only();
    config.enable_long_run_relief = true;
    let tokens = tokenize("word");
    let mut token = tokens[0].clone();
    for (run, expected) in [(5u32, 200.0), (6, 210.0), (8, 230.0), (20, 250.0)] {
        token.words_since_last_pause = run;
        let duration = get_token_duration(&token, &config, None);
        assert_ms(duration, expected, &format!("run of {}", run));
    }
}

#[test]
fn duration_bounds_hold_across_a_real_stream() {
    let mut config = CadenceConfig::default();
    config.enable_ease_in = false;
    config.enable_paragraph_ease_in = false;
    let base = get_base_interval(config.wpm);
    let max_boundary_pause = 2.5 * base;

    let text = "Dr. Smith\u{2014}who measured 3.14 kg\u{2014}wrote [12] papers; the committee, \
however, wanted uncharacteristically thorough documentation!\n\nEveryone agreed.";
    let tokens = tokenize(text);
    for token in &tokens {
        if token.is_paragraph_break {
            continue;
        }
        let duration = get_token_duration(token, &config, None);
        assert!(
            duration >= config.min_duration_floor * base - 1e-9,
            "floor violated for {:?}: {}",
            token.text,
            duration
        );
        assert!(
            duration <= config.max_duration_cap * base + max_boundary_pause + 1e-9,
            "cap violated for {:?}: {}",
            token.text,
            duration
        );
    }
}

#[test]
fn ease_in_applies_to_session_start() {
    let mut config = classic_only();
    config.enable_ease_in = true;
    let tokens = tokenize("one two three four five six");
    let durations: Vec<f64> = tokens
        .iter()
        .map(|t| get_token_duration(t, &config, Some(t.index)))
        .collect();
    assert_ms(durations[0], 300.0, "index 0 at 1.5x");
    assert_ms(durations[1], 260.0, "index 1 at 1.3x");
    assert_ms(durations[2], 230.0, "index 2 at 1.15x");
    assert_ms(durations[3], 210.0, "index 3 at 1.05x");
    assert_ms(durations[4], 200.0, "index 4 settled");
}

#[test]
fn paragraph_ease_in_lengthens_paragraph_starts() {
    let mut config = classic_only();
    config.enable_paragraph_ease_in = true;
    let tokens = tokenize("alpha beta gamma delta epsilon zeta eta");
    // 300 wpm with a 75 drop: first word 200 * (300/225) ≈ 266.67 ms,
    // decaying back to 200 by the sixth word.
    let first = get_token_duration(&tokens[0], &config, None);
    assert_ms(first, 200.0 * (300.0 / 225.0), "paragraph start");
    let settled = get_token_duration(&tokens[5], &config, None);
    assert_ms(settled, 200.0, "past the ramp");
    let mut previous = first;
    for token in &tokens[1..5] {
        let duration = get_token_duration(token, &config, None);
        assert!(duration < previous, "ramp should decay monotonically");
        previous = duration;
    }
}

#[test]
fn cadence_model_prices_syllables_and_pauses() {
    let mut config = CadenceConfig::default();
    config.enable_ease_in = false;
    config.enable_paragraph_ease_in = false;
    config.enable_prosody_factor = false;

    let tokens = tokenize("cat elephant.");
    // "cat": one syllable, factor 0.85, no boundary.
    assert_ms(get_token_duration(&tokens[0], &config, None), 170.0, "cat");
    // "elephant.": three syllables at 1.0 plus a sentence pause of 0.9.
    assert_ms(
        get_token_duration(&tokens[1], &config, None),
        380.0,
        "elephant.",
    );
}

#[test]
fn estimated_duration_and_formatting() {
    let config = classic_only();
    let tokens = tokenize("one two three four five");
    let total = get_estimated_duration(&tokens, &config);
    assert_ms(total, 1000.0, "five flat words");
    assert_eq!(format_duration(total), "1s");
    assert_eq!(format_duration(95_000.0), "1m 35s");
    assert_eq!(format_duration(45_400.0), "45s");
}

#[test]
fn paragraph_break_duration_uses_paragraph_multiplier() {
    let config = classic_only();
    let tokens = tokenize("one\n\ntwo");
    let duration = get_token_duration(&tokens[1], &config, None);
    assert_ms(duration, 700.0, "paragraph break at 1 + 2.5");
}
