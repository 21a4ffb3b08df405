// Named pacing presets: partial overlays on the factory defaults.

use crate::config::{clamp_wpm, CadenceConfig, DomainMode};
use crate::error::CadenceError;

/// Preset names in display order.
pub const PRESET_NAMES: [&str; 5] = ["factory", "casual", "speed", "technical", "comprehension"];

/// A named preset materialized against factory defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: CadenceConfig,
}

fn casual() -> CadenceConfig {
    CadenceConfig {
        wpm: 250,
        comma_multiplier: 1.8,
        period_multiplier: 3.3,
        question_multiplier: 3.75,
        exclamation_multiplier: 3.0,
        paragraph_multiplier: 3.75,
        phrase_boundary_multiplier: 0.45,
        enable_momentum: false,
        ..CadenceConfig::default()
    }
}

fn speed() -> CadenceConfig {
    CadenceConfig {
        wpm: 450,
        comma_multiplier: 0.6,
        period_multiplier: 1.1,
        question_multiplier: 1.25,
        exclamation_multiplier: 1.0,
        paragraph_multiplier: 1.25,
        phrase_boundary_multiplier: 0.15,
        enable_momentum: true,
        momentum_max_boost: 0.25,
        momentum_build_threshold: 2,
        paragraph_ease_in_wpm_drop: 50,
        paragraph_ease_in_words: 3,
        ..CadenceConfig::default()
    }
}

fn technical() -> CadenceConfig {
    CadenceConfig {
        wpm: 275,
        comma_multiplier: 1.5,
        period_multiplier: 2.75,
        question_multiplier: 3.125,
        exclamation_multiplier: 2.5,
        paragraph_multiplier: 3.125,
        domain_mode: DomainMode::Technical,
        enable_complexity_factor: true,
        enable_momentum: false,
        paragraph_ease_in_wpm_drop: 100,
        paragraph_ease_in_words: 6,
        ..CadenceConfig::default()
    }
}

fn comprehension() -> CadenceConfig {
    CadenceConfig {
        wpm: 225,
        comma_multiplier: 2.1,
        period_multiplier: 3.85,
        question_multiplier: 4.375,
        exclamation_multiplier: 3.5,
        paragraph_multiplier: 4.375,
        phrase_boundary_multiplier: 0.52,
        max_words_without_pause: 5,
        enable_momentum: false,
        paragraph_ease_in_wpm_drop: 100,
        paragraph_ease_in_words: 7,
        ..CadenceConfig::default()
    }
}

fn preset_config(name: &str) -> Result<CadenceConfig, CadenceError> {
    match name {
        "factory" => Ok(CadenceConfig::default()),
        "casual" => Ok(casual()),
        "speed" => Ok(speed()),
        "technical" => Ok(technical()),
        "comprehension" => Ok(comprehension()),
        other => Err(CadenceError::UnknownPreset(other.to_string())),
    }
}

/// All presets, materialized.
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: "factory",
            config: CadenceConfig::default(),
        },
        Preset {
            name: "casual",
            config: casual(),
        },
        Preset {
            name: "speed",
            config: speed(),
        },
        Preset {
            name: "technical",
            config: technical(),
        },
        Preset {
            name: "comprehension",
            config: comprehension(),
        },
    ]
}

/// Resolves a preset by name, optionally keeping the caller's current WPM.
pub fn apply_preset(
    name: &str,
    preserve_wpm: bool,
    current_wpm: u32,
) -> Result<CadenceConfig, CadenceError> {
    let mut config = preset_config(name)?;
    if preserve_wpm {
        config.wpm = clamp_wpm(current_wpm);
    }
    Ok(config)
}

/// Fields compared for every preset: speed, the punctuation multipliers,
/// the paragraph multiplier, and momentum.
fn matches_reduced(config: &CadenceConfig, preset: &CadenceConfig) -> bool {
    config.wpm == preset.wpm
        && config.comma_multiplier == preset.comma_multiplier
        && config.semicolon_multiplier == preset.semicolon_multiplier
        && config.colon_multiplier == preset.colon_multiplier
        && config.period_multiplier == preset.period_multiplier
        && config.question_multiplier == preset.question_multiplier
        && config.exclamation_multiplier == preset.exclamation_multiplier
        && config.paragraph_multiplier == preset.paragraph_multiplier
        && config.enable_momentum == preset.enable_momentum
}

fn matches_named(config: &CadenceConfig, preset: &CadenceConfig) -> bool {
    matches_reduced(config, preset) && config.domain_mode == preset.domain_mode
}

/// Names the preset a config corresponds to, comparing only the fields a
/// preset pins; everything else may differ and the name still reports.
/// Returns "custom" when nothing matches.
pub fn detect_current_preset(config: &CadenceConfig) -> &'static str {
    let named = [
        ("casual", casual()),
        ("speed", speed()),
        ("technical", technical()),
        ("comprehension", comprehension()),
    ];
    for (name, preset) in named {
        if matches_named(config, &preset) {
            return name;
        }
    }
    if matches_reduced(config, &CadenceConfig::default()) {
        return "factory";
    }
    "custom"
}
