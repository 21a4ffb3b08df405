// Syllable estimation by vowel-run counting with silent-e, consonant-le,
// and -ed adjustments. Capped at 6.

const MAX_SYLLABLES: u8 = 6;

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates syllables for a word body. Non-letters are ignored; anything of
/// three letters or fewer counts as one syllable.
pub fn estimate_syllables(word: &str) -> u8 {
    let letters: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_lowercase();
    if letters.is_empty() {
        return 1;
    }
    let length = letters.len();
    if length <= 3 {
        return 1;
    }

    // Count maximal vowel runs.
    let mut count: u32 = 0;
    let mut previous_was_vowel = false;
    for c in letters.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    let chars: Vec<char> = letters.chars().collect();
    // Trailing silent e ("cake", "table").
    if letters.ends_with('e') && count > 1 {
        count -= 1;
    }
    // Consonant + "le" carries its own syllable ("apple", "little").
    if letters.ends_with("le") && length >= 3 && !is_vowel(chars[length - 3]) {
        count += 1;
    }
    // Trailing "-ed" is usually silent unless it follows t or d ("jumped"
    // vs "wanted").
    if letters.ends_with("ed") && length >= 3 {
        let before = chars[length - 3];
        if before != 't' && before != 'd' && count > 1 {
            count -= 1;
        }
    }

    (count.max(1) as u8).min(MAX_SYLLABLES)
}
