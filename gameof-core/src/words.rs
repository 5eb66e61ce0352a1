/// Ready-made target words offered on the setup screen, in display order.
pub const PRESET_WORDS: [&str; 6] = ["RUMBLE", "SKATE", "BIKE", "SNOW", "DONKEY", "BEER"];

/// Canonical form of a target word as stored in the session: uppercased,
/// spaces left alone. The word field is edited live, so trimming here would
/// fight the keystroke that types a space.
pub fn normalize_word(word: &str) -> String {
    word.to_uppercase()
}

/// The playable form of a target word: every whitespace character dropped.
/// Letter tracks and elimination checks both run on this form.
pub fn strip_spaces(word: &str) -> String {
    word.chars().filter(|c| !c.is_whitespace()).collect()
}
