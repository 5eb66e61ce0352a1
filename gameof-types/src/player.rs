use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A participant in the current session.
///
/// Players are identified by display name, unique at join time. `letters`
/// holds the characters accumulated so far and is always a prefix of the
/// space-stripped target word; the session owns that invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub letters: String,
    pub eliminated: bool,
    pub wildcard_used: bool,
}

impl Player {
    /// Creates a player with no letters accumulated yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            letters: String::new(),
            eliminated: false,
            wildcard_used: false,
        }
    }

    /// Number of letters accumulated so far, counted in characters rather
    /// than bytes so accented target words track correctly.
    pub fn letter_count(&self) -> usize {
        self.letters.chars().count()
    }
}
