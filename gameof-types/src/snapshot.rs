use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::player::Player;

/// The complete serializable session state.
///
/// This is the one object written to the durable storage slot after every
/// mutation and read back once on startup. Field names are camelCase to stay
/// compatible with the web client's local-storage schema, so a snapshot
/// written by either frontend restores on the other.
///
/// There is no version field. `wasWinner` is the one field older snapshots
/// may lack; it defaults to `false` on read.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_word: String,
    pub players: Vec<Player>,
    pub game_started: bool,
    /// Name of the declared winner; empty string when no winner is on screen.
    pub winner: String,
    #[serde(default)]
    pub was_winner: bool,
}
