use gameof_types::{GameSnapshot, Player};
use tracing::debug;

use crate::words::{normalize_word, strip_spaces};

/// Live state of one party game, mutated exclusively through the transition
/// methods below.
///
/// Every guard is a silent precondition check: invalid input leaves the
/// session untouched and the method returns `false`. The UI ignores the
/// return value and re-renders from state; tests use it to pin down exactly
/// which calls applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameSession {
    target_word: String,
    players: Vec<Player>,
    started: bool,
    winner: Option<String>,
    had_winner: bool,
}

impl GameSession {
    /// Creates an empty session: no word, no players, nothing started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a session from a stored snapshot. Hydration is verbatim; a
    /// snapshot is trusted the way it was written.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Self {
        Self {
            target_word: snapshot.game_word,
            players: snapshot.players,
            started: snapshot.game_started,
            winner: if snapshot.winner.is_empty() {
                None
            } else {
                Some(snapshot.winner)
            },
            had_winner: snapshot.was_winner,
        }
    }

    /// Serializable view of the whole session, written to the storage slot
    /// after every mutation. The wire carries the winner as a plain string,
    /// empty when none is declared.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            game_word: self.target_word.clone(),
            players: self.players.clone(),
            game_started: self.started,
            winner: self.winner.clone().unwrap_or_default(),
            was_winner: self.had_winner,
        }
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    /// The target word with cosmetic spaces removed; all length and equality
    /// checks run against this form.
    pub fn stripped_target(&self) -> String {
        strip_spaces(&self.target_word)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// True once a winner has ever been declared in this game, even after
    /// the results screen was dismissed.
    pub fn had_winner(&self) -> bool {
        self.had_winner
    }

    /// Count of players still in the running.
    pub fn active_players(&self) -> usize {
        self.players.iter().filter(|p| !p.eliminated).count()
    }

    /// Replaces the target word, uppercased. Spaces are kept for display;
    /// gameplay always works on the stripped form.
    pub fn set_target_word(&mut self, word: &str) {
        self.target_word = normalize_word(word);
    }

    /// Appends a new player with the trimmed name. Empty names and exact
    /// duplicates are ignored.
    pub fn add_player(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.players.iter().any(|p| p.name == name) {
            return false;
        }
        debug!(player = name, "player joined");
        self.players.push(Player::new(name));
        true
    }

    /// Removes the player at `index`; out-of-range indices are ignored.
    pub fn remove_player(&mut self, index: usize) -> bool {
        if index >= self.players.len() {
            return false;
        }
        let player = self.players.remove(index);
        debug!(player = %player.name, "player removed");
        true
    }

    /// Starts the game once a word with at least one letter is set and at
    /// least two players joined.
    pub fn start(&mut self) -> bool {
        if self.stripped_target().is_empty() || self.players.len() < 2 {
            return false;
        }
        debug!(word = %self.target_word, players = self.players.len(), "game started");
        self.started = true;
        true
    }

    /// Gives the player at `index` the next letter of the shared target
    /// word, at that player's own progress offset. Completing the word
    /// eliminates the player; if that leaves exactly one player standing,
    /// the survivor is declared the winner. This is the only transition that
    /// can first produce a winner.
    pub fn add_letter(&mut self, index: usize) -> bool {
        let stripped = self.stripped_target();
        let Some(player) = self.players.get_mut(index) else {
            return false;
        };
        if player.eliminated {
            return false;
        }
        let Some(next) = stripped.chars().nth(player.letter_count()) else {
            // Track already full (or the word strips to nothing).
            return false;
        };
        player.letters.push(next);
        if player.letters == stripped {
            player.eliminated = true;
            debug!(player = %player.name, "player eliminated");
        }
        if let Some(name) = self.sole_active().map(|p| p.name.clone()) {
            debug!(winner = %name, "winner declared");
            self.winner = Some(name);
            self.had_winner = true;
        }
        true
    }

    /// Takes back the last letter of the player at `index`. A player pulled
    /// back from completion is always reinstated as active, and any on-screen
    /// winner is withdrawn with them, even when the undone letter belonged
    /// to somebody else. `had_winner` survives the withdrawal.
    pub fn remove_letter(&mut self, index: usize) -> bool {
        let Some(player) = self.players.get_mut(index) else {
            return false;
        };
        if player.letters.is_empty() {
            return false;
        }
        player.letters.pop();
        player.eliminated = false;
        self.winner = None;
        true
    }

    /// Flips the cosmetic wildcard marker; eliminated players keep theirs.
    pub fn toggle_wildcard(&mut self, index: usize) -> bool {
        let Some(player) = self.players.get_mut(index) else {
            return false;
        };
        if player.eliminated {
            return false;
        }
        player.wildcard_used = !player.wildcard_used;
        true
    }

    /// Re-derives the winner after the results screen was dismissed: if
    /// exactly one player is still active, their name goes back on the
    /// board. Never touches `had_winner`.
    pub fn recheck_winner(&mut self) -> bool {
        match self.sole_active().map(|p| p.name.clone()) {
            Some(name) => {
                self.winner = Some(name);
                true
            }
            None => false,
        }
    }

    /// Dismisses the results screen without forgetting that a winner was
    /// declared; the board then offers the way back to the leaderboard.
    pub fn dismiss_winner(&mut self) {
        self.winner = None;
    }

    /// Clears everything back to the empty default. Callers that own a
    /// storage slot erase it alongside.
    pub fn reset(&mut self) {
        debug!("session reset");
        *self = Self::default();
    }

    fn sole_active(&self) -> Option<&Player> {
        let mut active = self.players.iter().filter(|p| !p.eliminated);
        match (active.next(), active.next()) {
            (Some(player), None) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_session(word: &str, names: &[&str]) -> GameSession {
        let mut session = GameSession::new();
        session.set_target_word(word);
        for name in names {
            assert!(session.add_player(name));
        }
        assert!(session.start());
        session
    }

    #[test]
    fn test_add_player_trims_and_rejects_duplicates() {
        let mut session = GameSession::new();

        assert!(session.add_player("  Alice  "));
        assert_eq!(session.players()[0].name, "Alice");

        // Exact duplicate after trimming, silently ignored.
        assert!(!session.add_player("Alice"));
        assert!(!session.add_player(" Alice "));
        assert_eq!(session.players().len(), 1);

        // Names are case-sensitive, so this is a different player.
        assert!(session.add_player("alice"));
        assert_eq!(session.players().len(), 2);
    }

    #[test]
    fn test_add_player_rejects_empty_and_whitespace() {
        let mut session = GameSession::new();
        assert!(!session.add_player(""));
        assert!(!session.add_player("   "));
        assert!(session.players().is_empty());
    }

    #[test]
    fn test_remove_player_is_bounds_checked() {
        let mut session = GameSession::new();
        session.add_player("Alice");

        assert!(!session.remove_player(1));
        assert!(!session.remove_player(usize::MAX));
        assert_eq!(session.players().len(), 1);

        assert!(session.remove_player(0));
        assert!(session.players().is_empty());
        assert!(!session.remove_player(0));
    }

    #[test]
    fn test_start_requires_word_and_two_players() {
        let mut session = GameSession::new();
        assert!(!session.start());

        session.set_target_word("bike");
        assert!(!session.start());

        session.add_player("X");
        assert!(!session.start());

        session.add_player("Y");
        assert!(session.start());
        assert!(session.started());
    }

    #[test]
    fn test_start_rejects_words_with_no_letters() {
        let mut session = GameSession::new();
        session.add_player("X");
        session.add_player("Y");

        session.set_target_word("   ");
        assert!(!session.start());

        session.set_target_word(" GO ");
        assert!(session.start());
    }

    #[test]
    fn test_set_target_word_uppercases() {
        let mut session = GameSession::new();
        session.set_target_word("hot dog");
        assert_eq!(session.target_word(), "HOT DOG");
        assert_eq!(session.stripped_target(), "HOTDOG");
    }

    #[test]
    fn test_add_letter_follows_each_players_own_offset() {
        let mut session = started_session("BIKE", &["X", "Y"]);

        assert!(session.add_letter(0));
        assert!(session.add_letter(0));
        assert!(session.add_letter(1));

        assert_eq!(session.players()[0].letters, "BI");
        assert_eq!(session.players()[1].letters, "B");
    }

    #[test]
    fn test_add_letter_ignores_bad_indices_and_full_tracks() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        assert!(!session.add_letter(5));

        for _ in 0..4 {
            session.add_letter(0);
        }
        assert!(session.players()[0].eliminated);

        // Eliminated player's track stays full.
        assert!(!session.add_letter(0));
        assert_eq!(session.players()[0].letters, "BIKE");
    }

    #[test]
    fn test_letters_are_always_a_prefix_of_the_stripped_target() {
        let mut session = started_session("HOT DOG", &["X", "Y"]);
        let stripped = session.stripped_target();

        for step in 1..=stripped.chars().count() {
            assert!(session.add_letter(0));
            let letters = session.players()[0].letters.clone();
            assert_eq!(letters.chars().count(), step);
            assert!(stripped.starts_with(&letters));
        }
        assert!(session.players()[0].eliminated);
    }

    #[test]
    fn test_elimination_happens_exactly_at_full_length() {
        let mut session = started_session("SNOW", &["X", "Y"]);

        for _ in 0..3 {
            session.add_letter(0);
            assert!(!session.players()[0].eliminated);
        }
        session.add_letter(0);
        assert!(session.players()[0].eliminated);
    }

    #[test]
    fn test_winner_declared_when_one_player_remains() {
        let mut session = started_session("BIKE", &["X", "Y"]);

        for _ in 0..4 {
            session.add_letter(0);
        }

        assert!(session.players()[0].eliminated);
        assert_eq!(session.active_players(), 1);
        assert_eq!(session.winner(), Some("Y"));
        assert!(session.had_winner());
    }

    #[test]
    fn test_no_winner_while_two_or_more_remain() {
        let mut session = started_session("BIKE", &["X", "Y", "Z"]);

        for _ in 0..4 {
            session.add_letter(0);
        }

        assert_eq!(session.active_players(), 2);
        assert_eq!(session.winner(), None);
        assert!(!session.had_winner());
    }

    #[test]
    fn test_remove_letter_reinstates_and_withdraws_winner() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        for _ in 0..4 {
            session.add_letter(0);
        }
        assert_eq!(session.winner(), Some("Y"));

        assert!(session.remove_letter(0));

        assert_eq!(session.players()[0].letters, "BIK");
        assert!(!session.players()[0].eliminated);
        assert_eq!(session.winner(), None);
        // Sticky: the game remembers a winner was once declared.
        assert!(session.had_winner());
    }

    #[test]
    fn test_remove_letter_clears_winner_even_when_nobody_is_reinstated() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        session.add_letter(1);
        for _ in 0..4 {
            session.add_letter(0);
        }
        assert_eq!(session.winner(), Some("Y"));

        // Undoing the still-active winner's own letter changes nobody's
        // elimination, yet the declaration is withdrawn all the same.
        assert!(session.remove_letter(1));
        assert_eq!(session.winner(), None);
        assert!(session.had_winner());
        assert_eq!(session.active_players(), 1);
    }

    #[test]
    fn test_remove_letter_noop_on_empty_track() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        assert!(!session.remove_letter(0));
        assert!(!session.remove_letter(7));
    }

    #[test]
    fn test_toggle_wildcard_is_idempotent_over_two_calls() {
        let mut session = started_session("BIKE", &["X", "Y"]);

        assert!(!session.players()[0].wildcard_used);
        assert!(session.toggle_wildcard(0));
        assert!(session.players()[0].wildcard_used);
        assert!(session.toggle_wildcard(0));
        assert!(!session.players()[0].wildcard_used);
    }

    #[test]
    fn test_toggle_wildcard_ignores_eliminated_players() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        for _ in 0..4 {
            session.add_letter(0);
        }

        assert!(!session.toggle_wildcard(0));
        assert!(!session.players()[0].wildcard_used);
        assert!(!session.toggle_wildcard(9));
    }

    #[test]
    fn test_recheck_winner_restores_a_dismissed_declaration() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        for _ in 0..4 {
            session.add_letter(0);
        }

        session.dismiss_winner();
        assert_eq!(session.winner(), None);
        assert!(session.had_winner());

        assert!(session.recheck_winner());
        assert_eq!(session.winner(), Some("Y"));
    }

    #[test]
    fn test_recheck_winner_noop_with_multiple_active_players() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        assert!(!session.recheck_winner());
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn test_active_player_count_tracks_eliminations() {
        let mut session = started_session("GO", &["A", "B", "C"]);
        assert_eq!(session.active_players(), 3);

        session.add_letter(0);
        session.add_letter(0);
        assert_eq!(session.active_players(), 2);

        let completed = session
            .players()
            .iter()
            .filter(|p| p.letters == session.stripped_target())
            .count();
        assert_eq!(session.active_players(), session.players().len() - completed);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = started_session("BIKE", &["X", "Y"]);
        for _ in 0..4 {
            session.add_letter(0);
        }

        session.reset();

        assert_eq!(session.target_word(), "");
        assert!(session.players().is_empty());
        assert!(!session.started());
        assert_eq!(session.winner(), None);
        assert!(!session.had_winner());
    }

    #[test]
    fn test_snapshot_round_trip_preserves_observable_state() {
        let mut session = started_session("HOT DOG", &["Alice", "Bob"]);
        session.add_letter(0);
        session.add_letter(0);
        session.toggle_wildcard(1);

        let restored = GameSession::from_snapshot(session.snapshot());
        assert_eq!(session, restored);
    }

    #[test]
    fn test_snapshot_maps_missing_winner_to_empty_string() {
        let session = GameSession::new();
        assert_eq!(session.snapshot().winner, "");

        let mut finished = started_session("GO", &["A", "B"]);
        finished.add_letter(0);
        finished.add_letter(0);
        assert_eq!(finished.snapshot().winner, "B");
        assert!(finished.snapshot().was_winner);

        let restored = GameSession::from_snapshot(finished.snapshot());
        assert_eq!(restored.winner(), Some("B"));
    }

    #[test]
    fn test_accented_target_words_track_by_character() {
        let mut session = started_session("caffè", &["X", "Y"]);
        assert_eq!(session.target_word(), "CAFFÈ");

        for _ in 0..5 {
            session.add_letter(0);
        }
        assert_eq!(session.players()[0].letters, "CAFFÈ");
        assert!(session.players()[0].eliminated);

        session.remove_letter(0);
        assert_eq!(session.players()[0].letters, "CAFF");
        assert!(!session.players()[0].eliminated);
    }
}
