use gameof_core::GameSession;
use gameof_types::Player;

/// Creates a session with a word and players, not yet started
pub fn create_lobby(word: &str, names: &[&str]) -> GameSession {
    let mut session = GameSession::new();
    session.set_target_word(word);
    for name in names {
        assert!(session.add_player(name), "player {name} rejected");
    }
    session
}

/// Creates a running game with the given word and players
pub fn create_started_game(word: &str, names: &[&str]) -> GameSession {
    let mut session = create_lobby(word, names);
    assert!(session.start(), "game refused to start");
    session
}

/// Creates a standard two-player game on the BIKE preset
pub fn create_bike_game() -> GameSession {
    create_started_game("BIKE", &["Alice", "Bob"])
}

/// Taps the same player `count` times
pub fn add_letters(session: &mut GameSession, index: usize, count: usize) {
    for _ in 0..count {
        session.add_letter(index);
    }
}

/// Taps a player until their track is full and they drop out
pub fn eliminate(session: &mut GameSession, index: usize) {
    let len = session.stripped_target().chars().count();
    add_letters(session, index, len);
    assert!(
        session.players()[index].eliminated,
        "player {index} survived a full track"
    );
}

/// Letters collected so far by the player at `index`
pub fn letters_of(session: &GameSession, index: usize) -> String {
    session.players()[index].letters.clone()
}

/// Asserts a ranking by player names, in order
pub fn assert_ranking(ranked: &[Player], expected: &[&str]) {
    let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, expected);
}
