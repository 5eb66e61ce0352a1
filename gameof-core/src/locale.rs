/// Languages the interface ships in. English is the fallback for every tag
/// that is not recognisably Italian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    It,
}

/// Every piece of fixed interface text, one field per label. Screens render
/// from a `&'static UiStrings` so switching language is a table swap.
#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub choose_word: &'static str,
    pub custom_word: &'static str,
    pub players: &'static str,
    pub player_name: &'static str,
    pub start_game: &'static str,
    pub game_over: &'static str,
    pub wins: &'static str,
    pub final_ranking: &'static str,
    pub back_to_game: &'static str,
    pub new_game: &'static str,
    pub eliminated: &'static str,
    pub wildcard_used: &'static str,
    pub tap_to_add: &'static str,
    pub back_to_leaderboard: &'static str,
    pub game_saved: &'static str,
}

static EN: UiStrings = UiStrings {
    title: "Game Of...",
    choose_word: "Choose or create word:",
    custom_word: "Custom word...",
    players: "Players:",
    player_name: "Player name...",
    start_game: "Start Game",
    game_over: "Game Over",
    wins: "wins!",
    final_ranking: "Final Ranking",
    back_to_game: "Back to Game",
    new_game: "New Game",
    eliminated: "ELIMINATED",
    wildcard_used: "Wildcard used",
    tap_to_add: "Tap letters to add",
    back_to_leaderboard: "Back to Leaderboard",
    game_saved: "Game saved automatically • Refresh anytime",
};

static IT: UiStrings = UiStrings {
    title: "Game Of...",
    choose_word: "Scegli o crea parola:",
    custom_word: "Parola personalizzata...",
    players: "Giocatori:",
    player_name: "Nome giocatore...",
    start_game: "Inizia Partita",
    game_over: "Partita Finita",
    wins: "vince!",
    final_ranking: "Classifica Finale",
    back_to_game: "Torna al Gioco",
    new_game: "Nuova Partita",
    eliminated: "ELIMINATO",
    wildcard_used: "Jolly usato",
    tap_to_add: "Tocca le lettere per aggiungere",
    back_to_leaderboard: "Torna alla Classifica",
    game_saved: "Partita salvata automaticamente • Ricarica quando vuoi",
};

impl Locale {
    /// Resolves a BCP 47-ish tag ("it", "it-IT", "it_IT.UTF-8") by its
    /// two-letter prefix, case-insensitively. Anything else is English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.get(..2) {
            Some(prefix) if prefix.eq_ignore_ascii_case("it") => Locale::It,
            _ => Locale::En,
        }
    }

    /// Picks the locale from the process environment, honouring the usual
    /// POSIX precedence: `LC_ALL`, then `LC_MESSAGES`, then `LANG`. Unset
    /// and empty variables are skipped.
    pub fn from_env() -> Self {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|tag| !tag.is_empty()))
            .map(|tag| Self::from_tag(&tag))
            .unwrap_or_default()
    }

    pub fn strings(self) -> &'static UiStrings {
        match self {
            Locale::En => &EN,
            Locale::It => &IT,
        }
    }
}
