//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gameof_core::{GameSession, Locale, UiStrings, PRESET_WORDS};
use gameof_persistence::SnapshotStore;
use tracing::{debug, error};

/// Which screen is on display. Never stored, always derived: a declared
/// winner means results, an unstarted session means setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Setup,
    Game,
    Results,
}

/// Input zones on the setup screen, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupFocus {
    Presets,
    Word,
    Name,
    Roster,
}

/// Main application state: the live session plus everything the terminal
/// needs that the game itself does not care about.
///
/// Every mutation of the session is followed by a save, so quitting at any
/// moment loses nothing. Resetting is the one exception: it empties the slot
/// instead.
pub struct App {
    session: GameSession,
    store: Box<dyn SnapshotStore>,
    strings: &'static UiStrings,
    focus: SetupFocus,
    preset_cursor: usize,
    name_input: String,
    selected: usize,
    running: bool,
}

impl App {
    /// Creates the application, resuming the saved game if the slot holds one.
    pub fn new(store: Box<dyn SnapshotStore>, locale: Locale) -> Self {
        let session = store
            .load()
            .map(GameSession::from_snapshot)
            .unwrap_or_default();
        if session.started() {
            debug!("resuming a saved game");
        }
        Self {
            session,
            store,
            strings: locale.strings(),
            focus: SetupFocus::Presets,
            preset_cursor: 0,
            name_input: String::new(),
            selected: 0,
            running: true,
        }
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn strings(&self) -> &'static UiStrings {
        self.strings
    }

    pub fn focus(&self) -> SetupFocus {
        self.focus
    }

    pub fn preset_cursor(&self) -> usize {
        self.preset_cursor
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Index of the highlighted player, shared by the roster and the board.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn screen(&self) -> Screen {
        if self.session.winner().is_some() {
            Screen::Results
        } else if !self.session.started() {
            Screen::Setup
        } else {
            Screen::Game
        }
    }

    /// Routes one key press. Esc and Ctrl+C quit from anywhere; everything
    /// else depends on the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            self.running = false;
            return;
        }
        match self.screen() {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Game => self.handle_game_key(key),
            Screen::Results => self.handle_results_key(key),
        }
    }

    fn handle_setup_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            // Ctrl+S starts the game from any focus zone.
            if key.code == KeyCode::Char('s') && self.session.start() {
                self.selected = 0;
                self.persist();
            }
            return;
        }
        match key.code {
            KeyCode::Tab => self.focus = next_focus(self.focus),
            KeyCode::BackTab => self.focus = prev_focus(self.focus),
            code => match self.focus {
                SetupFocus::Presets => self.handle_preset_key(code),
                SetupFocus::Word => self.handle_word_key(code),
                SetupFocus::Name => self.handle_name_key(code),
                SetupFocus::Roster => self.handle_roster_key(code),
            },
        }
    }

    fn handle_preset_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                self.preset_cursor =
                    (self.preset_cursor + PRESET_WORDS.len() - 1) % PRESET_WORDS.len();
            }
            KeyCode::Right => {
                self.preset_cursor = (self.preset_cursor + 1) % PRESET_WORDS.len();
            }
            KeyCode::Enter => {
                self.session.set_target_word(PRESET_WORDS[self.preset_cursor]);
                self.persist();
            }
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    // The word field edits the session directly on every keystroke; there is
    // no separate draft buffer to confirm.
    fn handle_word_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                let mut word = self.session.target_word().to_string();
                word.push(c);
                self.session.set_target_word(&word);
                self.persist();
            }
            KeyCode::Backspace => {
                let mut word = self.session.target_word().to_string();
                if word.pop().is_some() {
                    self.session.set_target_word(&word);
                    self.persist();
                }
            }
            _ => {}
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.name_input.push(c),
            KeyCode::Backspace => {
                self.name_input.pop();
            }
            KeyCode::Enter => {
                if self.session.add_player(&self.name_input) {
                    self.name_input.clear();
                    self.persist();
                }
            }
            _ => {}
        }
    }

    fn handle_roster_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.session.players().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Delete | KeyCode::Char('x') => {
                if self.session.remove_player(self.selected) {
                    let last = self.session.players().len().saturating_sub(1);
                    self.selected = self.selected.min(last);
                    self.persist();
                }
            }
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                if self.selected + 1 < self.session.players().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.session.add_letter(self.selected) {
                    self.persist();
                }
            }
            KeyCode::Char('u') | KeyCode::Backspace => {
                if self.session.remove_letter(self.selected) {
                    self.persist();
                }
            }
            KeyCode::Char('w') => {
                if self.session.toggle_wildcard(self.selected) {
                    self.persist();
                }
            }
            KeyCode::Char('l') => {
                // Back to the leaderboard, shown once a winner was declared.
                if self.session.had_winner() && self.session.recheck_winner() {
                    self.persist();
                }
            }
            KeyCode::Char('r') => self.reset_game(),
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') => {
                self.session.dismiss_winner();
                self.persist();
            }
            KeyCode::Char('n') => self.reset_game(),
            KeyCode::Char('q') => self.running = false,
            _ => {}
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.store.save(&self.session.snapshot()) {
            error!(%err, "failed to save the game");
        }
    }

    fn reset_game(&mut self) {
        self.session.reset();
        self.name_input.clear();
        self.selected = 0;
        if let Err(err) = self.store.clear() {
            error!(%err, "failed to clear the saved game");
        }
    }

    #[cfg(test)]
    fn store(&self) -> &dyn SnapshotStore {
        self.store.as_ref()
    }
}

fn next_focus(focus: SetupFocus) -> SetupFocus {
    match focus {
        SetupFocus::Presets => SetupFocus::Word,
        SetupFocus::Word => SetupFocus::Name,
        SetupFocus::Name => SetupFocus::Roster,
        SetupFocus::Roster => SetupFocus::Presets,
    }
}

fn prev_focus(focus: SetupFocus) -> SetupFocus {
    match focus {
        SetupFocus::Presets => SetupFocus::Roster,
        SetupFocus::Word => SetupFocus::Presets,
        SetupFocus::Name => SetupFocus::Word,
        SetupFocus::Roster => SetupFocus::Name,
    }
}
