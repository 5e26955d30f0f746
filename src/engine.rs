//! Game rules: one live session plus the win counter.
//!
//! `GameEngine` owns everything mutable. A session moves from `InProgress` to
//! `Won` or `Lost` and stays there until `start_session` replaces it; guesses
//! against a finished session are ignored. The engine takes keys exactly as
//! the presentation layer supplies them (no case folding, no filtering of
//! named keys such as `"Shift"`, which simply never match).

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info};
use rand::Rng;
use rand::rngs::StdRng;

use crate::catalog::{Catalog, WordEntry};
use crate::config::GameConfig;
use crate::error::GameError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// What a single `guess` did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; `revealed` positions were uncovered at once.
    Hit { revealed: usize },
    Miss,
    /// Key was tried before in this session. Nothing changed.
    AlreadyGuessed,
    /// Session already won or lost. Nothing changed.
    SessionOver,
}

/// Wins across sessions, reset only when the engine is dropped (page reload).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    wins: u32,
}

impl ScoreBoard {
    pub fn wins(&self) -> u32 {
        self.wins
    }

    fn record_win(&mut self) {
        self.wins += 1;
    }
}

#[derive(Clone, Debug)]
pub struct GameSession {
    target: &'static WordEntry,
    // char -> every index it occupies in `target`
    letter_positions: BTreeMap<char, BTreeSet<usize>>,
    revealed: Vec<Option<char>>,
    guessed: Vec<String>,
    attempts_remaining: u32,
    correct_letter_count: usize,
    status: Status,
}

impl GameSession {
    pub fn new(target: &'static WordEntry, config: &GameConfig) -> Self {
        let mut letter_positions: BTreeMap<char, BTreeSet<usize>> = BTreeMap::new();
        for (idx, c) in target.name.chars().enumerate() {
            letter_positions.entry(c).or_default().insert(idx);
        }
        let len = target.name.chars().count();
        Self {
            target,
            letter_positions,
            revealed: vec![None; len],
            guessed: Vec::new(),
            attempts_remaining: config.allowed_guesses,
            correct_letter_count: 0,
            status: Status::InProgress,
        }
    }

    pub fn target(&self) -> &'static WordEntry {
        self.target
    }

    pub fn word_len(&self) -> usize {
        self.revealed.len()
    }

    pub fn revealed(&self) -> &[Option<char>] {
        &self.revealed
    }

    /// Attempted keys in the order they were first tried.
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    pub fn correct_letter_count(&self) -> usize {
        self.correct_letter_count
    }

    pub fn status(&self) -> Status {
        self.status
    }

    fn has_guessed(&self, key: &str) -> bool {
        self.guessed.iter().any(|g| g == key)
    }

    fn guess(&mut self, key: &str) -> GuessOutcome {
        if self.status.is_terminal() {
            return GuessOutcome::SessionOver;
        }
        if self.has_guessed(key) {
            return GuessOutcome::AlreadyGuessed;
        }
        self.guessed.push(key.to_owned());

        let hit = single_char(key).and_then(|c| self.letter_positions.get(&c).map(|p| (c, p)));
        let outcome = match hit {
            Some((c, positions)) => {
                for &pos in positions {
                    self.revealed[pos] = Some(c);
                }
                self.correct_letter_count += positions.len();
                GuessOutcome::Hit { revealed: positions.len() }
            }
            None => {
                self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                GuessOutcome::Miss
            }
        };

        // Win is checked first so completing the word always wins.
        if self.correct_letter_count == self.word_len() {
            self.status = Status::Won;
        } else if self.attempts_remaining == 0 {
            self.status = Status::Lost;
            self.show_word();
        }
        outcome
    }

    /// Fill every slot with the target letters; used when the session is lost.
    fn show_word(&mut self) {
        for (slot, c) in self.revealed.iter_mut().zip(self.target.name.chars()) {
            *slot = Some(c);
        }
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Read-only snapshot handed to the renderer after every input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplayState {
    pub revealed: Vec<char>,
    pub guessed: Vec<String>,
    pub attempts_remaining: u32,
    pub wins: u32,
    pub status: Status,
}

impl DisplayState {
    /// Slots joined by single spaces, e.g. `t _ _ e _`.
    pub fn revealed_text(&self) -> String {
        let mut out = String::with_capacity(self.revealed.len() * 2);
        for (i, c) in self.revealed.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(*c);
        }
        out
    }

    pub fn guessed_text(&self) -> String {
        self.guessed.join(" ")
    }
}

/// End-of-session reveal: message, picture and name of the animal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndOfGame {
    pub status: Status,
    pub entry: &'static WordEntry,
}

impl EndOfGame {
    pub fn message(&self) -> &'static str {
        match self.status {
            Status::Won => "You Win!",
            _ => "You Lose!",
        }
    }
}

pub struct GameEngine<G: Rng = StdRng> {
    catalog: Catalog,
    config: GameConfig,
    rng: G,
    session: GameSession,
    scoreboard: ScoreBoard,
}

impl<G: Rng> GameEngine<G> {
    /// Builds the engine and starts the first session.
    pub fn new(catalog: Catalog, config: GameConfig, mut rng: G) -> Result<Self, GameError> {
        config.validate()?;
        let target = catalog.pick(&mut rng);
        debug!("starting session ({} letters)", target.name.len());
        let session = GameSession::new(target, &config);
        Ok(Self { catalog, config, rng, session, scoreboard: ScoreBoard::default() })
    }

    /// Replaces the current session with a fresh one. Wins are kept.
    pub fn start_session(&mut self) -> &GameSession {
        let target = self.catalog.pick(&mut self.rng);
        debug!("starting session ({} letters)", target.name.len());
        self.session = GameSession::new(target, &self.config);
        &self.session
    }

    pub fn guess(&mut self, key: &str) -> GuessOutcome {
        let outcome = self.session.guess(key);
        if matches!(outcome, GuessOutcome::Hit { .. } | GuessOutcome::Miss) {
            match self.session.status {
                Status::Won => {
                    self.scoreboard.record_win();
                    info!("won '{}', wins = {}", self.session.target.name, self.scoreboard.wins());
                }
                Status::Lost => info!("lost '{}'", self.session.target.name),
                Status::InProgress => {}
            }
        }
        outcome
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> Status {
        self.session.status
    }

    pub fn wins(&self) -> u32 {
        self.scoreboard.wins()
    }

    pub fn display_state(&self) -> DisplayState {
        let placeholder = self.config.placeholder;
        DisplayState {
            revealed: self.session.revealed.iter().map(|s| s.unwrap_or(placeholder)).collect(),
            guessed: self.session.guessed.clone(),
            attempts_remaining: self.session.attempts_remaining,
            wins: self.scoreboard.wins(),
            status: self.session.status,
        }
    }

    /// `Some` once the session is won or lost.
    pub fn end_of_game(&self) -> Option<EndOfGame> {
        self.session
            .status
            .is_terminal()
            .then_some(EndOfGame { status: self.session.status, entry: self.session.target })
    }
}
