use thiserror::Error;

use crate::country::{Country, CountryRecord, Language, find_by_name};
use crate::guess::Guess;
use crate::score::ScoreSubmission;
use crate::store::{GuessStore, StoreError};

/// Guesses allowed per day.
pub const MAX_TRY_COUNT: usize = 6;

/// The day's hidden exporter/importer pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPair {
    pub from: &'static Country,
    pub to: &'static Country,
}

impl TargetPair {
    /// `None` when both codes point at the same country.
    pub fn new(from: &'static Country, to: &'static Country) -> Option<Self> {
        (from.code != to.code).then_some(Self { from, to })
    }

    pub fn answer(&self, language: Language) -> [CountryRecord; 2] {
        [self.from.to_record(language), self.to.to_record(language)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        if guesses.last().is_some_and(Guess::is_exact) {
            Self::Won
        } else if guesses.len() >= MAX_TRY_COUNT {
            Self::Lost
        } else {
            Self::InProgress
        }
    }

    pub fn is_ended(self) -> bool {
        self != Self::InProgress
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown country: {0}")]
    UnknownCountry(String),
    #[error("the game is already over")]
    GameOver,
    #[error("target countries are not loaded yet")]
    TargetsNotLoaded,
}

/// One day's game: targets, language and the ordered guesses so far.
#[derive(Debug, Clone)]
pub struct Game {
    pub day: String,
    pub language: Language,
    targets: Option<TargetPair>,
    guesses: Vec<Guess>,
}

impl Game {
    pub fn new(day: impl Into<String>, language: Language) -> Self {
        Self {
            day: day.into(),
            language,
            targets: None,
            guesses: Vec::new(),
        }
    }

    /// Resume the day from a store. Anything past the try limit is dropped.
    pub fn restore(
        day: impl Into<String>,
        language: Language,
        store: &dyn GuessStore,
    ) -> Result<Self, StoreError> {
        let mut game = Self::new(day, language);
        let mut guesses = store.load_day(&game.day)?;
        guesses.truncate(MAX_TRY_COUNT);
        game.guesses = guesses;
        Ok(game)
    }

    pub fn set_targets(&mut self, targets: TargetPair) {
        self.targets = Some(targets);
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn targets(&self) -> Option<TargetPair> {
        self.targets
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_guesses(&self.guesses)
    }

    pub fn is_ended(&self) -> bool {
        self.status().is_ended()
    }

    /// Validate both names, score them and append the guess.
    pub fn submit(&mut self, from: &str, to: &str) -> Result<&Guess, GameError> {
        if self.is_ended() {
            return Err(GameError::GameOver);
        }
        let targets = self.targets.ok_or(GameError::TargetsNotLoaded)?;

        let from_country = find_by_name(self.language, from)
            .ok_or_else(|| GameError::UnknownCountry(from.trim().to_owned()))?;
        let to_country = find_by_name(self.language, to)
            .ok_or_else(|| GameError::UnknownCountry(to.trim().to_owned()))?;

        self.guesses.push(Guess::score(
            from_country,
            to_country,
            targets,
            self.language,
        ));
        Ok(&self.guesses[self.guesses.len() - 1])
    }

    pub fn persist(&self, store: &dyn GuessStore) -> Result<(), StoreError> {
        store.save_day(&self.day, &self.guesses)
    }

    /// The answer, once the game is over and the targets are known.
    pub fn revealed_targets(&self) -> Option<TargetPair> {
        self.targets.filter(|_| self.is_ended())
    }

    /// Sides the final guess still missed, announced after a loss.
    pub fn missed_targets(&self) -> Vec<&'static Country> {
        let Some(targets) = self.targets else {
            return Vec::new();
        };
        if self.status() != GameStatus::Lost {
            return Vec::new();
        }
        let Some(last) = self.guesses.last() else {
            return Vec::new();
        };

        let mut missed = Vec::with_capacity(2);
        if last.from_distance > 0 {
            missed.push(targets.from);
        }
        if last.to_distance > 0 {
            missed.push(targets.to);
        }
        missed
    }

    /// Payload for the score endpoint, once the game is over.
    pub fn score_submission(
        &self,
        ip: Option<serde_json::Value>,
        date: impl Into<String>,
    ) -> Option<ScoreSubmission> {
        let targets = self.targets?;
        let status = self.status();
        if !status.is_ended() {
            return None;
        }
        Some(ScoreSubmission {
            date: date.into(),
            guesses: self.guesses.clone(),
            ip,
            answer: targets.answer(self.language).to_vec(),
            won: status == GameStatus::Won,
        })
    }
}
