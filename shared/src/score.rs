use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::country::CountryRecord;
use crate::game::{GameStatus, MAX_TRY_COUNT};
use crate::guess::Guess;

/// Body of `POST /tradle/score`, sent once per finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSubmission {
    /// RFC 3339 timestamp of the submission.
    pub date: String,
    pub guesses: Vec<Guess>,
    /// Whatever the geolocation service answered, if anything.
    pub ip: Option<serde_json::Value>,
    pub answer: Vec<CountryRecord>,
    pub won: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreValidationError {
    #[error("no guesses submitted")]
    NoGuesses,
    #[error("{0} guesses exceeds the try limit")]
    TooManyGuesses(usize),
    #[error("answer must name exactly two countries, got {0}")]
    AnswerSize(usize),
    #[error("reported outcome does not match the guesses")]
    OutcomeMismatch,
}

impl ScoreSubmission {
    pub fn validate(&self) -> Result<(), ScoreValidationError> {
        if self.guesses.is_empty() {
            return Err(ScoreValidationError::NoGuesses);
        }
        if self.guesses.len() > MAX_TRY_COUNT {
            return Err(ScoreValidationError::TooManyGuesses(self.guesses.len()));
        }
        if self.answer.len() != 2 {
            return Err(ScoreValidationError::AnswerSize(self.answer.len()));
        }
        let expected = if self.won {
            GameStatus::Won
        } else {
            GameStatus::Lost
        };
        if GameStatus::from_guesses(&self.guesses) != expected {
            return Err(ScoreValidationError::OutcomeMismatch);
        }
        Ok(())
    }

    pub fn tries(&self) -> usize {
        self.guesses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Direction;

    fn guess(distance: u32) -> Guess {
        Guess {
            from_name: "France".into(),
            to_name: "Germany".into(),
            from_distance: distance,
            to_distance: distance,
            from_direction: Direction::N,
            to_direction: Direction::N,
        }
    }

    fn record(code: &str) -> CountryRecord {
        CountryRecord {
            code: code.into(),
            name: code.into(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn submission(guesses: Vec<Guess>, won: bool) -> ScoreSubmission {
        ScoreSubmission {
            date: "2022-04-01T12:00:00+02:00".into(),
            guesses,
            ip: None,
            answer: vec![record("FR"), record("DE")],
            won,
        }
    }

    #[test]
    fn consistent_win_and_loss_are_valid() {
        assert_eq!(submission(vec![guess(5), guess(0)], true).validate(), Ok(()));
        assert_eq!(submission(vec![guess(5); 6], false).validate(), Ok(()));
    }

    #[test]
    fn rejects_too_many_guesses() {
        assert_eq!(
            submission(vec![guess(5); 7], false).validate(),
            Err(ScoreValidationError::TooManyGuesses(7))
        );
    }

    #[test]
    fn rejects_wrong_answer_size() {
        let mut s = submission(vec![guess(0)], true);
        s.answer.pop();
        assert_eq!(s.validate(), Err(ScoreValidationError::AnswerSize(1)));
    }

    #[test]
    fn rejects_outcome_that_disagrees_with_guesses() {
        assert_eq!(
            submission(vec![guess(5)], true).validate(),
            Err(ScoreValidationError::OutcomeMismatch)
        );
        assert_eq!(
            submission(vec![guess(0)], false).validate(),
            Err(ScoreValidationError::OutcomeMismatch)
        );
        // A loss needs all six tries.
        assert_eq!(
            submission(vec![guess(5); 3], false).validate(),
            Err(ScoreValidationError::OutcomeMismatch)
        );
    }

    #[test]
    fn rejects_empty_guesses() {
        assert_eq!(
            submission(Vec::new(), false).validate(),
            Err(ScoreValidationError::NoGuesses)
        );
    }

    #[test]
    fn ip_payload_is_passed_through() {
        let json = r#"{"date":"2022-04-01T12:00:00Z","guesses":[],"ip":{"IPv4":"1.2.3.4","country_code":"FR"},"answer":[],"won":false}"#;
        let s: ScoreSubmission = serde_json::from_str(json).expect("submission parses");
        assert_eq!(s.ip.expect("ip present")["IPv4"], "1.2.3.4");
    }
}
