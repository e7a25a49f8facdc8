use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::country::{Country, Language};
use crate::game::TargetPair;
use crate::geo::{Direction, compass_direction, distance_m, proximity_percent};

/// Day string (`YYYY-MM-DD`) -> ordered guesses for that day.
pub type GuessLog = BTreeMap<String, Vec<Guess>>;

/// One scored submission: an exporter guess and an importer guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guess {
    pub from_name: String,
    pub to_name: String,
    pub from_distance: u32,
    pub to_distance: u32,
    pub from_direction: Direction,
    pub to_direction: Direction,
}

impl Guess {
    /// Score a pair of guessed countries against the day's targets.
    pub fn score(
        from_guess: &Country,
        to_guess: &Country,
        targets: TargetPair,
        language: Language,
    ) -> Self {
        Self {
            from_name: from_guess.name(language).to_owned(),
            to_name: to_guess.name(language).to_owned(),
            from_distance: distance_m(from_guess.coordinates(), targets.from.coordinates()),
            to_distance: distance_m(to_guess.coordinates(), targets.to.coordinates()),
            from_direction: compass_direction(
                from_guess.coordinates(),
                targets.from.coordinates(),
            ),
            to_direction: compass_direction(to_guess.coordinates(), targets.to.coordinates()),
        }
    }

    /// Both sides found.
    pub fn is_exact(&self) -> bool {
        self.from_distance == 0 && self.to_distance == 0
    }

    pub fn from_proximity(&self) -> u8 {
        proximity_percent(self.from_distance)
    }

    pub fn to_proximity(&self) -> u8 {
        proximity_percent(self.to_distance)
    }
}
