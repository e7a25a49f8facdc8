pub mod country;
pub mod day;
pub mod game;
pub mod geo;
pub mod guess;
pub mod oec;
pub mod reveal;
pub mod score;
pub mod selector;
pub mod settings;
pub mod share;
pub mod store;

pub use country::{Country, CountryRecord, Language, find_by_code, find_by_name};
pub use game::{Game, GameError, GameStatus, MAX_TRY_COUNT, TargetPair};
pub use geo::{Coordinates, Direction};
pub use guess::{Guess, GuessLog};
pub use score::{ScoreSubmission, ScoreValidationError};
pub use settings::{DistanceUnit, Settings, Theme};
pub use store::{GuessStore, StoreError};
