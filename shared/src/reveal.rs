//! Staged reveal of a guess row. Purely cosmetic.

/// Delay between two squares lighting up.
pub const SQUARE_ANIMATION_LENGTH_MS: u32 = 250;
/// Squares plus the arrow cell.
pub const ANIMATED_CELLS: u32 = 6;
pub const REVEAL_DURATION_MS: u32 = SQUARE_ANIMATION_LENGTH_MS * ANIMATED_CELLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    NotStarted,
    Running,
    Ended,
}

impl RevealState {
    /// A row receives a guess.
    pub fn on_guess(self) -> Self {
        match self {
            Self::NotStarted => Self::Running,
            other => other,
        }
    }

    /// The reveal timer fired.
    pub fn on_timer(self) -> Self {
        match self {
            Self::Running => Self::Ended,
            other => other,
        }
    }
}

/// CSS delay for the square at `index` in a running reveal.
pub fn square_delay_ms(index: usize) -> u32 {
    SQUARE_ANIMATION_LENGTH_MS * index as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let state = RevealState::default();
        assert_eq!(state, RevealState::NotStarted);
        let state = state.on_guess();
        assert_eq!(state, RevealState::Running);
        let state = state.on_timer();
        assert_eq!(state, RevealState::Ended);
    }

    #[test]
    fn timer_before_guess_is_ignored() {
        assert_eq!(RevealState::NotStarted.on_timer(), RevealState::NotStarted);
        assert_eq!(RevealState::Ended.on_guess(), RevealState::Ended);
    }

    #[test]
    fn squares_are_staggered() {
        assert_eq!(square_delay_ms(0), 0);
        assert_eq!(square_delay_ms(4), 1_000);
    }
}
