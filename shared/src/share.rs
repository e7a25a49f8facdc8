use crate::day::parse_day;
use crate::game::MAX_TRY_COUNT;
use crate::geo::square_characters;
use crate::guess::Guess;
use crate::oec::TRADLE_URL;
use crate::settings::Theme;

/// First Tradle day; day numbers count from here.
pub const FIRST_DAY: &str = "2022-03-07";

/// Days between the first game and `day`; `None` when `day` is not `YYYY-MM-DD`.
pub fn day_count(day: &str) -> Option<i64> {
    Some((parse_day(day)? - parse_day(FIRST_DAY)?).num_days())
}

fn side(proximity: u8, hit: bool, arrow: &str, theme: Theme) -> String {
    let mut cell: String = square_characters(proximity, theme).concat();
    cell.push_str(if hit { "🎉" } else { arrow });
    cell
}

/// Spoiler-free summary for the clipboard.
pub fn share_text(day: &str, guesses: &[Guess], won: bool, theme: Theme) -> String {
    let day_number = day_count(day).map_or_else(|| day.to_owned(), |n| n.to_string());
    let tries = if won {
        guesses.len().to_string()
    } else {
        "X".to_owned()
    };

    let mut lines = vec![format!("#Tradle #{day_number} {tries}/{MAX_TRY_COUNT}")];
    for guess in guesses {
        lines.push(format!(
            "{} {}",
            side(
                guess.from_proximity(),
                guess.from_distance == 0,
                guess.from_direction.arrow(),
                theme
            ),
            side(
                guess.to_proximity(),
                guess.to_distance == 0,
                guess.to_direction.arrow(),
                theme
            ),
        ));
    }
    lines.push(TRADLE_URL.to_owned());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Direction;

    fn guess(from_distance: u32, to_distance: u32) -> Guess {
        Guess {
            from_name: "Chile".into(),
            to_name: "China".into(),
            from_distance,
            to_distance,
            from_direction: Direction::E,
            to_direction: Direction::Nw,
        }
    }

    #[test]
    fn day_numbers_start_at_zero() {
        assert_eq!(day_count("2022-03-07"), Some(0));
        assert_eq!(day_count("2022-04-01"), Some(25));
        assert_eq!(day_count("yesterday"), None);
    }

    #[test]
    fn winning_share_lists_every_row() {
        let guesses = vec![guess(10_000_000, 4_000_000), guess(0, 0)];
        let text = share_text("2022-04-01", &guesses, true, Theme::Light);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#Tradle #25 2/6");
        assert_eq!(lines[1], "🟩🟩🟨⬜⬜➡️ 🟩🟩🟩🟩⬜↖️");
        assert_eq!(lines[2], "🟩🟩🟩🟩🟩🎉 🟩🟩🟩🟩🟩🎉");
        assert_eq!(lines[3], "https://oec.world/en/tradle");
    }

    #[test]
    fn losing_share_uses_x() {
        let guesses = vec![guess(20_000_000, 0); MAX_TRY_COUNT];
        let text = share_text("2022-04-01", &guesses, false, Theme::Dark);
        assert!(text.starts_with("#Tradle #25 X/6\n"));
        assert!(text.contains("⬛⬛⬛⬛⬛➡️ 🟩🟩🟩🟩🟩🎉"));
        assert_eq!(text.lines().count(), MAX_TRY_COUNT + 2);
    }
}
