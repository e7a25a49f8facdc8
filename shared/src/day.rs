use chrono::{DateTime, Local, NaiveDate, TimeZone};

pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Local calendar date as `YYYY-MM-DD`, the key of the guess log.
pub fn day_string<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(DAY_FORMAT).to_string()
}

pub fn today() -> String {
    day_string(&Local::now())
}

pub fn parse_day(day: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day, DAY_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn day_uses_the_local_offset() {
        let tokyo = FixedOffset::east_opt(9 * 3600).expect("offset");
        let late_utc = DateTime::parse_from_rfc3339("2022-03-31T20:00:00Z")
            .expect("timestamp")
            .with_timezone(&tokyo);
        assert_eq!(day_string(&late_utc), "2022-04-01");
    }

    #[test]
    fn parses_only_calendar_days() {
        assert!(parse_day("2022-04-01").is_some());
        assert!(parse_day("04/01/2022").is_none());
    }
}
