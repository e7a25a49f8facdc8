use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::settings::{DistanceUnit, Theme};

/// Mean equatorial radius used for all distance math, in metres.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;
/// Distance at which proximity bottoms out at 0%.
pub const MAX_DISTANCE_ON_EARTH_M: f64 = 20_000_000.0;

const KM_TO_MILES: f64 = 0.621371;
const SQUARE_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One of the 16 compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl Direction {
    pub const ALL: [Direction; 16] = [
        Direction::N,
        Direction::Nne,
        Direction::Ne,
        Direction::Ene,
        Direction::E,
        Direction::Ese,
        Direction::Se,
        Direction::Sse,
        Direction::S,
        Direction::Ssw,
        Direction::Sw,
        Direction::Wsw,
        Direction::W,
        Direction::Wnw,
        Direction::Nw,
        Direction::Nnw,
    ];

    /// Bucket a bearing in degrees (0 = north, clockwise) into 22.5° sectors.
    pub fn from_bearing(bearing_deg: f64) -> Self {
        let normalized = bearing_deg.rem_euclid(360.0);
        let index = (normalized / 22.5).round() as usize % Self::ALL.len();
        Self::ALL[index]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::N => "N",
            Self::Nne => "NNE",
            Self::Ne => "NE",
            Self::Ene => "ENE",
            Self::E => "E",
            Self::Ese => "ESE",
            Self::Se => "SE",
            Self::Sse => "SSE",
            Self::S => "S",
            Self::Ssw => "SSW",
            Self::Sw => "SW",
            Self::Wsw => "WSW",
            Self::W => "W",
            Self::Wnw => "WNW",
            Self::Nw => "NW",
            Self::Nnw => "NNW",
        }
    }

    /// Eight-way arrow emoji shown in guess rows and share text.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::N => "⬆️",
            Self::Nne | Self::Ne | Self::Ene => "↗️",
            Self::E => "➡️",
            Self::Ese | Self::Se | Self::Sse => "↘️",
            Self::S => "⬇️",
            Self::Ssw | Self::Sw | Self::Wsw => "↙️",
            Self::W => "⬅️",
            Self::Wnw | Self::Nw | Self::Nnw => "↖️",
        }
    }
}

/// Great-circle distance (spherical law of cosines), rounded to whole metres.
pub fn distance_m(from: Coordinates, to: Coordinates) -> u32 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let delta_lon = (from.longitude - to.longitude).to_radians();

    let cos_angle = (to_lat.sin() * from_lat.sin()
        + to_lat.cos() * from_lat.cos() * delta_lon.cos())
    .clamp(-1.0, 1.0);

    (cos_angle.acos() * EARTH_RADIUS_M).round() as u32
}

/// Constant-heading (rhumb line) bearing from `from` to `to`, in degrees `[0, 360)`.
pub fn rhumb_bearing_deg(from: Coordinates, to: Coordinates) -> f64 {
    let from_lat = from.latitude.to_radians();
    let to_lat = to.latitude.to_radians();
    let mut delta_lon = (to.longitude - from.longitude).to_radians();

    let delta_phi = ((to_lat / 2.0 + FRAC_PI_4).tan() / (from_lat / 2.0 + FRAC_PI_4).tan()).ln();

    // Take the short way around the antimeridian.
    if delta_lon.abs() > PI {
        delta_lon = if delta_lon > 0.0 {
            -(2.0 * PI - delta_lon)
        } else {
            2.0 * PI + delta_lon
        };
    }

    (delta_lon.atan2(delta_phi).to_degrees() + 360.0) % 360.0
}

pub fn compass_direction(from: Coordinates, to: Coordinates) -> Direction {
    Direction::from_bearing(rhumb_bearing_deg(from, to))
}

/// Closeness score in `0..=100`; 100 means the exact country.
pub fn proximity_percent(distance_m: u32) -> u8 {
    let proximity = (MAX_DISTANCE_ON_EARTH_M - f64::from(distance_m)).max(0.0);
    (proximity / MAX_DISTANCE_ON_EARTH_M * 100.0).floor() as u8
}

pub fn format_distance(distance_m: u32, unit: DistanceUnit) -> String {
    let km = f64::from(distance_m) / 1000.0;
    match unit {
        DistanceUnit::Km => format!("{}km", km.round()),
        DistanceUnit::Miles => format!("{}mi", (km * KM_TO_MILES).round()),
    }
}

/// Five emoji squares: one green per full 20%, one yellow for a remaining half step.
pub fn square_characters(proximity: u8, theme: Theme) -> [&'static str; SQUARE_COUNT] {
    let green = usize::from(proximity / 20).min(SQUARE_COUNT);
    let yellow = usize::from(proximity % 20 >= 10 && green < SQUARE_COUNT);
    let empty = match theme {
        Theme::Light => "⬜",
        Theme::Dark => "⬛",
    };

    let mut squares = [empty; SQUARE_COUNT];
    for square in squares.iter_mut().take(green) {
        *square = "🟩";
    }
    if yellow == 1 {
        squares[green] = "🟨";
    }
    squares
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }

    #[test]
    fn same_point_is_zero_metres() {
        let paris = at(46.227638, 2.213749);
        assert_eq!(distance_m(paris, paris), 0);
    }

    #[test]
    fn one_degree_on_the_equator() {
        // 6_378_137 * pi / 180 = 111_319.49
        assert_eq!(distance_m(at(0.0, 0.0), at(0.0, 1.0)), 111_319);
    }

    #[test]
    fn distance_is_symmetric() {
        let brazil = at(-14.235004, -51.92528);
        let japan = at(36.204824, 138.252924);
        assert_eq!(distance_m(brazil, japan), distance_m(japan, brazil));
    }

    #[test]
    fn france_to_germany_is_roughly_eight_hundred_km() {
        let d = distance_m(at(46.227638, 2.213749), at(51.165691, 10.451526));
        assert!((780_000..900_000).contains(&d), "got {d}");
        assert_eq!(
            compass_direction(at(46.227638, 2.213749), at(51.165691, 10.451526)),
            Direction::Ne
        );
    }

    #[test]
    fn cardinal_bearings() {
        let origin = at(0.0, 0.0);
        assert_eq!(compass_direction(origin, at(10.0, 0.0)), Direction::N);
        assert_eq!(compass_direction(origin, at(0.0, 10.0)), Direction::E);
        assert_eq!(compass_direction(origin, at(-10.0, 0.0)), Direction::S);
        assert_eq!(compass_direction(origin, at(0.0, -10.0)), Direction::W);
        assert_eq!(compass_direction(origin, at(10.0, 10.0)), Direction::Ne);
    }

    #[test]
    fn bearing_wraps_across_the_antimeridian() {
        let bearing = rhumb_bearing_deg(at(0.0, 170.0), at(0.0, -170.0));
        assert!((bearing - 90.0).abs() < 1e-9, "got {bearing}");
    }

    #[test]
    fn bearing_buckets_round_to_nearest_sector() {
        assert_eq!(Direction::from_bearing(0.0), Direction::N);
        assert_eq!(Direction::from_bearing(11.0), Direction::N);
        assert_eq!(Direction::from_bearing(12.0), Direction::Nne);
        assert_eq!(Direction::from_bearing(350.0), Direction::N);
        assert_eq!(Direction::from_bearing(337.5), Direction::Nnw);
        assert_eq!(Direction::from_bearing(-90.0), Direction::W);
    }

    #[test]
    fn direction_serializes_as_compass_label() {
        for direction in Direction::ALL {
            let json = serde_json::to_string(&direction).expect("direction serializes");
            assert_eq!(json, format!("\"{}\"", direction.label()));
        }
    }

    #[test]
    fn proximity_bounds() {
        assert_eq!(proximity_percent(0), 100);
        assert_eq!(proximity_percent(1), 99);
        assert_eq!(proximity_percent(10_000_000), 50);
        assert_eq!(proximity_percent(20_000_000), 0);
        assert_eq!(proximity_percent(25_000_000), 0);
    }

    #[test]
    fn formats_kilometres_and_miles() {
        assert_eq!(format_distance(1_500_000, DistanceUnit::Km), "1500km");
        assert_eq!(format_distance(1_500_000, DistanceUnit::Miles), "932mi");
        assert_eq!(format_distance(0, DistanceUnit::Km), "0km");
        assert_eq!(format_distance(499, DistanceUnit::Km), "0km");
    }

    #[test]
    fn squares_follow_proximity() {
        assert_eq!(
            square_characters(100, Theme::Light),
            ["🟩", "🟩", "🟩", "🟩", "🟩"]
        );
        assert_eq!(
            square_characters(59, Theme::Light),
            ["🟩", "🟩", "🟨", "⬜", "⬜"]
        );
        assert_eq!(
            square_characters(45, Theme::Dark),
            ["🟩", "🟩", "⬛", "⬛", "⬛"]
        );
        assert_eq!(square_characters(0, Theme::Dark), ["⬛"; 5]);
    }
}
