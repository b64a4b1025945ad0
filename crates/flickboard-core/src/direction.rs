// Flickboard Direction
// The discrete gesture classification that selects a key's action

use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Gesture direction on a key.
///
/// Raw touch paths are classified into one of these by the host before they
/// reach the engine. `Center` is a plain tap, the others are flicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Direction {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Direction {
    /// Iterate all directions in grid (reading) order
    pub fn all() -> impl Iterator<Item = Direction> {
        Direction::iter()
    }

    /// Parse a direction name, accepting `snake_case`, `kebab-case` and
    /// the short compass forms (`n`, `ne`, `e`, ...)
    pub fn parse(name: &str) -> Option<Direction> {
        let normalized = name.trim().replace('-', "_");
        if let Ok(direction) = Direction::from_str(&normalized) {
            return Some(direction);
        }
        match normalized.to_ascii_lowercase().as_str() {
            "c" | "tap" => Some(Direction::Center),
            "n" | "up" => Some(Direction::Top),
            "ne" => Some(Direction::TopRight),
            "e" => Some(Direction::Right),
            "se" => Some(Direction::BottomRight),
            "s" | "down" => Some(Direction::Bottom),
            "sw" => Some(Direction::BottomLeft),
            "w" => Some(Direction::Left),
            "nw" => Some(Direction::TopLeft),
            _ => None,
        }
    }
}
