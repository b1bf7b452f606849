//! Step directions between adjacent tiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// A step across one edge of a tile, relative to the tile's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    /// All directions in ordinal order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    #[inline]
    pub fn ordinal(self) -> u64 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Forward => 2,
            Direction::Backward => 3,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Quarter turn clockwise.
    pub fn clockwise(self) -> Self {
        match self {
            Direction::Left => Direction::Forward,
            Direction::Right => Direction::Backward,
            Direction::Forward => Direction::Right,
            Direction::Backward => Direction::Left,
        }
    }

    /// Quarter turn anticlockwise.
    pub fn anticlockwise(self) -> Self {
        match self {
            Direction::Left => Direction::Backward,
            Direction::Right => Direction::Forward,
            Direction::Forward => Direction::Left,
            Direction::Backward => Direction::Right,
        }
    }

    /// Turn `self` by `other` read as a relative heading: `Forward` keeps
    /// it, `Backward` reverses it, `Left`/`Right` turn a quarter.
    pub fn add(self, other: Direction) -> Self {
        match other {
            Direction::Left => self.anticlockwise(),
            Direction::Right => self.clockwise(),
            Direction::Forward => self,
            Direction::Backward => self.opposite(),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            'F' => Some(Direction::Forward),
            'B' => Some(Direction::Backward),
            _ => None,
        }
    }

    /// Parse a word such as `"FFL"`.
    pub fn parse_word(word: &str) -> Result<Vec<Direction>, GeometryError> {
        word.chars()
            .map(|c| {
                Direction::from_char(c).ok_or_else(|| {
                    GeometryError::InvalidInput(format!("'{}' is not a direction (L, R, F, B)", c))
                })
            })
            .collect()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Direction {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Direction::from_char), chars.next()) {
            (Some(direction), None) => Ok(direction),
            _ => match s.trim().to_ascii_lowercase().as_str() {
                "left" => Ok(Direction::Left),
                "right" => Ok(Direction::Right),
                "forward" => Ok(Direction::Forward),
                "backward" => Ok(Direction::Backward),
                _ => Err(GeometryError::InvalidInput(format!("unknown direction '{}'", s))),
            },
        }
    }
}
