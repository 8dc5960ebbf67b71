use std::fmt;
use std::ops;
use std::str::FromStr;

use thiserror::Error;

/// A relative displacement, before mirroring for the enemy side.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    pub dx: i8,
    pub dy: i8,
}

impl Step {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Step { dx, dy }
    }
}

impl ops::Neg for Step {
    type Output = Step;

    fn neg(self) -> Step {
        Step::new(-self.dx, -self.dy)
    }
}

/// A square on the board. `x` is the column, `y` the rank; rank 0 is the
/// player's back rank.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const fn new(x: i8, y: i8) -> Self {
        Position { x, y }
    }

    /// The point reflection through the centre of a `size` board.
    pub fn mirrored(self, size: u8) -> Position {
        let last = size as i8 - 1;
        Position::new(last - self.x, last - self.y)
    }

    pub fn offset_to(self, other: Position) -> Step {
        Step::new(other.x - self.x, other.y - self.y)
    }
}

impl ops::Add<Step> for Position {
    type Output = Position;

    fn add(self, rhs: Step) -> Position {
        Position::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.x) && self.y >= 0 {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePositionError {
    #[error("expected a square like `b3`, got `{0}`")]
    Malformed(String),
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePositionError::Malformed(s.to_string());
        let s = s.trim();
        let mut chars = s.chars();
        let column = chars.next().filter(char::is_ascii_alphabetic).ok_or_else(malformed)?;
        let rank: i8 = chars.as_str().parse().map_err(|_| malformed())?;
        if rank < 1 {
            return Err(malformed());
        }
        let x = (column.to_ascii_lowercase() as u8 - b'a') as i8;
        Ok(Position::new(x, rank - 1))
    }
}
