//! Board coordinates.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PositionError;

/// A square on the chess board, as a 1-based (row, column) pair.
///
/// Row 1 is White's back rank and column 1 is the queenside 'a' file.
/// Off-board coordinates are unrepresentable: every constructor checks
/// bounds, so a `Position` held by a `Board` or a `Move` is always valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(u8, u8)", into = "(u8, u8)")
)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Create a new position with bounds checking
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row >= 1 && row <= 8 && col >= 1 && col <= 8 {
            Some(Position { row, col })
        } else {
            None
        }
    }

    /// Get the row (1-8, where 1 = White's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Get the column (1-8, where 1 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by a (row, column) delta, returning `None` off the board.
    ///
    /// This is the bounds filter every move producer goes through.
    #[must_use]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            Some(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterate over all 64 squares, row 1 column 1 first
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=8).flat_map(|row| (1..=8).map(move |col| Position { row, col }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.col - 1 + b'a') as char, self.row)
    }
}

impl TryFrom<(u8, u8)> for Position {
    type Error = PositionError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        if !(1..=8).contains(&row) {
            return Err(PositionError::RowOutOfBounds { row });
        }
        if !(1..=8).contains(&col) {
            return Err(PositionError::ColOutOfBounds { col });
        }
        Ok(Position { row, col })
    }
}

impl From<Position> for (u8, u8) {
    fn from(at: Position) -> Self {
        (at.row, at.col)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PositionError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => (file, rank),
            _ => return Err(invalid()),
        };

        let col = match file {
            'a'..='h' => file as u8 - b'a' + 1,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => rank as u8 - b'0',
            _ => return Err(invalid()),
        };

        Ok(Position { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert!(Position::new(1, 1).is_some());
        assert!(Position::new(8, 8).is_some());
        assert!(Position::new(0, 4).is_none());
        assert!(Position::new(4, 0).is_none());
        assert!(Position::new(9, 4).is_none());
        assert!(Position::new(4, 9).is_none());
    }

    #[test]
    fn test_try_from_errors() {
        assert_eq!(
            Position::try_from((0, 5)),
            Err(PositionError::RowOutOfBounds { row: 0 })
        );
        assert_eq!(
            Position::try_from((5, 9)),
            Err(PositionError::ColOutOfBounds { col: 9 })
        );
        assert_eq!(Position::try_from((5, 5)), Ok(Position::new(5, 5).unwrap()));
    }

    #[test]
    fn test_offset() {
        let center = Position::new(4, 4).unwrap();
        assert_eq!(center.offset(1, 1), Position::new(5, 5));
        assert_eq!(center.offset(-3, 0), Position::new(1, 4));
        assert_eq!(center.offset(-4, 0), None);
        assert_eq!(center.offset(0, 5), None);

        let corner = Position::new(1, 1).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
    }

    #[test]
    fn test_parse_and_display() {
        let e4: Position = "e4".parse().unwrap();
        assert_eq!(e4, Position::new(4, 5).unwrap());
        assert_eq!(e4.to_string(), "e4");

        assert_eq!(Position::new(1, 1).unwrap().to_string(), "a1");
        assert_eq!(Position::new(8, 8).unwrap().to_string(), "h8");
    }

    #[test]
    fn test_parse_rejects_bad_notation() {
        assert!("".parse::<Position>().is_err());
        assert!("e".parse::<Position>().is_err());
        assert!("e44".parse::<Position>().is_err());
        assert!("i4".parse::<Position>().is_err());
        assert!("e9".parse::<Position>().is_err());
        assert!("e0".parse::<Position>().is_err());
    }

    #[test]
    fn test_all_covers_board() {
        let squares: Vec<Position> = Position::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Position::new(1, 1).unwrap());
        assert_eq!(squares[63], Position::new(8, 8).unwrap());
    }
}
