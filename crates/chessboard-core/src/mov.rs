//! Move representation.

use crate::Square;
use std::fmt;

/// A move from an origin square to a target square.
///
/// Special moves (castling, en passant, double steps) are not flagged: they
/// are recognised from the board when the move is applied.
///
/// Encoded compactly: 6 bits origin, 6 bits target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(u16);

impl Move {
    /// Creates a new move.
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move((from.index() as u16) | ((to.index() as u16) << 6))
    }

    /// Returns the origin square.
    #[inline]
    pub const fn from(self) -> Square {
        match Square::from_index((self.0 & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the target square.
    #[inline]
    pub const fn to(self) -> Square {
        match Square::from_index(((self.0 >> 6) & 0x3F) as u8) {
            Some(sq) => sq,
            None => unreachable!(),
        }
    }

    /// Returns the coordinate notation for this move (e.g., "e2e4").
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.from(), self.to())
    }

    /// Parses a move from coordinate notation.
    ///
    /// Only the squares are checked; whether the move is legal depends on
    /// the position it is played in.
    pub fn from_coordinate(s: &str) -> Option<Self> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let from = Square::from_algebraic(&s[0..2])?;
        let to = Square::from_algebraic(&s[2..4])?;
        Some(Move::new(from, to))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.to_coordinate())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coordinate())
    }
}
