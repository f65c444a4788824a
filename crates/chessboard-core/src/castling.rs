//! Castling rights as a 4-bit flag set.

use crate::{Color, Square};
use std::fmt;

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, king-side first.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// File direction the king travels (+1 toward h, -1 toward a).
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::KingSide => 1,
            CastleSide::QueenSide => -1,
        }
    }

    /// The corner square the rook starts on.
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::H1,
            (Color::White, CastleSide::QueenSide) => Square::A1,
            (Color::Black, CastleSide::KingSide) => Square::H8,
            (Color::Black, CastleSide::QueenSide) => Square::A8,
        }
    }

    /// Returns the side whose rook starts on `sq`, if `sq` is a corner of
    /// `color`'s back rank.
    pub fn from_rook_home(sq: Square, color: Color) -> Option<Self> {
        Self::ALL.into_iter().find(|side| side.rook_home(color) == sq)
    }
}

/// Castling rights flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// Canonical notation order of the four rights.
    const ORDER: [(char, Color, CastleSide); 4] = [
        ('K', Color::White, CastleSide::KingSide),
        ('Q', Color::White, CastleSide::QueenSide),
        ('k', Color::Black, CastleSide::KingSide),
        ('q', Color::Black, CastleSide::QueenSide),
    ];

    /// Creates castling rights from raw flags.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    const fn flag(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEENSIDE,
        }
    }

    /// Returns true if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::flag(color, side) != 0
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.has(color, CastleSide::KingSide)
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.has(color, CastleSide::QueenSide)
    }

    /// Returns a copy with the single right removed.
    #[inline]
    #[must_use]
    pub const fn without(self, color: Color, side: CastleSide) -> Self {
        CastlingRights(self.0 & !Self::flag(color, side))
    }

    /// Returns a copy with both rights of `color` removed.
    #[inline]
    #[must_use]
    pub const fn without_color(self, color: Color) -> Self {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    /// Returns true if no right is held.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Parses an already validated rights field (`-` or letters from `KQkq`).
    /// Unknown letters are ignored.
    pub fn from_notation(field: &str) -> Self {
        let mut rights = CastlingRights::NONE;
        for c in field.chars() {
            if let Some(&(_, color, side)) = Self::ORDER.iter().find(|(l, _, _)| *l == c) {
                rights.0 |= Self::flag(color, side);
            }
        }
        rights
    }

    /// Renders the rights field, `-` when empty.
    pub fn to_notation(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        Self::ORDER
            .iter()
            .filter(|(_, color, side)| self.has(*color, *side))
            .map(|(letter, _, _)| *letter)
            .collect()
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn castling_rights() {
        let rights = CastlingRights::ALL;
        assert!(rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::Black));

        let rights = rights.without(Color::White, CastleSide::KingSide);
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(rights.can_castle_queenside(Color::White));
    }

    #[test]
    fn castling_rights_without_color() {
        let rights = CastlingRights::ALL.without_color(Color::White);
        assert!(!rights.can_castle_kingside(Color::White));
        assert!(!rights.can_castle_queenside(Color::White));
        assert!(rights.can_castle_kingside(Color::Black));
        assert!(rights.can_castle_queenside(Color::Black));
    }

    #[test]
    fn castling_rights_none() {
        let rights = CastlingRights::NONE;
        assert!(rights.is_empty());
        assert_eq!(rights.raw(), 0);
        assert_eq!(rights.to_notation(), "-");
    }

    #[test]
    fn notation_is_canonical() {
        assert_eq!(CastlingRights::ALL.to_notation(), "KQkq");
        assert_eq!(CastlingRights::from_notation("Kq").to_notation(), "Kq");
        assert_eq!(CastlingRights::from_notation("-"), CastlingRights::NONE);
        assert_eq!(
            CastlingRights::from_notation("Qk").raw(),
            CastlingRights::WHITE_QUEENSIDE | CastlingRights::BLACK_KINGSIDE
        );
    }

    #[test]
    fn rook_homes() {
        assert_eq!(CastleSide::KingSide.rook_home(Color::White), Square::H1);
        assert_eq!(CastleSide::QueenSide.rook_home(Color::Black), Square::A8);
        assert_eq!(
            CastleSide::from_rook_home(Square::A1, Color::White),
            Some(CastleSide::QueenSide)
        );
        assert_eq!(CastleSide::from_rook_home(Square::A1, Color::Black), None);
    }
}
