//! Board-wide attacked squares per side.

use std::ops::Index;

use crate::movegen::attacks_for;
use crate::{Position, SquareSet};
use chessboard_core::{Color, Square};

/// Every square each side threatens, deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackMap {
    by_color: [SquareSet; 2],
}

impl AttackMap {
    /// Returns true if `by` threatens `sq`.
    #[inline]
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.by_color[by.index()].contains(sq)
    }
}

impl Index<Color> for AttackMap {
    type Output = SquareSet;

    #[inline]
    fn index(&self, color: Color) -> &Self::Output {
        &self.by_color[color.index()]
    }
}

/// Collects the threats of every piece on the board.
///
/// Recomputed from scratch on every call.
pub fn all_attacks(position: &Position) -> AttackMap {
    let mut map = AttackMap::default();
    for (sq, piece) in position.pieces() {
        let (color, attacked) = attacks_for(piece, sq, position);
        map.by_color[color.index()] |= attacked;
    }
    map
}
