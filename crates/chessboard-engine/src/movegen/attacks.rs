//! Step and ray geometry for every piece kind.
//!
//! All offsets are (file delta, rank delta) pairs applied with
//! [`Square::offset`], which rejects anything that would leave the board or
//! wrap from one edge to the other.

use crate::{Position, SquareSet};
use chessboard_core::{Color, Square};

/// The eight L-shaped knight jumps.
pub(crate) const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

/// The eight squares around a king.
pub(crate) const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, -1),
];

pub(crate) const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub(crate) const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Returns true if `sq` is empty or holds a piece of the other side.
#[inline]
fn is_open_to(position: &Position, sq: Square, color: Color) -> bool {
    match position.piece_at(sq) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

/// Single-step targets: each offset once, landing on an empty or enemy square.
pub(crate) fn step_targets(
    from: Square,
    color: Color,
    steps: &[(i8, i8)],
    position: &Position,
) -> SquareSet {
    steps
        .iter()
        .filter_map(|&(df, dr)| from.offset(df, dr))
        .filter(|&to| is_open_to(position, to, color))
        .collect()
}

/// Ray targets: walk each direction until the edge, stopping before a
/// friendly piece or on an enemy one.
pub(crate) fn ray_targets(
    from: Square,
    color: Color,
    rays: &[(i8, i8)],
    position: &Position,
) -> SquareSet {
    let mut targets = SquareSet::EMPTY;
    for &(df, dr) in rays {
        let mut current = from;
        while let Some(to) = current.offset(df, dr) {
            match position.piece_at(to) {
                None => targets.insert(to),
                Some(piece) => {
                    if piece.color != color {
                        targets.insert(to);
                    }
                    break;
                }
            }
            current = to;
        }
    }
    targets
}

/// Knight targets from `from`.
#[inline]
pub fn knight_attacks(from: Square, color: Color, position: &Position) -> SquareSet {
    step_targets(from, color, &KNIGHT_STEPS, position)
}

/// Adjacent king targets from `from`, castling excluded.
#[inline]
pub fn king_attacks(from: Square, color: Color, position: &Position) -> SquareSet {
    step_targets(from, color, &KING_STEPS, position)
}

/// Diagonal bishop targets from `from`.
#[inline]
pub fn bishop_attacks(from: Square, color: Color, position: &Position) -> SquareSet {
    ray_targets(from, color, &BISHOP_RAYS, position)
}

/// Orthogonal rook targets from `from`.
#[inline]
pub fn rook_attacks(from: Square, color: Color, position: &Position) -> SquareSet {
    ray_targets(from, color, &ROOK_RAYS, position)
}

/// Queen targets: the union of bishop and rook rays.
#[inline]
pub fn queen_attacks(from: Square, color: Color, position: &Position) -> SquareSet {
    bishop_attacks(from, color, position) | rook_attacks(from, color, position)
}

/// The two forward diagonals a pawn threatens, whatever stands on them.
pub fn pawn_attacks(from: Square, color: Color) -> SquareSet {
    [-1, 1]
        .into_iter()
        .filter_map(|df| from.offset(df, color.forward()))
        .collect()
}
