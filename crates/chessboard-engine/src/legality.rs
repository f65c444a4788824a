//! Check detection and legal move filtering.
//!
//! A pseudo-legal move is legal when, after playing it, the mover's king is
//! not attacked. Every candidate is played out with [`apply`] and the result
//! checked with [`in_check`].

use crate::movegen::moves_for;
use crate::{all_attacks, apply, Position, SquareSet};
use chessboard_core::{Color, Move, Piece, Square};

/// Returns true if the king of `side` stands on a square the other side
/// attacks. A side without a king is never in check.
pub fn in_check(side: Color, position: &Position) -> bool {
    match position.king_square(side) {
        Some(king) => all_attacks(position).is_attacked(king, side.opposite()),
        None => false,
    }
}

/// Returns the targets of `piece` on `from` that do not leave its own king
/// attacked.
pub fn legal_moves(piece: Piece, from: Square, position: &Position) -> SquareSet {
    moves_for(piece, from, position)
        .iter()
        .filter(|&to| !in_check(piece.color, &apply(from, to, position)))
        .collect()
}

/// Returns true if `piece` belongs to the side to move.
#[inline]
pub fn is_movable(piece: Piece, position: &Position) -> bool {
    piece.color == position.side_to_move()
}

/// Returns every legal move of the side to move.
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in position.pieces() {
        if !is_movable(piece, position) {
            continue;
        }
        for to in legal_moves(piece, from, position) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Returns true if `m` moves a piece of the side to move to one of its
/// legal targets.
pub fn is_legal(position: &Position, m: Move) -> bool {
    match position.piece_at(m.from()) {
        Some(piece) if is_movable(piece, position) => {
            legal_moves(piece, m.from(), position).contains(m.to())
        }
        _ => false,
    }
}
