//! Pseudo-legal move generation.
//!
//! [`moves_for`] lists the squares a piece may move to by its movement rules
//! alone, without asking whether its own king is left exposed. [`attacks_for`]
//! lists the squares a piece threatens. The two only differ for pawns, which
//! move straight but capture diagonally, and for kings, which cannot castle
//! into a threat.

mod attacks;
pub mod perft;

use crate::{all_attacks, Position, SquareSet};
use chessboard_core::{CastleSide, Color, File, Piece, PieceKind, Square};

pub use attacks::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks, rook_attacks,
};

/// Returns the pseudo-legal targets of `piece` standing on `from`.
pub fn moves_for(piece: Piece, from: Square, position: &Position) -> SquareSet {
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(from, color, position),
        PieceKind::Knight => knight_attacks(from, color, position),
        PieceKind::Bishop => bishop_attacks(from, color, position),
        PieceKind::Rook => rook_attacks(from, color, position),
        PieceKind::Queen => queen_attacks(from, color, position),
        PieceKind::King => {
            king_attacks(from, color, position) | castling_moves(from, color, position)
        }
    }
}

/// Returns the side of `piece` and the squares it threatens from `from`.
pub fn attacks_for(piece: Piece, from: Square, position: &Position) -> (Color, SquareSet) {
    let targets = match piece.kind {
        PieceKind::Pawn => pawn_attacks(from, piece.color),
        PieceKind::King => king_attacks(from, piece.color, position),
        _ => moves_for(piece, from, position),
    };
    (piece.color, targets)
}

/// Pawn pushes, double steps from the pawn rank, diagonal captures and the
/// en passant capture.
fn pawn_moves(from: Square, color: Color, position: &Position) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let forward = color.forward();

    if let Some(one) = from.offset(0, forward) {
        if position.is_vacant(one) {
            moves.insert(one);
            if from.rank() == color.pawn_rank() {
                if let Some(two) = from.offset(0, 2 * forward) {
                    if position.is_vacant(two) {
                        moves.insert(two);
                    }
                }
            }
        }
    }

    for to in pawn_attacks(from, color) {
        match position.piece_at(to) {
            Some(piece) if piece.color != color => moves.insert(to),
            Some(_) => {}
            None if position.en_passant() == Some(to) => {
                // Only usable when the pawn that just double-stepped is there
                let behind = to.offset(0, -forward).and_then(|sq| position.piece_at(sq));
                if behind == Some(Piece::new(PieceKind::Pawn, color.opposite())) {
                    moves.insert(to);
                }
            }
            None => {}
        }
    }

    moves
}

/// Castling targets two files left or right of the king.
///
/// Requires the right, the king on its home square, the rook on its corner,
/// an empty path between them, and the king's square and the square it
/// passes over both out of the opponent's reach. The landing square is left
/// to the legality filter.
fn castling_moves(from: Square, color: Color, position: &Position) -> SquareSet {
    let mut moves = SquareSet::EMPTY;
    let rights = position.castling();

    if from != Square::new(File::E, color.back_rank()) {
        return moves;
    }

    let rook = Piece::new(PieceKind::Rook, color);
    let mut threatened: Option<SquareSet> = None;

    for side in CastleSide::ALL {
        if !rights.has(color, side) {
            continue;
        }
        let rook_home = side.rook_home(color);
        if position.piece_at(rook_home) != Some(rook) {
            continue;
        }
        if !path_is_clear(from, rook_home, side.direction(), position) {
            continue;
        }

        let reach = *threatened.get_or_insert_with(|| all_attacks(position)[color.opposite()]);
        let passed = from.offset(side.direction(), 0);
        let landing = from.offset(2 * side.direction(), 0);
        match (passed, landing) {
            (Some(passed), Some(landing))
                if !reach.contains(from) && !reach.contains(passed) =>
            {
                moves.insert(landing);
            }
            _ => {}
        }
    }

    moves
}

/// Returns true if every square strictly between `from` and `to` along the
/// rank is empty.
fn path_is_clear(from: Square, to: Square, direction: i8, position: &Position) -> bool {
    let mut current = from;
    while let Some(next) = current.offset(direction, 0) {
        if next == to {
            return true;
        }
        if !position.is_vacant(next) {
            return false;
        }
        current = next;
    }
    false
}
