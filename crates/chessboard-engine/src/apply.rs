//! Move application.

use crate::Position;
use chessboard_core::{CastleSide, Color, PieceKind, Square};

/// Plays the piece on `from` to `to` and returns the resulting position.
///
/// The input is left untouched. The move is assumed to come from the move
/// generator or the legality filter; nothing here checks that it is legal.
/// Castling, en passant and double steps are recognised from the board.
///
/// # Panics
///
/// Panics if `from` is empty. Use [`try_apply`] when that is not known.
pub fn apply(from: Square, to: Square, position: &Position) -> Position {
    match try_apply(from, to, position) {
        Some(next) => next,
        None => panic!("no piece on {} to move", from),
    }
}

/// Like [`apply`], but returns `None` when `from` is empty or equals `to`.
pub fn try_apply(from: Square, to: Square, position: &Position) -> Option<Position> {
    let piece = position.piece_at(from)?;
    if from == to {
        return None;
    }
    let color = piece.color;
    let mut next = position.clone();

    next.en_passant = None;

    if piece.kind == PieceKind::Pawn || position.piece_at(to).is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }

    // Counters stop at u32::MAX rather than wrapping
    if position.side_to_move == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }

    match piece.kind {
        PieceKind::Pawn => {
            let forward = color.forward();
            if position.en_passant == Some(to) && from.file() != to.file() {
                // The captured pawn stands beside the origin, behind the target
                if let Some(captured) = to.offset(0, -forward) {
                    next.squares[captured.index() as usize] = None;
                }
            } else if to.rank().index() as i8 - from.rank().index() as i8 == 2 * forward {
                next.en_passant = from.offset(0, forward);
            }
        }
        PieceKind::King => {
            let files = to.file().index() as i8 - from.file().index() as i8;
            if files.abs() == 2 {
                let side = if files > 0 {
                    CastleSide::KingSide
                } else {
                    CastleSide::QueenSide
                };
                let rook_from = side.rook_home(color);
                if let Some(rook_to) = from.offset(side.direction(), 0) {
                    next.squares[rook_to.index() as usize] = position.piece_at(rook_from);
                    next.squares[rook_from.index() as usize] = None;
                }
            }
            next.castling = next.castling.without_color(color);
        }
        PieceKind::Rook => {
            if let Some(side) = CastleSide::from_rook_home(from, color) {
                next.castling = next.castling.without(color, side);
            }
        }
        _ => {}
    }

    // Landing on an enemy corner removes the rook that could castle from it
    let enemy = color.opposite();
    if let Some(side) = CastleSide::from_rook_home(to, enemy) {
        next.castling = next.castling.without(enemy, side);
    }

    next.squares[from.index() as usize] = None;
    next.squares[to.index() as usize] = Some(piece);

    next.side_to_move = position.side_to_move.opposite();

    Some(next)
}
