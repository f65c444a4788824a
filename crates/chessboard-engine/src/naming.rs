//! Short move names for move lists.
//!
//! A name is the piece's notation letter followed by the destination square,
//! with an `x` before the destination on a capture: `Nf3`, `Bxc6`, `Kg1`.
//! The letter keeps its color case, so Black plays `nf6` and `qxd5`. Pawns
//! carry no letter; a pawn capture is prefixed with the origin file instead
//! (`exd5`). No check or mate suffix is added.

use crate::Position;
use chessboard_core::{PieceKind, Square};

/// Names the move of the piece on `from` to `to`, as seen in the position
/// *before* the move. Returns `None` if `from` is empty.
pub fn move_name(position: &Position, from: Square, to: Square) -> Option<String> {
    let piece = position.piece_at(from)?;
    let is_capture = position.piece_at(to).is_some()
        || (piece.kind == PieceKind::Pawn
            && position.en_passant() == Some(to)
            && from.file() != to.file());

    let mut name = String::with_capacity(5);
    match piece.kind {
        PieceKind::Pawn => {
            if is_capture {
                name.push(from.file().to_char());
            }
        }
        _ => name.push(piece.to_char()),
    }
    if is_capture {
        name.push('x');
    }
    name.push_str(&to.to_algebraic());

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_core::NotationFields;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn name(notation: &str, from: &str, to: &str) -> String {
        let position = Position::from_notation(notation).unwrap();
        move_name(&position, sq(from), sq(to)).unwrap()
    }

    const OPEN_CENTER: &str =
        "rnbqkb1r/ppp2ppp/4pn2/3p4/3PP3/2N5/PPP2PPP/R1BQKBNR w KQkq - 0 4";

    #[test]
    fn pawn_push() {
        assert_eq!(name(NotationFields::STARTPOS, "e2", "e4"), "e4");
    }

    #[test]
    fn pawn_capture_uses_origin_file() {
        assert_eq!(name(OPEN_CENTER, "e4", "d5"), "exd5");
    }

    #[test]
    fn piece_moves() {
        assert_eq!(name(NotationFields::STARTPOS, "g1", "f3"), "Nf3");
        assert_eq!(name(OPEN_CENTER, "f1", "b5"), "Bb5");
        assert_eq!(name(OPEN_CENTER, "d1", "d3"), "Qd3");
    }

    #[test]
    fn piece_captures() {
        assert_eq!(name(OPEN_CENTER, "c3", "d5"), "Nxd5");
    }

    #[test]
    fn castling_is_a_king_move() {
        let notation = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";
        assert_eq!(name(notation, "e1", "g1"), "Kg1");
        assert_eq!(name(notation, "e1", "c1"), "Kc1");
    }

    #[test]
    fn en_passant_is_a_capture() {
        let notation = "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        assert_eq!(name(notation, "e5", "d6"), "exd6");
        assert_eq!(name(notation, "e5", "e6"), "e6");
    }

    #[test]
    fn black_pieces_use_lower_case_letters() {
        let notation = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        assert_eq!(name(notation, "b8", "c6"), "nc6");
        assert_eq!(name(notation, "g8", "f6"), "nf6");

        let notation = "rnbqkbnr/ppp1pppp/8/3P4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2";
        assert_eq!(name(notation, "d8", "d5"), "qxd5");

        let notation = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1";
        assert_eq!(name(notation, "e8", "g8"), "kg8");
        // Black pawns still use the bare file
        assert_eq!(name(notation, "d7", "d5"), "d5");
    }

    #[test]
    fn empty_origin_has_no_name() {
        let position = Position::startpos();
        assert_eq!(move_name(&position, sq("e4"), sq("e5")), None);
    }
}
