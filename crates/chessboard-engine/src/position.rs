//! Position representation and its notation codec.

use std::fmt;
use std::str::FromStr;

use chessboard_core::{CastlingRights, Color, NotationError, NotationFields, Piece, PieceKind, Square};

/// Complete game state.
///
/// A position only comes out of [`Position::from_notation`] or
/// [`apply`](crate::apply), and is never changed afterwards: every move
/// produces a fresh value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Board cells, index 0 = a8, row-major.
    pub(crate) squares: [Option<Piece>; 64],

    /// The side to move.
    pub(crate) side_to_move: Color,

    /// Castling rights.
    pub(crate) castling: CastlingRights,

    /// En passant target square, set only right after a double pawn step.
    pub(crate) en_passant: Option<Square>,

    /// Half-moves since the last pawn move or capture.
    pub(crate) halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub(crate) fullmove_number: u32,
}

impl Position {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        match Self::from_notation(NotationFields::STARTPOS) {
            Ok(position) => position,
            Err(_) => unreachable!("STARTPOS is valid"),
        }
    }

    /// Decodes a position from notation.
    ///
    /// The whole text is validated first; on failure no position is built.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let fields = NotationFields::parse(text)?;

        let mut squares = [None; 64];
        for (cell, piece) in squares.iter_mut().zip(fields.cells) {
            *cell = piece;
        }

        Ok(Position {
            squares,
            side_to_move: fields.side_to_move,
            castling: fields.castling,
            en_passant: fields.en_passant,
            halfmove_clock: fields.halfmove_clock,
            fullmove_number: fields.fullmove_number,
        })
    }

    /// Encodes the position as notation.
    pub fn to_notation(&self) -> String {
        let mut text = String::new();

        // Piece placement, rank 8 first
        for (row, rank) in self.squares.chunks(8).enumerate() {
            if row > 0 {
                text.push('/');
            }
            let mut empty_count = 0;
            for cell in rank {
                match cell {
                    Some(piece) => {
                        if empty_count > 0 {
                            text.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        text.push(piece.to_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                text.push_str(&empty_count.to_string());
            }
        }

        text.push(' ');
        text.push(self.side_to_move.to_char());

        text.push(' ');
        text.push_str(&self.castling.to_notation());

        text.push(' ');
        match self.en_passant {
            Some(sq) => text.push_str(&sq.to_algebraic()),
            None => text.push('-'),
        }

        text.push(' ');
        text.push_str(&self.halfmove_clock.to_string());
        text.push(' ');
        text.push_str(&self.fullmove_number.to_string());

        text
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if nothing stands on `sq`.
    #[inline]
    pub fn is_vacant(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Returns all 64 cells, index 0 = a8.
    #[inline]
    pub fn squares(&self) -> &[Option<Piece>; 64] {
        &self.squares
    }

    /// Iterates over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Finds the king of `color` by scanning the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_notation())
    }
}
