//! Position notation grammar.
//!
//! A position is written as six fields separated by single spaces:
//!
//! ```text
//! <ranks> <side> <rights> <ep> <halfmove> <fullmove>
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
//! ```
//!
//! [`NotationFields::parse`] checks the whole text against this grammar
//! before anything is built from it, so callers never see a half-parsed
//! position. Both counters are limited to `0..=u32::MAX`; larger digit runs
//! are format errors.

use crate::{CastlingRights, Color, Piece, Rank, Square};
use thiserror::Error;

/// The format error raised when text does not match the notation grammar.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid notation: expected 6 fields, got {0}")]
    InvalidFieldCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid side to move: expected 'w' or 'b', got '{0}'")]
    InvalidSideToMove(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    /// Not a digit run, or above `u32::MAX`.
    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    /// Not a digit run, or above `u32::MAX`.
    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// The six fields of a notation string, validated.
///
/// Piece placement is kept as rank rows of cells so the engine can lay
/// them straight onto its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotationFields {
    /// 64 cells, index 0 = a8, row-major.
    pub cells: Vec<Option<Piece>>,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl NotationFields {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Validates and splits a notation string.
    pub fn parse(text: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = text.split(' ').collect();

        if parts.len() != 6 {
            return Err(NotationError::InvalidFieldCount(parts.len()));
        }

        let cells = Self::parse_placement(parts[0])?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(NotationError::InvalidSideToMove(other.to_string())),
        };

        Self::validate_castling(parts[2])?;
        let castling = CastlingRights::from_notation(parts[2]);

        let en_passant = Self::parse_en_passant(parts[3])?;

        let halfmove_clock = parse_counter(parts[4])
            .ok_or_else(|| NotationError::InvalidHalfmoveClock(parts[4].to_string()))?;
        let fullmove_number = parse_counter(parts[5])
            .ok_or_else(|| NotationError::InvalidFullmoveNumber(parts[5].to_string()))?;

        Ok(NotationFields {
            cells,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    fn parse_placement(placement: &str) -> Result<Vec<Option<Piece>>, NotationError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(NotationError::InvalidPiecePlacement(format!(
                "expected 8 ranks, got {}",
                ranks.len()
            )));
        }

        let mut cells = Vec::with_capacity(64);
        for (i, rank) in ranks.iter().enumerate() {
            let mut width = 0;
            for c in rank.chars() {
                match c {
                    '1'..='8' => {
                        let run = c as usize - '0' as usize;
                        width += run;
                        cells.extend(std::iter::repeat(None).take(run));
                    }
                    _ => match Piece::from_char(c) {
                        Some(piece) => {
                            width += 1;
                            cells.push(Some(piece));
                        }
                        None => {
                            return Err(NotationError::InvalidPiecePlacement(format!(
                                "invalid character '{}' in rank {}",
                                c,
                                8 - i
                            )))
                        }
                    },
                }
            }
            if width != 8 {
                return Err(NotationError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected 8",
                    8 - i,
                    width
                )));
            }
        }

        Ok(cells)
    }

    fn validate_castling(castling: &str) -> Result<(), NotationError> {
        if castling == "-" {
            return Ok(());
        }

        // Each letter at most once, in K, Q, k, q order.
        let mut remaining = "KQkq";
        for c in castling.chars() {
            match remaining.find(c) {
                Some(pos) => remaining = &remaining[pos + 1..],
                None if "KQkq".contains(c) => {
                    return Err(NotationError::InvalidCastlingRights(format!(
                        "'{}' repeated or out of order in '{}'",
                        c, castling
                    )))
                }
                None => {
                    return Err(NotationError::InvalidCastlingRights(format!(
                        "invalid character '{}'",
                        c
                    )))
                }
            }
        }

        Ok(())
    }

    fn parse_en_passant(ep: &str) -> Result<Option<Square>, NotationError> {
        if ep == "-" {
            return Ok(None);
        }

        match Square::from_algebraic(ep) {
            Some(sq) if sq.rank() == Rank::R3 || sq.rank() == Rank::R6 => Ok(Some(sq)),
            _ => Err(NotationError::InvalidEnPassantSquare(ep.to_string())),
        }
    }
}

/// Parses a base-10 counter made of ASCII digits only, up to `u32::MAX`.
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PieceKind;

    #[test]
    fn parse_startpos() {
        let fields = NotationFields::parse(NotationFields::STARTPOS).unwrap();
        assert_eq!(fields.side_to_move, Color::White);
        assert_eq!(fields.castling, CastlingRights::ALL);
        assert_eq!(fields.en_passant, None);
        assert_eq!(fields.halfmove_clock, 0);
        assert_eq!(fields.fullmove_number, 1);
        assert_eq!(fields.cells.len(), 64);
        assert_eq!(
            fields.cells[0],
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(
            fields.cells[60],
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(fields.cells[36], None);
    }

    #[test]
    fn parse_custom_position() {
        let fields =
            NotationFields::parse("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
                .unwrap();
        assert_eq!(fields.halfmove_clock, 2);
        assert_eq!(fields.fullmove_number, 3);
        assert_eq!(
            fields.cells[Square::from_algebraic("c6").unwrap().index() as usize],
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
    }

    #[test]
    fn parse_en_passant_target() {
        let fields =
            NotationFields::parse("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(fields.side_to_move, Color::Black);
        assert_eq!(fields.en_passant, Square::from_algebraic("e3"));
    }

    #[test]
    fn invalid_field_count() {
        assert!(matches!(
            NotationFields::parse("invalid"),
            Err(NotationError::InvalidFieldCount(1))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - 0 1 extra"),
            Err(NotationError::InvalidFieldCount(7))
        ));
    }

    #[test]
    fn fields_are_separated_by_single_spaces() {
        for text in [
            "8/8/8/8/8/8/8/8 w -  - 0 1",
            "8/8/8/8/8/8/8/8 w - - 0 1 ",
            " 8/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/8\tw - - 0 1",
            "8/8/8/8/8/8/8/8 w - - 0 1\n",
        ] {
            assert!(NotationFields::parse(text).is_err(), "{:?} should be rejected", text);
        }
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w -  - 0 1"),
            Err(NotationError::InvalidFieldCount(7))
        ));
        assert!(matches!(
            NotationFields::parse(""),
            Err(NotationError::InvalidFieldCount(1))
        ));
    }

    #[test]
    fn invalid_side_to_move() {
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 x KQkq - 0 1"),
            Err(NotationError::InvalidSideToMove(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_rank_count() {
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8 w KQkq - 0 1"),
            Err(NotationError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_invalid_char() {
        assert!(matches!(
            NotationFields::parse("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(NotationError::InvalidPiecePlacement(_))
        ));
        // Run lengths are 1-8
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/08 w - - 0 1"),
            Err(NotationError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/9 w - - 0 1"),
            Err(NotationError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_piece_placement_wrong_width() {
        assert!(matches!(
            NotationFields::parse("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(NotationError::InvalidPiecePlacement(_))
        ));
        assert!(matches!(
            NotationFields::parse("7/8/8/8/8/8/8/8 w - - 0 1"),
            Err(NotationError::InvalidPiecePlacement(_))
        ));
    }

    #[test]
    fn invalid_castling_rights() {
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w XYZ - 0 1"),
            Err(NotationError::InvalidCastlingRights(_))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w qK - 0 1"),
            Err(NotationError::InvalidCastlingRights(_))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w KK - 0 1"),
            Err(NotationError::InvalidCastlingRights(_))
        ));
    }

    #[test]
    fn partial_castling_rights() {
        let fields = NotationFields::parse("8/8/8/8/8/8/8/8 w Kq - 0 1").unwrap();
        assert!(fields.castling.can_castle_kingside(Color::White));
        assert!(!fields.castling.can_castle_queenside(Color::White));
        assert!(fields.castling.can_castle_queenside(Color::Black));
    }

    #[test]
    fn invalid_en_passant() {
        for ep in ["abc", "x3", "e4", "E3"] {
            let text = format!("8/8/8/8/8/8/8/8 w - {} 0 1", ep);
            assert!(
                matches!(
                    NotationFields::parse(&text),
                    Err(NotationError::InvalidEnPassantSquare(_))
                ),
                "{} should be rejected",
                ep
            );
        }
    }

    #[test]
    fn invalid_counters() {
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - abc 1"),
            Err(NotationError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - -1 1"),
            Err(NotationError::InvalidHalfmoveClock(_))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - 0 xyz"),
            Err(NotationError::InvalidFullmoveNumber(_))
        ));
        assert!(matches!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - 0 +2"),
            Err(NotationError::InvalidFullmoveNumber(_))
        ));
    }

    #[test]
    fn counters_cover_the_full_u32_range() {
        let fields = NotationFields::parse("8/8/8/8/8/8/8/8 w - - 4294967295 4294967295").unwrap();
        assert_eq!(fields.halfmove_clock, u32::MAX);
        assert_eq!(fields.fullmove_number, u32::MAX);

        assert_eq!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - 4294967296 1"),
            Err(NotationError::InvalidHalfmoveClock("4294967296".to_string()))
        );
        assert_eq!(
            NotationFields::parse("8/8/8/8/8/8/8/8 w - - 0 4294967296"),
            Err(NotationError::InvalidFullmoveNumber("4294967296".to_string()))
        );
    }

    #[test]
    fn error_display() {
        let err = NotationError::InvalidFieldCount(3);
        assert!(format!("{}", err).contains('3'));

        let err = NotationError::InvalidSideToMove("x".to_string());
        assert!(format!("{}", err).contains('x'));

        let err = NotationError::InvalidEnPassantSquare("z9".to_string());
        assert!(format!("{}", err).contains("z9"));
    }
}
