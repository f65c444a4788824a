//! Terminal state detection.

use std::fmt;

use crate::{all_legal_moves, in_check, Position};
use chessboard_core::Color;

/// Whether the side to move can still play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check but has no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true for checkmate and stalemate.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Classifies the position for the side to move.
///
/// Draws by move counters, repetition or material are not detected.
pub fn status(position: &Position) -> GameStatus {
    if !all_legal_moves(position).is_empty() {
        return GameStatus::Ongoing;
    }
    let side = position.side_to_move();
    if in_check(side, position) {
        GameStatus::Checkmate {
            winner: side.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(notation: &str) -> GameStatus {
        status(&Position::from_notation(notation).unwrap())
    }

    #[test]
    fn startpos_is_ongoing() {
        assert_eq!(status(&Position::startpos()), GameStatus::Ongoing);
        assert!(!GameStatus::Ongoing.is_over());
    }

    #[test]
    fn fools_mate() {
        let result =
            status_of("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(
            result,
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
        assert!(result.is_over());
    }

    #[test]
    fn back_rank_mate_for_white() {
        let result = status_of("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(
            result,
            GameStatus::Checkmate {
                winner: Color::White
            }
        );
    }

    #[test]
    fn stalemate() {
        let result = status_of("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(result, GameStatus::Stalemate);
        assert!(result.is_over());
    }

    #[test]
    fn check_with_an_escape_is_ongoing() {
        assert_eq!(
            status_of("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1"),
            GameStatus::Ongoing
        );
    }

    #[test]
    fn display() {
        assert_eq!(GameStatus::Stalemate.to_string(), "stalemate");
        assert_eq!(
            GameStatus::Checkmate {
                winner: Color::White
            }
            .to_string(),
            format!("checkmate, {} wins", Color::White)
        );
    }
}
