//! Chess rules engine over immutable positions.
//!
//! This crate provides:
//! - [`Position`] - full game state and its six-field notation codec
//! - [`moves_for`] / [`attacks_for`] - pseudo-legal targets and threats
//! - [`all_attacks`] - every square each side threatens
//! - [`in_check`] / [`legal_moves`] - self-check filtering
//! - [`apply`] - produce the next position from an origin/target pair
//! - [`move_name`] - short move names for move lists
//! - [`status`] - checkmate and stalemate detection
//! - [`Game`] - a navigable move list
//!
//! # Architecture
//!
//! A position is a 64-cell board plus the side to move, castling rights,
//! en passant target and move counters. It is never mutated: [`apply`]
//! returns a fresh position. Legality is decided by playing each
//! pseudo-legal move and asking whether the mover's king is attacked.
//!
//! # Example
//!
//! ```
//! use chessboard_engine::{all_legal_moves, apply, Game, Position};
//! use chessboard_core::Square;
//!
//! let position = Position::startpos();
//! assert_eq!(all_legal_moves(&position).len(), 20);
//!
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let next = apply(e2, e4, &position);
//! assert_eq!(
//!     next.to_notation(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//!
//! let mut game = Game::new();
//! game.play(e2, e4).unwrap();
//! assert_eq!(game.entries()[1].name, "e4");
//! ```

mod apply;
mod attack_index;
mod game;
mod legality;
pub mod movegen;
mod naming;
mod position;
mod square_set;
mod status;

pub use apply::{apply, try_apply};
pub use attack_index::{all_attacks, AttackMap};
pub use game::{Game, GameEntry, GameError, START_ENTRY};
pub use legality::{all_legal_moves, in_check, is_legal, is_movable, legal_moves};
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{attacks_for, moves_for};
pub use naming::move_name;
pub use position::Position;
pub use square_set::{SquareSet, SquareSetIter};
pub use status::{status, GameStatus};
