//! Core types for the chessboard rules engine.
//!
//! This crate provides the value types shared by the engine and its
//! collaborators:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`CastlingRights`] as a 4-bit flag set
//! - [`Move`] for origin/target pairs
//! - The position notation grammar ([`NotationFields`], [`NotationError`])

mod castling;
mod color;
mod mov;
mod notation;
mod piece;
mod square;

pub use castling::{CastleSide, CastlingRights};
pub use color::Color;
pub use mov::Move;
pub use notation::{NotationError, NotationFields};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
