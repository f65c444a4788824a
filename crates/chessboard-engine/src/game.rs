//! Move list with navigation.
//!
//! A [`Game`] records every played move as a named entry together with the
//! notation of the position it produced, starting from a `start` entry. The
//! cursor can be moved back and forth through the list; playing a move while
//! rewound discards everything after the cursor.

use crate::{apply, legal_moves, move_name, status, GameStatus, Position};
use chessboard_core::{Move, NotationError, Square};
use thiserror::Error;

/// Name of the first entry in every game.
pub const START_ENTRY: &str = "start";

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("the piece on {0} belongs to the side not to move")]
    NotYourTurn(Square),

    #[error("illegal move: {0}")]
    IllegalMove(Move),

    #[error("no entry at index {0}")]
    NoSuchEntry(usize),

    #[error("already at the first entry")]
    AtStart,

    #[error("already at the last entry")]
    AtEnd,

    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEntry {
    /// Move name, or [`START_ENTRY`] for the first entry.
    pub name: String,
    /// Notation of the position after the move.
    pub notation: String,
}

/// A move list and the position at its cursor.
#[derive(Debug, Clone)]
pub struct Game {
    entries: Vec<GameEntry>,
    cursor: usize,
    position: Position,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting position.
    pub fn new() -> Self {
        Self::from_position(Position::startpos())
    }

    /// Creates a game from a custom starting position.
    pub fn from_position(position: Position) -> Self {
        Game {
            entries: vec![GameEntry {
                name: START_ENTRY.to_string(),
                notation: position.to_notation(),
            }],
            cursor: 0,
            position,
        }
    }

    /// Creates a game from notation.
    pub fn from_notation(text: &str) -> Result<Self, GameError> {
        Ok(Self::from_position(Position::from_notation(text)?))
    }

    /// Returns the position at the cursor.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns every entry, the `start` entry first.
    pub fn entries(&self) -> &[GameEntry] {
        &self.entries
    }

    /// Returns the index of the entry the current position belongs to.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the status of the position at the cursor.
    pub fn status(&self) -> GameStatus {
        status(&self.position)
    }

    /// Plays the piece on `from` to `to` and appends the move to the list.
    ///
    /// Entries after the cursor are dropped first. On error nothing changes.
    pub fn play(&mut self, from: Square, to: Square) -> Result<&GameEntry, GameError> {
        let piece = self
            .position
            .piece_at(from)
            .ok_or(GameError::EmptySquare(from))?;
        if piece.color != self.position.side_to_move() {
            return Err(GameError::NotYourTurn(from));
        }
        if !legal_moves(piece, from, &self.position).contains(to) {
            return Err(GameError::IllegalMove(Move::new(from, to)));
        }

        let name = move_name(&self.position, from, to).ok_or(GameError::EmptySquare(from))?;
        let next = apply(from, to, &self.position);

        self.entries.truncate(self.cursor + 1);
        self.entries.push(GameEntry {
            name,
            notation: next.to_notation(),
        });
        self.cursor += 1;
        self.position = next;

        Ok(&self.entries[self.cursor])
    }

    /// Plays a move given as an origin/target pair.
    pub fn play_move(&mut self, m: Move) -> Result<&GameEntry, GameError> {
        self.play(m.from(), m.to())
    }

    /// Moves the cursor to `index` and restores the position stored there.
    pub fn goto(&mut self, index: usize) -> Result<&Position, GameError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(GameError::NoSuchEntry(index))?;
        self.position = Position::from_notation(&entry.notation)?;
        self.cursor = index;
        Ok(&self.position)
    }

    /// Steps the cursor one entry back.
    pub fn back(&mut self) -> Result<&Position, GameError> {
        let index = self.cursor.checked_sub(1).ok_or(GameError::AtStart)?;
        self.goto(index)
    }

    /// Steps the cursor one entry forward.
    pub fn forward(&mut self) -> Result<&Position, GameError> {
        if self.cursor + 1 >= self.entries.len() {
            return Err(GameError::AtEnd);
        }
        self.goto(self.cursor + 1)
    }
}
