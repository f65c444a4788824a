//! Perft (performance test) for move generator validation.
//!
//! Perft counts the number of leaf nodes at a given depth, which can be
//! compared against known-correct values to validate the move generator.

use crate::{all_legal_moves, apply, Position};

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = all_legal_moves(position);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|m| perft(&apply(m.from(), m.to(), position), depth - 1))
        .sum()
}

/// Perft with divide: the node count below each root move, sorted by the
/// move's coordinate text.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let moves = all_legal_moves(position);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        let nodes = if depth > 1 {
            perft(&apply(m.from(), m.to(), position), depth - 1)
        } else {
            1
        };
        results.push((m.to_coordinate(), nodes));
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
