//! Command implementations.
//!
//! Each command writes its report to the given writer so it can be captured
//! in tests; progress goes to the log.

use anyhow::{anyhow, bail, Context};
use chessboard_core::{Move, Square};
use chessboard_engine::{all_legal_moves, move_name, perft_divide, Game, Position};
use serde::Serialize;
use std::io::Write;
use std::time::Instant;

/// One legal move as printed by `moves --json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct MoveJson {
    pub from: String,
    pub to: String,
    pub name: String,
}

/// Runs perft to `depth`, optionally split by root move.
pub fn perft(
    position: &Position,
    depth: u32,
    divide: bool,
    max_depth: u32,
    out: &mut impl Write,
) -> anyhow::Result<u64> {
    if depth > max_depth {
        bail!("depth {} exceeds the limit of {}", depth, max_depth);
    }
    tracing::info!("Running perft {} on {}", depth, position);
    let started = Instant::now();

    let nodes: u64 = if depth == 0 {
        1
    } else {
        let results = perft_divide(position, depth);
        if divide {
            for (mv, count) in &results {
                writeln!(out, "{}: {}", mv, count)?;
            }
            writeln!(out)?;
        }
        results.iter().map(|(_, count)| count).sum()
    };

    writeln!(out, "Nodes: {}", nodes)?;
    tracing::debug!("perft {} took {:?}", depth, started.elapsed());
    Ok(nodes)
}

/// Lists the legal moves of the side to move, optionally only those
/// starting on `square`.
pub fn moves(
    position: &Position,
    square: Option<Square>,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let listed: Vec<MoveJson> = all_legal_moves(position)
        .into_iter()
        .filter(|m| square.map_or(true, |sq| m.from() == sq))
        .map(|m| MoveJson {
            from: m.from().to_algebraic(),
            to: m.to().to_algebraic(),
            name: move_name(position, m.from(), m.to()).unwrap_or_default(),
        })
        .collect();
    tracing::info!("{} legal moves", listed.len());

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&listed)?)?;
    } else {
        for m in &listed {
            writeln!(out, "{}{} {}", m.from, m.to, m.name)?;
        }
    }
    Ok(())
}

/// Plays coordinate moves (`e2e4`) in order, printing each move name, the
/// final notation and the game status.
pub fn play(position: Position, moves: &[String], out: &mut impl Write) -> anyhow::Result<Game> {
    let mut game = Game::from_position(position);

    for text in moves {
        let m = Move::from_coordinate(text)
            .ok_or_else(|| anyhow!("invalid move text: {}", text))?;
        let entry = game
            .play_move(m)
            .with_context(|| format!("cannot play {}", text))?;
        tracing::debug!("{} -> {}", entry.name, entry.notation);
        writeln!(out, "{}", entry.name)?;
    }

    writeln!(out, "{}", game.position())?;
    writeln!(out, "Status: {}", game.status())?;
    Ok(game)
}

/// Decodes `notation` and prints the re-encoded form.
pub fn validate(notation: &str, out: &mut impl Write) -> anyhow::Result<Position> {
    let position = Position::from_notation(notation)?;
    writeln!(out, "{}", position)?;
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessboard_engine::GameStatus;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_perft_reports_nodes() {
        let mut buf = Vec::new();
        let nodes = perft(&Position::startpos(), 2, false, 6, &mut buf).unwrap();
        assert_eq!(nodes, 400);
        assert_eq!(output(buf), "Nodes: 400\n");
    }

    #[test]
    fn test_perft_divide_lists_root_moves() {
        let mut buf = Vec::new();
        perft(&Position::startpos(), 1, true, 6, &mut buf).unwrap();
        let text = output(buf);
        assert!(text.starts_with("a2a3: 1\n"));
        assert!(text.ends_with("Nodes: 20\n"));
        assert_eq!(text.lines().count(), 22);
    }

    #[test]
    fn test_perft_respects_limit() {
        let mut buf = Vec::new();
        assert!(perft(&Position::startpos(), 7, false, 6, &mut buf).is_err());
    }

    #[test]
    fn test_moves_for_one_square() {
        let mut buf = Vec::new();
        let e2 = Square::from_algebraic("e2");
        moves(&Position::startpos(), e2, false, &mut buf).unwrap();
        // Ascending square index: e4 comes before e3
        assert_eq!(output(buf), "e2e4 e4\ne2e3 e3\n");
    }

    #[test]
    fn test_moves_as_json() {
        let mut buf = Vec::new();
        let g1 = Square::from_algebraic("g1");
        moves(&Position::startpos(), g1, true, &mut buf).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let list = parsed.as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0]["from"], "g1");
        assert_eq!(list[0]["to"], "f3");
        assert_eq!(list[0]["name"], "Nf3");
    }

    #[test]
    fn test_play_prints_names_and_status() {
        let mut buf = Vec::new();
        let moves: Vec<String> = ["f2f3", "e7e5", "g2g4", "d8h4"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let game = play(Position::startpos(), &moves, &mut buf).unwrap();
        assert_eq!(
            game.status(),
            GameStatus::Checkmate {
                winner: chessboard_core::Color::Black
            }
        );
        let text = output(buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(&lines[..4], &["f3", "e5", "g4", "qh4"]);
        assert_eq!(
            lines[4],
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
        );
        assert!(lines[5].starts_with("Status: checkmate"));
    }

    #[test]
    fn test_play_rejects_illegal_moves() {
        let mut buf = Vec::new();
        let moves = vec!["e2e5".to_string()];
        assert!(play(Position::startpos(), &moves, &mut buf).is_err());
        let moves = vec!["zz".to_string()];
        assert!(play(Position::startpos(), &moves, &mut buf).is_err());
    }

    #[test]
    fn test_validate() {
        let mut buf = Vec::new();
        validate("44/8/8/8/8/8/8/4K3 w - - 0 1", &mut buf).unwrap();
        assert_eq!(output(buf), "8/8/8/8/8/8/8/4K3 w - - 0 1\n");

        let mut buf = Vec::new();
        assert!(validate("8/8/8/8/8/8/8/4K3 x - - 0 1", &mut buf).is_err());
        assert!(buf.is_empty());
    }
}
