//! Applying moves and converting adjacent opponent pieces

use serde::Serialize;

use crate::board::{Board, Owner, Player};
use crate::error::{EngineError, Result};
use crate::hex::Hex;
use crate::moves::{Move, MoveKind};

/// Result of a completed move
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    /// Opponent hexes that changed color, ordered by q then r
    pub captured: Vec<Hex>,
}

/// Move a piece of `player` from `origin` to `destination`
///
/// The destination must be empty and one or two hexes away, and the origin
/// must hold one of `player`'s pieces. A jump vacates the origin; a clone
/// leaves it in place.
pub fn apply_move(board: &Board, origin: Hex, destination: Hex, player: Player) -> Result<Board> {
    move_piece(board, origin, destination, player).map(|(next, _)| next)
}

/// Flip every opponent piece adjacent to `destination` to `player`
pub fn convert_adjacent(board: &Board, destination: Hex, player: Player) -> Board {
    let mut next = board.clone();
    flip_neighbors(&mut next, destination, player);
    next
}

/// Apply a move and its captures in one step
pub fn play(board: &Board, mv: Move, player: Player) -> Result<(Board, MoveOutcome)> {
    let (mut next, kind) = move_piece(board, mv.from, mv.to, player)?;
    let captured = flip_neighbors(&mut next, mv.to, player);
    Ok((next, MoveOutcome { kind, captured }))
}

fn move_piece(board: &Board, origin: Hex, destination: Hex, player: Player) -> Result<(Board, MoveKind)> {
    let illegal = EngineError::IllegalMove {
        from: origin,
        to: destination,
    };

    if board.get(origin)? != Owner::from(player) || !board.get(destination)?.is_empty() {
        return Err(illegal);
    }
    let kind = MoveKind::from_distance(origin.distance_to(destination)).ok_or(illegal)?;

    let mut next = board.clone();
    next.put(destination, player.into())?;
    if kind == MoveKind::Jump {
        next.put(origin, Owner::Empty)?;
    }
    Ok((next, kind))
}

fn flip_neighbors(board: &mut Board, destination: Hex, player: Player) -> Vec<Hex> {
    let opponent = Owner::from(player.opponent());
    let mut captured = Vec::new();
    for hex in destination.neighbors() {
        if let Some(cell) = board.cell_mut(hex).filter(|cell| **cell == opponent) {
            *cell = player.into();
            captured.push(hex);
        }
    }
    captured.sort_unstable();
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board_7x7() -> Board {
        Board::initialize(BoardSize::new(7, 7).unwrap())
    }

    #[test]
    fn test_clone_keeps_origin() {
        let board = board_7x7();
        let next = apply_move(&board, Hex::new(0, 0), Hex::new(1, 0), Player::A).unwrap();
        assert_eq!(next.get(Hex::new(0, 0)), Ok(Owner::PlayerA));
        assert_eq!(next.get(Hex::new(1, 0)), Ok(Owner::PlayerA));
        assert_eq!(next.score_counts().a, 3);
        // Input board untouched
        assert_eq!(board.get(Hex::new(1, 0)), Ok(Owner::Empty));
    }

    #[test]
    fn test_jump_vacates_origin() {
        let board = board_7x7();
        let next = apply_move(&board, Hex::new(0, 0), Hex::new(1, 1), Player::A).unwrap();
        assert_eq!(next.get(Hex::new(0, 0)), Ok(Owner::Empty));
        assert_eq!(next.get(Hex::new(1, 1)), Ok(Owner::PlayerA));
        assert_eq!(next.score_counts().a, 2);
    }

    #[test]
    fn test_illegal_moves_rejected() {
        let board = board_7x7();
        let err = |from, to| EngineError::IllegalMove { from, to };

        // Wrong owner
        assert_eq!(
            apply_move(&board, Hex::new(0, 6), Hex::new(1, 6), Player::A),
            Err(err(Hex::new(0, 6), Hex::new(1, 6)))
        );
        // Too far
        assert_eq!(
            apply_move(&board, Hex::new(0, 0), Hex::new(3, 0), Player::A),
            Err(err(Hex::new(0, 0), Hex::new(3, 0)))
        );
        // Occupied destination
        assert_eq!(
            apply_move(&board, Hex::new(6, 6), Hex::new(6, 6), Player::A),
            Err(err(Hex::new(6, 6), Hex::new(6, 6)))
        );
        // Off the board
        assert_eq!(
            apply_move(&board, Hex::new(0, 0), Hex::new(-1, 0), Player::A),
            Err(EngineError::OutOfBounds { hex: Hex::new(-1, 0) })
        );
    }

    #[test]
    fn test_convert_adjacent_flips_only_opponent() {
        let board = board_7x7()
            .set(Hex::new(3, 4), Owner::PlayerB)
            .unwrap()
            .set(Hex::new(2, 3), Owner::PlayerB)
            .unwrap()
            .set(Hex::new(4, 3), Owner::PlayerA)
            .unwrap()
            .set(Hex::new(3, 3), Owner::PlayerA)
            .unwrap();

        let next = convert_adjacent(&board, Hex::new(3, 3), Player::A);
        assert_eq!(next.get(Hex::new(3, 4)), Ok(Owner::PlayerA));
        assert_eq!(next.get(Hex::new(2, 3)), Ok(Owner::PlayerA));
        assert_eq!(next.get(Hex::new(4, 3)), Ok(Owner::PlayerA));
        assert_eq!(next.get(Hex::new(3, 2)), Ok(Owner::Empty));
        // Pieces beyond the six neighbors are untouched
        assert_eq!(next.get(Hex::new(0, 6)), Ok(Owner::PlayerB));
    }

    #[test]
    fn test_convert_adjacent_at_edge() {
        let board = board_7x7().set(Hex::new(1, 0), Owner::PlayerB).unwrap();
        let next = convert_adjacent(&board, Hex::new(0, 0), Player::A);
        assert_eq!(next.get(Hex::new(1, 0)), Ok(Owner::PlayerA));
        assert_eq!(next.score_counts().b, 2);
    }

    #[test]
    fn test_play_reports_captures() {
        let board = board_7x7()
            .set(Hex::new(1, 1), Owner::PlayerB)
            .unwrap()
            .set(Hex::new(0, 2), Owner::PlayerB)
            .unwrap();

        let (next, outcome) = play(&board, Move::new(Hex::new(0, 0), Hex::new(0, 1)), Player::A).unwrap();
        assert_eq!(outcome.kind, MoveKind::Clone);
        assert_eq!(outcome.captured, vec![Hex::new(0, 2), Hex::new(1, 1)]);
        assert_eq!(next.score_counts().a, 5);
        assert_eq!(next.score_counts().b, 2);
    }

    #[test]
    fn test_play_captures_in_corner() {
        // Two of the landing hex's neighbors are off the board
        let board = board_7x7()
            .set(Hex::new(1, 4), Owner::PlayerA)
            .unwrap()
            .set(Hex::new(1, 5), Owner::PlayerB)
            .unwrap();

        let (next, outcome) = play(&board, Move::new(Hex::new(1, 4), Hex::new(0, 5)), Player::A).unwrap();
        assert_eq!(outcome.captured, vec![Hex::new(0, 6), Hex::new(1, 5)]);
        assert_eq!(next.get(Hex::new(0, 6)), Ok(Owner::PlayerA));
        assert_eq!(next.score_counts().b, 1);
    }
}
