//! Move legality: clone (distance 1) and jump (distance 2) destinations

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Owner, Player};
use crate::hex::Hex;

/// Longest legal move
pub const MAX_MOVE_DISTANCE: i32 = 2;

/// How the moving piece travels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Origin keeps its piece, destination gains a copy
    Clone,
    /// Piece leaves the origin and lands on the destination
    Jump,
}

impl MoveKind {
    pub fn from_distance(distance: i32) -> Option<Self> {
        match distance {
            1 => Some(MoveKind::Clone),
            2 => Some(MoveKind::Jump),
            _ => None,
        }
    }
}

/// A move between two hexes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Hex,
    pub to: Hex,
}

impl Move {
    pub const fn new(from: Hex, to: Hex) -> Self {
        Self { from, to }
    }

    /// None when the hexes are not 1 or 2 apart
    pub fn kind(&self) -> Option<MoveKind> {
        MoveKind::from_distance(self.from.distance_to(self.to))
    }
}

/// Every empty on-board hex one or two steps from an occupied `origin`
pub fn valid_moves(board: &Board, origin: Hex) -> FxHashSet<Hex> {
    match board.owner(origin) {
        Some(owner) if !owner.is_empty() => destinations(board, origin).collect(),
        _ => FxHashSet::default(),
    }
}

fn destinations(board: &Board, origin: Hex) -> impl Iterator<Item = Hex> + '_ {
    (1..=MAX_MOVE_DISTANCE)
        .flat_map(move |radius| origin.ring(radius))
        .filter(move |&hex| board.owner(hex) == Some(Owner::Empty))
}

/// True if the piece on `origin` has at least one destination
pub(crate) fn can_move_from(board: &Board, origin: Hex) -> bool {
    destinations(board, origin).next().is_some()
}

/// Destinations for each of `player`'s pieces that can move
pub fn moves_by_origin(board: &Board, player: Player) -> FxHashMap<Hex, FxHashSet<Hex>> {
    board
        .pieces(player)
        .into_iter()
        .map(|origin| (origin, valid_moves(board, origin)))
        .filter(|(_, targets)| !targets.is_empty())
        .collect()
}

/// All legal moves for `player`, ordered by origin then destination
pub fn legal_moves(board: &Board, player: Player) -> Vec<Move> {
    let mut moves = Vec::new();
    for origin in board.pieces(player) {
        let mut targets: Vec<_> = destinations(board, origin).collect();
        targets.sort_unstable();
        moves.extend(targets.into_iter().map(|to| Move::new(origin, to)));
    }
    moves
}
