//! Serializable views of the game for the board UI
//!
//! Hexes are keyed by `"q,r"` strings here and only here.

use serde::Serialize;

use crate::board::{Board, Owner, Player, ScoreCounts};
use crate::error::Result;
use crate::game::GameState;
use crate::hex::Hex;
use crate::status::GameStatus;

/// One board cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellSnapshot {
    pub key: String,
    pub q: i32,
    pub r: i32,
    pub s: i64,
    pub owner: Owner,
}

impl From<(Hex, Owner)> for CellSnapshot {
    fn from((hex, owner): (Hex, Owner)) -> Self {
        Self {
            key: hex.to_string(),
            q: hex.q,
            r: hex.r,
            s: hex.s(),
            owner,
        }
    }
}

/// Every cell of a board, ordered by q then r
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub cells: Vec<CellSnapshot>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            width: board.size().width(),
            height: board.size().height(),
            cells: board.cells().into_iter().map(CellSnapshot::from).collect(),
        }
    }
}

/// Everything the view needs to draw one frame
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub current_player: Player,
    pub selected_hex: Option<String>,
    pub highlighted: Vec<String>,
    pub status: GameStatus,
    pub winner: Option<Player>,
    pub scores: ScoreCounts,
    pub message: String,
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        let mut highlighted: Vec<Hex> = self.highlighted().iter().copied().collect();
        highlighted.sort_unstable();

        GameSnapshot {
            board: BoardSnapshot::from(self.board()),
            current_player: self.current_player(),
            selected_hex: self.selected_hex().map(|hex| hex.to_string()),
            highlighted: highlighted.iter().map(Hex::to_string).collect(),
            status: self.status(),
            winner: self.winner(),
            scores: self.scores(),
            message: self.status_report().result_message(),
        }
    }

    /// `select_or_move` for a hex given as a `"q,r"` key
    pub fn select_or_move_key(&self, key: &str) -> Result<Self> {
        let hex: Hex = key.parse()?;
        Ok(self.select_or_move(hex))
    }
}
