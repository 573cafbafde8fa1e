//! Game-over detection and scoring

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, ScoreCounts};
use crate::game::GameState;
use crate::moves::can_move_from;

/// Whether moves are still being accepted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Finished,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self == GameStatus::Finished
    }
}

/// Status together with the winner (None while playing or on a tie)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: GameStatus,
    pub winner: Option<Player>,
}

impl StatusReport {
    pub const PLAYING: Self = Self {
        status: GameStatus::Playing,
        winner: None,
    };

    fn finished(winner: Option<Player>) -> Self {
        Self {
            status: GameStatus::Finished,
            winner,
        }
    }

    /// Human-readable summary of the result
    pub fn result_message(&self) -> String {
        match (self.status, self.winner) {
            (GameStatus::Playing, _) => "Game in progress".to_string(),
            (GameStatus::Finished, None) => "The game ended in a tie!".to_string(),
            (GameStatus::Finished, Some(player)) => {
                format!("{} player wins!", player.color())
            }
        }
    }
}

/// True if any of `player`'s pieces has a legal destination
pub fn has_any_valid_move(board: &Board, player: Player) -> bool {
    board
        .pieces(player)
        .into_iter()
        .any(|origin| can_move_from(board, origin))
}

/// Recompute status and winner for the current board
pub fn evaluate(state: &GameState) -> GameState {
    let board = state.board();
    let report = classify(board.score_counts(), board.size().capacity(), |player| {
        has_any_valid_move(board, player)
    });
    state.with_status(report)
}

/// Terminal conditions, checked in order:
/// a side with no pieces loses, a full board or a total stalemate is decided
/// on piece count
fn classify(counts: ScoreCounts, capacity: usize, can_move: impl Fn(Player) -> bool) -> StatusReport {
    if counts.a == 0 {
        StatusReport::finished(Some(Player::B))
    } else if counts.b == 0 {
        StatusReport::finished(Some(Player::A))
    } else if counts.total() == capacity || (!can_move(Player::A) && !can_move(Player::B)) {
        StatusReport::finished(counts.leader())
    } else {
        StatusReport::PLAYING
    }
}
