//! HEXATAXX Core - Rules engine
//!
//! This crate provides the rules for hex-grid Ataxx:
//! - Board geometry (hex grid with axial coordinates)
//! - Board state over a rectangular playable region
//! - Clone/jump move legality and adjacent capture
//! - Click-driven turn controller and game-over detection
//! - Serializable snapshots for a board view

pub mod hex;
pub mod board;
pub mod moves;
pub mod capture;
pub mod game;
pub mod status;
pub mod snapshot;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use hex::{Hex, DIRECTIONS};
pub use board::{Board, BoardSize, Owner, Player, ScoreCounts};
pub use moves::{legal_moves, moves_by_origin, valid_moves, Move, MoveKind, MAX_MOVE_DISTANCE};
pub use capture::{apply_move, convert_adjacent, play, MoveOutcome};
pub use game::{GameState, TurnPhase};
pub use status::{evaluate, has_any_valid_move, GameStatus, StatusReport};
pub use snapshot::{BoardSnapshot, CellSnapshot, GameSnapshot};
pub use config::{GameConfig, DEFAULT_BOARD_SIZE};
pub use error::{EngineError, Result};
