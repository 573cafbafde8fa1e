//! Game state and the click-driven turn controller

use rustc_hash::FxHashSet;

use crate::board::{Board, BoardSize, Player, ScoreCounts};
use crate::capture;
use crate::config::GameConfig;
use crate::error::{EngineError, Result};
use crate::hex::Hex;
use crate::moves::{valid_moves, Move};
use crate::status::{evaluate, GameStatus, StatusReport};

/// Where the current player is within their turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingSelection,
    AwaitingDestination { origin: Hex },
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state (clone to mutate)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,

    /// Player whose turn it is
    current_player: Player,

    /// Piece picked by the current player, if any
    selected_hex: Option<Hex>,

    /// Legal destinations of the selected piece
    highlighted: FxHashSet<Hex>,

    status: GameStatus,
    winner: Option<Player>,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game on a `width` x `height` board, player A to move
    pub fn initialize(width: i32, height: i32) -> Result<Self> {
        Self::from_config(&GameConfig::new(width, height))
    }

    pub fn from_config(config: &GameConfig) -> Result<Self> {
        let size = config.board_size()?;
        tracing::info!(
            "New {}x{} game, {} moves first",
            size.width(),
            size.height(),
            config.first_player.color()
        );
        Ok(Self::from_board(Board::initialize(size), config.first_player))
    }

    /// Start from an arbitrary position; a finished position is reported as such
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let state = Self {
            board,
            current_player,
            selected_hex: None,
            highlighted: FxHashSet::default(),
            status: GameStatus::Playing,
            winner: None,
        };
        evaluate(&state)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_size(&self) -> BoardSize {
        self.board.size()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn selected_hex(&self) -> Option<Hex> {
        self.selected_hex
    }

    /// Valid destinations for the current selection, empty when nothing is selected
    pub fn highlighted(&self) -> &FxHashSet<Hex> {
        &self.highlighted
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn phase(&self) -> TurnPhase {
        match self.selected_hex {
            Some(origin) => TurnPhase::AwaitingDestination { origin },
            None => TurnPhase::AwaitingSelection,
        }
    }

    pub fn scores(&self) -> ScoreCounts {
        self.board.score_counts()
    }

    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            status: self.status,
            winner: self.winner,
        }
    }

    pub(crate) fn with_status(&self, report: StatusReport) -> Self {
        Self {
            status: report.status,
            winner: report.winner,
            ..self.clone()
        }
    }

    // ========================================================================
    // TURN CONTROLLER
    // ========================================================================

    /// Handle a click on `hex`, returning the resulting state
    ///
    /// With nothing selected, clicking one of the current player's pieces
    /// selects it. With a piece selected, clicking it again deselects,
    /// clicking a highlighted hex plays the move, and clicking anywhere else
    /// drops the selection. Finished games ignore clicks.
    pub fn select_or_move(&self, hex: Hex) -> Self {
        if self.status.is_over() {
            return self.clone();
        }

        match self.phase() {
            TurnPhase::AwaitingSelection => self.select(hex),
            TurnPhase::AwaitingDestination { origin } if self.highlighted.contains(&hex) => {
                self.complete_move(Move::new(origin, hex))
            }
            TurnPhase::AwaitingDestination { origin } => {
                tracing::debug!("Selection at {} cancelled by click on {}", origin, hex);
                self.deselected()
            }
        }
    }

    fn select(&self, hex: Hex) -> Self {
        if self.board.owner(hex) != Some(self.current_player.into()) {
            return self.clone();
        }

        let highlighted = valid_moves(&self.board, hex);
        tracing::debug!(
            "{} selected {} with {} destinations",
            self.current_player.color(),
            hex,
            highlighted.len()
        );
        Self {
            selected_hex: Some(hex),
            highlighted,
            ..self.clone()
        }
    }

    fn deselected(&self) -> Self {
        Self {
            selected_hex: None,
            highlighted: FxHashSet::default(),
            ..self.clone()
        }
    }

    /// Play `mv` for the current player without going through selection
    ///
    /// Fails with `IllegalMove` when the game is over, the origin is not one
    /// of the current player's pieces, or the destination is not among its
    /// valid moves.
    pub fn make_move(&self, mv: Move) -> Result<Self> {
        let legal = !self.status.is_over()
            && self.board.owner(mv.from) == Some(self.current_player.into())
            && valid_moves(&self.board, mv.from).contains(&mv.to);
        if !legal {
            return Err(EngineError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        self.advance(mv)
    }

    fn complete_move(&self, mv: Move) -> Self {
        match self.advance(mv) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!("Highlighted move rejected: {}", err);
                self.deselected()
            }
        }
    }

    /// Move, capture, pass the turn and re-evaluate as one step
    fn advance(&self, mv: Move) -> Result<Self> {
        let player = self.current_player;
        let (board, outcome) = capture::play(&self.board, mv, player)?;

        tracing::debug!(
            "{} {:?} {} -> {}, captured {}",
            player.color(),
            outcome.kind,
            mv.from,
            mv.to,
            outcome.captured.len()
        );

        let next = evaluate(&Self {
            board,
            current_player: player.opponent(),
            selected_hex: None,
            highlighted: FxHashSet::default(),
            status: GameStatus::Playing,
            winner: None,
        });

        if next.status.is_over() {
            let scores = next.scores();
            tracing::info!(
                "Game over: {} ({} - {})",
                next.status_report().result_message(),
                scores.a,
                scores.b
            );
        }
        Ok(next)
    }
}

// ============================================================================
// TESTS
// ============================================================================
