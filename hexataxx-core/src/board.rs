//! Board state: hex -> owner over a rectangular playable region

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::hex::Hex;

// ============================================================================
// PLAYERS AND OWNERSHIP
// ============================================================================

/// Player color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Display color used by the board view
    pub fn color(self) -> &'static str {
        match self {
            Player::A => "red",
            Player::B => "blue",
        }
    }
}

/// Contents of a single cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Owner {
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Empty => None,
            Owner::PlayerA => Some(Player::A),
            Owner::PlayerB => Some(Player::B),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Owner::Empty
    }
}

impl From<Player> for Owner {
    fn from(player: Player) -> Self {
        match player {
            Player::A => Owner::PlayerA,
            Player::B => Owner::PlayerB,
        }
    }
}

// ============================================================================
// BOARD SIZE
// ============================================================================

/// Extent of the playable region: every hex with `0 <= q < height` and
/// `0 <= r < width`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BoardSize {
    width: i32,
    height: i32,
}

impl BoardSize {
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(EngineError::InvalidBoardSize { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of playable hexes
    pub fn capacity(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every playable hex, ordered by q then r
    pub fn hexes(self) -> impl Iterator<Item = Hex> {
        (0..self.height).flat_map(move |q| (0..self.width).map(move |r| Hex::new(q, r)))
    }

    /// Starting pieces, in placement order
    fn seeds(&self) -> [(Hex, Player); 4] {
        let last_q = self.height - 1;
        let last_r = self.width - 1;
        [
            (Hex::new(0, 0), Player::A),
            (Hex::new(last_q, last_r), Player::A),
            (Hex::new(0, last_r), Player::B),
            (Hex::new(last_q, 0), Player::B),
        ]
    }
}

// ============================================================================
// SCORES
// ============================================================================

/// Pieces held by each player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScoreCounts {
    pub a: usize,
    pub b: usize,
}

impl ScoreCounts {
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::A => self.a,
            Player::B => self.b,
        }
    }

    pub fn total(&self) -> usize {
        self.a + self.b
    }

    /// Player with strictly more pieces, None when level
    pub fn leader(&self) -> Option<Player> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(Player::A),
            std::cmp::Ordering::Less => Some(Player::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Board (clone to mutate): exactly one entry per playable hex
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: FxHashMap<Hex, Owner>,
}

impl Board {
    /// Board with every playable hex empty
    pub fn empty(size: BoardSize) -> Self {
        let cells = size.hexes().map(|hex| (hex, Owner::Empty)).collect();
        Self { size, cells }
    }

    /// Standard opening position: two opposite corners per player
    ///
    /// On a board one hex wide or tall the corners coincide and the later
    /// seed (player B) wins the shared hex.
    pub fn initialize(size: BoardSize) -> Self {
        let mut board = Self::empty(size);
        for (hex, player) in size.seeds() {
            board.cells.insert(hex, player.into());
        }
        board
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Owner of a hex, `OutOfBounds` if it is not on the board
    pub fn get(&self, hex: Hex) -> Result<Owner> {
        self.cells
            .get(&hex)
            .copied()
            .ok_or(EngineError::OutOfBounds { hex })
    }

    /// Owner of a hex, None when it is off the board
    pub(crate) fn owner(&self, hex: Hex) -> Option<Owner> {
        self.cells.get(&hex).copied()
    }

    /// Mutable cell, None when `hex` is off the board
    pub(crate) fn cell_mut(&mut self, hex: Hex) -> Option<&mut Owner> {
        self.cells.get_mut(&hex)
    }

    /// Return a new board with `hex` set to `owner`
    pub fn set(&self, hex: Hex, owner: Owner) -> Result<Self> {
        let mut board = self.clone();
        board.put(hex, owner)?;
        Ok(board)
    }

    /// In-place write, only for boards not yet shared
    pub(crate) fn put(&mut self, hex: Hex, owner: Owner) -> Result<()> {
        match self.cell_mut(hex) {
            Some(cell) => {
                *cell = owner;
                Ok(())
            }
            None => Err(EngineError::OutOfBounds { hex }),
        }
    }

    pub fn score_counts(&self) -> ScoreCounts {
        self.cells
            .values()
            .fold(ScoreCounts::default(), |mut counts, owner| {
                match owner {
                    Owner::PlayerA => counts.a += 1,
                    Owner::PlayerB => counts.b += 1,
                    Owner::Empty => {}
                }
                counts
            })
    }

    pub fn empty_count(&self) -> usize {
        self.cells.values().filter(|owner| owner.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Snapshot of every cell, ordered by q then r
    pub fn cells(&self) -> Vec<(Hex, Owner)> {
        let mut cells: Vec<_> = self.cells.iter().map(|(&hex, &owner)| (hex, owner)).collect();
        cells.sort_unstable_by_key(|&(hex, _)| hex);
        cells
    }

    /// Hexes owned by `player`, ordered by q then r
    pub fn pieces(&self, player: Player) -> Vec<Hex> {
        let owner = Owner::from(player);
        let mut pieces: Vec<_> = self
            .cells
            .iter()
            .filter(|&(_, &cell)| cell == owner)
            .map(|(&hex, _)| hex)
            .collect();
        pieces.sort_unstable();
        pieces
    }
}
