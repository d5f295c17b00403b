use super::player::Player;

/// Number of sowable pits on each side of the board.
pub const PITS: usize = 6;
/// Seeds in every pit at the start of a game.
pub const SEEDS_PER_PIT: u8 = 4;
/// Seeds on the board over the whole game.
pub const TOTAL_SEEDS: u32 = 2 * PITS as u32 * SEEDS_PER_PIT as u32;

/// Ring positions walked while sowing: the mover's six pits, the mover's
/// store, the opponent's six pits, the opponent's store.
const RING: usize = 2 * PITS + 2;

/// Errors that can occur when sowing a pit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The pit index is not on the board.
    OutOfRange,
    /// The pit holds no seeds.
    EmptyPit,
}

/// The Mancala board: six pits per side plus one store per side.
///
/// `pits[0]` and `stores[0]` belong to South, `pits[1]` and `stores[1]` to
/// North. Pit 0 is the leftmost pit from its owner's seat; sowing proceeds
/// counter-clockwise toward the owner's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pits: [[u8; PITS]; 2],
    stores: [u8; 2],
}

impl Board {
    /// Create a board in the starting position: four seeds in every pit
    pub fn new() -> Self {
        Board {
            pits: [[SEEDS_PER_PIT; PITS]; 2],
            stores: [0; 2],
        }
    }

    /// Build a board from explicit pit and store counts, for setting up
    /// positions in tests and analysis
    pub fn from_parts(pits: [[u8; PITS]; 2], stores: [u8; 2]) -> Self {
        Board { pits, stores }
    }

    /// Get the seed count in one of `player`'s pits
    pub fn pit(&self, player: Player, pit: usize) -> u8 {
        self.pits[player.index()][pit]
    }

    /// All of `player`'s pit counts, in pit order
    pub fn pits(&self, player: Player) -> [u8; PITS] {
        self.pits[player.index()]
    }

    /// Get the seed count in `player`'s store
    pub fn store(&self, player: Player) -> u8 {
        self.stores[player.index()]
    }

    /// Total seeds in pits and stores; conserved by every move
    pub fn total_seeds(&self) -> u32 {
        let pits: u32 = self.pits.iter().flatten().map(|&s| u32::from(s)).sum();
        let stores: u32 = self.stores.iter().map(|&s| u32::from(s)).sum();
        pits + stores
    }

    /// Check whether `player` may sow from `pit`, with the reason when not
    pub fn validate_move(&self, player: Player, pit: usize) -> Result<(), MoveError> {
        if pit >= PITS {
            return Err(MoveError::OutOfRange);
        }
        if self.pits[player.index()][pit] == 0 {
            return Err(MoveError::EmptyPit);
        }
        Ok(())
    }

    /// Check if a pit can be sown by `player`
    pub fn is_legal_move(&self, player: Player, pit: usize) -> bool {
        self.validate_move(player, pit).is_ok()
    }

    /// Sow all seeds from one of `player`'s pits counter-clockwise around
    /// the ring, then apply the capture rule at the landing position.
    /// Returns true when the last seed landed in the mover's own store,
    /// which grants an extra turn.
    pub fn apply_move(&mut self, player: Player, pit: usize) -> Result<bool, MoveError> {
        self.validate_move(player, pit)?;

        let side = player.index();
        let mut seeds = self.pits[side][pit];
        self.pits[side][pit] = 0;

        let mut pos = pit;
        while seeds > 0 {
            pos = (pos + 1) % RING;
            if self.drop_seed(side, pos) {
                seeds -= 1;
            }
        }

        Ok(self.resolve_landing(player, pos))
    }

    /// Deposit one seed at a ring position relative to `side`. Returns
    /// false for the opponent's store, which is passed over without
    /// consuming a seed.
    fn drop_seed(&mut self, side: usize, pos: usize) -> bool {
        if pos < PITS {
            self.pits[side][pos] += 1;
            true
        } else if pos == PITS {
            self.stores[side] += 1;
            true
        } else if pos < RING - 1 {
            self.pits[1 - side][pos - PITS - 1] += 1;
            true
        } else {
            false
        }
    }

    /// Apply the capture rule at the landing position and report whether
    /// the mover earned an extra turn.
    fn resolve_landing(&mut self, player: Player, pos: usize) -> bool {
        let side = player.index();
        if pos < PITS && self.pits[side][pos] == 1 {
            // The last seed fell into an own pit that was empty: the
            // opponent's mirror pit is captured into the landing pit.
            let mirror = PITS - 1 - pos;
            let captured = self.pits[1 - side][mirror];
            self.pits[1 - side][mirror] = 0;
            self.pits[side][pos] += captured;
            return false;
        }
        pos == PITS
    }

    /// True if all of `player`'s pits are empty
    pub fn side_empty(&self, player: Player) -> bool {
        self.pits[player.index()].iter().all(|&seeds| seeds == 0)
    }

    /// True once either player's six pits are all empty
    pub fn is_terminal(&self) -> bool {
        self.side_empty(Player::South) || self.side_empty(Player::North)
    }

    /// End-of-game cleanup: bank the remaining seeds of the non-empty side
    /// into that side's store. Returns whether the game has ended. A second
    /// call on a finished board changes nothing.
    pub fn sweep_remaining(&mut self) -> bool {
        if !self.is_terminal() {
            return false;
        }
        let side = if self.side_empty(Player::South) {
            Player::North.index()
        } else {
            Player::South.index()
        };
        let remaining: u8 = self.pits[side].iter().sum();
        self.stores[side] += remaining;
        self.pits[side] = [0; PITS];
        true
    }

    /// Positional evaluation: store difference plus pit difference, from
    /// South's point of view. Positive favors South.
    pub fn heuristic(&self) -> i32 {
        let stores = i32::from(self.stores[0]) - i32::from(self.stores[1]);
        let pits: i32 = (0..PITS)
            .map(|i| i32::from(self.pits[0][i]) - i32::from(self.pits[1][i]))
            .sum();
        stores + pits
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
