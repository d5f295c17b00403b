#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    South,
    North,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    /// Side index into the board arrays (South = 0, North = 1)
    pub fn index(self) -> usize {
        match self {
            Player::South => 0,
            Player::North => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::South => "South",
            Player::North => "North",
        }
    }
}
