use super::{board, Board, Player, PITS};

/// The outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Errors that can occur when applying a move to a game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The pit index is not on the board.
    OutOfRange,
    /// The pit holds no seeds.
    EmptyPit,
    /// The game is already over.
    GameOver,
}

/// Complete game state: board, player to move, and outcome when finished.
///
/// A terminal state always holds the post-sweep board, so the stores carry
/// the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create the initial game state. South moves first.
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::South,
            outcome: None,
        }
    }

    /// Build a state from an arbitrary board position. A position that is
    /// already finished is swept and scored immediately.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut board = board;
        let outcome = if board.is_terminal() {
            board.sweep_remaining();
            Some(score_board(&board))
        } else {
            None
        };
        GameState {
            board,
            current_player: to_move,
            outcome,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pits the player to move may sow, in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..PITS)
            .filter(|&pit| self.board.pit(self.current_player, pit) > 0)
            .collect()
    }

    /// Sow a pit for the player to move and return the resulting state.
    /// The turn passes to the opponent unless the move earned an extra
    /// turn; a move that empties either side ends the game and sweeps the
    /// remaining seeds.
    pub fn apply_move(&self, pit: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut new_board = self.board;
        let extra_turn = new_board
            .apply_move(self.current_player, pit)
            .map_err(|e| match e {
                board::MoveError::OutOfRange => MoveError::OutOfRange,
                board::MoveError::EmptyPit => MoveError::EmptyPit,
            })?;

        let outcome = if new_board.is_terminal() {
            new_board.sweep_remaining();
            Some(score_board(&new_board))
        } else {
            None
        };

        let next_player = if extra_turn {
            self.current_player
        } else {
            self.current_player.other()
        };

        Ok(GameState {
            board: new_board,
            current_player: next_player,
            outcome,
        })
    }

    /// Apply a move in place
    pub fn apply_move_mut(&mut self, pit: usize) -> Result<(), MoveError> {
        *self = self.apply_move(pit)?;
        Ok(())
    }
}

/// Final score of a swept board: the higher store wins.
fn score_board(board: &Board) -> GameOutcome {
    let south = board.store(Player::South);
    let north = board.store(Player::North);
    if south > north {
        GameOutcome::Winner(Player::South)
    } else if north > south {
        GameOutcome::Winner(Player::North)
    } else {
        GameOutcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TOTAL_SEEDS;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::South);
        assert!(!state.is_terminal());
        assert_eq!(state.outcome(), None);
        assert_eq!(state.legal_moves(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_apply_move_passes_the_turn() {
        let state = GameState::initial();
        let next = state.apply_move(0).unwrap();
        assert_eq!(next.current_player(), Player::North);
        assert_eq!(next.board().pits(Player::South), [0, 5, 5, 5, 5, 4]);
        assert!(!next.is_terminal());
    }

    #[test]
    fn test_extra_turn_keeps_the_player() {
        let state = GameState::initial();
        let next = state.apply_move(2).unwrap();
        assert_eq!(next.current_player(), Player::South);
        assert_eq!(next.board().store(Player::South), 1);
    }

    #[test]
    fn test_legal_moves_skip_empty_pits() {
        let board = Board::from_parts([[4, 4, 4, 4, 4, 4], [3, 0, 5, 0, 8, 4]], [4, 0]);
        let state = GameState::from_board(board, Player::North);
        assert_eq!(state.legal_moves(), vec![0, 2, 4, 5]);
    }

    #[test]
    fn test_illegal_moves_are_rejected() {
        let state = GameState::initial();
        assert_eq!(state.apply_move(6), Err(MoveError::OutOfRange));
        let next = state.apply_move(0).unwrap().apply_move(0).unwrap();
        assert_eq!(next.current_player(), Player::South);
        assert_eq!(next.apply_move(0), Err(MoveError::EmptyPit));
    }

    #[test]
    fn test_moves_after_the_end_are_rejected() {
        let board = Board::from_parts([[0; 6], [1, 0, 0, 0, 0, 0]], [30, 17]);
        let state = GameState::from_board(board, Player::South);
        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::South)));
        assert_eq!(state.apply_move(0), Err(MoveError::GameOver));
        assert!(state.legal_moves().is_empty());
    }

    #[test]
    fn test_terminal_move_sweeps_and_scores() {
        // South's last seed reaches the store. The extra turn is moot: the
        // side is empty, so the game ends and North banks its pits.
        let board = Board::from_parts([[0, 0, 0, 0, 0, 1], [2, 2, 2, 2, 2, 2]], [20, 15]);
        let state = GameState::from_board(board, Player::South);
        let end = state.apply_move(5).unwrap();
        assert!(end.is_terminal());
        assert_eq!(end.board().store(Player::South), 21);
        assert_eq!(end.board().store(Player::North), 27);
        assert_eq!(end.board().pits(Player::North), [0; 6]);
        assert_eq!(end.outcome(), Some(GameOutcome::Winner(Player::North)));
    }

    #[test]
    fn test_equal_stores_are_a_draw() {
        let board = Board::from_parts([[0, 0, 0, 0, 0, 1], [0, 0, 0, 0, 0, 3]], [23, 21]);
        let state = GameState::from_board(board, Player::South);
        let end = state.apply_move(5).unwrap();
        assert_eq!(end.board().store(Player::South), 24);
        assert_eq!(end.board().store(Player::North), 24);
        assert_eq!(end.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_from_board_sweeps_finished_positions() {
        let board = Board::from_parts([[3, 0, 0, 0, 0, 0], [0; 6]], [15, 30]);
        let state = GameState::from_board(board, Player::North);
        assert!(state.is_terminal());
        assert_eq!(state.board().store(Player::South), 18);
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::North)));
    }

    #[test]
    fn test_seeds_are_conserved_over_a_full_game() {
        // Deterministic playout: always sow the first legal pit
        let mut state = GameState::initial();
        let mut turns = 0;
        while !state.is_terminal() {
            let pit = state.legal_moves()[0];
            state = state.apply_move(pit).unwrap();
            assert_eq!(state.board().total_seeds(), TOTAL_SEEDS);
            turns += 1;
            assert!(turns < 1000, "game did not terminate");
        }
        assert!(state.outcome().is_some());
    }
}
