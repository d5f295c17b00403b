use std::time::{Duration, Instant};

use crate::game::{successors, GameState, Player};

use super::agent::Agent;

/// Search value sentinel, well outside the heuristic's reachable range.
const INF: i32 = 1_000_000;

/// Depth of the first iterative-deepening pass. Every decision completes at
/// least one full search at this depth, whatever the time budget.
pub const MIN_DEPTH: u32 = 4;

/// Depth-limited minimax with alpha-beta pruning over complete turns.
/// South maximizes and North minimizes; the player to move is read from the
/// state. At depth zero or in a finished state the board heuristic is
/// returned as-is.
pub fn alpha_beta(state: &GameState, depth: u32, mut alpha: i32, mut beta: i32) -> i32 {
    if depth == 0 || state.is_terminal() {
        return state.board().heuristic();
    }

    match state.current_player() {
        Player::South => {
            let mut value = -INF;
            for succ in successors(state) {
                value = value.max(alpha_beta(&succ.state, depth - 1, alpha, beta));
                alpha = alpha.max(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
        Player::North => {
            let mut value = INF;
            for succ in successors(state) {
                value = value.min(alpha_beta(&succ.state, depth - 1, alpha, beta));
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}

/// Pick the best first pit for the player to move, searching every complete
/// turn to `depth` more plies (the root ply itself is not counted). Ties go
/// to the earliest successor in enumeration order. Only the first pit of
/// the winning turn is returned; after an extra turn the caller asks again.
pub fn decide_move(state: &GameState, depth: u32) -> usize {
    let succ = successors(state);
    if succ.is_empty() {
        // Every legal move earns an extra turn while emptying the mover's
        // side, so no chain survives enumeration. Any of those moves ends
        // the game at once; take the first.
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "No legal moves available");
        return moves[0];
    }

    let mut best_pit = succ[0].actions[0];

    match state.current_player() {
        Player::South => {
            let mut best_value = -INF;
            for s in &succ {
                let value = alpha_beta(&s.state, depth, -INF, INF);
                if value > best_value {
                    best_value = value;
                    best_pit = s.actions[0];
                }
            }
        }
        Player::North => {
            let mut best_value = INF;
            for s in &succ {
                let value = alpha_beta(&s.state, depth, -INF, INF);
                if value < best_value {
                    best_value = value;
                    best_pit = s.actions[0];
                }
            }
        }
    }

    best_pit
}

/// Iterative-deepening driver around [`decide_move`] with a wall-clock
/// budget.
pub struct MinimaxAgent {
    budget: Duration,
    min_depth: u32,
}

impl MinimaxAgent {
    pub fn new(budget: Duration) -> Self {
        MinimaxAgent {
            budget,
            min_depth: MIN_DEPTH,
        }
    }

    pub fn with_min_depth(budget: Duration, min_depth: u32) -> Self {
        MinimaxAgent { budget, min_depth }
    }

    /// Search at increasing depth until the wall clock passes the budget.
    /// The clock is only checked between completed searches, so the last
    /// iteration may overshoot; its deeper answer still wins. A search at
    /// the minimum depth always runs, even on a zero budget.
    fn best_pit(&self, state: &GameState) -> usize {
        let start = Instant::now();
        let mut depth = self.min_depth;
        let mut best = decide_move(state, depth);

        while start.elapsed() < self.budget {
            depth += 1;
            best = decide_move(state, depth);
        }

        best
    }
}

impl Agent for MinimaxAgent {
    fn select_pit(&mut self, state: &GameState) -> usize {
        self.best_pit(state)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
