use super::{GameState, PITS};

/// One complete turn for the player to move: the state handed to the
/// opponent and the pits sown to reach it, in order.
#[derive(Debug, Clone)]
pub struct Successor {
    pub state: GameState,
    pub actions: Vec<usize>,
}

/// Enumerate every complete turn available to the player to move.
///
/// Pits are tried in ascending order. A move that earns an extra turn is
/// expanded recursively for the same player and the chain's results are
/// spliced in at the position of the originating pit, so the list stays
/// flat and its order is the tie-break order for the search. A chain whose
/// extra-turn move empties the mover's side has no continuation and
/// contributes no successor at all.
pub fn successors(state: &GameState) -> Vec<Successor> {
    collect(state, &[])
}

fn collect(state: &GameState, actions_so_far: &[usize]) -> Vec<Successor> {
    let player = state.current_player();
    let mut results = Vec::new();

    for pit in 0..PITS {
        if state.board().pit(player, pit) == 0 {
            continue;
        }
        // Only non-empty own pits are proposed, so the apply cannot fail.
        let next = state.apply_move(pit).unwrap();
        let mut actions = actions_so_far.to_vec();
        actions.push(pit);

        if next.current_player() == player {
            results.extend(collect(&next, &actions));
        } else {
            results.push(Successor {
                state: next,
                actions,
            });
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player};

    #[test]
    fn test_initial_position_flattens_the_extra_turn_chain() {
        // Only pit 2 earns an extra turn from the start; its chain is
        // spliced in between pits 1 and 3
        let succ = successors(&GameState::initial());
        let sequences: Vec<Vec<usize>> = succ.iter().map(|s| s.actions.clone()).collect();
        assert_eq!(
            sequences,
            vec![
                vec![0],
                vec![1],
                vec![2, 0],
                vec![2, 1],
                vec![2, 3],
                vec![2, 4],
                vec![2, 5],
                vec![3],
                vec![4],
                vec![5],
            ]
        );
    }

    #[test]
    fn test_chain_states_match_sequential_application() {
        let state = GameState::initial();
        let succ = successors(&state);
        assert_eq!(succ[2].actions, vec![2, 0]);
        let replayed = state.apply_move(2).unwrap().apply_move(0).unwrap();
        assert_eq!(succ[2].state, replayed);
    }

    #[test]
    fn test_every_successor_hands_the_turn_over() {
        for succ in successors(&GameState::initial()) {
            assert_eq!(succ.state.current_player(), Player::North);
        }
    }

    #[test]
    fn test_game_ending_extra_turn_chain_is_dropped() {
        // South's only move earns an extra turn but empties its side, so
        // the chain never reaches a state to hand over: no successor
        let board = Board::from_parts([[0, 0, 0, 0, 0, 1], [2, 2, 2, 2, 2, 2]], [20, 15]);
        let state = GameState::from_board(board, Player::South);
        assert!(!state.is_terminal());
        assert!(successors(&state).is_empty());
    }

    #[test]
    fn test_non_ending_extra_turn_still_expands() {
        // Pit 5 earns an extra turn and pit 0 remains to continue the chain
        let board = Board::from_parts([[1, 0, 0, 0, 0, 1], [2, 2, 2, 2, 2, 2]], [19, 15]);
        let state = GameState::from_board(board, Player::South);
        let sequences: Vec<Vec<usize>> = successors(&state)
            .iter()
            .map(|s| s.actions.clone())
            .collect();
        assert_eq!(sequences, vec![vec![0], vec![5, 0]]);
    }

    #[test]
    fn test_finished_game_has_no_successors() {
        let board = Board::from_parts([[0; 6], [1, 0, 0, 0, 0, 0]], [30, 17]);
        let state = GameState::from_board(board, Player::North);
        assert!(successors(&state).is_empty());
    }
}
