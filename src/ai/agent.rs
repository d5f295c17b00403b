use crate::game::GameState;

/// Interface shared by every computer opponent.
pub trait Agent {
    /// Select a pit to sow for the player to move. The state is expected to
    /// be unfinished with at least one non-empty pit.
    fn select_pit(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
