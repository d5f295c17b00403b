mod agent;
mod minimax;
mod random;

pub use agent::Agent;
pub use minimax::{alpha_beta, decide_move, MinimaxAgent, MIN_DEPTH};
pub use random::RandomAgent;
