//! Terminal UI: the difficulty menu and the interactive game view.

mod app;
mod game_view;

pub use app::App;
