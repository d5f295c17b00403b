use crate::ai::{Agent, MinimaxAgent};
use crate::config::{AppConfig, Difficulty};
use crate::game::{GameOutcome, GameState, MoveError, Player, PITS};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Which screen the app is showing.
enum Screen {
    DifficultyMenu,
    Playing,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    game_state: GameState,
    selected_pit: usize,
    difficulty: Difficulty,
    ai: Option<Box<dyn Agent>>,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Create the app on the difficulty menu, or mid-game when a
    /// difficulty was already chosen on the command line.
    pub fn new(config: AppConfig, difficulty: Option<Difficulty>) -> Self {
        let mut app = App {
            config,
            screen: Screen::DifficultyMenu,
            game_state: GameState::initial(),
            selected_pit: 0,
            difficulty: Difficulty::Easy,
            ai: None,
            should_quit: false,
            message: None,
        };
        if let Some(difficulty) = difficulty {
            app.start_game(difficulty);
        }
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::DifficultyMenu => self.handle_menu_key(key),
            Screen::Playing => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
                let level = c.to_digit(10).and_then(|d| Difficulty::from_level(d as u8));
                if let Some(difficulty) = level {
                    self.start_game(difficulty);
                }
            }
            _ => {}
        }
    }

    /// Handle key press on the game screen
    fn handle_game_key(&mut self, key: KeyEvent) {
        // Clear transient messages, but keep the final score up once the
        // game is over
        if !self.game_state.is_terminal() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_pit > 0 {
                    self.selected_pit -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_pit < PITS - 1 {
                    self.selected_pit += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.sow_selected();
            }
            KeyCode::Char('r') => {
                // Back to the menu for a fresh game
                self.screen = Screen::DifficultyMenu;
                self.ai = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits sow directly using the 1-indexed pit labels
                let pit = c.to_digit(10).and_then(|d| d.checked_sub(1));
                if let Some(pit) = pit {
                    if (pit as usize) < PITS {
                        self.selected_pit = pit as usize;
                        self.sow_selected();
                    }
                }
            }
            _ => {}
        }
    }

    /// Start a fresh game against the AI at the chosen difficulty
    fn start_game(&mut self, difficulty: Difficulty) {
        let budget = difficulty.time_budget(&self.config.search);
        self.difficulty = difficulty;
        self.ai = Some(Box::new(MinimaxAgent::with_min_depth(
            budget,
            self.config.search.min_depth,
        )));
        self.game_state = GameState::initial();
        self.selected_pit = 0;
        self.message = Some(format!(
            "You are South. {} AI takes {} ms per move.",
            difficulty.name(),
            budget.as_millis()
        ));
        self.screen = Screen::Playing;
    }

    /// Sow the selected pit for the human, then let the AI answer
    fn sow_selected(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_pit) {
            Ok(()) => {}
            Err(MoveError::OutOfRange) => {
                self.message = Some("Choose a pit between 1 and 6.".to_string());
                return;
            }
            Err(MoveError::EmptyPit) => {
                self.message = Some(format!(
                    "Pit {} has no seeds. Choose a pit with seeds in it!",
                    self.selected_pit + 1
                ));
                return;
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
                return;
            }
        }

        if self.game_state.is_terminal() {
            self.report_outcome();
            return;
        }

        if self.game_state.current_player() == Player::South {
            self.message = Some("Extra turn! Sow again.".to_string());
            return;
        }

        self.ai_turn();
    }

    /// Let the AI sow, re-querying it for every extra turn it earns
    fn ai_turn(&mut self) {
        let Some(ai) = self.ai.as_mut() else {
            return;
        };

        let mut sown: Vec<String> = Vec::new();
        while !self.game_state.is_terminal()
            && self.game_state.current_player() == Player::North
        {
            let pit = ai.select_pit(&self.game_state);
            self.game_state
                .apply_move_mut(pit)
                .expect("search proposed an illegal pit");
            sown.push((pit + 1).to_string());
        }

        if self.game_state.is_terminal() {
            self.report_outcome();
        } else {
            let pits = sown.join(", ");
            self.message = Some(if sown.len() == 1 {
                format!("AI sowed pit {pits}. Your turn.")
            } else {
                format!("AI sowed pits {pits} (extra turns). Your turn.")
            });
        }
    }

    /// Announce the final score once the remaining seeds are swept
    fn report_outcome(&mut self) {
        let south = self.game_state.board().store(Player::South);
        let north = self.game_state.board().store(Player::North);
        let verdict = match self.game_state.outcome() {
            Some(GameOutcome::Winner(Player::South)) => "You won the game!",
            Some(GameOutcome::Winner(Player::North)) => "You lost the game!",
            Some(GameOutcome::Draw) => "The game was a draw!",
            None => return,
        };
        self.message = Some(format!(
            "{verdict} You: {south}, AI: {north}. Press 'r' for a new game."
        ));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.screen {
            Screen::DifficultyMenu => super::game_view::render_menu(frame, &self.config.search),
            Screen::Playing => super::game_view::render(
                frame,
                &self.game_state,
                self.selected_pit,
                &self.message,
                self.difficulty,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;

    fn finished_app() -> App {
        let mut app = App::new(AppConfig::default(), Some(Difficulty::Easy));
        let board = Board::from_parts([[0; 6], [1, 0, 0, 0, 0, 0]], [30, 17]);
        app.game_state = GameState::from_board(board, Player::South);
        app.report_outcome();
        app
    }

    #[test]
    fn test_outcome_message_survives_key_presses() {
        let mut app = finished_app();
        let report = app.message.clone();
        assert!(report.as_deref().unwrap_or("").contains("You won"));

        app.handle_game_key(KeyEvent::from(KeyCode::Left));
        assert_eq!(app.message, report);
        app.handle_game_key(KeyEvent::from(KeyCode::Right));
        assert_eq!(app.message, report);
    }

    #[test]
    fn test_transient_messages_clear_mid_game() {
        let mut app = App::new(AppConfig::default(), Some(Difficulty::Easy));
        app.message = Some("Extra turn! Sow again.".to_string());
        app.handle_game_key(KeyEvent::from(KeyCode::Left));
        assert_eq!(app.message, None);
    }
}
