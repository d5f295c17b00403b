use crate::config::{Difficulty, SearchConfig};
use crate::game::{Board, GameState, Player, PITS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_pit: usize,
    message: &Option<String>,
    difficulty: Difficulty,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, difficulty, chunks[0]);
    render_board(frame, game_state.board(), selected_pit, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Difficulty selection screen shown before a game starts.
pub fn render_menu(frame: &mut Frame, config: &SearchConfig) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select Difficulty",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for difficulty in Difficulty::ALL {
        lines.push(Line::from(format!(
            "{}: {:<6} ({} ms per AI move)",
            difficulty.level(),
            difficulty.name(),
            difficulty.time_budget(config).as_millis()
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 1, 2 or 3 to start  |  Q: Quit",
        Style::default().fg(Color::DarkGray),
    )));

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mancala"));

    frame.render_widget(menu, frame.area());
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    difficulty: Difficulty,
    area: ratatui::layout::Rect,
) {
    let (status, color) = if game_state.is_terminal() {
        ("Game Over".to_string(), Color::Cyan)
    } else {
        match game_state.current_player() {
            Player::South => ("Your turn (South)".to_string(), Color::Yellow),
            Player::North => ("AI's turn (North)".to_string(), Color::Red),
        }
    };

    let header = Paragraph::new(format!("{status}  |  Difficulty: {}", difficulty.name()))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Mancala"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_pit: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // North's pits run right to left on the top row, so every pit shares a
    // column with its capture mirror in South's row. The stores sit on the
    // outer sides: North's on the left, South's on the right.
    let mut top = vec![
        Span::raw("  ║"),
        store_span(board, Player::North),
        Span::raw("│"),
    ];
    for display in 0..PITS {
        let pit = PITS - 1 - display;
        top.push(seed_span(board.pit(Player::North, pit), Color::Red));
    }
    top.push(Span::raw("│"));
    top.push(Span::raw("     ")); // Pad opposite North's store
    top.push(Span::raw("║"));

    let mut bottom = vec![
        Span::raw("  ║"),
        Span::raw("     "), // Pad opposite South's store
        Span::raw("│"),
    ];
    for pit in 0..PITS {
        bottom.push(seed_span(board.pit(Player::South, pit), Color::Yellow));
    }
    bottom.push(Span::raw("│"));
    bottom.push(store_span(board, Player::South));
    bottom.push(Span::raw("║"));

    lines.push(Line::from(""));
    lines.push(Line::from("  ╔══════════════════════════════════════════╗"));
    lines.push(Line::from(top));
    lines.push(Line::from(bottom));
    lines.push(Line::from("  ╚══════════════════════════════════════════╝"));

    // Pit labels 1-6 under South's row, aligned with the pit cells
    let mut label_line = vec![Span::raw("         ")]; // Padding to match "  ║" + 5-char cell + "│"
    for pit in 0..PITS {
        if pit == selected_pit {
            label_line.push(Span::styled(
                format!("  {}  ", pit + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            label_line.push(Span::raw(format!("  {}  ", pit + 1)));
        }
    }
    label_line.push(Span::raw("       ")); // Suffix padding to match "│" + store + "║"
    lines.push(Line::from(label_line));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("         ")];
    for pit in 0..PITS {
        if pit == selected_pit {
            indicator_line.push(Span::styled("  ▲  ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("     "));
        }
    }
    indicator_line.push(Span::raw("       "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn seed_span(seeds: u8, color: Color) -> Span<'static> {
    Span::styled(format!(" {seeds:>2}  "), Style::default().fg(color))
}

fn store_span(board: &Board, player: Player) -> Span<'static> {
    let color = match player {
        Player::South => Color::Yellow,
        Player::North => Color::Red,
    };
    Span::styled(
        format!(" {:>2}  ", board.store(player)),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line1 = Line::from("←/→: Select Pit  |  Enter or 1-6: Sow  |  R: New Game  |  Q: Quit");
    let line2 = Line::from(Span::styled(
        "Land your last seed in your store to earn an extra turn",
        Style::default().fg(Color::DarkGray),
    ));

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
