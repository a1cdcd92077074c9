use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::game::{GameState, Position};
use crate::metrics::GameMetrics;

/// Terminal columns used to draw one board cell
const CELL_WIDTH: u16 = 2;
const FILLED: &str = "██";

pub struct Renderer {
    show_grid: bool,
}

impl Renderer {
    pub fn new() -> Self {
        Self { show_grid: false }
    }

    /// Draw a faint dot on every empty cell
    pub fn with_grid_lines(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = centered(
            chunks[1],
            state.config.columns() as u16 * CELL_WIDTH + 2,
            state.config.rows() as u16 + 2,
        );
        frame.render_widget(self.render_board(state), board_area);

        // The board stays visible underneath the overlay
        if state.is_game_over() {
            let overlay_area = centered(chunks[1], 30, 5);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(self.render_game_over(state), overlay_area);
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_board(&self, state: &GameState) -> Paragraph<'_> {
        let tile = state.config.tile_size as i32;
        let mut lines = Vec::new();

        for row in 0..state.config.rows() as i32 {
            let mut spans = Vec::new();

            for column in 0..state.config.columns() as i32 {
                let pos = Position::new(column * tile, row * tile);

                let cell = if pos == state.snake.head {
                    Span::styled(
                        FILLED,
                        Style::default()
                            .fg(Color::LightGreen)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.collides_with_body(pos) {
                    Span::styled(FILLED, Style::default().fg(Color::Green))
                } else if pos == state.food {
                    Span::styled(FILLED, Style::default().fg(Color::Red))
                } else if self.show_grid {
                    Span::styled("· ", Style::default().fg(Color::DarkGray))
                } else {
                    Span::raw("  ")
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake Game "),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::White)),
            Span::styled(
                state.score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Rounds: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.rounds_played.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState) -> Paragraph<'_> {
        let text = vec![
            Line::from(vec![Span::styled(
                "Game Over!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(format!("Score: {}", state.score())),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Space",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Space", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig};
    use ratatui::{Terminal, backend::TestBackend};

    fn small_state() -> GameState {
        let mut state = GameState::with_seed(GameConfig::new(250, 250, 25).unwrap(), 9);
        state.food = Position::new(0, 0);
        state
    }

    fn draw(renderer: &Renderer, state: &GameState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| renderer.render(frame, state, &GameMetrics::new()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect()
    }

    fn count(lines: &[String], needle: &str) -> usize {
        lines.iter().map(|line| line.matches(needle).count()).sum()
    }

    #[test]
    fn test_draws_score_and_cells() {
        let lines = draw(&Renderer::new(), &small_state());

        assert!(lines.iter().any(|line| line.contains("Score: 0")));
        assert!(lines.iter().any(|line| line.contains("Snake Game")));
        // head and food, two columns each
        assert_eq!(count(&lines, "█"), 4);
        assert!(!lines.iter().any(|line| line.contains("Game Over!")));
    }

    #[test]
    fn test_draws_body_segments() {
        let mut state = small_state();
        state.snake.body = vec![Position::new(100, 125), Position::new(75, 125)];

        let lines = draw(&Renderer::new(), &state);

        assert!(lines.iter().any(|line| line.contains("Score: 2")));
        assert_eq!(count(&lines, "█"), 8);
    }

    #[test]
    fn test_grid_lines_toggle() {
        let state = small_state();

        let plain = draw(&Renderer::new(), &state);
        let gridded = draw(&Renderer::new().with_grid_lines(true), &state);

        assert_eq!(count(&plain, "·"), 0);
        assert_eq!(count(&gridded, "·"), 98);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut state = small_state();
        state.snake.head = Position::new(225, 100);
        state.set_direction(Direction::Right);
        state.advance();
        assert!(state.is_game_over());

        let lines = draw(&Renderer::new(), &state);

        assert!(lines.iter().any(|line| line.contains("Game Over!")));
        assert!(lines.iter().any(|line| line.contains("to play again")));
    }

    #[test]
    fn test_widest_board_is_clipped_to_the_screen() {
        let config = GameConfig::new(crate::game::config::MAX_COLUMNS, 1, 1).unwrap();
        let state = GameState::with_seed(config, 5);

        let lines = draw(&Renderer::new(), &state);

        assert!(lines.iter().any(|line| line.contains("Score: 0")));
        assert!(lines.iter().any(|line| line.contains("Snake Game")));
    }

    #[test]
    fn test_centered_shrinks_to_fit() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(centered(area, 4, 2), Rect::new(3, 1, 4, 2));
        assert_eq!(centered(area, 40, 20), area);
    }
}
