use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::game::{GameConfig, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// One simulation step every 100ms
const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Roughly 30 FPS
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

pub struct HumanMode {
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let state = match seed {
            Some(seed) => GameState::with_seed(config, seed),
            None => GameState::new(config),
        };

        Self {
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub fn with_grid_lines(mut self, show_grid: bool) -> Self {
        self.renderer = self.renderer.with_grid_lines(show_grid);
        self
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            width = self.state.config.board_width,
            height = self.state.config.board_height,
            tile = self.state.config.tile_size,
            "Session started"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            rounds = self.metrics.rounds_played,
            best = self.metrics.best_score,
            "Session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(TICK_INTERVAL);
        let mut render_timer = interval(RENDER_INTERVAL);

        // Input, ticks and frames are serialized through this one select loop
        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Only process key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                if !self.state.set_direction(direction) && !self.state.is_game_over() {
                    debug!(?direction, heading = ?self.state.heading, "Reversal ignored");
                }
            }
            KeyAction::Reset => {
                if self.state.is_game_over() {
                    self.reset_game();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn update_game(&mut self) {
        if self.state.is_game_over() {
            return;
        }

        let outcome = self.state.advance();

        if outcome.ate_food {
            debug!(
                score = self.state.score(),
                food_x = self.state.food.x,
                food_y = self.state.food.y,
                "Food eaten"
            );
        }

        if let Some(cause) = outcome.collision {
            let score = self.state.score();
            self.metrics.on_game_over(score);
            info!(?cause, score, "Game over");
        }
    }

    fn reset_game(&mut self) {
        self.state.reset();
        self.metrics.on_game_start();
        info!("New round started");
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn mode() -> HumanMode {
        let mut mode = HumanMode::new(GameConfig::default(), Some(11));
        mode.state.food = Position::new(0, 0);
        mode
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn end_round(mode: &mut HumanMode) {
        mode.state.snake.head = Position::new(575, 300);
        mode.handle_event(key(KeyCode::Right));
        mode.update_game();
        assert!(mode.state.is_game_over());
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), None);
        assert!(!mode.state.is_game_over());
        assert_eq!(mode.state.score(), 0);
        assert_eq!(mode.state.snake.head, Position::new(300, 300));
    }

    #[test]
    fn test_arrow_key_steers_immediately() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Right));
        assert_eq!(mode.state.heading, Some(Direction::Right));

        mode.update_game();
        assert_eq!(mode.state.snake.head, Position::new(325, 300));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut mode = mode();
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );

        mode.handle_event(Event::Key(release));

        assert_eq!(mode.state.heading, None);
    }

    #[test]
    fn test_reset_only_after_game_over() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Up));
        mode.update_game();
        let head = mode.state.snake.head;

        mode.handle_event(key(KeyCode::Char(' ')));
        assert_eq!(mode.state.snake.head, head);
        assert_eq!(mode.state.heading, Some(Direction::Up));

        end_round(&mut mode);
        assert_eq!(mode.metrics.rounds_played, 1);

        mode.handle_event(key(KeyCode::Char(' ')));
        assert!(!mode.state.is_game_over());
        assert_eq!(mode.state.snake.head, Position::new(300, 300));
        assert_eq!(mode.state.heading, None);
    }

    #[test]
    fn test_ticks_stop_after_game_over() {
        let mut mode = mode();
        end_round(&mut mode);
        let head = mode.state.snake.head;

        mode.update_game();

        assert_eq!(mode.state.snake.head, head);
        assert_eq!(mode.metrics.rounds_played, 1);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
