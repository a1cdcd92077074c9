use rand::Rng;

use super::{
    action::Direction,
    state::{CollisionType, GameState, Position, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake ate food at the start of this tick
    pub ate_food: bool,
    /// Set on the tick that ended the round
    pub collision: Option<CollisionType>,
}

impl GameState {
    /// Advance the game by one tick
    ///
    /// Food is eaten when the head already sits on it as the tick starts. The
    /// new segment is appended before the body shifts, so it ends up on the
    /// old tail cell. Does nothing once the game is over.
    pub fn advance(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();
        if self.game_over {
            return outcome;
        }

        if self.snake.head == self.food {
            self.snake.grow_at(self.food);
            self.place_food();
            outcome.ate_food = true;
        }

        self.snake.follow_head();

        let (dx, dy) = self.velocity();
        let tile = self.config.tile_size as i32;
        self.snake.head = self.snake.head.moved_by(dx * tile, dy * tile);

        // Both checks run, wall takes precedence in the report
        if self.snake.collides_with_body(self.snake.head) {
            outcome.collision = Some(CollisionType::SelfCollision);
        }
        if !self.is_in_bounds(self.snake.head) {
            outcome.collision = Some(CollisionType::Wall);
        }
        if outcome.collision.is_some() {
            self.game_over = true;
        }

        outcome
    }

    /// Steer the snake, returning whether the heading changed
    ///
    /// A direct reversal is refused, and so is any steering once the game is
    /// over.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        if self
            .heading
            .is_some_and(|current| current.is_opposite(direction))
        {
            return false;
        }

        self.heading = Some(direction);
        true
    }

    /// Start a fresh round on the same board
    pub fn reset(&mut self) {
        self.snake = Snake::new(Self::center(&self.config));
        self.place_food();
        self.heading = None;
        self.game_over = false;
    }

    /// Move food to a random cell; the snake's body is not avoided
    pub(crate) fn place_food(&mut self) {
        let tile = self.config.tile_size as i32;
        let column = self.rng.gen_range(0..self.config.columns()) as i32;
        let row = self.rng.gen_range(0..self.config.rows()) as i32;
        self.food = Position::new(column * tile, row * tile);
    }
}
