use rand::{SeedableRng, rngs::StdRng};

use super::{action::Direction, config::GameConfig};

/// A position on the board, always a multiple of the tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: a head plus the segments trailing it, nearest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub head: Position,
    pub body: Vec<Position>,
}

impl Snake {
    /// Create a snake with no body
    pub fn new(head: Position) -> Self {
        Self {
            head,
            body: Vec::new(),
        }
    }

    /// Append a tail segment at the given position
    pub fn grow_at(&mut self, pos: Position) {
        self.body.push(pos);
    }

    /// Pull every segment onto its predecessor's cell, the first one onto the head
    pub fn follow_head(&mut self) {
        if self.body.is_empty() {
            return;
        }
        self.body.rotate_right(1);
        self.body[0] = self.head;
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Number of body segments
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the board
    Wall,
    /// Head ran into a body segment
    SelfCollision,
}

/// Complete game state
///
/// Owned by whoever drives the game loop; the tick and input handlers
/// borrow it mutably in turn. See `engine.rs` for the rules.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub snake: Snake,
    pub food: Position,
    /// Current heading, `None` while the snake stands still
    pub heading: Option<Direction>,
    pub game_over: bool,
    pub(crate) rng: StdRng,
}

impl GameState {
    /// Create a new game with entropy-seeded food placement
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a new game whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let mut state = Self {
            config,
            snake: Snake::new(Self::center(&config)),
            food: Position::new(0, 0),
            heading: None,
            game_over: false,
            rng,
        };
        state.place_food();
        state
    }

    /// The cell the head starts on
    pub fn center(config: &GameConfig) -> Position {
        let tile = config.tile_size as i32;
        Position::new(
            (config.board_width as i32 / 2) / tile * tile,
            (config.board_height as i32 / 2) / tile * tile,
        )
    }

    /// Check if a position is within the board
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.config.board_width as i32
            && pos.y >= 0
            && pos.y < self.config.board_height as i32
    }

    /// Current velocity as a unit vector, (0, 0) when standing still
    pub fn velocity(&self) -> (i32, i32) {
        self.heading.map_or((0, 0), |direction| direction.delta())
    }

    /// Score is the number of body segments
    pub fn score(&self) -> usize {
        self.snake.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }
}
