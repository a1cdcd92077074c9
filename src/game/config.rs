use thiserror::Error;

/// Largest board extent; a head one tile past any in-bounds position must still fit in `i32`
pub const MAX_BOARD_EXTENT: u32 = (i32::MAX / 2) as u32;
/// Most columns a terminal row can hold at two columns per cell plus borders
pub const MAX_COLUMNS: u32 = (u16::MAX as u32 - 2) / 2;
/// Most rows a terminal can hold plus borders
pub const MAX_ROWS: u32 = u16::MAX as u32 - 2;

/// Reasons a board configuration is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tile size must be greater than zero")]
    ZeroTileSize,
    #[error("board {axis} of {size} is smaller than one tile of {tile_size}")]
    BoardTooSmall {
        axis: &'static str,
        size: u32,
        tile_size: u32,
    },
    #[error("board {axis} of {size} exceeds {}", MAX_BOARD_EXTENT)]
    BoardTooLarge { axis: &'static str, size: u32 },
    #[error("{count} {axis} do not fit on screen (at most {max})")]
    TooManyCells {
        axis: &'static str,
        count: u32,
        max: u32,
    },
}

/// Board dimensions, in the same units as snake and food positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the board
    pub board_width: u32,
    /// Height of the board
    pub board_height: u32,
    /// Edge length of one grid cell
    pub tile_size: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: 600,
            board_height: 600,
            tile_size: 25,
        }
    }
}

impl GameConfig {
    /// Create a configuration, rejecting boards that hold no whole cell
    pub fn new(board_width: u32, board_height: u32, tile_size: u32) -> Result<Self, ConfigError> {
        if tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        if board_width < tile_size {
            return Err(ConfigError::BoardTooSmall {
                axis: "width",
                size: board_width,
                tile_size,
            });
        }
        if board_height < tile_size {
            return Err(ConfigError::BoardTooSmall {
                axis: "height",
                size: board_height,
                tile_size,
            });
        }

        if board_width > MAX_BOARD_EXTENT {
            return Err(ConfigError::BoardTooLarge {
                axis: "width",
                size: board_width,
            });
        }
        if board_height > MAX_BOARD_EXTENT {
            return Err(ConfigError::BoardTooLarge {
                axis: "height",
                size: board_height,
            });
        }

        let config = Self {
            board_width,
            board_height,
            tile_size,
        };
        if config.columns() > MAX_COLUMNS {
            return Err(ConfigError::TooManyCells {
                axis: "columns",
                count: config.columns(),
                max: MAX_COLUMNS,
            });
        }
        if config.rows() > MAX_ROWS {
            return Err(ConfigError::TooManyCells {
                axis: "rows",
                count: config.rows(),
                max: MAX_ROWS,
            });
        }

        Ok(config)
    }

    /// Number of whole cells across the board
    pub fn columns(&self) -> u32 {
        self.board_width / self.tile_size
    }

    /// Number of whole cells down the board
    pub fn rows(&self) -> u32 {
        self.board_height / self.tile_size
    }
}
