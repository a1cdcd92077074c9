//! Core game logic module for Snake
//!
//! This module contains all the game rules without any I/O or rendering
//! dependencies. Callers own a [`GameState`] and drive it with
//! [`GameState::advance`], [`GameState::set_direction`] and [`GameState::reset`].

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::{ConfigError, GameConfig};
pub use engine::TickOutcome;
pub use state::{CollisionType, GameState, Position, Snake};
