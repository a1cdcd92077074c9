//! Tile Snake - single-player Snake on a tile grid, played in the terminal
//!
//! This library provides:
//! - Core game rules with no I/O (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Session stats (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
