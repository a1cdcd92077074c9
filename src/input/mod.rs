//! Keyboard mapping from terminal key events to game actions

pub mod handler;

pub use handler::{InputHandler, KeyAction};
