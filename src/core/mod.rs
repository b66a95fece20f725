//! Core scoring types: attempts, frames, games and configuration.

pub mod attempt;
pub mod frame;
pub mod config;
pub mod game;

pub use attempt::{Attempt, PINS};
pub use frame::{Frame, FrameKind};
pub use config::{GameConfig, STANDARD_FRAMES};
pub use game::Game;
