//! # tenpin
//!
//! Ten-pin bowling scoring from per-frame result tokens.
//!
//! ## Token Grammar
//!
//! One token per frame: `X` (strike), `7/` (spare), `72` / `9-` / `--`
//! (open frame). The last frame may write its spare bonus inline (`4/5`);
//! a last-frame strike takes its bonus rolls from the tokens that follow.
//!
//! ## Design Principles
//!
//! 1. **Stateless scoring**: `ScoringEngine` owns only configuration. Each run
//!    builds and returns its own `Game`.
//!
//! 2. **All-or-nothing input**: a sequence is validated before any frame is
//!    built, and a bad token never yields a partial total.
//!
//! 3. **Tagged frames**: a frame is a strike, a spare or regular, never a
//!    combination of flags.
//!
//! ## Modules
//!
//! - `core`: attempts, frames, games, configuration
//! - `grammar`: token classification and frame parsing
//! - `rules`: input validation, the scoring engine and the bonus pass
//! - `error`: error types
//!
//! ## Example
//!
//! ```
//! use tenpin::{GameConfig, ScoringEngine};
//!
//! let engine = ScoringEngine::new(GameConfig::standard());
//! let tokens = ["X", "X", "X", "X", "X", "X", "X", "X", "X", "4/5"];
//! let game = engine.score(&tokens).unwrap();
//! assert_eq!(game.total_score(), Some(275));
//! ```

pub mod core;
pub mod error;
pub mod grammar;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Attempt, Frame, FrameKind, Game, GameConfig, PINS, STANDARD_FRAMES};

pub use crate::error::{ConfigError, InputError, ScoreError, ScoreResult, TokenError};

pub use crate::grammar::{classify, parse_frame, TokenClass};

pub use crate::rules::{is_input_valid, score_game, InputValidator, ScoringEngine};
