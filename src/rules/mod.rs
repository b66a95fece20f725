//! Scoring rules.
//!
//! - `validator`: all-or-nothing pre-flight check of a token sequence
//! - `engine`: parses tokens into frames and resolves the last frame
//! - `bonus`: look-ahead strike/spare bonus pass
//!
//! Control flow: validator → parse (one token per frame) → bonus pass → total.

pub mod validator;
pub mod bonus;
pub mod engine;

pub use validator::{is_input_valid, InputValidator};
pub use bonus::{apply_bonuses, look_ahead_bonus};
pub use engine::{score_game, ScoringEngine};
