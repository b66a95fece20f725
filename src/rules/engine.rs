//! Scoring engine.
//!
//! Scoring runs in two phases because a frame's final value depends on rolls
//! that belong to later frames:
//!
//! 1. **Parse.** Tokens become frames one-for-one. On reaching the last
//!    frame, a strike reads its bonus rolls from the following tokens (they
//!    never become frames of their own) and a `d/b` spare already carries its
//!    bonus. Parsing stops there. A plain `7/` last frame has no bonus to
//!    read and is rejected, as is a game that ends before its last frame.
//! 2. **Look ahead.** Every other strike and spare collects its bonus from
//!    the frames after it (see [`crate::rules::bonus`]).
//!
//! The engine holds no per-game state; one engine can score any number of
//! games, from any number of threads.

use tracing::debug;

use super::bonus::apply_bonuses;
use super::validator::InputValidator;
use crate::core::{FrameKind, Game, GameConfig};
use crate::error::{ScoreError, ScoreResult};
use crate::grammar::{parse_bonus_rolls, parse_frame};

/// Scores token sequences for a configured game.
#[derive(Clone, Copy, Debug)]
pub struct ScoringEngine {
    config: GameConfig,
    validator: InputValidator,
}

impl ScoringEngine {
    /// Create an engine for games of the given configuration.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            validator: InputValidator::new(config),
        }
    }

    /// Engine for the standard ten-frame game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GameConfig::standard())
    }

    /// The configuration games are scored with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Validate, parse and score a token sequence.
    ///
    /// The returned game is finished: its frames carry their final scores
    /// and `total_score()` is set.
    ///
    /// ```
    /// use tenpin::ScoringEngine;
    ///
    /// let tokens = ["X"; 12];
    /// let game = ScoringEngine::standard().score(&tokens).unwrap();
    /// assert_eq!(game.total_score(), Some(300));
    /// ```
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> ScoreResult<Game> {
        self.validator.validate(tokens)?;

        let mut game = Game::new(self.config);
        self.parse_frames(tokens, &mut game)?;
        apply_bonuses(game.frames_mut());
        let total = game.finish();

        debug!(frames = game.frames().len(), total, "scored game");
        Ok(game)
    }

    /// Score a token sequence and return only the total.
    pub fn total<S: AsRef<str>>(&self, tokens: &[S]) -> ScoreResult<u32> {
        let mut game = self.score(tokens)?;
        Ok(game.finish())
    }

    /// Phase 1: tokens to frames, resolving the last frame's bonus rolls.
    ///
    /// Validation has already matched any tokens past the last frame to its
    /// bonus rolls.
    fn parse_frames<S: AsRef<str>>(&self, tokens: &[S], game: &mut Game) -> ScoreResult<()> {
        let last = self.config.last_frame_index();

        for (index, token) in tokens.iter().enumerate() {
            let frame = parse_frame(token.as_ref())?;
            let kind = frame.kind();
            let rolls = frame.attempts().len();
            game.push_frame(frame);

            if index < last {
                continue;
            }

            match kind {
                FrameKind::Strike => {
                    let bonus = parse_bonus_rolls(&tokens[index + 1..])?
                        .ok_or(ScoreError::MissingBonusRoll { frame: index + 1 })?;
                    debug!(frame = index + 1, pins = bonus.pins(), "bonus rolls");
                    if let Some(last_frame) = game.last_frame_mut() {
                        for roll in bonus.rolls {
                            last_frame.push_bonus(roll);
                        }
                    }
                }
                // `7/` without its `7/b` bonus roll
                FrameKind::Spare if rolls < 3 => {
                    return Err(ScoreError::MissingBonusRoll { frame: index + 1 });
                }
                FrameKind::Spare | FrameKind::Regular => {}
            }
            break;
        }

        let found = game.frames().len();
        if found < self.config.frame_count() {
            return Err(ScoreError::MissingFrames {
                found,
                expected: self.config.frame_count(),
            });
        }
        Ok(())
    }
}

/// Score a standard ten-frame game and return the total.
///
/// ```
/// use tenpin::score_game;
///
/// assert_eq!(score_game(&["9-"; 10]).unwrap(), 90);
/// ```
pub fn score_game<S: AsRef<str>>(tokens: &[S]) -> ScoreResult<u32> {
    ScoringEngine::standard().total(tokens)
}
