//! Game configuration.
//!
//! A game is always configured with an explicit frame count. The standard
//! game has ten; longer or shorter games move the last-frame rules (bonus
//! rolls, the `4/5` spare encoding) to whichever frame is last.

use serde::{Deserialize, Serialize};

use super::attempt::PINS;
use crate::error::ConfigError;

/// Frames in a standard game.
pub const STANDARD_FRAMES: usize = 10;

/// Most bonus tokens the last frame can consume.
pub const MAX_BONUS_TOKENS: usize = 2;

/// Scoring configuration.
///
/// Deserializing checks the frame count the same way [`GameConfig::try_new`]
/// does, so a config read from JSON always has a last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    frame_count: usize,
}

#[derive(Deserialize)]
struct RawGameConfig {
    frame_count: usize,
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.frame_count)
    }
}

impl GameConfig {
    /// Create a configuration, rejecting a game without frames.
    pub fn try_new(frame_count: usize) -> Result<Self, ConfigError> {
        if frame_count == 0 {
            return Err(ConfigError::NoFrames);
        }
        Ok(Self { frame_count })
    }

    /// Create a configuration for a game of `frame_count` frames.
    pub fn new(frame_count: usize) -> Self {
        assert!(frame_count > 0, "Must have at least 1 frame");
        Self { frame_count }
    }

    /// The standard ten-frame game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_FRAMES)
    }

    /// Number of frames in the game (at least 1).
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Set the frame count.
    #[must_use]
    pub fn with_frame_count(self, frame_count: usize) -> Self {
        Self::new(frame_count)
    }

    /// Zero-based index of the last frame.
    #[must_use]
    pub fn last_frame_index(&self) -> usize {
        self.frame_count - 1
    }

    /// Is `index` the last frame?
    #[must_use]
    pub fn is_last_frame(&self, index: usize) -> bool {
        index == self.last_frame_index()
    }

    /// Largest token count a complete game can have (bonus tokens included).
    #[must_use]
    pub fn max_tokens(&self) -> usize {
        self.frame_count + MAX_BONUS_TOKENS
    }

    /// Highest achievable total (a perfect game).
    #[must_use]
    pub fn max_score(&self) -> u32 {
        3 * u32::from(PINS) * self.frame_count as u32
    }
}
