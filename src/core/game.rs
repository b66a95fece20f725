//! Game: the ordered frame sequence of one scoring run.
//!
//! ## Lifecycle
//!
//! 1. `Game::new(config)` (a config is mandatory, there is no default game)
//! 2. Frames are appended in order while tokens are parsed
//! 3. Bonus points are credited to earlier frames by the look-ahead pass
//! 4. `finish()` fixes the total; the game is read-only afterwards

use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::frame::Frame;

/// One game's frames and final total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    frames: Vec<Frame>,
    total_score: Option<u32>,
}

impl Game {
    /// Create an empty game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            frames: Vec::with_capacity(config.frame_count()),
            total_score: None,
        }
    }

    /// The configuration this game was scored with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Configured number of frames.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.config.frame_count()
    }

    /// Frames parsed so far, in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Final total, once the game is finished.
    #[must_use]
    pub fn total_score(&self) -> Option<u32> {
        self.total_score
    }

    /// Has the total been computed?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.total_score.is_some()
    }

    /// Cumulative score after each frame.
    ///
    /// ```
    /// use tenpin::{GameConfig, ScoringEngine};
    ///
    /// let engine = ScoringEngine::new(GameConfig::new(3));
    /// let game = engine.score(&["X", "5/", "81"]).unwrap();
    /// assert_eq!(game.running_totals(), vec![20, 38, 47]);
    /// ```
    #[must_use]
    pub fn running_totals(&self) -> Vec<u32> {
        self.frames
            .iter()
            .scan(0, |acc, frame| {
                *acc += frame.score();
                Some(*acc)
            })
            .collect()
    }

    pub(crate) fn push_frame(&mut self, frame: Frame) {
        debug_assert!(!self.is_finished(), "Frames are fixed once the game is finished");
        self.frames.push(frame);
    }

    pub(crate) fn frames_mut(&mut self) -> &mut [Frame] {
        &mut self.frames
    }

    pub(crate) fn last_frame_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Sum the frame scores and fix the total.
    pub(crate) fn finish(&mut self) -> u32 {
        if let Some(total) = self.total_score {
            return total;
        }
        let total = self.frames.iter().map(Frame::score).sum();
        self.total_score = Some(total);
        total
    }
}
