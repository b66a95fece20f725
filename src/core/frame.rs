//! Frames: one scoring unit of a game.
//!
//! ## FrameKind
//!
//! A frame is exactly one of strike, spare or regular. The kind decides how
//! the look-ahead pass credits bonus points, so it is a tagged variant rather
//! than a pair of flags.
//!
//! ## Score
//!
//! `score` starts at the frame's own pinfall (plus any last-frame bonus rolls)
//! and only ever grows, by bonus points credited during the look-ahead pass.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::attempt::{Attempt, PINS};

/// How all ten pins fell (or didn't) in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameKind {
    /// All pins on the first roll.
    Strike,
    /// All pins over two rolls.
    Spare,
    /// Pins left standing after two rolls.
    Regular,
}

/// One frame: 1-3 attempts, a kind and an accumulated score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    kind: FrameKind,
    /// Inline for the common case; the last frame holds up to three.
    attempts: SmallVec<[Attempt; 3]>,
    score: u32,
}

impl Frame {
    /// A strike frame: one attempt of ten pins, base score 10.
    #[must_use]
    pub fn strike() -> Self {
        let mut attempts = SmallVec::new();
        attempts.push(Attempt::STRIKE);
        Self {
            kind: FrameKind::Strike,
            attempts,
            score: u32::from(PINS),
        }
    }

    /// A spare frame whose first roll knocked down `first` pins.
    ///
    /// The second attempt records the remaining pins. Base score 10.
    #[must_use]
    pub fn spare(first: u8) -> Self {
        assert!(first < PINS, "A spare leaves pins after the first roll");
        let mut attempts = SmallVec::new();
        attempts.push(Attempt::new(first));
        attempts.push(Attempt::new(PINS - first));
        Self {
            kind: FrameKind::Spare,
            attempts,
            score: u32::from(PINS),
        }
    }

    /// A regular (open) frame with two rolls.
    #[must_use]
    pub fn regular(first: u8, second: u8) -> Self {
        assert!(first + second < PINS, "An open frame leaves pins standing");
        let mut attempts = SmallVec::new();
        attempts.push(Attempt::new(first));
        attempts.push(Attempt::new(second));
        Self {
            kind: FrameKind::Regular,
            attempts,
            score: u32::from(first) + u32::from(second),
        }
    }

    /// Frame kind.
    #[must_use]
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// Is this a strike?
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.kind == FrameKind::Strike
    }

    /// Is this a spare?
    #[must_use]
    pub fn is_spare(&self) -> bool {
        self.kind == FrameKind::Spare
    }

    /// All attempts, including last-frame bonus rolls.
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The first roll. Every frame has one.
    #[must_use]
    pub fn first_attempt(&self) -> Attempt {
        self.attempts[0]
    }

    /// Current score: own pinfall plus bonuses credited so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Credit bonus points.
    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    /// Record a bonus roll earned in the last frame and credit its pins.
    pub(crate) fn push_bonus(&mut self, roll: Attempt) {
        self.attempts.push(roll);
        self.score += roll.score();
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            FrameKind::Strike => write!(f, "X")?,
            FrameKind::Spare => write!(f, "{}/", self.attempts[0])?,
            FrameKind::Regular => write!(f, "{}{}", self.attempts[0], self.attempts[1])?,
        }
        let base = match self.kind {
            FrameKind::Strike => 1,
            _ => 2,
        };
        for bonus in &self.attempts[base..] {
            write!(f, "{}", bonus)?;
        }
        Ok(())
    }
}
