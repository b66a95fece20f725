//! A single roll.

use serde::{Deserialize, Serialize};

/// Pins standing at the start of a frame.
pub const PINS: u8 = 10;

/// Pin count knocked down by one roll (0-10).
///
/// Attempts have no identity beyond their position in a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attempt(u8);

impl Attempt {
    /// A roll that knocks down every pin.
    pub const STRIKE: Attempt = Attempt(PINS);

    /// A roll that misses every pin.
    pub const MISS: Attempt = Attempt(0);

    /// Create an attempt.
    ///
    /// Panics if `pins` exceeds the rack size.
    #[must_use]
    pub const fn new(pins: u8) -> Self {
        assert!(pins <= PINS, "A roll knocks down at most 10 pins");
        Self(pins)
    }

    /// Pins knocked down.
    #[must_use]
    pub const fn pins(self) -> u8 {
        self.0
    }

    /// Pins knocked down, widened for score arithmetic.
    #[must_use]
    pub const fn score(self) -> u32 {
        self.0 as u32
    }
}

impl std::fmt::Display for Attempt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "-"),
            PINS => write!(f, "X"),
            n => write!(f, "{}", n),
        }
    }
}
