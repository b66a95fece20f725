//! Error types for token parsing, input validation and scoring.
//!
//! ## Error Policy
//!
//! - A bad token aborts the whole run; no partial score is produced
//! - Validation failures are reported before any frame is parsed
//! - Errors carry the offending token (and index where known)

use thiserror::Error;

// =============================================================================
// Token errors
// =============================================================================

/// A single frame token could not be turned into a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token is empty.
    #[error("missing first roll")]
    MissingFirstRoll,

    /// The token holds a single roll that is neither a strike nor a spare.
    #[error("missing second roll")]
    MissingSecondRoll,

    /// A roll symbol is not a digit 1-9 or the miss marker.
    #[error("malformed roll '{symbol}' in token '{token}'")]
    MalformedRoll {
        /// The full token.
        token: String,
        /// The symbol that failed to parse.
        symbol: char,
    },

    /// Two plain rolls knock down the whole rack (or more).
    ///
    /// Ten pins over two rolls must be written with the spare marker.
    #[error("token '{token}' knocks down {pins} pins in two plain rolls")]
    PinOverflow {
        /// The full token.
        token: String,
        /// Sum of both rolls.
        pins: u32,
    },

    /// The token matches no grammar category.
    #[error("unrecognized token '{token}'")]
    Unrecognized {
        /// The full token.
        token: String,
    },
}

// =============================================================================
// Input errors
// =============================================================================

/// The token sequence failed the pre-flight check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No tokens at all.
    #[error("no frame tokens supplied")]
    Empty,

    /// A token failed classification.
    #[error("invalid token at position {index}: {source}")]
    InvalidToken {
        /// Zero-based token position.
        index: usize,
        /// Why the token was rejected.
        #[source]
        source: TokenError,
    },

    /// The last-frame spare encoding (`4/5`) appears outside the last frame.
    #[error("token '{token}' at position {index} carries a bonus roll outside the last frame")]
    MisplacedBonus {
        /// Zero-based token position.
        index: usize,
        /// The offending token.
        token: String,
    },

    /// Tokens follow a last frame that earned no more rolls.
    #[error("{count} token(s) left over after the last frame, from position {index}")]
    TrailingTokens {
        /// Zero-based position of the first unused token.
        index: usize,
        /// Number of unused tokens.
        count: usize,
    },
}

// =============================================================================
// Config errors
// =============================================================================

/// A game configuration that cannot be scored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A game needs at least one frame.
    #[error("a game needs at least one frame")]
    NoFrames,
}

// =============================================================================
// Scoring errors
// =============================================================================

/// A scoring run was aborted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The pre-flight validator rejected the input.
    #[error(transparent)]
    InvalidInput(#[from] InputError),

    /// A token could not be parsed into a frame.
    #[error(transparent)]
    InvalidToken(#[from] TokenError),

    /// The last frame earned bonus rolls that were not supplied.
    #[error("frame {frame} is missing its bonus roll")]
    MissingBonusRoll {
        /// One-based frame number.
        frame: usize,
    },

    /// The tokens stop before the last frame.
    #[error("game has {found} of {expected} frames")]
    MissingFrames {
        /// Frames supplied.
        found: usize,
        /// Frames the configuration requires.
        expected: usize,
    },
}

/// Result alias for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
