//! Frame token grammar.
//!
//! Each frame is written as one short token. Categories are tried in order
//! and the first match wins:
//!
//! | Category | Shape | Example |
//! |---|---|---|
//! | Strike | `X` | `X` |
//! | Spare | digit 1-9, `/` | `7/` |
//! | Last-frame spare | digit 1-9, `/`, bonus roll | `4/5`, `4/X`, `4/-`, `4/10` |
//! | Regular | two of {digit 1-9, `-`}, sum below 10 | `72`, `9-`, `-3`, `--` |
//!
//! Ten pins over two plain digits (`55`) is not a regular frame: a spare must
//! be written with its marker.
//!
//! Classification only inspects the text. It is safe to call from any thread.

use crate::core::PINS;
use crate::error::TokenError;

/// All ten pins on the first roll.
pub const STRIKE_MARKER: char = 'X';

/// The remaining pins on the second roll.
pub const SPARE_MARKER: char = '/';

/// No pins.
pub const MISS_MARKER: char = '-';

/// Classified frame token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// `X`
    Strike,
    /// `d/`
    Spare {
        /// Pins on the first roll (1-9).
        first: u8,
    },
    /// `d/b`: a last-frame spare with its bonus roll.
    LastFrameSpare {
        /// Pins on the first roll (1-9).
        first: u8,
        /// Pins on the bonus roll (0-10).
        bonus: u8,
    },
    /// Two rolls leaving pins standing.
    Regular {
        /// Pins on the first roll (0-9).
        first: u8,
        /// Pins on the second roll (0-9).
        second: u8,
    },
}

impl TokenClass {
    /// Pins knocked down by the token's first roll.
    #[must_use]
    pub fn first_roll(self) -> u8 {
        match self {
            TokenClass::Strike => PINS,
            TokenClass::Spare { first } | TokenClass::LastFrameSpare { first, .. } => first,
            TokenClass::Regular { first, .. } => first,
        }
    }

    /// Does this category belong only in the last frame?
    #[must_use]
    pub fn is_last_frame_only(self) -> bool {
        matches!(self, TokenClass::LastFrameSpare { .. })
    }
}

/// Classify a token, explaining why when it fits no category.
pub fn classify(token: &str) -> Result<TokenClass, TokenError> {
    let symbols: Vec<char> = token.chars().collect();

    match symbols.as_slice() {
        [] => Err(TokenError::MissingFirstRoll),
        [STRIKE_MARKER] => Ok(TokenClass::Strike),
        [first, SPARE_MARKER] => Ok(TokenClass::Spare {
            first: spare_lead(token, *first)?,
        }),
        [first, SPARE_MARKER, bonus @ ..] => {
            let first = spare_lead(token, *first)?;
            let bonus = bonus_roll(token, bonus)?;
            Ok(TokenClass::LastFrameSpare { first, bonus })
        }
        [first] => {
            roll(token, *first)?;
            Err(TokenError::MissingSecondRoll)
        }
        [first, second] => {
            let first = roll(token, *first)?;
            let second = roll(token, *second)?;
            let pins = u32::from(first) + u32::from(second);
            if pins >= u32::from(PINS) {
                return Err(TokenError::PinOverflow {
                    token: token.to_string(),
                    pins,
                });
            }
            Ok(TokenClass::Regular { first, second })
        }
        _ => Err(TokenError::Unrecognized {
            token: token.to_string(),
        }),
    }
}

/// Is the token a strike?
#[must_use]
pub fn is_strike(token: &str) -> bool {
    matches!(classify(token), Ok(TokenClass::Strike))
}

/// Is the token a plain spare (`d/`)?
#[must_use]
pub fn is_spare(token: &str) -> bool {
    matches!(classify(token), Ok(TokenClass::Spare { .. }))
}

/// Is the token a last-frame spare carrying its bonus roll (`d/b`)?
#[must_use]
pub fn is_last_frame_spare(token: &str) -> bool {
    matches!(classify(token), Ok(TokenClass::LastFrameSpare { .. }))
}

/// Is the token a regular two-roll frame?
#[must_use]
pub fn is_regular(token: &str) -> bool {
    matches!(classify(token), Ok(TokenClass::Regular { .. }))
}

/// A digit 1-9 or the miss marker.
fn roll(token: &str, symbol: char) -> Result<u8, TokenError> {
    if symbol == MISS_MARKER {
        return Ok(0);
    }
    pin_digit(symbol).ok_or_else(|| malformed(token, symbol))
}

/// The roll in front of a spare marker: digit 1-9 only.
fn spare_lead(token: &str, symbol: char) -> Result<u8, TokenError> {
    pin_digit(symbol).ok_or_else(|| malformed(token, symbol))
}

/// The trailing bonus roll of a last-frame spare.
fn bonus_roll(token: &str, symbols: &[char]) -> Result<u8, TokenError> {
    match symbols {
        [STRIKE_MARKER] => Ok(PINS),
        ['1', '0'] => Ok(PINS),
        [symbol] => roll(token, *symbol),
        [symbol, ..] if !is_roll_symbol(*symbol) => Err(malformed(token, *symbol)),
        _ => Err(TokenError::Unrecognized {
            token: token.to_string(),
        }),
    }
}

fn pin_digit(symbol: char) -> Option<u8> {
    match symbol {
        '1'..='9' => symbol.to_digit(10).map(|d| d as u8),
        _ => None,
    }
}

fn is_roll_symbol(symbol: char) -> bool {
    symbol == STRIKE_MARKER || symbol == MISS_MARKER || pin_digit(symbol).is_some()
}

fn malformed(token: &str, symbol: char) -> TokenError {
    TokenError::MalformedRoll {
        token: token.to_string(),
        symbol,
    }
}
