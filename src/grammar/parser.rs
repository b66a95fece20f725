//! Token → frame conversion.

use smallvec::{smallvec, SmallVec};
use tracing::trace;

use super::token::{classify, TokenClass};
use crate::core::{Attempt, Frame, PINS};
use crate::error::TokenError;

/// Parse one token into a frame with its attempts, kind and base score.
///
/// A last-frame spare (`4/5`) already carries its bonus roll, so the frame
/// comes back with three attempts and the bonus included in its score.
///
/// ```
/// use tenpin::grammar::parse_frame;
///
/// let frame = parse_frame("12").unwrap();
/// assert_eq!(frame.attempts().len(), 2);
/// assert_eq!(frame.score(), 3);
/// ```
pub fn parse_frame(token: &str) -> Result<Frame, TokenError> {
    let frame = frame_from_class(classify(token)?);
    trace!(token, kind = ?frame.kind(), score = frame.score(), "parsed frame");
    Ok(frame)
}

/// Build the frame for an already classified token.
#[must_use]
pub fn frame_from_class(class: TokenClass) -> Frame {
    match class {
        TokenClass::Strike => Frame::strike(),
        TokenClass::Spare { first } => Frame::spare(first),
        TokenClass::LastFrameSpare { first, bonus } => {
            let mut frame = Frame::spare(first);
            frame.push_bonus(Attempt::new(bonus));
            frame
        }
        TokenClass::Regular { first, second } => Frame::regular(first, second),
    }
}

/// The two bonus rolls earned by a strike in the last frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BonusRolls {
    /// Pins on each bonus roll, in order.
    pub rolls: SmallVec<[Attempt; 2]>,
    /// Tokens used to encode them (1 or 2).
    pub consumed: usize,
}

impl BonusRolls {
    /// Total bonus pins.
    #[must_use]
    pub fn pins(&self) -> u32 {
        self.rolls.iter().map(|roll| roll.score()).sum()
    }
}

/// Read the bonus rolls following a last-frame strike.
///
/// A strike as the first bonus token is one roll, so a second token supplies
/// the next roll (only its first roll counts). A spare or regular token holds
/// both rolls on its own.
///
/// Returns `Ok(None)` when the tokens run out before both rolls are known.
pub fn parse_bonus_rolls<S: AsRef<str>>(tokens: &[S]) -> Result<Option<BonusRolls>, TokenError> {
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let token = first.as_ref();
    match classify(token)? {
        TokenClass::Strike => {
            let Some(second) = tokens.get(1) else {
                return Ok(None);
            };
            let next = bonus_class(second.as_ref())?.first_roll();
            Ok(Some(BonusRolls {
                rolls: smallvec![Attempt::STRIKE, Attempt::new(next)],
                consumed: 2,
            }))
        }
        TokenClass::Spare { first } => Ok(Some(BonusRolls {
            rolls: smallvec![Attempt::new(first), Attempt::new(PINS - first)],
            consumed: 1,
        })),
        TokenClass::Regular { first, second } => Ok(Some(BonusRolls {
            rolls: smallvec![Attempt::new(first), Attempt::new(second)],
            consumed: 1,
        })),
        TokenClass::LastFrameSpare { .. } => Err(TokenError::Unrecognized {
            token: token.to_string(),
        }),
    }
}

/// Classify a bonus token; the `d/b` encoding has no meaning here.
fn bonus_class(token: &str) -> Result<TokenClass, TokenError> {
    let class = classify(token)?;
    if class.is_last_frame_only() {
        return Err(TokenError::Unrecognized {
            token: token.to_string(),
        });
    }
    Ok(class)
}
