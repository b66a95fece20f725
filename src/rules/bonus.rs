//! Look-ahead bonus pass.
//!
//! A strike or spare is worth more than its own pins: it also collects pins
//! from rolls that physically happen in later frames. This pass credits those
//! bonuses to every frame except the last, which was fully resolved (bonus
//! rolls included) while parsing.
//!
//! Looks at most two frames ahead:
//!
//! | Frame | Next | After next | Credit |
//! |---|---|---|---|
//! | Strike | Strike | Strike | 20 |
//! | Strike | Strike | Spare | 10 + the strike's own first roll |
//! | Strike | Strike | Regular | 10 + after-next score |
//! | Strike | Strike | none | 10 + next first roll |
//! | Strike | Spare | - | 10 |
//! | Strike | Regular | - | next score |
//! | Spare | any | - | next first roll |
//! | Regular | - | - | 0 |

use tracing::debug;

use crate::core::{Frame, FrameKind, PINS};

/// Credit look-ahead bonuses to all frames but the last.
///
/// Bonuses are computed from the frames as parsed, then applied, so no
/// frame's credit depends on another frame's bonus.
pub fn apply_bonuses(frames: &mut [Frame]) {
    let bonuses: Vec<u32> = (0..frames.len().saturating_sub(1))
        .map(|index| look_ahead_bonus(frames, index))
        .collect();

    for (index, bonus) in bonuses.into_iter().enumerate() {
        if bonus > 0 {
            debug!(frame = index + 1, bonus, "credited bonus");
            frames[index].add_score(bonus);
        }
    }
}

/// Bonus earned by the frame at `index` from the frames that follow it.
///
/// Returns 0 for the last frame (nothing follows) and for regular frames.
#[must_use]
pub fn look_ahead_bonus(frames: &[Frame], index: usize) -> u32 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };
    let Some(next) = frames.get(index + 1) else {
        return 0;
    };

    match frame.kind() {
        FrameKind::Strike => strike_bonus(frame, next, frames.get(index + 2)),
        FrameKind::Spare => next.first_attempt().score(),
        FrameKind::Regular => 0,
    }
}

fn strike_bonus(frame: &Frame, next: &Frame, after: Option<&Frame>) -> u32 {
    let pins = u32::from(PINS);

    match next.kind() {
        FrameKind::Strike => {
            let third = match after {
                Some(after) => match after.kind() {
                    FrameKind::Strike => pins,
                    FrameKind::Spare => frame.first_attempt().score(),
                    FrameKind::Regular => after.score(),
                },
                // Strike in the second-to-last frame
                None => next.first_attempt().score(),
            };
            pins + third
        }
        FrameKind::Spare => pins,
        FrameKind::Regular => next.score(),
    }
}
