//! Frame token grammar and parsing.
//!
//! - `token`: classification of a token into strike / spare / last-frame spare / regular
//! - `parser`: conversion of classified tokens into frames and bonus rolls

pub mod token;
pub mod parser;

pub use token::{
    classify, is_last_frame_spare, is_regular, is_spare, is_strike, TokenClass, MISS_MARKER,
    SPARE_MARKER, STRIKE_MARKER,
};
pub use parser::{frame_from_class, parse_bonus_rolls, parse_frame, BonusRolls};
