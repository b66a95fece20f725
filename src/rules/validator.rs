//! Pre-flight check of a whole token sequence.
//!
//! Runs before any frame is built. The answer is all-or-nothing: one bad
//! token rejects the sequence.

use tracing::debug;

use crate::core::GameConfig;
use crate::error::InputError;
use crate::grammar::{classify, is_strike, parse_bonus_rolls};

/// Token sequence validator for a configured game.
#[derive(Clone, Copy, Debug)]
pub struct InputValidator {
    config: GameConfig,
}

impl InputValidator {
    /// Create a validator.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Check every token, reporting the first problem.
    ///
    /// - the sequence must not be empty
    /// - each token must classify as strike, spare or regular
    /// - the last frame may also use the `d/b` spare-with-bonus encoding
    /// - bonus tokens after the last frame follow the plain grammar
    /// - only a last-frame strike may be followed by tokens, and only as
    ///   many as its two bonus rolls take
    pub fn validate<S: AsRef<str>>(&self, tokens: &[S]) -> Result<(), InputError> {
        if tokens.is_empty() {
            return Err(InputError::Empty);
        }

        for (index, token) in tokens.iter().enumerate() {
            let token = token.as_ref();
            let class = classify(token).map_err(|source| {
                debug!(index, token, %source, "rejected token");
                InputError::InvalidToken { index, source }
            })?;

            if class.is_last_frame_only() && !self.config.is_last_frame(index) {
                debug!(index, token, "bonus encoding outside the last frame");
                return Err(InputError::MisplacedBonus {
                    index,
                    token: token.to_string(),
                });
            }
        }

        self.check_bonus_tokens(tokens)
    }

    /// Tokens past the last frame must be exactly the strike's bonus rolls.
    fn check_bonus_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<(), InputError> {
        let last = self.config.last_frame_index();
        let Some(last_token) = tokens.get(last) else {
            return Ok(());
        };
        let rest = &tokens[last + 1..];
        if rest.is_empty() {
            return Ok(());
        }

        let allowed = if is_strike(last_token.as_ref()) {
            // A lone `X` bonus is a missing roll, reported when scoring
            parse_bonus_rolls(rest)
                .map_err(|source| InputError::InvalidToken { index: last + 1, source })?
                .map_or(rest.len(), |bonus| bonus.consumed)
        } else {
            0
        };

        if rest.len() > allowed {
            let index = last + 1 + allowed;
            let count = rest.len() - allowed;
            debug!(index, count, "tokens after the last frame");
            return Err(InputError::TrailingTokens { index, count });
        }
        Ok(())
    }

    /// Is the whole sequence valid?
    #[must_use]
    pub fn is_valid<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        self.validate(tokens).is_ok()
    }
}

/// Validate tokens for a standard ten-frame game.
///
/// ```
/// use tenpin::is_input_valid;
///
/// assert!(is_input_valid(&["X", "7/", "9-"]));
/// assert!(!is_input_valid(&["X", "55"]));
/// ```
#[must_use]
pub fn is_input_valid<S: AsRef<str>>(tokens: &[S]) -> bool {
    InputValidator::new(GameConfig::standard()).is_valid(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;

    fn standard() -> InputValidator {
        InputValidator::new(GameConfig::standard())
    }

    #[test]
    fn test_valid_sequences() {
        assert!(is_input_valid(&["X"]));
        assert!(is_input_valid(&["1/", "2/", "3/", "4/", "5/", "6/", "7/", "8/", "9/"]));
        assert!(is_input_valid(&["1-", "2-", "3-", "4-", "5-", "6-", "7-", "8-", "9-"]));
        assert!(is_input_valid(&["-1", "-2", "-3", "-4", "-5", "-6", "-7", "-8", "-9"]));
        assert!(is_input_valid(&["11", "12", "13", "14", "15", "16", "17", "18"]));
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert_eq!(standard().validate(&empty), Err(InputError::Empty));
        assert!(!is_input_valid(&[""]));
    }

    #[test]
    fn test_reports_first_bad_token() {
        let err = standard().validate(&["X", "a", "!"]).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidToken {
                index: 1,
                source: TokenError::MalformedRoll { token: "a".into(), symbol: 'a' },
            }
        );
    }

    #[test]
    fn test_invalid_symbols() {
        assert!(!is_input_valid(&["a", "!", "@", "#", "$", "%", "^"]));
        assert!(!is_input_valid(&["0-", "0/"]));
        assert!(!is_input_valid(&["10-", "10/"]));
        assert!(!is_input_valid(&["x"]));
    }

    #[test]
    fn test_pin_overflow() {
        assert!(!is_input_valid(&["55"]));
        assert!(!is_input_valid(&["X", "99"]));
    }

    #[test]
    fn test_last_frame_spare_position() {
        let mut tokens = vec!["X"; 9];
        tokens.push("4/5");
        assert!(standard().is_valid(&tokens));

        tokens[3] = "4/5";
        assert_eq!(
            standard().validate(&tokens),
            Err(InputError::MisplacedBonus { index: 3, token: "4/5".into() })
        );
    }

    #[test]
    fn test_bonus_tokens_use_plain_grammar() {
        let mut tokens = vec!["X"; 12];
        assert!(standard().is_valid(&tokens));

        tokens[11] = "7/";
        assert!(standard().is_valid(&tokens));

        tokens[11] = "7/2";
        assert!(matches!(
            standard().validate(&tokens),
            Err(InputError::MisplacedBonus { index: 11, .. })
        ));
    }

    #[test]
    fn test_bonus_tokens_match_the_last_strike() {
        let mut tokens = vec!["--"; 9];
        tokens.extend(["X", "54"]);
        assert!(standard().is_valid(&tokens));

        tokens.push("--");
        assert_eq!(
            standard().validate(&tokens),
            Err(InputError::TrailingTokens { index: 11, count: 1 })
        );

        tokens[10] = "X";
        assert!(standard().is_valid(&tokens));
    }

    #[test]
    fn test_no_tokens_after_open_last_frame() {
        let mut tokens = vec!["9-"; 10];
        tokens.push("X");
        assert_eq!(
            standard().validate(&tokens),
            Err(InputError::TrailingTokens { index: 10, count: 1 })
        );

        tokens[9] = "7/3";
        assert!(!standard().is_valid(&tokens));
    }

    #[test]
    fn test_configured_last_frame() {
        let validator = InputValidator::new(GameConfig::new(2));
        assert!(validator.is_valid(&["X", "3/4"]));
        assert!(!validator.is_valid(&["3/4", "X"]));
    }
}
