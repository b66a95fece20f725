//! Input validation and token parsing integration tests.

use tenpin::grammar::{is_last_frame_spare, is_regular, is_spare, is_strike};
use tenpin::{
    is_input_valid, parse_frame, GameConfig, InputError, InputValidator, ScoreError, ScoringEngine,
    TokenError,
};

// =============================================================================
// Sequence Validation
// =============================================================================

#[test]
fn test_single_strike_is_valid() {
    assert!(is_input_valid(&["X"]));
}

#[test]
fn test_spares_one_through_nine() {
    let tokens: Vec<String> = (1..=9).map(|d| format!("{d}/")).collect();
    assert!(is_input_valid(&tokens));
}

#[test]
fn test_misses_both_orders() {
    let leading: Vec<String> = (1..=9).map(|d| format!("{d}-")).collect();
    let trailing: Vec<String> = (1..=9).map(|d| format!("-{d}")).collect();
    assert!(is_input_valid(&leading));
    assert!(is_input_valid(&trailing));
}

#[test]
fn test_two_digit_frames() {
    let tokens: Vec<String> = (1..=8).map(|d| format!("1{d}")).collect();
    assert!(is_input_valid(&tokens));
}

#[test]
fn test_alphabet_is_rejected() {
    let tokens: Vec<String> = ('A'..='Z')
        .filter(|c| *c != 'X')
        .map(|c| format!("{c}/"))
        .chain(('a'..='z').map(String::from))
        .collect();
    assert!(!is_input_valid(&tokens));

    for token in &tokens {
        assert!(!is_input_valid(&[token]), "{token} should be rejected");
    }
}

#[test]
fn test_empty_sequence_and_empty_token() {
    let empty: Vec<&str> = Vec::new();
    assert!(!is_input_valid(&empty));
    assert!(!is_input_valid(&[""]));
}

#[test]
fn test_punctuation_is_rejected() {
    assert!(!is_input_valid(&["a", "!", "@", "#", "$", "%", "^"]));
}

#[test]
fn test_zero_and_ten_digits_are_rejected() {
    assert!(!is_input_valid(&["0-", "0/"]));
    assert!(!is_input_valid(&["10-", "10/"]));
    assert!(!is_input_valid(&["0-"]));
    assert!(!is_input_valid(&["10/"]));
}

#[test]
fn test_plain_digits_totalling_ten_need_spare_marker() {
    assert!(!is_input_valid(&["55"]));
    assert!(!is_input_valid(&["19"]));
    assert!(is_input_valid(&["5/"]));
    assert!(is_input_valid(&["54"]));
}

#[test]
fn test_validation_precedes_scoring() {
    let engine = ScoringEngine::standard();
    let err = engine.score(&["X", "X", "87"]).unwrap_err();
    assert_eq!(
        err,
        ScoreError::InvalidInput(InputError::InvalidToken {
            index: 2,
            source: TokenError::PinOverflow { token: "87".into(), pins: 15 },
        })
    );
}

#[test]
fn test_spare_bonus_encoding_only_in_last_frame() {
    let validator = InputValidator::new(GameConfig::standard());
    let mut tokens = vec!["9-"; 9];
    tokens.push("9/9");
    assert!(validator.is_valid(&tokens));

    tokens.swap(0, 9);
    assert_eq!(
        validator.validate(&tokens),
        Err(InputError::MisplacedBonus { index: 0, token: "9/9".into() })
    );
}

// =============================================================================
// Token Grammar
// =============================================================================

#[test]
fn test_predicates() {
    assert!(is_strike("X"));
    assert!(is_spare("1/"));
    assert!(is_last_frame_spare("4/5"));
    assert!(is_regular("-9"));

    assert!(!is_strike("/"));
    assert!(!is_spare("X"));
    assert!(!is_regular("X"));
}

#[test]
fn test_parse_frame_failures() {
    assert_eq!(parse_frame(""), Err(TokenError::MissingFirstRoll));
    assert_eq!(parse_frame("1"), Err(TokenError::MissingSecondRoll));
    assert_eq!(TokenError::MissingFirstRoll.to_string(), "missing first roll");
    assert_eq!(TokenError::MissingSecondRoll.to_string(), "missing second roll");
}
