//! Direction classification: decide credit vs debit from keyword sets.

use paisa_core::{Direction, ParseError};
use regex::Regex;
use std::sync::OnceLock;

fn credit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:money\s+received|credited|received|deposited|added)\b")
            .expect("credit keyword regex")
    })
}

fn debit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:payment\s+to|debited|paid|spent|sent|towards)\b")
            .expect("debit keyword regex")
    })
}

/// Classify a message as credit or debit.
///
/// The credit set is checked first: a message containing keywords from both
/// sets classifies as credit. No keyword from either set is a hard failure,
/// never a guess.
pub fn classify(text: &str) -> Result<Direction, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::invalid_input(text));
    }

    if credit_re().is_match(trimmed) {
        return Ok(Direction::Credit);
    }
    if debit_re().is_match(trimmed) {
        return Ok(Direction::Debit);
    }

    Err(ParseError::unclassifiable(trimmed))
}
