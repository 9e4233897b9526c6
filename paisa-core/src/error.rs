//! Parse failure taxonomy for UPI notification messages.
//!
//! Every variant is terminal for a given parse attempt: the parser is a pure
//! function, so retrying the same input cannot change the outcome. Each
//! variant carries the offending message text so the calling layer can log
//! it or echo it back to the user.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Message was empty or whitespace-only.
    #[error("message is empty or whitespace-only")]
    InvalidInput {
        /// The rejected input
        text: String,
    },

    /// No credit or debit keyword matched.
    #[error("no credit or debit keyword found in \"{text}\"")]
    Unclassifiable {
        /// The rejected input
        text: String,
    },

    /// No usable amount: either no currency token matched, or the matched
    /// token was zero, negative, or not a number.
    #[error("{}", token
        .as_ref()
        .map(|t| format!("amount token \"{t}\" in \"{text}\" is not a positive number"))
        .unwrap_or_else(|| format!("no amount found in \"{text}\"")))]
    InvalidAmount {
        /// The rejected input
        text: String,
        /// The digit token that matched, if any
        token: Option<String>,
    },
}

impl ParseError {
    pub fn invalid_input(text: &str) -> Self {
        ParseError::InvalidInput {
            text: text.to_string(),
        }
    }

    pub fn unclassifiable(text: &str) -> Self {
        ParseError::Unclassifiable {
            text: text.to_string(),
        }
    }

    /// No pattern matched an amount anywhere in the text.
    pub fn no_amount(text: &str) -> Self {
        ParseError::InvalidAmount {
            text: text.to_string(),
            token: None,
        }
    }

    /// A token matched but did not parse to a positive number.
    pub fn bad_amount(text: &str, token: &str) -> Self {
        ParseError::InvalidAmount {
            text: text.to_string(),
            token: Some(token.to_string()),
        }
    }
}
