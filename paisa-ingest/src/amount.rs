//! Amount extraction: locate a currency-prefixed numeric token and
//! normalize it to a decimal value.

use paisa_core::ParseError;
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;

// Digit group with optional thousands separators and one decimal point.
// Indian grouping ("1,00,000") means separator groups are not always three
// digits, so any digit run between commas is accepted.
fn currency_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:rs|inr)\.?\s*(?P<amt>\d+(?:,\d+)*(?:\.\d+)?)")
            .expect("currency amount regex")
    })
}

fn keyword_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"(?i)\bamount(?:ing)?(?:\s+to)?\s*[:\-]?\s*",
            r"(?:(?:rs|inr)\.?\s*)?",
            r"(?P<amt>\d+(?:,\d+)*(?:\.\d+)?)"
        ))
        .expect("amount keyword regex")
    })
}

/// Extract the transaction amount from a message.
///
/// Patterns are tried in order and the first one that matches anywhere in
/// the text wins; later patterns are not attempted after a match. A matched
/// token that is zero, negative, or unparseable is a hard failure: a
/// malformed amount must never silently become 0.
pub fn extract_amount(text: &str) -> Result<Decimal, ParseError> {
    for re in [currency_re(), keyword_re()] {
        if let Some(caps) = re.captures(text) {
            return parse_token(text, &caps["amt"]);
        }
    }
    Err(ParseError::no_amount(text))
}

fn parse_token(text: &str, token: &str) -> Result<Decimal, ParseError> {
    let cleaned = token.replace(',', "");
    match cleaned.parse::<Decimal>() {
        Ok(value) if value > Decimal::ZERO => Ok(value),
        _ => Err(ParseError::bad_amount(text, token)),
    }
}
