//! Counterparty extraction: direction-specific ordered rule lists.
//!
//! Each direction owns an ordered list of named (matcher, capture) rules.
//! Rules run strictly in order and the first non-empty capture wins:
//! keyword-delimited rules come before bare-token fallbacks because the
//! loose patterns over-match trailing boilerplate (reference numbers,
//! dates). No rule matching is not an error; the record degrades to
//! `Counterparty::Unknown`.

use paisa_core::{Counterparty, Direction};
use regex::Regex;
use std::sync::OnceLock;

use crate::normalize::normalize;

/// Words that end a counterparty capture: trailing boilerplate markers and
/// the start of an amount clause.
const STOP_WORDS: &[&str] = &[
    "on", "at", "date", "rrn", "ref", "reference", "txn", "vpa", "upi", "rs", "inr", "amount",
    "amounting",
];

type Extract = fn(&str) -> Option<String>;

/// One entry in a direction's rule list.
struct Rule {
    /// Stable name, used by tests to pin precedence.
    name: &'static str,
    extract: Extract,
}

const DEBIT_RULES: &[Rule] = &[
    Rule {
        name: "debit:payment-to-run",
        extract: payment_to_run,
    },
    Rule {
        name: "debit:towards-token",
        extract: towards_token,
    },
    Rule {
        name: "debit:to-token",
        extract: to_token,
    },
];

const CREDIT_RULES: &[Rule] = &[
    Rule {
        name: "credit:from-run",
        extract: from_run,
    },
    Rule {
        name: "credit:from-token",
        extract: from_token,
    },
    Rule {
        name: "credit:by-token",
        extract: by_token,
    },
];

/// Extract the other party's identifier from a classified message.
///
/// Never hard-fails: a message with no recognizable counterparty clause
/// yields `Counterparty::Unknown`.
pub fn extract_counterparty(text: &str, direction: Direction) -> Counterparty {
    match matched_rule(text, direction) {
        Some((_, label)) => Counterparty::Known(label),
        None => Counterparty::Unknown,
    }
}

/// Run a direction's rule list and report the winning rule by name along
/// with its normalized capture.
pub fn matched_rule(text: &str, direction: Direction) -> Option<(&'static str, String)> {
    let rules = match direction {
        Direction::Debit => DEBIT_RULES,
        Direction::Credit => CREDIT_RULES,
    };

    for rule in rules {
        if let Some(raw) = (rule.extract)(text) {
            let label = normalize(&raw);
            if !label.is_empty() {
                return Some((rule.name, label));
            }
        }
    }
    None
}

// --- Debit rules ---

fn debit_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:payment\s+to|paid\s+to|to)\s+(?:vpa\s+)?")
            .expect("debit anchor regex")
    })
}

fn towards_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\btowards\s+(?:vpa\s+)?(?P<cp>\S+)").expect("towards regex")
    })
}

fn to_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bto\s+(?:vpa\s+)?(?P<cp>\S+)").expect("bare to regex"))
}

fn payment_to_run(text: &str) -> Option<String> {
    run_after_anchor(debit_anchor_re(), text)
}

fn towards_token(text: &str) -> Option<String> {
    single_token(towards_re(), text)
}

fn to_token(text: &str) -> Option<String> {
    single_token(to_re(), text)
}

// --- Credit rules ---

fn credit_anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(?:received\s+from|from|by)\s+(?:vpa\s+)?")
            .expect("credit anchor regex")
    })
}

fn from_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bfrom\s+(?:vpa\s+)?(?P<cp>\S+)").expect("bare from regex"))
}

fn by_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bby\s+(?:vpa\s+)?(?P<cp>\S+)").expect("bare by regex"))
}

fn from_run(text: &str) -> Option<String> {
    run_after_anchor(credit_anchor_re(), text)
}

fn from_token(text: &str) -> Option<String> {
    single_token(from_re(), text)
}

fn by_token(text: &str) -> Option<String> {
    single_token(by_re(), text)
}

// --- Capture helpers ---

/// Walk name-like tokens after a directional anchor.
///
/// A token continues the run if it is a UPI handle (contains '@') or starts
/// with a capital letter or digit. A stop word ends the run, as does
/// trailing clause punctuation on the token itself.
fn run_after_anchor(anchor: &Regex, text: &str) -> Option<String> {
    for m in anchor.find_iter(text) {
        if let Some(run) = capture_run(&text[m.end()..]) {
            return Some(run);
        }
    }
    None
}

fn capture_run(rest: &str) -> Option<String> {
    let mut words: Vec<&str> = Vec::new();
    for raw in rest.split_whitespace() {
        let token = raw.trim_end_matches([',', '.', ';', ':']);
        if token.is_empty() || is_stop_token(token) || !is_name_token(token) {
            break;
        }
        words.push(token);
        if token.len() != raw.len() {
            // trailing punctuation closes the clause
            break;
        }
    }
    (!words.is_empty()).then(|| words.join(" "))
}

/// Single-token capture for the bare fallback rules.
fn single_token(re: &Regex, text: &str) -> Option<String> {
    for caps in re.captures_iter(text) {
        let token = caps["cp"].trim_end_matches([',', '.', ';', ':']);
        if !token.is_empty() && !is_stop_token(token) {
            return Some(token.to_string());
        }
    }
    None
}

fn is_name_token(token: &str) -> bool {
    token.contains('@')
        || token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// True for stop words and for stop words fused to punctuation or digits,
/// like "Rs.200" or "ref:12345".
fn is_stop_token(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    STOP_WORDS.iter().any(|stop| {
        lower == *stop
            || (lower.starts_with(stop)
                && !lower.as_bytes()[stop.len()].is_ascii_alphabetic())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debit(text: &str) -> Counterparty {
        extract_counterparty(text, Direction::Debit)
    }

    fn credit(text: &str) -> Counterparty {
        extract_counterparty(text, Direction::Credit)
    }

    #[test]
    fn test_debit_paid_to_stops_at_amount_clause() {
        let (rule, cp) = matched_rule(
            "You have paid to Amazon Rs 1,250.75 towards order",
            Direction::Debit,
        )
        .unwrap();
        assert_eq!(rule, "debit:payment-to-run");
        assert_eq!(cp, "Amazon");
    }

    #[test]
    fn test_debit_payment_to_multiword_name() {
        assert_eq!(
            debit("payment to Sharma General Store on 12-05 via UPI"),
            Counterparty::Known("Sharma General Store".to_string())
        );
    }

    #[test]
    fn test_debit_towards_handle() {
        let (rule, cp) =
            matched_rule("Rs.80 debited towards coffee@okhdfc today", Direction::Debit).unwrap();
        assert_eq!(rule, "debit:towards-token");
        assert_eq!(cp, "coffee@okhdfc");
    }

    #[test]
    fn test_debit_bare_to_fallback_for_lowercase_merchant() {
        let (rule, cp) = matched_rule("Rs.50 sent to flipkart", Direction::Debit).unwrap();
        assert_eq!(rule, "debit:to-token");
        assert_eq!(cp, "flipkart");
    }

    #[test]
    fn test_credit_by_handle_with_trailing_date() {
        let (rule, cp) =
            matched_rule("Rs.500 credited by rohan@upi on 12-05", Direction::Credit).unwrap();
        assert_eq!(rule, "credit:from-run");
        assert_eq!(cp, "rohan@upi");
    }

    #[test]
    fn test_credit_from_multiword_name() {
        assert_eq!(
            credit("Received Rs.1,000 from Rohan Kumar on 01-06"),
            Counterparty::Known("Rohan Kumar".to_string())
        );
    }

    #[test]
    fn test_vpa_tag_is_stripped() {
        assert_eq!(
            debit("paid to VPA merchant@okaxis ref 998877"),
            Counterparty::Known("merchant@okaxis".to_string())
        );
    }

    #[test]
    fn test_trailing_period_trimmed_from_handle() {
        assert_eq!(
            credit("Rs.20 received from rohan@upi."),
            Counterparty::Known("rohan@upi".to_string())
        );
    }

    #[test]
    fn test_dotted_handle_survives() {
        assert_eq!(
            credit("Rs.20 credited by rohan.k@okicici on 03-04"),
            Counterparty::Known("rohan.k@okicici".to_string())
        );
    }

    #[test]
    fn test_currency_token_never_becomes_counterparty() {
        // "by" is a credit anchor but the next token is an amount
        assert_eq!(matched_rule("credited by Rs.200", Direction::Credit), None);
    }

    #[test]
    fn test_no_clause_degrades_to_unknown() {
        assert_eq!(debit("debited by Rs.200"), Counterparty::Unknown);
        assert_eq!(credit("Rs.10 credited"), Counterparty::Unknown);
    }

    #[test]
    fn test_anchor_retries_past_false_positives() {
        // first "to" leads nowhere name-like; the later clause should win
        assert_eq!(
            debit("Use code to unlock. Paid to Amazon on 02-02"),
            Counterparty::Known("Amazon".to_string())
        );
    }

    #[test]
    fn test_stop_tokens() {
        assert!(is_stop_token("on"));
        assert!(is_stop_token("Rs.200"));
        assert!(is_stop_token("ref:12345"));
        assert!(is_stop_token("RRN12345"));
        assert!(!is_stop_token("Ontario"));
        assert!(!is_stop_token("attic"));
        assert!(!is_stop_token("rohan@upi"));
    }
}
