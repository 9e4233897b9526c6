//! Transaction record types produced by the UPI message parser.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Money flow direction of a parsed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "credit")]
    Credit,
    #[serde(rename = "debit")]
    Debit,
}

/// Sentinel label substituted when no counterparty could be extracted.
pub const UNKNOWN_MERCHANT: &str = "Unknown Merchant";

/// Counterparty label for a transaction.
///
/// Extraction either produced a normalized label or it did not; unlike
/// amount and direction, a missing counterparty does not fail the parse.
/// Serializes as its plain string label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Counterparty {
    Known(String),
    Unknown,
}

impl Counterparty {
    /// Display label; `Unknown` renders as the fixed sentinel.
    pub fn label(&self) -> &str {
        match self {
            Counterparty::Known(name) => name,
            Counterparty::Unknown => UNKNOWN_MERCHANT,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Counterparty::Known(_))
    }
}

impl From<String> for Counterparty {
    fn from(s: String) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed == UNKNOWN_MERCHANT {
            Counterparty::Unknown
        } else {
            Counterparty::Known(trimmed.to_string())
        }
    }
}

impl From<Counterparty> for String {
    fn from(cp: Counterparty) -> Self {
        cp.label().to_string()
    }
}

impl std::fmt::Display for Counterparty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed UPI transaction, ready to hand to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub direction: Direction,
    /// Strictly positive; fractional precision is kept as written in the message.
    pub amount: Decimal,
    pub counterparty: Counterparty,
    /// Opaque account/phone identifier supplied by the caller.
    pub account_id: String,
    pub timestamp: DateTime<Utc>,
    /// Original message text, untouched, kept for audit traceability.
    pub source_text: String,
}

impl TransactionRecord {
    /// Human-readable title, e.g. "Received from rohan@upi".
    pub fn title(&self) -> String {
        match self.direction {
            Direction::Credit => format!("Received from {}", self.counterparty.label()),
            Direction::Debit => format!("Paid to {}", self.counterparty.label()),
        }
    }
}

/// Caller-supplied context stamped onto assembled records.
#[derive(Debug, Clone)]
pub struct ParseContext {
    pub account_id: String,
    /// Explicit record timestamp; `None` means "now" at assembly time.
    pub timestamp: Option<DateTime<Utc>>,
}

impl ParseContext {
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.timestamp = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_counterparty_labels() {
        let known = Counterparty::Known("rohan@upi".to_string());
        assert_eq!(known.label(), "rohan@upi");
        assert!(known.is_known());

        assert_eq!(Counterparty::Unknown.label(), "Unknown Merchant");
        assert!(!Counterparty::Unknown.is_known());
    }

    #[test]
    fn test_counterparty_serializes_as_plain_string() {
        let known = Counterparty::Known("Amazon".to_string());
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"Amazon\"");
        assert_eq!(
            serde_json::to_string(&Counterparty::Unknown).unwrap(),
            "\"Unknown Merchant\""
        );
    }

    #[test]
    fn test_counterparty_roundtrips_through_sentinel() {
        let back: Counterparty = serde_json::from_str("\"Unknown Merchant\"").unwrap();
        assert_eq!(back, Counterparty::Unknown);

        let empty: Counterparty = serde_json::from_str("\"\"").unwrap();
        assert_eq!(empty, Counterparty::Unknown);

        let known: Counterparty = serde_json::from_str("\"rohan@upi\"").unwrap();
        assert_eq!(known, Counterparty::Known("rohan@upi".to_string()));
    }

    #[test]
    fn test_record_title() {
        let record = TransactionRecord {
            direction: Direction::Debit,
            amount: Decimal::new(125075, 2),
            counterparty: Counterparty::Known("Amazon".to_string()),
            account_id: "9876543210".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 5, 12, 9, 30, 0).unwrap(),
            source_text: "You have paid to Amazon Rs 1,250.75".to_string(),
        };
        assert_eq!(record.title(), "Paid to Amazon");

        let credit = TransactionRecord {
            direction: Direction::Credit,
            counterparty: Counterparty::Unknown,
            ..record
        };
        assert_eq!(credit.title(), "Received from Unknown Merchant");
    }

    #[test]
    fn test_direction_serde_names() {
        assert_eq!(serde_json::to_string(&Direction::Credit).unwrap(), "\"credit\"");
        assert_eq!(serde_json::to_string(&Direction::Debit).unwrap(), "\"debit\"");
    }

    #[test]
    fn test_context_builder() {
        let at = Utc.with_ymd_and_hms(2026, 5, 12, 9, 30, 0).unwrap();
        let ctx = ParseContext::new("9876543210").with_timestamp(at);
        assert_eq!(ctx.account_id, "9876543210");
        assert_eq!(ctx.timestamp, Some(at));
    }
}
