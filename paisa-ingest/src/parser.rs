//! Record assembly: the full text-to-record pipeline.

use chrono::Utc;
use paisa_core::{ParseContext, ParseError, TransactionRecord};

use crate::amount::extract_amount;
use crate::classify::classify;
use crate::counterparty::extract_counterparty;

/// Parse one pasted notification into a transaction record.
///
/// Stages run in order (classify, amount, counterparty) and the first
/// fatal failure aborts the parse. A missing counterparty is not fatal;
/// the label degrades to the sentinel.
pub fn parse(text: &str, ctx: &ParseContext) -> Result<TransactionRecord, ParseError> {
    let direction = classify(text)?;
    let amount = extract_amount(text)?;
    let counterparty = extract_counterparty(text, direction);

    Ok(TransactionRecord {
        direction,
        amount,
        counterparty,
        account_id: ctx.account_id.clone(),
        timestamp: ctx.timestamp.unwrap_or_else(Utc::now),
        source_text: text.to_string(),
    })
}
