//! paisa-ingest: heuristic parser turning pasted UPI notification text into
//! structured transaction records.
//!
//! Pipeline: classify direction, extract amount, extract counterparty,
//! normalize, assemble. Classification and amount failures abort the parse;
//! a missing counterparty only degrades the label.

pub mod amount;
pub mod classify;
pub mod counterparty;
pub mod normalize;
pub mod parser;

pub use amount::extract_amount;
pub use classify::classify;
pub use counterparty::{extract_counterparty, matched_rule};
pub use normalize::normalize;
pub use parser::parse;
