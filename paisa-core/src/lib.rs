//! paisa-core: transaction record types and parse errors for the paisa UPI ledger

pub mod error;
pub mod time;
pub mod transaction;

pub use error::ParseError;
pub use transaction::{Counterparty, Direction, ParseContext, TransactionRecord, UNKNOWN_MERCHANT};
