//! Ledger module: voucher rules, running balances, windows and summaries

pub mod aggregate;
pub mod period;
pub mod rules;
pub mod running;
pub mod service;

pub use aggregate::*;
pub use period::*;
pub use rules::*;
pub use running::*;
pub use service::*;
