//! # Bullion Ledger
//!
//! Running gold and KWD balances for the accounts of a jewellery trading
//! firm, period statements with opening and closing balances, and paginated
//! report layout for printing.
//!
//! ## Features
//!
//! - **Voucher rules**: Invoice, Receipt, Gold Fixing and Alloy vouchers move
//!   the gold and KWD balances by a fixed accounting policy
//! - **Running ledgers**: per account, or merged across all accounts of a type
//! - **Period windows**: opening balance brought forward, closing balance carried out
//! - **Balance summaries**: per-account closing balances with group totals
//! - **Pagination**: fixed-geometry pages with column widths and row offsets,
//!   drawn onto any [`Canvas`]
//! - **Storage abstraction**: vouchers arrive through the [`VoucherSource`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use bullion_ledger::{apply_window, compute_ledger, DateRange, LedgerScope, Voucher, VoucherType};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let vouchers = vec![
//!     Voucher::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//!         VoucherType::Invoice,
//!         "c1".to_string(),
//!         BigDecimal::from(10),
//!         BigDecimal::from(5),
//!     ),
//!     Voucher::new(
//!         NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
//!         VoucherType::Receipt,
//!         "c1".to_string(),
//!         BigDecimal::from(4),
//!         BigDecimal::from(1),
//!     ),
//! ];
//!
//! let ledger = compute_ledger(&vouchers, &LedgerScope::account("c1")).unwrap();
//! let window = apply_window(&ledger, &DateRange::all());
//! assert_eq!(window.closing.gold, BigDecimal::from(6));
//! ```

pub mod ledger;
pub mod report;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use ledger::*;
pub use report::*;
pub use traits::*;
pub use types::*;
