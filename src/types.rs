//! Core types and data structures for the voucher ledger

use bigdecimal::{BigDecimal, RoundingMode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places every gold and KWD amount is kept at
pub const AMOUNT_SCALE: i64 = 3;

/// Round an amount to the ledger's fixed precision
pub fn round_amount(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(AMOUNT_SCALE, RoundingMode::HalfUp)
}

/// Voucher types recognised by the accounting rules
///
/// Tags read from storage that match none of the known types are kept as
/// `Unrecognized` so the ledger can refuse them instead of treating them as
/// zero-effect vouchers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum VoucherType {
    /// Sale to the account: gold and KWD owed increase
    Invoice,
    /// Payment received: gold and KWD owed decrease
    Receipt,
    /// Gold price fixing: gold owed increases while KWD owed decreases
    GoldFixingVoucher,
    /// Alloy charged to the account
    Alloy,
    /// A stored tag outside the closed set
    Unrecognized(String),
}

impl VoucherType {
    /// Canonical tag for this voucher type
    pub fn as_str(&self) -> &str {
        match self {
            VoucherType::Invoice => "Invoice",
            VoucherType::Receipt => "Receipt",
            VoucherType::GoldFixingVoucher => "GoldFixingVoucher",
            VoucherType::Alloy => "Alloy",
            VoucherType::Unrecognized(tag) => tag,
        }
    }

    /// Short label used in printed statements
    pub fn label(&self) -> &str {
        match self {
            VoucherType::Invoice => "INV",
            VoucherType::Receipt => "REC",
            VoucherType::GoldFixingVoucher => "GFV",
            VoucherType::Alloy => "ALY",
            VoucherType::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, VoucherType::Unrecognized(_))
    }
}

impl From<&str> for VoucherType {
    fn from(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "invoice" | "inv" => VoucherType::Invoice,
            "receipt" | "rec" => VoucherType::Receipt,
            "goldfixingvoucher" | "gold_fixing" | "gfv" => VoucherType::GoldFixingVoucher,
            "alloy" | "aly" => VoucherType::Alloy,
            _ => VoucherType::Unrecognized(tag.to_string()),
        }
    }
}

impl From<String> for VoucherType {
    fn from(tag: String) -> Self {
        VoucherType::from(tag.as_str())
    }
}

impl From<VoucherType> for String {
    fn from(voucher_type: VoucherType) -> Self {
        voucher_type.as_str().to_string()
    }
}

impl fmt::Display for VoucherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account categories kept by the firm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccountType {
    /// Retail and wholesale buyers
    Customer,
    /// Bullion and stone suppliers
    Supplier,
    /// Goldsmiths working on consignment
    Worker,
    /// Manufacturing projects, tracked in gold only
    Project,
    /// Gold held in safekeeping lockers
    Locker,
    /// Anything else
    General,
}

impl AccountType {
    /// Whether statements for this category carry the KWD column triple
    pub fn shows_monetary(&self) -> bool {
        !matches!(self, AccountType::Project)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Customer => "Customers",
            AccountType::Supplier => "Suppliers",
            AccountType::Worker => "Workers",
            AccountType::Project => "Projects",
            AccountType::Locker => "Lockers",
            AccountType::General => "General",
        }
    }
}

/// An account owning a sequence of vouchers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: String,
    /// Number unique within the account's type, used for ordering
    pub sequence_number: u32,
    /// Human-readable account name
    pub name: String,
    /// Category of the account
    pub account_type: AccountType,
    pub phone: Option<String>,
    /// Civil ID or commercial registration number
    pub identity_number: Option<String>,
}

impl Account {
    /// Create a new account without contact details
    pub fn new(id: String, sequence_number: u32, name: String, account_type: AccountType) -> Self {
        Self {
            id,
            sequence_number,
            name,
            account_type,
            phone: None,
            identity_number: None,
        }
    }

    pub fn with_phone(mut self, phone: String) -> Self {
        self.phone = Some(phone);
        self
    }

    pub fn with_identity_number(mut self, identity_number: String) -> Self {
        self.identity_number = Some(identity_number);
        self
    }
}

/// A single dated transaction against one account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voucher {
    /// Opaque unique identifier
    pub id: String,
    /// Day the voucher is booked on
    pub date: NaiveDate,
    /// Type tag deciding the direction of both amounts
    pub voucher_type: VoucherType,
    /// Owning account
    pub account_id: String,
    /// Gold weight, never negative
    pub gold_amount: BigDecimal,
    /// KWD amount, never negative
    pub monetary_amount: BigDecimal,
    pub quantity: Option<BigDecimal>,
    /// Free text or an external voucher number
    pub narrative: Option<String>,
}

impl Voucher {
    /// Create a new voucher with a generated identifier
    ///
    /// Amounts are rounded to three decimal places.
    pub fn new(
        date: NaiveDate,
        voucher_type: VoucherType,
        account_id: String,
        gold_amount: BigDecimal,
        monetary_amount: BigDecimal,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            date,
            voucher_type,
            account_id,
            gold_amount: round_amount(&gold_amount),
            monetary_amount: round_amount(&monetary_amount),
            quantity: None,
            narrative: None,
        }
    }

    /// Replace the generated identifier with a stored one
    pub fn with_id(mut self, id: String) -> Self {
        self.id = id;
        self
    }

    pub fn with_quantity(mut self, quantity: BigDecimal) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_narrative(mut self, narrative: String) -> Self {
        self.narrative = Some(narrative);
        self
    }
}

/// A gold and KWD balance pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub gold: BigDecimal,
    pub monetary: BigDecimal,
}

impl Balance {
    pub fn new(gold: BigDecimal, monetary: BigDecimal) -> Self {
        Self { gold, monetary }
    }

    pub fn zero() -> Self {
        Self::new(BigDecimal::from(0), BigDecimal::from(0))
    }

    pub fn is_zero(&self) -> bool {
        self.gold == BigDecimal::from(0) && self.monetary == BigDecimal::from(0)
    }
}

impl Default for Balance {
    fn default() -> Self {
        Self::zero()
    }
}

/// Inclusive reporting window; a missing bound is unbounded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Range covering the whole history
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(Some(start), Some(end))
    }

    /// True when both bounds are present and start falls after end
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if start > end)
    }

    /// Whether a date falls inside the range
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| start <= date) && self.end.is_none_or(|end| date <= end)
    }
}

/// What a ledger row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// Row derived from a stored voucher
    Voucher,
    /// Synthetic balance brought forward into a window
    OpeningBalance,
    /// Synthetic balance carried out of a window
    ClosingBalance,
    /// Synthetic sum of the window's debits and credits
    Totals,
}

/// A derived ledger row carrying running balances
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Voucher this row was derived from, `None` for synthetic rows
    pub source_voucher_id: Option<String>,
    pub account_id: Option<String>,
    /// Booking date; synthetic rows on an open bound have none
    pub date: Option<NaiveDate>,
    pub voucher_type: Option<VoucherType>,
    pub description: String,
    pub gold_debit: BigDecimal,
    pub gold_credit: BigDecimal,
    /// Cumulative gold balance after this row
    pub gold_balance: BigDecimal,
    pub monetary_debit: BigDecimal,
    pub monetary_credit: BigDecimal,
    /// Cumulative KWD balance after this row
    pub monetary_balance: BigDecimal,
    pub kind: EntryKind,
}

impl LedgerEntry {
    /// Build a synthetic row that only carries a balance
    pub fn synthetic(
        kind: EntryKind,
        date: Option<NaiveDate>,
        description: String,
        balance: &Balance,
    ) -> Self {
        Self {
            source_voucher_id: None,
            account_id: None,
            date,
            voucher_type: None,
            description,
            gold_debit: BigDecimal::from(0),
            gold_credit: BigDecimal::from(0),
            gold_balance: balance.gold.clone(),
            monetary_debit: BigDecimal::from(0),
            monetary_credit: BigDecimal::from(0),
            monetary_balance: balance.monetary.clone(),
            kind,
        }
    }

    pub fn balance(&self) -> Balance {
        Balance::new(self.gold_balance.clone(), self.monetary_balance.clone())
    }

    pub fn is_opening_balance(&self) -> bool {
        self.kind == EntryKind::OpeningBalance
    }

    pub fn is_closing_balance(&self) -> bool {
        self.kind == EntryKind::ClosingBalance
    }

    pub fn is_synthetic(&self) -> bool {
        self.kind != EntryKind::Voucher
    }

    /// Date column text, falling back to the open-bound sentinels
    pub fn date_label(&self) -> String {
        match (self.date, self.kind) {
            (Some(date), _) => date.format("%d/%m/%Y").to_string(),
            (None, EntryKind::OpeningBalance) => "Beginning".to_string(),
            (None, EntryKind::ClosingBalance) => "Present".to_string(),
            (None, _) => String::new(),
        }
    }
}

/// Errors that can occur while computing or laying out a ledger
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Unknown voucher type: {0}")]
    UnknownVoucherType(String),
    #[error("Page too small: usable height {usable_height} fits no row of height {row_height}")]
    PageTooSmall { usable_height: f64, row_height: f64 },
    #[error("Invalid page configuration: {0}")]
    InvalidPageConfig(String),
    #[error("Account not found: {0}")]
    AccountNotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_voucher_type_tags() {
        assert_eq!(VoucherType::from("Invoice"), VoucherType::Invoice);
        assert_eq!(VoucherType::from("gfv"), VoucherType::GoldFixingVoucher);
        assert_eq!(VoucherType::from(" ALY "), VoucherType::Alloy);
        assert_eq!(
            VoucherType::from("Transfer"),
            VoucherType::Unrecognized("Transfer".to_string())
        );
        assert!(!VoucherType::from("Transfer").is_recognized());
    }

    #[test]
    fn test_voucher_type_serde_keeps_unknown_tags() {
        let json = serde_json::to_string(&VoucherType::Receipt).unwrap();
        assert_eq!(json, "\"Receipt\"");

        let parsed: VoucherType = serde_json::from_str("\"Scrap\"").unwrap();
        assert_eq!(parsed, VoucherType::Unrecognized("Scrap".to_string()));
    }

    #[test]
    fn test_voucher_rounds_amounts() {
        let voucher = Voucher::new(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            VoucherType::Invoice,
            "c1".to_string(),
            BigDecimal::from_str("1.23456").unwrap(),
            BigDecimal::from_str("0.0005").unwrap(),
        );

        assert_eq!(voucher.gold_amount, BigDecimal::from_str("1.235").unwrap());
        assert_eq!(voucher.monetary_amount, BigDecimal::from_str("0.001").unwrap());
        assert!(!voucher.id.is_empty());
    }

    #[test]
    fn test_date_range_contains() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        let range = DateRange::new(Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()), None);

        assert!(!range.contains(jan));
        assert!(range.contains(feb));
        assert!(DateRange::all().contains(jan));
        assert!(DateRange::between(feb, jan).is_inverted());
    }

    #[test]
    fn test_synthetic_row_labels() {
        let opening =
            LedgerEntry::synthetic(EntryKind::OpeningBalance, None, "Opening".to_string(), &Balance::zero());
        let closing =
            LedgerEntry::synthetic(EntryKind::ClosingBalance, None, "Closing".to_string(), &Balance::zero());

        assert_eq!(opening.date_label(), "Beginning");
        assert_eq!(closing.date_label(), "Present");
        assert!(opening.is_opening_balance() && !opening.is_closing_balance());
        assert!(closing.is_synthetic());
    }

    #[test]
    fn test_project_accounts_hide_monetary() {
        assert!(!AccountType::Project.shows_monetary());
        assert!(AccountType::Customer.shows_monetary());
    }
}
