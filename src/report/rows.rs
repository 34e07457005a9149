//! Cell text for the rows printed in reports

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::ledger::aggregate::{AccountSummary, GroupSummary};
use crate::ledger::period::WindowedLedger;
use crate::report::config::Column;
use crate::report::paginate::RowSections;
use crate::types::*;

/// A row that can be printed in a report table
pub trait ReportRow {
    /// Text for one cell; empty when the column does not apply
    fn cell(&self, column: Column) -> String;

    /// Signed value behind a balance cell, used to pick its color
    fn balance_value(&self, column: Column) -> Option<&BigDecimal>;

    /// Synthetic rows are printed in bold
    fn is_emphasized(&self) -> bool;
}

/// Amount text at the ledger's fixed precision
pub fn format_amount(amount: &BigDecimal) -> String {
    round_amount(amount).to_string()
}

/// Debit or credit text; zero movements are left blank
fn format_movement(amount: &BigDecimal) -> String {
    if *amount == BigDecimal::from(0) {
        String::new()
    } else {
        format_amount(amount)
    }
}

impl ReportRow for LedgerEntry {
    fn cell(&self, column: Column) -> String {
        match column {
            Column::Date => self.date_label(),
            Column::VoucherType => self
                .voucher_type
                .as_ref()
                .map(|t| t.label().to_string())
                .unwrap_or_default(),
            Column::Description => self.description.clone(),
            Column::GoldDebit => format_movement(&self.gold_debit),
            Column::GoldCredit => format_movement(&self.gold_credit),
            Column::GoldBalance => format_amount(&self.gold_balance),
            Column::MonetaryDebit => format_movement(&self.monetary_debit),
            Column::MonetaryCredit => format_movement(&self.monetary_credit),
            Column::MonetaryBalance => format_amount(&self.monetary_balance),
            Column::SequenceNumber | Column::AccountName | Column::TransactionCount => {
                String::new()
            }
        }
    }

    fn balance_value(&self, column: Column) -> Option<&BigDecimal> {
        match column {
            Column::GoldBalance => Some(&self.gold_balance),
            Column::MonetaryBalance => Some(&self.monetary_balance),
            _ => None,
        }
    }

    fn is_emphasized(&self) -> bool {
        self.is_synthetic()
    }
}

/// Row of a balance summary report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SummaryRow {
    Account(AccountSummary),
    Total {
        gold: BigDecimal,
        monetary: BigDecimal,
        transactions: usize,
    },
}

impl SummaryRow {
    /// Account rows in summary order followed by the totals row
    pub fn sections(summary: &GroupSummary) -> RowSections<SummaryRow> {
        RowSections::new(
            Vec::new(),
            summary
                .accounts
                .iter()
                .cloned()
                .map(SummaryRow::Account)
                .collect(),
            vec![SummaryRow::Total {
                gold: summary.total_gold.clone(),
                monetary: summary.total_monetary.clone(),
                transactions: summary.total_transactions,
            }],
        )
    }
}

impl ReportRow for SummaryRow {
    fn cell(&self, column: Column) -> String {
        match (self, column) {
            (SummaryRow::Account(a), Column::SequenceNumber) => a.sequence_number.to_string(),
            (SummaryRow::Account(a), Column::AccountName) => a.name.clone(),
            (SummaryRow::Account(a), Column::TransactionCount) => a.transaction_count.to_string(),
            (SummaryRow::Total { .. }, Column::AccountName) => "Total".to_string(),
            (SummaryRow::Total { transactions, .. }, Column::TransactionCount) => {
                transactions.to_string()
            }
            (_, Column::GoldBalance | Column::MonetaryBalance) => self
                .balance_value(column)
                .map(format_amount)
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn balance_value(&self, column: Column) -> Option<&BigDecimal> {
        match (self, column) {
            (SummaryRow::Account(a), Column::GoldBalance) => Some(&a.gold_balance),
            (SummaryRow::Account(a), Column::MonetaryBalance) => Some(&a.monetary_balance),
            (SummaryRow::Total { gold, .. }, Column::GoldBalance) => Some(gold),
            (SummaryRow::Total { monetary, .. }, Column::MonetaryBalance) => Some(monetary),
            _ => None,
        }
    }

    fn is_emphasized(&self) -> bool {
        matches!(self, SummaryRow::Total { .. })
    }
}

/// Opening row, window entries, then closing and totals rows
pub fn statement_sections(window: &WindowedLedger, range: &DateRange) -> RowSections<LedgerEntry> {
    RowSections::new(
        vec![window.opening_row(range)],
        window.entries.clone(),
        vec![window.closing_row(range), window.totals_row()],
    )
}
