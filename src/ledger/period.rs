//! Date windows over a computed ledger, with opening and closing balances

use serde::{Deserialize, Serialize};

use crate::types::*;

/// A ledger narrowed to a reporting window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedLedger {
    /// Balance brought forward from before the window
    pub opening: Balance,
    /// Entries dated inside the window, balances untouched
    pub entries: Vec<LedgerEntry>,
    /// Balance at the end of the window
    pub closing: Balance,
}

impl WindowedLedger {
    /// Number of voucher rows in the window
    pub fn transaction_count(&self) -> usize {
        self.entries.len()
    }

    /// Synthetic row placed before the window's entries
    pub fn opening_row(&self, range: &DateRange) -> LedgerEntry {
        LedgerEntry::synthetic(
            EntryKind::OpeningBalance,
            range.start,
            "Opening balance".to_string(),
            &self.opening,
        )
    }

    /// Synthetic row placed after the window's entries
    pub fn closing_row(&self, range: &DateRange) -> LedgerEntry {
        LedgerEntry::synthetic(
            EntryKind::ClosingBalance,
            range.end,
            "Closing balance".to_string(),
            &self.closing,
        )
    }

    /// Synthetic row summing the window's debits and credits
    pub fn totals_row(&self) -> LedgerEntry {
        let mut row = LedgerEntry::synthetic(
            EntryKind::Totals,
            None,
            "Total".to_string(),
            &self.closing,
        );
        row.gold_debit = self.entries.iter().map(|e| &e.gold_debit).sum();
        row.gold_credit = self.entries.iter().map(|e| &e.gold_credit).sum();
        row.monetary_debit = self.entries.iter().map(|e| &e.monetary_debit).sum();
        row.monetary_credit = self.entries.iter().map(|e| &e.monetary_credit).sum();
        row
    }
}

/// Narrow a full ledger to a date range
///
/// The opening balance is the running balance of the last entry dated
/// strictly before `range.start`. The closing balance is that of the last
/// entry inside the range, or the opening balance when nothing falls inside.
/// An inverted range yields an empty window rather than an error.
pub fn apply_window(ledger: &[LedgerEntry], range: &DateRange) -> WindowedLedger {
    let opening = match range.start {
        Some(start) => ledger
            .iter()
            .rev()
            .find(|e| e.date.is_some_and(|date| date < start))
            .map(LedgerEntry::balance)
            .unwrap_or_default(),
        None => Balance::zero(),
    };

    let entries: Vec<LedgerEntry> = if range.is_inverted() {
        tracing::debug!(
            "Inverted date range {:?}..{:?}, window is empty",
            range.start,
            range.end
        );
        Vec::new()
    } else {
        ledger
            .iter()
            .filter(|e| e.date.is_some_and(|date| range.contains(date)))
            .cloned()
            .collect()
    };

    let closing = entries
        .last()
        .map(LedgerEntry::balance)
        .unwrap_or_else(|| opening.clone());

    WindowedLedger {
        opening,
        entries,
        closing,
    }
}

/// Running balance reached at the end of a ledger
pub fn final_balance(ledger: &[LedgerEntry]) -> Balance {
    ledger
        .last()
        .map(LedgerEntry::balance)
        .unwrap_or_default()
}
