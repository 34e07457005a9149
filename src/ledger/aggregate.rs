//! Balance summaries across the accounts of one category

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::ledger::period::WindowedLedger;
use crate::types::*;

/// One account's line in a balance summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub account_id: String,
    pub sequence_number: u32,
    pub name: String,
    /// Closing gold balance of the account's window
    pub gold_balance: BigDecimal,
    /// Closing KWD balance of the account's window
    pub monetary_balance: BigDecimal,
    /// Vouchers inside the window
    pub transaction_count: usize,
}

impl AccountSummary {
    pub fn balance(&self) -> Balance {
        Balance::new(self.gold_balance.clone(), self.monetary_balance.clone())
    }
}

/// Per-account rows plus totals for a group of accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Rows in the order the accounts were supplied
    pub accounts: Vec<AccountSummary>,
    pub total_gold: BigDecimal,
    pub total_monetary: BigDecimal,
    pub total_transactions: usize,
    pub accounts_with_positive_gold: usize,
    pub accounts_with_negative_gold: usize,
    pub accounts_with_positive_monetary: usize,
    pub accounts_with_negative_monetary: usize,
    /// Accounts whose gold and KWD balances are both zero
    pub accounts_with_zero_balance: usize,
    /// Accounts with at least one voucher in the window
    pub accounts_with_activity: usize,
}

impl GroupSummary {
    pub fn total_balance(&self) -> Balance {
        Balance::new(self.total_gold.clone(), self.total_monetary.clone())
    }
}

/// Summarise windowed ledgers of several accounts
///
/// Each account contributes its closing balance and its windowed entry count.
/// Balances are summed as-is; nothing is netted between accounts.
pub fn aggregate(groups: &[(Account, WindowedLedger)]) -> GroupSummary {
    let zero = BigDecimal::from(0);

    let accounts: Vec<AccountSummary> = groups
        .iter()
        .map(|(account, window)| AccountSummary {
            account_id: account.id.clone(),
            sequence_number: account.sequence_number,
            name: account.name.clone(),
            gold_balance: window.closing.gold.clone(),
            monetary_balance: window.closing.monetary.clone(),
            transaction_count: window.transaction_count(),
        })
        .collect();

    GroupSummary {
        total_gold: accounts.iter().map(|a| &a.gold_balance).sum(),
        total_monetary: accounts.iter().map(|a| &a.monetary_balance).sum(),
        total_transactions: accounts.iter().map(|a| a.transaction_count).sum(),
        accounts_with_positive_gold: count_where(&accounts, |a| a.gold_balance > zero),
        accounts_with_negative_gold: count_where(&accounts, |a| a.gold_balance < zero),
        accounts_with_positive_monetary: count_where(&accounts, |a| a.monetary_balance > zero),
        accounts_with_negative_monetary: count_where(&accounts, |a| a.monetary_balance < zero),
        accounts_with_zero_balance: count_where(&accounts, |a| a.balance().is_zero()),
        accounts_with_activity: count_where(&accounts, |a| a.transaction_count > 0),
        accounts,
    }
}

fn count_where(accounts: &[AccountSummary], predicate: impl Fn(&AccountSummary) -> bool) -> usize {
    accounts.iter().filter(|a| predicate(a)).count()
}
