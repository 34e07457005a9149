//! Running balance computation over an ordered voucher list

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ledger::rules::voucher_effect;
use crate::types::*;

/// The set of vouchers a ledger is computed over
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerScope {
    /// A single account
    Account { account_id: String },
    /// Every account of one category, merged into one running ledger
    AccountType {
        account_type: AccountType,
        account_ids: Vec<String>,
    },
}

impl LedgerScope {
    pub fn account(account_id: impl Into<String>) -> Self {
        LedgerScope::Account {
            account_id: account_id.into(),
        }
    }

    pub fn account_type(account_type: AccountType, accounts: &[Account]) -> Self {
        LedgerScope::AccountType {
            account_type,
            account_ids: accounts.iter().map(|a| a.id.clone()).collect(),
        }
    }

    /// Whether a voucher belongs to this scope
    pub fn includes(&self, voucher: &Voucher) -> bool {
        match self {
            LedgerScope::Account { account_id } => &voucher.account_id == account_id,
            LedgerScope::AccountType { account_ids, .. } => {
                account_ids.iter().any(|id| id == &voucher.account_id)
            }
        }
    }
}

impl fmt::Display for LedgerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LedgerScope::Account { account_id } => write!(f, "account {}", account_id),
            LedgerScope::AccountType {
                account_type,
                account_ids,
            } => write!(f, "{} ({} accounts)", account_type.label(), account_ids.len()),
        }
    }
}

/// Compute the running gold and KWD ledger for a scope
///
/// Vouchers are ordered by date; vouchers sharing a date keep the order they
/// were supplied in. Each entry carries the balances after applying its
/// voucher, starting from zero. An unrecognized voucher type or a negative
/// amount aborts the whole computation.
pub fn compute_ledger(vouchers: &[Voucher], scope: &LedgerScope) -> LedgerResult<Vec<LedgerEntry>> {
    let mut in_scope: Vec<&Voucher> = vouchers.iter().filter(|v| scope.includes(v)).collect();

    let excluded = vouchers.len() - in_scope.len();
    if excluded > 0 {
        tracing::debug!("Skipped {} vouchers outside {}", excluded, scope);
    }

    // stable: same-date vouchers stay in insertion order
    in_scope.sort_by_key(|v| v.date);

    let mut gold_balance = BigDecimal::from(0);
    let mut monetary_balance = BigDecimal::from(0);
    let mut entries = Vec::with_capacity(in_scope.len());

    for voucher in in_scope {
        let effect = voucher_effect(voucher).inspect_err(|e| {
            tracing::warn!("Voucher {} rejected, ledger not computed: {}", voucher.id, e);
        })?;
        let gold = effect.gold();
        let monetary = effect.monetary();

        gold_balance += gold.net();
        monetary_balance += monetary.net();

        entries.push(LedgerEntry {
            source_voucher_id: Some(voucher.id.clone()),
            account_id: Some(voucher.account_id.clone()),
            date: Some(voucher.date),
            voucher_type: Some(voucher.voucher_type.clone()),
            description: describe(voucher),
            gold_debit: gold.debit,
            gold_credit: gold.credit,
            gold_balance: gold_balance.clone(),
            monetary_debit: monetary.debit,
            monetary_credit: monetary.credit,
            monetary_balance: monetary_balance.clone(),
            kind: EntryKind::Voucher,
        });
    }

    Ok(entries)
}

fn describe(voucher: &Voucher) -> String {
    match &voucher.narrative {
        Some(narrative) if !narrative.trim().is_empty() => narrative.clone(),
        _ => voucher.voucher_type.to_string(),
    }
}
