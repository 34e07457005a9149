//! In-memory voucher source for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;
use crate::utils::validation::{validate_account, validate_voucher};

/// In-memory voucher store
///
/// Vouchers are kept in insertion order, so same-date vouchers come back in
/// the order they were added.
#[derive(Debug, Clone, Default)]
pub struct MemoryVoucherStore {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
    vouchers: Arc<RwLock<Vec<Voucher>>>,
}

fn poisoned<T>(_: T) -> LedgerError {
    LedgerError::Storage("Memory store lock poisoned".to_string())
}

impl MemoryVoucherStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an account
    pub fn add_account(&self, account: Account) -> LedgerResult<()> {
        validate_account(&account)?;

        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let duplicate_sequence = accounts.values().any(|existing| {
            existing.id != account.id
                && existing.account_type == account.account_type
                && existing.sequence_number == account.sequence_number
        });
        if duplicate_sequence {
            return Err(LedgerError::Validation(format!(
                "Sequence number {} is already used by another {:?} account",
                account.sequence_number, account.account_type
            )));
        }

        accounts.insert(account.id.clone(), account);
        Ok(())
    }

    /// Append a voucher to its account's history
    pub fn add_voucher(&self, voucher: Voucher) -> LedgerResult<()> {
        validate_voucher(&voucher)?;

        if !self
            .accounts
            .read()
            .map_err(poisoned)?
            .contains_key(&voucher.account_id)
        {
            return Err(LedgerError::AccountNotFound(voucher.account_id.clone()));
        }

        self.vouchers.write().map_err(poisoned)?.push(voucher);
        Ok(())
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> LedgerResult<()> {
        self.accounts.write().map_err(poisoned)?.clear();
        self.vouchers.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

#[async_trait]
impl VoucherSource for MemoryVoucherStore {
    async fn get_account(&self, account_id: &str) -> LedgerResult<Option<Account>> {
        Ok(self.accounts.read().map_err(poisoned)?.get(account_id).cloned())
    }

    async fn list_accounts(&self, account_type: AccountType) -> LedgerResult<Vec<Account>> {
        let mut accounts: Vec<Account> = self
            .accounts
            .read()
            .map_err(poisoned)?
            .values()
            .filter(|account| account.account_type == account_type)
            .cloned()
            .collect();
        accounts.sort_by_key(|account| account.sequence_number);
        Ok(accounts)
    }

    async fn get_account_vouchers(&self, account_id: &str) -> LedgerResult<Vec<Voucher>> {
        Ok(self
            .vouchers
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|voucher| voucher.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn get_vouchers_for_accounts(&self, account_ids: &[String]) -> LedgerResult<Vec<Voucher>> {
        Ok(self
            .vouchers
            .read()
            .map_err(poisoned)?
            .iter()
            .filter(|voucher| account_ids.contains(&voucher.account_id))
            .cloned()
            .collect())
    }
}
