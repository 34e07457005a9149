//! Statement service that fetches vouchers and runs the ledger pipeline

use serde::{Deserialize, Serialize};

use crate::ledger::aggregate::{aggregate, GroupSummary};
use crate::ledger::period::{apply_window, WindowedLedger};
use crate::ledger::running::{compute_ledger, LedgerScope};
use crate::report::{
    paginate, statement_sections, ColumnSet, PageConfig, ReportHeading, ReportPage, RowSections,
};
use crate::traits::*;
use crate::types::*;

/// A windowed running-balance statement ready for layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub title: String,
    pub account_type: AccountType,
    /// Set for single-account statements
    pub account: Option<Account>,
    pub range: DateRange,
    pub window: WindowedLedger,
    pub columns: ColumnSet,
}

impl Statement {
    /// Opening row, voucher rows, closing and totals rows
    pub fn rows(&self) -> RowSections<LedgerEntry> {
        statement_sections(&self.window, &self.range)
    }

    pub fn paginate(&self, config: &PageConfig) -> LedgerResult<Vec<ReportPage<LedgerEntry>>> {
        paginate(self.rows(), config, &self.columns)
    }

    /// Title block naming the scope and the period
    pub fn heading(&self) -> ReportHeading {
        ReportHeading::new(self.title.clone()).with_subtitle(period_label(&self.range))
    }
}

/// Human-readable period, e.g. "01/02/2024 - 29/02/2024"
pub fn period_label(range: &DateRange) -> String {
    let bound = |date: Option<chrono::NaiveDate>, open: &str| {
        date.map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| open.to_string())
    };
    format!(
        "{} - {}",
        bound(range.start, "Beginning"),
        bound(range.end, "Present")
    )
}

/// Produces statements and summaries from a voucher source
///
/// Every call fetches a fresh snapshot and recomputes the ledger from
/// scratch; nothing is cached between requests.
pub struct StatementService<S: VoucherSource> {
    source: S,
}

impl<S: VoucherSource> StatementService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    async fn account_required(&self, account_id: &str) -> LedgerResult<Account> {
        self.source
            .get_account(account_id)
            .await?
            .ok_or_else(|| LedgerError::AccountNotFound(account_id.to_string()))
    }

    /// Window the full ledger of one account
    pub async fn account_window(
        &self,
        account_id: &str,
        range: &DateRange,
    ) -> LedgerResult<WindowedLedger> {
        let vouchers = self.source.get_account_vouchers(account_id).await?;
        let ledger = compute_ledger(&vouchers, &LedgerScope::account(account_id))?;
        Ok(apply_window(&ledger, range))
    }

    /// Statement of a single account
    pub async fn account_statement(
        &self,
        account_id: &str,
        range: DateRange,
    ) -> LedgerResult<Statement> {
        let account = self.account_required(account_id).await?;
        let window = self.account_window(account_id, &range).await?;

        tracing::debug!(
            "Statement for account {} has {} entries",
            account.id,
            window.transaction_count()
        );

        Ok(Statement {
            title: format!("{} - {}", account.sequence_number, account.name),
            account_type: account.account_type,
            columns: ColumnSet::statement(account.account_type.shows_monetary()),
            account: Some(account),
            range,
            window,
        })
    }

    /// One running ledger across every account of a category
    ///
    /// Descriptions are prefixed with the account name so rows from
    /// different accounts stay distinguishable.
    pub async fn type_statement(
        &self,
        account_type: AccountType,
        range: DateRange,
    ) -> LedgerResult<Statement> {
        let accounts = self.source.list_accounts(account_type).await?;
        let scope = LedgerScope::account_type(account_type, &accounts);
        let account_ids: Vec<String> = accounts.iter().map(|a| a.id.clone()).collect();
        let vouchers = self.source.get_vouchers_for_accounts(&account_ids).await?;

        let mut ledger = compute_ledger(&vouchers, &scope)?;
        for entry in &mut ledger {
            let name = entry
                .account_id
                .as_ref()
                .and_then(|id| accounts.iter().find(|a| &a.id == id))
                .map(|a| a.name.as_str());
            if let Some(name) = name {
                entry.description = format!("{}: {}", name, entry.description);
            }
        }
        let window = apply_window(&ledger, &range);

        tracing::debug!(
            "Statement for {} accounts of type {:?} has {} entries",
            accounts.len(),
            account_type,
            window.transaction_count()
        );

        Ok(Statement {
            title: account_type.label().to_string(),
            account_type,
            account: None,
            range,
            window,
            columns: ColumnSet::statement(account_type.shows_monetary()),
        })
    }

    /// Closing balances of every account of a category
    pub async fn balance_summary(
        &self,
        account_type: AccountType,
        range: &DateRange,
    ) -> LedgerResult<GroupSummary> {
        let accounts = self.source.list_accounts(account_type).await?;

        let mut groups = Vec::with_capacity(accounts.len());
        for account in accounts {
            let window = self.account_window(&account.id, range).await?;
            groups.push((account, window));
        }

        Ok(aggregate(&groups))
    }
}
