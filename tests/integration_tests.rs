//! Integration tests for bullion-ledger

use bullion_ledger::{
    aggregate, apply_window, compute_ledger, paginate, render_report,
    utils::{MemoryVoucherStore, RecordingCanvas},
    Account, AccountType, Balance, ColumnSet, DateRange, LedgerError, LedgerScope, PageConfig,
    RowSections, StatementService, SummaryRow, Voucher, VoucherType,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap()
}

fn voucher(account_id: &str, day: NaiveDate, voucher_type: VoucherType, gold: i32, kwd: i32) -> Voucher {
    Voucher::new(
        day,
        voucher_type,
        account_id.to_string(),
        BigDecimal::from(gold),
        BigDecimal::from(kwd),
    )
}

fn balance(gold: i32, kwd: i32) -> Balance {
    Balance::new(BigDecimal::from(gold), BigDecimal::from(kwd))
}

/// Three customers with vouchers spread over January to March
fn seeded_store() -> MemoryVoucherStore {
    let store = MemoryVoucherStore::new();

    store
        .add_account(
            Account::new("al-noor".to_string(), 1, "Al Noor Jewellers".to_string(), AccountType::Customer)
                .with_phone("+965 2222 1111".to_string()),
        )
        .unwrap();
    store
        .add_account(Account::new("zamzam".to_string(), 2, "Zamzam Gold".to_string(), AccountType::Customer))
        .unwrap();
    store
        .add_account(Account::new("idle".to_string(), 3, "Idle Trader".to_string(), AccountType::Customer))
        .unwrap();
    store
        .add_account(Account::new("karat".to_string(), 1, "Karat Refinery".to_string(), AccountType::Supplier))
        .unwrap();

    let vouchers = [
        voucher("al-noor", date(1, 5), VoucherType::Invoice, 100, 50),
        voucher("zamzam", date(1, 12), VoucherType::Invoice, 40, 20),
        voucher("al-noor", date(1, 25), VoucherType::Receipt, 30, 10),
        voucher("al-noor", date(2, 3), VoucherType::GoldFixingVoucher, 5, 15),
        voucher("zamzam", date(2, 14), VoucherType::Receipt, 50, 5),
        voucher("al-noor", date(2, 20), VoucherType::Alloy, 2, 1),
        voucher("al-noor", date(3, 10), VoucherType::Receipt, 20, 20),
        voucher("karat", date(2, 1), VoucherType::Invoice, 500, 0),
    ];
    for v in vouchers {
        store.add_voucher(v).unwrap();
    }

    store
}

#[tokio::test]
async fn test_february_statement_for_one_account() {
    let service = StatementService::new(seeded_store());
    let statement = service
        .account_statement("al-noor", DateRange::between(date(2, 1), date(2, 29)))
        .await
        .unwrap();

    // January: +100/+50, -30/-10
    assert_eq!(statement.window.opening, balance(70, 40));
    assert_eq!(statement.window.entries.len(), 2);
    // February: GFV +5/-15, Alloy +2/+1
    assert_eq!(statement.window.closing, balance(77, 26));

    let rows = statement.rows();
    assert!(rows.leading[0].is_opening_balance());
    assert!(rows.trailing[0].is_closing_balance());
    assert_eq!(rows.trailing[1].gold_debit, BigDecimal::from(7));
    assert_eq!(rows.trailing[1].monetary_credit, BigDecimal::from(15));

    let pages = statement.paginate(&PageConfig::default()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].rows.len(), 5);
}

#[tokio::test]
async fn test_type_statement_merges_accounts_chronologically() {
    let service = StatementService::new(seeded_store());
    let statement = service
        .type_statement(AccountType::Customer, DateRange::all())
        .await
        .unwrap();

    let dates: Vec<_> = statement.window.entries.iter().map(|e| e.date.unwrap()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(statement.window.entries.len(), 7);
    assert!(statement.window.entries[1]
        .description
        .starts_with("Zamzam Gold: "));

    // 77 - 20 = 57 gold for Al Noor, -10 for Zamzam
    assert_eq!(statement.window.closing, balance(47, 21));
}

#[tokio::test]
async fn test_balance_summary_matches_individual_statements() {
    let service = StatementService::new(seeded_store());
    let range = DateRange::new(None, Some(date(2, 29)));

    let summary = service
        .balance_summary(AccountType::Customer, &range)
        .await
        .unwrap();

    let names: Vec<_> = summary.accounts.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Al Noor Jewellers", "Zamzam Gold", "Idle Trader"]);

    let mut expected_gold = BigDecimal::from(0);
    for account in &summary.accounts {
        let statement = service
            .account_statement(&account.account_id, range)
            .await
            .unwrap();
        assert_eq!(statement.window.closing.gold, account.gold_balance);
        expected_gold += &statement.window.closing.gold;
    }

    assert_eq!(summary.total_gold, expected_gold);
    assert_eq!(summary.total_gold, BigDecimal::from(67));
    assert_eq!(summary.total_transactions, 6);
    assert_eq!(summary.accounts_with_negative_gold, 1);
    assert_eq!(summary.accounts_with_zero_balance, 1);
    assert_eq!(summary.accounts_with_activity, 2);
}

#[tokio::test]
async fn test_unknown_voucher_type_surfaces_from_service() {
    let store = seeded_store();
    store
        .add_voucher(voucher("zamzam", date(2, 20), VoucherType::from("Scrap"), 1, 1))
        .unwrap();
    let service = StatementService::new(store);

    let result = service.account_statement("zamzam", DateRange::all()).await;
    assert!(matches!(result, Err(LedgerError::UnknownVoucherType(tag)) if tag == "Scrap"));

    let summary = service
        .balance_summary(AccountType::Customer, &DateRange::all())
        .await;
    assert!(summary.is_err());

    // other accounts are unaffected
    assert!(service
        .account_statement("al-noor", DateRange::all())
        .await
        .is_ok());
}

#[tokio::test]
async fn test_empty_scope_still_has_balance_rows() {
    let service = StatementService::new(seeded_store());
    let statement = service
        .account_statement("idle", DateRange::between(date(1, 1), date(12, 31)))
        .await
        .unwrap();

    assert!(statement.window.entries.is_empty());
    assert!(statement.window.opening.is_zero());
    assert!(statement.window.closing.is_zero());

    let rows = statement.rows();
    assert_eq!(rows.leading.len(), 1);
    assert_eq!(rows.trailing.len(), 2);
}

#[test]
fn test_thirty_seven_rows_over_two_pages() {
    let vouchers: Vec<Voucher> = (0..37)
        .map(|i| voucher("c1", date(1, 1) + chrono::Days::new(i), VoucherType::Invoice, 1, 1))
        .collect();
    let ledger = compute_ledger(&vouchers, &LedgerScope::account("c1")).unwrap();
    let range = DateRange::all();
    let window = apply_window(&ledger, &range);

    let defaults = PageConfig::default();
    let config = PageConfig {
        page_height: defaults.margin_top
            + defaults.margin_bottom
            + defaults.title_height
            + defaults.header_height
            + defaults.footer_height
            + 20.0 * defaults.row_height,
        ..defaults
    };
    assert_eq!(config.rows_per_page().unwrap(), 20);

    let sections = RowSections::new(
        vec![window.opening_row(&range)],
        window.entries.clone(),
        vec![window.closing_row(&range), window.totals_row()],
    );
    let pages = paginate(sections, &config, &ColumnSet::statement(true)).unwrap();

    assert_eq!(pages.len(), 2);
    assert!(pages[0].rows[0].is_opening_balance());
    assert_eq!(pages[0].rows.iter().filter(|r| !r.is_synthetic()).count(), 19);
    assert_eq!(pages[1].rows.iter().filter(|r| !r.is_synthetic()).count(), 18);
    assert!(pages[1].rows[18].is_closing_balance());
    assert_eq!(pages[1].rows[19].gold_debit, BigDecimal::from(37));
    assert!(pages.iter().all(|p| p.total_pages == 2));
}

#[test]
fn test_page_too_small_is_reported() {
    let config = PageConfig {
        row_height: 500.0,
        ..PageConfig::default()
    };
    let result = paginate(
        RowSections::body_only(vec![1, 2, 3]),
        &config,
        &ColumnSet::statement(true),
    );
    assert!(matches!(result, Err(LedgerError::PageTooSmall { .. })));
}

#[tokio::test]
async fn test_render_statement_and_summary() {
    let service = StatementService::new(seeded_store());
    let config = PageConfig::default();

    let statement = service
        .account_statement("al-noor", DateRange::all())
        .await
        .unwrap();
    let pages = statement.paginate(&config).unwrap();
    let mut canvas = RecordingCanvas::new();
    let handles = render_report(&mut canvas, &statement.heading(), &pages, &statement.columns, &config);

    assert_eq!(handles.len(), pages.len());
    let texts = canvas.texts(0);
    assert!(texts.contains(&"1 - Al Noor Jewellers".to_string()));
    assert!(texts.contains(&"Beginning - Present".to_string()));
    assert!(texts.contains(&"Gold Balance".to_string()));
    assert!(texts.contains(&"57.000".to_string()));
    assert_eq!(canvas.pages()[0].width, config.page_width);

    let summary = service
        .balance_summary(AccountType::Customer, &DateRange::all())
        .await
        .unwrap();
    let columns = ColumnSet::balance_summary(AccountType::Customer.shows_monetary());
    let summary_pages = paginate(SummaryRow::sections(&summary), &config, &columns).unwrap();
    let mut summary_canvas = RecordingCanvas::new();
    render_report(
        &mut summary_canvas,
        &statement.heading(),
        &summary_pages,
        &columns,
        &config,
    );
    assert!(summary_canvas.texts(0).contains(&"Zamzam Gold".to_string()));
    assert!(summary_canvas.texts(0).contains(&"Total".to_string()));
}

#[test]
fn test_aggregate_over_windows() {
    let accounts = [
        Account::new("a".to_string(), 1, "A".to_string(), AccountType::Locker),
        Account::new("b".to_string(), 2, "B".to_string(), AccountType::Locker),
    ];
    let vouchers = vec![
        voucher("a", date(1, 1), VoucherType::Invoice, 3, 0),
        voucher("b", date(1, 2), VoucherType::Receipt, 1, 0),
    ];

    let groups: Vec<_> = accounts
        .iter()
        .map(|account| {
            let ledger = compute_ledger(&vouchers, &LedgerScope::account(account.id.clone())).unwrap();
            (account.clone(), apply_window(&ledger, &DateRange::all()))
        })
        .collect();
    let summary = aggregate(&groups);

    assert_eq!(summary.total_gold, BigDecimal::from(2));
    assert_eq!(summary.accounts_with_positive_gold, 1);
    assert_eq!(summary.accounts_with_negative_gold, 1);
}
