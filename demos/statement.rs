//! Customer statement example
//!
//! Run with `RUST_LOG=debug cargo run --example statement` to see the
//! ledger and pagination logs.

use bullion_ledger::utils::{MemoryVoucherStore, RecordingCanvas};
use bullion_ledger::{
    paginate, render_report, Account, AccountType, ColumnSet, DateRange, PageConfig,
    ReportHeading, ReportRow, StatementService, SummaryRow, Voucher, VoucherType,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("🪙 Bullion Ledger - Customer Statement Example\n");

    // 1. Set up accounts
    let store = MemoryVoucherStore::new();
    store.add_account(
        Account::new("al-noor".to_string(), 1, "Al Noor Jewellers".to_string(), AccountType::Customer)
            .with_phone("+965 2222 1111".to_string()),
    )?;
    store.add_account(Account::new(
        "zamzam".to_string(),
        2,
        "Zamzam Gold".to_string(),
        AccountType::Customer,
    ))?;

    // 2. Record vouchers
    let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).ok_or("invalid date");
    let amount = |s: &str| BigDecimal::from_str(s);

    store.add_voucher(
        Voucher::new(date(1, 5)?, VoucherType::Invoice, "al-noor".to_string(), amount("125.450")?, amount("310.000")?)
            .with_narrative("INV-1001".to_string()),
    )?;
    store.add_voucher(Voucher::new(
        date(1, 20)?,
        VoucherType::Receipt,
        "al-noor".to_string(),
        amount("50.000")?,
        amount("120.500")?,
    ))?;
    store.add_voucher(Voucher::new(
        date(2, 2)?,
        VoucherType::GoldFixingVoucher,
        "al-noor".to_string(),
        amount("20.000")?,
        amount("380.250")?,
    ))?;
    store.add_voucher(Voucher::new(
        date(2, 9)?,
        VoucherType::Invoice,
        "zamzam".to_string(),
        amount("80.000")?,
        amount("45.000")?,
    ))?;
    store.add_voucher(Voucher::new(
        date(2, 18)?,
        VoucherType::Alloy,
        "al-noor".to_string(),
        amount("1.250")?,
        amount("6.000")?,
    ))?;
    println!("  ✓ Recorded 5 vouchers for 2 customers\n");

    let service = StatementService::new(store);
    let config = PageConfig::default();

    // 3. February statement for one customer
    let statement = service
        .account_statement(
            "al-noor",
            DateRange::between(date(2, 1)?, date(2, 29)?),
        )
        .await?;

    println!("📄 {} ({})", statement.title, statement.heading().subtitle.unwrap_or_default());
    let pages = statement.paginate(&config)?;
    for page in &pages {
        println!("  Page {} of {}", page.page_number, page.total_pages);
        for row in &page.rows {
            let cells: Vec<String> = statement.columns.columns.iter().map(|c| row.cell(*c)).collect();
            println!("    {}", cells.join(" | "));
        }
    }

    let mut canvas = RecordingCanvas::new();
    render_report(&mut canvas, &statement.heading(), &pages, &statement.columns, &config);
    println!("  ✓ Drew {} canvas page(s)\n", canvas.pages().len());

    // 4. Balance summary for all customers
    let summary = service
        .balance_summary(AccountType::Customer, &DateRange::all())
        .await?;
    let columns = ColumnSet::balance_summary(AccountType::Customer.shows_monetary());
    let summary_pages = paginate(SummaryRow::sections(&summary), &config, &columns)?;

    println!("📊 Customer balances");
    for page in &summary_pages {
        for row in &page.rows {
            let cells: Vec<String> = columns.columns.iter().map(|c| row.cell(*c)).collect();
            println!("    {}", cells.join(" | "));
        }
    }
    println!(
        "  Accounts owing gold: {}, settled: {}",
        summary.accounts_with_positive_gold, summary.accounts_with_zero_balance
    );

    let mut summary_canvas = RecordingCanvas::new();
    render_report(
        &mut summary_canvas,
        &ReportHeading::new(AccountType::Customer.label()).with_subtitle("Beginning - Present"),
        &summary_pages,
        &columns,
        &config,
    );

    Ok(())
}
