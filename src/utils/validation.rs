//! Validation utilities

use bigdecimal::BigDecimal;

use crate::types::*;

/// Validate that an amount is non-negative and kept at three decimals
pub fn validate_amount(name: &str, amount: &BigDecimal) -> LedgerResult<()> {
    if *amount < BigDecimal::from(0) {
        return Err(LedgerError::Validation(format!(
            "{} cannot be negative",
            name
        )));
    }

    if round_amount(amount) != *amount {
        return Err(LedgerError::Validation(format!(
            "{} has more than {} decimal places",
            name, AMOUNT_SCALE
        )));
    }

    Ok(())
}

/// Validate that an account ID is valid
pub fn validate_account_id(account_id: &str) -> LedgerResult<()> {
    if account_id.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account ID cannot be empty".to_string(),
        ));
    }

    if account_id.len() > 50 {
        return Err(LedgerError::Validation(
            "Account ID cannot exceed 50 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate an account before it is stored
pub fn validate_account(account: &Account) -> LedgerResult<()> {
    validate_account_id(&account.id)?;

    if account.name.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Account name cannot be empty".to_string(),
        ));
    }

    if account.name.len() > 100 {
        return Err(LedgerError::Validation(
            "Account name cannot exceed 100 characters".to_string(),
        ));
    }

    if let Some(phone) = &account.phone {
        if !phone
            .chars()
            .all(|c| c.is_ascii_digit() || c == '+' || c == ' ' || c == '-')
        {
            return Err(LedgerError::Validation(format!(
                "Phone number '{}' contains invalid characters",
                phone
            )));
        }
    }

    Ok(())
}

/// Validate a voucher before it is stored
///
/// The voucher type is not checked here: unrecognized types are refused when
/// a ledger is computed, so stored data with a bad tag still surfaces.
pub fn validate_voucher(voucher: &Voucher) -> LedgerResult<()> {
    if voucher.id.trim().is_empty() {
        return Err(LedgerError::Validation(
            "Voucher ID cannot be empty".to_string(),
        ));
    }

    validate_account_id(&voucher.account_id)?;
    validate_amount("Gold amount", &voucher.gold_amount)?;
    validate_amount("Monetary amount", &voucher.monetary_amount)?;

    if let Some(quantity) = &voucher.quantity {
        if *quantity < BigDecimal::from(0) {
            return Err(LedgerError::Validation(
                "Quantity cannot be negative".to_string(),
            ));
        }
    }

    Ok(())
}
