//! Accounting rules deciding how each voucher type moves the balances

use bigdecimal::BigDecimal;

use crate::types::*;
use crate::utils::validation::validate_amount;

/// Debit and credit sides of one currency for a single voucher
///
/// At most one side is nonzero.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub debit: BigDecimal,
    pub credit: BigDecimal,
}

impl Movement {
    /// Split a signed delta into its debit or credit side
    pub fn from_delta(delta: &BigDecimal) -> Self {
        let zero = BigDecimal::from(0);
        if *delta >= zero {
            Self {
                debit: delta.clone(),
                credit: zero,
            }
        } else {
            Self {
                debit: zero,
                credit: delta.abs(),
            }
        }
    }

    /// Net change this movement applies to a running balance
    pub fn net(&self) -> BigDecimal {
        &self.debit - &self.credit
    }
}

/// Signed change a voucher applies to the gold and KWD balances
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    pub gold_delta: BigDecimal,
    pub monetary_delta: BigDecimal,
}

impl Effect {
    pub fn gold(&self) -> Movement {
        Movement::from_delta(&self.gold_delta)
    }

    pub fn monetary(&self) -> Movement {
        Movement::from_delta(&self.monetary_delta)
    }
}

/// Apply the accounting policy for a voucher type to its amounts
///
/// | Type              | gold | KWD |
/// |-------------------|------|-----|
/// | Invoice           | +    | +   |
/// | Alloy             | +    | +   |
/// | Receipt           | -    | -   |
/// | GoldFixingVoucher | +    | -   |
///
/// Any other tag is rejected with [`LedgerError::UnknownVoucherType`].
/// Amounts are unsigned magnitudes; a negative one is a
/// [`LedgerError::Validation`] error.
pub fn apply_effect(
    voucher_type: &VoucherType,
    gold_amount: &BigDecimal,
    monetary_amount: &BigDecimal,
) -> LedgerResult<Effect> {
    validate_amount("Gold amount", gold_amount)?;
    validate_amount("Monetary amount", monetary_amount)?;

    let (gold_delta, monetary_delta) = match voucher_type {
        VoucherType::Invoice | VoucherType::Alloy => {
            (gold_amount.clone(), monetary_amount.clone())
        }
        VoucherType::Receipt => (-gold_amount.clone(), -monetary_amount.clone()),
        VoucherType::GoldFixingVoucher => (gold_amount.clone(), -monetary_amount.clone()),
        VoucherType::Unrecognized(tag) => {
            return Err(LedgerError::UnknownVoucherType(tag.clone()));
        }
    };

    Ok(Effect {
        gold_delta,
        monetary_delta,
    })
}

/// Apply the accounting policy to a stored voucher
pub fn voucher_effect(voucher: &Voucher) -> LedgerResult<Effect> {
    apply_effect(
        &voucher.voucher_type,
        &voucher.gold_amount,
        &voucher.monetary_amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn effect(voucher_type: VoucherType) -> Effect {
        apply_effect(&voucher_type, &BigDecimal::from(3), &BigDecimal::from(2)).unwrap()
    }

    #[test]
    fn test_invoice_and_alloy_debit_both() {
        for voucher_type in [VoucherType::Invoice, VoucherType::Alloy] {
            let effect = effect(voucher_type);
            assert_eq!(effect.gold_delta, BigDecimal::from(3));
            assert_eq!(effect.monetary_delta, BigDecimal::from(2));
            assert_eq!(effect.gold().debit, BigDecimal::from(3));
            assert_eq!(effect.gold().credit, BigDecimal::from(0));
        }
    }

    #[test]
    fn test_receipt_credits_both() {
        let effect = effect(VoucherType::Receipt);
        assert_eq!(effect.gold_delta, BigDecimal::from(-3));
        assert_eq!(effect.monetary_delta, BigDecimal::from(-2));

        let gold = effect.gold();
        assert_eq!(gold.debit, BigDecimal::from(0));
        assert_eq!(gold.credit, BigDecimal::from(3));
        assert_eq!(gold.net(), BigDecimal::from(-3));
    }

    #[test]
    fn test_gold_fixing_moves_in_opposite_directions() {
        let effect = effect(VoucherType::GoldFixingVoucher);
        assert_eq!(effect.gold().debit, BigDecimal::from(3));
        assert_eq!(effect.monetary().credit, BigDecimal::from(2));
        assert_eq!(effect.monetary().debit, BigDecimal::from(0));
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let result = apply_effect(
            &VoucherType::Unrecognized("Scrap".to_string()),
            &BigDecimal::from(0),
            &BigDecimal::from(0),
        );
        assert!(matches!(result, Err(LedgerError::UnknownVoucherType(tag)) if tag == "Scrap"));
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let result =
            apply_effect(&VoucherType::Invoice, &BigDecimal::from(-5), &BigDecimal::from(0));
        assert!(matches!(result, Err(LedgerError::Validation(_))));

        let result =
            apply_effect(&VoucherType::Receipt, &BigDecimal::from(1), &BigDecimal::from(-1));
        assert!(matches!(result, Err(LedgerError::Validation(_))));
    }

    #[test]
    fn test_zero_amounts_have_no_side() {
        let effect =
            apply_effect(&VoucherType::Receipt, &BigDecimal::from(0), &BigDecimal::from(0)).unwrap();
        let gold = effect.gold();
        assert_eq!(gold.debit, BigDecimal::from(0));
        assert_eq!(gold.credit, BigDecimal::from(0));
    }
}
