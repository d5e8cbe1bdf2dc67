//! Loan installment drill

/// Canonical two-installment plan
pub const TWO_INSTALLMENTS: u32 = 2;

/// Canonical three-installment plan
pub const THREE_INSTALLMENTS: u32 = 3;

/// Per-installment amount for a principal split evenly across
/// `installments` payments. Zero installments follows float division
/// semantics (infinity), unguarded.
pub fn installment_amount(principal: f64, installments: u32) -> f64 {
    principal / installments as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(installment_amount(1000.0, TWO_INSTALLMENTS), 500.0);
        assert!((installment_amount(1000.0, THREE_INSTALLMENTS) - 1000.0 / 3.0).abs() < 1e-9);
        assert_eq!(installment_amount(1000.0, 5), 200.0);
    }

    #[test]
    fn test_constants_match_literal_counts() {
        assert_eq!(
            installment_amount(1000.0, TWO_INSTALLMENTS),
            installment_amount(1000.0, 2)
        );
        assert_eq!(
            installment_amount(1000.0, THREE_INSTALLMENTS),
            installment_amount(1000.0, 3)
        );
    }

    #[test]
    fn test_zero_installments_is_infinite() {
        assert_eq!(installment_amount(1000.0, 0), f64::INFINITY);
    }

    #[test]
    fn test_negative_principal_propagates() {
        assert_eq!(installment_amount(-1000.0, 2), -500.0);
    }
}
