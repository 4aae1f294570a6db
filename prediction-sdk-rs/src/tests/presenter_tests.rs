//! Tests for result presentation

#[cfg(test)]
mod tests {
    use crate::presenter::{format_currency, ConfidenceDisplay, CRORE, LAKH, ZERO_CURRENCY};

    #[test]
    fn test_known_amounts() {
        assert_eq!(format_currency(Some(12_345_678.0)), "₹ 1.23 Cr");
        assert_eq!(format_currency(Some(850_000.0)), "₹ 8.50 Lakh");
        assert_eq!(format_currency(Some(45_000.0)), "₹ 45,000");
        assert_eq!(format_currency(Some(0.0)), ZERO_CURRENCY);
        assert_eq!(format_currency(None), ZERO_CURRENCY);
    }

    #[test]
    fn test_crore_branch_matches_scaled_value() {
        for amount in [1.0e7, 1.5e7, 2.25e7, 9.87654321e8, 1.0e10] {
            let text = format_currency(Some(amount));
            assert!(text.ends_with(" Cr"), "{}", text);
            assert_eq!(text, format!("₹ {:.2} Cr", ((amount / CRORE) * 100.0).round() / 100.0));
        }
    }

    #[test]
    fn test_lakh_branch_matches_scaled_value() {
        for amount in [1.0e5, 2.5e5, 4.2e6, 9.5e6] {
            let text = format_currency(Some(amount));
            assert!(text.ends_with(" Lakh"), "{}", text);
            assert_eq!(text, format!("₹ {:.2} Lakh", ((amount / LAKH) * 100.0).round() / 100.0));
        }
    }

    #[test]
    fn test_every_branch_has_rupee_prefix() {
        for amount in [None, Some(12.0), Some(45_000.0), Some(850_000.0), Some(1.0e8), Some(f64::NAN)] {
            assert!(format_currency(amount).starts_with("₹ "));
        }
    }

    #[test]
    fn test_confidence() {
        let display = ConfidenceDisplay::from_score(0.73);
        assert_eq!(display.label, "73%");
        assert_eq!(display.width_fraction, 0.73);
    }
}
