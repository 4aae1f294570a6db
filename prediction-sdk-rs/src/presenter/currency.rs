//! Indian currency formatting
//!
//! Large amounts are scaled to crore (1,00,00,000) or lakh (1,00,000) with two
//! decimals; smaller amounts are printed whole with South Asian digit
//! grouping (last three digits, then groups of two).

/// Shown for absent, zero or non-finite amounts
pub const ZERO_CURRENCY: &str = "₹ 0";

pub const CRORE: f64 = 10_000_000.0;
pub const LAKH: f64 = 100_000.0;

/// Format a rupee amount for display
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = match amount {
        Some(a) if a != 0.0 && a.is_finite() => a,
        _ => return ZERO_CURRENCY.to_string(),
    };

    if amount >= CRORE {
        format!("₹ {:.2} Cr", round_to_cents(amount / CRORE))
    } else if amount >= LAKH {
        format!("₹ {:.2} Lakh", round_to_cents(amount / LAKH))
    } else {
        // `as` saturates, so amounts beyond i64 cannot wrap
        format!("₹ {}", group_indian_digits(amount.round() as i64))
    }
}

/// Unit price line, e.g. `₹12500/sq.ft.`
pub fn format_price_per_sqft(price_per_sqft: f64) -> String {
    format!("₹{:.0}/sq.ft.", price_per_sqft.round())
}

/// Group digits the South Asian way: `12345678` becomes `1,23,45,678`
pub fn group_indian_digits(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let sign = if n < 0 { "-" } else { "" };

    if digits.len() <= 3 {
        return format!("{}{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);

    // Pairs are counted from the right, so an odd-length head starts with a single digit
    let first = head.len() % 2;
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    if first > 0 {
        groups.push(&head[..first]);
    }
    groups.extend(
        head.as_bytes()[first..]
            .chunks(2)
            .filter_map(|pair| std::str::from_utf8(pair).ok()),
    );
    groups.push(tail);

    format!("{}{}", sign, groups.join(","))
}

/// Round half away from zero to two decimals
fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
