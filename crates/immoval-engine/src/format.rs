//! Display formatting for price values.

/// Format an EUR amount with thousands grouping and two decimals, e.g.
/// `€1,234,567.89`. Negative amounts (a band lower bound can dip below
/// zero for cheap properties) render as `-€13,726.73`.
pub fn format_eur(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}€{}.{:02}", sign, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_eur(0.0), "€0.00");
        assert_eq!(format_eur(950.5), "€950.50");
        assert_eq!(format_eur(48726.73), "€48,726.73");
        assert_eq!(format_eur(1_234_567.891), "€1,234,567.89");
    }

    #[test]
    fn test_negative_band_bound() {
        assert_eq!(format_eur(-13726.73), "-€13,726.73");
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(format_eur(199999.999), "€200,000.00");
    }
}
