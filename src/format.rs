//! Currency formatting in the Indonesian locale.

const CURRENCY_PREFIX: &str = "Rp\u{a0}";

/// Formats an amount as Rupiah: `.` groups thousands, `,` separates up to two
/// fraction digits, and a zero fraction is omitted (`Rp 1.500.000`).
pub fn format_rupiah(amount: f64) -> String {
    let cents = if amount.is_finite() {
        (amount.abs() * 100.0).round() as u128
    } else {
        0
    };
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if amount < 0.0 && cents != 0 {
        out.push('-');
    }
    out.push_str(CURRENCY_PREFIX);
    out.push_str(&group_thousands(whole));
    if fraction != 0 {
        let digits = format!("{:02}", fraction);
        out.push(',');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_without_fraction() {
        assert_eq!(format_rupiah(1_500_000.0), "Rp\u{a0}1.500.000");
        assert_eq!(format_rupiah(999.0), "Rp\u{a0}999");
        assert_eq!(format_rupiah(1000.0), "Rp\u{a0}1.000");
        assert_eq!(format_rupiah(0.0), "Rp\u{a0}0");
    }

    #[test]
    fn keeps_significant_fraction_digits() {
        assert_eq!(format_rupiah(1500.5), "Rp\u{a0}1.500,5");
        assert_eq!(format_rupiah(12.25), "Rp\u{a0}12,25");
    }

    #[test]
    fn negative_amounts_lead_with_minus() {
        assert_eq!(format_rupiah(-2500.0), "-Rp\u{a0}2.500");
        assert_eq!(format_rupiah(-0.001), "Rp\u{a0}0");
    }
}
