//! Number-to-text helpers for the dashboard. All of them follow en-US
//! locale output: `,` thousands groups, `.` decimal point.

/// Full USD rendering: `$` plus grouped dollars plus exactly two cent
/// digits, e.g. `$11,000,000.00`. Negatives read `-$5.00`. Non-finite
/// input is not guarded and falls through as `$NaN` / `$inf`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let total_cents = (value.abs() * 100.0).round() as u128;
    let dollars = group_digits(total_cents / 100);
    let cents = total_cents % 100;
    if value < 0.0 {
        format!("-${}.{:02}", dollars, cents)
    } else {
        format!("${}.{:02}", dollars, cents)
    }
}

/// Plain locale grouping: thousands separators, at most three fraction
/// digits, trailing zeros trimmed. `5000000` becomes `5,000,000`.
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let scaled = (value.abs() * 1000.0).round() as u128;
    let mut out = group_digits(scaled / 1000);
    let fraction = scaled % 1000;
    if fraction != 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    if value < 0.0 { format!("-{}", out) } else { out }
}

/// Axis tick text: `$` + `value / divisor` + unit suffix. The quotient
/// prints through f64's Display, so whole numbers lose the `.0`:
/// 1.2e9 with divisor 1e9 gives `$1.2B`, 1e9 gives `$1B`.
pub fn axis_currency_label(value: f64, divisor: f64, suffix: &str) -> String {
    format!("${}{}", value / divisor, suffix)
}

fn group_digits(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_groups_thousands_and_always_shows_cents() {
        assert_eq!(format_usd(11_000_000.0), "$11,000,000.00");
        assert_eq!(format_usd(1_234_567_890.0), "$1,234,567,890.00");
        assert_eq!(format_usd(1_800.5), "$1,800.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
    }

    #[test]
    fn usd_sign_leads_the_dollar() {
        assert_eq!(format_usd(-5.0), "-$5.00");
        assert_eq!(format_usd(-1_234.56), "-$1,234.56");
    }

    #[test]
    fn usd_passes_non_finite_through() {
        assert_eq!(format_usd(f64::NAN), "$NaN");
        assert_eq!(format_usd(f64::INFINITY), "$inf");
        assert_eq!(format_usd(f64::NEG_INFINITY), "$-inf");
    }

    #[test]
    fn grouped_inserts_thousands_separators() {
        assert_eq!(format_grouped(5_000_000.0), "5,000,000");
        assert_eq!(format_grouped(100_000.0), "100,000");
        assert_eq!(format_grouped(1_000.0), "1,000");
        assert_eq!(format_grouped(80.0), "80");
        assert_eq!(format_grouped(1.0), "1");
    }

    #[test]
    fn grouped_keeps_up_to_three_fraction_digits() {
        assert_eq!(format_grouped(1_234.5678), "1,234.568");
        assert_eq!(format_grouped(0.5), "0.5");
        assert_eq!(format_grouped(-1_000.25), "-1,000.25");
    }

    #[test]
    fn axis_label_divides_and_trims_whole_numbers() {
        assert_eq!(axis_currency_label(1_200_000_000.0, 1e9, "B"), "$1.2B");
        assert_eq!(axis_currency_label(1_000_000_000.0, 1e9, "B"), "$1B");
        assert_eq!(axis_currency_label(1_050_000_000.0, 1e9, "B"), "$1.05B");
        assert_eq!(axis_currency_label(250_000_000.0, 1e9, "B"), "$0.25B");
        assert_eq!(axis_currency_label(11_000_000.0, 1e6, "M"), "$11M");
        assert_eq!(axis_currency_label(0.0, 1e6, "M"), "$0M");
    }
}
