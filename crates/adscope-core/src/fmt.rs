//! Display formatting helpers for campaign numbers and dates.
//!
//! All functions are pure and total over finite floats: bad input degrades
//! to a printable string, never a panic. Ratio precision (`{:.2}`, `{:.3}`)
//! is applied at call sites; these helpers cover the cases that need digit
//! grouping or unit suffixes.

use chrono::DateTime;

/// Format a count compactly: `2_500_000` → "2.5M", `1500` → "1.5K",
/// `950` → "950". Values under 1K keep locale-style thousands grouping,
/// which matters for negatives (`-1500` → "-1,500").
pub fn compact_number(n: f64) -> String {
    if n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if n >= 1_000.0 {
        format!("{:.1}K", n / 1_000.0)
    } else {
        grouped(n)
    }
}

/// Format a dollar amount with grouped thousands and exactly two decimals:
/// `1234.5` → "$1,234.50". The sign sits between `$` and the digits.
pub fn currency(n: f64) -> String {
    let fixed = format!("{n:.2}");
    let (sign, rest) = split_sign(&fixed);
    match rest.split_once('.') {
        Some((int_part, frac)) => format!("${sign}{}.{frac}", group_thousands(int_part)),
        None => format!("${sign}{}", group_thousands(rest)),
    }
}

/// Summary-card budget format, always in thousands: `250_000.0` → "$250.0K",
/// `500.0` → "$0.5K". Unlike [`compact_number`] this never switches units,
/// so the dashboard cards stay visually aligned.
pub fn budget_k(amount: f64) -> String {
    format!("${:.1}K", amount / 1_000.0)
}

/// Round to a whole number and group thousands: `1234567.0` → "1,234,567".
pub fn grouped(n: f64) -> String {
    let fixed = format!("{:.0}", n.round());
    let (sign, digits) = split_sign(&fixed);
    format!("{sign}{}", group_thousands(digits))
}

/// Short date for table rows: "Jan 5, 2025". Unparseable input renders
/// verbatim rather than failing the row.
pub fn date_short(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => iso.to_owned(),
    }
}

/// Long date for detail views: "Jan 5, 2025 09:30".
pub fn date_long(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%b %-d, %Y %H:%M").to_string(),
        Err(_) => iso.to_owned(),
    }
}

// ── Private helpers ──────────────────────────────────────────────────

fn split_sign(s: &str) -> (&'static str, &str) {
    s.strip_prefix('-').map_or(("", s), |rest| ("-", rest))
}

/// Insert ',' separators into a run of digits ("1234567" → "1,234,567").
/// Non-digit runs ("inf", "NaN") pass through untouched.
fn group_thousands(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_owned();
    }
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn compact_number_under_one_thousand() {
        assert_eq!(compact_number(950.0), "950");
        assert_eq!(compact_number(0.0), "0");
    }

    #[test]
    fn compact_number_thousands() {
        assert_eq!(compact_number(1500.0), "1.5K");
        assert_eq!(compact_number(1000.0), "1.0K");
        assert_eq!(compact_number(64_000.0), "64.0K");
    }

    #[test]
    fn compact_number_millions() {
        assert_eq!(compact_number(2_500_000.0), "2.5M");
        assert_eq!(compact_number(1_000_000.0), "1.0M");
    }

    #[test]
    fn compact_number_negative_takes_grouped_branch() {
        assert_eq!(compact_number(-1500.0), "-1,500");
        assert_eq!(compact_number(-2_500_000.0), "-2,500,000");
    }

    #[test]
    fn budget_k_stays_in_thousands() {
        assert_eq!(budget_k(250_000.0), "$250.0K");
        assert_eq!(budget_k(8_500.0), "$8.5K");
        assert_eq!(budget_k(500.0), "$0.5K");
    }

    #[test]
    fn currency_grouping_and_decimals() {
        assert_eq!(currency(1234.5), "$1,234.50");
        assert_eq!(currency(0.0), "$0.00");
        assert_eq!(currency(98_500.0), "$98,500.00");
    }

    #[test]
    fn currency_negative_sign_placement() {
        assert_eq!(currency(-1234.5), "$-1,234.50");
    }

    #[test]
    fn grouped_thousands() {
        assert_eq!(grouped(1_234_567.0), "1,234,567");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1234.4), "1,234");
    }

    #[test]
    fn date_short_formats_rfc3339() {
        assert_eq!(date_short("2025-01-05T09:30:00Z"), "Jan 5, 2025");
        assert_eq!(date_short("2024-12-25T00:00:00+00:00"), "Dec 25, 2024");
    }

    #[test]
    fn date_long_includes_time() {
        assert_eq!(date_long("2025-01-05T09:30:00Z"), "Jan 5, 2025 09:30");
    }

    #[test]
    fn dates_fall_back_to_raw_input() {
        assert_eq!(date_short("soon"), "soon");
        assert_eq!(date_long(""), "");
    }
}
