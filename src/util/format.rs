//! Number rendering shared by the report text and the UI.
//!
//! Matches en-US grouping: `12,345`, with fraction digits only when present.

/// `$` followed by the rounded amount with thousands separators.
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_grouped(amount, 0))
}

/// Grouped number with at most `max_fraction_digits` decimals, trailing zeros
/// removed.
pub fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let rounded = round_half_away(value.abs(), max_fraction_digits);
    let fixed = format!("{rounded:.max_fraction_digits$}");
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac)) => (int_part, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value < 0.0 && rounded != 0.0 {
        out.push('-');
    }
    let len = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Grouped count with up to three decimals, e.g. follower reach.
pub fn format_count(value: f64) -> String {
    format_grouped(value, 3)
}

/// Per-unit dollar figure, always with at least one decimal: `2.0`, `0.25`.
pub fn format_unit_price(value: f64) -> String {
    let grouped = format_grouped(value, 3);
    if grouped.contains('.') {
        grouped
    } else {
        format!("{grouped}.0")
    }
}

/// Fixed number of decimals, ties rounded away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    let rounded = round_half_away(value, digits);
    format!("{rounded:.digits$}")
}

fn round_half_away(value: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
