//! Terminal display helpers shared by every binary.
//!
//! All functions here are pure string formatting — no I/O.

use chrono::DateTime;

/// Format a signed P&L amount with a directional marker.
///
/// Positive values get a leading `+` and 📈, negative values are shown as
/// `-$<abs>` with 📉, and exactly zero stays unmarked.
pub fn format_pnl(pnl: f64) -> String {
    if pnl > 0.0 {
        format!("+${} 📈", format_usd(pnl))
    } else if pnl < 0.0 {
        format!("-${} 📉", format_usd(pnl.abs()))
    } else {
        format!("${}", format_usd(pnl))
    }
}

/// Format a signed percentage with a directional marker.
pub fn format_percentage(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.2}% 📈")
    } else if percent < 0.0 {
        format!("{percent:.2}% 📉")
    } else {
        format!("{percent:.2}%")
    }
}

/// Format a dollar amount with two decimals and thousands separators.
pub fn format_usd(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Render a unix timestamp as a UTC date-time, `N/A` when absent.
pub fn format_timestamp(timestamp: i64) -> String {
    if timestamp == 0 {
        return "N/A".to_string();
    }
    match DateTime::from_timestamp(timestamp, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "N/A".to_string(),
    }
}

/// Elide a transaction hash to `0xabcdef12...deadbeef`.
pub fn short_hash(hash: &str) -> String {
    if hash.chars().count() <= 18 {
        return hash.to_string();
    }
    let head: String = hash.chars().take(10).collect();
    let tail: String = hash
        .chars()
        .rev()
        .take(8)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("{head}...{tail}")
}

/// Truncate a market title to at most `max` characters (char-safe).
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pnl_zero_has_no_marker() {
        assert_eq!(format_pnl(0.0), "$0.00");
    }

    #[test]
    fn pnl_positive() {
        assert_eq!(format_pnl(1234.5), "+$1,234.50 📈");
    }

    #[test]
    fn pnl_negative_uses_abs() {
        assert_eq!(format_pnl(-42.0), "-$42.00 📉");
    }

    #[test]
    fn percentage_three_way() {
        assert_eq!(format_percentage(12.345), "+12.35% 📈");
        assert_eq!(format_percentage(-3.2), "-3.20% 📉");
        assert_eq!(format_percentage(0.0), "0.00%");
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(0.0), "0.00");
        assert_eq!(format_usd(999.999), "1,000.00");
        assert_eq!(format_usd(1234567.891), "1,234,567.89");
        assert_eq!(format_usd(-1234.5), "-1,234.50");
    }

    #[test]
    fn timestamp_rendering() {
        assert_eq!(format_timestamp(0), "N/A");
        assert_eq!(format_timestamp(1700000000), "2023-11-14 22:13:20");
    }

    #[test]
    fn hash_elision() {
        let hash = "0x1234567890abcdef1234567890abcdef1234567890abcdef";
        assert_eq!(short_hash(hash), "0x12345678...90abcdef");
        assert_eq!(short_hash("0xshort"), "0xshort");
    }

    #[test]
    fn truncate_char_safe() {
        assert_eq!(truncate("héllo wörld", 5), "héllo");
        assert_eq!(truncate("ab", 5), "ab");
    }
}
