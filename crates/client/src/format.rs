//! Presentation formatting helpers shared by the screens.
//!
//! Locale is fixed to en-US; absent amounts format as zero and absent dates
//! as a fixed placeholder, so tables never show holes.

use chrono::NaiveDateTime;

/// Placeholder for absent dates.
const MISSING: &str = "N/A";

/// Format an amount as US dollars: `$1,234.50`. Absent amounts are zero.
pub fn format_currency(amount: Option<f64>) -> String {
    let amount = amount.unwrap_or(0.0);
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// `Jan 5, 2024` or the placeholder.
pub fn format_date(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(value) => value.format("%b %-d, %Y").to_string(),
        None => MISSING.to_string(),
    }
}

/// `Jan 5, 2024, 09:30 AM` or the placeholder.
pub fn format_datetime(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(value) => value.format("%b %-d, %Y, %I:%M %p").to_string(),
        None => MISSING.to_string(),
    }
}

/// Badge color for a movement-type wire name; unknown kinds fall back to a
/// neutral gray.
pub fn movement_color(kind: &str) -> &'static str {
    match kind {
        "in" => "green",
        "out" => "red",
        "adjustment" => "blue",
        "transfer" => "purple",
        _ => "gray",
    }
}

/// Badge color for an alert-severity wire name; unknown severities fall
/// back to a neutral gray.
pub fn severity_color(severity: &str) -> &'static str {
    match severity {
        "info" => "blue",
        "warning" => "orange",
        "error" | "critical" => "red",
        _ => "gray",
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn absent_amount_formats_as_zero() {
        assert_eq!(format_currency(None), "$0.00");
    }

    #[test]
    fn currency_groups_thousands_and_pads_cents() {
        assert_eq!(format_currency(Some(1234.5)), "$1,234.50");
        assert_eq!(format_currency(Some(2.4)), "$2.40");
        assert_eq!(format_currency(Some(1_000_000.0)), "$1,000,000.00");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_currency(Some(-12.25)), "-$12.25");
    }

    #[test]
    fn dates_use_short_month_and_no_zero_padding() {
        assert_eq!(format_date(Some(at(2024, 1, 5, 9, 30))), "Jan 5, 2024");
        assert_eq!(format_date(None), "N/A");
    }

    #[test]
    fn datetimes_append_twelve_hour_time() {
        assert_eq!(
            format_datetime(Some(at(2024, 1, 5, 14, 5))),
            "Jan 5, 2024, 02:05 PM"
        );
        assert_eq!(format_datetime(None), "N/A");
    }

    #[test]
    fn unknown_lookup_keys_fall_back_to_gray() {
        assert_eq!(movement_color("in"), "green");
        assert_eq!(movement_color("teleport"), "gray");
        assert_eq!(severity_color("critical"), "red");
        assert_eq!(severity_color("mild"), "gray");
    }
}
