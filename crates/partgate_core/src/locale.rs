//! Fixed tr-TR display formatting.
//!
//! The dashboard hardcodes one locale: Turkish Lira amounts without decimals
//! and dd.MM.yyyy dates. This is presentation formatting only; amounts stay
//! plain integers everywhere else.

use time::macros::format_description;
use time::Date;

/// Formats a whole-lira amount like `₺850.000`: dot as thousands separator,
/// no fraction digits.
pub fn format_try(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-₺{grouped}")
    } else {
        format!("₺{grouped}")
    }
}

/// Formats a date like `15.01.2024` (tr-TR short date).
pub fn format_date(date: Date) -> String {
    let description = format_description!("[day].[month].[year]");
    date.format(&description)
        .unwrap_or_else(|_| date.to_string())
}

/// Percentage with one fraction digit and the Turkish prefix sign,
/// e.g. `%45,0`.
pub fn format_percent(value: f64) -> String {
    format!("%{}", format!("{value:.1}").replace('.', ","))
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_percent, format_try};
    use time::macros::date;

    #[test]
    fn lira_amounts_group_thousands_with_dots() {
        assert_eq!(format_try(850_000), "₺850.000");
        assert_eq!(format_try(1_234_567), "₺1.234.567");
        assert_eq!(format_try(999), "₺999");
        assert_eq!(format_try(0), "₺0");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_try(-137_500), "-₺137.500");
    }

    #[test]
    fn dates_render_as_turkish_short_form() {
        assert_eq!(format_date(date!(2024 - 01 - 15)), "15.01.2024");
        assert_eq!(format_date(date!(2024 - 10 - 01)), "01.10.2024");
    }

    #[test]
    fn percent_uses_comma_decimals_and_prefix() {
        assert_eq!(format_percent(45.0), "%45,0");
        assert_eq!(format_percent(26.84), "%26,8");
    }
}
