use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Formats an amount given in minor units (cents) for display.
///
/// Currency codes are matched case-insensitively against ISO 4217. Unknown
/// codes fall back to a plain two-decimal amount followed by the code.
pub fn format_amount(minor_units: i64, currency: &str) -> String {
    let code = currency.to_uppercase();

    match iso::find(&code) {
        Some(iso_currency) => Money::from_minor(minor_units, iso_currency).to_string(),
        None => {
            tracing::debug!("Unknown currency '{}', using plain formatting", currency);
            format!("{} {}", Decimal::new(minor_units, 2), code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_known_currency_is_case_insensitive() {
        assert_eq!(format_amount(1234, "usd"), "$12.34");
        assert_eq!(format_amount(1234, "USD"), "$12.34");
    }

    #[test]
    fn test_format_unknown_currency() {
        assert_eq!(format_amount(1234, "xyz1"), "12.34 XYZ1");
        assert_eq!(format_amount(-50, "xyz1"), "-0.50 XYZ1");
    }
}
