//! Price formatting for tool output

/// Currency sign for a lowercase currency code, if it has a common one
pub fn currency_sign(currency: &str) -> Option<&'static str> {
    match currency {
        "usd" => Some("$"),
        "eur" => Some("€"),
        "gbp" => Some("£"),
        "jpy" => Some("¥"),
        "inr" => Some("₹"),
        "krw" => Some("₩"),
        "btc" => Some("₿"),
        _ => None,
    }
}

/// Two decimals with comma thousands separators: `65000.5` -> `65,000.50`
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Single-price line: `BTC price: $65,000.50 USD`
pub fn format_price_line(symbol: &str, value: f64, currency: &str) -> String {
    format!(
        "{} price: {}{} {}",
        symbol.trim().to_uppercase(),
        currency_sign(currency).unwrap_or(""),
        format_amount(value),
        currency.to_uppercase()
    )
}

/// Batch entry: `$65,000.50`, without unit suffix.
///
/// Currencies without a sign get the code appended so the unit is kept.
pub fn format_batch_price(value: f64, currency: &str) -> String {
    match currency_sign(currency) {
        Some(sign) => format!("{}{}", sign, format_amount(value)),
        None => format!("{} {}", format_amount(value), currency.to_uppercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(65000.5), "65,000.50");
        assert_eq!(format_amount(3200.0), "3,200.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(0.456), "0.46");
        assert_eq!(format_amount(999.999), "1,000.00");
        assert_eq!(format_amount(123.0), "123.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(100000.0), "100,000.00");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(-0.001), "0.00");
    }

    #[test]
    fn test_format_price_line() {
        assert_eq!(
            format_price_line("btc", 65000.5, "usd"),
            "BTC price: $65,000.50 USD"
        );
        assert_eq!(format_price_line("ETH", 2900.25, "eur"), "ETH price: €2,900.25 EUR");
        assert_eq!(format_price_line("SOL", 150.0, "chf"), "SOL price: 150.00 CHF");
    }

    #[test]
    fn test_format_batch_price() {
        assert_eq!(format_batch_price(65000.5, "usd"), "$65,000.50");
        assert_eq!(format_batch_price(3200.0, "usd"), "$3,200.00");
        assert_eq!(format_batch_price(1.5, "chf"), "1.50 CHF");
    }

    #[test]
    fn test_currency_sign() {
        assert_eq!(currency_sign("usd"), Some("$"));
        assert_eq!(currency_sign("gbp"), Some("£"));
        assert_eq!(currency_sign("xyz"), None);
    }
}
