use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Quantity input uses a comma as decimal separator. Unparseable or missing
/// values normalize to zero, never to a rejection.
pub fn normalize_quantidade(input: Option<&str>) -> Decimal {
    input.and_then(parse_decimal_br).unwrap_or(Decimal::ZERO)
}

/// Unit price: same comma-to-dot handling, but the column is nullable so
/// missing, empty, or unparseable input stores null.
pub fn normalize_preco(input: Option<&str>) -> Option<Decimal> {
    input.and_then(parse_decimal_br)
}

fn parse_decimal_br(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    Decimal::from_str(&normalized).ok()
}

/// Keeps only the digits of a free-text phone number. An empty or
/// overflowing result stores null.
pub fn normalize_telefone(input: Option<&str>) -> Option<i64> {
    let digits: String = input?.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Expiry arrives as `DD/MM/YYYY`. Exactly three `/`-separated parts are
/// reassembled as `YYYY-MM-DD` and parsed; any other shape stores null.
pub fn normalize_validade(input: Option<&str>) -> Option<NaiveDate> {
    let parts: Vec<&str> = input?.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let iso = format!("{}-{}-{}", parts[2], parts[1], parts[0]);
    NaiveDate::parse_from_str(&iso, "%Y-%m-%d").ok()
}
