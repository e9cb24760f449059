//! Currency identifier normalization.
//!
//! Currencies are case-insensitive identifiers. Everything that reaches the
//! store or the reconciler goes through [`normalize_currency_code`] first, so
//! "USD", " usd" and "Usd" all name the same row.

/// Normalizes a currency code to its canonical lowercase form.
pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Case-insensitive comparison of two currency codes.
pub fn same_currency(a: &str, b: &str) -> bool {
    normalize_currency_code(a) == normalize_currency_code(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_currency_code() {
        assert_eq!(normalize_currency_code("USD"), "usd");
        assert_eq!(normalize_currency_code("  eUr "), "eur");
        assert_eq!(normalize_currency_code("gbp"), "gbp");
    }

    #[test]
    fn test_same_currency() {
        assert!(same_currency("USD", "usd"));
        assert!(!same_currency("USD", "EUR"));
    }
}
