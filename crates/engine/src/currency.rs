//! Supported currencies and their display glyphs.

/// One entry of the currency catalog offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
}

/// Glyph used for any code outside the supported set.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// The closed set of currencies the calculator offers.
pub const SUPPORTED_CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "United States Dollar" },
    Currency { code: "EUR", name: "Euro" },
    Currency { code: "GBP", name: "British Pound" },
    Currency { code: "INR", name: "Indian Rupee" },
    Currency { code: "AUD", name: "Australian Dollar" },
    Currency { code: "ZAR", name: "South African Rand" },
];

/// Display glyph for a currency code.
///
/// Total over any input: unknown codes fall back to
/// [`DEFAULT_CURRENCY_SYMBOL`] instead of failing.
pub fn currency_symbol(code: &str) -> &'static str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "AUD" => "A$",
        "ZAR" => "R",
        _ => DEFAULT_CURRENCY_SYMBOL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_codes_have_glyphs() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("INR"), "₹");
        assert_eq!(currency_symbol("AUD"), "A$");
        assert_eq!(currency_symbol("ZAR"), "R");
    }

    #[test]
    fn test_unknown_code_falls_back_to_default() {
        assert_eq!(currency_symbol("JPY"), DEFAULT_CURRENCY_SYMBOL);
        assert_eq!(currency_symbol(""), DEFAULT_CURRENCY_SYMBOL);
        assert_eq!(currency_symbol("usd"), DEFAULT_CURRENCY_SYMBOL);
    }

    #[test]
    fn test_catalog_covers_every_symbol() {
        for currency in SUPPORTED_CURRENCIES {
            assert!(!currency_symbol(currency.code).is_empty());
            assert!(!currency.name.is_empty());
        }
    }
}
