use super::*;

#[test]
fn quote_url_joins_base() {
    assert_eq!(quote_url("https://pay.example.com"), "https://pay.example.com/subscription/price");
}

#[test]
fn quote_url_trims_trailing_slash() {
    assert_eq!(quote_url("https://pay.example.com/"), "https://pay.example.com/subscription/price");
}

#[test]
fn quote_response_decodes_decimal_string() {
    let quote: QuoteResponse = serde_json::from_str(r#"{ "price": "12.50" }"#).unwrap();
    assert_eq!(quote.price, "12.50");
}

#[test]
fn quote_response_rejects_numeric_price() {
    // The provider contract is a decimal-formatted string, not a number.
    assert!(serde_json::from_str::<QuoteResponse>(r#"{ "price": 12.5 }"#).is_err());
}

#[test]
fn config_error_names_the_variable() {
    let err = PricingError::Config("PRICING_SERVICE_URL not set");
    assert_eq!(err.to_string(), "pricing provider not configured: PRICING_SERVICE_URL not set");
}
