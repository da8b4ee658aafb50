use quotebook_core::{Quote, QuoteValidationError, QuotesDocument};

#[test]
fn quote_serialization_uses_text_then_author() {
    let quote = Quote::new("Stay hungry", "Steve Jobs");

    let json = serde_json::to_string(&quote).unwrap();
    assert_eq!(json, r#"{"text":"Stay hungry","author":"Steve Jobs"}"#);

    let decoded: Quote = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, quote);
}

#[test]
fn blank_fields_fail_validation_in_field_order() {
    assert_eq!(
        Quote::new("", "").validate(),
        Err(QuoteValidationError::EmptyText)
    );
    assert_eq!(
        Quote::new("x", " ").validate().unwrap_err().to_string(),
        "quote author must not be blank"
    );
}

#[test]
fn document_roundtrip_preserves_every_quote_field_for_field() {
    let source = r#"{"quotes":[{"text":"A","author":"X"},{"text":"B","author":"Y"}]}"#;
    let document = QuotesDocument::from_slice(source.as_bytes()).unwrap();
    assert_eq!(
        document.quotes,
        vec![Quote::new("A", "X"), Quote::new("B", "Y")]
    );

    let reparsed =
        QuotesDocument::from_slice(document.to_pretty_json().unwrap().as_bytes()).unwrap();
    assert_eq!(reparsed, document);
}
