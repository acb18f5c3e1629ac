//! Barcode utility operation tests: remote checksum verification,
//! issuing-country lookup and barcode image rendering.

mod common;

use eansearch_sdk::EanSearchError;
use mockito::Matcher;

// ---------------------------------------------------------------------------
// verify_checksum
// ---------------------------------------------------------------------------

#[test]
fn verify_checksum_true_on_valid_flag() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("op".into(), "verify-checksum".into()),
            Matcher::UrlEncoded("ean".into(), "5099750442227".into()),
        ]))
        .with_body(r#"[{"ean":"5099750442227","valid":"1"}]"#)
        .create();

    let client = common::client_for(&server);
    assert!(client.barcode().verify_checksum("5099750442227").unwrap());
    mock.assert();
}

#[test]
fn verify_checksum_false_on_invalid_flag() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_body(r#"[{"ean":"5099750442228","valid":"0"}]"#)
        .create();

    let client = common::client_for(&server);
    assert!(!client.barcode().verify_checksum("5099750442228").unwrap());
}

#[test]
fn verify_checksum_false_on_empty_response() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_body("[]")
        .create();

    let client = common::client_for(&server);
    assert!(!client.barcode().verify_checksum("5099750442227").unwrap());
}

#[test]
fn verify_checksum_missing_field_is_typed_error() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_body(r#"[{"ean":"5099750442227"}]"#)
        .create();

    let client = common::client_for(&server);
    let err = client.barcode().verify_checksum("5099750442227").unwrap_err();
    assert!(matches!(err, EanSearchError::UnexpectedResponse(_)));
}

// ---------------------------------------------------------------------------
// issuing_country
// ---------------------------------------------------------------------------

#[test]
fn issuing_country_returns_name() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("op".into(), "issuing-country".into()),
            Matcher::UrlEncoded("ean".into(), "5099750442227".into()),
        ]))
        .with_body(r#"[{"ean":"5099750442227","issuingCountry":"UK"}]"#)
        .create();

    let client = common::client_for(&server);
    let country = client.barcode().issuing_country("5099750442227").unwrap();
    assert_eq!(country.as_deref(), Some("UK"));
    mock.assert();
}

#[test]
fn issuing_country_none_on_empty_response() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api")
        .match_query(Matcher::Any)
        .with_body("[]")
        .create();

    let client = common::client_for(&server);
    assert!(client.barcode().issuing_country("1111111111116").unwrap().is_none());
}

// ---------------------------------------------------------------------------
// image
// ---------------------------------------------------------------------------

#[test]
fn image_uses_default_dimensions() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("op".into(), "barcode-image".into()),
            Matcher::UrlEncoded("ean".into(), "5099750442227".into()),
            Matcher::UrlEncoded("width".into(), "102".into()),
            Matcher::UrlEncoded("height".into(), "50".into()),
        ]))
        .with_body(r#"[{"ean":"5099750442227","barcode":"iVBORw0KGgoAAAANSUhEUg=="}]"#)
        .create();

    let client = common::client_for(&server);
    let image = client.barcode().image("5099750442227").unwrap();
    assert_eq!(image.as_deref(), Some("iVBORw0KGgoAAAANSUhEUg=="));
    mock.assert();
}

#[test]
fn image_with_size_sends_custom_dimensions() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("width".into(), "300".into()),
            Matcher::UrlEncoded("height".into(), "120".into()),
        ]))
        .with_body(r#"[{"ean":"5099750442227","barcode":"aGVsbG8="}]"#)
        .create();

    let client = common::client_for(&server);
    let image = client
        .barcode()
        .image_with_size("5099750442227", 300, 120)
        .unwrap();
    assert_eq!(image.as_deref(), Some("aGVsbG8="));
    mock.assert();
}
