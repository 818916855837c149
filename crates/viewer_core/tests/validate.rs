use viewer_core::{has_http_scheme, hostname_of, is_valid_url, normalize_url};

#[test]
fn accepts_common_targets() {
    assert!(is_valid_url("example.com"));
    assert!(is_valid_url("localhost"));
    assert!(is_valid_url("192.168.0.1"));
    assert!(is_valid_url("https://en.wikipedia.org/wiki/Rust"));
    assert!(is_valid_url("HTTP://Example.COM/path?q=1"));
    assert!(is_valid_url("  sub-domain.example.co.uk  "));
    assert!(is_valid_url("localhost:8000/docs"));
}

#[test]
fn rejects_empty_and_malformed_input() {
    assert!(!is_valid_url(""));
    assert!(!is_valid_url("   "));
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url("example.c"));
    assert!(!is_valid_url("example"));
    assert!(!is_valid_url("example.123"));
    assert!(!is_valid_url("under_score.example.com"));
    assert!(!is_valid_url("https://"));
}

#[test]
fn normalization_adds_https_only_when_scheme_missing() {
    assert_eq!(normalize_url("example.com"), "https://example.com");
    assert_eq!(normalize_url("  example.com/a  "), "https://example.com/a");
    assert_eq!(normalize_url("http://example.com"), "http://example.com");
    assert_eq!(normalize_url("HTTPS://example.com"), "HTTPS://example.com");
    assert_eq!(normalize_url(""), "");
    assert_eq!(normalize_url("   "), "");
}

#[test]
fn normalization_is_idempotent() {
    for input in ["example.com", "localhost:3000", " 10.0.0.1/x ", "http://a.io", "weird"] {
        let once = normalize_url(input);
        assert_eq!(normalize_url(&once), once, "input {input:?}");
    }
}

#[test]
fn scheme_detection_ignores_case() {
    assert!(has_http_scheme("HtTpS://example.com"));
    assert!(has_http_scheme("http://example.com"));
    assert!(!has_http_scheme("ftp://example.com"));
    assert!(!has_http_scheme("http:/example.com"));
    assert!(!has_http_scheme("é"));
}

#[test]
fn hostname_is_extracted_from_absolute_urls() {
    assert_eq!(
        hostname_of("https://en.wikipedia.org/wiki/AI").as_deref(),
        Some("en.wikipedia.org")
    );
    assert_eq!(hostname_of("not a url"), None);
}
