use super::*;

#[test]
fn token_from_query_extracts_single_parameter() {
    assert_eq!(token_from_query("?token=abc123"), Some("abc123".to_owned()));
}

#[test]
fn token_from_query_handles_other_parameters() {
    assert_eq!(
        token_from_query("?utm=mail&token=xyz&ref=1"),
        Some("xyz".to_owned())
    );
}

#[test]
fn token_from_query_percent_decodes_value() {
    assert_eq!(token_from_query("?token=x%2Fy%3D"), Some("x/y=".to_owned()));
}

#[test]
fn token_from_query_decodes_plus_as_space() {
    assert_eq!(token_from_query("token=a+b"), Some("a b".to_owned()));
}

#[test]
fn token_from_query_ignores_empty_value() {
    assert_eq!(token_from_query("?token="), None);
    assert_eq!(token_from_query("?token"), None);
}

#[test]
fn token_from_query_returns_none_without_token() {
    assert_eq!(token_from_query(""), None);
    assert_eq!(token_from_query("?utm=mail"), None);
}

#[test]
fn token_from_query_requires_exact_key() {
    assert_eq!(token_from_query("?xtoken=abc"), None);
    assert_eq!(token_from_query("?tokens=abc"), None);
}
