use super::*;

#[test]
fn verify_endpoint_formats_expected_path() {
    assert_eq!(verify_endpoint("abc123"), "/portal/api/verify?token=abc123");
}

#[test]
fn verify_endpoint_percent_encodes_token() {
    assert_eq!(
        verify_endpoint("a/b+c d"),
        "/portal/api/verify?token=a%2Fb%2Bc%20d"
    );
}

#[test]
fn post_preview_url_percent_encodes_filename() {
    assert_eq!(
        post_preview_url("my post.html"),
        "/portal/api/posts/my%20post.html/preview"
    );
}

#[test]
fn post_urls_encode_quote_characters() {
    // Quotes must never survive into the path, so the value can sit in an
    // attribute without breaking out of it.
    assert_eq!(
        post_download_url(r#"it's-a-"post".html"#),
        "/portal/api/posts/it%27s-a-%22post%22.html/download"
    );
    assert_eq!(
        post_raw_endpoint("it's.html"),
        "/portal/api/posts/it%27s.html/raw"
    );
}

#[test]
fn posts_request_failed_message_formats_status() {
    assert_eq!(posts_request_failed_message(503), "posts request failed: 503");
}

#[test]
fn raw_request_failed_message_formats_status() {
    assert_eq!(raw_request_failed_message(404), "raw fetch failed: 404");
}

#[test]
fn verify_error_defaults_are_user_facing() {
    assert_eq!(
        DEFAULT_VERIFY_ERROR,
        "Login link is invalid or expired. Please request a new one."
    );
    assert_eq!(NETWORK_LOGIN_ERROR, "Network error during login. Please try again.");
}
