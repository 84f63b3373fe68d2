use super::*;

#[test]
fn client_keeps_unknown_payload_fields() {
    let client: Client = serde_json::from_str(
        r#"{"name": "Acme Co", "email": "ops@acme.test", "plan": "starter"}"#,
    )
    .unwrap();
    assert_eq!(client.name, "Acme Co");
    assert_eq!(
        client.extra.get("email"),
        Some(&serde_json::json!("ops@acme.test"))
    );
    assert_eq!(client.extra.get("plan"), Some(&serde_json::json!("starter")));
}

#[test]
fn post_listing_parses_posts_in_order() {
    let listing: PostListing = serde_json::from_str(
        r#"{
            "count": 2,
            "posts": [
                {"filename": "b.html", "title": "Second", "size_kb": 14, "modified": "2026-08-02"},
                {"filename": "a.html", "title": "First", "size_kb": 9, "modified": "2026-08-01"}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(listing.count, 2);
    let filenames: Vec<&str> = listing.posts.iter().map(|p| p.filename.as_str()).collect();
    assert_eq!(filenames, vec!["b.html", "a.html"]);
}

#[test]
fn post_listing_defaults_missing_posts_to_empty() {
    let listing: PostListing = serde_json::from_str(r#"{"count": 0}"#).unwrap();
    assert_eq!(listing.count, 0);
    assert!(listing.posts.is_empty());
}

#[test]
fn raw_post_parses_html_field() {
    let raw: RawPost = serde_json::from_str(r#"{"html": "<h1>Hi</h1>"}"#).unwrap();
    assert_eq!(raw.html, "<h1>Hi</h1>");
}
