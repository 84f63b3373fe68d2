use super::*;

fn post(filename: &str, title: &str) -> Post {
    Post {
        filename: filename.to_owned(),
        title: title.to_owned(),
        size_kb: 12,
        modified: "2026-08-15".to_owned(),
    }
}

#[test]
fn posts_state_starts_loading() {
    let s = PostsState::default();
    assert!(s.loading);
    assert!(!s.failed);
    assert!(s.items.is_empty());
    assert_eq!(s.count, 0);
}

#[test]
fn from_listing_preserves_backend_order() {
    let listing = PostListing {
        count: 2,
        posts: vec![post("z.html", "Z"), post("a.html", "A")],
    };
    let s = PostsState::from_listing(listing);
    assert!(!s.loading);
    assert!(!s.failed);
    assert_eq!(s.count, 2);
    let order: Vec<&str> = s.items.iter().map(|p| p.filename.as_str()).collect();
    assert_eq!(order, vec!["z.html", "a.html"]);
}

#[test]
fn from_empty_listing_has_no_items() {
    let s = PostsState::from_listing(PostListing { count: 0, posts: vec![] });
    assert!(!s.loading);
    assert!(!s.failed);
    assert!(s.items.is_empty());
}

#[test]
fn load_failed_ends_loading_and_flags_error() {
    let s = PostsState::load_failed();
    assert!(!s.loading);
    assert!(s.failed);
    assert!(s.items.is_empty());
}
