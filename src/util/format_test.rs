use super::*;

#[test]
fn count_label_uses_singular_for_one() {
    assert_eq!(post_count_label(1), "1 post");
}

#[test]
fn count_label_uses_plural_otherwise() {
    assert_eq!(post_count_label(0), "0 posts");
    assert_eq!(post_count_label(2), "2 posts");
    assert_eq!(post_count_label(41), "41 posts");
}

#[test]
fn size_label_appends_unit() {
    assert_eq!(size_label(12), "12 KB");
}

#[test]
fn header_title_includes_client_name() {
    assert_eq!(header_title("Acme Co"), "Acme Co Blog Posts");
}
