//! Display formatting helpers for the portal view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Count label with singular/plural agreement ("1 post", "3 posts").
pub fn post_count_label(count: u64) -> String {
    if count == 1 {
        "1 post".to_owned()
    } else {
        format!("{count} posts")
    }
}

/// Size label for a post card's metadata row.
pub fn size_label(size_kb: u64) -> String {
    format!("{size_kb} KB")
}

/// Header title incorporating the client name.
pub fn header_title(client_name: &str) -> String {
    format!("{client_name} Blog Posts")
}
