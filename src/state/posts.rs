//! Post-listing state for the portal page.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use crate::net::types::{Post, PostListing};

/// Listing state: starts loading, then resolves to either the fetched
/// posts (in backend order, never re-sorted or filtered) or a failed flag
/// that renders the inline error state.
#[derive(Clone, Debug, PartialEq)]
pub struct PostsState {
    pub items: Vec<Post>,
    pub count: u64,
    pub loading: bool,
    pub failed: bool,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            loading: true,
            failed: false,
        }
    }
}

impl PostsState {
    /// Successful fetch: adopt the listing exactly as received.
    pub fn from_listing(listing: PostListing) -> Self {
        Self {
            items: listing.posts,
            count: listing.count,
            loading: false,
            failed: false,
        }
    }

    /// Failed fetch: loading ends, the error state renders, no retry.
    pub fn load_failed() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            loading: false,
            failed: true,
        }
    }
}
