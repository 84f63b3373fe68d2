//! Wire DTOs for the portal backend API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The authenticated portal client, as returned by `GET /portal/api/me`.
///
/// Only `name` is rendered. The rest of the session payload is carried
/// opaquely so the backend can grow its shape without breaking us.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A delivered blog post in the listing response.
///
/// Read-only on this side; cards render posts exactly in the order the
/// backend returned them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique key; also the path segment for the per-post endpoints.
    pub filename: String,
    pub title: String,
    /// Rendered size in kilobytes.
    pub size_kb: u64,
    /// Last-modified display string from the backend.
    pub modified: String,
}

/// Response shape of `GET /portal/api/posts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostListing {
    pub count: u64,
    #[serde(default)]
    pub posts: Vec<Post>,
}

/// Response shape of `GET /portal/api/posts/{filename}/raw`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawPost {
    pub html: String,
}
