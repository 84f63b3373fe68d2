//! REST API helpers for communicating with the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Auth failures
//! resolve to `None`/`Err` so the guard can redirect; listing and copy
//! failures carry a message the caller can log or surface. Nothing here
//! retries — every request is attempted exactly once.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Client, PostListing};

/// Fallback when the verify endpoint rejects a token without a body.
#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_VERIFY_ERROR: &str =
    "Login link is invalid or expired. Please request a new one.";

/// Shown when the verify request cannot complete at all.
#[cfg(any(test, feature = "hydrate"))]
const NETWORK_LOGIN_ERROR: &str = "Network error during login. Please try again.";

#[cfg(any(test, feature = "hydrate"))]
fn verify_endpoint(token: &str) -> String {
    format!("/portal/api/verify?token={}", urlencoding::encode(token))
}

#[cfg(any(test, feature = "hydrate"))]
fn posts_request_failed_message(status: u16) -> String {
    format!("posts request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn raw_request_failed_message(status: u16) -> String {
    format!("raw fetch failed: {status}")
}

fn post_endpoint(filename: &str, action: &str) -> String {
    format!("/portal/api/posts/{}/{action}", urlencoding::encode(filename))
}

/// URL of the rendered-preview document for an iframe `src`.
pub fn post_preview_url(filename: &str) -> String {
    post_endpoint(filename, "preview")
}

/// URL of the download endpoint for a plain anchor `href`.
pub fn post_download_url(filename: &str) -> String {
    post_endpoint(filename, "download")
}

#[cfg(any(test, feature = "hydrate"))]
fn post_raw_endpoint(filename: &str) -> String {
    post_endpoint(filename, "raw")
}

/// Exchange a one-time magic-link token via `GET /portal/api/verify`.
///
/// # Errors
///
/// Returns the user-facing message to show before redirecting: the
/// backend's `error` field when the token is rejected (or a default),
/// or a generic network message when the request cannot complete.
pub async fn verify_magic_link(token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&verify_endpoint(token))
            .send()
            .await
            .map_err(|_| NETWORK_LOGIN_ERROR.to_owned())?;
        if resp.ok() {
            return Ok(());
        }
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: Option<String>,
        }
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| DEFAULT_VERIFY_ERROR.to_owned());
        Err(message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch the currently authenticated client from `/portal/api/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_client() -> Option<Client> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/portal/api/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Client>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the post listing from `GET /portal/api/posts`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_posts() -> Result<PostListing, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/portal/api/posts")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(posts_request_failed_message(resp.status()));
        }
        resp.json::<PostListing>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a post's raw HTML source via `GET /portal/api/posts/{filename}/raw`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds
/// with a non-OK status.
pub async fn fetch_raw_html(filename: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&post_raw_endpoint(filename))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(raw_request_failed_message(resp.status()));
        }
        let body: super::types::RawPost = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.html)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = filename;
        Err("not available on server".to_owned())
    }
}

/// End the session by calling `POST /portal/api/logout`.
///
/// The response status is intentionally ignored: logout always concludes
/// with a redirect to the login page regardless.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/portal/api/logout")
            .send()
            .await;
    }
}
