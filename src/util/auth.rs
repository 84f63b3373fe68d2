//! Page-load session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when the portal page mounts: exchange a magic-link token if
//! the URL carries one, then verify the session. The guard resolves to a
//! value the page acts on directly — there is no broadcast event and no
//! global client reference.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Client;

/// Outcome of the session guard.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// A valid session exists; the portal view may start with this client.
    Authenticated(Client),
    /// No usable session. `message` is shown before redirecting when the
    /// magic-link exchange itself failed; the plain no-session path stays
    /// silent.
    Denied { message: Option<String> },
}

/// Run the guard: token exchange (if a token is present), then the
/// `/portal/api/me` session check. Each call is attempted exactly once;
/// any failure is terminal for the page.
pub async fn resolve_session() -> SessionOutcome {
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = current_url_token() {
            match crate::net::api::verify_magic_link(&token).await {
                Ok(()) => strip_token_from_url(),
                Err(message) => {
                    return SessionOutcome::Denied {
                        message: Some(message),
                    };
                }
            }
        }
        match crate::net::api::fetch_current_client().await {
            Some(client) => SessionOutcome::Authenticated(client),
            None => SessionOutcome::Denied { message: None },
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionOutcome::Denied { message: None }
    }
}

/// Extract the one-time login token from a URL query string.
///
/// Accepts the raw `location.search` value with or without the leading
/// `?`. Returns `None` when no non-empty `token` parameter exists.
pub fn token_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == "token" && !value.is_empty() {
            // '+' encodes a space in query strings.
            let value = value.replace('+', " ");
            let decoded = urlencoding::decode(&value)
                .map(std::borrow::Cow::into_owned)
                .unwrap_or(value);
            return Some(decoded);
        }
    }
    None
}

#[cfg(feature = "hydrate")]
fn current_url_token() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    token_from_query(&search)
}

/// Replace the current history entry with the bare pathname, dropping the
/// one-time token from the visible URL without reloading. Replaced, not
/// pushed: back navigation must not return to the token URL.
#[cfg(feature = "hydrate")]
fn strip_token_from_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(path) = window.location().pathname() else {
        return;
    };
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path));
    }
}
