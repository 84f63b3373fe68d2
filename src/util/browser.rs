//! Thin wrappers over browser globals (alert, navigation, body style).
//!
//! Requires a browser environment; every function is a no-op under SSR so
//! shared code can call them unconditionally.

/// Path of the login page used by every terminal auth failure and logout.
pub const LOGIN_PATH: &str = "/portal/login";

/// Show a blocking browser alert.
pub fn show_alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Full-page navigation to the login page.
pub fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
}

/// Suppress or restore page scrolling while an overlay is up.
pub fn lock_scroll(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let style = body.style();
            if locked {
                let _ = style.set_property("overflow", "hidden");
            } else {
                let _ = style.remove_property("overflow");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
