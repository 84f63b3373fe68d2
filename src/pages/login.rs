//! Login page shown when no portal session exists.

use leptos::prelude::*;

/// Login page — magic links are issued by the backend over email, so this
/// page only explains how to get back in.
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <h1>"Client Portal"</h1>
            <p>"Your sign-in link is missing, expired, or already used."</p>
            <p>"Open the most recent portal link from your email, or contact us to request a new one."</p>
        </div>
    }
}
