//! Top navigation bar with the client name and logout.

use leptos::prelude::*;

use crate::net::types::Client;

/// Portal navigation bar.
///
/// Logout posts to the backend and then always navigates to the login
/// page; the response status is ignored.
#[component]
pub fn NavBar(client: RwSignal<Option<Client>>) -> impl IntoView {
    let client_name = move || client.get().map_or_else(String::new, |c| c.name);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                crate::util::browser::redirect_to_login();
            });
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Client Portal"</span>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__client">{client_name}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </nav>
    }
}
