//! Portal page: session guard, post listing, and preview modal.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::post_card::PostCard;
use crate::components::preview_modal::PreviewModal;
use crate::net::types::Client;
use crate::state::posts::PostsState;
use crate::state::preview::PreviewState;
use crate::util::format::{header_title, post_count_label};

/// Main portal page.
///
/// On mount the session guard runs once; only after it resolves to an
/// authenticated client does the listing fetch start, so the view is
/// strictly ordered after auth. Every terminal auth failure ends in a
/// redirect to the login page.
#[component]
pub fn PortalPage() -> impl IntoView {
    let client = RwSignal::new(None::<Client>);
    let posts = RwSignal::new(PostsState::default());
    let preview = RwSignal::new(PreviewState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::auth::{SessionOutcome, resolve_session};

        leptos::task::spawn_local(async move {
            match resolve_session().await {
                SessionOutcome::Authenticated(me) => {
                    client.set(Some(me));
                    match crate::net::api::fetch_posts().await {
                        Ok(listing) => posts.set(PostsState::from_listing(listing)),
                        Err(err) => {
                            log::warn!("post listing fetch failed: {err}");
                            posts.set(PostsState::load_failed());
                        }
                    }
                }
                SessionOutcome::Denied { message } => {
                    if let Some(message) = message {
                        crate::util::browser::show_alert(&message);
                    }
                    crate::util::browser::redirect_to_login();
                }
            }
        });

        // Escape dismisses the preview from anywhere on the page.
        window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                preview.update(PreviewState::close);
            }
        });
    }

    // Background scrolling is suppressed while the overlay is up.
    Effect::new(move || {
        crate::util::browser::lock_scroll(preview.get().active);
    });

    let title = move || {
        client
            .get()
            .map_or_else(String::new, |c| header_title(&c.name))
    };
    let count_label = move || {
        let state = posts.get();
        (!state.loading && !state.failed).then(|| post_count_label(state.count))
    };

    let on_preview = Callback::new(move |(filename, title): (String, String)| {
        preview.set(PreviewState::open(&filename, &title));
    });
    let on_close = Callback::new(move |()| preview.update(PreviewState::close));

    view! {
        <div class="portal-page">
            <NavBar client=client/>

            <header class="portal-page__header">
                <h1 class="portal-page__title">{title}</h1>
                <span class="portal-page__count">{count_label}</span>
            </header>

            <div class="portal-page__grid">
                {move || {
                    let state = posts.get();
                    if state.loading {
                        view! {
                            <p class="portal-page__loading">"Loading posts..."</p>
                        }
                            .into_any()
                    } else if state.failed {
                        view! {
                            <div class="portal-page__empty">
                                <p>"Error loading posts. Please refresh the page."</p>
                            </div>
                        }
                            .into_any()
                    } else if state.items.is_empty() {
                        view! {
                            <div class="portal-page__empty">
                                <p>"No blog posts yet. They'll appear here once your first batch is ready."</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="portal-page__cards">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|post| {
                                        view! { <PostCard post=post on_preview=on_preview/> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <PreviewModal preview=preview on_close=on_close/>
        </div>
    }
}
