//! Card for a single blog post with preview, copy, and download actions.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::util::format::size_label;

/// How long the "Copied!" affordance stays before reverting.
#[cfg(feature = "hydrate")]
const COPIED_REVERT_MS: u32 = 2_000;

#[cfg(feature = "hydrate")]
const COPY_FAILED_MESSAGE: &str = "Failed to copy. Please try the Download button instead.";

/// A post card with its three actions.
///
/// Preview is delegated to the page (which owns the modal); copy runs
/// entirely in here, each click owning its own signal and timer so
/// overlapping copies cannot corrupt each other's button state; download
/// is a plain anchor handled natively by the browser.
#[component]
pub fn PostCard(post: Post, on_preview: Callback<(String, String)>) -> impl IntoView {
    let copied = RwSignal::new(false);

    let preview_filename = post.filename.clone();
    let preview_title = post.title.clone();
    let on_preview_click = move |_| {
        on_preview.run((preview_filename.clone(), preview_title.clone()));
    };

    let copy_filename = post.filename.clone();
    let on_copy = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let filename = copy_filename.clone();
            leptos::task::spawn_local(async move {
                match copy_post_html(&filename).await {
                    Ok(()) => {
                        copied.set(true);
                        gloo_timers::future::TimeoutFuture::new(COPIED_REVERT_MS).await;
                        copied.set(false);
                    }
                    Err(err) => {
                        log::warn!("copy failed for {filename}: {err}");
                        crate::util::browser::show_alert(COPY_FAILED_MESSAGE);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &copy_filename;
        }
    };

    let download_href = crate::net::api::post_download_url(&post.filename);

    view! {
        <div class="post-card">
            <h3 class="post-card__title">{post.title.clone()}</h3>
            <div class="post-card__meta">
                <span>{size_label(post.size_kb)}</span>
                <span>{post.modified.clone()}</span>
            </div>
            <div class="post-card__actions">
                <button class="btn-action" on:click=on_preview_click>
                    <svg width="14" height="14" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
                        <circle cx="12" cy="12" r="3"/>
                    </svg>
                    "Preview"
                </button>
                <button
                    class="btn-action"
                    class=("btn-action--copied", move || copied.get())
                    on:click=on_copy
                >
                    {move || {
                        if copied.get() {
                            view! {
                                <svg width="14" height="14" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                                    <polyline points="20 6 9 17 4 12"/>
                                </svg>
                                "Copied!"
                            }
                                .into_any()
                        } else {
                            view! {
                                <svg width="14" height="14" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                                    <rect x="9" y="9" width="13" height="13" rx="2"/>
                                    <path d="M5 15H4a2 2 0 01-2-2V4a2 2 0 012-2h9a2 2 0 012 2v1"/>
                                </svg>
                                "Copy HTML"
                            }
                                .into_any()
                        }
                    }}
                </button>
                <a class="btn-action" href=download_href download>
                    <svg width="14" height="14" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                        <path d="M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4"/>
                        <polyline points="7 10 12 15 17 10"/>
                        <line x1="12" y1="15" x2="12" y2="3"/>
                    </svg>
                    "Download"
                </a>
            </div>
        </div>
    }
}

/// Fetch the raw HTML and write it to the system clipboard.
#[cfg(feature = "hydrate")]
async fn copy_post_html(filename: &str) -> Result<(), String> {
    let html = crate::net::api::fetch_raw_html(filename).await?;
    let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
    let promise = window.navigator().clipboard().write_text(&html);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|_| "clipboard write rejected".to_owned())?;
    Ok(())
}
