//! Modal overlay embedding a post's rendered preview in an iframe.

use leptos::prelude::*;

use crate::state::preview::PreviewState;

/// Preview overlay.
///
/// Stays mounted with the frame parked on `about:blank` so dismissal can
/// stop an in-flight load by retargeting rather than tearing down the
/// iframe. Clicking the backdrop closes; clicks inside the content are
/// swallowed. Escape handling lives on the page so it works from anywhere.
#[component]
pub fn PreviewModal(preview: RwSignal<PreviewState>, on_close: Callback<()>) -> impl IntoView {
    let backdrop_class = move || {
        if preview.get().active {
            "preview-modal__backdrop preview-modal__backdrop--active"
        } else {
            "preview-modal__backdrop"
        }
    };

    view! {
        <div class=backdrop_class on:click=move |_| on_close.run(())>
            <div class="preview-modal" on:click=move |ev| ev.stop_propagation()>
                <div class="preview-modal__header">
                    <h2 class="preview-modal__title">{move || preview.get().title}</h2>
                    <button
                        class="preview-modal__close"
                        on:click=move |_| on_close.run(())
                        title="Close preview"
                    >
                        "✕"
                    </button>
                </div>
                <iframe
                    class="preview-modal__frame"
                    src=move || preview.get().src
                    title="Post preview"
                ></iframe>
            </div>
        </div>
    }
}
