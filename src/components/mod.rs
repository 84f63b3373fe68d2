//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portal chrome and per-post actions. Event
//! handlers are attached structurally through Leptos — no markup strings,
//! so user-supplied titles and filenames can never inject markup.

pub mod nav_bar;
pub mod post_card;
pub mod preview_modal;
