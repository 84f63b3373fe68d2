//! Client-side state for the portal page.
//!
//! DESIGN
//! ======
//! State is split by domain (`posts`, `preview`) as plain structs held in
//! page-local signals. There is no global client reference: the session
//! guard resolves the client value and the page injects it where needed.

pub mod posts;
pub mod preview;
