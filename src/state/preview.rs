//! Preview-modal state for the embedded post frame.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::net::api::post_preview_url;

/// Neutral frame target; closing the modal points the iframe back here to
/// stop any in-flight load.
pub const BLANK_FRAME: &str = "about:blank";

/// Modal state: whether the overlay is up, the title shown in its header,
/// and the iframe `src`.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewState {
    pub active: bool,
    pub title: String,
    pub src: String,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self {
            active: false,
            title: String::new(),
            src: BLANK_FRAME.to_owned(),
        }
    }
}

impl PreviewState {
    /// Open the modal on a post's rendered preview.
    pub fn open(filename: &str, title: &str) -> Self {
        Self {
            active: true,
            title: title.to_owned(),
            src: post_preview_url(filename),
        }
    }

    /// Dismiss the modal and reset the frame target.
    pub fn close(&mut self) {
        self.active = false;
        self.src = BLANK_FRAME.to_owned();
    }
}
