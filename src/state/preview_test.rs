use super::*;

#[test]
fn preview_state_starts_inactive_on_blank() {
    let s = PreviewState::default();
    assert!(!s.active);
    assert_eq!(s.src, BLANK_FRAME);
    assert!(s.title.is_empty());
}

#[test]
fn open_targets_encoded_preview_url() {
    let s = PreviewState::open("launch week.html", "Launch Week");
    assert!(s.active);
    assert_eq!(s.title, "Launch Week");
    assert_eq!(s.src, "/portal/api/posts/launch%20week.html/preview");
}

#[test]
fn close_resets_frame_to_blank() {
    let mut s = PreviewState::open("a.html", "A");
    s.close();
    assert!(!s.active);
    assert_eq!(s.src, BLANK_FRAME);
}

#[test]
fn close_is_safe_when_already_closed() {
    let mut s = PreviewState::default();
    s.close();
    assert!(!s.active);
    assert_eq!(s.src, BLANK_FRAME);
}
