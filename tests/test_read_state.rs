mod helpers;

use std::sync::Arc;

use helpers::{as_list, notification};
use vigil_notify::services::{apply_read, apply_read_all, badge_label, unread_count};

#[test]
fn test_partial_read_scenario() {
    // Three notifications, two unread (a, b), one read (c)
    let list = as_list(vec![
        notification("a", false),
        notification("b", false),
        notification("c", true),
    ]);
    assert_eq!(unread_count(&list), 2);

    let updated = apply_read(&list, "a");

    assert_eq!(updated.len(), 3);
    assert!(updated[0].is_read, "a must be read");
    assert!(!updated[1].is_read, "b must still be unread");
    assert!(updated[2].is_read, "c must still be read");
    assert_eq!(unread_count(&updated), 1);
}

#[test]
fn test_untouched_entries_share_pointers() {
    let list = as_list(vec![notification("a", false), notification("b", false)]);
    let updated = apply_read(&list, "a");
    assert!(Arc::ptr_eq(&list[1], &updated[1]));
    assert!(!Arc::ptr_eq(&list[0], &updated[0]));
}

#[test]
fn test_apply_read_twice_is_idempotent() {
    let list = as_list(vec![notification("a", false)]);
    let once = apply_read(&list, "a");
    let twice = apply_read(&once, "a");
    assert!(Arc::ptr_eq(&once[0], &twice[0]));
}

#[test]
fn test_apply_read_unknown_id_returns_list_unchanged() {
    let list = as_list(vec![notification("a", false)]);
    let updated = apply_read(&list, "nope");
    assert_eq!(updated.len(), 1);
    assert!(Arc::ptr_eq(&list[0], &updated[0]));
}

#[test]
fn test_apply_read_all_marks_everything() {
    let list = as_list(vec![
        notification("a", false),
        notification("b", true),
        notification("c", false),
    ]);
    let updated = apply_read_all(&list);
    assert_eq!(updated.len(), 3);
    assert!(updated.iter().all(|n| n.is_read));
    assert_eq!(unread_count(&updated), 0);
}

#[test]
fn test_badge_label_boundary() {
    assert_eq!(badge_label(9), "9");
    assert_eq!(badge_label(10), "9+");
}
