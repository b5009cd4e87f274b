use std::sync::Arc;

use crate::models::Notification;

/// Shared-ownership notification list. The reducers clone only the entry
/// they touch, so untouched entries keep pointer identity across
/// generations and shallow diffing stays cheap.
pub type NotificationList = Vec<Arc<Notification>>;

/// Highest count the badge renders as a literal number.
pub const BADGE_CAP: usize = 9;

/// Return a new list with the matching entry marked read. Entries that do
/// not match, and a matching entry that is already read, are carried over
/// unchanged. An absent id is a no-op, not an error.
pub fn apply_read(list: &[Arc<Notification>], id: &str) -> NotificationList {
    list.iter()
        .map(|entry| {
            if entry.id == id && !entry.is_read {
                let mut updated = Notification::clone(entry);
                updated.is_read = true;
                Arc::new(updated)
            } else {
                Arc::clone(entry)
            }
        })
        .collect()
}

/// Return a new list with every entry marked read.
pub fn apply_read_all(list: &[Arc<Notification>]) -> NotificationList {
    list.iter()
        .map(|entry| {
            if entry.is_read {
                Arc::clone(entry)
            } else {
                let mut updated = Notification::clone(entry);
                updated.is_read = true;
                Arc::new(updated)
            }
        })
        .collect()
}

pub fn unread_count(list: &[Arc<Notification>]) -> usize {
    list.iter().filter(|entry| !entry.is_read).count()
}

/// Badge text: the literal count up to `BADGE_CAP`, "9+" above it.
pub fn badge_label(count: usize) -> String {
    if count > BADGE_CAP {
        format!("{}+", BADGE_CAP)
    } else {
        count.to_string()
    }
}
