#![allow(dead_code)]

use std::sync::Arc;

use time::macros::datetime;
use vigil_notify::api::ApiError;
use vigil_notify::models::{
    Notification, NotificationKind, NotificationPage, PostRef, SenderSummary,
};
use vigil_notify::services::NotificationList;

pub fn sender(username: &str) -> SenderSummary {
    SenderSummary {
        id: uuid::Uuid::new_v4().to_string(),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        profile_image: None,
    }
}

/// Comment notification with a navigable post target.
pub fn notification(id: &str, is_read: bool) -> Notification {
    Notification {
        id: id.to_string(),
        sender: sender("ada"),
        kind: NotificationKind::Comment,
        message: "ada commented on your post".to_string(),
        is_read,
        post: Some(PostRef {
            id: format!("post-{}", id),
            title: Some("Threat hunting 101".to_string()),
            content: None,
            post_type: Some("article".to_string()),
        }),
        created_at: datetime!(2026-01-12 10:00:00 UTC),
        reaction: None,
    }
}

/// Follow notification with no navigable target.
pub fn notification_without_post(id: &str) -> Notification {
    Notification {
        post: None,
        kind: NotificationKind::Follow,
        ..notification(id, false)
    }
}

pub fn page_of(results: Vec<Notification>) -> NotificationPage {
    NotificationPage {
        count: results.len() as u64,
        next: None,
        previous: None,
        results,
    }
}

pub fn empty_page() -> NotificationPage {
    page_of(Vec::new())
}

pub fn as_list(results: Vec<Notification>) -> NotificationList {
    results.into_iter().map(Arc::new).collect()
}

pub fn server_error() -> ApiError {
    ApiError::Server {
        status: 500,
        body: "internal error".to_string(),
    }
}
