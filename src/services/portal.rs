use std::sync::Arc;

use crate::api::{ApiError, NotificationGateway};
use crate::events::{AppEvent, EventBus, LocalEventBus, NoticeLevel};
use crate::models::Notification;
use crate::services::read_state::{self, NotificationList};

/// Entries the dropdown portal renders before deferring to "view all".
pub const PREVIEW_LIMIT: usize = 5;

/// The dropdown portal. Stateless with respect to the list: it receives the
/// owner's copy and hands back the updated list instead of keeping an
/// authoritative one of its own.
pub struct PortalView {
    gateway: Arc<dyn NotificationGateway>,
    bus: LocalEventBus,
    mark_all_in_flight: bool,
}

impl PortalView {
    pub fn new(gateway: Arc<dyn NotificationGateway>, bus: LocalEventBus) -> Self {
        Self {
            gateway,
            bus,
            mark_all_in_flight: false,
        }
    }

    /// At most the first `PREVIEW_LIMIT` entries.
    pub fn preview(list: &[Arc<Notification>]) -> &[Arc<Notification>] {
        &list[..list.len().min(PREVIEW_LIMIT)]
    }

    /// Some(total) when the list overflows the preview; rendered as the
    /// "view all N" affordance that navigates to the standalone page.
    pub fn view_all(list: &[Arc<Notification>]) -> Option<usize> {
        (list.len() > PREVIEW_LIMIT).then_some(list.len())
    }

    /// The "mark all read" button is hidden entirely at zero unread.
    pub fn mark_all_visible(list: &[Arc<Notification>]) -> bool {
        read_state::unread_count(list) > 0
    }

    pub fn is_mark_all_in_flight(&self) -> bool {
        self.mark_all_in_flight
    }

    /// Click on one entry. Returns the updated list for the owning surface
    /// to install; None means nothing changed.
    pub async fn select(
        &self,
        list: &[Arc<Notification>],
        id: &str,
    ) -> Option<NotificationList> {
        let entry = list.iter().find(|n| n.id == id)?;
        if entry.is_read {
            return None;
        }
        match self.gateway.mark_read(id).await {
            Ok(()) => Some(read_state::apply_read(list, id)),
            Err(err) => {
                if matches!(err, ApiError::Auth) {
                    self.bus.publish(AppEvent::SessionExpired);
                }
                self.bus
                    .notice(NoticeLevel::Error, "Could not mark notification as read");
                None
            }
        }
    }

    /// Mark everything read. Disabled while a previous call is in flight
    /// and a no-op at zero unread. Returns the fully-read list on success.
    pub async fn mark_all_read(&mut self, list: &[Arc<Notification>]) -> Option<NotificationList> {
        if self.mark_all_in_flight || read_state::unread_count(list) == 0 {
            return None;
        }
        self.mark_all_in_flight = true;
        let result = self.gateway.mark_all_read().await;
        self.mark_all_in_flight = false;

        match result {
            Ok(()) => Some(read_state::apply_read_all(list)),
            Err(err) => {
                if matches!(err, ApiError::Auth) {
                    self.bus.publish(AppEvent::SessionExpired);
                }
                self.bus
                    .notice(NoticeLevel::Error, "Could not mark notifications as read");
                None
            }
        }
    }
}
