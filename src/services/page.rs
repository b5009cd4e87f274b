use std::sync::Arc;

use tracing::warn;

use crate::api::{ApiError, ApiResult, NotificationGateway};
use crate::events::{AppEvent, EventBus, LocalEventBus, NoticeLevel};
use crate::models::NotificationPage;
use crate::services::read_state::{self, NotificationList};

/// The standalone notifications page. Fetches and owns its own list with no
/// cross-surface sync; the navbar and this page can disagree about read
/// state until each next re-fetches on its own mount/open cycle.
pub struct NotificationsPage {
    gateway: Arc<dyn NotificationGateway>,
    bus: LocalEventBus,
    list: NotificationList,
    fetch_generation: u64,
    loaded: bool,
}

impl NotificationsPage {
    pub fn new(gateway: Arc<dyn NotificationGateway>, bus: LocalEventBus) -> Self {
        Self {
            gateway,
            bus,
            list: Vec::new(),
            fetch_generation: 0,
            loaded: false,
        }
    }

    pub fn list(&self) -> &NotificationList {
        &self.list
    }

    pub fn unread_count(&self) -> usize {
        read_state::unread_count(&self.list)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Begin a fetch; returns the generation token for `complete_load`.
    pub fn begin_load(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Land a fetch result; resolutions from superseded fetches are dropped.
    pub fn complete_load(&mut self, generation: u64, result: ApiResult<NotificationPage>) {
        if generation != self.fetch_generation {
            return;
        }
        match result {
            Ok(page) => {
                self.list = page.results.into_iter().map(Arc::new).collect();
            }
            Err(err) => {
                // Same silent degradation as the navbar surface.
                warn!(error = %err, "notification page fetch failed; showing empty list");
                if matches!(err, ApiError::Auth) {
                    self.bus.publish(AppEvent::SessionExpired);
                }
                self.list = Vec::new();
            }
        }
        self.loaded = true;
    }

    /// Fetch on mount or explicit refresh.
    pub async fn load(&mut self) {
        let generation = self.begin_load();
        let result = self.gateway.list_notifications().await;
        self.complete_load(generation, result);
    }

    /// Mark one entry read. Returns true when the list changed.
    pub async fn mark_read(&mut self, id: &str) -> bool {
        let Some(entry) = self.list.iter().find(|n| n.id == id) else {
            return false;
        };
        if entry.is_read {
            return false;
        }
        match self.gateway.mark_read(id).await {
            Ok(()) => {
                self.list = read_state::apply_read(&self.list, id);
                true
            }
            Err(err) => {
                if matches!(err, ApiError::Auth) {
                    self.bus.publish(AppEvent::SessionExpired);
                }
                self.bus
                    .notice(NoticeLevel::Error, "Could not mark notification as read");
                false
            }
        }
    }

    /// Mark everything read. Returns true when the list changed.
    pub async fn mark_all_read(&mut self) -> bool {
        if self.unread_count() == 0 {
            return false;
        }
        match self.gateway.mark_all_read().await {
            Ok(()) => {
                self.list = read_state::apply_read_all(&self.list);
                true
            }
            Err(err) => {
                if matches!(err, ApiError::Auth) {
                    self.bus.publish(AppEvent::SessionExpired);
                }
                self.bus
                    .notice(NoticeLevel::Error, "Could not mark notifications as read");
                false
            }
        }
    }
}
