use std::sync::Arc;

use tracing::warn;

use crate::api::{ApiError, ApiResult, NotificationGateway};
use crate::events::{AppEvent, EventBus, LocalEventBus, NoticeLevel};
use crate::models::{NotificationPage, PostRef};
use crate::services::read_state::{self, NotificationList};

/// Dropdown lifecycle for the navbar bell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownState {
    Closed,
    OpenLoading,
    OpenLoaded,
}

/// What the caller should do after a notification is selected.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectOutcome {
    /// Navigate to the referenced post.
    Navigate(PostRef),
    /// No navigable target; a transient notice was shown.
    NoTarget,
    /// The mark-read call failed; nothing changed and the dropdown stays open.
    Failed,
}

/// The navbar badge surface: owns its own copy of the notification list,
/// re-fetches it each time the dropdown opens, and never observes changes
/// made by sibling surfaces.
pub struct NavbarSurface {
    gateway: Arc<dyn NotificationGateway>,
    bus: LocalEventBus,
    state: DropdownState,
    list: NotificationList,
    fetch_generation: u64,
    token_balance: i64,
}

impl NavbarSurface {
    pub fn new(gateway: Arc<dyn NotificationGateway>, bus: LocalEventBus) -> Self {
        Self {
            gateway,
            bus,
            state: DropdownState::Closed,
            list: Vec::new(),
            fetch_generation: 0,
            token_balance: 0,
        }
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    pub fn list(&self) -> &NotificationList {
        &self.list
    }

    pub fn unread_count(&self) -> usize {
        read_state::unread_count(&self.list)
    }

    pub fn badge_label(&self) -> String {
        read_state::badge_label(self.unread_count())
    }

    pub fn token_balance(&self) -> i64 {
        self.token_balance
    }

    /// Begin opening the dropdown. Returns the generation token the caller
    /// must hand back to `complete_open`; any older token is stale.
    pub fn begin_open(&mut self) -> u64 {
        self.state = DropdownState::OpenLoading;
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Land a fetch result. Resolutions from a superseded fetch, or ones
    /// arriving after the dropdown closed, are discarded.
    pub fn complete_open(&mut self, generation: u64, result: ApiResult<NotificationPage>) {
        if generation != self.fetch_generation || self.state == DropdownState::Closed {
            return;
        }
        match result {
            Ok(page) => {
                self.list = page.results.into_iter().map(Arc::new).collect();
            }
            Err(err) => {
                // Silent degradation: empty list, no user-facing notice.
                warn!(error = %err, "notification fetch failed; showing empty list");
                if matches!(err, ApiError::Auth) {
                    self.bus.publish(AppEvent::SessionExpired);
                }
                self.list = Vec::new();
            }
        }
        self.state = DropdownState::OpenLoaded;
    }

    /// Click on the bell: begin, fetch, land.
    pub async fn open(&mut self) {
        let generation = self.begin_open();
        let result = self.gateway.list_notifications().await;
        self.complete_open(generation, result);
    }

    /// Click outside, Escape, explicit close, or navigation away.
    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
    }

    /// Click on one entry while the dropdown is open: mark it read, then
    /// resolve the navigation target and close.
    pub async fn select(&mut self, id: &str) -> SelectOutcome {
        let Some(entry) = self.list.iter().find(|n| n.id == id).cloned() else {
            self.close();
            return SelectOutcome::NoTarget;
        };

        if !entry.is_read {
            match self.gateway.mark_read(id).await {
                Ok(()) => self.list = read_state::apply_read(&self.list, id),
                Err(err) => {
                    if matches!(err, ApiError::Auth) {
                        self.bus.publish(AppEvent::SessionExpired);
                    }
                    self.bus
                        .notice(NoticeLevel::Error, "Could not mark notification as read");
                    return SelectOutcome::Failed;
                }
            }
        }

        let outcome = match &entry.post {
            Some(post) => SelectOutcome::Navigate(post.clone()),
            None => {
                self.bus
                    .notice(NoticeLevel::Info, "This notification has no associated content");
                SelectOutcome::NoTarget
            }
        };
        self.close();
        outcome
    }

    /// The portal reports an updated list upward; install it.
    pub fn install_list(&mut self, list: NotificationList) {
        self.list = list;
    }

    /// Sibling concern sharing the component: mirror the token balance.
    /// No data coupling to notifications.
    pub fn handle_event(&mut self, event: &AppEvent) {
        if let AppEvent::TokenBalanceChanged { balance } = event {
            self.token_balance = *balance;
        }
    }
}
