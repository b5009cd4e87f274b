use futures::Stream;
use std::pin::Pin;
use tokio::sync::broadcast;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;

/// Severity of a transient user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// Application-wide events shared between loosely coupled surfaces.
/// Replaces ad hoc stringly-named signals with one closed set.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The user's token balance changed; the navbar mirrors it into a
    /// separate counter with no notification coupling.
    TokenBalanceChanged { balance: i64 },
    SidebarToggled,
    /// A gateway call came back 401. Subscribers handle session
    /// invalidation and the redirect to login.
    SessionExpired,
    /// Transient toast shown to the user.
    Notice { level: NoticeLevel, message: String },
}

/// Event bus for publishing and subscribing to application events
pub trait EventBus: Send + Sync {
    /// Publish an event to all subscribers
    fn publish(&self, event: AppEvent);

    /// Subscribe to events
    fn subscribe(
        &self,
    ) -> Pin<Box<dyn Stream<Item = Result<AppEvent, BroadcastStreamRecvError>> + Send>>;
}

/// Local in-memory implementation of EventBus
#[derive(Clone)]
pub struct LocalEventBus {
    tx: broadcast::Sender<AppEvent>,
}

impl LocalEventBus {
    /// Create a new event bus with specified capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Convenience for publishing a transient notice.
    pub fn notice(&self, level: NoticeLevel, message: impl Into<String>) {
        self.publish(AppEvent::Notice {
            level,
            message: message.into(),
        });
    }
}

impl EventBus for LocalEventBus {
    fn publish(&self, event: AppEvent) {
        // Fire-and-forget; nobody listening is not an error.
        if let Err(e) = self.tx.send(event) {
            tracing::debug!("No active subscribers for event: {}", e);
        }
    }

    fn subscribe(
        &self,
    ) -> Pin<Box<dyn Stream<Item = Result<AppEvent, BroadcastStreamRecvError>> + Send>> {
        let rx = self.tx.subscribe();
        Box::pin(BroadcastStream::new(rx))
    }
}

impl Default for LocalEventBus {
    fn default() -> Self {
        Self::new(1000)
    }
}
