#![allow(dead_code)]

use std::pin::Pin;

use futures::{FutureExt, Stream, StreamExt};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use vigil_notify::events::{AppEvent, NoticeLevel};

pub type EventStream = Pin<Box<dyn Stream<Item = Result<AppEvent, BroadcastStreamRecvError>> + Send>>;

/// Drain every event already buffered on the subscription without waiting.
pub fn drain_events(stream: &mut EventStream) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Some(Some(Ok(event))) = stream.next().now_or_never() {
        events.push(event);
    }
    events
}

pub fn error_notices(events: &[AppEvent]) -> usize {
    events
        .iter()
        .filter(|event| {
            matches!(
                event,
                AppEvent::Notice {
                    level: NoticeLevel::Error,
                    ..
                }
            )
        })
        .count()
}

pub fn info_notices(events: &[AppEvent]) -> usize {
    events
        .iter()
        .filter(|event| {
            matches!(
                event,
                AppEvent::Notice {
                    level: NoticeLevel::Info,
                    ..
                }
            )
        })
        .count()
}
