//! Server-sent event hub
//!
//! One broadcast channel per container ID. Publishers that find nobody
//! listening drop the event; there is no replay.

use axum::response::sse::{Event, KeepAlive, Sse};
use dashmap::DashMap;
use futures::stream::Stream;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::{debug, warn};

/// Event name the toast container listens for (`sse:toastUpdate`).
pub const TOAST_UPDATE: &str = "toastUpdate";
pub const PING: &str = "ping";

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
pub struct HubEvent {
    pub name: &'static str,
    pub data: String,
}

#[derive(Debug, Clone, Default)]
pub struct Hub {
    channels: Arc<DashMap<String, broadcast::Sender<HubEvent>>>,
}

impl Hub {
    pub fn new() -> Self {
        Self::default()
    }

    fn sender(&self, container_id: &str) -> broadcast::Sender<HubEvent> {
        self.channels
            .entry(container_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .value()
            .clone()
    }

    pub fn subscribe(&self, container_id: &str) -> broadcast::Receiver<HubEvent> {
        self.sender(container_id).subscribe()
    }

    /// Send `name` to every subscriber of `container_id`. Returns how many
    /// subscribers received it.
    pub fn publish(&self, container_id: &str, name: &'static str, data: impl Into<String>) -> usize {
        let Some(sender) = self.channels.get(container_id).map(|s| s.value().clone()) else {
            return 0;
        };
        let event = HubEvent {
            name,
            data: data.into(),
        };
        match sender.send(event) {
            Ok(n) => {
                debug!(container = container_id, event = name, receivers = n, "Published event");
                n
            }
            Err(_) => 0,
        }
    }

    pub fn subscribers(&self, container_id: &str) -> usize {
        self.channels
            .get(container_id)
            .map_or(0, |s| s.value().receiver_count())
    }
}

/// Stream of `container_id`'s events with an `event: ping` keepalive.
pub fn sse_stream(
    hub: &Hub,
    container_id: &str,
    keepalive: Duration,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = hub.subscribe(container_id);
    let stream = BroadcastStream::new(rx)
        .filter_map(|result| match result {
            Ok(event) => Some(event),
            Err(e) => {
                warn!("Broadcast receive error: {}", e);
                None
            }
        })
        .map(|event: HubEvent| Ok(Event::default().event(event.name).data(event.data)));

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(keepalive)
            .event(Event::default().event(PING).data(PING)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_reaches_subscribers_of_that_container() {
        let hub = Hub::new();
        let mut toasts = hub.subscribe("toasts");
        let mut other = hub.subscribe("other");

        assert_eq!(hub.publish("toasts", TOAST_UPDATE, "add"), 1);
        let event = toasts.recv().await.unwrap();
        assert_eq!(event.name, TOAST_UPDATE);
        assert_eq!(event.data, "add");
        assert!(other.try_recv().is_err());
    }

    #[test]
    fn publish_without_listeners_is_dropped() {
        let hub = Hub::new();
        assert_eq!(hub.publish("nobody", TOAST_UPDATE, ""), 0);
        assert_eq!(hub.subscribers("nobody"), 0);
    }
}
