// Copyright (C) 2026 PeopleOS Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live change notifications for console clients.
//!
//! Events are informational only. Clients re-read pages over HTTP for the
//! authoritative snapshot, and nothing sent over the socket is executed.

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use peopleos_activity::ActivityLog;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

/// Events a slow client may fall behind by before it starts missing some.
const EVENT_BUFFER_SIZE: usize = 100;

/// A change notification pushed to console clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// Sent once when the socket opens.
    Connected {
        /// Server time, RFC 3339.
        #[serde(with = "time::serde::rfc3339")]
        timestamp: OffsetDateTime,
    },
    /// A command changed the snapshot.
    CommandApplied {
        /// Command name, e.g. `add_employee`.
        command: String,
        /// Id of the entity the command created, if any.
        created_id: Option<String>,
    },
    /// A command cascaded an activity entry.
    ActivityRecorded {
        /// The new entry.
        entry: ActivityLog,
    },
}

/// Fan-out of live events to every open socket.
#[derive(Clone)]
pub struct LiveEventBroadcaster {
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Publishes an event. With no open sockets the event is dropped.
    pub fn broadcast(&self, event: &LiveEvent) {
        let receivers: usize = self.tx.send(event.clone()).unwrap_or(0);
        debug!(?event, receivers, "Published live event");
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for GET `/live`.
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(broadcaster): AxumState<Arc<LiveEventBroadcaster>>,
) -> Response {
    let events: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();
    ws.on_upgrade(move |socket| stream_events(socket, events))
}

async fn stream_events(socket: WebSocket, mut events: broadcast::Receiver<LiveEvent>) {
    info!("Live client connected");
    let (mut outgoing, mut incoming) = socket.split();

    let Some(greeting) = encode(&LiveEvent::Connected {
        timestamp: OffsetDateTime::now_utc(),
    }) else {
        return;
    };
    if let Err(e) = outgoing.send(greeting).await {
        warn!(?e, "Could not greet live client");
        return;
    }

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    let Some(message) = encode(&event) else { continue };
                    if outgoing.send(message).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live client fell behind; events dropped");
                }
                Err(RecvError::Closed) => break,
            },
            message = incoming.next() => match message {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => {}
                Some(Ok(_)) => debug!("Ignoring message from live client"),
                Some(Err(e)) => {
                    warn!(?e, "Live socket error");
                    break;
                }
            },
        }
    }

    info!("Live client disconnected");
}

fn encode(event: &LiveEvent) -> Option<Message> {
    serde_json::to_string(event)
        .map(|json| Message::Text(json.into()))
        .map_err(|e| warn!(?e, "Could not encode live event"))
        .ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_broadcast_without_subscribers_is_dropped() {
        let broadcaster: LiveEventBroadcaster = LiveEventBroadcaster::new();
        broadcaster.broadcast(&LiveEvent::CommandApplied {
            command: String::from("remove_employee"),
            created_id: None,
        });
        assert_eq!(broadcaster.tx.receiver_count(), 0);
    }

    #[test]
    fn test_every_subscriber_sees_the_event() {
        let broadcaster: LiveEventBroadcaster = LiveEventBroadcaster::new();
        let mut dashboard = broadcaster.subscribe();
        let mut directory = broadcaster.subscribe();
        let event: LiveEvent = LiveEvent::CommandApplied {
            command: String::from("add_department"),
            created_id: Some(String::from("dept-1")),
        };

        broadcaster.broadcast(&event);

        assert_eq!(dashboard.try_recv().unwrap(), event);
        assert_eq!(directory.try_recv().unwrap(), event);
    }

    #[test]
    fn test_event_is_tagged_by_type() {
        let event: LiveEvent = LiveEvent::CommandApplied {
            command: String::from("add_employee"),
            created_id: Some(String::from("emp-1")),
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "command_applied");
        assert_eq!(json["command"], "add_employee");
        assert_eq!(json["created_id"], "emp-1");
    }

    #[test]
    fn test_connected_timestamp_is_rfc3339() {
        let event: LiveEvent = LiveEvent::Connected {
            timestamp: datetime!(2025-06-20 12:00 UTC),
        };

        let json: serde_json::Value = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "connected");
        assert_eq!(json["timestamp"], "2025-06-20T12:00:00Z");
    }

    #[test]
    fn test_encode_produces_text_frame() {
        let event: LiveEvent = LiveEvent::CommandApplied {
            command: String::from("set_filters"),
            created_id: None,
        };

        let message: Message = encode(&event).unwrap();

        assert!(matches!(message, Message::Text(text) if text.as_str().contains("set_filters")));
    }
}
