//! GET /api/changes - Server-Sent Events stream of deck changes.
//!
//! Each event carries the envelope as JSON, with the event type as the SSE
//! `event` name and the envelope id as the SSE `id`. Clients re-query the
//! views they display when a change arrives.

use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;

use crate::adapters::events::ChangeFeed;
use crate::domain::foundation::EventEnvelope;

/// Creates the change stream router.
pub fn change_routes(feed: ChangeFeed) -> Router {
    Router::new()
        .route("/", get(stream_changes))
        .with_state(feed)
}

pub async fn stream_changes(
    State(feed): State<ChangeFeed>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = feed.subscribe();
    tracing::debug!(listeners = feed.listener_count(), "Change stream opened");

    let events = stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok(envelope) => match to_sse_event(&envelope) {
                    Ok(event) => return Some((Ok(event), receiver)),
                    Err(e) => {
                        tracing::warn!(event_id = %envelope.event_id, error = %e, "Skipping unserializable change");
                    }
                },
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Change stream listener lagged");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}

fn to_sse_event(envelope: &EventEnvelope) -> Result<Event, axum::Error> {
    Event::default()
        .event(envelope.event_type.as_str())
        .id(envelope.event_id.as_str())
        .json_data(envelope)
}
