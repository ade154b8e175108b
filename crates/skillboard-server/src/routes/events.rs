use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use std::convert::Infallible;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;

use crate::state::{AppState, BoardEvent};

/// Payload of one `update` event. A subscriber that fell behind gets `all`
/// and should refetch everything.
fn payload(msg: Result<BoardEvent, BroadcastStreamRecvError>) -> &'static str {
    match msg {
        Ok(event) => event.as_str(),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "sse subscriber lagged");
            "all"
        }
    }
}

/// GET /api/events: SSE stream of `update` events naming the collection that
/// changed (`consultants` or `submissions`).
pub async fn sse_events(State(app): State<AppState>) -> impl axum::response::IntoResponse {
    let rx = app.event_tx.subscribe();
    let stream = BroadcastStream::new(rx)
        .map(|msg| Ok::<Event, Infallible>(Event::default().event("update").data(payload(msg))));
    Sse::new(stream).keep_alive(KeepAlive::default())
}
