use tracing::warn;

use backend_domain::{filter_events, sample_events, Event, EventListQuery};

use crate::{AppError, AppState};

/// Lists the shared collection, falling back to the fixed sample list when
/// the store is empty or unreachable. An optional `q` applies the
/// case-insensitive any-field substring filter. The read path never fails:
/// callers cannot tell "empty" from "unreachable" (the original app's
/// behavior); the distinction lives in logs and metrics only.
pub async fn list_events(
    state: &AppState,
    query: EventListQuery,
) -> Result<Vec<Event>, AppError> {
    state.metrics.record_list_request();
    let events = fetch_with_fallback(state).await;
    match query.q {
        Some(term) => Ok(filter_events(&events, &term)),
        None => Ok(events),
    }
}

pub(crate) async fn fetch_with_fallback(state: &AppState) -> Vec<Event> {
    match state.event_repo.fetch_events().await {
        Ok(events) if events.is_empty() => {
            state.metrics.record_fallback_served();
            sample_events()
        }
        Ok(events) => events,
        Err(err) => {
            warn!("event fetch failed, serving fallback list: {err}");
            state.metrics.record_store_error();
            state.metrics.record_fallback_served();
            sample_events()
        }
    }
}
