use tracing::{error, warn};

use backend_domain::{sample_events, SeedResponse};

use crate::{AppError, AppState};

/// Seeds the shared collection with the fixed sample list when it is empty,
/// then re-reads. On a failed batch write the in-memory list is still
/// returned (`persisted: false`) without touching the store — the original
/// app showed the fallback regardless, so local and remote state may
/// diverge here.
pub async fn seed_if_empty(state: &AppState) -> Result<SeedResponse, AppError> {
    let existing = match state.event_repo.fetch_events().await {
        Ok(events) => events,
        Err(err) => {
            warn!("seed probe failed, serving fallback list: {err}");
            state.metrics.record_store_error();
            state.metrics.record_fallback_served();
            return Ok(SeedResponse {
                events: sample_events(),
                persisted: false,
            });
        }
    };
    if !existing.is_empty() {
        return Ok(SeedResponse {
            events: existing,
            persisted: true,
        });
    }

    let defaults = sample_events();
    match state.event_repo.insert_events(&defaults).await {
        Ok(()) => {
            state.metrics.record_seed();
            let events = match state.event_repo.fetch_events().await {
                Ok(events) if !events.is_empty() => events,
                _ => defaults,
            };
            Ok(SeedResponse {
                events,
                persisted: true,
            })
        }
        Err(err) => {
            error!("seed batch write failed, keeping in-memory list: {err}");
            state.metrics.record_store_error();
            Ok(SeedResponse {
                events: defaults,
                persisted: false,
            })
        }
    }
}
