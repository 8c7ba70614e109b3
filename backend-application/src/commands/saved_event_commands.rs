use backend_domain::{Event, UndoResponse};

use crate::{AppError, AppState};

/// Upserts a full copy of the event into the caller's saved set, keyed by
/// name. Name is the storage key, so an event without one is unrepresentable.
pub async fn save_event(state: &AppState, event: Event) -> Result<(), AppError> {
    if event.name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "event name must not be empty".to_string(),
        ));
    }
    state.saved_repo.upsert_saved(&state.user, &event).await?;
    state.metrics.record_save();
    Ok(())
}

pub async fn delete_saved(state: &AppState, name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    state.saved_repo.delete_saved(&state.user, trimmed).await?;
    state.metrics.record_delete();
    Ok(())
}

/// The shake-to-undo action: removes the most recently saved event and
/// reports which one went away. NotFound when the saved set is empty.
pub async fn undo_last_saved(state: &AppState) -> Result<UndoResponse, AppError> {
    let saved = state.saved_repo.fetch_saved(&state.user).await?;
    let last = saved.into_iter().last().ok_or(AppError::NotFound)?;
    state
        .saved_repo
        .delete_saved(&state.user, &last.name)
        .await?;
    state.metrics.record_delete();
    Ok(UndoResponse { removed: last })
}
