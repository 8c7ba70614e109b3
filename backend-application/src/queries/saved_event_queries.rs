use backend_domain::{Event, SavedStatusResponse};

use crate::{AppError, AppState};

pub async fn list_saved(state: &AppState) -> Result<Vec<Event>, AppError> {
    let saved = state.saved_repo.fetch_saved(&state.user).await?;
    Ok(saved)
}

/// Existence check by name. An empty name cannot be a saved-store key, so
/// it is rejected rather than looked up.
pub async fn is_saved(state: &AppState, name: &str) -> Result<SavedStatusResponse, AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    let saved = state.saved_repo.saved_exists(&state.user, trimmed).await?;
    Ok(SavedStatusResponse {
        name: trimmed.to_string(),
        saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_state, MemoryEventStore, MemorySavedStore};
    use backend_domain::sample_events;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_saved_is_empty_for_a_fresh_user() {
        let state = test_state(
            Arc::new(MemoryEventStore::default()),
            Arc::new(MemorySavedStore::default()),
        );
        assert!(list_saved(&state).await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn is_saved_rejects_blank_names() {
        let state = test_state(
            Arc::new(MemoryEventStore::default()),
            Arc::new(MemorySavedStore::default()),
        );
        let err = is_saved(&state, "   ").await.expect_err("reject");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn is_saved_reflects_the_saved_store() {
        let saved_store = Arc::new(MemorySavedStore::default());
        let state = test_state(Arc::new(MemoryEventStore::default()), saved_store);
        let event = sample_events().remove(0);

        crate::commands::saved_event_commands::save_event(&state, event.clone())
            .await
            .expect("save");
        let status = is_saved(&state, &event.name).await.expect("check");
        assert!(status.saved);
        let status = is_saved(&state, "Unknown Event").await.expect("check");
        assert!(!status.saved);
    }
}
