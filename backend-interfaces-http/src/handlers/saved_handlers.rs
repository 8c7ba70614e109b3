use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::saved_event_commands;
use backend_application::queries::saved_event_queries;
use backend_application::AppState;
use backend_domain::{Event, SavedStatusResponse, UndoResponse};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_saved(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let saved = saved_event_queries::list_saved(&state).await?;
    Ok(Json(saved))
}

pub async fn save_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(event): Json<Event>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    saved_event_commands::save_event(&state, event).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn saved_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<Json<SavedStatusResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let status = saved_event_queries::is_saved(&state, &name).await?;
    Ok(Json(status))
}

pub async fn delete_saved(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(name): Path<String>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    saved_event_commands::delete_saved(&state, &name).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn undo_last_saved(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UndoResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = saved_event_commands::undo_last_saved(&state).await?;
    Ok(Json(response))
}
