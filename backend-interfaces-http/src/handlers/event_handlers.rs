use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::event_commands;
use backend_application::queries::{event_queries, media_queries};
use backend_application::AppState;
use backend_domain::{Event, EventListQuery, MediaQuery, MediaResponse, SeedResponse};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let events = event_queries::list_events(&state, query).await?;
    Ok(Json(events))
}

pub async fn seed_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SeedResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = event_commands::seed_if_empty(&state).await?;
    Ok(Json(response))
}

pub async fn event_media(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MediaQuery>,
) -> Result<Json<MediaResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let response = media_queries::event_media(query)?;
    Ok(Json(response))
}
