use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use tracing::error;

use backend_application::commands::motion_commands;
use backend_application::AppState;
use backend_domain::MotionResponse;

use crate::error::HttpError;
use crate::middleware::{authorize, parse_samples};

pub async fn ingest_samples(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Bytes,
) -> Result<Json<MotionResponse>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }

    let samples = parse_samples(&headers, &body).map_err(|err| {
        error!("failed to parse motion body: {}", err);
        HttpError::BadRequest(err.to_string())
    })?;
    let response = motion_commands::ingest_samples(&state, samples).await?;
    Ok(Json(response))
}
