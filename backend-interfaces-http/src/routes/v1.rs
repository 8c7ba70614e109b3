use axum::Router;

use backend_application::AppState;

use crate::handlers::{event_handlers, motion_handlers, ops_handlers, saved_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", axum::routing::get(event_handlers::list_events))
        .route(
            "/v1/events/seed",
            axum::routing::post(event_handlers::seed_events),
        )
        .route(
            "/v1/events/media",
            axum::routing::get(event_handlers::event_media),
        )
        .route(
            "/v1/saved",
            axum::routing::get(saved_handlers::list_saved).put(saved_handlers::save_event),
        )
        .route(
            "/v1/saved/undo-last",
            axum::routing::post(saved_handlers::undo_last_saved),
        )
        .route(
            "/v1/saved/:name",
            axum::routing::get(saved_handlers::saved_status)
                .delete(saved_handlers::delete_saved),
        )
        .route(
            "/v1/motion/samples",
            axum::routing::post(motion_handlers::ingest_samples),
        )
        .route(
            "/v1/ops/health/live",
            axum::routing::get(ops_handlers::health_live),
        )
        .route(
            "/v1/ops/health/ready",
            axum::routing::get(ops_handlers::health_ready),
        )
        .route(
            "/v1/ops/metrics/prometheus",
            axum::routing::get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
