// Wire payloads for the HTTP surface plus resolved runtime configuration

use serde::{Deserialize, Serialize};

use crate::entities::Event;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub session_path: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub store_url: String,
    pub store_database: String,
    pub store_user: Option<String>,
    pub store_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EventListQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct MediaResponse {
    pub name: String,
    pub clip: Option<MediaClipBody>,
}

#[derive(Debug, Serialize)]
pub struct MediaClipBody {
    pub kind: String,
    pub asset: String,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub events: Vec<Event>,
    /// False when the batch write failed and the list shown is in-memory only.
    pub persisted: bool,
}

#[derive(Debug, Serialize)]
pub struct SavedStatusResponse {
    pub name: String,
    pub saved: bool,
}

#[derive(Debug, Serialize)]
pub struct UndoResponse {
    pub removed: Event,
}

/// Batched accelerometer upload from the device front-end.
#[derive(Debug, Deserialize)]
pub struct MotionEnvelope {
    pub schema_version: String,
    pub samples: Vec<MotionSample>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MotionSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub timestamp_ms: i64,
}

#[derive(Debug, Serialize)]
pub struct MotionResponse {
    pub triggered: bool,
    /// Present when a shake fired and the user has a most recent saved event
    /// to offer for removal.
    pub prompt: Option<UndoPrompt>,
}

#[derive(Debug, Serialize)]
pub struct UndoPrompt {
    pub event: Event,
    pub message: String,
}
