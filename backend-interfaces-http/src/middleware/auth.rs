use std::io::Read;

use anyhow::{anyhow, Result};
use axum::http::HeaderMap;
use flate2::read::GzDecoder;

use backend_domain::{MotionEnvelope, MotionSample, RuntimeConfig};

pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    if let Some(api_token) = &config.api_token {
        return extract_bearer(headers)
            .map(|v| v == *api_token)
            .unwrap_or(false);
    }
    true
}

/// Decodes a batched accelerometer upload. Devices buffer samples and may
/// gzip the body before posting.
pub fn parse_samples(headers: &HeaderMap, body: &[u8]) -> Result<Vec<MotionSample>> {
    let content = maybe_gunzip(headers, body)?;
    let envelope: MotionEnvelope = serde_json::from_str(&content)?;
    if envelope.schema_version.trim() != "v1" {
        return Err(anyhow!(
            "unsupported schema_version '{}', expected 'v1'",
            envelope.schema_version
        ));
    }
    Ok(envelope.samples)
}

fn maybe_gunzip(headers: &HeaderMap, body: &[u8]) -> Result<String> {
    if let Some(encoding) = headers.get("Content-Encoding") {
        if encoding.to_str().unwrap_or("") == "gzip" {
            let mut decoder = GzDecoder::new(body);
            let mut out = String::new();
            decoder.read_to_string(&mut out)?;
            return Ok(out);
        }
    }
    Ok(String::from_utf8(body.to_vec())?)
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("Authorization")?.to_str().ok()?.trim();
    let prefix = "Bearer ";
    if !value.starts_with(prefix) {
        return None;
    }
    let token = value[prefix.len()..].trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
