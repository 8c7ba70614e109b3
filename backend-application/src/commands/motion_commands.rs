use backend_domain::{MotionResponse, MotionSample, UndoPrompt};

use crate::{AppError, AppState};

/// Feeds a batch of accelerometer samples through the shared shake
/// detector. A trigger resolves the undo-last-saved prompt: the most
/// recently saved event, when there is one.
pub async fn ingest_samples(
    state: &AppState,
    samples: Vec<MotionSample>,
) -> Result<MotionResponse, AppError> {
    state.metrics.record_shake_samples(samples.len());
    let triggered = {
        let mut detector = state.shake_detector.lock().await;
        detector.feed_batch(&samples)
    };
    if !triggered {
        return Ok(MotionResponse {
            triggered: false,
            prompt: None,
        });
    }

    state.metrics.record_shake_trigger();
    let saved = state.saved_repo.fetch_saved(&state.user).await?;
    let prompt = saved.into_iter().last().map(|event| UndoPrompt {
        message: format!(
            "Do you want to remove '{}' from saved events?",
            event.name
        ),
        event,
    });
    Ok(MotionResponse {
        triggered: true,
        prompt,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::saved_event_commands;
    use crate::test_support::{test_state, MemoryEventStore, MemorySavedStore};
    use backend_domain::sample_events;
    use std::sync::Arc;

    fn quiet_then_shake() -> Vec<MotionSample> {
        vec![
            MotionSample {
                x: 0.0,
                y: 0.0,
                z: 9.8,
                timestamp_ms: 1_000,
            },
            MotionSample {
                x: 18.0,
                y: 15.0,
                z: 25.0,
                timestamp_ms: 1_200,
            },
        ]
    }

    #[tokio::test]
    async fn quiet_samples_do_not_trigger() {
        let state = test_state(
            Arc::new(MemoryEventStore::default()),
            Arc::new(MemorySavedStore::default()),
        );
        let samples = vec![MotionSample {
            x: 0.0,
            y: 0.0,
            z: 9.8,
            timestamp_ms: 1_000,
        }];
        let response = ingest_samples(&state, samples).await.expect("ingest");
        assert!(!response.triggered);
        assert!(response.prompt.is_none());
    }

    #[tokio::test]
    async fn shake_with_saved_events_offers_the_last_one() {
        let state = test_state(
            Arc::new(MemoryEventStore::default()),
            Arc::new(MemorySavedStore::default()),
        );
        let events = sample_events();
        saved_event_commands::save_event(&state, events[0].clone())
            .await
            .expect("save");
        saved_event_commands::save_event(&state, events[3].clone())
            .await
            .expect("save");

        let response = ingest_samples(&state, quiet_then_shake())
            .await
            .expect("ingest");
        assert!(response.triggered);
        let prompt = response.prompt.expect("prompt");
        assert_eq!(prompt.event, events[3]);
        assert!(prompt.message.contains("Fun Fair"));
    }

    #[tokio::test]
    async fn shake_with_nothing_saved_has_no_prompt() {
        let state = test_state(
            Arc::new(MemoryEventStore::default()),
            Arc::new(MemorySavedStore::default()),
        );
        let response = ingest_samples(&state, quiet_then_shake())
            .await
            .expect("ingest");
        assert!(response.triggered);
        assert!(response.prompt.is_none());
    }
}
