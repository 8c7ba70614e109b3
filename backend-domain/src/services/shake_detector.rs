// Shake gesture gate over raw accelerometer samples
// Magnitude-of-change-over-time heuristic, not a real jerk detector; the
// constants are carried over verbatim for behavioral parity.

use crate::entities::MotionSample;

pub const DEBOUNCE_WINDOW_MS: i64 = 150;
pub const SPEED_THRESHOLD: f32 = 700.0;
const SPEED_SCALE: f32 = 10_000.0;

#[derive(Debug, Default)]
pub struct ShakeDetector {
    last_update_ms: i64,
    last_x: f32,
    last_y: f32,
    last_z: f32,
}

impl ShakeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one sample. Samples inside the debounce window are dropped
    /// without updating any state; an accepted sample becomes the new
    /// reference point whether or not it triggered.
    pub fn feed(&mut self, sample: MotionSample) -> bool {
        let diff_ms = sample.timestamp_ms - self.last_update_ms;
        if diff_ms <= DEBOUNCE_WINDOW_MS {
            return false;
        }
        self.last_update_ms = sample.timestamp_ms;
        let delta = sample.x + sample.y + sample.z - self.last_x - self.last_y - self.last_z;
        let speed = delta.abs() / diff_ms as f32 * SPEED_SCALE;
        self.last_x = sample.x;
        self.last_y = sample.y;
        self.last_z = sample.z;
        speed > SPEED_THRESHOLD
    }

    /// Runs a batch in order; true when any sample triggered.
    pub fn feed_batch(&mut self, samples: &[MotionSample]) -> bool {
        let mut triggered = false;
        for sample in samples {
            triggered |= self.feed(*sample);
        }
        triggered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32, z: f32, timestamp_ms: i64) -> MotionSample {
        MotionSample {
            x,
            y,
            z,
            timestamp_ms,
        }
    }

    #[test]
    fn samples_inside_debounce_window_never_trigger() {
        let mut detector = ShakeDetector::new();
        assert!(!detector.feed(sample(0.0, 0.0, 9.8, 1_000)));
        // Violent swing, but only 100 ms after the last accepted sample.
        assert!(!detector.feed(sample(50.0, 50.0, 50.0, 1_100)));
    }

    #[test]
    fn fast_swing_past_debounce_window_triggers_once() {
        let mut detector = ShakeDetector::new();
        assert!(!detector.feed(sample(0.0, 0.0, 9.8, 1_000)));
        // |Δ| = 30 over 200 ms -> speed 1500 > 700.
        assert!(detector.feed(sample(10.0, 10.0, 19.8, 1_200)));
        // Identical follow-up inside the window is swallowed.
        assert!(!detector.feed(sample(0.0, 0.0, 9.8, 1_300)));
    }

    #[test]
    fn slow_drift_stays_below_threshold() {
        let mut detector = ShakeDetector::new();
        detector.feed(sample(0.0, 0.0, 9.8, 1_000));
        // |Δ| = 3 over 200 ms -> speed 150.
        assert!(!detector.feed(sample(1.0, 1.0, 10.8, 1_200)));
    }

    #[test]
    fn batch_reports_any_trigger() {
        let mut detector = ShakeDetector::new();
        let quiet = [
            sample(0.0, 0.0, 9.8, 1_000),
            sample(0.1, 0.0, 9.8, 1_200),
        ];
        assert!(!detector.feed_batch(&quiet));
        let jerky = [
            sample(15.0, 12.0, 20.0, 1_400),
            sample(-14.0, -11.0, 2.0, 1_600),
        ];
        assert!(detector.feed_batch(&jerky));
    }
}
