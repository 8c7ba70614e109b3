use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    list_requests: AtomicU64,
    fallback_served: AtomicU64,
    store_errors: AtomicU64,
    seeds: AtomicU64,
    saves: AtomicU64,
    deletes: AtomicU64,
    shake_samples: AtomicU64,
    shake_triggers: AtomicU64,
}

impl Metrics {
    pub fn record_list_request(&self) {
        self.list_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_served(&self) {
        self.fallback_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_seed(&self) {
        self.seeds.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_save(&self) {
        self.saves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_shake_samples(&self, count: usize) {
        self.shake_samples.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_shake_trigger(&self) {
        self.shake_triggers.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let list_requests = self.list_requests.load(Ordering::Relaxed);
        let fallback_served = self.fallback_served.load(Ordering::Relaxed);
        let store_errors = self.store_errors.load(Ordering::Relaxed);
        let seeds = self.seeds.load(Ordering::Relaxed);
        let saves = self.saves.load(Ordering::Relaxed);
        let deletes = self.deletes.load(Ordering::Relaxed);
        let shake_samples = self.shake_samples.load(Ordering::Relaxed);
        let shake_triggers = self.shake_triggers.load(Ordering::Relaxed);

        format!(
            "# TYPE eventboard_list_requests_total counter\n\
eventboard_list_requests_total {}\n\
# TYPE eventboard_fallback_served_total counter\n\
eventboard_fallback_served_total {}\n\
# TYPE eventboard_store_errors_total counter\n\
eventboard_store_errors_total {}\n\
# TYPE eventboard_seeds_total counter\n\
eventboard_seeds_total {}\n\
# TYPE eventboard_saves_total counter\n\
eventboard_saves_total {}\n\
# TYPE eventboard_deletes_total counter\n\
eventboard_deletes_total {}\n\
# TYPE eventboard_shake_samples_total counter\n\
eventboard_shake_samples_total {}\n\
# TYPE eventboard_shake_triggers_total counter\n\
eventboard_shake_triggers_total {}\n",
            list_requests,
            fallback_served,
            store_errors,
            seeds,
            saves,
            deletes,
            shake_samples,
            shake_triggers
        )
    }
}
