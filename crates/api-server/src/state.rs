//! One-shot feed snapshot shared between the load task and request handlers.

use chrono::{DateTime, Utc};
use outreach_core::config::FeedConfig;
use outreach_core::types::OutreachRecord;
use outreach_synth::{FeedGenerator, GeneratorConfig};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// The immutable record feed, published exactly once after the simulated
/// load delay.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    pub snapshot_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub records: Vec<OutreachRecord>,
}

/// Shared dashboard state. Readers see either "not yet loaded" or the
/// complete snapshot; there is no partial visibility and no writer after
/// the publish.
#[derive(Clone, Default)]
pub struct DashboardState {
    snapshot: Arc<RwLock<Option<Arc<FeedSnapshot>>>>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, records: Vec<OutreachRecord>) -> Arc<FeedSnapshot> {
        let snapshot = Arc::new(FeedSnapshot {
            snapshot_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            records,
        });
        *self.snapshot.write() = Some(snapshot.clone());
        snapshot
    }

    pub fn snapshot(&self) -> Option<Arc<FeedSnapshot>> {
        self.snapshot.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.read().is_some()
    }
}

/// Simulate load latency: sleep once, generate once, publish. No retry and
/// no cancellation; if the task never fires the dashboard stays in the
/// loading state rather than erroring.
pub fn spawn_delayed_load(state: DashboardState, feed: FeedConfig) {
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(feed.load_delay_ms)).await;

        let config = GeneratorConfig {
            window_days: feed.window_days,
            seed: feed.seed,
            ..GeneratorConfig::default()
        };
        let records = FeedGenerator::new(config).generate();
        let snapshot = state.publish(records);

        info!(
            snapshot_id = %snapshot.snapshot_id,
            records = snapshot.records.len(),
            "Feed snapshot published"
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_publish_flips_loading_state() {
        let state = DashboardState::new();
        assert!(!state.is_loaded());
        assert!(state.snapshot().is_none());

        let records = FeedGenerator::new(GeneratorConfig {
            anchor: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
            window_days: 3,
            seed: Some(1),
        })
        .generate();
        state.publish(records);

        assert!(state.is_loaded());
        let snapshot = state.snapshot().unwrap();
        assert_eq!(snapshot.records.len(), 12 + 12 + 12);
    }

    #[tokio::test]
    async fn test_delayed_load_publishes_after_sleep() {
        let state = DashboardState::new();
        spawn_delayed_load(
            state.clone(),
            FeedConfig {
                window_days: 2,
                load_delay_ms: 10,
                seed: Some(5),
            },
        );

        assert!(!state.is_loaded());
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        assert!(state.is_loaded());
    }
}
