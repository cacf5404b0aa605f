use std::{collections::VecDeque, sync::Arc};

use shared::protocol::EventRecord;
use tokio::sync::Mutex;

/// Bounded in-memory history of accepted events; the oldest are evicted first.
#[derive(Clone)]
pub(crate) struct EventLog {
    capacity: usize,
    records: Arc<Mutex<VecDeque<EventRecord>>>,
}

impl EventLog {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(1024)))),
        }
    }

    pub(crate) async fn push(&self, record: EventRecord) {
        if self.capacity == 0 {
            return;
        }
        let mut records = self.records.lock().await;
        while records.len() >= self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    pub(crate) async fn snapshot(&self) -> Vec<EventRecord> {
        self.records.lock().await.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(name: &str) -> EventRecord {
        serde_json::from_value(json!({ "name": name })).expect("record")
    }

    #[tokio::test]
    async fn evicts_oldest_beyond_capacity() {
        let log = EventLog::new(2);
        log.push(record("a")).await;
        log.push(record("b")).await;
        log.push(record("c")).await;

        let names: Vec<String> = log
            .snapshot()
            .await
            .iter()
            .filter_map(|r| r.name().map(str::to_string))
            .collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[tokio::test]
    async fn zero_capacity_retains_nothing() {
        let log = EventLog::new(0);
        log.push(record("a")).await;
        assert!(log.snapshot().await.is_empty());
    }
}
