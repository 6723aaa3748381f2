use std::sync::Arc;

use serde_json::Value;
use tokio::sync::RwLock;

/// Shared slot holding the most recently fetched payload.
///
/// The fetch cycle replaces the value wholesale; the display cycle reads a
/// snapshot. The lock guarantees readers never observe a partially written
/// value now that the cycles run on a multi-threaded runtime.
#[derive(Clone, Default)]
pub struct LatestData {
    inner: Arc<RwLock<Option<Value>>>,
}

impl LatestData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored value. No history is kept.
    pub async fn set(&self, value: Value) {
        *self.inner.write().await = Some(value);
    }

    /// Snapshot of the current value, `None` until the first successful fetch.
    pub async fn get(&self) -> Option<Value> {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_starts_empty() {
        let cell = LatestData::new();
        assert_eq!(cell.get().await, None);
    }

    #[tokio::test]
    async fn test_set_then_get_returns_value() {
        let cell = LatestData::new();
        cell.set(json!({"a": 1})).await;
        assert_eq!(cell.get().await, Some(json!({"a": 1})));
    }

    #[tokio::test]
    async fn test_set_replaces_wholesale() {
        let cell = LatestData::new();
        cell.set(json!({"a": 1})).await;
        cell.set(json!([1, 2, 3])).await;
        assert_eq!(cell.get().await, Some(json!([1, 2, 3])));
    }

    #[tokio::test]
    async fn test_get_is_idempotent_without_set() {
        let cell = LatestData::new();
        cell.set(json!({"key1": "value1"})).await;
        let first = cell.get().await;
        let second = cell.get().await;
        let third = cell.get().await;
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_slot() {
        let cell = LatestData::new();
        let reader = cell.clone();
        cell.set(json!("shared")).await;
        assert_eq!(reader.get().await, Some(json!("shared")));
    }
}
