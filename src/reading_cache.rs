use std::sync::Arc;

use tokio::sync::RwLock;

use crate::client::models::Reading;

/// In-memory view of the user's readings, newest first.
///
/// Wrapped in `Arc` so it can be cheaply cloned and shared across tasks.
/// Uses a `tokio::sync::RwLock` so many readers never block each other.
/// Entries sharing a date keep their relative order: a newly inserted
/// reading sorts ahead of existing ones with the same date, and a full
/// replace preserves the server's order within a date.
#[derive(Clone, Default)]
pub struct ReadingCache {
    inner: Arc<RwLock<Vec<Reading>>>,
}

impl ReadingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with the server's list, re-sorted.
    pub async fn replace_all(&self, mut readings: Vec<Reading>) {
        sort_newest_first(&mut readings);
        *self.inner.write().await = readings;
    }

    /// Insert a server-confirmed reading and re-sort.
    ///
    /// Ids are server-assigned and unique; inserting a duplicate id is a
    /// caller contract violation.
    pub async fn insert(&self, reading: Reading) {
        let mut guard = self.inner.write().await;
        debug_assert!(
            guard.iter().all(|r| r.id != reading.id),
            "duplicate reading id {}",
            reading.id
        );
        // Front insert + stable sort keeps the new entry ahead of existing
        // entries with an equal date.
        guard.insert(0, reading);
        sort_newest_first(&mut guard);
    }

    /// Remove the reading with `id` if present; absent ids are a no-op.
    pub async fn remove_by_id(&self, id: i64) {
        self.inner.write().await.retain(|r| r.id != id);
    }

    /// Snapshot of the current ordered view, for presentation or charting.
    pub async fn to_ordered_list(&self) -> Vec<Reading> {
        self.inner.read().await.clone()
    }
}

fn sort_newest_first(readings: &mut [Reading]) {
    // Stable sort: ties on date keep their existing relative order.
    readings.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn reading(id: i64, date: &str) -> Reading {
        Reading {
            id,
            systolic: 120,
            diastolic: 80,
            date: date.parse::<NaiveDate>().expect("valid test date"),
        }
    }

    fn ids(readings: &[Reading]) -> Vec<i64> {
        readings.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn replace_all_sorts_newest_first() {
        let cache = ReadingCache::new();
        cache
            .replace_all(vec![
                reading(1, "2024-01-01"),
                reading(2, "2024-03-01"),
                reading(3, "2024-02-01"),
            ])
            .await;

        assert_eq!(ids(&cache.to_ordered_list().await), vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn replace_all_preserves_server_order_on_equal_dates() {
        let cache = ReadingCache::new();
        cache
            .replace_all(vec![
                reading(7, "2024-01-01"),
                reading(8, "2024-01-01"),
                reading(9, "2024-01-01"),
            ])
            .await;

        assert_eq!(ids(&cache.to_ordered_list().await), vec![7, 8, 9]);
    }

    #[tokio::test]
    async fn insert_places_new_entry_before_equal_date() {
        let cache = ReadingCache::new();
        cache
            .replace_all(vec![reading(1, "2024-01-02"), reading(2, "2024-01-01")])
            .await;

        cache.insert(reading(3, "2024-01-01")).await;

        assert_eq!(ids(&cache.to_ordered_list().await), vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn insert_resorts_by_date() {
        let cache = ReadingCache::new();
        cache.replace_all(vec![reading(1, "2024-01-02")]).await;

        cache.insert(reading(2, "2024-03-01")).await;

        assert_eq!(ids(&cache.to_ordered_list().await), vec![2, 1]);
    }

    #[tokio::test]
    async fn insert_never_duplicates_ids() {
        let cache = ReadingCache::new();
        cache.insert(reading(1, "2024-01-01")).await;
        cache.insert(reading(2, "2024-01-02")).await;

        let list = cache.to_ordered_list().await;
        let mut seen = ids(&list);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), list.len());
    }

    #[tokio::test]
    async fn remove_by_id_removes_matching_entry() {
        let cache = ReadingCache::new();
        cache
            .replace_all(vec![reading(1, "2024-01-02"), reading(2, "2024-01-01")])
            .await;

        cache.remove_by_id(1).await;

        assert_eq!(ids(&cache.to_ordered_list().await), vec![2]);
    }

    #[tokio::test]
    async fn remove_of_absent_id_leaves_collection_unchanged() {
        let cache = ReadingCache::new();
        cache
            .replace_all(vec![reading(1, "2024-01-02"), reading(2, "2024-01-01")])
            .await;
        let before = cache.to_ordered_list().await;

        cache.remove_by_id(42).await;

        assert_eq!(cache.to_ordered_list().await, before);
    }
}
