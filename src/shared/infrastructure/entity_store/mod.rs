// Keyed entity storage used by the gateway double in place of a database.
//
// Purpose
// - Describe the storage capability as a trait so tests can substitute or inspect it.
//
// Boundaries
// - Entries are upserted by reference and never evicted.

pub mod in_memory;

use async_trait::async_trait;

#[async_trait]
pub trait EntityStore<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, reference: &str) -> Option<T>;
    async fn put(&self, reference: &str, entity: T);
    async fn contains(&self, reference: &str) -> bool;
    async fn len(&self) -> usize;
    async fn references(&self) -> Vec<String>;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
