use crate::shared::infrastructure::entity_store::EntityStore;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryEntityStore<T: Clone + Send + Sync + 'static> {
    inner: RwLock<HashMap<String, T>>,
}

impl<T: Clone + Send + Sync + 'static> InMemoryEntityStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl<T> EntityStore<T> for InMemoryEntityStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, reference: &str) -> Option<T> {
        self.inner.read().await.get(reference).cloned()
    }

    async fn put(&self, reference: &str, entity: T) {
        self.inner
            .write()
            .await
            .insert(reference.to_string(), entity);
    }

    async fn contains(&self, reference: &str) -> bool {
        self.inner.read().await.contains_key(reference)
    }

    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    async fn references(&self) -> Vec<String> {
        let mut references: Vec<String> = self.inner.read().await.keys().cloned().collect();
        references.sort();
        references
    }
}
