use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Counter, CounterError};

/// In-memory store owning every counter and its mutation rules.
///
/// Cloning is cheap and shares the underlying map, so a single store can
/// be handed to any number of concurrent request handlers. Create and
/// increment take the write lock for the whole check-then-mutate step,
/// which keeps them atomic per name.
#[derive(Clone)]
pub struct CounterStore {
    counters: Arc<RwLock<HashMap<String, u64>>>,
}

impl CounterStore {
    pub fn new() -> Self {
        Self {
            counters: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns every counter as (name, value) pairs. Order is unspecified.
    pub async fn list(&self) -> Vec<Counter> {
        let counters = self.counters.read().await;
        counters
            .iter()
            .map(|(name, value)| Counter {
                name: name.clone(),
                counter: *value,
            })
            .collect()
    }

    /// Creates a counter with value 0. Fails if the name is taken.
    pub async fn create(&self, name: &str) -> Result<Counter, CounterError> {
        let mut counters = self.counters.write().await;
        if counters.contains_key(name) {
            return Err(CounterError::AlreadyExists(name.to_string()));
        }
        counters.insert(name.to_string(), 0);
        Ok(Counter {
            name: name.to_string(),
            counter: 0,
        })
    }

    pub async fn read(&self, name: &str) -> Result<Counter, CounterError> {
        let counters = self.counters.read().await;
        counters
            .get(name)
            .map(|value| Counter {
                name: name.to_string(),
                counter: *value,
            })
            .ok_or_else(|| CounterError::NotFound(name.to_string()))
    }

    /// Adds 1 to an existing counter and returns the new value.
    pub async fn increment(&self, name: &str) -> Result<Counter, CounterError> {
        let mut counters = self.counters.write().await;
        let value = counters
            .get_mut(name)
            .ok_or_else(|| CounterError::NotFound(name.to_string()))?;
        *value += 1;
        Ok(Counter {
            name: name.to_string(),
            counter: *value,
        })
    }

    /// Removes a counter if present. Deleting an absent name is not an error.
    pub async fn delete(&self, name: &str) {
        let mut counters = self.counters.write().await;
        counters.remove(name);
    }

    /// Number of live counters.
    pub async fn count(&self) -> usize {
        let counters = self.counters.read().await;
        counters.len()
    }

    /// Removes every counter. Test isolation hook; never routed on the
    /// HTTP surface.
    pub async fn reset(&self) {
        let mut counters = self.counters.write().await;
        counters.clear();
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}
