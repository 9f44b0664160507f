use std::collections::HashSet;

use tokio::sync::RwLock;

/// Ordered set of relay endpoints (`host:port`), first entry tried first.
/// Endpoints are only ever added; nothing removes one at runtime.
pub struct Registry {
    endpoints: RwLock<Vec<String>>,
}

impl Registry {
    pub fn new(seeds: Vec<String>) -> Self {
        Self {
            endpoints: RwLock::new(merge_dedup(Vec::new(), seeds)),
        }
    }

    /// Point-in-time copy of the endpoint order. Callers iterate over the
    /// copy, so the lock is never held across a network call.
    pub async fn snapshot(&self) -> Vec<String> {
        self.endpoints.read().await.clone()
    }

    /// Installs a new endpoint order wholesale.
    pub async fn replace(&self, endpoints: Vec<String>) {
        *self.endpoints.write().await = endpoints;
    }
}

/// Appends `incoming` to `existing`, keeping only the first occurrence of
/// each endpoint. Relative order is otherwise preserved.
pub fn merge_dedup(existing: Vec<String>, incoming: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(existing.len() + incoming.len());
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());
    for endpoint in existing.into_iter().chain(incoming) {
        if seen.insert(endpoint.clone()) {
            merged.push(endpoint);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn merge_keeps_first_occurrence_order() {
        assert_eq!(
            merge_dedup(owned(&["a", "b"]), owned(&["b", "c", "a"])),
            owned(&["a", "b", "c"])
        );
    }

    #[test]
    fn merge_with_self_is_identity() {
        let set = owned(&["a", "b", "c"]);
        assert_eq!(merge_dedup(set.clone(), set.clone()), set);
    }

    #[test]
    fn merge_dedups_within_incoming() {
        assert_eq!(
            merge_dedup(Vec::new(), owned(&["a", "a", "b"])),
            owned(&["a", "b"])
        );
    }

    #[tokio::test]
    async fn new_dedups_seeds() {
        let registry = Registry::new(owned(&["a", "b", "a"]));
        assert_eq!(registry.snapshot().await, owned(&["a", "b"]));
    }

    #[tokio::test]
    async fn replace_installs_wholesale() {
        let registry = Registry::new(owned(&["a"]));
        registry.replace(owned(&["b", "c"])).await;
        assert_eq!(registry.snapshot().await, owned(&["b", "c"]));
    }
}
