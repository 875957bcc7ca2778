use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Per-key async locks for read-modify-write sequences against the store.
///
/// Holders of the guard for a key run one at a time; different keys never
/// contend. Entries nobody holds or waits on are dropped on the next `lock`.
#[derive(Debug, Default)]
pub struct KeyLocks {
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl KeyLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, key: &str) -> OwnedMutexGuard<()> {
        let slot = {
            let mut locks = self.locks.lock().await;
            locks.retain(|_, slot| Arc::strong_count(slot) > 1);
            locks.entry(key.to_string()).or_default().clone()
        };
        slot.lock_owned().await
    }

    #[cfg(test)]
    async fn tracked(&self) -> usize {
        self.locks.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_same_key_waits_for_holder() {
        let locks = Arc::new(KeyLocks::new());
        let guard = locks.lock("session:1").await;

        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.lock("session:1").await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        waiter.await.unwrap();
    }

    #[tokio::test]
    async fn test_different_keys_do_not_contend() {
        let locks = KeyLocks::new();
        let _a = locks.lock("session:1").await;
        let _b = locks.lock("session:2").await;
    }

    #[tokio::test]
    async fn test_released_entries_are_pruned() {
        let locks = KeyLocks::new();
        drop(locks.lock("session:1").await);
        drop(locks.lock("session:2").await);
        let _held = locks.lock("session:3").await;
        assert_eq!(locks.tracked().await, 1);
    }
}
