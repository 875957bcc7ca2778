use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::config::Config;
use crate::store::{KeyLocks, KeyValueStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Users and sessions. In-memory or Redis, chosen at startup from config.
    pub store: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write of individual sessions.
    pub session_locks: Arc<KeyLocks>,
    pub config: Config,
    /// Random source for the off-topic score draw. Locked only for the
    /// duration of one synchronous scoring call.
    pub scoring_rng: Arc<Mutex<SmallRng>>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: Config) -> Self {
        let rng = match config.scoring_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            store,
            session_locks: Arc::new(KeyLocks::new()),
            config,
            scoring_rng: Arc::new(Mutex::new(rng)),
        }
    }
}
