use std::sync::Arc;

use tokio::sync::RwLock;

use crate::clock::{Clock, SystemClock};
use crate::config::AppConfig;
use crate::users::{
    password::{PasswordHasher, SimulatedHasher},
    repo::UserDirectoryStore,
    seed,
};

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<RwLock<UserDirectoryStore>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init(config: AppConfig) -> Self {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(SimulatedHasher);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let store = if config.seed_demo_users {
            UserDirectoryStore::with_users(seed::demo_users(), hasher, clock)
        } else {
            UserDirectoryStore::new(hasher, clock)
        };
        Self::from_parts(Arc::new(config), store)
    }

    pub fn from_parts(config: Arc<AppConfig>, store: UserDirectoryStore) -> Self {
        Self {
            directory: Arc::new(RwLock::new(store)),
            config,
        }
    }

    /// Awaits the configured artificial latency. Called before a mutation
    /// takes the directory lock, so a request dropped here changes nothing.
    pub async fn simulate_latency(&self) {
        let delay = self.config.simulated_delay;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    /// Seeded directory on a frozen clock with no artificial delay.
    #[cfg(test)]
    pub fn fake() -> Self {
        Self::fake_with_config(AppConfig::default())
    }

    #[cfg(test)]
    pub fn fake_with_config(config: AppConfig) -> Self {
        use crate::clock::ManualClock;
        use time::macros::datetime;

        let config = Arc::new(config);
        let store = UserDirectoryStore::with_users(
            seed::demo_users(),
            Arc::new(SimulatedHasher),
            Arc::new(ManualClock::new(datetime!(2024-06-01 12:00 UTC))),
        );
        Self::from_parts(config, store)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn init_respects_seed_flag() {
        let seeded = AppState::init(AppConfig::default());
        assert_eq!(seeded.directory.read().await.len(), 4);

        let empty = AppState::init(AppConfig {
            seed_demo_users: false,
            ..AppConfig::default()
        });
        assert!(empty.directory.read().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn simulate_latency_sleeps_for_configured_delay() {
        let state = AppState::from_parts(
            Arc::new(AppConfig {
                simulated_delay: Duration::from_millis(1500),
                ..AppConfig::default()
            }),
            UserDirectoryStore::new(Arc::new(SimulatedHasher), Arc::new(SystemClock)),
        );
        let started = tokio::time::Instant::now();
        state.simulate_latency().await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }
}
