//! Shared fixtures for handler and store tests.
//!
//! Tests that need a real MongoDB call [`live_store`]/[`live_state`],
//! which probe `mongodb://localhost:27017` and return `None` when no
//! server answers so the test can skip instead of failing.

use std::sync::Arc;

use crate::config::Config;
use crate::state::AppState;
use crate::store::RecipeStore;
use crate::views::Views;

pub fn test_config(collection: &str) -> Config {
    Config {
        mongo_uri: "mongodb://localhost:27017".to_string(),
        mongo_database: "RecipesTestDB".to_string(),
        mongo_collection: collection.to_string(),
        mongo_timeout_ms: 2000,
        service_port: 8000,
        service_host: "127.0.0.1".to_string(),
    }
}

/// Store against a live local MongoDB with a freshly dropped collection.
/// `None` when no server is reachable.
pub async fn live_store(collection: &str) -> Option<RecipeStore> {
    let store = RecipeStore::from_config(&test_config(collection)).await.ok()?;
    store.ping().await.ok()?;
    store.drop_collection().await.ok()?;
    Some(store)
}

/// Store whose server will never answer. Construction still succeeds
/// because the driver connects lazily; every operation then fails within
/// the short server-selection timeout.
pub async fn unreachable_store() -> RecipeStore {
    let mut config = test_config("unreachable");
    config.mongo_uri = "mongodb://127.0.0.1:9".to_string();
    config.mongo_timeout_ms = 500;
    RecipeStore::from_config(&config).await.unwrap()
}

pub fn state_with(store: RecipeStore) -> AppState {
    AppState {
        store,
        views: Arc::new(Views::new().unwrap()),
    }
}

pub async fn live_state(collection: &str) -> Option<AppState> {
    Some(state_with(live_store(collection).await?))
}
