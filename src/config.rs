use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub mongo_uri: String,
    pub mongo_database: String,
    pub mongo_collection: String,
    pub mongo_timeout_ms: u64,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    /// Load configuration from the environment. Every variable has a
    /// default, so a bare process starts against a local MongoDB.
    pub fn from_env() -> Result<Self> {
        let mongo_uri =
            env::var("MONGO_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let mongo_database = env::var("MONGO_DATABASE").unwrap_or_else(|_| "RecipesDB".to_string());

        let mongo_collection =
            env::var("MONGO_COLLECTION").unwrap_or_else(|_| "Recipes".to_string());

        let mongo_timeout_ms = env::var("MONGO_TIMEOUT_MS")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u64>()
            .context("MONGO_TIMEOUT_MS must be a number of milliseconds")?;

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            mongo_uri,
            mongo_database,
            mongo_collection,
            mongo_timeout_ms,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  MongoDB server: {}", self.mongo_uri);
        tracing::info!(
            "  Recipe collection: {}.{}",
            self.mongo_database,
            self.mongo_collection
        );
        tracing::info!("  Server selection timeout: {} ms", self.mongo_timeout_ms);
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    // Environment mutation is process-global, so config tests take this
    // lock to keep from interleaving with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_and_clear() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        unsafe {
            env::remove_var("MONGO_URI");
            env::remove_var("MONGO_DATABASE");
            env::remove_var("MONGO_COLLECTION");
            env::remove_var("MONGO_TIMEOUT_MS");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = lock_and_clear();
        unsafe {
            env::set_var("MONGO_URI", "mongodb://db.internal:27017");
            env::set_var("MONGO_DATABASE", "TestDB");
            env::set_var("MONGO_COLLECTION", "TestRecipes");
            env::set_var("MONGO_TIMEOUT_MS", "250");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.mongo_uri, "mongodb://db.internal:27017");
        assert_eq!(config.mongo_database, "TestDB");
        assert_eq!(config.mongo_collection, "TestRecipes");
        assert_eq!(config.mongo_timeout_ms, 250);
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = lock_and_clear();

        let config = Config::from_env().unwrap();

        assert_eq!(config.mongo_uri, "mongodb://localhost:27017");
        assert_eq!(config.mongo_database, "RecipesDB");
        assert_eq!(config.mongo_collection, "Recipes");
        assert_eq!(config.mongo_timeout_ms, 5000);
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port() {
        let _guard = lock_and_clear();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = lock_and_clear();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        let _guard = lock_and_clear();
        unsafe {
            env::set_var("MONGO_TIMEOUT_MS", "soon");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("MONGO_TIMEOUT_MS"));
    }
}
