use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use std::time::Duration;

use crate::config::Config;
use crate::models::{Recipe, RecipeUpdate};

/// Store gateway for the recipe collection.
///
/// Built once at startup and shared across all handlers through the
/// application state. The underlying driver pools connections and
/// connects lazily, so construction succeeds even while the store is
/// down; individual operations fail instead, bounded by the configured
/// server-selection timeout.
#[derive(Clone, Debug)]
pub struct RecipeStore {
    client: Client,
    collection: Collection<Recipe>,
}

impl RecipeStore {
    /// Create a store gateway from configuration.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongo_uri)
            .await
            .context("Failed to parse MongoDB connection string")?;
        options.server_selection_timeout =
            Some(Duration::from_millis(config.mongo_timeout_ms));

        let client =
            Client::with_options(options).context("Failed to create MongoDB client")?;
        let collection = client
            .database(&config.mongo_database)
            .collection(&config.mongo_collection);

        tracing::info!(
            "Using recipe collection {}.{} at {}",
            config.mongo_database,
            config.mongo_collection,
            config.mongo_uri
        );

        Ok(Self { client, collection })
    }

    /// Verify store connectivity with a ping against the database.
    ///
    /// # Errors
    /// Returns an error if the store is unreachable within the
    /// server-selection timeout.
    pub async fn ping(&self) -> Result<()> {
        let db_name = self.collection.namespace().db;
        self.client
            .database(&db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }

    /// Fetch every recipe in the collection.
    pub async fn list_all(&self) -> Result<Vec<Recipe>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .context("Failed to query recipes")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read recipes from cursor")
    }

    /// Fetch a single recipe by id. `Ok(None)` means no such document.
    pub async fn find(&self, id: ObjectId) -> Result<Option<Recipe>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .context("Failed to query recipe")
    }

    /// Insert a recipe and return the identifier the store assigned.
    pub async fn insert(&self, recipe: Recipe) -> Result<ObjectId> {
        let result = self
            .collection
            .insert_one(&recipe)
            .await
            .context("Failed to insert recipe")?;

        result
            .inserted_id
            .as_object_id()
            .context("Inserted id was not an ObjectId")
    }

    /// Apply a partial update to the recipe with the given id.
    ///
    /// Only `Name`, `Summary` and `Description` are set; the stored
    /// `Image` is left untouched. Returns true iff a document was
    /// actually modified.
    pub async fn update(&self, id: ObjectId, update: &RecipeUpdate) -> Result<bool> {
        let set = mongodb::bson::to_document(update)
            .context("Failed to serialize recipe update")?;

        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": set })
            .await
            .context("Failed to update recipe")?;

        Ok(result.modified_count > 0)
    }

    /// Delete the recipe with the given id. Returns true iff a document
    /// was deleted.
    pub async fn delete(&self, id: ObjectId) -> Result<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .context("Failed to delete recipe")?;

        Ok(result.deleted_count > 0)
    }

    /// Release the underlying client and its connection pool.
    pub async fn shutdown(self) {
        drop(self.collection);
        self.client.shutdown().await;
    }

    #[cfg(test)]
    pub async fn drop_collection(&self) -> Result<()> {
        self.collection
            .drop()
            .await
            .context("Failed to drop test collection")
    }
}
