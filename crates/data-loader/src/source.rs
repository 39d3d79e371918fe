//! Record sources: where film documents come from.
//!
//! The dashboard fetches the full collection exactly once, at startup.
//! Sources only *fetch*; coercion into typed films happens afterwards in
//! [`crate::parser`].
//!
//! Implementations:
//! - [`MongoSource`]: the production document database
//! - [`JsonFileSource`]: a JSON array on disk, for local runs and tests
//! - [`StaticSource`]: documents already in memory

use std::future::Future;
use std::path::{Path, PathBuf};

use futures::TryStreamExt;
use mongodb::Client;
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{DataLoadError, Result};
use crate::types::FilmDocument;

/// Anything that can hand over the complete set of film documents.
///
/// ## Design Note
/// The returned future is `Send` so callers can drive it from a
/// multi-threaded tokio runtime.
pub trait RecordSource {
    /// Short human-readable name used in logs and errors
    fn name(&self) -> String;

    /// Fetch every stored film document.
    ///
    /// Any failure here is fatal to startup; there is no retry policy.
    fn fetch_all_films(&self) -> impl Future<Output = Result<Vec<FilmDocument>>> + Send;
}

// =============================================================================
// MongoDB
// =============================================================================

/// Connection parameters for the film database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MongoConfig {
    /// Connection string, credentials included
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "films".to_string(),
            collection: "films".to_string(),
        }
    }
}

/// Reads film documents from a MongoDB collection.
pub struct MongoSource {
    client: Client,
    config: MongoConfig,
}

impl MongoSource {
    /// Connect to the database and make sure it answers.
    ///
    /// The driver connects lazily, so a `ping` is sent up front: a wrong
    /// host or bad credentials fail here instead of on the first query.
    pub async fn connect(config: MongoConfig) -> Result<Self> {
        info!(
            "Connecting to MongoDB (database: {}, collection: {})",
            config.database, config.collection
        );

        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| DataLoadError::unavailable("mongodb", e))?;

        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DataLoadError::unavailable("mongodb", e))?;

        info!("Connected to MongoDB");
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }
}

impl RecordSource for MongoSource {
    fn name(&self) -> String {
        format!("mongodb:{}.{}", self.config.database, self.config.collection)
    }

    async fn fetch_all_films(&self) -> Result<Vec<FilmDocument>> {
        let collection = self
            .client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection);

        let raw: Vec<Document> = collection
            .find(doc! {})
            .await
            .map_err(|e| DataLoadError::unavailable("mongodb", e))?
            .try_collect()
            .await
            .map_err(|e| DataLoadError::unavailable("mongodb", e))?;

        debug!("Fetched {} raw documents", raw.len());

        raw.into_iter()
            .enumerate()
            .map(|(index, document)| {
                bson::from_document::<FilmDocument>(document).map_err(|e| {
                    DataLoadError::InvalidDocument {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect()
    }
}

// =============================================================================
// JSON file
// =============================================================================

/// Reads film documents from a JSON file holding an array of objects
/// shaped like the stored documents (camelCase field names).
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn name(&self) -> String {
        format!("json:{}", self.path.display())
    }

    async fn fetch_all_films(&self) -> Result<Vec<FilmDocument>> {
        let source_name = self.name();
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DataLoadError::unavailable(&source_name, e))?;

        // Decode to generic values first so a bad entry can be reported by position
        let values: Vec<serde_json::Value> =
            serde_json::from_str(&contents).map_err(|e| DataLoadError::InvalidDocument {
                index: 0,
                reason: format!("expected a JSON array of film documents: {e}"),
            })?;

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<FilmDocument>(value).map_err(|e| {
                    DataLoadError::InvalidDocument {
                        index,
                        reason: e.to_string(),
                    }
                })
            })
            .collect()
    }
}

// =============================================================================
// In memory
// =============================================================================

/// Serves a fixed set of documents already held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    documents: Vec<FilmDocument>,
}

impl StaticSource {
    pub fn new(documents: Vec<FilmDocument>) -> Self {
        Self { documents }
    }
}

impl RecordSource for StaticSource {
    fn name(&self) -> String {
        "static".to_string()
    }

    async fn fetch_all_films(&self) -> Result<Vec<FilmDocument>> {
        Ok(self.documents.clone())
    }
}
