//! Shared MongoDB client handle.
//!
//! The driver keeps its own connection pool, so a [`MongoStore`] is cheap to
//! clone and safe to share between request tasks without extra locking.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use tracing::info;

use crate::domain::Resource;

use super::MongoRecordRepository;

const APP_NAME: &str = "event-ticket-api";

/// Errors that can occur while establishing the store connection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreConnectError {
    /// The connection string could not be parsed or resolved.
    #[error("invalid mongodb connection options: {message}")]
    Options { message: String },

    /// The deployment did not answer the startup ping.
    #[error("mongodb did not answer ping: {message}")]
    Ping { message: String },
}

impl StoreConnectError {
    /// Create an options error with the given message.
    pub fn options(message: impl Into<String>) -> Self {
        Self::Options {
            message: message.into(),
        }
    }

    /// Create a ping error with the given message.
    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
///
/// use event_ticket_api::outbound::persistence::MongoConfig;
///
/// let config = MongoConfig::new("mongodb://localhost:27017", "api_event_ticket")
///     .with_server_selection_timeout(Duration::from_secs(5));
/// assert_eq!(config.database(), "api_event_ticket");
/// ```
#[derive(Debug, Clone)]
pub struct MongoConfig {
    uri: String,
    database: String,
    server_selection_timeout: Duration,
}

impl MongoConfig {
    /// Create a configuration; server selection gives up after 10 seconds.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            server_selection_timeout: Duration::from_secs(10),
        }
    }

    /// Bound how long the driver waits for a usable server.
    #[must_use]
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    /// Database holding the resource collections.
    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Connected handle to the configured database.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect and ping the deployment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreConnectError::Options`] for an unusable connection
    /// string and [`StoreConnectError::Ping`] when no server answers.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreConnectError> {
        let mut options = ClientOptions::parse(config.uri.as_str())
            .await
            .map_err(|err| StoreConnectError::options(err.to_string()))?;
        options.app_name = Some(APP_NAME.to_owned());
        options.server_selection_timeout = Some(config.server_selection_timeout);
        options.connect_timeout = Some(config.server_selection_timeout);

        let client =
            Client::with_options(options).map_err(|err| StoreConnectError::options(err.to_string()))?;
        let database = client.database(&config.database);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|err| StoreConnectError::ping(err.to_string()))?;

        info!(database = %config.database, "connected to mongodb");
        Ok(Self { database })
    }

    /// Repository bound to the collection of resource family `R`.
    pub fn repository_for<R: Resource>(&self) -> MongoRecordRepository {
        MongoRecordRepository::new(self.database.collection(R::COLLECTION))
    }
}
