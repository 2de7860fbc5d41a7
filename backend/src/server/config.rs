//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use event_ticket_api::domain::DEFAULT_OPERATION_TIMEOUT;
use event_ticket_api::outbound::persistence::MongoStore;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) request_timeout: Duration,
    pub(crate) store: Option<MongoStore>,
}

impl ServerConfig {
    /// Construct a server configuration bound to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            request_timeout: DEFAULT_OPERATION_TIMEOUT,
            store: None,
        }
    }

    /// Set the deadline applied to each record store operation.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Attach a connected MongoDB store.
    ///
    /// Without one, the server keeps records in process memory.
    #[must_use]
    pub fn with_store(mut self, store: MongoStore) -> Self {
        self.store = Some(store);
        self
    }
}
