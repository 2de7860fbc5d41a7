//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `EVENT_TICKET_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence order.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE: &str = "api_event_ticket";
const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Runtime settings for the event ticket API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EVENT_TICKET")]
pub struct AppSettings {
    /// MongoDB connection string. Without one, records are kept in memory.
    pub mongo_uri: Option<String>,
    /// Database holding the `users` and `ticket` collections.
    pub database: Option<String>,
    /// Interface to bind.
    pub bind_host: Option<IpAddr>,
    /// Port to bind.
    #[ortho_config(default = 4000)]
    pub port: u16,
    /// Deadline in seconds for each record store operation.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl AppSettings {
    /// Return the configured MongoDB URI, ignoring blank values.
    pub fn mongo_uri(&self) -> Option<&str> {
        self.mongo_uri
            .as_deref()
            .map(str::trim)
            .filter(|uri| !uri.is_empty())
    }

    /// Return the configured database name, falling back to the default.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Return the socket address to bind.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.bind_host.unwrap_or(DEFAULT_HOST),
            self.port,
        )
    }

    /// Return the store operation deadline.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for application settings parsing.

    use super::*;
    use std::ffi::OsString;

    use crate::domain::DEFAULT_OPERATION_TIMEOUT;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "EVENT_TICKET_MONGO_URI",
        "EVENT_TICKET_DATABASE",
        "EVENT_TICKET_BIND_HOST",
        "EVENT_TICKET_PORT",
        "EVENT_TICKET_REQUEST_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("event-ticket-api")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert!(settings.mongo_uri().is_none());
        assert_eq!(settings.database(), DEFAULT_DATABASE);
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([0, 0, 0, 0], 4000))
        );
        assert_eq!(settings.request_timeout(), DEFAULT_OPERATION_TIMEOUT);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "EVENT_TICKET_MONGO_URI",
                Some("mongodb://db.internal:27017".to_owned()),
            ),
            ("EVENT_TICKET_DATABASE", Some("events".to_owned())),
            ("EVENT_TICKET_BIND_HOST", Some("127.0.0.1".to_owned())),
            ("EVENT_TICKET_PORT", Some("8080".to_owned())),
            ("EVENT_TICKET_REQUEST_TIMEOUT_SECS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.mongo_uri(), Some("mongodb://db.internal:27017"));
        assert_eq!(settings.database(), "events");
        assert_eq!(
            settings.bind_addr(),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
        assert_eq!(settings.request_timeout(), Duration::from_secs(3));
    }

    #[rstest]
    fn blank_mongo_uri_selects_in_memory_store() {
        let _guard = lock_env([("EVENT_TICKET_MONGO_URI", Some("   ".to_owned()))]);

        let settings = load_from_empty_args();
        assert!(settings.mongo_uri().is_none());
    }
}
