use std::time::Duration;

use portal::api::{ApiClient, ApiError, HttpApiClient, endpoints};
use portal::config::ClientConfig;
use portal::data::{Member, Qualification};
use portal::id::MemberId;
use portal::session::SessionManager;
use portal::storage::LocalSessionStore;

use crate::browser::BrowserTimer;
use crate::config;

/// The main API client for the portal, bundling the HTTP client with the
/// browser's session storage and timer.
pub struct Api {
    client: HttpApiClient,
    store: LocalSessionStore,
    timer: BrowserTimer,
    request_timeout: Duration,
}

impl Api {
    pub fn new(config: &ClientConfig) -> Self {
        let mut client = HttpApiClient::new(config.api_base_url.clone());
        client.set_header("Accept".to_string(), "application/json".to_string());

        Api {
            client,
            store: LocalSessionStore,
            timer: BrowserTimer,
            request_timeout: config.request_timeout,
        }
    }

    /// Session operations (bootstrap, login, logout, admin check) against this backend.
    pub fn session(&self) -> SessionManager<'_, HttpApiClient, LocalSessionStore, BrowserTimer> {
        SessionManager::new(&self.client, &self.store, &self.timer, self.request_timeout)
    }

    pub async fn fetch_members(&self) -> Result<Vec<Member>, ApiError> {
        self.client.get(endpoints::MEMBERS).await
    }

    pub async fn fetch_qualifications(
        &self,
        member: &MemberId,
    ) -> Result<Vec<Qualification>, ApiError> {
        self.client
            .get(&endpoints::member_qualifications(member))
            .await
    }
}

/// Create a new instance of the API client from the resolved configuration.
pub fn create() -> Api {
    Api::new(&config::load())
}
