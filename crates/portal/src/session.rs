//! Session lifecycle: bootstrap on page load, login, logout and the admin check.
//!
//! [`SessionManager`] borrows its collaborators so the UI can build one inside
//! each spawned task. Nothing here navigates or mutates shared state directly;
//! callers receive a context plus a [`GuardState`] and act on them.

use std::time::Duration;

use crate::api::{ApiClient, ApiError, endpoints};
use crate::context::ApplicationContext;
use crate::data::{Credentials, LoginResponse, SessionProbe};
use crate::errors::LoginError;
use crate::guard::{Destination, GuardEvent, GuardState, is_entry_path};
use crate::log::{debug, info, warn};
use crate::storage::SessionStore;
use crate::time::{Timer, with_timeout};

/// Result of the once-per-load bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    pub context: ApplicationContext,
    /// `Allowed` means "stay on the current route".
    pub state: GuardState,
}

impl Bootstrap {
    fn logged_out() -> Self {
        Self {
            context: ApplicationContext::empty(),
            state: GuardState::Checking.next(GuardEvent::Redirect(Destination::Login)),
        }
    }
}

pub struct SessionManager<'a, C, S, T>
where
    C: ApiClient,
    S: SessionStore,
    T: Timer,
{
    api: &'a C,
    store: &'a S,
    timer: &'a T,
    timeout: Duration,
}

impl<'a, C, S, T> SessionManager<'a, C, S, T>
where
    C: ApiClient,
    S: SessionStore,
    T: Timer,
{
    pub fn new(api: &'a C, store: &'a S, timer: &'a T, timeout: Duration) -> Self {
        Self {
            api,
            store,
            timer,
            timeout,
        }
    }

    /// Rehydrates and re-validates the persisted session.
    ///
    /// Any failure, including a validation request that outlives the timeout,
    /// clears persisted data and sends the visitor to the login page.
    pub async fn bootstrap(&self, current_path: &str) -> Bootstrap {
        let session = match self.store.load() {
            Ok(Some(session)) => session,
            Ok(None) => {
                info!("No persisted session, redirecting to login");
                return Bootstrap::logged_out();
            }
            Err(err) => {
                warn!("Discarding unreadable persisted session: {err}");
                self.store.clear();
                return Bootstrap::logged_out();
            }
        };

        if let Err(err) = self.validate(&session).await {
            warn!("Session for {} failed validation: {err}", session.member.id);
            self.store.clear();
            return Bootstrap::logged_out();
        }

        info!("Session for {} is valid", session.member.id);
        let event = if is_entry_path(current_path) {
            GuardEvent::Redirect(Destination::Dashboard)
        } else {
            GuardEvent::Allow
        };
        Bootstrap {
            context: session.into(),
            state: GuardState::Checking.next(event),
        }
    }

    async fn validate(&self, session: &LoginResponse) -> Result<(), ApiError> {
        let probe = SessionProbe {
            id: session.member.id.clone(),
        };
        with_timeout(
            self.timer,
            self.timeout,
            self.api.post_status(endpoints::VALIDATE_SESSION, &probe),
        )
        .await
    }

    /// Submits credentials once. On success the session is persisted and the
    /// returned context should replace the current one.
    pub async fn login(&self, credentials: &Credentials) -> Result<ApplicationContext, LoginError> {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        let response: LoginResponse = with_timeout(
            self.timer,
            self.timeout,
            self.api.post(endpoints::LOGIN, credentials),
        )
        .await
        .map_err(|err| {
            warn!("Login for {} rejected: {err}", credentials.username);
            LoginError::from(err)
        })?;

        if let Err(err) = self.store.save(&response) {
            warn!("Logged in but could not persist session: {err}");
        }
        info!("Logged in as {}", response.member.id);
        Ok(response.into())
    }

    /// Forgets the session locally. Safe to call when already logged out.
    pub fn logout(&self) -> ApplicationContext {
        self.store.clear();
        info!("Logged out");
        ApplicationContext::empty()
    }

    /// Tells the backend about a logout. Failures are ignored.
    pub async fn notify_logout(&self) {
        let result = with_timeout(
            self.timer,
            self.timeout,
            self.api.get_status(endpoints::LOGOUT),
        )
        .await;
        if let Err(err) = result {
            debug!("Backend logout notification failed: {err}");
        }
    }

    /// Asks the backend whether the session may see admin pages. Any failure
    /// redirects to the dashboard, whatever the persisted identity claims.
    pub async fn check_admin(&self) -> GuardState {
        let state = GuardState::Init.next(GuardEvent::Check);
        let result = with_timeout(
            self.timer,
            self.timeout,
            self.api.get_status(endpoints::CHECK_ADMIN),
        )
        .await;

        match result {
            Ok(()) => state.next(GuardEvent::Allow),
            Err(err) => {
                info!("Admin check denied: {err}");
                state.next(GuardEvent::Redirect(Destination::Dashboard))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::HttpMethod;
    use crate::storage::MemorySessionStore;
    use crate::testing::{
        ExpiredTimer, MockApi, StoppedTimer, backend_login_body, login_body, login_response,
    };
    use futures::executor::block_on;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn persisted(id: &str, admin: bool) -> MemorySessionStore {
        let store = MemorySessionStore::new();
        store.save(&login_response(id, admin)).unwrap();
        store
    }

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_bootstrap_without_session_redirects_to_login() {
        let api = MockApi::new();
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/dashboard"));

        assert_eq!(outcome.state, GuardState::Redirected(Destination::Login));
        assert!(!outcome.context.is_authenticated());
        assert_eq!(api.calls(endpoints::VALIDATE_SESSION), 0);
    }

    #[test]
    fn test_bootstrap_validates_with_stored_id() {
        let api = MockApi::new().respond(endpoints::VALIDATE_SESSION, 200, "");
        let store = persisted("m-1", false);
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/qualifications"));

        assert_eq!(outcome.state, GuardState::Allowed);
        assert_eq!(outcome.context.identity.unwrap().id.as_str(), "m-1");
        assert_eq!(
            api.bodies(endpoints::VALIDATE_SESSION),
            vec![serde_json::json!({ "id": "m-1" })]
        );
        assert_eq!(
            api.methods(endpoints::VALIDATE_SESSION),
            vec![HttpMethod::Post]
        );
    }

    #[test]
    fn test_bootstrap_moves_valid_session_off_entry_paths() {
        for path in ["/", "/login"] {
            let api = MockApi::new().respond(endpoints::VALIDATE_SESSION, 200, "");
            let store = persisted("m-1", false);
            let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

            let outcome = block_on(manager.bootstrap(path));

            assert_eq!(outcome.state, GuardState::Redirected(Destination::Dashboard));
            assert!(outcome.context.is_authenticated());
            assert!(!store.is_empty());
        }
    }

    #[test]
    fn test_bootstrap_rejected_session_is_cleared() {
        let api = MockApi::new().respond(endpoints::VALIDATE_SESSION, 401, "");
        let store = persisted("m-1", false);
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/dashboard"));

        assert_eq!(outcome.state, GuardState::Redirected(Destination::Login));
        assert!(!outcome.context.is_authenticated());
        assert!(store.is_empty());
    }

    #[test]
    fn test_bootstrap_network_failure_counts_as_logged_out() {
        let api = MockApi::new().offline(endpoints::VALIDATE_SESSION);
        let store = persisted("m-1", false);
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/dashboard"));

        assert_eq!(outcome.state, GuardState::Redirected(Destination::Login));
        assert!(store.is_empty());
    }

    #[test]
    fn test_bootstrap_times_out_stalled_validation() {
        let api = MockApi::new().hang(endpoints::VALIDATE_SESSION);
        let store = persisted("m-1", false);
        let manager = SessionManager::new(&api, &store, &ExpiredTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/dashboard"));

        assert_eq!(outcome.state, GuardState::Redirected(Destination::Login));
        assert!(!outcome.context.is_authenticated());
        assert!(store.is_empty());
        assert_eq!(api.calls(endpoints::VALIDATE_SESSION), 1);
    }

    #[test]
    fn test_bootstrap_corrupt_blob_is_cleared() {
        let api = MockApi::new();
        let store = MemorySessionStore::with_raw("{\"member\":");
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/dashboard"));

        assert_eq!(outcome.state, GuardState::Redirected(Destination::Login));
        assert!(store.raw().is_none());
        assert_eq!(api.calls(endpoints::VALIDATE_SESSION), 0);
    }

    #[test]
    fn test_login_success_persists_and_populates() {
        let api = MockApi::new().respond(endpoints::LOGIN, 200, &login_body("m-42", false));
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let ctx = block_on(manager.login(&credentials("ada", "pw"))).unwrap();

        assert_eq!(ctx.identity.as_ref().unwrap().id.as_str(), "m-42");
        assert_eq!(ctx.subordinates.len(), 1);
        assert_eq!(store.load().unwrap(), Some(login_response("m-42", false)));
        assert_eq!(
            api.bodies(endpoints::LOGIN),
            vec![serde_json::json!({ "username": "ada", "password": "pw" })]
        );
    }

    #[test]
    fn test_login_accepts_backend_null_lists() {
        let api = MockApi::new().respond(endpoints::LOGIN, 200, &backend_login_body("m-7"));
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let ctx = block_on(manager.login(&credentials("ada", "pw"))).unwrap();

        let identity = ctx.identity.as_ref().unwrap();
        assert_eq!(identity.id.as_str(), "m-7");
        assert!(identity.supervisor_id.is_none());
        assert!(ctx.qualifications.is_empty());
        assert!(ctx.subordinates.is_empty());
        assert!(!store.is_empty());
    }

    #[test]
    fn test_bootstrap_rehydrates_backend_shaped_blob() {
        let api = MockApi::new().respond(endpoints::VALIDATE_SESSION, 200, "");
        let store = MemorySessionStore::with_raw(backend_login_body("m-7"));
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let outcome = block_on(manager.bootstrap("/dashboard"));

        assert_eq!(outcome.state, GuardState::Allowed);
        assert_eq!(outcome.context.identity.unwrap().id.as_str(), "m-7");
        assert!(outcome.context.subordinates.is_empty());
    }

    #[test]
    fn test_login_maps_statuses_to_messages() {
        let cases = [
            (401, LoginError::InvalidCredentials),
            (500, LoginError::Server),
            (503, LoginError::Server),
            (403, LoginError::Unexpected),
            (302, LoginError::Unexpected),
        ];

        for (status, expected) in cases {
            let api = MockApi::new().respond(endpoints::LOGIN, status, "");
            let store = MemorySessionStore::new();
            let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

            let result = block_on(manager.login(&credentials("ada", "pw")));

            assert_eq!(result, Err(expected), "status {status}");
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_login_unauthorized_shows_invalid_credentials() {
        let api = MockApi::new().respond(endpoints::LOGIN, 401, "");
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let mut ctx = ApplicationContext::empty();
        match block_on(manager.login(&credentials("ada", "wrong"))) {
            Ok(next) => ctx = next,
            Err(err) => assert_eq!(err.to_string(), "Invalid Credentials"),
        }

        assert!(ctx.identity.is_none());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_login_bad_body_or_network_is_unexpected() {
        let garbled = MockApi::new().respond(endpoints::LOGIN, 200, "<html>");
        let offline = MockApi::new().offline(endpoints::LOGIN);
        let store = MemorySessionStore::new();

        for api in [&garbled, &offline] {
            let manager = SessionManager::new(api, &store, &StoppedTimer, TIMEOUT);
            let result = block_on(manager.login(&credentials("ada", "pw")));
            assert_eq!(result, Err(LoginError::Unexpected));
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_login_requires_both_fields() {
        let api = MockApi::new();
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        assert_eq!(
            block_on(manager.login(&credentials("  ", "pw"))),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(
            block_on(manager.login(&credentials("ada", ""))),
            Err(LoginError::MissingCredentials)
        );
        assert_eq!(api.calls(endpoints::LOGIN), 0);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let api = MockApi::new();
        let store = persisted("m-1", false);
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        let first = manager.logout();
        assert_eq!(first, ApplicationContext::empty());
        assert!(store.is_empty());

        let second = manager.logout();
        assert_eq!(second, ApplicationContext::empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_notify_logout_swallows_failures() {
        let api = MockApi::new().offline(endpoints::LOGOUT);
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        block_on(manager.notify_logout());

        assert_eq!(api.methods(endpoints::LOGOUT), vec![HttpMethod::Get]);
    }

    #[test]
    fn test_admin_check_allows_on_success() {
        let api = MockApi::new().respond(endpoints::CHECK_ADMIN, 200, "");
        let store = MemorySessionStore::new();
        let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

        assert_eq!(block_on(manager.check_admin()), GuardState::Allowed);
    }

    #[test]
    fn test_admin_check_ignores_persisted_admin_claim() {
        for status in [401, 403, 404, 500] {
            let api = MockApi::new().respond(endpoints::CHECK_ADMIN, status, "");
            let store = persisted("m-1", true);
            let manager = SessionManager::new(&api, &store, &StoppedTimer, TIMEOUT);

            assert_eq!(
                block_on(manager.check_admin()),
                GuardState::Redirected(Destination::Dashboard),
                "status {status}"
            );
        }
    }

    #[test]
    fn test_admin_check_fails_closed_on_network_and_timeout() {
        let store = MemorySessionStore::new();

        let offline = MockApi::new().offline(endpoints::CHECK_ADMIN);
        let manager = SessionManager::new(&offline, &store, &StoppedTimer, TIMEOUT);
        assert_eq!(
            block_on(manager.check_admin()),
            GuardState::Redirected(Destination::Dashboard)
        );

        let stalled = MockApi::new().hang(endpoints::CHECK_ADMIN);
        let manager = SessionManager::new(&stalled, &store, &ExpiredTimer, TIMEOUT);
        assert_eq!(
            block_on(manager.check_admin()),
            GuardState::Redirected(Destination::Dashboard)
        );
    }
}
