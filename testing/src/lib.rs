//! # eventos testing
//!
//! Testing utilities for the eventos workspace.
//!
//! This crate provides:
//! - Deterministic and recording doubles for environment collaborators
//! - A Given/When/Then harness for reducers
//! - Fixtures for the backend's wire types
//!
//! ## Example
//!
//! ```ignore
//! use eventos_testing::{MockTransport, fixtures};
//! use eventos_client::{ApiClient, Method};
//! use std::sync::Arc;
//!
//! #[tokio::test]
//! async fn loads_event() {
//!     let transport = Arc::new(MockTransport::new());
//!     transport.respond_ok(Method::Get, "api/v1/events/sbc/", fixtures::event_json("sbc"));
//!
//!     let api = ApiClient::new(transport.clone());
//!     let event = api.events().get_by_slug("sbc").await.unwrap();
//!     assert_eq!(event.slug, "sbc");
//! }
//! ```

use chrono::{DateTime, Utc};
use eventos_core::environment::Clock;

pub mod reducer_test;

/// Mock implementations of environment collaborators
pub mod mocks {
    use super::{Clock, DateTime, Utc};
    use async_trait::async_trait;
    use eventos_client::auth::{Authenticator, Credentials};
    use eventos_client::error::{ApiError, FieldErrors, ResponseBody, TransportError};
    use eventos_client::transport::{ApiRequest, Method, Transport};
    use eventos_client::types::User;
    use serde_json::Value;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time until moved with [`FixedClock::advance`].
    ///
    /// # Example
    ///
    /// ```
    /// use eventos_testing::mocks::FixedClock;
    /// use eventos_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2);
    /// ```
    #[derive(Debug)]
    pub struct FixedClock {
        time: Mutex<DateTime<Utc>>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self {
                time: Mutex::new(time),
            }
        }

        /// Move the clock forward
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn advance(&self, by: chrono::Duration) {
            let mut time = self.time.lock().unwrap();
            *time += by;
        }
    }

    impl Clock for FixedClock {
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        fn now(&self) -> DateTime<Utc> {
            *self.time.lock().unwrap()
        }
    }

    /// Create a default fixed clock for tests (2026-10-16 12:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2026-10-16T12:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    type Reply = Result<Value, TransportError>;

    /// Recording [`Transport`] with canned replies per method and path
    ///
    /// Replies for the same route are consumed in order; the last one is
    /// repeated. Unrouted requests fail with a bodiless 404.
    #[derive(Debug, Default)]
    pub struct MockTransport {
        replies: Mutex<HashMap<(Method, String), VecDeque<Reply>>>,
        requests: Mutex<Vec<ApiRequest>>,
        token: Mutex<Option<String>>,
    }

    impl MockTransport {
        /// Transport with no routes
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a reply for `method` + `path`
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn respond(&self, method: Method, path: &str, reply: Reply) -> &Self {
            self.replies
                .lock()
                .unwrap()
                .entry((method, path.to_string()))
                .or_default()
                .push_back(reply);
            self
        }

        /// Queue a successful JSON reply
        pub fn respond_ok(&self, method: Method, path: &str, body: Value) -> &Self {
            self.respond(method, path, Ok(body))
        }

        /// Queue an HTTP error reply with a JSON body
        pub fn respond_status(&self, method: Method, path: &str, status: u16, body: Value) -> &Self {
            self.respond(method, path, Err(status_error(status, path, body)))
        }

        /// Every request received, in order
        #[must_use]
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Paths of every request received, prefixed with the method
        #[must_use]
        pub fn request_log(&self) -> Vec<String> {
            self.requests()
                .iter()
                .map(|r| format!("{} {}", r.method.as_str(), r.path))
                .collect()
        }

        /// Bearer token currently installed
        #[must_use]
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn bearer_token(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
            self.requests.lock().unwrap().push(request.clone());

            let mut replies = self.replies.lock().unwrap();
            let queue = replies.get_mut(&(request.method, request.path.clone()));
            match queue {
                Some(queue) if queue.len() > 1 => queue.pop_front().unwrap(),
                Some(queue) if !queue.is_empty() => queue[0].clone(),
                _ => Err(TransportError::Status {
                    status: 404,
                    path: request.path,
                    body: ResponseBody::Empty,
                }),
            }
        }

        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        async fn set_bearer_token(&self, token: Option<String>) {
            *self.token.lock().unwrap() = token;
        }
    }

    /// A non-2xx transport error with a JSON body
    #[must_use]
    pub fn status_error(status: u16, path: &str, body: Value) -> TransportError {
        TransportError::Status {
            status,
            path: path.to_string(),
            body: ResponseBody::Json(body),
        }
    }

    /// In-memory [`Authenticator`] with a fixed set of accounts
    #[derive(Debug, Default)]
    pub struct MockAuthenticator {
        accounts: Mutex<HashMap<String, (String, User)>>,
        user: Mutex<Option<User>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl MockAuthenticator {
        /// Nobody logged in, no accounts
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Already logged in as `user`
        #[must_use]
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn logged_in(user: User) -> Self {
            let auth = Self::new().with_account("secret", user.clone());
            *auth.user.lock().unwrap() = Some(user);
            auth
        }

        /// Register an account that can log in with `password`
        #[must_use]
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn with_account(self, password: &str, user: User) -> Self {
            self.accounts
                .lock()
                .unwrap()
                .insert(user.email.clone(), (password.to_string(), user));
            self
        }

        /// Names of the methods called, in order
        #[must_use]
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait]
    impl Authenticator for MockAuthenticator {
        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        async fn current_user(&self) -> Option<User> {
            self.user.lock().unwrap().clone()
        }

        async fn fetch_user(&self) -> Result<Option<User>, ApiError> {
            self.record("fetch_user");
            Ok(self.current_user().await)
        }

        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        async fn login(&self, credentials: Credentials) -> Result<(), ApiError> {
            self.record("login");
            let account = self.accounts.lock().unwrap().get(&credentials.email).cloned();
            match account {
                Some((password, user)) if password == credentials.password => {
                    *self.user.lock().unwrap() = Some(user);
                    Ok(())
                },
                _ => {
                    let detail = "No active account found with the given credentials".to_string();
                    let mut fields = FieldErrors::new();
                    fields.insert("detail".to_string(), vec![detail.clone()]);
                    Err(ApiError::Validation {
                        message: detail,
                        fields,
                    })
                },
            }
        }

        async fn refresh(&self) -> Result<(), ApiError> {
            self.record("refresh");
            Ok(())
        }

        #[allow(clippy::unwrap_used)] // Test mock: mutex poisoning is a test failure
        async fn logout(&self) -> Result<(), ApiError> {
            self.record("logout");
            *self.user.lock().unwrap() = None;
            Ok(())
        }
    }
}

/// Wire-type fixtures
pub mod fixtures {
    use eventos_client::types::{Event, EventRegistration, User};
    use serde_json::{Value, json};

    /// Event JSON as the backend returns it
    #[must_use]
    pub fn event_json(slug: &str) -> Value {
        json!({
            "slug": slug,
            "name": "Congresso de Computação",
            "name_english": "Computing Congress",
            "starts_on": "2026-10-16T12:00:00Z",
            "ends_on": "2026-10-18T21:00:00Z",
            "has_activities": true,
            "has_tracks": false,
            "registration_types": [
                {"id": 1, "name": "Estudante", "name_english": "Student"},
                {"id": 2, "name": "Profissional", "name_english": "Professional"}
            ]
        })
    }

    /// User JSON as the backend returns it
    #[must_use]
    pub fn user_json() -> Value {
        json!({
            "public_id": "u-1",
            "first_name": "Ana",
            "last_name": "Lima",
            "email": "ana@example.com"
        })
    }

    /// Registration JSON for [`user_json`], shaped like the backend's detail
    /// response (no nested event)
    #[must_use]
    pub fn registration_json(id: i64) -> Value {
        json!({
            "id": id,
            "user": user_json(),
            "registration_type": {"id": 1, "name": "Estudante", "name_english": "Student"}
        })
    }

    /// Typed [`event_json`]
    ///
    /// # Panics
    ///
    /// Never, the fixture is well-formed.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn event(slug: &str) -> Event {
        serde_json::from_value(event_json(slug)).unwrap()
    }

    /// Typed [`user_json`]
    ///
    /// # Panics
    ///
    /// Never, the fixture is well-formed.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn user() -> User {
        serde_json::from_value(user_json()).unwrap()
    }

    /// Typed [`registration_json`]
    ///
    /// # Panics
    ///
    /// Never, the fixture is well-formed.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn registration(id: i64) -> EventRegistration {
        serde_json::from_value(registration_json(id)).unwrap()
    }
}

/// Install a test-friendly tracing subscriber once per process
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mocks::{FixedClock, MockAuthenticator, MockTransport, status_error, test_clock};
pub use reducer_test::{ReducerTest, assertions, run_effects};
