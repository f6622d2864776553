//! The shared failure handler.
//!
//! Every remote-call failure passes through [`Recovery::handle`] exactly
//! once. The handler classifies the failure and drives the recovery the
//! classification demands: clearing credentials and redirecting to login,
//! redirecting to a static error view, or queuing a dismissible notice.
//! Call sites that catch and ignore failures instead of routing them here
//! are defects.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::credentials::CredentialStore;
use crate::error::Error;
use crate::outcome::{Outcome, classify};
use crate::traits::{Navigator, Route};

struct Notice {
    message: String,
    ack: oneshot::Sender<()>,
}

/// FIFO queue of user-visible messages awaiting acknowledgement.
///
/// The display side reads [`front`](Notices::front) and calls
/// [`acknowledge`](Notices::acknowledge) when the user dismisses the
/// message; one acknowledgement dismisses exactly the front notice and
/// resolves the `handle` call that queued it.
#[derive(Default)]
pub struct Notices {
    queue: Mutex<VecDeque<Notice>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a message; the returned receiver resolves on acknowledgement.
    pub fn push(&self, message: impl Into<String>) -> oneshot::Receiver<()> {
        let (ack, acked) = oneshot::channel();
        let notice = Notice {
            message: message.into(),
            ack,
        };
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(notice);
        }
        acked
    }

    /// The message currently awaiting acknowledgement, if any.
    pub fn front(&self) -> Option<String> {
        let queue = self.queue.lock().ok()?;
        queue.front().map(|n| n.message.clone())
    }

    /// Dismiss the front notice. Returns false when the queue is empty.
    pub fn acknowledge(&self) -> bool {
        let Ok(mut queue) = self.queue.lock() else {
            return false;
        };
        match queue.pop_front() {
            Some(notice) => {
                // The queueing side may have gone away; dismissal still counts.
                let _ = notice.ack.send(());
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The single recovery point for failed remote calls.
#[derive(Clone)]
pub struct Recovery {
    store: Arc<CredentialStore>,
    navigator: Arc<dyn Navigator>,
    notices: Arc<Notices>,
}

impl Recovery {
    pub fn new(
        store: Arc<CredentialStore>,
        navigator: Arc<dyn Navigator>,
        notices: Arc<Notices>,
    ) -> Self {
        Self {
            store,
            navigator,
            notices,
        }
    }

    /// The notice queue this handler feeds.
    pub fn notices(&self) -> &Arc<Notices> {
        &self.notices
    }

    /// Classify a failure and run its recovery.
    ///
    /// Auth failures silently clear the credential and redirect to login.
    /// Permission and lookup failures hard-redirect to the matching error
    /// view. Everything else queues a notice and resolves once the user
    /// acknowledges it; the triggering action is then complete, it is not
    /// retried.
    pub async fn handle(&self, error: Error) -> Outcome {
        let outcome = classify(&error);
        debug!(?outcome, %error, "remote call failed");

        match &outcome {
            Outcome::AuthRequired => {
                self.store.clear();
                self.navigator.navigate(Route::Login);
            }
            Outcome::Forbidden => {
                self.navigator.navigate(Route::Error403);
            }
            Outcome::NotFound => {
                self.navigator.navigate(Route::Error404);
            }
            Outcome::Transient(message) => {
                warn!(%message, "transient failure");
                let acked = self.notices.push(message.clone());
                let _ = acked.await;
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::Credentials;
    use crate::error::{StatusCode, StatusError};
    use crate::types::Role;
    use chrono::Duration;

    struct FakeNavigator {
        current: Mutex<Route>,
        visits: Mutex<Vec<Route>>,
    }

    impl FakeNavigator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                current: Mutex::new(Route::Questions),
                visits: Mutex::new(Vec::new()),
            })
        }

        fn visits(&self) -> Vec<Route> {
            self.visits.lock().unwrap().clone()
        }
    }

    impl Navigator for FakeNavigator {
        fn navigate(&self, route: Route) {
            *self.current.lock().unwrap() = route.clone();
            self.visits.lock().unwrap().push(route);
        }

        fn current(&self) -> Route {
            self.current.lock().unwrap().clone()
        }
    }

    fn recovery() -> (Recovery, Arc<CredentialStore>, Arc<FakeNavigator>) {
        let store = Arc::new(CredentialStore::new());
        let navigator = FakeNavigator::new();
        let recovery = Recovery::new(
            store.clone(),
            navigator.clone(),
            Arc::new(Notices::new()),
        );
        (recovery, store, navigator)
    }

    fn status_error(code: StatusCode) -> Error {
        Error::Status(StatusError::new(code, Some("rejected".into())))
    }

    #[tokio::test]
    async fn auth_failure_clears_credentials_and_redirects_to_login() {
        let (recovery, store, navigator) = recovery();
        store.set(Credentials::new("stale", Role::Member), Duration::hours(1));

        let outcome = recovery.handle(status_error(StatusCode::Unauthenticated)).await;

        assert_eq!(outcome, Outcome::AuthRequired);
        assert!(store.get().is_none());
        assert_eq!(navigator.visits(), vec![Route::Login]);
    }

    #[tokio::test]
    async fn forbidden_redirects_to_403() {
        let (recovery, _, navigator) = recovery();
        let outcome = recovery.handle(status_error(StatusCode::PermissionDenied)).await;

        assert_eq!(outcome, Outcome::Forbidden);
        assert_eq!(navigator.visits(), vec![Route::Error403]);
    }

    #[tokio::test]
    async fn not_found_redirects_to_404() {
        let (recovery, _, navigator) = recovery();
        let outcome = recovery.handle(status_error(StatusCode::NotFound)).await;

        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(navigator.visits(), vec![Route::Error404]);
    }

    #[tokio::test]
    async fn transient_resolves_only_after_acknowledgement() {
        let (recovery, _, navigator) = recovery();
        let notices = recovery.notices().clone();

        let handle = tokio::spawn({
            let recovery = recovery.clone();
            async move { recovery.handle(status_error(StatusCode::Internal)).await }
        });

        // Wait for the notice to appear, then dismiss it.
        while notices.is_empty() {
            tokio::task::yield_now().await;
        }
        assert_eq!(notices.front().unwrap(), "Internal: rejected");
        assert!(notices.acknowledge());

        let outcome = handle.await.unwrap();
        assert!(matches!(outcome, Outcome::Transient(_)));
        // No navigation for transient failures.
        assert!(navigator.visits().is_empty());
    }

    #[tokio::test]
    async fn notices_are_dismissed_front_first() {
        let notices = Notices::new();
        let first = notices.push("first");
        let second = notices.push("second");

        assert_eq!(notices.len(), 2);
        assert_eq!(notices.front().unwrap(), "first");

        assert!(notices.acknowledge());
        assert_eq!(notices.front().unwrap(), "second");
        assert!(first.await.is_ok());

        assert!(notices.acknowledge());
        assert!(second.await.is_ok());
        assert!(!notices.acknowledge());
    }
}
