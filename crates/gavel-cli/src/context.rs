//! Command context: the facade, store, and recovery handler wired together.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use anyhow::{Context as _, Result, anyhow};

use gavel_core::credentials::CredentialStore;
use gavel_core::error::Error;
use gavel_core::outcome::Outcome;
use gavel_core::recovery::{Notices, Recovery};
use gavel_core::types::ServerUrl;
use gavel_http::Client;

use crate::navigate::CliNavigator;
use crate::output;
use crate::session::storage;

/// Everything a command needs to talk to the manager service.
pub struct Context {
    pub client: Client,
    pub store: Arc<CredentialStore>,
    pub server: ServerUrl,
    pub navigator: Arc<CliNavigator>,
    notices: Arc<Notices>,
    recovery: Recovery,
}

impl Context {
    /// Build a context for an explicit server, with no stored session.
    pub fn for_server(server: ServerUrl) -> Self {
        let store = Arc::new(CredentialStore::new());
        Self::assemble(server, store)
    }

    /// Build a context from the stored session, hydrating the credential
    /// store with whatever is still valid on disk.
    pub async fn load() -> Result<Self> {
        let session = storage::load_session()
            .await?
            .context("No active session. Run 'gavel login' first.")?;

        let store = Arc::new(CredentialStore::new());
        if let Some((credentials, remaining)) = session.credentials {
            store.set(credentials, remaining);
        }

        Ok(Self::assemble(session.server, store))
    }

    fn assemble(server: ServerUrl, store: Arc<CredentialStore>) -> Self {
        let client = Client::new(server.clone(), store.clone());
        let navigator = Arc::new(CliNavigator::new());
        let notices = Arc::new(Notices::new());
        let recovery = Recovery::new(store.clone(), navigator.clone(), notices.clone());

        Self {
            client,
            store,
            server,
            navigator,
            notices,
            recovery,
        }
    }

    /// Route a call result through the shared recovery handler.
    ///
    /// Failures are classified exactly once; the terminal is the display
    /// surface, so a queued notice is printed and acknowledged while the
    /// handler waits for dismissal.
    pub async fn run<T>(&self, result: Result<T, Error>) -> Result<T> {
        match result {
            Ok(value) => Ok(value),
            Err(error) => Err(self.fail(error).await),
        }
    }

    async fn fail(&self, error: Error) -> anyhow::Error {
        let mut handled = std::pin::pin!(self.recovery.handle(error));

        let outcome = loop {
            tokio::select! {
                outcome = handled.as_mut() => break outcome,
                _ = tokio::time::sleep(StdDuration::from_millis(10)) => {
                    while let Some(message) = self.notices.front() {
                        output::error(&message);
                        self.notices.acknowledge();
                    }
                }
            }
        };

        match outcome {
            Outcome::AuthRequired => {
                // The in-memory credential is already cleared; drop the
                // stale session file as well.
                if let Err(e) = storage::clear_session().await {
                    tracing::warn!(error = %e, "failed to clear stored session");
                }
                anyhow!("session expired or rejected; run 'gavel login'")
            }
            Outcome::Forbidden => anyhow!("permission denied"),
            Outcome::NotFound => anyhow!("not found"),
            Outcome::Transient(message) => anyhow!(message),
        }
    }
}
