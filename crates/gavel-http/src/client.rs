//! The client facade.
//!
//! The single point every view calls: one method per remote capability.
//! The facade is stateless per call; it holds a transport and a credential
//! reader by composition and never mutates either. Callers own any store
//! mutation and any reload that must follow a successful mutation.

use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use gavel_core::credentials::CredentialStore;
use gavel_core::error::Error;
use gavel_core::messages::*;
use gavel_core::traits::Transport;
use gavel_core::types::ServerUrl;

use crate::transport::HttpTransport;

/// Typed facade over the manager service.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
    store: Arc<CredentialStore>,
}

impl Client {
    /// Create a client talking HTTP to `server`, reading credentials from
    /// `store`.
    pub fn new(server: ServerUrl, store: Arc<CredentialStore>) -> Self {
        Self::with_transport(Arc::new(HttpTransport::new(server)), store)
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(transport: Arc<dyn Transport>, store: Arc<CredentialStore>) -> Self {
        Self { transport, store }
    }

    /// The credential store this client reads from.
    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Unauthenticated call: never attaches a credential.
    async fn call<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp, Error>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let payload = encode(request)?;
        let response = self
            .transport
            .request(MANAGER_SERVICE, method, &payload, None)
            .await?;
        decode(&response)
    }

    /// Authenticated call: reads the store at call time and attaches
    /// whatever is there, absent included. Rejecting a missing or expired
    /// token is the server's responsibility; reacting is the recovery
    /// handler's.
    async fn call_authed<Req, Resp>(&self, method: &str, request: &Req) -> Result<Resp, Error>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let token = self.store.token();
        debug!(method, has_token = token.is_some(), "authenticated call");

        let payload = encode(request)?;
        let response = self
            .transport
            .request(MANAGER_SERVICE, method, &payload, token.as_deref())
            .await?;
        decode(&response)
    }

    #[instrument(skip(self, request))]
    pub async fn login(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, Error> {
        self.call(LOGIN, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn register(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, Error> {
        self.call(REGISTER, request).await
    }

    /// Fetch a profile. An empty id means the caller's own profile.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, request: &Id) -> Result<GetProfileResponse, Error> {
        self.call_authed(GET_PROFILE, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn get_profiles(
        &self,
        request: &GetProfilesRequest,
    ) -> Result<GetProfilesResponse, Error> {
        self.call_authed(GET_PROFILES, request).await
    }

    #[instrument(skip(self))]
    pub async fn get_stats(&self, request: &Id) -> Result<GetStatsResponse, Error> {
        self.call_authed(GET_STATS, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn change_role(&self, request: &ChangeRoleRequest) -> Result<Empty, Error> {
        self.call_authed(CHANGE_ROLE, request).await
    }

    #[instrument(skip(self))]
    pub async fn get_question(&self, request: &Id) -> Result<GetQuestionResponse, Error> {
        self.call_authed(GET_QUESTION, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn get_questions(
        &self,
        request: &GetQuestionsRequest,
    ) -> Result<GetQuestionsResponse, Error> {
        self.call_authed(GET_QUESTIONS, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn create_question(
        &self,
        request: &gavel_core::types::Question,
    ) -> Result<Id, Error> {
        self.call_authed(CREATE_QUESTION, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn edit_question(&self, request: &gavel_core::types::Question) -> Result<Empty, Error> {
        self.call_authed(EDIT_QUESTION, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn change_question_state(
        &self,
        request: &ChangeQuestionStateRequest,
    ) -> Result<Empty, Error> {
        self.call_authed(CHANGE_QUESTION_STATE, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: &SubmitRequest) -> Result<Empty, Error> {
        self.call_authed(SUBMIT, request).await
    }

    #[instrument(skip(self, request))]
    pub async fn get_submissions(
        &self,
        request: &GetSubmissionsRequest,
    ) -> Result<GetSubmissionsResponse, Error> {
        self.call_authed(GET_SUBMISSIONS, request).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}
