//! Wire messages for the manager service.
//!
//! One request/response pair per remote capability, all versioned together
//! as one contract. Messages are encoded to opaque bytes immediately
//! before a call and discarded once it resolves; the byte encoding is a
//! private detail of this module.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::Error;
use crate::paging::Filter;
use crate::types::{Question, Role, Submission};

// ============================================================================
// Service and method names
// ============================================================================

/// The single logical service every capability is routed through.
pub const MANAGER_SERVICE: &str = "manager";

pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const GET_PROFILE: &str = "getProfile";
pub const GET_PROFILES: &str = "getProfiles";
pub const GET_STATS: &str = "getStats";
pub const CHANGE_ROLE: &str = "changeRole";
pub const GET_QUESTION: &str = "getQuestion";
pub const GET_QUESTIONS: &str = "getQuestions";
pub const CREATE_QUESTION: &str = "createQuestion";
pub const EDIT_QUESTION: &str = "editQuestion";
pub const CHANGE_QUESTION_STATE: &str = "changeQuestionState";
pub const SUBMIT: &str = "submit";
pub const GET_SUBMISSIONS: &str = "getSubmissions";

// ============================================================================
// Wire encoding
// ============================================================================

/// Encode a message to wire bytes.
///
/// Fails only with [`Error::Construction`]; such failures are programmer
/// errors and must never be swallowed.
pub fn encode<T: Serialize>(message: &T) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(message)?)
}

/// Decode a message from wire bytes.
pub fn decode<T: DeserializeOwned>(payload: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(payload)?)
}

// ============================================================================
// Request/response types
// ============================================================================

/// Request body for login and register.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    pub username: String,
    pub password: String,
}

/// Response from login and register.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    /// The bearer token for the new session.
    pub value: String,
    pub role: Role,
}

/// A bare identifier, used where a single id or username is the whole
/// request. An empty value on getProfile means the caller's own profile.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Id {
    pub value: String,
}

impl Id {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Empty response for mutations that return nothing.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Empty {}

/// Response from getProfile.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub username: String,
    pub role: Role,
}

/// Request body for getProfiles.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetProfilesRequest {
    pub filters: Vec<Filter>,
}

/// Response from getProfiles.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProfilesResponse {
    pub usernames: Vec<String>,
    pub total_pages: u64,
}

/// Response from getStats.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetStatsResponse {
    pub tried_questions: u64,
    pub solved_questions: u64,
}

/// Request body for changeRole.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    pub username: String,
    pub role: Role,
}

/// Response from getQuestion.
#[derive(Debug, Serialize, Deserialize)]
pub struct GetQuestionResponse {
    pub question: Question,
}

/// Request body for getQuestions.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetQuestionsRequest {
    pub filters: Vec<Filter>,
}

/// Response from getQuestions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuestionsResponse {
    pub questions: Vec<Question>,
    pub total_pages: u64,
}

/// Request body for changeQuestionState.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeQuestionStateRequest {
    pub question_id: String,
    pub state: crate::types::QuestionState,
}

/// Request body for submit.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitRequest {
    pub submission: Submission,
}

/// Request body for getSubmissions.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GetSubmissionsRequest {
    pub filters: Vec<Filter>,
}

/// Response from getSubmissions.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSubmissionsResponse {
    pub submissions: Vec<Submission>,
    pub total_pages: u64,
}

impl From<GetProfilesResponse> for crate::paging::Paged<String> {
    fn from(response: GetProfilesResponse) -> Self {
        Self::new(response.usernames, response.total_pages)
    }
}

impl From<GetQuestionsResponse> for crate::paging::Paged<Question> {
    fn from(response: GetQuestionsResponse) -> Self {
        Self::new(response.questions, response.total_pages)
    }
}

impl From<GetSubmissionsResponse> for crate::paging::Paged<Submission> {
    fn from(response: GetSubmissionsResponse) -> Self {
        Self::new(response.submissions, response.total_pages)
    }
}

/// Error body carried on non-2xx responses.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusBody {
    pub code: crate::error::StatusCode,
    #[serde(default)]
    pub message: Option<String>,
}
