//! gavel-core - Typed request layer and error recovery for the gavel
//! judge platform client.

pub mod credentials;
pub mod error;
pub mod messages;
pub mod outcome;
pub mod paging;
pub mod recovery;
pub mod traits;
pub mod types;

pub use credentials::{CredentialStore, Credentials};
pub use error::{Error, StatusCode, StatusError, TransportError};
pub use outcome::{Outcome, classify};
pub use paging::{Filter, Paged, PagedList, page_filters};
pub use recovery::{Notices, Recovery};
pub use traits::{Navigator, Route, Transport};
pub use types::{
    Limitations, Question, QuestionState, Role, ServerUrl, Submission, SubmissionState,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
