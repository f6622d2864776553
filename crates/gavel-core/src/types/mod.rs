//! Core domain types.

mod question;
mod role;
mod server_url;
mod submission;

pub use question::{Limitations, Question, QuestionState};
pub use role::Role;
pub use server_url::ServerUrl;
pub use submission::{Submission, SubmissionState};
