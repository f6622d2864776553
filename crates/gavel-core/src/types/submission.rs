//! Submission types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Judging state of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    #[default]
    Unknown,
    Pending,
    Compile,
    Judging,
    Ok,
    Wrong,
    Time,
    Memory,
    Runtime,
    Failed,
}

impl SubmissionState {
    /// Returns true once the judge has produced a final verdict.
    pub fn is_final(self) -> bool {
        !matches!(
            self,
            SubmissionState::Unknown | SubmissionState::Pending | SubmissionState::Judging
        )
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionState::Unknown => "Unknown",
            SubmissionState::Pending => "Pending",
            SubmissionState::Compile => "Compile",
            SubmissionState::Judging => "Judging",
            SubmissionState::Ok => "Ok",
            SubmissionState::Wrong => "Wrong",
            SubmissionState::Time => "Time",
            SubmissionState::Memory => "Memory",
            SubmissionState::Runtime => "Runtime",
            SubmissionState::Failed => "Failed",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for SubmissionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(SubmissionState::Pending),
            "compile" => Ok(SubmissionState::Compile),
            "judging" => Ok(SubmissionState::Judging),
            "ok" => Ok(SubmissionState::Ok),
            "wrong" => Ok(SubmissionState::Wrong),
            "time" => Ok(SubmissionState::Time),
            "memory" => Ok(SubmissionState::Memory),
            "runtime" => Ok(SubmissionState::Runtime),
            "failed" => Ok(SubmissionState::Failed),
            other => Err(format!("unknown submission state: {}", other)),
        }
    }
}

/// A solution submitted against a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub id: String,
    pub question_id: String,
    #[serde(default)]
    pub owner: String,
    /// Submitted source bytes.
    #[serde(default)]
    pub code: Vec<u8>,
    #[serde(default)]
    pub state: SubmissionState,
}
