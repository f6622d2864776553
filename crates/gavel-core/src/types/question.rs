//! Question types and the question builder.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication state of a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionState {
    #[default]
    Unknown,
    Draft,
    Published,
}

impl fmt::Display for QuestionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuestionState::Unknown => "Unknown",
            QuestionState::Draft => "Draft",
            QuestionState::Published => "Published",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for QuestionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "draft" => Ok(QuestionState::Draft),
            "published" => Ok(QuestionState::Published),
            other => Err(format!("unknown question state: {}", other)),
        }
    }
}

/// Execution limits for solutions to a question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limitations {
    /// Wall-clock limit in milliseconds.
    pub duration_ms: u32,
    /// Memory limit in megabytes.
    pub memory_mb: u32,
}

/// A question as exchanged with the manager service.
///
/// `input` and `output` hold the judge data; the server strips them for
/// readers who do not own the question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub statement: String,
    pub limitations: Limitations,
    pub state: QuestionState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(default)]
    pub owner: String,
}

impl Question {
    /// Start a builder from the default template.
    pub fn builder() -> QuestionBuilder {
        QuestionBuilder::default()
    }

    /// Start a builder from an existing question, for edits.
    ///
    /// Fields not touched by the builder keep the values of `template`.
    pub fn rebuild(template: Question) -> QuestionBuilder {
        QuestionBuilder { question: template }
    }
}

/// Builder for [`Question`] messages.
///
/// One explicit setter per field: only fields whose setter is invoked are
/// changed, everything else stays at the template value. Setter order is
/// irrelevant for distinct fields.
#[derive(Debug, Default, Clone)]
pub struct QuestionBuilder {
    question: Question,
}

impl QuestionBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.question.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.question.title = title.into();
        self
    }

    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.question.statement = statement.into();
        self
    }

    pub fn limitations(mut self, limitations: Limitations) -> Self {
        self.question.limitations = limitations;
        self
    }

    pub fn state(mut self, state: QuestionState) -> Self {
        self.question.state = state;
        self
    }

    pub fn input(mut self, input: impl Into<String>) -> Self {
        self.question.input = Some(input.into());
        self
    }

    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.question.output = Some(output.into());
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.question.owner = owner.into();
        self
    }

    pub fn build(self) -> Question {
        self.question
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_only_named_fields() {
        let question = Question::builder()
            .title("Two Sum")
            .statement("Find two numbers that add up to a target.")
            .build();

        assert_eq!(question.title, "Two Sum");
        assert_eq!(question.statement, "Find two numbers that add up to a target.");
        // Untouched fields keep template defaults.
        assert_eq!(question.id, "");
        assert_eq!(question.state, QuestionState::Unknown);
        assert_eq!(question.limitations, Limitations::default());
        assert!(question.input.is_none());
    }

    #[test]
    fn builder_is_order_independent() {
        let limits = Limitations {
            duration_ms: 1000,
            memory_mb: 256,
        };

        let a = Question::builder()
            .title("t")
            .limitations(limits)
            .state(QuestionState::Draft)
            .build();
        let b = Question::builder()
            .state(QuestionState::Draft)
            .limitations(limits)
            .title("t")
            .build();

        assert_eq!(a, b);
    }

    #[test]
    fn rebuild_preserves_template_fields() {
        let original = Question::builder()
            .id("7")
            .title("old title")
            .statement("body")
            .owner("alice")
            .build();

        let edited = Question::rebuild(original.clone()).title("new title").build();

        assert_eq!(edited.title, "new title");
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.statement, original.statement);
        assert_eq!(edited.owner, original.owner);
    }
}
