//! Create question command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use gavel_core::messages::GetQuestionsRequest;
use gavel_core::paging::{Filter, page_filters};
use gavel_core::traits::{Navigator, Route};
use gavel_core::types::{Limitations, Question, QuestionState};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct CreateQuestionArgs {
    /// Question title
    #[arg(long)]
    pub title: String,

    /// Problem statement text, or @path to read it from a file
    #[arg(long)]
    pub statement: String,

    /// Time limit in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub duration_ms: u32,

    /// Memory limit in megabytes
    #[arg(long, default_value_t = 256)]
    pub memory_mb: u32,

    /// File with the judge input
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// File with the expected output
    #[arg(long)]
    pub output: Option<PathBuf>,
}

fn text_arg(value: &str) -> Result<String> {
    match value.strip_prefix('@') {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {}", path)),
        None => Ok(value.to_string()),
    }
}

pub async fn run(args: CreateQuestionArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Questions);

    let mut builder = Question::builder()
        .title(args.title)
        .statement(text_arg(&args.statement)?)
        .limitations(Limitations {
            duration_ms: args.duration_ms,
            memory_mb: args.memory_mb,
        })
        .state(QuestionState::Draft);

    if let Some(path) = &args.input {
        let input = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        builder = builder.input(input);
    }
    if let Some(path) = &args.output {
        let expected = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        builder = builder.output(expected);
    }

    let question = builder.build();
    let id = ctx.run(ctx.client.create_question(&question).await).await?;

    output::success(&format!("Question {} created", id.value));

    // Reload: re-fetch the owned-questions list instead of patching the
    // new question into local state.
    ctx.navigator.reload();
    let request = GetQuestionsRequest {
        filters: page_filters(1, [Filter::owner(true)]),
    };
    let response = ctx.run(ctx.client.get_questions(&request).await).await?;

    println!();
    for question in &response.questions {
        output::question_row(question);
    }
    output::page_footer(1, response.total_pages);

    Ok(())
}
