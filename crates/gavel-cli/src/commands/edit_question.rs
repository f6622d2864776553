//! Edit question command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use gavel_core::messages::Id;
use gavel_core::traits::Route;
use gavel_core::types::Question;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct EditQuestionArgs {
    /// Question id to edit
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New statement text
    #[arg(long)]
    pub statement: Option<String>,

    /// New time limit in milliseconds
    #[arg(long)]
    pub duration_ms: Option<u32>,

    /// New memory limit in megabytes
    #[arg(long)]
    pub memory_mb: Option<u32>,

    /// File with new judge input
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// File with new expected output
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: EditQuestionArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Question(args.id.clone()));

    // Start from the server's current version; only fields given on the
    // command line are changed, everything else keeps its stored value.
    let current = ctx
        .run(ctx.client.get_question(&Id::new(&args.id)).await)
        .await?
        .question;

    let mut limitations = current.limitations;
    if let Some(duration_ms) = args.duration_ms {
        limitations.duration_ms = duration_ms;
    }
    if let Some(memory_mb) = args.memory_mb {
        limitations.memory_mb = memory_mb;
    }

    let mut builder = Question::rebuild(current).limitations(limitations);
    if let Some(title) = args.title {
        builder = builder.title(title);
    }
    if let Some(statement) = args.statement {
        builder = builder.statement(statement);
    }
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
    ctx.run(ctx.client.edit_question(&question).await).await?;
    output::success("Question updated");

    // Reload: display the server's version, not our request.
    let reloaded = ctx
        .run(ctx.client.get_question(&Id::new(&args.id)).await)
        .await?;
    println!();
    output::question_detail(&reloaded.question);

    Ok(())
}
