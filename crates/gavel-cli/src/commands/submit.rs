//! Submit command implementation.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use gavel_core::messages::{GetSubmissionsRequest, SubmitRequest};
use gavel_core::paging::{Filter, page_filters};
use gavel_core::traits::Route;
use gavel_core::types::Submission;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Question id to submit against
    pub question_id: String,

    /// Source file to submit
    pub file: PathBuf,
}

pub async fn run(args: SubmitArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Submissions);

    let code = fs::read(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;

    let request = SubmitRequest {
        submission: Submission {
            question_id: args.question_id.clone(),
            code,
            ..Submission::default()
        },
    };
    ctx.run(ctx.client.submit(&request).await).await?;
    output::success("Submitted");

    // Reload: show the authoritative submission list for this question,
    // verdict included once the judge gets to it.
    let list_request = GetSubmissionsRequest {
        filters: page_filters(1, [Filter::question_id(args.question_id.clone())]),
    };
    let response = ctx
        .run(ctx.client.get_submissions(&list_request).await)
        .await?;

    println!();
    for submission in &response.submissions {
        output::submission_row(submission);
    }
    output::page_footer(1, response.total_pages);

    Ok(())
}
