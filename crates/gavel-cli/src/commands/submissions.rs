//! Submission list command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use gavel_core::messages::GetSubmissionsRequest;
use gavel_core::paging::{Filter, Paged, PagedList, page_filters};
use gavel_core::traits::Route;
use gavel_core::types::{Submission, SubmissionState};

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct SubmissionsArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Only submissions against this question id
    #[arg(long)]
    pub question: Option<String>,

    /// Only submissions by this username
    #[arg(long)]
    pub username: Option<String>,

    /// Only submissions in this judging state
    #[arg(long)]
    pub state: Option<SubmissionState>,
}

pub async fn run(args: SubmissionsArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Submissions);

    let mut extra = Vec::new();
    if let Some(question) = &args.question {
        extra.push(Filter::question_id(question.clone()));
    }
    if let Some(username) = &args.username {
        extra.push(Filter::username(username.clone()));
    }
    if let Some(state) = args.state {
        extra.push(Filter::state(state));
    }

    let request = GetSubmissionsRequest {
        filters: page_filters(args.page, extra),
    };
    let response = ctx.run(ctx.client.get_submissions(&request).await).await?;

    let mut submissions: PagedList<Submission> = PagedList::new();
    submissions.apply(args.page, Paged::from(response));

    if submissions.items().is_empty() {
        eprintln!("{}", "No submissions on this page.".dimmed());
        return Ok(());
    }

    for submission in submissions.items() {
        output::submission_row(submission);
    }
    output::page_footer(submissions.page(), submissions.total_pages());

    Ok(())
}
