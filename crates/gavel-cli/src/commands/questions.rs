//! Question list command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use gavel_core::messages::GetQuestionsRequest;
use gavel_core::paging::{Filter, Paged, PagedList, page_filters};
use gavel_core::traits::Route;
use gavel_core::types::Question;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct QuestionsArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Only questions owned by the current user
    #[arg(long)]
    pub mine: bool,
}

pub async fn run(args: QuestionsArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Questions);

    let extra = args.mine.then(|| Filter::owner(true));
    let request = GetQuestionsRequest {
        filters: page_filters(args.page, extra),
    };
    let response = ctx.run(ctx.client.get_questions(&request).await).await?;

    let mut questions: PagedList<Question> = PagedList::new();
    questions.apply(args.page, Paged::from(response));

    if questions.items().is_empty() {
        eprintln!("{}", "No questions on this page.".dimmed());
        return Ok(());
    }

    for question in questions.items() {
        output::question_row(question);
    }
    output::page_footer(questions.page(), questions.total_pages());

    Ok(())
}
