//! Change question state command implementation.

use anyhow::Result;
use clap::Args;

use gavel_core::messages::{ChangeQuestionStateRequest, Id};
use gavel_core::traits::Route;
use gavel_core::types::QuestionState;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ChangeStateArgs {
    /// Question id
    pub id: String,

    /// New state (draft or published)
    pub state: QuestionState,
}

pub async fn run(args: ChangeStateArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Question(args.id.clone()));

    let request = ChangeQuestionStateRequest {
        question_id: args.id.clone(),
        state: args.state,
    };
    ctx.run(ctx.client.change_question_state(&request).await).await?;
    output::success("State changed");

    // Reload: the displayed state comes from a fresh fetch.
    let reloaded = ctx
        .run(ctx.client.get_question(&Id::new(&args.id)).await)
        .await?;
    println!();
    output::question_detail(&reloaded.question);

    Ok(())
}
