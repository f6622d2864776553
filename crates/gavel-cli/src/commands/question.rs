//! Question detail command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use gavel_core::messages::Id;
use gavel_core::traits::Route;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct QuestionArgs {
    /// Question id
    pub id: String,

    /// Also print the judge data, if the server returned it
    #[arg(long)]
    pub judge_data: bool,
}

pub async fn run(args: QuestionArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Question(args.id.clone()));

    let response = ctx.run(ctx.client.get_question(&Id::new(&args.id)).await).await?;
    let question = response.question;

    output::question_detail(&question);

    if args.judge_data {
        // The server strips judge data for non-owners.
        match (&question.input, &question.output) {
            (Some(input), Some(expected)) => {
                println!();
                output::field("Input", input);
                output::field("Output", expected);
            }
            _ => eprintln!("{}", "Judge data not visible for this question.".dimmed()),
        }
    }

    Ok(())
}
