//! Profile command implementation.

use anyhow::Result;
use clap::Args;

use gavel_core::messages::Id;
use gavel_core::traits::Route;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Username to look up
    pub username: String,
}

pub async fn run(args: ProfileArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator
        .set_current(Route::Profile(args.username.clone()));

    // Profile and stats are independent; fetch them concurrently. Each
    // result lands in its own output slice, so completion order does not
    // matter.
    let id = Id::new(&args.username);
    let (profile, stats) = tokio::join!(
        ctx.client.get_profile(&id),
        ctx.client.get_stats(&id),
    );

    let profile = ctx.run(profile).await?;
    let stats = ctx.run(stats).await?;

    output::field("Username", &profile.username);
    output::field("Role", profile.role.as_str());
    output::field("Tried", &stats.tried_questions.to_string());
    output::field("Solved", &stats.solved_questions.to_string());

    Ok(())
}
