//! Whoami command implementation.

use anyhow::Result;
use clap::Args;

use gavel_core::messages::Id;
use gavel_core::traits::Route;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub async fn run(_args: WhoamiArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Profile(String::new()));

    // An empty id asks for the caller's own profile.
    let profile = ctx.run(ctx.client.get_profile(&Id::new("")).await).await?;

    output::field("Username", &profile.username);
    output::field("Role", profile.role.as_str());
    output::field("Server", ctx.server.as_str());

    Ok(())
}
