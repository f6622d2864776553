//! Change role command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use gavel_core::messages::{ChangeRoleRequest, Id};
use gavel_core::types::Role;

use crate::context::Context;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct ChangeRoleArgs {
    /// Username whose role to change
    pub username: String,

    /// New role (member or admin)
    pub role: Role,
}

pub async fn run(args: ChangeRoleArgs) -> Result<()> {
    let ctx = Context::load().await?;

    let request = ChangeRoleRequest {
        username: args.username.clone(),
        role: args.role,
    };
    ctx.run(ctx.client.change_role(&request).await).await?;

    // Reload: the displayed role comes from a fresh fetch, never from the
    // request we just sent.
    let profile = ctx
        .run(ctx.client.get_profile(&Id::new(&args.username)).await)
        .await?;

    output::success("Role changed");
    output::field("Username", &profile.username);
    output::field("Role", profile.role.as_str());

    // A role change to the caller's own account updates the credential.
    let own = ctx.run(ctx.client.get_profile(&Id::new("")).await).await?;
    if own.username == profile.username {
        ctx.store.set_role(profile.role);
        if let Some(credentials) = ctx.store.get() {
            storage::save_session(&ctx.server, &credentials)
                .await
                .context("Failed to update stored session")?;
        }
    }

    Ok(())
}
