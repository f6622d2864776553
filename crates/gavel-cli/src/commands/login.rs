//! Login command implementation.

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use gavel_core::credentials::Credentials;
use gavel_core::messages::AuthenticationRequest;
use gavel_core::types::ServerUrl;

use crate::context::Context;
use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Username to authenticate with
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,

    /// Manager server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub server: String,
}

pub async fn run(args: LoginArgs) -> Result<()> {
    let server = ServerUrl::new(&args.server).context("Invalid server URL")?;
    let ctx = Context::for_server(server.clone());

    eprintln!("{}", "Logging in...".dimmed());

    let request = AuthenticationRequest {
        username: args.username,
        password: args.password,
    };
    let response = ctx.run(ctx.client.login(&request).await).await?;

    // The login success path is the one place a new credential is written.
    let credentials = Credentials::new(response.value, response.role);
    ctx.store.set(credentials.clone(), storage::session_ttl());
    storage::save_session(&server, &credentials)
        .await
        .context("Failed to save session")?;

    output::success("Logged in");
    println!();
    output::field("Role", response.role.as_str());
    output::field("Server", server.as_str());

    Ok(())
}
