//! Register command implementation.

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
pub struct RegisterArgs {
    /// Username for the new account (4 characters minimum)
    #[arg(long)]
    pub username: String,

    /// Password for the new account (8 characters minimum)
    #[arg(long)]
    pub password: String,

    /// Manager server base URL
    #[arg(long, default_value = "http://localhost:8080")]
    pub server: String,
}

pub async fn run(args: RegisterArgs) -> Result<()> {
    let server = ServerUrl::new(&args.server).context("Invalid server URL")?;
    let ctx = Context::for_server(server.clone());

    eprintln!("{}", "Registering...".dimmed());

    let request = AuthenticationRequest {
        username: args.username,
        password: args.password,
    };
    let response = ctx.run(ctx.client.register(&request).await).await?;

    let credentials = Credentials::new(response.value, response.role);
    ctx.store.set(credentials.clone(), storage::session_ttl());
    storage::save_session(&server, &credentials)
        .await
        .context("Failed to save session")?;

    output::success("Registered and logged in");
    println!();
    output::field("Role", response.role.as_str());
    output::field("Server", server.as_str());

    Ok(())
}
