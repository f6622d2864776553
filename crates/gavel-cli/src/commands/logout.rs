//! Logout command implementation.

use anyhow::{Context as _, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    storage::clear_session()
        .await
        .context("Failed to clear session")?;

    output::success("Logged out");
    Ok(())
}
