//! Profile list command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use gavel_core::messages::GetProfilesRequest;
use gavel_core::paging::{Paged, PagedList, page_filters};
use gavel_core::traits::Route;

use crate::context::Context;
use crate::output;

#[derive(Args, Debug)]
pub struct ProfilesArgs {
    /// Page to fetch (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

pub async fn run(args: ProfilesArgs) -> Result<()> {
    let ctx = Context::load().await?;
    ctx.navigator.set_current(Route::Profiles);

    let request = GetProfilesRequest {
        filters: page_filters(args.page, []),
    };
    let response = ctx.run(ctx.client.get_profiles(&request).await).await?;

    let mut profiles: PagedList<String> = PagedList::new();
    profiles.apply(args.page, Paged::from(response));

    if profiles.items().is_empty() {
        eprintln!("{}", "No profiles on this page.".dimmed());
        return Ok(());
    }

    for username in profiles.items() {
        println!("{}", username);
    }
    output::page_footer(profiles.page(), profiles.total_pages());

    Ok(())
}
