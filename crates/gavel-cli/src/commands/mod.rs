//! Command implementations.

pub mod change_role;
pub mod change_state;
pub mod create_question;
pub mod edit_question;
pub mod login;
pub mod logout;
pub mod profile;
pub mod profiles;
pub mod question;
pub mod questions;
pub mod register;
pub mod submissions;
pub mod submit;
pub mod whoami;

use anyhow::Result;

use crate::cli::Commands;

pub async fn handle(command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args).await,
        Commands::Register(args) => register::run(args).await,
        Commands::Logout(args) => logout::run(args).await,
        Commands::Whoami(args) => whoami::run(args).await,
        Commands::Profile(args) => profile::run(args).await,
        Commands::Profiles(args) => profiles::run(args).await,
        Commands::ChangeRole(args) => change_role::run(args).await,
        Commands::Questions(args) => questions::run(args).await,
        Commands::Question(args) => question::run(args).await,
        Commands::CreateQuestion(args) => create_question::run(args).await,
        Commands::EditQuestion(args) => edit_question::run(args).await,
        Commands::ChangeState(args) => change_state::run(args).await,
        Commands::Submit(args) => submit::run(args).await,
        Commands::Submissions(args) => submissions::run(args).await,
    }
}
