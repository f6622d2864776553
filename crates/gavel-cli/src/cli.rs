//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands;

/// CLI client for the gavel judge platform.
#[derive(Parser, Debug)]
#[command(name = "gavel")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(commands::login::LoginArgs),

    /// Register a new account
    Register(commands::register::RegisterArgs),

    /// Discard the stored session
    Logout(commands::logout::LogoutArgs),

    /// Display the active session's profile
    Whoami(commands::whoami::WhoamiArgs),

    /// Display a user's profile and statistics
    Profile(commands::profile::ProfileArgs),

    /// List user profiles page by page
    Profiles(commands::profiles::ProfilesArgs),

    /// Change a user's role
    ChangeRole(commands::change_role::ChangeRoleArgs),

    /// List questions page by page
    Questions(commands::questions::QuestionsArgs),

    /// Display a single question
    Question(commands::question::QuestionArgs),

    /// Author a new question
    CreateQuestion(commands::create_question::CreateQuestionArgs),

    /// Edit an owned question
    EditQuestion(commands::edit_question::EditQuestionArgs),

    /// Change a question's publication state
    ChangeState(commands::change_state::ChangeStateArgs),

    /// Submit a solution to a question
    Submit(commands::submit::SubmitArgs),

    /// List submissions page by page
    Submissions(commands::submissions::SubmissionsArgs),
}
