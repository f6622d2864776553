//! Output formatting helpers.

use colored::Colorize;

use gavel_core::types::{Question, Submission};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a page footer.
pub fn page_footer(page: u32, total_pages: u64) {
    eprintln!();
    eprintln!("{}", format!("page {} of {}", page, total_pages).dimmed());
}

/// Print a one-line question summary.
pub fn question_row(question: &Question) {
    println!(
        "{:>4}  {:<10} {}",
        question.id,
        question.state.to_string().dimmed(),
        question.title
    );
}

/// Print a question in full.
pub fn question_detail(question: &Question) {
    field("Id", &question.id);
    field("Title", &question.title);
    field("Owner", &question.owner);
    field("State", &question.state.to_string());
    field(
        "Limits",
        &format!(
            "{} ms / {} MB",
            question.limitations.duration_ms, question.limitations.memory_mb
        ),
    );
    println!();
    println!("{}", question.statement);
}

/// Print a one-line submission summary.
pub fn submission_row(submission: &Submission) {
    let state = submission.state.to_string();
    let state = match submission.state {
        gavel_core::SubmissionState::Ok => state.green(),
        s if s.is_final() => state.red(),
        _ => state.yellow(),
    };
    println!(
        "{:>4}  q{:<6} {:<10} {}",
        submission.id, submission.question_id, submission.owner, state
    );
}
