//! Console output formatter for sessions and rounds

use chorus_application::SubmitVotesOutput;
use chorus_domain::{ErrorKind, Round, RoundResult, Session, SessionStatus, rank_votes};
use colored::Colorize;
use serde::Serialize;

/// Formats voting results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a session with its full round history
    pub fn format_session(session: &Session, rounds: &[Round]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Session {}", session.id)));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            Self::status_label(session.status)
        ));
        if let Some(kind) = session.session_type {
            output.push_str(&format!("{} {}\n", "Type:".cyan().bold(), kind));
        }
        if let Some(configuration) = &session.configuration {
            output.push_str(&format!(
                "{} {}\n",
                "Voters:".cyan().bold(),
                configuration.voter_count
            ));
            let details = [
                ("Song:", &configuration.song),
                ("Role:", &configuration.role),
                ("Proposal:", &configuration.proposal),
            ];
            for (label, value) in details {
                if let Some(value) = value {
                    output.push_str(&format!("{} {}\n", label.cyan().bold(), value));
                }
            }
        }
        if !session.initial_candidates.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Candidates:".cyan().bold(),
                session.initial_candidates.join(", ")
            ));
        }

        if rounds.is_empty() {
            output.push_str(&format!("\n{}\n", "No rounds yet.".dimmed()));
        }
        for round in rounds {
            output.push_str(&Self::format_round(round));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format one round: candidates, ranked votes and result
    pub fn format_round(round: &Round) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!(
            "Round {} ({})",
            round.round_number, round.eval_mode
        )));
        output.push_str(&format!("{} {}\n", "Id:".dimmed(), round.id));

        if round.votes.is_empty() {
            output.push_str(&format!(
                "{} {}\n",
                "Candidates:".yellow().bold(),
                round.candidates.join(", ")
            ));
        } else {
            output.push_str(&format!("{}\n", "Votes:".yellow().bold()));
            for tally in rank_votes(&round.votes) {
                output.push_str(&format!("  {:>4}  {}\n", tally.count, tally.candidate_id));
            }
        }

        match &round.result {
            Some(result) => output.push_str(&Self::format_result(result)),
            None => output.push_str(&format!("{}\n", "Awaiting votes".dimmed())),
        }

        output
    }

    /// Format the outcome of a vote submission
    pub fn format_submission(submission: &SubmitVotesOutput) -> String {
        let mut output = Self::format_round(&submission.round);

        for warning in &submission.warnings {
            output.push_str(&format!("{} {}\n", "Warning:".yellow().bold(), warning));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Session is now".dimmed(),
            Self::status_label(submission.status)
        ));
        output
    }

    /// Format any entity as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Prefix for an error message, by failure class
    pub fn error_label(kind: Option<ErrorKind>) -> String {
        let label = match kind {
            Some(ErrorKind::Validation) => "Invalid input:",
            Some(ErrorKind::Sequencing) => "Out of sequence:",
            Some(ErrorKind::LogicConflict) => "Conflict:",
            Some(ErrorKind::NotFound) => "Not found:",
            None => "Error:",
        };
        label.red().bold().to_string()
    }

    fn format_result(result: &RoundResult) -> String {
        let verdict = if result.is_complete() {
            "Decided".green().bold()
        } else {
            "Another round needed".yellow().bold()
        };
        format!(
            "{} {}\n{}\n",
            "Result:".cyan().bold(),
            result.winners_summary(),
            Self::indent(&verdict.to_string(), "  ")
        )
    }

    fn status_label(status: SessionStatus) -> String {
        match status {
            SessionStatus::Complete => status.as_str().green().to_string(),
            SessionStatus::AwaitingVotes => status.as_str().yellow().to_string(),
            _ => status.as_str().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
