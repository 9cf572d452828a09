//! CLI entrypoint for chorus-vote
//!
//! This is the main binary that wires together all layers using
//! dependency injection. Each invocation runs one command against the
//! JSON file store and exits.

use anyhow::{Context, Result};
use chorus_application::{ServiceError, StartSessionInput, VotingService};
use chorus_domain::{ErrorKind, OutputFormat, RoundId, SessionId};
use chorus_infrastructure::{ConfigLoader, FileConfig, JsonFileSessionRepository, RandomShuffler};
use chorus_presentation::{Cli, Command, ConsoleFormatter, OutputConfig, parse_ballots};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let kind = error
                .downcast_ref::<ServiceError>()
                .and_then(ServiceError::kind);
            eprintln!("{} {:#}", ConsoleFormatter::error_label(kind), error);
            ExitCode::from(exit_code(kind))
        }
    }
}

/// Process exit status per failure class
fn exit_code(kind: Option<ErrorKind>) -> u8 {
    match kind {
        Some(ErrorKind::Validation) => 2,
        Some(ErrorKind::Sequencing) => 3,
        Some(ErrorKind::LogicConflict) => 4,
        Some(ErrorKind::NotFound) => 5,
        None => 1,
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    for issue in config.validate() {
        warn!("Configuration: {}", issue);
    }

    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        config.output.format,
        config.output.color,
    );
    output.apply_color();

    // === Dependency Injection ===
    let store_path = cli
        .store
        .clone()
        .unwrap_or_else(|| config.store.resolved_path());
    info!(store = %store_path.display(), "Using session store");

    let repository = Arc::new(JsonFileSessionRepository::new(store_path));
    let mut service = VotingService::new(repository);
    if config.session.shuffle_candidates {
        service = service.with_shuffler(Arc::new(RandomShuffler));
    }

    let json = output.format == OutputFormat::Json;

    match cli.command {
        Command::Create => {
            let session = service.create_session().await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&session));
            } else {
                println!("Created session {}", session.id);
            }
        }

        Command::Start {
            session,
            election_type,
            voters,
            song,
            role,
            proposal,
            candidates,
        } => {
            let voter_count = voters
                .or(config.session.default_voter_count)
                .context("--voters is required unless session.default_voter_count is set")?;

            let mut input = StartSessionInput::new(election_type.into(), voter_count)
                .with_candidates(candidates);
            input.song = song;
            input.role = role;
            input.proposal = proposal;

            let session = service.start_session(&SessionId::new(session), input).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&session));
            } else {
                println!("{}", ConsoleFormatter::format_session(&session, &[]));
            }
        }

        Command::Next {
            session,
            candidates,
        } => {
            let provided = (!candidates.is_empty()).then_some(candidates);
            let round = service
                .advance_to_next_round(&SessionId::new(session), provided)
                .await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&round));
            } else {
                println!("{}", ConsoleFormatter::format_round(&round));
            }
        }

        Command::Vote {
            session,
            round,
            votes,
            ballots,
        } => {
            let session = SessionId::new(session);
            let round = RoundId::new(round);
            let submission = match ballots {
                Some(path) => {
                    let contents = tokio::fs::read_to_string(&path)
                        .await
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    let ballots = parse_ballots(&contents)
                        .with_context(|| format!("Invalid ballot file {}", path.display()))?;
                    service.submit_ballots(&session, &round, ballots).await?
                }
                None => service.submit_votes(&session, &round, votes).await?,
            };
            if json {
                println!(
                    "{}",
                    ConsoleFormatter::format_json(&serde_json::json!({
                        "round": submission.round,
                        "warnings": submission.warnings,
                        "status": submission.status,
                    }))
                );
            } else {
                println!("{}", ConsoleFormatter::format_submission(&submission));
            }
        }

        Command::Finalize { session } => {
            let session = service.finalize_session(&SessionId::new(session)).await?;
            if json {
                println!("{}", ConsoleFormatter::format_json(&session));
            } else {
                println!("Session {} is {}", session.id, session.status);
            }
        }

        Command::Show { session } => {
            let id = SessionId::new(session);
            let session = service.get_session(&id).await?;
            let rounds = service.get_rounds(&id).await?;
            if json {
                println!(
                    "{}",
                    ConsoleFormatter::format_json(&serde_json::json!({
                        "session": session,
                        "rounds": rounds,
                    }))
                );
            } else {
                println!("{}", ConsoleFormatter::format_session(&session, &rounds));
            }
        }

        Command::ShowConfig => show_config(&config)?,
    }

    Ok(())
}

fn show_config(config: &FileConfig) -> Result<()> {
    for line in ConfigLoader::config_sources() {
        println!("{}", line);
    }
    println!();
    println!(
        "{}",
        toml::to_string_pretty(config).context("Failed to render configuration")?
    );
    Ok(())
}
