//! CLI command definitions

use chorus_domain::{SessionType, VoteTally};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Full,
    /// JSON of the returned session or round
    Json,
}

impl From<OutputFormat> for chorus_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => chorus_domain::OutputFormat::Full,
            OutputFormat::Json => chorus_domain::OutputFormat::Json,
        }
    }
}

/// Election type, as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElectionType {
    /// Soloist and understudy audition
    Solo,
    /// Officer election with "No confidence"
    Exec,
    /// Callback triage over fixed options
    Callback,
    /// Membership proposal, Yes / No
    Pandahood,
}

impl From<ElectionType> for SessionType {
    fn from(kind: ElectionType) -> Self {
        match kind {
            ElectionType::Solo => SessionType::Solo,
            ElectionType::Exec => SessionType::Exec,
            ElectionType::Callback => SessionType::Callback,
            ElectionType::Pandahood => SessionType::Pandahood,
        }
    }
}

/// CLI arguments for chorus-vote
#[derive(Parser, Debug)]
#[command(name = "chorus-vote")]
#[command(author, version, about = "Multi-round elections for auditions, officers and proposals")]
#[command(long_about = r#"
chorus-vote runs a voting session through as many rounds as it takes to reach
a decision. Each round proposes candidates, takes aggregated vote counts and
lets the election type's rules decide whether a winner is found.

Election types:
  solo       soloist + understudy (candidates: names)
  exec       officer role, "No confidence" never wins (candidates: names)
  callback   Definite / Maybe / No callback / Abstain (fixed options)
  pandahood  Yes / No membership proposal (fixed options)

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./chorus.toml       Project-level config
3. ~/.config/chorus-vote/config.toml   Global config

Example:
  chorus-vote create
  chorus-vote start <SESSION> --type solo --voters 20 Alice Bob Connor
  chorus-vote next <SESSION>
  chorus-vote vote <SESSION> <ROUND> Alice=10 Bob=8 Connor=2
  chorus-vote vote <SESSION> <ROUND> --ballots ballots.json
  chorus-vote finalize <SESSION>
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format (overrides [output].format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the JSON store (overrides [store].path)
    #[arg(long, value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty draft session
    Create,

    /// Configure a draft session and open it for rounds
    Start {
        /// Session id
        session: String,

        /// Election type
        #[arg(short = 't', long = "type", value_enum)]
        election_type: ElectionType,

        /// Number of eligible voters (defaults to [session].default_voter_count)
        #[arg(long, value_name = "N")]
        voters: Option<u32>,

        /// Song performed (solo, pandahood)
        #[arg(long)]
        song: Option<String>,

        /// Officer role (exec)
        #[arg(long)]
        role: Option<String>,

        /// Proposal text (pandahood)
        #[arg(long)]
        proposal: Option<String>,

        /// Seed candidates; optional for callback and pandahood
        candidates: Vec<String>,
    },

    /// Open the next round
    Next {
        /// Session id
        session: String,

        /// Candidates for this round; the election rules choose when omitted
        candidates: Vec<String>,
    },

    /// Submit votes for the open round
    Vote {
        /// Session id
        session: String,

        /// Round id
        round: String,

        /// Vote counts as CANDIDATE=COUNT
        #[arg(required_unless_present = "ballots", value_parser = parse_vote)]
        votes: Vec<VoteTally>,

        /// JSON file of individual ballots to tally instead of counts
        #[arg(long, value_name = "PATH", conflicts_with = "votes")]
        ballots: Option<PathBuf>,
    },

    /// Close the session
    Finalize {
        /// Session id
        session: String,
    },

    /// Show a session and its rounds
    Show {
        /// Session id
        session: String,
    },

    /// Show configuration file locations and the merged configuration
    ShowConfig,
}

/// Parse `CANDIDATE=COUNT`; the last `=` separates, so names may contain `=`
pub fn parse_vote(input: &str) -> Result<VoteTally, String> {
    let (candidate, count) = input
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CANDIDATE=COUNT, got '{}'", input))?;

    let candidate = candidate.trim();
    if candidate.is_empty() {
        return Err(format!("missing candidate name in '{}'", input));
    }

    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid vote count in '{}': {}", input, e))?;

    Ok(VoteTally::new(candidate, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_vote() {
        assert_eq!(parse_vote("Alice=10"), Ok(VoteTally::new("Alice", 10)));
        assert_eq!(
            parse_vote("Definite callback = 3"),
            Ok(VoteTally::new("Definite callback", 3))
        );
        assert_eq!(parse_vote("A=B=2"), Ok(VoteTally::new("A=B", 2)));
    }

    #[test]
    fn test_parse_vote_rejects_malformed_input() {
        assert!(parse_vote("Alice").is_err());
        assert!(parse_vote("=4").is_err());
        assert!(parse_vote("Alice=-1").is_err());
        assert!(parse_vote("Alice=many").is_err());
    }

    #[test]
    fn test_parse_start_command() {
        let cli = Cli::try_parse_from([
            "chorus-vote",
            "start",
            "s-1",
            "--type",
            "solo",
            "--voters",
            "20",
            "--song",
            "Africa",
            "Alice",
            "Bob",
        ])
        .unwrap();

        match cli.command {
            Command::Start {
                session,
                election_type,
                voters,
                song,
                candidates,
                ..
            } => {
                assert_eq!(session, "s-1");
                assert_eq!(election_type, ElectionType::Solo);
                assert_eq!(voters, Some(20));
                assert_eq!(song.as_deref(), Some("Africa"));
                assert_eq!(candidates, vec!["Alice", "Bob"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_vote_command_with_global_flags() {
        let cli = Cli::try_parse_from([
            "chorus-vote",
            "vote",
            "s-1",
            "r-1",
            "Yes=16",
            "No=4",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Vote { votes, .. } => {
                assert_eq!(votes, vec![VoteTally::new("Yes", 16), VoteTally::new("No", 4)]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_vote_requires_counts_or_ballots() {
        assert!(Cli::try_parse_from(["chorus-vote", "vote", "s-1", "r-1"]).is_err());

        let cli = Cli::try_parse_from([
            "chorus-vote",
            "vote",
            "s-1",
            "r-1",
            "--ballots",
            "ballots.json",
        ])
        .unwrap();
        match cli.command {
            Command::Vote { votes, ballots, .. } => {
                assert!(votes.is_empty());
                assert_eq!(ballots, Some(PathBuf::from("ballots.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_vote_rejects_counts_with_ballots() {
        assert!(
            Cli::try_parse_from([
                "chorus-vote",
                "vote",
                "s-1",
                "r-1",
                "Alice=3",
                "--ballots",
                "ballots.json",
            ])
            .is_err()
        );
    }
}
