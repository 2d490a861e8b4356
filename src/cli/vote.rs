use super::config::ProxyvoteConfig;
use chrono::NaiveDate;
use proxyvote::{Vote, VoteProcessor, VoteResult, VoterRegistry};
use serde::Serialize;
use tracing::info;

/// Arguments of the `vote` command.
pub struct VoteArgs {
    pub shareholder: String,
    pub meeting: String,
    pub proposal: String,
    pub date: NaiveDate,
    pub record_date: Option<NaiveDate>,
    pub voted: Vec<String>,
    pub json: bool,
}

/// JSON report for `vote --json`.
#[derive(Debug, Serialize)]
pub struct VoteReport<'a> {
    pub vote: &'a Vote,
    pub current_date: NaiveDate,
    pub record_date: NaiveDate,
    pub result: &'a VoteResult,
    pub voters: Vec<&'a str>,
}

/// Evaluate one submission against a registry seeded from `--voted`.
///
/// Returns the result and the registry after processing.
pub fn evaluate(
    config: &ProxyvoteConfig,
    args: &VoteArgs,
) -> Result<(VoteResult, VoterRegistry, NaiveDate), Box<dyn std::error::Error>> {
    let processor = VoteProcessor::new(config.catalog()?);
    let record_date = args.record_date.unwrap_or(config.voting.record_date);
    let mut voters: VoterRegistry = args.voted.iter().map(String::as_str).collect();

    let vote = Vote::new(
        args.shareholder.as_str(),
        args.meeting.as_str(),
        args.proposal.as_str(),
    );
    let result = processor.process_vote(&vote, &mut voters, record_date, args.date)?;

    Ok((result, voters, record_date))
}

/// Evaluate one submission and print the outcome.
///
/// An invalid proposal is returned as an error so the process exits non-zero.
pub fn execute(config: &ProxyvoteConfig, args: VoteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let (result, voters, record_date) = evaluate(config, &args)?;

    info!(
        shareholder = %args.shareholder,
        meeting = %args.meeting,
        outcome = %result,
        "vote processed"
    );

    let vote = Vote::new(
        args.shareholder.as_str(),
        args.meeting.as_str(),
        args.proposal.as_str(),
    );

    if args.json {
        let report = VoteReport {
            vote: &vote,
            current_date: args.date,
            record_date,
            result: &result,
            voters: voters.sorted(),
        };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("Failed to serialize result: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    println!("Vote: {}", vote);
    println!("Record Date: {}", record_date);
    println!("Current Date: {}", args.date);
    println!("Result: {}", result);
    println!("Voters: {}", voters);

    Ok(())
}
