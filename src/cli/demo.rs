use super::config::ProxyvoteConfig;
use chrono::NaiveDate;
use proxyvote::{Vote, VoteError, VoteProcessor, VoteResult, VoterRegistry};

/// One narrated submission in the demo run.
pub struct Scenario {
    pub title: &'static str,
    pub shareholder: &'static str,
    pub meeting: &'static str,
    pub proposal: &'static str,
    /// (year, month, day) of the submission
    pub date: (i32, u32, u32),
}

/// Scenarios against meeting M1, in submission order.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        title: "New shareholder votes before record date",
        shareholder: "SH001",
        meeting: "M1",
        proposal: "P1",
        date: (2025, 1, 15),
    },
    Scenario {
        title: "Existing shareholder changes vote before record date",
        shareholder: "SH001",
        meeting: "M1",
        proposal: "P2",
        date: (2025, 1, 18),
    },
    Scenario {
        title: "Existing shareholder changes vote on record date",
        shareholder: "SH001",
        meeting: "M1",
        proposal: "P3",
        date: (2025, 1, 20),
    },
    Scenario {
        title: "New shareholder votes after record date",
        shareholder: "SH002",
        meeting: "M1",
        proposal: "P1",
        date: (2025, 1, 25),
    },
    Scenario {
        title: "Shareholder votes for invalid proposal",
        shareholder: "SH003",
        meeting: "M1",
        proposal: "INVALID",
        date: (2025, 1, 15),
    },
];

impl Scenario {
    pub fn vote(&self) -> Vote {
        Vote::new(self.shareholder, self.meeting, self.proposal)
    }

    pub fn current_date(&self) -> Result<NaiveDate, Box<dyn std::error::Error>> {
        let (y, m, d) = self.date;
        NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| format!("Invalid scenario date {}-{}-{}", y, m, d).into())
    }
}

/// Run every scenario against one registry and return the per-scenario outcomes.
pub fn run_scenarios(
    processor: &VoteProcessor,
    voters: &mut VoterRegistry,
    record_date: NaiveDate,
) -> Result<Vec<Result<VoteResult, VoteError>>, Box<dyn std::error::Error>> {
    let mut outcomes = Vec::with_capacity(SCENARIOS.len());

    for scenario in SCENARIOS {
        let current_date = scenario.current_date()?;
        outcomes.push(processor.process_vote(&scenario.vote(), voters, record_date, current_date));
    }

    Ok(outcomes)
}

/// Run the bundled scenarios and narrate each outcome.
///
/// The scenarios exercise meeting M1, so a configured agenda without it will
/// turn every scenario into an invalid-proposal error.
pub fn execute(
    config: &ProxyvoteConfig,
    record_date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let processor = VoteProcessor::new(config.catalog()?);
    let record_date = record_date.unwrap_or(config.voting.record_date);
    let mut voters = VoterRegistry::new();

    println!("=== Shareholder Vote Processing Demo ===");
    println!("Record Date: {}", record_date);
    println!();

    let outcomes = run_scenarios(&processor, &mut voters, record_date)?;

    for (scenario, outcome) in SCENARIOS.iter().zip(outcomes) {
        println!("--- {} ---", scenario.title);
        println!("Vote: {}", scenario.vote());
        println!("Current Date: {}", scenario.current_date()?);
        match outcome {
            Ok(result) => println!("Result: {}", result),
            Err(e) => println!("Error: {}", e),
        }
        println!();
    }

    println!("Final voters set: {}", voters);

    Ok(())
}
