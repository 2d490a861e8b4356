use super::config::ProxyvoteConfig;
use proxyvote::ProposalCatalog;

/// Render the agenda, one meeting per line.
pub fn format_catalog(catalog: &ProposalCatalog) -> String {
    let mut output = String::new();

    for (meeting, proposals) in catalog.meetings() {
        let proposals: Vec<&str> = proposals.iter().map(String::as_str).collect();
        output.push_str(&format!("{}: {}\n", meeting, proposals.join(", ")));
    }

    output
}

/// List meetings and their proposals
pub fn execute(config: &ProxyvoteConfig) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = config.catalog()?;

    println!("Meetings ({}):", catalog.len());
    print!("{}", format_catalog(&catalog));

    Ok(())
}
