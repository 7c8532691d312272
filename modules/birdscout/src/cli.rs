use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "birdscout", about = "Daily report of sightings missing from the life list")]
pub struct Cli {
    /// What to run this invocation.
    #[arg(long, value_enum)]
    pub mode: Mode,

    /// Override the sliding window length in days.
    #[arg(long)]
    pub days: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Scrape + query, aggregate, and write the markdown report.
    Generate,
    /// Like generate, plus a PNG scatter map of clustered markers.
    GenerateMap,
    /// Open today's report as a GitHub issue.
    CreateIssue,
    /// Open today's report as a GitHub issue, referencing the map artifact.
    IssueWithMap,
    /// Download the eBird taxonomy in three locales and write the merged
    /// name-translation table.
    FetchTaxonomy,
}
