use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use birdscout::cli::{Cli, Mode};
use birdscout::run;
use birdscout_common::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("birdscout=info".parse()?))
        .init();

    let cli = Cli::parse();
    info!(mode = ?cli.mode, "birdscout starting");

    let override_days = |mut config: Config| {
        if let Some(days) = cli.days {
            config.num_days = days;
        }
        config
    };

    match cli.mode {
        Mode::Generate => {
            let config = override_days(Config::generate_from_env()?);
            run::generate(&config, false).await?;
        }
        Mode::GenerateMap => {
            let config = override_days(Config::generate_from_env()?);
            run::generate(&config, true).await?;
        }
        Mode::CreateIssue => {
            let config = Config::publish_from_env()?;
            run::create_issue(&config, false).await?;
        }
        Mode::IssueWithMap => {
            let config = Config::publish_from_env()?;
            run::create_issue(&config, true).await?;
        }
        Mode::FetchTaxonomy => {
            let config = Config::taxonomy_from_env()?;
            run::fetch_taxonomy(&config).await?;
        }
    }

    Ok(())
}
