//! Mode orchestration: wiring config, loaders, fetchers, and renderers
//! together for each CLI mode.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing::{info, warn};

use birdscout_common::dates::DateWindow;
use birdscout_common::types::{GeoPoint, NameEntry};
use birdscout_common::Config;
use ebird_client::EbirdClient;
use github_client::GithubClient;

use crate::fetch::HttpFetcher;
use crate::{aggregate, map, pipeline, publish, report, sources, taxonomy};

const LIFE_LIST_FILE: &str = "ebird_world_life_list.csv";
const HOTSPOT_FILE: &str = "spot_zoopicker.csv";
const AVIBASE_FILE: &str = "Avibase_Tokyo.csv";

/// Today's UTC date stem shared by all artifacts of one run.
fn date_stem() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// The name table: the integrated taxonomy JSON when it exists, otherwise
/// the Avibase CSV export.
fn name_table(config: &Config) -> Result<HashMap<String, NameEntry>> {
    let json = config.data_dir.join(taxonomy::INTEGRATED_FILE);
    let path: PathBuf = if json.exists() {
        json
    } else {
        config.data_dir.join(AVIBASE_FILE)
    };
    sources::load_name_map(&path)
}

/// Generate the report (and optionally the map), write the artifacts, and
/// print the markdown to stdout.
pub async fn generate(config: &Config, with_map: bool) -> Result<()> {
    let window = DateWindow::ending(Local::now().date_naive(), config.num_days);
    let life_list = sources::load_life_list(&config.data_dir.join(LIFE_LIST_FILE))?;
    let names = name_table(config)?;
    let hotspots = sources::load_hotspots(&config.data_dir.join(HOTSPOT_FILE))?;
    info!(
        hotspots = hotspots.len(),
        life_list = life_list.len(),
        days = config.num_days,
        "Inputs loaded"
    );

    let fetcher = HttpFetcher::new();
    let mut observations = pipeline::scrape_hotspots(&fetcher, &hotspots, &window).await;

    let ebird = EbirdClient::new(&config.ebird_api_key);
    match ebird
        .recent_observations(config.center_lat, config.center_lng, config.num_days)
        .await
    {
        Ok(records) => observations.extend(pipeline::ebird_to_observations(records, &window)),
        Err(e) => warn!(error = %e, "eBird query failed, continuing with scraped data only"),
    }

    let (aggregate, stats) = aggregate::build(observations, &life_list);
    info!(
        accepted = stats.accepted,
        excluded = stats.excluded,
        "Aggregation complete"
    );

    let markdown = report::render(&aggregate, &names, config.num_days);
    let date_str = date_stem();
    publish::write_report(&config.export_dir, &date_str, &markdown)?;

    if with_map {
        let raw = map::markers_from_aggregate(&aggregate);
        if raw.is_empty() {
            info!("No located observations, skipping map");
        } else {
            let markers = map::cluster(raw, map::CLUSTER_THRESHOLD_DEG);
            let center = GeoPoint {
                lat: config.center_lat,
                lng: config.center_lng,
            };
            let png = publish::map_path(&config.export_dir, &date_str);
            map::render_png(&markers, center, &png, &format!("New species {date_str}"))?;
        }
    }

    println!("{markdown}");
    Ok(())
}

/// Open today's report as a GitHub issue. With `with_map`, the map artifact
/// must exist and its path is noted in the issue body (the issues API has no
/// attachment upload, so the file itself stays local).
pub async fn create_issue(config: &Config, with_map: bool) -> Result<()> {
    let date_str = date_stem();
    let md_path = publish::report_path(&config.export_dir, &date_str);
    let mut body = std::fs::read_to_string(&md_path).with_context(|| {
        format!(
            "Report {} not found, run --mode generate first",
            md_path.display()
        )
    })?;

    if with_map {
        let png = publish::map_path(&config.export_dir, &date_str);
        anyhow::ensure!(
            png.exists(),
            "Map {} not found, run --mode generate-map first",
            png.display()
        );
        body.push_str(&format!("\n\n地图文件：`{}`", png.display()));
    }

    let title = format!("每日报告 - {date_str}");
    let client = GithubClient::new(&config.github_token);
    client
        .create_issue(&config.github_repository, &title, &body)
        .await?;
    Ok(())
}

/// Download and integrate the eBird taxonomy into the data directory.
pub async fn fetch_taxonomy(config: &Config) -> Result<()> {
    let client = EbirdClient::new(&config.ebird_api_key);
    let path = taxonomy::fetch_and_integrate(&client, &config.data_dir).await?;
    info!(path = %path.display(), "Integrated taxonomy written");
    Ok(())
}
