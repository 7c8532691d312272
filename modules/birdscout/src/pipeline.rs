//! Collection of observations from both sources into the common shape.
//!
//! Hotspot failures are logged and skipped so one dead page never kills the
//! run; the eBird mapping is a pure function over already-fetched records.

use chrono::NaiveDate;
use tracing::{info, warn};

use birdscout_common::dates::DateWindow;
use birdscout_common::types::{GeoPoint, Hotspot, Observation, SourceTag};
use ebird_client::RecentObservation;

use crate::fetch::PageFetcher;
use crate::scrape;

/// Fetch and parse every hotspot page, sequentially. A failed fetch skips
/// that hotspot and continues with partial data.
pub async fn scrape_hotspots(
    fetcher: &dyn PageFetcher,
    hotspots: &[Hotspot],
    window: &DateWindow,
) -> Vec<Observation> {
    let mut observations = Vec::new();

    for hotspot in hotspots {
        let html = match fetcher.fetch(&hotspot.url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(
                    location = hotspot.location.as_str(),
                    url = hotspot.url.as_str(),
                    error = %e,
                    "Hotspot fetch failed, skipping"
                );
                continue;
            }
        };

        let records = scrape::extract_records(&html, window);
        info!(
            location = hotspot.location.as_str(),
            records = records.len(),
            "Hotspot scraped"
        );

        for rec in records {
            observations.push(Observation {
                scientific: rec.scientific,
                observed_name: rec.observed_name,
                date_key: rec.date_key,
                location: hotspot.location.clone(),
                source: SourceTag::Zoopicker,
                point: hotspot.point,
                count: 1,
            });
        }
    }

    observations
}

/// Map eBird API records into observations, re-keyed to the report date key.
/// Records outside the window (the API's `back` bound plus clock skew) and
/// records with unparseable dates are dropped.
pub fn ebird_to_observations(
    records: Vec<RecentObservation>,
    window: &DateWindow,
) -> Vec<Observation> {
    records
        .into_iter()
        .filter_map(|r| {
            let date_part = r.obs_dt.split_whitespace().next().unwrap_or("");
            let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
            let date_key = window.key_for_date(date)?.to_string();
            Some(Observation {
                scientific: r.sci_name,
                observed_name: r.com_name,
                date_key,
                location: r.loc_name,
                source: SourceTag::Ebird,
                point: Some(GeoPoint { lat: r.lat, lng: r.lng }),
                count: r.how_many.unwrap_or(1),
            })
        })
        .collect()
}
